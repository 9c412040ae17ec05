//! Quality skills
//!
//! One skill per quality API operation. Skill IDs match the operation names
//! so that an orchestrator can map a plan step straight onto an invocation.

use std::sync::Arc;

use async_trait::async_trait;
use secom_quality_client::{
    QualityClient,
    model::{DefectType, PageRequest},
};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::{
    model::{AgentSkill, ErrorResponseSpec},
    registry::SkillRegistry,
    skill::{Skill, SkillError, parse_arguments},
};

/// The quality operations exposed as skills
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QualitySkillKind {
    GetResultById,
    GetAllResults,
    GetPassedResults,
    GetResultByLotId,
    GetHighRiskResults,
    GetFailedResults,
    GetResultsByDefectType,
    GetQualitySummary,
    GetQualityStatistics,
    SafeGetResult,
}

impl QualitySkillKind {
    pub const ALL: [QualitySkillKind; 10] = [
        QualitySkillKind::GetResultById,
        QualitySkillKind::GetAllResults,
        QualitySkillKind::GetPassedResults,
        QualitySkillKind::GetResultByLotId,
        QualitySkillKind::GetHighRiskResults,
        QualitySkillKind::GetFailedResults,
        QualitySkillKind::GetResultsByDefectType,
        QualitySkillKind::GetQualitySummary,
        QualitySkillKind::GetQualityStatistics,
        QualitySkillKind::SafeGetResult,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            QualitySkillKind::GetResultById => "get_result_by_id",
            QualitySkillKind::GetAllResults => "get_all_results",
            QualitySkillKind::GetPassedResults => "get_passed_results",
            QualitySkillKind::GetResultByLotId => "get_result_by_lot_id",
            QualitySkillKind::GetHighRiskResults => "get_high_risk_results",
            QualitySkillKind::GetFailedResults => "get_failed_results",
            QualitySkillKind::GetResultsByDefectType => "get_results_by_defect_type",
            QualitySkillKind::GetQualitySummary => "get_quality_summary",
            QualitySkillKind::GetQualityStatistics => "get_quality_statistics",
            QualitySkillKind::SafeGetResult => "safe_get_result",
        }
    }
}

#[derive(Debug, Deserialize)]
struct ResultIdArgs {
    result_id: i64,
}

#[derive(Debug, Deserialize)]
struct LotIdArgs {
    lot_id: i64,
}

#[derive(Debug, Default, Deserialize)]
struct PageArgs {
    #[serde(default)]
    page: Option<u32>,
    #[serde(default)]
    size: Option<u32>,
}

impl From<PageArgs> for PageRequest {
    fn from(args: PageArgs) -> Self {
        PageRequest {
            page: args.page,
            size: args.size,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ThresholdArgs {
    #[serde(default)]
    threshold: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct DefectTypeArgs {
    defect_type: String,
}

/// A quality operation bound to a client
pub struct QualitySkill {
    kind: QualitySkillKind,
    client: Arc<QualityClient>,
}

impl QualitySkill {
    pub fn new(kind: QualitySkillKind, client: Arc<QualityClient>) -> Self {
        Self { kind, client }
    }
}

#[async_trait]
impl Skill for QualitySkill {
    fn descriptor(&self) -> AgentSkill {
        describe(self.kind, self.client.high_risk_threshold())
    }

    async fn invoke(&self, arguments: Value) -> Result<Value, SkillError> {
        let client = &self.client;

        let value = match self.kind {
            QualitySkillKind::GetResultById => {
                let args: ResultIdArgs = parse_arguments(arguments)?;
                serde_json::to_value(client.get_result_by_id(args.result_id).await?)?
            }
            QualitySkillKind::GetAllResults => {
                let args: PageArgs = parse_arguments(arguments)?;
                serde_json::to_value(client.get_all_results(args.into()).await?)?
            }
            QualitySkillKind::GetPassedResults => {
                let args: PageArgs = parse_arguments(arguments)?;
                serde_json::to_value(client.get_passed_results(args.into()).await?)?
            }
            QualitySkillKind::GetResultByLotId => {
                let args: LotIdArgs = parse_arguments(arguments)?;
                serde_json::to_value(client.get_result_by_lot_id(args.lot_id).await?)?
            }
            QualitySkillKind::GetHighRiskResults => {
                let args: ThresholdArgs = parse_arguments(arguments)?;
                serde_json::to_value(client.get_high_risk_results(args.threshold).await?)?
            }
            QualitySkillKind::GetFailedResults => {
                let args: PageArgs = parse_arguments(arguments)?;
                serde_json::to_value(client.get_failed_results(args.into()).await?)?
            }
            QualitySkillKind::GetResultsByDefectType => {
                let args: DefectTypeArgs = parse_arguments(arguments)?;
                let defect_type: DefectType = args
                    .defect_type
                    .parse()
                    .map_err(SkillError::InvalidArguments)?;
                serde_json::to_value(client.get_results_by_defect_type(defect_type).await?)?
            }
            QualitySkillKind::GetQualitySummary => {
                let args: ResultIdArgs = parse_arguments(arguments)?;
                serde_json::to_value(client.get_quality_summary(args.result_id).await?)?
            }
            QualitySkillKind::GetQualityStatistics => {
                serde_json::to_value(client.get_quality_statistics().await?)?
            }
            QualitySkillKind::SafeGetResult => {
                let args: ResultIdArgs = parse_arguments(arguments)?;
                serde_json::to_value(client.safe_get_result(args.result_id).await?)?
            }
        };

        Ok(value)
    }
}

/// Register every quality skill against `client`
pub fn register_quality_skills(
    registry: &SkillRegistry,
    client: Arc<QualityClient>,
) -> Result<(), SkillError> {
    for kind in QualitySkillKind::ALL {
        registry.register(Arc::new(QualitySkill::new(kind, client.clone())))?;
    }
    Ok(())
}

// =============================================================================
// Skill descriptors
// =============================================================================

fn describe(kind: QualitySkillKind, high_risk_threshold: f64) -> AgentSkill {
    let id = kind.id().to_string();

    match kind {
        QualitySkillKind::GetResultById => AgentSkill {
            id,
            name: "Get Quality Result by ID".to_string(),
            description: "Retrieves detailed information about a specific quality inspection \
                          result using its unique result ID, including inspection details, \
                          defect information and predicted risk."
                .to_string(),
            capabilities: strings(&[
                "Fetch individual quality inspection records",
                "Validate quality result existence",
                "Retrieve detailed inspection metrics",
            ]),
            tags: strings(&["quality", "lookup"]),
            examples: strings(&[r#"{"result_id": 1}"#]),
            input_schema: id_schema("result_id", "Unique identifier for the quality result"),
            output_schema: quality_result_schema(),
            error_responses: vec![
                ErrorResponseSpec::new(404, "Quality result not found"),
                ErrorResponseSpec::new(500, "Internal server error"),
            ],
        },
        QualitySkillKind::GetAllResults => AgentSkill {
            id,
            name: "Get All Quality Results".to_string(),
            description: "Retrieves a paginated list of all quality inspection results for \
                          analysis and reporting."
                .to_string(),
            capabilities: strings(&[
                "List all quality inspection results",
                "Paginate through large result sets",
                "Generate quality reports",
            ]),
            tags: strings(&["quality", "list"]),
            examples: strings(&["{}", r#"{"page": 1, "size": 50}"#]),
            input_schema: page_input_schema(),
            output_schema: page_schema("Paginated response containing quality results"),
            error_responses: vec![ErrorResponseSpec::new(500, "Internal server error")],
        },
        QualitySkillKind::GetPassedResults => AgentSkill {
            id,
            name: "Get Passed Quality Results".to_string(),
            description: "Retrieves quality inspection results where classification = -1 (Pass). \
                          Useful for pass-rate and compliance reports."
                .to_string(),
            capabilities: strings(&[
                "Filter quality results by passed status",
                "Generate pass rate reports",
            ]),
            tags: strings(&["quality", "list", "pass"]),
            examples: strings(&["{}"]),
            input_schema: page_input_schema(),
            output_schema: page_schema("Paginated response containing passed quality results"),
            error_responses: vec![ErrorResponseSpec::new(500, "Internal server error")],
        },
        QualitySkillKind::GetResultByLotId => AgentSkill {
            id,
            name: "Get Quality Result by Lot ID".to_string(),
            description: "Retrieves the quality inspection result associated with a specific \
                          production lot."
                .to_string(),
            capabilities: strings(&[
                "Look up quality results by lot identifier",
                "Trace lot quality history",
            ]),
            tags: strings(&["quality", "lot", "lookup"]),
            examples: strings(&[r#"{"lot_id": 1}"#]),
            input_schema: id_schema("lot_id", "Unique identifier for the lot"),
            output_schema: quality_result_schema(),
            error_responses: vec![
                ErrorResponseSpec::new(404, "Quality result for specified lot not found"),
                ErrorResponseSpec::new(500, "Internal server error"),
            ],
        },
        QualitySkillKind::GetHighRiskResults => AgentSkill {
            id,
            name: "Get High Risk Quality Results".to_string(),
            description: format!(
                "Retrieves quality inspection results whose predicted risk is above a threshold \
                 (default {}). Identifies lots that need immediate attention.",
                high_risk_threshold
            ),
            capabilities: strings(&[
                "Filter quality results by risk threshold",
                "Support risk management workflows",
                "Identify critical quality issues",
            ]),
            tags: strings(&["quality", "risk"]),
            examples: strings(&["{}", r#"{"threshold": 0.8}"#]),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "threshold": {
                        "type": "number",
                        "format": "float",
                        "description": "Risk threshold (0.0 to 1.0)",
                        "default": high_risk_threshold,
                        "minimum": 0.0,
                        "maximum": 1.0
                    }
                }
            }),
            output_schema: json!({
                "type": "array",
                "description": "Quality results with predicted risk above the threshold",
                "items": quality_result_schema()
            }),
            error_responses: vec![
                ErrorResponseSpec::new(400, "Threshold outside 0.0 to 1.0"),
                ErrorResponseSpec::new(500, "Internal server error"),
            ],
        },
        QualitySkillKind::GetFailedResults => AgentSkill {
            id,
            name: "Get Failed Quality Results".to_string(),
            description: "Retrieves quality inspection results where classification = 1 (Fail) \
                          for failure and root cause analysis."
                .to_string(),
            capabilities: strings(&[
                "Filter quality results by failed status",
                "Support failure analysis workflows",
                "Enable root cause analysis",
            ]),
            tags: strings(&["quality", "list", "fail"]),
            examples: strings(&["{}"]),
            input_schema: page_input_schema(),
            output_schema: page_schema("Paginated response containing failed quality results"),
            error_responses: vec![ErrorResponseSpec::new(500, "Internal server error")],
        },
        QualitySkillKind::GetResultsByDefectType => AgentSkill {
            id,
            name: "Get Quality Results by Defect Type".to_string(),
            description: "Retrieves all quality inspection results with a specific defect type."
                .to_string(),
            capabilities: strings(&[
                "Filter quality results by defect type",
                "Support defect trend analysis",
                "Identify defect patterns",
            ]),
            tags: strings(&["quality", "defect"]),
            examples: strings(&[r#"{"defect_type": "electrical_fail"}"#]),
            input_schema: json!({
                "type": "object",
                "required": ["defect_type"],
                "properties": {
                    "defect_type": {
                        "type": "string",
                        "description": "Type of defect to filter by",
                        "enum": DefectType::ALL.map(|d| d.as_str()),
                        "example": "electrical_fail"
                    }
                }
            }),
            output_schema: json!({
                "type": "array",
                "description": "Quality results with the requested defect type",
                "items": quality_result_schema()
            }),
            error_responses: vec![
                ErrorResponseSpec::new(400, "Unknown defect type"),
                ErrorResponseSpec::new(404, "No results found for specified defect type"),
                ErrorResponseSpec::new(500, "Internal server error"),
            ],
        },
        QualitySkillKind::GetQualitySummary => AgentSkill {
            id,
            name: "Get Comprehensive Quality Summary".to_string(),
            description: "Retrieves a quality result together with derived pass, risk and \
                          defect indicators."
                .to_string(),
            capabilities: strings(&[
                "Generate comprehensive quality profiles",
                "Enable holistic quality assessment",
            ]),
            tags: strings(&["quality", "summary"]),
            examples: strings(&[r#"{"result_id": 1}"#]),
            input_schema: id_schema("result_id", "The unique identifier of the quality result"),
            output_schema: json!({
                "type": "object",
                "properties": {
                    "result": quality_result_schema(),
                    "is_passed": {"type": "boolean", "description": "classification = -1"},
                    "is_high_risk": {
                        "type": "boolean",
                        "description": format!("predictedRisk > {}", high_risk_threshold)
                    },
                    "has_defects": {"type": "boolean", "description": "defectType is set"},
                    "summary_generated_at": {"type": "string", "format": "date-time"}
                }
            }),
            error_responses: vec![
                ErrorResponseSpec::new(404, "Quality result with specified ID not found"),
                ErrorResponseSpec::new(500, "Internal server error"),
            ],
        },
        QualitySkillKind::GetQualityStatistics => AgentSkill {
            id,
            name: "Get Quality Statistics".to_string(),
            description: "Calculates aggregate quality statistics: pass/fail counts, pass rate, \
                          high risk count and average quality score."
                .to_string(),
            capabilities: strings(&[
                "Calculate quality KPIs",
                "Support quality dashboards",
            ]),
            tags: strings(&["quality", "statistics"]),
            examples: strings(&["{}"]),
            input_schema: json!({"type": "object", "properties": {}}),
            output_schema: json!({
                "type": "object",
                "properties": {
                    "total_results": {"type": "integer"},
                    "passed_count": {"type": "integer"},
                    "failed_count": {"type": "integer"},
                    "high_risk_count": {"type": "integer"},
                    "pass_rate": {"type": "number", "format": "float"},
                    "average_quality_score": {"type": "number", "format": "float"},
                    "statistics_generated_at": {"type": "string", "format": "date-time"}
                }
            }),
            error_responses: vec![ErrorResponseSpec::new(500, "Internal server error")],
        },
        QualitySkillKind::SafeGetResult => AgentSkill {
            id,
            name: "Safely Get Quality Result".to_string(),
            description: "Retrieves a quality result by ID, returning null instead of an error \
                          when the result does not exist or the API is unreachable."
                .to_string(),
            capabilities: strings(&["Fetch quality records without failing on absence"]),
            tags: strings(&["quality", "lookup"]),
            examples: strings(&[r#"{"result_id": 999}"#]),
            input_schema: id_schema("result_id", "The unique identifier of the quality result"),
            output_schema: json!({
                "oneOf": [quality_result_schema(), {"type": "null"}]
            }),
            error_responses: vec![ErrorResponseSpec::new(500, "Internal server error")],
        },
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn id_schema(field: &str, description: &str) -> Value {
    json!({
        "type": "object",
        "required": [field],
        "properties": {
            field: {
                "type": "integer",
                "format": "int64",
                "description": description,
                "example": 1
            }
        }
    })
}

fn page_input_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "page": {
                "type": "integer",
                "format": "int32",
                "description": "Page number for pagination (0-based index)",
                "default": 0,
                "minimum": 0
            },
            "size": {
                "type": "integer",
                "format": "int32",
                "description": "Number of results per page",
                "default": 20,
                "minimum": 0
            }
        }
    })
}

fn page_schema(description: &str) -> Value {
    json!({
        "type": "object",
        "description": description,
        "properties": {
            "totalPages": {"type": "integer", "format": "int32"},
            "totalElements": {"type": "integer", "format": "int64"},
            "size": {"type": "integer", "format": "int32"},
            "number": {"type": "integer", "format": "int32", "description": "Current page (0-based)"},
            "content": {"type": "array", "items": quality_result_schema()},
            "numberOfElements": {"type": "integer", "format": "int32"},
            "first": {"type": "boolean"},
            "last": {"type": "boolean"},
            "empty": {"type": "boolean"}
        }
    })
}

fn quality_result_schema() -> Value {
    json!({
        "type": "object",
        "description": "Quality inspection result",
        "properties": {
            "resultId": {"type": "integer", "format": "int64"},
            "lot": {
                "type": "object",
                "description": "Lot with lotId, lotNumber, productType, equipment, operator, shift, status"
            },
            "classification": {"type": "integer", "description": "-1 = Pass, 1 = Fail"},
            "testTimestampRaw": {"type": "string"},
            "testDatetime": {"type": "string", "format": "date-time"},
            "predictedRisk": {"type": "number", "format": "float", "description": "0.0 to 1.0"},
            "riskScore": {"type": "number", "format": "float"},
            "riskFactors": {"type": "string"},
            "modelVersion": {"type": "string"},
            "qualityScore": {"type": "number", "format": "float"},
            "defectType": {
                "type": "string",
                "description": "contamination, dimensional_oor, electrical_fail, surface_defect"
            },
            "defectCode": {"type": "string"},
            "defectLocation": {"type": "string"},
            "inspector": {"type": "object", "description": "Inspector operator"},
            "notes": {"type": "string"},
            "reviewer": {"type": "object", "description": "Reviewer operator"},
            "reviewedAt": {"type": "string", "format": "date-time"},
            "disposition": {"type": "string"},
            "createdAt": {"type": "string", "format": "date-time"},
            "updatedAt": {"type": "string", "format": "date-time"}
        }
    })
}
