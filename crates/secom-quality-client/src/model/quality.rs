// Quality inspection result model types

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::lot::{Lot, Operator};
use crate::constants::{CLASSIFICATION_FAIL, CLASSIFICATION_PASS};

/// Inspection classification, carried on the wire as an integer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum Classification {
    /// -1
    Pass,
    /// 1
    Fail,
    /// Any value the MES may introduce later
    Other(i32),
}

impl From<i32> for Classification {
    fn from(value: i32) -> Self {
        match value {
            CLASSIFICATION_PASS => Classification::Pass,
            CLASSIFICATION_FAIL => Classification::Fail,
            other => Classification::Other(other),
        }
    }
}

impl From<Classification> for i32 {
    fn from(value: Classification) -> Self {
        match value {
            Classification::Pass => CLASSIFICATION_PASS,
            Classification::Fail => CLASSIFICATION_FAIL,
            Classification::Other(v) => v,
        }
    }
}

/// Defect categories accepted by the defect-type query
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DefectType {
    Contamination,
    DimensionalOor,
    ElectricalFail,
    SurfaceDefect,
}

impl DefectType {
    pub const ALL: [DefectType; 4] = [
        DefectType::Contamination,
        DefectType::DimensionalOor,
        DefectType::ElectricalFail,
        DefectType::SurfaceDefect,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DefectType::Contamination => "contamination",
            DefectType::DimensionalOor => "dimensional_oor",
            DefectType::ElectricalFail => "electrical_fail",
            DefectType::SurfaceDefect => "surface_defect",
        }
    }
}

impl fmt::Display for DefectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DefectType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DefectType::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "unknown defect type '{}', expected one of: {}",
                    s,
                    DefectType::ALL.map(|d| d.as_str()).join(", ")
                )
            })
    }
}

/// Quality inspection result
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QualityResult {
    pub result_id: Option<i64>,
    pub lot: Option<Lot>,
    pub classification: Option<Classification>,
    pub test_timestamp_raw: Option<String>,
    pub test_datetime: Option<String>,
    /// Predicted risk between 0.0 and 1.0
    pub predicted_risk: Option<f64>,
    pub risk_score: Option<f64>,
    pub risk_factors: Option<String>,
    pub model_version: Option<String>,
    pub quality_score: Option<f64>,
    pub defect_type: Option<String>,
    pub defect_code: Option<String>,
    pub defect_location: Option<String>,
    pub inspector: Option<Operator>,
    pub notes: Option<String>,
    pub reviewer: Option<Operator>,
    pub reviewed_at: Option<String>,
    pub disposition: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl QualityResult {
    pub fn is_passed(&self) -> bool {
        self.classification == Some(Classification::Pass)
    }

    pub fn is_failed(&self) -> bool {
        self.classification == Some(Classification::Fail)
    }

    /// Strictly above the threshold; a missing risk counts as 0.0
    pub fn is_high_risk(&self, threshold: f64) -> bool {
        self.predicted_risk.unwrap_or(0.0) > threshold
    }

    pub fn has_defects(&self) -> bool {
        self.defect_type.is_some()
    }

    pub fn lot_number(&self) -> Option<&str> {
        self.lot.as_ref().and_then(|l| l.lot_number.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_from_wire() {
        let result: QualityResult =
            serde_json::from_str(r#"{"resultId": 1, "classification": -1}"#).unwrap();
        assert_eq!(result.classification, Some(Classification::Pass));
        assert!(result.is_passed());
        assert!(!result.is_failed());

        let result: QualityResult = serde_json::from_str(r#"{"classification": 1}"#).unwrap();
        assert!(result.is_failed());

        let result: QualityResult = serde_json::from_str(r#"{"classification": 0}"#).unwrap();
        assert_eq!(result.classification, Some(Classification::Other(0)));
    }

    #[test]
    fn test_classification_serializes_as_integer() {
        let result = QualityResult {
            classification: Some(Classification::Fail),
            ..Default::default()
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["classification"], serde_json::json!(1));
    }

    #[test]
    fn test_full_result_deserialization() {
        let json = r#"{
            "resultId": 42,
            "lot": {"lotId": 7, "lotNumber": "LOT-007", "status": "completed"},
            "classification": 1,
            "testDatetime": "2024-03-01T10:15:30",
            "predictedRisk": 0.82,
            "riskScore": 81.5,
            "modelVersion": "v2.1",
            "qualityScore": 64.0,
            "defectType": "electrical_fail",
            "defectCode": "EF-12",
            "inspector": {"operatorCode": "OP-9", "operatorName": "Kim"},
            "reviewer": null,
            "disposition": "scrap"
        }"#;

        let result: QualityResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.result_id, Some(42));
        assert_eq!(result.lot_number(), Some("LOT-007"));
        assert!(result.is_high_risk(0.7));
        assert!(result.has_defects());
        assert!(result.reviewer.is_none());
        assert_eq!(
            result.inspector.unwrap().operator_name.as_deref(),
            Some("Kim")
        );
    }

    #[test]
    fn test_high_risk_is_strict_and_defaults_to_zero() {
        let mut result = QualityResult {
            predicted_risk: Some(0.7),
            ..Default::default()
        };
        assert!(!result.is_high_risk(0.7));

        result.predicted_risk = Some(0.71);
        assert!(result.is_high_risk(0.7));

        result.predicted_risk = None;
        assert!(!result.is_high_risk(0.7));
        assert!(result.is_high_risk(-0.1));
    }

    #[test]
    fn test_defect_type_parse() {
        assert_eq!(
            "surface_defect".parse::<DefectType>().unwrap(),
            DefectType::SurfaceDefect
        );
        let err = "scratches".parse::<DefectType>().unwrap_err();
        assert!(err.contains("contamination, dimensional_oor, electrical_fail, surface_defect"));
    }
}
