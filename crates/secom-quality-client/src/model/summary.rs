// Derived views computed from quality results

use serde::{Deserialize, Serialize};

use super::{common::Page, quality::QualityResult};

/// A quality result together with the flags an agent usually asks about
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QualitySummary {
    pub result: QualityResult,
    pub is_passed: bool,
    pub is_high_risk: bool,
    pub has_defects: bool,
    pub summary_generated_at: String,
}

impl QualitySummary {
    pub fn from_result(result: QualityResult, high_risk_threshold: f64) -> Self {
        Self {
            is_passed: result.is_passed(),
            is_high_risk: result.is_high_risk(high_risk_threshold),
            has_defects: result.has_defects(),
            result,
            summary_generated_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Aggregate quality KPIs
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QualityStatistics {
    pub total_results: u64,
    pub passed_count: u64,
    pub failed_count: u64,
    pub high_risk_count: u64,
    /// Percentage of passed inspections (0-100)
    pub pass_rate: f64,
    /// Mean quality score over the sampled page of results
    pub average_quality_score: f64,
    pub statistics_generated_at: String,
}

impl QualityStatistics {
    /// Build statistics from the unfiltered, passed and failed pages and the
    /// number of high-risk results.
    ///
    /// Totals come from `total_elements`; the average quality score only
    /// covers the content of `all`, with missing scores counted as zero.
    pub fn compute(
        all: &Page<QualityResult>,
        passed: &Page<QualityResult>,
        failed: &Page<QualityResult>,
        high_risk_count: usize,
    ) -> Self {
        let total = all.total_elements;
        let passed_count = passed.total_elements;

        let pass_rate = if total > 0 {
            passed_count as f64 / total as f64 * 100.0
        } else {
            0.0
        };

        let average_quality_score = if all.content.is_empty() {
            0.0
        } else {
            let sum: f64 = all
                .content
                .iter()
                .map(|r| r.quality_score.unwrap_or(0.0))
                .sum();
            sum / all.content.len() as f64
        };

        Self {
            total_results: total,
            passed_count,
            failed_count: failed.total_elements,
            high_risk_count: high_risk_count as u64,
            pass_rate,
            average_quality_score,
            statistics_generated_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Classification;

    fn page_with(total: u64, scores: &[Option<f64>]) -> Page<QualityResult> {
        Page {
            total_elements: total,
            content: scores
                .iter()
                .map(|s| QualityResult {
                    quality_score: *s,
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_summary_flags() {
        let result = QualityResult {
            classification: Some(Classification::Pass),
            predicted_risk: Some(0.9),
            defect_type: None,
            ..Default::default()
        };

        let summary = QualitySummary::from_result(result, 0.7);
        assert!(summary.is_passed);
        assert!(summary.is_high_risk);
        assert!(!summary.has_defects);
        assert!(chrono::DateTime::parse_from_rfc3339(&summary.summary_generated_at).is_ok());
    }

    #[test]
    fn test_statistics_compute() {
        let all = page_with(200, &[Some(80.0), None, Some(100.0), Some(60.0)]);
        let passed = page_with(150, &[]);
        let failed = page_with(50, &[]);

        let stats = QualityStatistics::compute(&all, &passed, &failed, 7);
        assert_eq!(stats.total_results, 200);
        assert_eq!(stats.passed_count, 150);
        assert_eq!(stats.failed_count, 50);
        assert_eq!(stats.high_risk_count, 7);
        assert!((stats.pass_rate - 75.0).abs() < f64::EPSILON);
        assert!((stats.average_quality_score - 60.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_statistics_empty() {
        let empty = page_with(0, &[]);
        let stats = QualityStatistics::compute(&empty, &empty, &empty, 0);
        assert_eq!(stats.pass_rate, 0.0);
        assert_eq!(stats.average_quality_score, 0.0);
    }

    #[test]
    fn test_statistics_serialize_snake_case() {
        let empty = page_with(0, &[]);
        let json = serde_json::to_value(QualityStatistics::compute(&empty, &empty, &empty, 0))
            .unwrap();
        assert!(json.get("pass_rate").is_some());
        assert!(json.get("statistics_generated_at").is_some());
    }
}
