// Quality API path constants and domain defaults

/// Default base URL of the SECOM MES API
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api/v1";

/// Predicted risk above which a result counts as high risk
pub const DEFAULT_HIGH_RISK_THRESHOLD: f64 = 0.7;

/// Classification value of a passed inspection
pub const CLASSIFICATION_PASS: i32 = -1;

/// Classification value of a failed inspection
pub const CLASSIFICATION_FAIL: i32 = 1;

pub mod quality_api_path {
    pub const RESULTS: &str = "/quality/results";
    pub const RESULTS_PASSED: &str = "/quality/results/passed";
    pub const RESULTS_FAILED: &str = "/quality/results/failed";
    pub const RESULTS_HIGH_RISK: &str = "/quality/results/high-risk";
    pub const RESULTS_BY_LOT: &str = "/quality/results/lot";
    pub const RESULTS_BY_DEFECT: &str = "/quality/results/defect";

    pub fn result(result_id: i64) -> String {
        format!("{}/{}", RESULTS, result_id)
    }

    pub fn result_by_lot(lot_id: i64) -> String {
        format!("{}/{}", RESULTS_BY_LOT, lot_id)
    }

    pub fn results_by_defect(defect_type: &str) -> String {
        format!("{}/{}", RESULTS_BY_DEFECT, defect_type)
    }
}

#[cfg(test)]
mod tests {
    use super::quality_api_path;

    #[test]
    fn test_path_builders() {
        assert_eq!(quality_api_path::result(7), "/quality/results/7");
        assert_eq!(quality_api_path::result_by_lot(3), "/quality/results/lot/3");
        assert_eq!(
            quality_api_path::results_by_defect("electrical_fail"),
            "/quality/results/defect/electrical_fail"
        );
    }
}
