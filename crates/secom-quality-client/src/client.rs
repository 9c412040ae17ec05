// QualityClient - facade for the SECOM MES Quality API

use tracing::{debug, warn};

use crate::{
    config::QualityClientConfig,
    constants::quality_api_path,
    error::{QualityError, Result},
    http::QualityHttpClient,
    model::{DefectType, Page, PageRequest, QualityResult, QualityStatistics, QualitySummary},
};

/// Async client for quality inspection results
pub struct QualityClient {
    http_client: QualityHttpClient,
    high_risk_threshold: f64,
}

impl QualityClient {
    /// Create a new QualityClient with the given configuration
    pub fn new(config: QualityClientConfig) -> Result<Self> {
        validate_threshold(config.high_risk_threshold)?;
        let http_client = QualityHttpClient::new(&config)?;
        Ok(Self {
            http_client,
            high_risk_threshold: config.high_risk_threshold,
        })
    }

    /// Create a new QualityClient from a single base URL
    pub fn from_base_url(base_url: &str) -> Result<Self> {
        Self::new(QualityClientConfig::new(base_url))
    }

    pub fn high_risk_threshold(&self) -> f64 {
        self.high_risk_threshold
    }

    pub fn current_server(&self) -> String {
        self.http_client.current_server()
    }

    // ============================================================================
    // Quality Result APIs
    // ============================================================================

    /// Get a single quality result by its ID
    pub async fn get_result_by_id(&self, result_id: i64) -> Result<QualityResult> {
        self.http_client
            .get(&quality_api_path::result(result_id))
            .await
    }

    /// Get all quality results, one page at a time
    pub async fn get_all_results(&self, page: PageRequest) -> Result<Page<QualityResult>> {
        self.get_page(quality_api_path::RESULTS, page).await
    }

    /// Get results that passed inspection (classification = -1)
    pub async fn get_passed_results(&self, page: PageRequest) -> Result<Page<QualityResult>> {
        self.get_page(quality_api_path::RESULTS_PASSED, page).await
    }

    /// Get results that failed inspection (classification = 1)
    pub async fn get_failed_results(&self, page: PageRequest) -> Result<Page<QualityResult>> {
        self.get_page(quality_api_path::RESULTS_FAILED, page).await
    }

    /// Get the quality result recorded for a lot
    pub async fn get_result_by_lot_id(&self, lot_id: i64) -> Result<QualityResult> {
        self.http_client
            .get(&quality_api_path::result_by_lot(lot_id))
            .await
    }

    /// Get results whose predicted risk is above `threshold`
    /// (the configured default when `None`)
    pub async fn get_high_risk_results(
        &self,
        threshold: Option<f64>,
    ) -> Result<Vec<QualityResult>> {
        let threshold = threshold.unwrap_or(self.high_risk_threshold);
        validate_threshold(threshold)?;

        self.http_client
            .get_with_query(
                quality_api_path::RESULTS_HIGH_RISK,
                &[("threshold", threshold)],
            )
            .await
    }

    /// Get all results with the given defect type
    pub async fn get_results_by_defect_type(
        &self,
        defect_type: DefectType,
    ) -> Result<Vec<QualityResult>> {
        self.http_client
            .get(&quality_api_path::results_by_defect(defect_type.as_str()))
            .await
    }

    // ============================================================================
    // Derived APIs
    // ============================================================================

    /// Get a result together with pass / risk / defect flags
    pub async fn get_quality_summary(&self, result_id: i64) -> Result<QualitySummary> {
        let result = self.get_result_by_id(result_id).await?;
        Ok(QualitySummary::from_result(result, self.high_risk_threshold))
    }

    /// Compute aggregate statistics across all results
    pub async fn get_quality_statistics(&self) -> Result<QualityStatistics> {
        let (all, passed, failed, high_risk) = futures::try_join!(
            self.get_all_results(PageRequest::default()),
            self.get_passed_results(PageRequest::default()),
            self.get_failed_results(PageRequest::default()),
            self.get_high_risk_results(None),
        )?;

        debug!(
            total = all.total_elements,
            passed = passed.total_elements,
            failed = failed.total_elements,
            high_risk = high_risk.len(),
            "Computed quality statistics"
        );

        Ok(QualityStatistics::compute(
            &all,
            &passed,
            &failed,
            high_risk.len(),
        ))
    }

    /// Get a result by ID, returning `None` when it does not exist or the
    /// API cannot be reached. Other API errors are still returned.
    pub async fn safe_get_result(&self, result_id: i64) -> Result<Option<QualityResult>> {
        match self.get_result_by_id(result_id).await {
            Ok(result) => Ok(Some(result)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) if e.is_transport() => {
                warn!(result_id, error = %e, "Quality API unreachable, returning no result");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Cheap reachability probe: fetch a single-element page
    pub async fn ping(&self) -> Result<()> {
        self.get_all_results(PageRequest::new(0, 1)).await.map(|_| ())
    }

    async fn get_page(&self, path: &str, page: PageRequest) -> Result<Page<QualityResult>> {
        if page.is_empty() {
            self.http_client.get(path).await
        } else {
            self.http_client.get_with_query(path, &page).await
        }
    }
}

fn validate_threshold(threshold: f64) -> Result<()> {
    if (0.0..=1.0).contains(&threshold) {
        Ok(())
    } else {
        Err(QualityError::InvalidArgument(format!(
            "threshold must be between 0.0 and 1.0, got {}",
            threshold
        )))
    }
}
