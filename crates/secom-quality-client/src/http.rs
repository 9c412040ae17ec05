//! HTTP transport with failover across API base URLs
//!
//! Every request starts at the current base URL and walks the remaining
//! addresses in order on transport failures (connect error, timeout), trying
//! each at most once. Status errors are never retried: the API answered, so
//! another replica will too. Concurrent requests share the current index but
//! only move it away from an address they saw fail.

use std::{sync::RwLock, time::Duration};

use reqwest::{Client, Response, StatusCode, header};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, error, warn};

use crate::{
    config::QualityClientConfig,
    error::{QualityError, Result},
};

/// HTTP client with JSON handling and base-URL failover
pub struct QualityHttpClient {
    client: Client,
    server_addrs: Vec<String>,
    current_server_index: RwLock<usize>,
}

impl QualityHttpClient {
    pub fn new(config: &QualityClientConfig) -> Result<Self> {
        if config.server_addrs.is_empty() {
            return Err(QualityError::InvalidArgument(
                "at least one server address is required".to_string(),
            ));
        }

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder()
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .timeout(Duration::from_millis(config.read_timeout_ms))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            server_addrs: config
                .server_addrs
                .iter()
                .map(|addr| addr.trim_end_matches('/').to_string())
                .collect(),
            current_server_index: RwLock::new(0),
        })
    }

    /// Get the current base URL
    pub fn current_server(&self) -> String {
        let index = *self
            .current_server_index
            .read()
            .unwrap_or_else(|e| e.into_inner());
        self.server_addrs[index].clone()
    }

    fn current_index(&self) -> usize {
        *self
            .current_server_index
            .read()
            .unwrap_or_else(|e| e.into_inner())
    }

    /// Move past `failed` unless another request already moved the index
    fn switch_from_server(&self, failed: usize) {
        let mut index = self
            .current_server_index
            .write()
            .unwrap_or_else(|e| e.into_inner());
        if *index == failed {
            *index = (failed + 1) % self.server_addrs.len();
            debug!("Switched to server index: {}", *index);
        }
    }

    /// Pin the index to an address that just answered
    fn settle_on_server(&self, index: usize) {
        let mut current = self
            .current_server_index
            .write()
            .unwrap_or_else(|e| e.into_inner());
        if *current != index {
            *current = index;
            debug!("Switched to server index: {}", index);
        }
    }

    fn build_url_at(&self, index: usize, path: &str) -> String {
        format!("{}{}", self.server_addrs[index], path)
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request_with_retry(
            |client, url| async move { client.get(&url).send().await },
            path,
        )
        .await
    }

    /// Make a GET request with query parameters
    pub async fn get_with_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T> {
        self.request_with_retry(
            |client, url| async move { client.get(&url).query(query).send().await },
            path,
        )
        .await
    }

    /// Generic request with failover
    async fn request_with_retry<T, F, Fut>(&self, request_fn: F, path: &str) -> Result<T>
    where
        T: DeserializeOwned,
        F: Fn(Client, String) -> Fut,
        Fut: std::future::Future<Output = std::result::Result<Response, reqwest::Error>>,
    {
        let server_count = self.server_addrs.len();
        let start = self.current_index();
        let mut last_error = None;

        for attempt in 0..server_count {
            let index = (start + attempt) % server_count;
            let url = self.build_url_at(index, path);
            debug!(url = %url, "Sending quality API request");

            match request_fn(self.client.clone(), url).await {
                Ok(response) => {
                    self.settle_on_server(index);
                    return self.handle_response(response, path).await;
                }
                Err(e) => {
                    warn!("Request failed: {}, switching to next server", e);
                    self.switch_from_server(index);
                    last_error = Some(QualityError::Http(e));
                }
            }
        }

        Err(last_error.unwrap_or(QualityError::AllServersFailed))
    }

    /// Handle response and parse JSON
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: Response,
        path: &str,
    ) -> Result<T> {
        let status = response.status();

        if status.is_success() {
            let bytes = response.bytes().await?;
            Ok(serde_json::from_slice(&bytes)?)
        } else if status == StatusCode::NOT_FOUND {
            debug!(path = %path, "Quality API returned 404");
            Err(QualityError::NotFound {
                path: path.to_string(),
            })
        } else {
            let body = response.text().await.unwrap_or_default();
            error!("Request failed with status {}: {}", status, body);
            Err(QualityError::RequestFailed {
                status: status.as_u16(),
                body,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_empty_servers() {
        let config = QualityClientConfig::with_servers(vec![]);
        let result = QualityHttpClient::new(&config);
        assert!(matches!(result, Err(QualityError::InvalidArgument(_))));
    }

    #[test]
    fn test_build_url_trims_trailing_slash() {
        let config = QualityClientConfig::new("http://localhost:8080/api/v1/");
        let client = QualityHttpClient::new(&config).unwrap();

        assert_eq!(
            client.build_url_at(0, "/quality/results"),
            "http://localhost:8080/api/v1/quality/results"
        );
    }

    #[test]
    fn test_switch_from_server_wraps() {
        let config = QualityClientConfig::with_servers(vec![
            "http://mes-a:8080/api/v1".to_string(),
            "http://mes-b:8080/api/v1".to_string(),
        ]);
        let client = QualityHttpClient::new(&config).unwrap();

        assert_eq!(client.current_server(), "http://mes-a:8080/api/v1");
        client.switch_from_server(0);
        assert_eq!(client.current_server(), "http://mes-b:8080/api/v1");
        client.switch_from_server(1);
        assert_eq!(client.current_server(), "http://mes-a:8080/api/v1");
    }

    #[test]
    fn test_stale_failure_does_not_move_index() {
        let config = QualityClientConfig::with_servers(vec![
            "http://mes-a:8080/api/v1".to_string(),
            "http://mes-b:8080/api/v1".to_string(),
        ]);
        let client = QualityHttpClient::new(&config).unwrap();

        client.switch_from_server(0);
        // a second request that also saw mes-a fail must not flip back
        client.switch_from_server(0);
        assert_eq!(client.current_server(), "http://mes-b:8080/api/v1");

        client.settle_on_server(0);
        assert_eq!(client.current_server(), "http://mes-a:8080/api/v1");
    }
}
