// Error types for QualityClient

/// Errors that can occur during quality API operations
#[derive(Debug, thiserror::Error)]
pub enum QualityError {
    #[error("Resource not found: {path}")]
    NotFound { path: String },

    #[error("Request failed with status {status}: {body}")]
    RequestFailed { status: u16, body: String },

    #[error("All servers failed")]
    AllServersFailed,

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl QualityError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, QualityError::NotFound { .. })
    }

    /// Connection, timeout or other failures below the HTTP status layer
    pub fn is_transport(&self) -> bool {
        match self {
            QualityError::Http(e) => !e.is_decode() && !e.is_status(),
            QualityError::AllServersFailed => true,
            _ => false,
        }
    }

    /// HTTP status reported by the API, when there is one
    pub fn status(&self) -> Option<u16> {
        match self {
            QualityError::NotFound { .. } => Some(404),
            QualityError::RequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, QualityError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = QualityError::NotFound {
            path: "/quality/results/9".to_string(),
        };
        assert_eq!(err.to_string(), "Resource not found: /quality/results/9");
        assert!(err.is_not_found());
        assert_eq!(err.status(), Some(404));

        let err = QualityError::RequestFailed {
            status: 500,
            body: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "Request failed with status 500: boom");
        assert!(!err.is_transport());
        assert_eq!(err.status(), Some(500));

        let err = QualityError::InvalidArgument("threshold".to_string());
        assert_eq!(err.to_string(), "Invalid argument: threshold");
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_all_servers_failed_is_transport() {
        assert!(QualityError::AllServersFailed.is_transport());
    }
}
