// Skill trait and skill errors

use async_trait::async_trait;
use secom_quality_client::QualityError;
use serde::de::DeserializeOwned;

use crate::model::AgentSkill;

/// A capability the agent can perform on request
#[async_trait]
pub trait Skill: Send + Sync {
    /// Descriptor advertised on the agent card
    fn descriptor(&self) -> AgentSkill;

    /// Run the skill with JSON arguments matching its input schema
    async fn invoke(&self, arguments: serde_json::Value) -> Result<serde_json::Value, SkillError>;
}

/// Errors reported by skill invocations
#[derive(Debug, thiserror::Error)]
pub enum SkillError {
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("skill '{0}' is not registered")]
    UnknownSkill(String),

    #[error("skill '{0}' is already registered")]
    DuplicateSkill(String),

    #[error("quality API error: {0}")]
    Upstream(QualityError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SkillError {
    /// HTTP status that best describes the error
    pub fn status_code(&self) -> u16 {
        match self {
            SkillError::InvalidArguments(_) => 400,
            SkillError::NotFound(_) | SkillError::UnknownSkill(_) => 404,
            SkillError::DuplicateSkill(_) => 409,
            SkillError::Upstream(_) => 502,
            SkillError::Serialization(_) => 500,
        }
    }
}

impl From<QualityError> for SkillError {
    fn from(err: QualityError) -> Self {
        match err {
            QualityError::NotFound { path } => SkillError::NotFound(path),
            QualityError::InvalidArgument(msg) => SkillError::InvalidArguments(msg),
            other => SkillError::Upstream(other),
        }
    }
}

/// Deserialize skill arguments, treating `null` as an empty object
pub fn parse_arguments<T: DeserializeOwned>(arguments: serde_json::Value) -> Result<T, SkillError> {
    let arguments = if arguments.is_null() {
        serde_json::Value::Object(serde_json::Map::new())
    } else {
        arguments
    };
    serde_json::from_value(arguments).map_err(|e| SkillError::InvalidArguments(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Args {
        result_id: i64,
        #[serde(default)]
        verbose: bool,
    }

    #[test]
    fn test_parse_arguments() {
        let args: Args = parse_arguments(serde_json::json!({"result_id": 3})).unwrap();
        assert_eq!(args.result_id, 3);
        assert!(!args.verbose);
    }

    #[test]
    fn test_parse_arguments_missing_field() {
        let err = parse_arguments::<Args>(serde_json::Value::Null).unwrap_err();
        assert!(matches!(err, SkillError::InvalidArguments(_)));
        assert!(err.to_string().contains("result_id"));
    }

    #[test]
    fn test_from_quality_error() {
        let err: SkillError = QualityError::NotFound {
            path: "/quality/results/1".to_string(),
        }
        .into();
        assert_eq!(err.status_code(), 404);

        let err: SkillError = QualityError::InvalidArgument("threshold".to_string()).into();
        assert_eq!(err.status_code(), 400);

        let err: SkillError = QualityError::RequestFailed {
            status: 500,
            body: String::new(),
        }
        .into();
        assert_eq!(err.status_code(), 502);
    }
}
