// Configuration keys and defaults
//
// Keys are the lowercased environment variable names; the same flat keys are
// used in the YAML configuration file.

pub const NAMESPACE: &str = "namespace";
pub const DEFAULT_NAMESPACE: &str = "secom/";

// LLM service
pub const LLM_SERVICE_ENDPOINT: &str = "llm_service_endpoint";
pub const LLM_SERVICE_API_KEY: &str = "llm_service_api_key";
pub const LLM_SERVICE_PLANNING_MODEL_NAME: &str = "llm_service_planning_model_name";
pub const LLM_SERVICE_GENERAL_MODEL_NAME: &str = "llm_service_general_model_name";

// Event broker
pub const SOLACE_BROKER_URL: &str = "solace_broker_url";
pub const SOLACE_BROKER_VPN: &str = "solace_broker_vpn";
pub const SOLACE_BROKER_USERNAME: &str = "solace_broker_username";
pub const SOLACE_BROKER_PASSWORD: &str = "solace_broker_password";
pub const SOLACE_DEV_MODE: &str = "solace_dev_mode";
pub const DEFAULT_BROKER_URL: &str = "ws://localhost:8008";
pub const DEFAULT_BROKER_VPN: &str = "default";
pub const DEFAULT_BROKER_USERNAME: &str = "default";
pub const DEFAULT_BROKER_PASSWORD: &str = "default";

// Web surface
pub const SESSION_SECRET_KEY: &str = "session_secret_key";
pub const FASTAPI_HOST: &str = "fastapi_host";
pub const FASTAPI_PORT: &str = "fastapi_port";
pub const FASTAPI_HTTPS_PORT: &str = "fastapi_https_port";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_HTTPS_PORT: u16 = 8443;

// TLS
pub const SSL_KEYFILE: &str = "ssl_keyfile";
pub const SSL_CERTFILE: &str = "ssl_certfile";
pub const SSL_KEYFILE_PASSWORD: &str = "ssl_keyfile_password";

pub const LOGGING_CONFIG_PATH: &str = "logging_config_path";

// Object storage
pub const S3_BUCKET_NAME: &str = "s3_bucket_name";
pub const S3_ENDPOINT_URL: &str = "s3_endpoint_url";
pub const S3_REGION: &str = "s3_region";
pub const DEFAULT_S3_REGION: &str = "us-east-1";

// Quality API
pub const SECOM_API_BASE_URL: &str = "secom_api_base_url";
pub const SECOM_API_TIMEOUT_MS: &str = "secom_api_timeout_ms";
pub const SECOM_HIGH_RISK_THRESHOLD: &str = "secom_high_risk_threshold";
pub const DEFAULT_API_TIMEOUT_MS: u64 = 30000;

/// Grace period for in-flight requests on shutdown
pub const SHUTDOWN_TIMEOUT_SECS: u64 = 30;
