//! Configuration management for the quality agent
//!
//! Values are layered, lowest precedence first: built-in defaults, an optional
//! YAML file, environment variables and command line overrides. Keys are the
//! lowercased environment variable names (`FASTAPI_PORT` -> `fastapi_port`).

use std::{collections::HashMap, fmt, path::PathBuf, time::Duration};

use clap::Args;
use config::{Config, ConfigError, Environment, File};
use secom_quality_client::{QualityClientConfig, constants::DEFAULT_HIGH_RISK_THRESHOLD};

use super::{constants::*, tls::TlsSettings};

/// Command line options shared by every subcommand that reads configuration
#[derive(Debug, Clone, Default, Args)]
pub struct ConfigArgs {
    /// YAML configuration file
    #[arg(short = 'c', long = "config")]
    pub config_file: Option<PathBuf>,

    /// Override FASTAPI_HOST
    #[arg(long)]
    pub host: Option<String>,

    /// Override FASTAPI_PORT
    #[arg(long)]
    pub port: Option<u16>,
}

/// A string that is never printed
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\"***\"")
    }
}

/// Errors and warnings found while validating configuration
#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn add_error(&mut self, error: &str) {
        self.errors.push(error.to_string());
    }

    pub fn add_warning(&mut self, warning: &str) {
        self.warnings.push(warning.to_string());
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for error in &self.errors {
            writeln!(f, "error: {}", error)?;
        }
        for warning in &self.warnings {
            writeln!(f, "warning: {}", warning)?;
        }
        if self.errors.is_empty() && self.warnings.is_empty() {
            writeln!(f, "configuration OK")?;
        }
        Ok(())
    }
}

/// LLM service settings
#[derive(Debug, Clone, Default)]
pub struct LlmSettings {
    pub endpoint: Option<String>,
    pub api_key: Option<Secret>,
    pub planning_model: Option<String>,
    pub general_model: Option<String>,
}

/// Event broker settings
#[derive(Debug, Clone)]
pub struct BrokerSettings {
    pub url: String,
    pub vpn: String,
    pub username: String,
    pub password: Secret,
    pub dev_mode: bool,
}

/// Object storage settings
#[derive(Debug, Clone)]
pub struct StorageSettings {
    pub bucket: Option<String>,
    pub endpoint: Option<String>,
    pub region: String,
}

/// Quality API connection settings
#[derive(Debug, Clone)]
pub struct QualityApiSettings {
    pub base_urls: Vec<String>,
    pub timeout: Duration,
    pub high_risk_threshold: f64,
}

impl QualityApiSettings {
    pub fn to_client_config(&self) -> QualityClientConfig {
        let config = QualityClientConfig::with_servers(self.base_urls.clone());
        let connect_timeout_ms = config.connect_timeout_ms;
        config
            .with_timeouts(connect_timeout_ms, self.timeout.as_millis() as u64)
            .with_high_risk_threshold(self.high_risk_threshold)
    }
}

/// Application configuration loaded from file, environment and CLI
#[derive(Clone, Default)]
pub struct Configuration {
    pub config: Config,
}

// The raw `Config` holds secrets, so only derived settings are printed
impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configuration")
            .field("namespace", &self.namespace())
            .field("server_url", &self.server_url())
            .field("dev_mode", &self.is_dev_mode())
            .field("llm", &self.llm())
            .field("broker", &self.broker())
            .field("quality_api", &self.quality_api())
            .finish()
    }
}

impl Configuration {
    /// Load configuration from the process environment
    pub fn load(args: &ConfigArgs) -> Result<Self, ConfigError> {
        Self::build(args, Environment::default())
    }

    /// Load configuration from an explicit set of environment variables
    pub fn from_env_map(
        args: &ConfigArgs,
        vars: HashMap<String, String>,
    ) -> Result<Self, ConfigError> {
        Self::build(args, Environment::default().source(Some(vars)))
    }

    fn build(args: &ConfigArgs, environment: Environment) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default(NAMESPACE, DEFAULT_NAMESPACE)?
            .set_default(SOLACE_BROKER_URL, DEFAULT_BROKER_URL)?
            .set_default(SOLACE_BROKER_VPN, DEFAULT_BROKER_VPN)?
            .set_default(SOLACE_BROKER_USERNAME, DEFAULT_BROKER_USERNAME)?
            .set_default(SOLACE_BROKER_PASSWORD, DEFAULT_BROKER_PASSWORD)?
            .set_default(SOLACE_DEV_MODE, false)?
            .set_default(FASTAPI_HOST, DEFAULT_HOST)?
            .set_default(FASTAPI_PORT, DEFAULT_PORT as i64)?
            .set_default(FASTAPI_HTTPS_PORT, DEFAULT_HTTPS_PORT as i64)?
            .set_default(S3_REGION, DEFAULT_S3_REGION)?
            .set_default(SECOM_API_BASE_URL, secom_quality_client::constants::DEFAULT_BASE_URL)?
            .set_default(SECOM_API_TIMEOUT_MS, DEFAULT_API_TIMEOUT_MS as i64)?
            .set_default(SECOM_HIGH_RISK_THRESHOLD, DEFAULT_HIGH_RISK_THRESHOLD)?;

        if let Some(path) = &args.config_file {
            builder = builder.add_source(File::from(path.as_path()));
        }

        builder = builder.add_source(environment);

        if let Some(host) = &args.host {
            builder = builder.set_override(FASTAPI_HOST, host.as_str())?;
        }
        if let Some(port) = args.port {
            builder = builder.set_override(FASTAPI_PORT, port as i64)?;
        }

        Ok(Configuration {
            config: builder.build()?,
        })
    }

    fn optional_string(&self, key: &str) -> Option<String> {
        self.config
            .get_string(key)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn port(&self, key: &str, default: u16) -> u16 {
        self.config
            .get_int(key)
            .ok()
            .and_then(|v| u16::try_from(v).ok())
            .unwrap_or(default)
    }

    // ========================================================================
    // Agent
    // ========================================================================

    pub fn namespace(&self) -> String {
        self.optional_string(NAMESPACE)
            .unwrap_or_else(|| DEFAULT_NAMESPACE.to_string())
    }

    pub fn is_dev_mode(&self) -> bool {
        self.config.get_bool(SOLACE_DEV_MODE).unwrap_or(false)
    }

    pub fn llm(&self) -> LlmSettings {
        LlmSettings {
            endpoint: self.optional_string(LLM_SERVICE_ENDPOINT),
            api_key: self.optional_string(LLM_SERVICE_API_KEY).map(Secret::new),
            planning_model: self.optional_string(LLM_SERVICE_PLANNING_MODEL_NAME),
            general_model: self.optional_string(LLM_SERVICE_GENERAL_MODEL_NAME),
        }
    }

    pub fn broker(&self) -> BrokerSettings {
        BrokerSettings {
            url: self
                .optional_string(SOLACE_BROKER_URL)
                .unwrap_or_else(|| DEFAULT_BROKER_URL.to_string()),
            vpn: self
                .optional_string(SOLACE_BROKER_VPN)
                .unwrap_or_else(|| DEFAULT_BROKER_VPN.to_string()),
            username: self
                .optional_string(SOLACE_BROKER_USERNAME)
                .unwrap_or_else(|| DEFAULT_BROKER_USERNAME.to_string()),
            password: Secret::new(
                self.config
                    .get_string(SOLACE_BROKER_PASSWORD)
                    .unwrap_or_else(|_| DEFAULT_BROKER_PASSWORD.to_string()),
            ),
            dev_mode: self.is_dev_mode(),
        }
    }

    // ========================================================================
    // Web surface
    // ========================================================================

    pub fn session_secret(&self) -> Option<Secret> {
        self.optional_string(SESSION_SECRET_KEY).map(Secret::new)
    }

    pub fn server_host(&self) -> String {
        self.optional_string(FASTAPI_HOST)
            .unwrap_or_else(|| DEFAULT_HOST.to_string())
    }

    pub fn server_port(&self) -> u16 {
        self.port(FASTAPI_PORT, DEFAULT_PORT)
    }

    pub fn server_https_port(&self) -> u16 {
        self.port(FASTAPI_HTTPS_PORT, DEFAULT_HTTPS_PORT)
    }

    /// Public base URL of the plain HTTP listener
    pub fn server_url(&self) -> String {
        format!("http://{}:{}", self.server_host(), self.server_port())
    }

    pub fn tls(&self) -> TlsSettings {
        TlsSettings {
            key_file: self.optional_string(SSL_KEYFILE).map(PathBuf::from),
            cert_file: self.optional_string(SSL_CERTFILE).map(PathBuf::from),
            key_password: self.optional_string(SSL_KEYFILE_PASSWORD).map(Secret::new),
        }
    }

    pub fn logging_config_path(&self) -> Option<PathBuf> {
        self.optional_string(LOGGING_CONFIG_PATH).map(PathBuf::from)
    }

    pub fn storage(&self) -> StorageSettings {
        StorageSettings {
            bucket: self.optional_string(S3_BUCKET_NAME),
            endpoint: self.optional_string(S3_ENDPOINT_URL),
            region: self
                .optional_string(S3_REGION)
                .unwrap_or_else(|| DEFAULT_S3_REGION.to_string()),
        }
    }

    // ========================================================================
    // Quality API
    // ========================================================================

    pub fn quality_api(&self) -> QualityApiSettings {
        let base_urls = self
            .optional_string(SECOM_API_BASE_URL)
            .unwrap_or_else(|| secom_quality_client::constants::DEFAULT_BASE_URL.to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let timeout_ms = self
            .config
            .get_int(SECOM_API_TIMEOUT_MS)
            .ok()
            .and_then(|v| u64::try_from(v).ok())
            .unwrap_or(DEFAULT_API_TIMEOUT_MS);

        QualityApiSettings {
            base_urls,
            timeout: Duration::from_millis(timeout_ms),
            high_risk_threshold: self
                .config
                .get_float(SECOM_HIGH_RISK_THRESHOLD)
                .unwrap_or(DEFAULT_HIGH_RISK_THRESHOLD),
        }
    }

    // ========================================================================
    // Validation
    // ========================================================================

    /// Check the configuration for problems that would prevent a clean start
    pub fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::default();
        let dev_mode = self.is_dev_mode();

        let llm = self.llm();
        let missing_llm: Vec<&str> = [
            ("LLM_SERVICE_ENDPOINT", llm.endpoint.is_none()),
            ("LLM_SERVICE_API_KEY", llm.api_key.is_none()),
            ("LLM_SERVICE_PLANNING_MODEL_NAME", llm.planning_model.is_none()),
            ("LLM_SERVICE_GENERAL_MODEL_NAME", llm.general_model.is_none()),
        ]
        .into_iter()
        .filter_map(|(name, missing)| missing.then_some(name))
        .collect();
        if !missing_llm.is_empty() {
            let message = format!("LLM service not configured: {} missing", missing_llm.join(", "));
            if dev_mode {
                report.add_warning(&message);
            } else {
                report.add_error(&message);
            }
        }

        if let Some(endpoint) = &llm.endpoint {
            check_url(&mut report, "LLM_SERVICE_ENDPOINT", endpoint, &["http", "https"]);
        }

        let broker = self.broker();
        check_url(
            &mut report,
            "SOLACE_BROKER_URL",
            &broker.url,
            &["ws", "wss", "tcp", "tcps", "http", "https"],
        );

        match self.session_secret() {
            Some(_) => {}
            None if dev_mode => report.add_warning("SESSION_SECRET_KEY is empty"),
            None => report.add_error("SESSION_SECRET_KEY must be set outside dev mode"),
        }

        let port = self.server_port();
        let https_port = self.server_https_port();
        if port == 0 {
            report.add_error("FASTAPI_PORT must be a non-zero port");
        }
        if https_port == 0 {
            report.add_error("FASTAPI_HTTPS_PORT must be a non-zero port");
        }
        if port == https_port {
            report.add_error("FASTAPI_PORT and FASTAPI_HTTPS_PORT must differ");
        }
        for key in [FASTAPI_PORT, FASTAPI_HTTPS_PORT] {
            if let Ok(v) = self.config.get_int(key)
                && u16::try_from(v).is_err()
            {
                report.add_error(&format!("{} is not a valid port: {}", key.to_uppercase(), v));
            }
        }

        self.tls().validate(&mut report);

        if let Some(path) = self.logging_config_path()
            && !path.exists()
        {
            report.add_error(&format!("Logging config file not found: {}", path.display()));
        }

        let storage = self.storage();
        if storage.endpoint.is_some() && storage.bucket.is_none() {
            report.add_warning("S3_ENDPOINT_URL is set but S3_BUCKET_NAME is not");
        }

        let api = self.quality_api();
        if api.base_urls.is_empty() {
            report.add_error("SECOM_API_BASE_URL must list at least one URL");
        }
        for base_url in &api.base_urls {
            check_url(&mut report, "SECOM_API_BASE_URL", base_url, &["http", "https"]);
        }
        if !(0.0..=1.0).contains(&api.high_risk_threshold) {
            report.add_error(&format!(
                "SECOM_HIGH_RISK_THRESHOLD must be between 0.0 and 1.0, got {}",
                api.high_risk_threshold
            ));
        }
        if api.timeout.is_zero() {
            report.add_error("SECOM_API_TIMEOUT_MS must be greater than zero");
        }

        report
    }
}

fn check_url(report: &mut ValidationReport, name: &str, value: &str, schemes: &[&str]) {
    match url::Url::parse(value) {
        Ok(url) if schemes.contains(&url.scheme()) => {}
        Ok(url) => report.add_error(&format!(
            "{} has unsupported scheme '{}': {}",
            name,
            url.scheme(),
            value
        )),
        Err(e) => report.add_error(&format!("{} is not a valid URL ({}): {}", name, e, value)),
    }
}
