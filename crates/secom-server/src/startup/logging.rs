//! File-based logging
//!
//! Components write to separate rolling log files next to a root log that
//! captures every event:
//!
//! | Log File           | Component                  | Target Prefixes                   |
//! |--------------------|----------------------------|-----------------------------------|
//! | secom.log          | Root logger (all events)   | (all)                             |
//! | quality-client.log | MES quality API client     | secom_quality_client              |
//! | skills.log         | Skill registry and skills  | secom_agent                       |
//! | web.log            | HTTP surface               | secom_server::api, actix_web      |
//!
//! Settings come from the YAML file named by `LOGGING_CONFIG_PATH`; `RUST_LOG`
//! overrides the console and root file level.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt};

struct ComponentLogDef {
    file_name: &'static str,
    targets: &'static [&'static str],
}

const ROOT_LOG_FILE: &str = "secom.log";

const COMPONENT_LOGS: &[ComponentLogDef] = &[
    ComponentLogDef {
        file_name: "quality-client.log",
        targets: &["secom_quality_client"],
    },
    ComponentLogDef {
        file_name: "skills.log",
        targets: &["secom_agent"],
    },
    ComponentLogDef {
        file_name: "web.log",
        targets: &["secom_server::api", "actix_web"],
    },
];

/// Log rotation policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogRotation {
    #[default]
    Daily,
    Hourly,
    Never,
}

impl From<LogRotation> for Rotation {
    fn from(rotation: LogRotation) -> Self {
        match rotation {
            LogRotation::Daily => Rotation::DAILY,
            LogRotation::Hourly => Rotation::HOURLY,
            LogRotation::Never => Rotation::NEVER,
        }
    }
}

/// Logging configuration file layout
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LoggingFile {
    level: Option<String>,
    log_dir: Option<PathBuf>,
    console: Option<bool>,
    file: Option<bool>,
    rotation: Option<LogRotation>,
}

/// Logging configuration for the entire application
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub log_dir: PathBuf,
    pub console_output: bool,
    pub level: Level,
    pub file_logging: bool,
    pub rotation: LogRotation,
}

fn default_log_dir() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
    PathBuf::from(format!("{}/secom-quality-agent/logs", home))
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_dir: default_log_dir(),
            console_output: true,
            level: Level::INFO,
            file_logging: true,
            rotation: LogRotation::Daily,
        }
    }
}

impl LoggingConfig {
    /// Console-only logging, used by the one-shot subcommands
    pub fn console_only() -> Self {
        Self {
            file_logging: false,
            ..Default::default()
        }
    }

    /// Load from a YAML logging configuration file
    pub fn from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read logging config {}: {}", path.display(), e))?;
        Self::from_yaml(&contents)
    }

    fn from_yaml(contents: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let file: LoggingFile = serde_yaml::from_str(contents)?;
        let defaults = Self::default();

        let level = match file.level {
            Some(level) => level
                .parse()
                .map_err(|_| format!("Invalid log level: {}", level))?,
            None => defaults.level,
        };

        Ok(Self {
            log_dir: file.log_dir.unwrap_or(defaults.log_dir),
            console_output: file.console.unwrap_or(defaults.console_output),
            level,
            file_logging: file.file.unwrap_or(defaults.file_logging),
            rotation: file.rotation.unwrap_or(defaults.rotation),
        })
    }
}

/// Keeps the non-blocking file writers alive; dropping it flushes them
pub struct LoggingGuard {
    _file_guards: Vec<WorkerGuard>,
}

/// Install the global subscriber
///
/// Console and root file layers are filtered by `RUST_LOG`, falling back to
/// the configured level. Component files capture everything from their
/// targets.
pub fn init_logging(config: &LoggingConfig) -> Result<LoggingGuard, Box<dyn std::error::Error>> {
    if config.file_logging {
        std::fs::create_dir_all(&config.log_dir)?;
    }

    let mut guards: Vec<WorkerGuard> = Vec::new();
    let mut layers: Vec<Box<dyn Layer<Registry> + Send + Sync>> = Vec::new();

    if config.console_output {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.level.to_string()));
        let console_layer = fmt::layer()
            .with_target(true)
            .with_thread_names(true)
            .with_writer(std::io::stderr)
            .with_filter(filter);
        layers.push(Box::new(console_layer));
    }

    if config.file_logging {
        let root_appender =
            RollingFileAppender::new(config.rotation.into(), &config.log_dir, ROOT_LOG_FILE);
        let (root_nb, root_guard) = tracing_appender::non_blocking(root_appender);
        guards.push(root_guard);

        let root_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.level.to_string()));
        let root_layer = fmt::layer()
            .with_writer(root_nb)
            .with_target(true)
            .with_thread_names(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .with_filter(root_filter);
        layers.push(Box::new(root_layer));

        for component in COMPONENT_LOGS {
            let appender = RollingFileAppender::new(
                config.rotation.into(),
                &config.log_dir,
                component.file_name,
            );
            let (nb, guard) = tracing_appender::non_blocking(appender);
            guards.push(guard);

            let mut targets = Targets::new();
            for target in component.targets {
                targets = targets.with_target(*target, LevelFilter::TRACE);
            }

            let layer = fmt::layer()
                .with_writer(nb)
                .with_target(true)
                .with_thread_names(true)
                .with_ansi(false)
                .with_filter(targets);
            layers.push(Box::new(layer));
        }
    }

    Registry::default()
        .with(layers)
        .try_init()
        .map_err(|e| format!("Failed to initialize logging: {}", e))?;

    if config.file_logging {
        tracing::info!(
            log_dir = %config.log_dir.display(),
            "File logging initialized: {} (root) + {} component log files",
            ROOT_LOG_FILE,
            COMPONENT_LOGS.len()
        );
    }

    Ok(LoggingGuard {
        _file_guards: guards,
    })
}
