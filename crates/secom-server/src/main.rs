//! Main entry point for the SECOM quality agent.
//!
//! Loads configuration, registers the quality skills and serves the agent
//! card, skill invocation and health endpoints over HTTP (and HTTPS when TLS
//! is configured).

use std::{sync::Arc, time::Duration};

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use secom_server::{
    AppState, ConfigArgs, Configuration,
    model::constants::SHUTDOWN_TIMEOUT_SECS,
    startup::{self, LoggingConfig},
};
use tracing::{error, info, warn};

#[derive(Debug, Parser)]
#[command(name = "secom-quality-agent", version, about = "SECOM MES quality agent")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Validate configuration and serve the agent until interrupted
    Run(ConfigArgs),
    /// Print the configuration validation report
    CheckConfig(ConfigArgs),
    /// Print the agent card as JSON
    Card(ConfigArgs),
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Run(args) => run(&args).await,
        Command::CheckConfig(args) => {
            let _logging_guard = init_console_logging()?;
            check_config(&args)
        }
        Command::Card(args) => {
            let _logging_guard = init_console_logging()?;
            print_card(&args)
        }
    }
}

fn init_console_logging() -> anyhow::Result<startup::LoggingGuard> {
    startup::init_logging(&LoggingConfig::console_only())
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))
}

fn load_configuration(args: &ConfigArgs) -> anyhow::Result<Configuration> {
    Configuration::load(args).context("Failed to load configuration")
}

fn check_config(args: &ConfigArgs) -> anyhow::Result<()> {
    let configuration = load_configuration(args)?;
    let report = configuration.validate();
    print!("{}", report);

    if !report.is_valid() {
        bail!("configuration has {} error(s)", report.errors.len());
    }
    Ok(())
}

fn print_card(args: &ConfigArgs) -> anyhow::Result<()> {
    let configuration = load_configuration(args)?;
    let state = AppState::new(configuration)?;
    println!("{}", serde_json::to_string_pretty(&state.card)?);
    Ok(())
}

async fn run(args: &ConfigArgs) -> anyhow::Result<()> {
    let configuration = load_configuration(args)?;

    let logging_config = match configuration.logging_config_path() {
        Some(path) => LoggingConfig::from_file(&path)
            .map_err(|e| anyhow::anyhow!("Failed to load logging config: {}", e))?,
        None => LoggingConfig::default(),
    };
    let _logging_guard = startup::init_logging(&logging_config)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    let report = configuration.validate();
    for warning in &report.warnings {
        warn!("Configuration warning: {}", warning);
    }
    if !report.is_valid() {
        for e in &report.errors {
            error!("Configuration error: {}", e);
        }
        bail!("configuration has {} error(s)", report.errors.len());
    }

    info!(configuration = ?configuration, "Configuration loaded");

    let host = configuration.server_host();
    let port = configuration.server_port();
    let https_port = configuration.server_https_port();
    let tls = configuration.tls();

    let app_state = Arc::new(AppState::new(configuration)?);
    info!(
        skills = app_state.registry.len(),
        quality_api = %app_state.client.current_server(),
        "Quality skills registered"
    );

    let mut servers = Vec::new();

    let http = startup::http_server(app_state.clone(), host.clone(), port)
        .with_context(|| format!("Failed to bind HTTP server on {}:{}", host, port))?;
    info!("HTTP server listening on http://{}:{}", host, port);
    servers.push(http);

    if tls.is_configured() {
        let tls_config = tls.load_server_config()?;
        let https = startup::https_server(app_state.clone(), host.clone(), https_port, tls_config)
            .with_context(|| format!("Failed to bind HTTPS server on {}:{}", host, https_port))?;
        info!("HTTPS server listening on https://{}:{}", host, https_port);
        servers.push(https);
    }

    let handles: Vec<_> = servers.iter().map(|s| s.handle()).collect();
    let shutdown_signal = startup::wait_for_shutdown_signal();
    let mut shutdown_rx = shutdown_signal.subscribe();

    tokio::select! {
        result = futures::future::try_join_all(servers) => {
            if let Err(e) = result {
                error!("Server error: {}", e);
                return Err(e.into());
            }
        }
        _ = shutdown_rx.recv() => {
            startup::stop_servers(&handles, Duration::from_secs(SHUTDOWN_TIMEOUT_SECS)).await;
        }
    }

    info!("SECOM quality agent stopped");
    Ok(())
}
