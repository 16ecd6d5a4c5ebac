//! CLI entrypoint for nlq
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow};
use clap::{CommandFactory, Parser};
use nlq_application::{
    NoPipelineLogger, PipelineLogger, TranslateMessageUseCase, TranslationResponse,
};
use nlq_domain::default_registry;
use nlq_infrastructure::{
    AnthropicClassifier, ConfigLoader, FileConfig, GatewayClient, JsonlPipelineLogger,
    TracingPipelineLogger,
};
use nlq_presentation::{
    AppState, Cli, Command, ConsoleFormatter, OutputFormat, router, serve, verbosity_filter,
};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    if cli.show_config {
        print_config(&config, cli.config.as_deref())?;
        return Ok(());
    }

    let Some(command) = cli.command.clone() else {
        Cli::command().print_help()?;
        return Ok(());
    };

    // Held until exit so buffered log lines are flushed
    let _log_guard = init_logging(cli.verbose, &config)?;

    config.validate().context("Invalid configuration")?;

    let registry = Arc::new(default_registry());

    if command == Command::Tools {
        print!("{}", ConsoleFormatter::format_tools(registry.list_tools()));
        return Ok(());
    }

    // === Dependency Injection ===
    info!(
        "Registered tools: {}",
        registry.names().collect::<Vec<_>>().join(", ")
    );
    let gateway = Arc::new(GatewayClient::from_config(&config.gateway)?);
    let mut use_case = TranslateMessageUseCase::new(registry, gateway)
        .with_pipeline_logger(pipeline_logger(&config));

    match AnthropicClassifier::from_config(&config.classifier) {
        Ok(classifier) => {
            info!("AI classifier enabled ({})", config.classifier.model);
            use_case = use_case.with_classifier(Arc::new(classifier));
        }
        Err(e) => warn!("{}; using keyword rules only", e),
    }

    match command {
        Command::Serve { host, port } => {
            let mut server = config.server.clone();
            if let Some(host) = host {
                server.host = host;
            }
            if let Some(port) = port {
                server.port = port;
            }
            let address = server.bind_address();
            info!(
                "Strategies: {}",
                use_case.resolver().strategy_names().join(" -> ")
            );
            println!("nlq listening on http://{}", address);
            serve(&address, router(AppState::new(use_case)))
                .await
                .with_context(|| format!("Server on {} failed", address))?;
        }
        Command::Ask { .. } => {
            let message = command.message().unwrap_or_default();
            let response = use_case.execute(&message).await;
            println!("{}", render(&response, cli.output));
        }
        Command::Tools => {}
    }

    Ok(())
}

fn render(response: &TranslationResponse, format: OutputFormat) -> String {
    match format {
        OutputFormat::Pretty => ConsoleFormatter::format(response),
        OutputFormat::Json => ConsoleFormatter::format_json(response),
    }
}

/// Initialize tracing: stderr always, plus `logging.file` when configured.
///
/// `RUST_LOG` takes precedence over the `-v` count.
fn init_logging(verbose: u8, config: &FileConfig) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity_filter(verbose)));

    let (file_layer, guard) = match &config.logging.file {
        Some(path) => {
            let directory = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let file_name = path
                .file_name()
                .ok_or_else(|| anyhow!("Invalid log file path: {}", path.display()))?;
            std::fs::create_dir_all(directory)
                .with_context(|| format!("Could not create {}", directory.display()))?;

            let appender = tracing_appender::rolling::never(directory, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(file_layer)
        .init();

    Ok(guard)
}

fn pipeline_logger(config: &FileConfig) -> Arc<dyn PipelineLogger> {
    match &config.logging.pipeline_log {
        Some(path) => match JsonlPipelineLogger::new(path) {
            Some(logger) => Arc::new(logger),
            None => Arc::new(NoPipelineLogger),
        },
        None => Arc::new(TracingPipelineLogger),
    }
}

fn print_config(config: &FileConfig, explicit: Option<&Path>) -> Result<()> {
    for source in ConfigLoader::config_sources(explicit) {
        println!("{}", source);
    }
    println!();
    println!("Effective configuration:");
    println!("{}", config.to_toml().context("Could not render configuration")?);
    Ok(())
}
