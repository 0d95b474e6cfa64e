//! CLI entrypoint for wifi-chat
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use wifichat_application::{LazyFrameLoader, PromptTemplateFiller, SubmitQuestionUseCase};
use wifichat_infrastructure::{ConfigLoader, FileConfig, HttpChatGateway};
use wifichat_presentation::{ChatRepl, Cli, ConsoleFormatter, TerminalFrameHost, TerminalView};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let _log_guard = init_logging(&cli)?;

    info!("Starting wifi-chat");

    if cli.show_config {
        for line in ConfigLoader::config_sources(cli.config.as_deref()) {
            println!("{}", line);
        }
        return Ok(ExitCode::SUCCESS);
    }

    let config = load_config(&cli)?;

    // === Dependency Injection ===
    let gateway = Arc::new(
        HttpChatGateway::new(&config.chat.endpoint).context("Failed to create chat gateway")?,
    );

    if cli.check {
        let health = gateway.health().await?;
        println!("{} {}", gateway.health_url(), health.status);
        return Ok(if health.is_ok() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    let use_case = SubmitQuestionUseCase::new(gateway.clone()).with_config(config.to_chat_config());

    if cli.is_interactive() {
        let view = TerminalView::new(config.chat.trigger_label.clone()).with_progress(!cli.quiet);
        let frame_host = match std::env::current_dir() {
            Ok(dir) => TerminalFrameHost::new().with_base(dir),
            Err(_) => TerminalFrameHost::new(),
        };
        let repl = ChatRepl::new(use_case, view)
            .with_endpoint(gateway.endpoint().as_str())
            .with_templates(PromptTemplateFiller::new(config.templates.clone()))
            .with_frames(LazyFrameLoader::from_bindings(config.frames.clone()), frame_host);

        repl.run().await?;
        return Ok(ExitCode::SUCCESS);
    }

    // Single question mode
    let Some(question) = cli.question.as_deref() else {
        bail!("Question is required. Use --chat for interactive mode.");
    };

    match use_case.ask(question).await {
        Ok(answer) => {
            println!("{}", answer);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            let text = err.display_text(&use_case.config().messages);
            eprintln!("{}", ConsoleFormatter::error(&err, &text));
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Initialize logging based on verbosity level
fn init_logging(cli: &Cli) -> Result<Option<WorkerGuard>> {
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    match &cli.log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
            Ok(None)
        }
    }
}

/// Load file configuration and apply command-line overrides
fn load_config(cli: &Cli) -> Result<FileConfig> {
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref()).context("Failed to load configuration")?
    };

    if let Some(endpoint) = &cli.endpoint {
        config.chat.endpoint = endpoint.clone();
    }
    if let Some(secs) = cli.timeout {
        config.chat.timeout_secs = Some(secs);
    }

    let issues = config.validate();
    for issue in &issues {
        warn!("Config: {}", issue);
    }
    if let Some(first) = issues.first() {
        bail!("Invalid configuration: {}", first);
    }

    Ok(config)
}
