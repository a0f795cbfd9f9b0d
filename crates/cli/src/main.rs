use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use siaga_agent::{Assistant, RequestParams};
use siaga_core::{Config, LoggingConfig, init_logging};
use siaga_providers::ProviderFactory;
use siaga_ui::App;

/// Siaga - asisten informasi banjir di terminal
#[derive(Parser, Debug)]
#[command(name = "siaga")]
#[command(about = "Terminal chat client for flood and disaster information", long_about = None)]
#[command(version = "0.1.0")]
struct Cli {
    /// Path to siaga.toml (default: ./siaga.toml)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the interactive chat TUI
    Chat,
    /// Ask a single question and print the reply (non-interactive mode)
    Ask {
        /// The question to send
        #[arg(required = true, value_name = "QUESTION")]
        question: Vec<String>,
    },
    /// Probe the completion endpoint and report latency
    Status,
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.unwrap_or_else(|| PathBuf::from("siaga.toml"));
    let config = load_or_create_config(&config_path)?;

    init_logging(Some(LoggingConfig::from(config.logging.clone())))
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    if cli.verbose {
        println!("{} Using config: {}", "Info:".blue().bold(), config_path.display());
        println!("{} Model: {}", "Info:".blue().bold(), config.provider.model.cyan());
        println!("{} Endpoint: {}", "Info:".blue().bold(), config.provider.base_url);
    }

    match cli.command {
        Commands::Chat => cmd_chat(config).await,
        Commands::Ask { question } => cmd_ask(config, question.join(" ")).await,
        Commands::Status => cmd_status(config).await,
    }
}

/// Load config from file or create from example
fn load_or_create_config(path: &Path) -> Result<Config> {
    if path.exists() {
        Config::from_file(path).map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    } else {
        println!("{} Config not found at {}", "Warning:".yellow().bold(), path.display());
        println!("{} Creating config from example...", "Info:".blue().bold());

        std::fs::write(path, Config::example()).context("Failed to create config")?;

        println!(
            "{} Created config at {}. Set provider.api_key (or SIAGA_API_KEY) and run again.",
            "Success:".green().bold(),
            path.display()
        );

        anyhow::bail!("Please edit siaga.toml with your settings and run again")
    }
}

/// Start the interactive chat TUI
async fn cmd_chat(config: Config) -> Result<()> {
    let provider = ProviderFactory::create_from_settings(&config.provider)
        .map_err(|e| anyhow::anyhow!("Failed to create provider: {}", e))?;

    let assistant = Assistant::new(provider, RequestParams::from(&config.provider));
    let mut app = App::new(assistant, config.provider.model.clone());

    app.run().await.context("TUI session failed")?;
    Ok(())
}

/// One-shot question, reply printed to stdout
async fn cmd_ask(config: Config, question: String) -> Result<()> {
    if question.trim().is_empty() {
        anyhow::bail!("Question must not be empty");
    }

    let provider = ProviderFactory::create_from_settings(&config.provider)
        .map_err(|e| anyhow::anyhow!("Failed to create provider: {}", e))?;

    let mut assistant = Assistant::new(provider, RequestParams::from(&config.provider));

    println!("{} {}", "Anda:".green().bold(), question);
    let reply = assistant.send(&question).await;
    println!("{} {}", "Siaga:".cyan().bold(), reply);

    Ok(())
}

/// Probe the completion endpoint
async fn cmd_status(config: Config) -> Result<()> {
    let provider = ProviderFactory::create_from_settings(&config.provider)
        .map_err(|e| anyhow::anyhow!("Failed to create provider: {}", e))?;

    let checker = siaga_providers::ProviderHealthChecker::new(provider, Duration::from_secs(15));
    let result = checker.check().await.map_err(|e| anyhow::anyhow!("Health check failed: {}", e))?;

    if result.healthy {
        println!(
            "{} {} reachable ({} ms)",
            "OK:".green().bold(),
            config.provider.base_url,
            result.latency_ms
        );
    } else {
        println!(
            "{} {} unreachable: {}",
            "FAIL:".red().bold(),
            config.provider.base_url,
            result.error.unwrap_or_else(|| "unknown error".to_string())
        );
        std::process::exit(1);
    }

    Ok(())
}
