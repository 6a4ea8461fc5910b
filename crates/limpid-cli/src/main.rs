//! Limpid - simplify documents through a pool of LLM credentials.

use clap::Parser;
use colored::Colorize;
use limpid_cli::credentials::collect_env_credentials;
use limpid_cli::input::read_documents;
use limpid_cli::progress::PipelineProgress;
use limpid_cli::{Cli, CliError, Result};
use limpid_engine::{CredentialPool, EngineConfig, Simplifier};
use limpid_llm::groq::{DEFAULT_ENDPOINT, DEFAULT_MODEL};
use limpid_llm::GroqProvider;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    // Log to stderr; stdout carries only the summary line
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let config = load_config(&cli)?;

    let progress = PipelineProgress::new(cli.quiet);
    let documents = read_documents(&cli.inputs)?;
    progress.reading_done();

    let pool = CredentialPool::from_entries(collect_env_credentials());
    let simplifier = Simplifier::new(build_provider(&cli), config)?;

    let output = simplifier
        .simplify_documents(&documents, &pool, progress.dispatch_callback())
        .await?;

    progress.writing();
    std::fs::write(&cli.output, &output)?;
    progress.finish();

    println!(
        "{} {} ({} bytes)",
        "Simplified output written to".green(),
        cli.output.display().to_string().bold(),
        output.len()
    );

    Ok(())
}

/// Engine configuration from the optional TOML file, with command-line
/// overrides applied on top.
fn load_config(cli: &Cli) -> Result<EngineConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .map_err(|e| CliError::Config(format!("{}: {}", path.display(), e)))?;
            EngineConfig::from_toml(&raw).map_err(CliError::Config)?
        }
        None => EngineConfig::default(),
    };

    if let Some(size) = cli.max_chunk_size {
        config.max_chunk_size = size;
    }

    config.validate().map_err(CliError::Config)?;
    Ok(config)
}

fn build_provider(cli: &Cli) -> GroqProvider {
    let endpoint = cli.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT);
    let model = cli.model.as_deref().unwrap_or(DEFAULT_MODEL);
    GroqProvider::new(endpoint, model)
}
