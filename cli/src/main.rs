//! # wisp CLI
//!
//! Command-line interface for wisp - a minimal tool-calling agent loop.
//!
//! ## Usage
//!
//! - `wisp "task description"` - Run the loop once against a single prompt
//! - `wisp` - Start an interactive session
//! - `wisp -i "task description"` - Start an interactive session seeded with
//!   an initial prompt
//!
//! Model credentials and defaults are read from the process environment
//! (`WISP_API_KEY` / `OPENAI_API_KEY`, `WISP_MODEL`, `WISP_BASE_URL`) and can
//! be overridden with flags.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod agents;
mod commands;
mod config;
mod tools;

use commands::{interactive_command, run_command};
use config::CliConfigLoader;
use wisp_core::{LogConfig, RunConfig};

/// wisp - a minimal tool-calling agent loop
#[derive(Parser)]
#[command(name = "wisp")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A minimal tool-calling agent loop")]
#[command(long_about = None)]
struct Cli {
    /// API key override
    #[arg(long)]
    api_key: Option<String>,

    /// Base URL override
    #[arg(long)]
    base_url: Option<String>,

    /// Model name override
    #[arg(long)]
    model: Option<String>,

    /// Maximum model invocations per run
    #[arg(long)]
    max_iterations: Option<usize>,

    /// Directory for session log files
    #[arg(long, default_value = "logs")]
    log_dir: PathBuf,

    /// Disable the session log file
    #[arg(long)]
    no_log_file: bool,

    /// Session identifier used in the log file name
    #[arg(long)]
    session_id: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Start an interactive session (optionally seeded with PROMPT)
    #[arg(short, long)]
    interactive: bool,

    /// The prompt to run (single-shot mode unless --interactive)
    prompt: Option<String>,
}

/// Build a configuration loader from CLI arguments
fn build_config_loader(cli: &Cli) -> CliConfigLoader {
    let mut loader = CliConfigLoader::new();

    if let Some(api_key) = &cli.api_key {
        loader = loader.with_api_key_override(api_key.clone());
    }

    if let Some(base_url) = &cli.base_url {
        loader = loader.with_base_url_override(base_url.clone());
    }

    if let Some(model) = &cli.model {
        loader = loader.with_model_override(model.clone());
    }

    loader
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .init();

    let llm_config = build_config_loader(&cli).load()?;

    let log_config = LogConfig {
        log_to_file: !cli.no_log_file,
        log_dir: cli.log_dir.clone(),
        session_id: cli.session_id.clone(),
    };

    let mut run_config = RunConfig::default();
    if let Some(max_iterations) = cli.max_iterations {
        run_config.max_iterations = max_iterations;
    }

    match (cli.prompt, cli.interactive) {
        // A bare prompt runs in single-shot mode
        (Some(prompt), false) => run_command(prompt, llm_config, run_config, log_config).await,
        // --interactive starts a session, optionally seeded with the prompt
        (prompt, true) => interactive_command(prompt, llm_config, run_config, log_config).await,
        // Default to an unseeded interactive session
        (None, false) => interactive_command(None, llm_config, run_config, log_config).await,
    }
}
