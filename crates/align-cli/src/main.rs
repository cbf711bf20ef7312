//! `align`: score how well one learning outcome supports another.
//!
//! Commands:
//! - `analyze`: score one source/target pair
//! - `concepts`: list the concept catalog
//! - `status`: report engine initialization health
//! - `matrix`: score every source against every target from a JSON file
//! - `self-test`: analyze the built-in sample pair

use std::path::PathBuf;
use std::process::ExitCode;

use align_core::config::{AlignConfig, CliOverrides};
use align_core::tracing_setup::init_tracing;
use clap::{Parser, Subcommand};

mod commands;
mod output;

#[derive(Parser)]
#[command(name = "align")]
#[command(version)]
#[command(about = "Score the alignment between learning outcome statements")]
#[command(propagate_version = true)]
struct Cli {
    /// Config file (defaults to ./align.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Semantic backend override: concept_overlap or embedding
    #[arg(long, global = true)]
    backend: Option<String>,

    /// Concept catalog TOML file override
    #[arg(long, global = true)]
    catalog: Option<String>,

    /// Log filter override, e.g. debug or align_scoring=trace
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score one source/target pair
    Analyze(commands::analyze::AnalyzeArgs),
    /// List catalog concepts and cognitive levels
    Concepts,
    /// Report whether the engine initializes
    Status,
    /// Score every source against every target
    Matrix(commands::matrix::MatrixArgs),
    /// Analyze the built-in sample pair
    SelfTest,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        similarity_backend: cli.backend.clone(),
        catalog_path: cli.catalog.clone(),
        log_level: cli.log_level.clone(),
        json_logs: None,
    };
    let config = match AlignConfig::load(cli.config.as_deref(), Some(&overrides)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(commands::CONFIG_EXIT);
        }
    };
    init_tracing(&config.observability);

    let result = match cli.command {
        Commands::Analyze(args) => commands::analyze::run(config, args, cli.json),
        Commands::Concepts => commands::concepts::run(config, cli.json),
        Commands::Status => commands::status::run(config, cli.json),
        Commands::Matrix(args) => commands::matrix::run(config, args, cli.json),
        Commands::SelfTest => commands::self_test::run(config, cli.json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(commands::exit_status(&e))
        }
    }
}
