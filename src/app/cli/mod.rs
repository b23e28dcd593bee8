//! CLI Adapter.

mod generate;

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::app::config::{AppConfig, load_config};
use crate::domain::AppError;

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "SEO_BRIEF_LOG";

#[derive(Parser)]
#[command(name = "seo-brief")]
#[command(version)]
#[command(
    about = "Assemble SEO blog-post briefs into writing prompts",
    long_about = None
)]
struct Cli {
    /// Config file (defaults to ./seo-brief.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a prompt from flags, an input file, or the interactive form
    #[clap(visible_alias = "g")]
    Generate(generate::GenerateArgs),
    /// Copy a file (or stdin) to the clipboard
    ///
    /// Use `generate --output` to copy a prompt exactly; text piped from
    /// `generate` also carries the newline printed after the prompt.
    #[clap(visible_alias = "c")]
    Copy {
        /// File to copy; reads stdin when omitted
        file: Option<PathBuf>,
    },
    /// List the choices for enumerated form fields
    #[clap(visible_alias = "o")]
    Options,
}

/// Entry point for the CLI.
pub fn run() {
    init_logging();
    let cli = Cli::parse();

    let result: Result<(), AppError> = load_config(cli.config.as_deref()).and_then(|config| {
        match cli.command {
            Commands::Generate(args) => generate::run_generate(config, args),
            Commands::Copy { file } => run_copy(config, file),
            Commands::Options => {
                print!("{}", crate::list_options(&config));
                Ok(())
            }
        }
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("error"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn run_copy(config: AppConfig, file: Option<PathBuf>) -> Result<(), AppError> {
    let text = match file {
        Some(path) => fs::read_to_string(&path).map_err(|e| {
            AppError::config_error(format!("Failed to read {}: {}", path.display(), e))
        })?,
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            text
        }
    };

    let outcome = crate::copy_text(config, &text)?;
    eprintln!("{}", outcome);
    Ok(())
}
