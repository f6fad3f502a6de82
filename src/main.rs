//! ircreply - Decode and inspect IRC numeric replies
//!
//! Reads replies as JSON lines or from the command line and prints their
//! typed fields.

mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use config::{Config, OutputFormat};
use ircreply_core::Registry;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ircreply")]
#[command(about = "Decode and inspect IRC numeric replies")]
#[command(version)]
struct Cli {
    /// Path to a YAML config file
    #[arg(short, long, env = "IRCREPLY_CONFIG")]
    config: Option<PathBuf>,

    /// Output format (overrides the config file)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode replies from a JSON lines file (or stdin)
    Decode {
        /// Input file; reads stdin when omitted
        file: Option<PathBuf>,

        /// Stop at the first line that fails to decode
        #[arg(long)]
        fail_fast: bool,

        /// Check that every decoded reply re-encodes to its input
        #[arg(long)]
        verify: bool,
    },

    /// Decode a single reply
    Parse {
        /// Numeric reply code
        code: u16,

        /// Reply parameters, excluding the source and the code
        params: Vec<String>,
    },

    /// List known replies, or describe one by code or symbol
    Schema {
        /// Reply code (e.g. 353) or symbol (e.g. RPL_NAMREPLY)
        reply: Option<String>,
    },

    /// Write the effective configuration to a YAML file
    InitConfig {
        /// Output path
        #[arg(default_value = "ircreply.yaml")]
        path: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            std::process::exit(1);
        }
    }
}

/// Runs the selected command, returning false when some input failed to
/// decode.
fn run(cli: Cli) -> Result<bool, Box<dyn std::error::Error>> {
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(path) = &cli.config {
        tracing::debug!("loaded config from {}", path.display());
    }
    if let Some(format) = cli.format {
        config.output.format = format;
    }
    if cli.no_color {
        config.output.color = false;
    }
    if !config.output.color {
        colored::control::set_override(false);
    }

    let registry = Registry::builtin();
    let format = config.output.format;

    match cli.command {
        Commands::Decode {
            file,
            fail_fast,
            verify,
        } => {
            config.decode.fail_fast |= fail_fast;
            config.decode.verify |= verify;

            let stdout = io::stdout();
            let summary = match file {
                Some(path) => {
                    let input = BufReader::new(File::open(&path)?);
                    commands::decode_stream(registry, input, stdout.lock(), format, &config.decode)?
                }
                None => commands::decode_stream(
                    registry,
                    io::stdin().lock(),
                    stdout.lock(),
                    format,
                    &config.decode,
                )?,
            };

            tracing::info!(
                "decoded {} replies, {} failed",
                summary.decoded,
                summary.failed
            );
            if summary.failed > 0 && format == OutputFormat::Text {
                eprintln!(
                    "{} {} of {} lines failed",
                    "✗".red(),
                    summary.failed,
                    summary.decoded + summary.failed
                );
            }
            Ok(summary.failed == 0)
        }
        Commands::Parse { code, params } => {
            println!("{}", commands::parse(registry, code, params, format)?);
            Ok(true)
        }
        Commands::Schema { reply } => {
            println!("{}", commands::schema(registry, reply.as_deref(), format)?);
            Ok(true)
        }
        Commands::InitConfig { path } => {
            config.save(&path)?;
            println!("{} Wrote {}", "✓".green(), path.display());
            Ok(true)
        }
    }
}
