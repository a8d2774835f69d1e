//! Gunghap CLI
//!
//! Command-line interface for Hangul name compatibility scoring.

mod config;
mod render;

use clap::{Parser, Subcommand};
use config::{CliConfig, LoggingConfig, OutputFormat};
use gunghap_core::prelude::*;
use gunghap_core::validate::normalize_name;
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "gunghap")]
#[command(version)]
#[command(about = "이름 궁합 - Compatibility score of two Hangul names", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(
        short,
        long,
        global = true,
        env = "GUNGHAP_CONFIG",
        default_value = "~/.gunghap/gunghap.toml"
    )]
    config: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Score two names
    Score {
        /// First name
        first: String,

        /// Second name
        second: String,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,

        /// Skip the pyramid
        #[arg(long)]
        no_pyramid: bool,

        /// Print the stroke table of both names
        #[arg(long)]
        breakdown: bool,
    },

    /// Show how a name decomposes, without validating it
    Decompose {
        /// Name to decompose
        name: String,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the active validation rules
    Rules,
}

#[derive(Serialize)]
struct ScoreReport<'a> {
    first_name: &'a Name,
    second_name: &'a Name,
    #[serde(flatten)]
    result: &'a CompatibilityResult,
}

fn init_logging(verbose: bool, logging: &LoggingConfig) {
    let default_level = if verbose { "debug" } else { logging.level.as_str() };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let registry = tracing_subscriber::registry().with(env_filter);
    match logging.format {
        OutputFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init(),
        OutputFormat::Text => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}

fn log_decomposition(who: &str, name: &Name) {
    for (i, row) in decompose_for_display(name).iter().enumerate() {
        let parts = row.decomposition.components();
        tracing::debug!(
            who,
            i,
            syllable = %row.syllable,
            initial = ?parts.map(|p| p.initial),
            vowel = ?parts.map(|p| p.vowel),
            final_slot = ?parts.map(|p| p.final_slot),
            initial_strokes = ?row.initial_strokes,
            vowel_strokes = ?row.vowel_strokes,
            final_strokes = ?row.final_strokes,
            total = ?row.total,
            "decomposed syllable"
        );
    }
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config_path = config::expand_path(&cli.config);
    let config = CliConfig::load(&config_path)?;
    init_logging(cli.verbose, &config.logging);
    tracing::debug!(path = ?config_path, "configuration loaded");

    match cli.command {
        Commands::Score {
            first,
            second,
            json,
            no_pyramid,
            breakdown,
        } => {
            let (first, second) = validate_pair(&first, &second, &config.validation)?;
            log_decomposition("first", &first);
            log_decomposition("second", &second);

            let result = compute_compatibility(&first, &second);
            tracing::info!(first = %first, second = %second, score = result.score, "scored");

            let format = if json { OutputFormat::Json } else { config.display.format };
            match format {
                OutputFormat::Json => {
                    let report = ScoreReport {
                        first_name: &first,
                        second_name: &second,
                        result: &result,
                    };
                    println!("{}", serde_json::to_string_pretty(&report)?);
                }
                OutputFormat::Text => {
                    if breakdown || config.display.breakdown {
                        for name in [&first, &second] {
                            print_lines(&render::breakdown_lines(name, &decompose_for_display(name)));
                        }
                        println!();
                    }
                    if config.display.pyramid && !no_pyramid {
                        print_lines(&render::pyramid_lines(&first, &second, &result));
                        println!();
                    }
                    println!("{}", render::score_line(result.score));
                }
            }
        }

        Commands::Decompose { name, json } => {
            let name = Name::new(normalize_name(&name));
            let rows = decompose_for_display(&name);

            if json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                print_lines(&render::breakdown_lines(&name, &rows));
            }
        }

        Commands::Rules => {
            println!("Config: {}", config_path.display());
            println!("Minimum syllables per name: {}", config.validation.min_syllables);
            println!("Maximum length difference: {}", config.validation.max_length_diff);
        }
    }

    Ok(())
}

/// Process status for a failed run: 2 for rejected input, 1 otherwise
fn exit_status(err: &anyhow::Error) -> u8 {
    let invalid_input = err
        .downcast_ref::<GunghapError>()
        .is_some_and(GunghapError::is_recoverable);
    if invalid_input {
        2
    } else {
        1
    }
}

fn exit_code(err: &anyhow::Error) -> ExitCode {
    ExitCode::from(exit_status(err))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            exit_code(&err)
        }
    }
}
