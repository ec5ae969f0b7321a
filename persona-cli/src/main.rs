//! Persona CLI - Command line interface for the Persona training coach
//!
//! Reads saved training plans and turns them into workout entries.

mod commands;

use clap::{Parser, Subcommand};
use persona_core::{Config, OutputFormat};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{DaysArgs, FormArgs, ShowArgs};

/// Persona: personal training plans and workout logging
#[derive(Parser, Debug)]
#[command(name = "persona")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format: text or json (overrides config and PERSONA_OUTPUT_FORMAT)
    #[arg(long, global = true)]
    format: Option<OutputFormat>,

    /// Weight pre-filled into sets built from a plan (overrides config and PERSONA_DEFAULT_WEIGHT)
    #[arg(long, global = true)]
    default_weight: Option<f64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show version information
    Version,

    /// List the training days and exercises in a plan
    #[command(visible_alias = "d")]
    Days(DaysArgs),

    /// Build a workout entry pre-filled from a plan day
    #[command(visible_alias = "f")]
    Form(FormArgs),

    /// Print a saved plan
    Show(ShowArgs),

    /// Show current configuration
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        tracing::info!("Verbose mode enabled");
    }

    // Load configuration with overrides
    let config = Config::load_with_overrides(cli.default_weight, cli.format)?;

    if cli.verbose {
        tracing::info!(
            default_weight = config.log.default_weight,
            format = %config.output.format,
            "Configuration loaded"
        );
    }

    match cli.command {
        Some(Commands::Version) => {
            println!("persona {}", env!("CARGO_PKG_VERSION"));
        }
        Some(Commands::Days(args)) => {
            args.execute(cli.verbose, &config).await?;
        }
        Some(Commands::Form(args)) => {
            args.execute(cli.verbose, &config).await?;
        }
        Some(Commands::Show(args)) => {
            args.execute().await?;
        }
        Some(Commands::Config) => {
            println!("Persona Configuration");
            println!("=====================");
            println!();
            println!("Log Settings:");
            println!("  default_weight: {}", config.log.default_weight);
            println!();
            println!("Output Settings:");
            println!("  format: {}", config.output.format);
            println!();
            if let Some(path) = Config::default_config_path() {
                println!("Config file: {}", path.display());
                if path.exists() {
                    println!("  (exists)");
                } else {
                    println!("  (not found - using defaults)");
                }
            }
        }
        None => {
            println!("Persona - Personal training plans and workout logging");
            println!();
            println!("Use --help for usage information");
        }
    }

    Ok(())
}
