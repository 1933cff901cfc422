//! Intake CLI — run the employer document intake workflow.
//!
//! ```bash
//! intake run                       # built-in sample upload
//! intake run upload.yaml --json
//! intake validate upload.yaml
//! intake specialists --specialist-dir ./specialists
//! intake config
//! ```

use clap::{Parser, Subcommand};
use intake_cli::commands;
use intake_cli::commands::config::ConfigOverrides;

/// Intake CLI — document intake workflow
#[derive(Parser)]
#[command(name = "intake", version, about = "Intake CLI — employer document intake workflow")]
pub struct Cli {
    #[command(flatten)]
    overrides: ConfigOverrides,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the intake workflow on an upload manifest
    Run {
        /// Path to the manifest YAML/JSON file (defaults to the sample upload)
        file: Option<String>,
        /// Custom specialist definitions directory
        #[arg(long)]
        specialist_dir: Option<String>,
        /// Print the workflow outcome as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate a manifest without running the workflow
    Validate {
        /// Path to the manifest YAML/JSON file
        file: String,
    },

    /// List available specialist definitions
    Specialists {
        /// Custom specialist definitions directory
        #[arg(long)]
        specialist_dir: Option<String>,
    },

    /// Show the resolved orchestration service configuration
    Config {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "intake_core=warn,intake_cli=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    commands::load_dotenv();
    let config = cli.overrides.resolve();
    if config.is_configured() {
        tracing::info!("[Intake] Orchestrate instance configured: {}", config);
    } else {
        tracing::debug!("[Intake] No Orchestrate credentials; running locally");
    }

    let result = match cli.command {
        Some(Commands::Run {
            file,
            specialist_dir,
            json,
        }) => commands::run::run(file.as_deref(), specialist_dir.as_deref(), json).await,
        Some(Commands::Validate { file }) => commands::run::validate(&file).await,
        Some(Commands::Specialists { specialist_dir }) => {
            commands::specialists::list(specialist_dir.as_deref()).await
        }
        Some(Commands::Config { json }) => commands::config::show(&config, json).await,
        None => {
            // No subcommand — show help
            use clap::CommandFactory;
            Cli::command().print_help().ok();
            println!();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
