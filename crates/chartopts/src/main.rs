use clap::{Parser, Subcommand};
use starbase::{App, AppResult, AppSession};
use std::path::PathBuf;

use chartopts::CliConfig;
use chartopts::commands::{run_check, run_normalize, run_schema};
use chartopts::logging::init_logging;

/// chartopts - check and normalize chart option documents
#[derive(Parser)]
#[command(name = "chartopts")]
#[command(about = "Check, normalize and describe chart option JSON", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file (defaults to ./chartopts.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Subcommand)]
enum Commands {
    /// Decode a chart option file and report whether it is valid
    Check {
        /// Path to the chart option JSON file
        file: PathBuf,
        /// Fail when the file has keys the chart model does not carry
        #[arg(long)]
        strict: bool,
    },
    /// Decode a chart option file and write it back in canonical form
    Normalize {
        /// Path to the chart option JSON file
        file: PathBuf,
        /// Output file path (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Write compact JSON regardless of configuration
        #[arg(long)]
        compact: bool,
    },
    /// Generate JSON Schema for chart option documents
    Schema {
        /// Output file path (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone)]
struct ChartoptsSession {
    command: Commands,
    config: CliConfig,
}

#[async_trait::async_trait]
impl AppSession for ChartoptsSession {
    async fn execute(&mut self) -> AppResult {
        match &self.command {
            Commands::Check { file, strict } => run_check(file.clone(), *strict),
            Commands::Normalize {
                file,
                output,
                compact,
            } => run_normalize(
                file.clone(),
                output.clone(),
                self.config.output.pretty && !*compact,
            ),
            Commands::Schema { output } => run_schema(output.clone()),
        }
    }
}

#[tokio::main]
async fn main() -> starbase::MainResult {
    let cli = Cli::parse();

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = CliConfig::discover(cli.config.as_deref(), &cwd)?;
    init_logging(&config.logging);

    let session = ChartoptsSession {
        command: cli.command,
        config,
    };

    let exit_code = App::default()
        .run(
            session,
            |mut session| async move { session.execute().await },
        )
        .await?;

    Ok(std::process::ExitCode::from(exit_code))
}
