//! markdocs: Markdown documentation for Maven plugins.
//!
//! Reads a plugin descriptor (`plugin.xml`) and writes an overview page plus
//! one page per goal.
//!
//! # Architecture
//!
//! The CLI is organized around subcommands:
//! - `generate` - Render and write the documentation pages
//! - `inspect` - Print the parsed descriptor model
//! - `completions` - Generate shell completions
//!
//! # Examples
//!
//! ```bash
//! # Document the plugin built in the current Maven project
//! markdocs generate
//!
//! # Explicit descriptor and output directory
//! markdocs generate target/classes/META-INF/maven/plugin.xml -o docs/goals
//!
//! # Look at one goal as JSON
//! markdocs --format json inspect --goal check-project
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use markdocs_cli::commands::{self, generate::GenerateArgs, inspect::InspectArgs};
use markdocs_cli::exit_code_for;
use markdocs_core::cli::{ExitCode, OutputFormat};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Generate Markdown documentation from a Maven plugin descriptor.
#[derive(Parser, Debug)]
#[command(name = "markdocs")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (json, text, pretty)
    #[arg(long = "format", global = true, default_value = "pretty")]
    format: String,

    /// Configuration file (TOML)
    #[arg(long, global = true, env = "MARKDOCS_CONFIG")]
    config: Option<PathBuf>,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the documentation pages for a plugin descriptor.
    ///
    /// Writes `README.md` with a linked list of goals and one
    /// `<goal>.md` page per goal.
    ///
    /// # Examples
    ///
    /// ```bash
    /// markdocs generate
    /// markdocs generate plugin.xml --output docs --title "Easy JaCoCo Goals"
    /// markdocs --config markdocs.toml generate --no-overwrite
    /// ```
    Generate(GenerateArgs),

    /// Parse a plugin descriptor and print its goals and parameters.
    ///
    /// Nothing is written to disk.
    Inspect(InspectArgs),

    /// Generate shell completions.
    ///
    /// Generates completion scripts for various shells that can be
    /// sourced or saved to enable tab completion for this CLI.
    Completions {
        /// Target shell for completion generation
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose)?;

    let exit_code = match run(cli).await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            exit_code_for(&err)
        }
    };

    std::process::exit(exit_code.as_i32());
}

/// Initializes logging infrastructure.
///
/// Logs go to stderr so that command output on stdout stays parseable.
///
/// # Errors
///
/// Returns an error if logging initialization fails.
fn init_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()?;

    Ok(())
}

/// Parses the output format and dispatches the command.
async fn run(cli: Cli) -> Result<ExitCode> {
    let output_format = cli.format.parse::<OutputFormat>()?;
    execute_command(cli.command, cli.config, output_format).await
}

/// Executes the specified CLI command.
///
/// Routes commands to their respective handlers and returns an exit code.
///
/// # Errors
///
/// Returns an error if command execution fails.
async fn execute_command(
    command: Commands,
    config: Option<PathBuf>,
    output_format: OutputFormat,
) -> Result<ExitCode> {
    match command {
        Commands::Generate(args) => commands::generate::run(args, config, output_format).await,
        Commands::Inspect(args) => commands::inspect::run(args, config, output_format).await,
        Commands::Completions { shell } => {
            use clap::CommandFactory;
            let mut cmd = Cli::command();
            commands::completions::run(shell, &mut cmd).await
        }
    }
}
