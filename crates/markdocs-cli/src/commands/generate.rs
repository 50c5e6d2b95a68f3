//! Generate command implementation.
//!
//! Renders the Markdown documentation set for a plugin descriptor:
//! 1. Resolves settings from flags, environment, and the config file
//! 2. Reads and parses the descriptor
//! 3. Renders the overview page and one page per goal
//! 4. Writes the pages below the output directory

use super::{load_config_file, load_descriptor};
use anyhow::{Context, Result};
use clap::Args;
use markdocs_codegen::MarkdownGenerator;
use markdocs_core::cli::{ExitCode, OutputFormat};
use markdocs_core::{ConfigFile, GenerationConfig};
use markdocs_files::{ExportOptions, export_pages};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Arguments of the `generate` command.
///
/// Values given here win over the config file, which wins over the
/// built-in defaults.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateArgs {
    /// Path to the plugin descriptor
    /// (default: target/classes/META-INF/maven/plugin.xml)
    #[arg(env = "MARKDOCS_DESCRIPTOR")]
    pub descriptor: Option<PathBuf>,

    /// Directory the pages are written to (default: target/markdocs)
    #[arg(short, long = "output", env = "MARKDOCS_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Heading of the overview page
    /// (default: "<plugin name> Goals Documentation")
    #[arg(long, env = "MARKDOCS_TITLE")]
    pub title: Option<String>,

    /// Leave existing pages untouched
    #[arg(long)]
    pub no_overwrite: bool,

    /// Write pages in place instead of through a temporary file
    #[arg(long)]
    pub no_atomic: bool,
}

impl GenerateArgs {
    /// Resolves the effective configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use markdocs_cli::commands::generate::GenerateArgs;
    /// use markdocs_core::ConfigFile;
    /// use std::path::PathBuf;
    ///
    /// let file = ConfigFile::from_toml_str("[generate]\noutput_directory = \"docs\"\n").unwrap();
    /// let args = GenerateArgs {
    ///     title: Some("Demo Goals".to_string()),
    ///     ..Default::default()
    /// };
    ///
    /// let config = args.resolve(Some(&file));
    /// assert_eq!(config.output_directory, PathBuf::from("docs"));
    /// assert_eq!(config.title.as_deref(), Some("Demo Goals"));
    /// ```
    #[must_use]
    pub fn resolve(&self, file: Option<&ConfigFile>) -> GenerationConfig {
        let mut config = file.map_or_else(GenerationConfig::default, |file| {
            GenerationConfig::from_section(&file.generate)
        });

        if let Some(descriptor) = &self.descriptor {
            config.descriptor.clone_from(descriptor);
        }
        if let Some(output) = &self.output {
            config.output_directory.clone_from(output);
        }
        if let Some(title) = &self.title {
            config.title = Some(title.clone());
        }
        if self.no_overwrite {
            config.overwrite = false;
        }
        if self.no_atomic {
            config.atomic = false;
        }

        config
    }
}

/// Result of a documentation run.
#[derive(Debug, Serialize)]
pub struct GenerationResult {
    /// Plugin name from the descriptor
    pub plugin: String,
    /// Descriptor that was read
    pub descriptor: String,
    /// Directory the pages went to
    pub output_directory: String,
    /// Number of pages rendered
    pub page_count: usize,
    /// Pages written
    pub pages: Vec<String>,
    /// Existing pages left untouched
    pub skipped: Vec<String>,
}

/// Runs the generate command.
///
/// # Errors
///
/// Returns an error if:
/// - The config file cannot be loaded or the resolved settings are invalid
/// - The descriptor is missing or malformed
/// - A page fails to render
/// - A page cannot be written
pub async fn run(
    args: GenerateArgs,
    config_path: Option<PathBuf>,
    output_format: OutputFormat,
) -> Result<ExitCode> {
    let result = generate(&args, config_path.as_deref()).await?;

    let formatted = crate::formatters::format_output(&result, output_format)?;
    println!("{formatted}");

    Ok(ExitCode::SUCCESS)
}

/// Generates and writes the pages, returning what was done.
///
/// # Errors
///
/// Same as [`run`].
pub async fn generate(args: &GenerateArgs, config_path: Option<&Path>) -> Result<GenerationResult> {
    let file = load_config_file(config_path)?;
    let config = args.resolve(file.as_ref());
    config.validate()?;

    let descriptor = load_descriptor(&config.descriptor).await?;
    if descriptor.commands.is_empty() {
        warn!("Plugin descriptor {} declares no goals", config.descriptor.display());
    }

    let generator = MarkdownGenerator::new().context("failed to initialize page templates")?;
    let docs = generator
        .generate_all(&descriptor, config.effective_title())
        .context("failed to render documentation pages")?;

    let options = ExportOptions::new()
        .with_atomic_writes(config.atomic)
        .with_overwrite(config.overwrite);
    let summary = export_pages(&docs, &config.output_directory, &options).with_context(|| {
        format!(
            "failed to write pages to {}",
            config.output_directory.display()
        )
    })?;

    info!(
        "Generated {} pages for {} in {}",
        docs.page_count(),
        descriptor.name,
        config.output_directory.display()
    );

    Ok(GenerationResult {
        plugin: descriptor.name,
        descriptor: config.descriptor.display().to_string(),
        output_directory: config.output_directory.display().to_string(),
        page_count: docs.page_count(),
        pages: display_all(&summary.written),
        skipped: display_all(&summary.skipped),
    })
}

fn display_all(paths: &[PathBuf]) -> Vec<String> {
    paths.iter().map(|p| p.display().to_string()).collect()
}
