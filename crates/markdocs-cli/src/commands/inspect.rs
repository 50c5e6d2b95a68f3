//! Inspect command implementation.
//!
//! Parses a plugin descriptor and prints the model, without rendering or
//! writing anything.

use super::{load_config_file, load_descriptor};
use anyhow::Result;
use clap::Args;
use markdocs_core::cli::{ExitCode, OutputFormat};
use markdocs_core::{Error, GenerationConfig};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Arguments of the `inspect` command.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct InspectArgs {
    /// Path to the plugin descriptor
    /// (default: target/classes/META-INF/maven/plugin.xml)
    #[arg(env = "MARKDOCS_DESCRIPTOR")]
    pub descriptor: Option<PathBuf>,

    /// Show a single goal instead of the whole descriptor
    #[arg(short, long)]
    pub goal: Option<String>,
}

/// Runs the inspect command.
///
/// # Errors
///
/// Returns an error if the descriptor is missing or malformed, or if the
/// requested goal does not exist.
pub async fn run(
    args: InspectArgs,
    config_path: Option<PathBuf>,
    output_format: OutputFormat,
) -> Result<ExitCode> {
    let formatted = inspect(&args, config_path.as_deref(), output_format).await?;
    println!("{formatted}");
    Ok(ExitCode::SUCCESS)
}

/// Parses the descriptor and formats the requested part of it.
///
/// # Errors
///
/// Same as [`run`].
pub async fn inspect(
    args: &InspectArgs,
    config_path: Option<&Path>,
    output_format: OutputFormat,
) -> Result<String> {
    let path = match &args.descriptor {
        Some(path) => path.clone(),
        None => load_config_file(config_path)?.map_or_else(
            || GenerationConfig::default().descriptor,
            |file| GenerationConfig::from_section(&file.generate).descriptor,
        ),
    };

    let descriptor = load_descriptor(&path).await?;

    match &args.goal {
        Some(name) => {
            let command = descriptor.command(name).ok_or_else(|| {
                Error::InvalidArgument(format!(
                    "goal '{name}' not found (available: {})",
                    descriptor.command_names().join(", ")
                ))
            })?;
            crate::formatters::format_output(command, output_format)
        }
        None => crate::formatters::format_output(&Summary::from(&descriptor), output_format),
    }
}

/// Descriptor model with a goal count up front.
#[derive(Debug, Serialize)]
struct Summary<'a> {
    goal_count: usize,
    #[serde(flatten)]
    descriptor: &'a markdocs_core::Descriptor,
}

impl<'a> From<&'a markdocs_core::Descriptor> for Summary<'a> {
    fn from(descriptor: &'a markdocs_core::Descriptor) -> Self {
        Self {
            goal_count: descriptor.command_count(),
            descriptor,
        }
    }
}
