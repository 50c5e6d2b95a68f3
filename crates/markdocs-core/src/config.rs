//! Configuration for documentation generation.
//!
//! [`GenerationConfig`] is the fully resolved configuration the CLI hands to
//! the pipeline. It is built from built-in defaults, optionally overlaid with
//! the `[generate]` section of a TOML file ([`ConfigFile`]), and finally with
//! command-line flags.
//!
//! # Examples
//!
//! ```
//! use markdocs_core::{ConfigFile, GenerationConfig};
//! use std::path::Path;
//!
//! let file = ConfigFile::from_toml_str(r#"
//!     [generate]
//!     output_directory = "docs/goals"
//!     title = "My Plugin"
//! "#).unwrap();
//!
//! let config = GenerationConfig::from_section(&file.generate);
//! assert_eq!(config.output_directory, Path::new("docs/goals"));
//! assert_eq!(config.title.as_deref(), Some("My Plugin"));
//! assert!(config.overwrite);
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default location of the descriptor inside a Maven build.
pub const DEFAULT_DESCRIPTOR_PATH: &str = "target/classes/META-INF/maven/plugin.xml";

/// Default directory generated pages are written to.
pub const DEFAULT_OUTPUT_DIRECTORY: &str = "target/markdocs";

/// Resolved configuration for one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Path to the plugin descriptor
    pub descriptor: PathBuf,
    /// Directory pages are written to
    pub output_directory: PathBuf,
    /// Overview title; the plugin name is used when unset
    pub title: Option<String>,
    /// Replace pages that already exist
    pub overwrite: bool,
    /// Write through a temporary file and rename
    pub atomic: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            descriptor: PathBuf::from(DEFAULT_DESCRIPTOR_PATH),
            output_directory: PathBuf::from(DEFAULT_OUTPUT_DIRECTORY),
            title: None,
            overwrite: true,
            atomic: true,
        }
    }
}

impl GenerationConfig {
    /// Builds a configuration from defaults overlaid with a file section.
    #[must_use]
    pub fn from_section(section: &GenerateSection) -> Self {
        let defaults = Self::default();
        Self {
            descriptor: section.descriptor.clone().unwrap_or(defaults.descriptor),
            output_directory: section
                .output_directory
                .clone()
                .unwrap_or(defaults.output_directory),
            title: section.title.clone().or(defaults.title),
            overwrite: section.overwrite.unwrap_or(defaults.overwrite),
            atomic: section.atomic.unwrap_or(defaults.atomic),
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the descriptor path or the output
    /// directory is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use markdocs_core::GenerationConfig;
    /// use std::path::PathBuf;
    ///
    /// assert!(GenerationConfig::default().validate().is_ok());
    ///
    /// let config = GenerationConfig {
    ///     output_directory: PathBuf::new(),
    ///     ..Default::default()
    /// };
    /// assert!(config.validate().unwrap_err().is_config_error());
    /// ```
    pub fn validate(&self) -> Result<()> {
        if self.descriptor.as_os_str().is_empty() {
            return Err(Error::ConfigError {
                message: "descriptor path cannot be empty".to_string(),
            });
        }

        if self.output_directory.as_os_str().is_empty() {
            return Err(Error::ConfigError {
                message: "output directory cannot be empty".to_string(),
            });
        }

        Ok(())
    }

    /// Returns the title override, treating a blank title as unset.
    #[must_use]
    pub fn effective_title(&self) -> Option<&str> {
        self.title.as_deref().filter(|t| !t.trim().is_empty())
    }
}

/// Parsed configuration file.
///
/// Every key is optional; missing keys fall back to the defaults of
/// [`GenerationConfig`].
///
/// ```toml
/// [generate]
/// descriptor = "target/classes/META-INF/maven/plugin.xml"
/// output_directory = "target/markdocs"
/// title = "My Plugin Goals"
/// overwrite = true
/// atomic = true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Settings for the `generate` command
    #[serde(default)]
    pub generate: GenerateSection,
}

/// The `[generate]` section of the configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerateSection {
    /// Path to the plugin descriptor
    pub descriptor: Option<PathBuf>,
    /// Directory pages are written to
    pub output_directory: Option<PathBuf>,
    /// Overview title
    pub title: Option<String>,
    /// Replace pages that already exist
    pub overwrite: Option<bool>,
    /// Write through a temporary file and rename
    pub atomic: Option<bool>,
}

impl ConfigFile {
    /// Parses a configuration file from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the text is not valid TOML or
    /// contains unknown keys.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::ConfigError {
            message: format!("failed to parse config file: {e}"),
        })
    }

    /// Loads a configuration file from disk.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IoError`] if the file cannot be read and
    /// [`Error::ConfigError`] if it cannot be parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading configuration from {}", path.display());

        let content = std::fs::read_to_string(path).map_err(|source| Error::IoError {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&content)
    }
}
