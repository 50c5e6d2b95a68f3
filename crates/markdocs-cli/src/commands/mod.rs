//! Command implementations for the markdocs CLI.
//!
//! Each command module parses its arguments, does its work, and formats
//! output according to the requested format. Helpers shared by the
//! descriptor-reading commands live here.

pub mod completions;
pub mod generate;
pub mod inspect;

use anyhow::{Context, Result};
use markdocs_core::{ConfigFile, Descriptor, Error};
use markdocs_parser::DescriptorParser;
use std::io;
use std::path::Path;
use tracing::info;

/// Loads the configuration file, if one was given.
pub(crate) fn load_config_file(path: Option<&Path>) -> Result<Option<ConfigFile>> {
    let Some(path) = path else {
        return Ok(None);
    };

    let file = ConfigFile::load(path)
        .with_context(|| format!("failed to load configuration file {}", path.display()))?;
    Ok(Some(file))
}

/// Reads and parses a plugin descriptor.
///
/// Goals without a name are skipped, since they have no page to land on.
pub(crate) async fn load_descriptor(path: &Path) -> Result<Descriptor> {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(source) => {
            let not_found = source.kind() == io::ErrorKind::NotFound;
            let err = anyhow::Error::new(Error::IoError {
                path: path.to_path_buf(),
                source,
            });
            if not_found {
                return Err(err.context(format!("Plugin descriptor not found: {}", path.display())));
            }
            return Err(err.context("failed to read plugin descriptor"));
        }
    };

    info!("Parsing plugin descriptor {} ({} bytes)", path.display(), bytes.len());

    DescriptorParser::new()
        .skip_unnamed(true)
        .parse(&bytes)
        .with_context(|| format!("failed to parse plugin descriptor {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exit_code_for;
    use markdocs_core::cli::ExitCode;
    use tempfile::TempDir;

    #[test]
    fn test_load_config_file_none() {
        assert!(load_config_file(None).unwrap().is_none());
    }

    #[test]
    fn test_load_config_file_missing() {
        let temp_dir = TempDir::new().unwrap();
        let err = load_config_file(Some(&temp_dir.path().join("markdocs.toml"))).unwrap_err();
        assert_eq!(exit_code_for(&err), ExitCode::NOT_FOUND);
    }

    #[test]
    fn test_load_config_file_invalid() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("markdocs.toml");
        std::fs::write(&path, "[generate]\ntitel = \"typo\"\n").unwrap();

        let err = load_config_file(Some(&path)).unwrap_err();
        assert_eq!(exit_code_for(&err), ExitCode::INVALID_INPUT);
    }

    #[tokio::test]
    async fn test_load_descriptor_missing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("plugin.xml");

        let err = load_descriptor(&path).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("Plugin descriptor not found: {}", path.display())
        );
        assert_eq!(exit_code_for(&err), ExitCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_load_descriptor_malformed() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("plugin.xml");
        std::fs::write(&path, "<plugin><goals>").unwrap();

        let err = load_descriptor(&path).await.unwrap_err();
        assert_eq!(exit_code_for(&err), ExitCode::INVALID_INPUT);
    }

    #[tokio::test]
    async fn test_load_descriptor_skips_unnamed_goals() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("plugin.xml");
        std::fs::write(
            &path,
            "<plugin><artifactId>demo</artifactId><goals>\
             <goal><goal>run</goal></goal><goal><description>nameless</description></goal>\
             </goals></plugin>",
        )
        .unwrap();

        let descriptor = load_descriptor(&path).await.unwrap();
        assert_eq!(descriptor.command_names(), vec!["run"]);
    }
}
