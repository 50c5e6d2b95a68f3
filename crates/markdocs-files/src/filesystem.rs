//! Filesystem export for generated pages.
//!
//! Export runs in three phases: every page path is validated, every parent
//! directory is created, then pages are written one by one. A rejected path
//! stops the export before anything touches the disk.
//!
//! # Examples
//!
//! ```
//! use markdocs_codegen::{GeneratedDocs, GeneratedPage};
//! use markdocs_files::{ExportOptions, export_pages};
//! # use tempfile::TempDir;
//!
//! # let temp_dir = TempDir::new().unwrap();
//! let output_dir = temp_dir.path().join("docs");
//! let docs = GeneratedDocs {
//!     pages: vec![GeneratedPage {
//!         path: "help.md".to_string(),
//!         content: "# Help Goal\n".to_string(),
//!     }],
//! };
//!
//! let summary = export_pages(&docs, &output_dir, &ExportOptions::default()).unwrap();
//!
//! assert_eq!(summary.written.len(), 1);
//! assert!(output_dir.join("help.md").exists());
//! ```

use markdocs_codegen::GeneratedDocs;
use markdocs_core::{Error, Result};
use std::collections::BTreeSet;
use std::ffi::OsString;
use std::fs;
use std::io::{self, Write};
use std::path::{Component, Path, PathBuf};

/// Options for page export.
///
/// # Examples
///
/// ```
/// use markdocs_files::ExportOptions;
///
/// let options = ExportOptions::default()
///     .with_atomic_writes(false)
///     .with_overwrite(false);
///
/// assert!(!options.atomic);
/// assert!(!options.overwrite);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportOptions {
    /// Use atomic writes (write to temp file, then rename)
    pub atomic: bool,
    /// Overwrite existing files
    pub overwrite: bool,
}

impl ExportOptions {
    /// Creates new export options with defaults.
    ///
    /// Defaults:
    /// - atomic: true
    /// - overwrite: true
    #[must_use]
    pub const fn new() -> Self {
        Self {
            atomic: true,
            overwrite: true,
        }
    }

    /// Sets whether to use atomic writes.
    #[must_use]
    pub const fn with_atomic_writes(mut self, atomic: bool) -> Self {
        self.atomic = atomic;
        self
    }

    /// Sets whether to overwrite existing files.
    #[must_use]
    pub const fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of an export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportSummary {
    /// Files written, in page order
    pub written: Vec<PathBuf>,
    /// Existing files left untouched because overwriting was disabled
    pub skipped: Vec<PathBuf>,
}

/// Writes every page of `docs` below `output_dir`.
///
/// The output directory and any parent directories of nested pages are
/// created when missing.
///
/// # Errors
///
/// Returns [`Error::InvalidPath`] if any page path is empty, absolute,
/// contains `..`, or has an empty file name; nothing is written in that case.
/// Returns [`Error::IoError`] if a directory or file cannot be written.
pub fn export_pages(
    docs: &GeneratedDocs,
    output_dir: impl AsRef<Path>,
    options: &ExportOptions,
) -> Result<ExportSummary> {
    let base = output_dir.as_ref();

    // Phase 1: Validate all page paths
    let targets = docs
        .pages
        .iter()
        .map(|page| validate_page_path(&page.path).map(|relative| (base.join(relative), page)))
        .collect::<Result<Vec<_>>>()?;

    // Phase 2: Create all directories in one pass
    let dirs: BTreeSet<&Path> = std::iter::once(base)
        .chain(targets.iter().filter_map(|(path, _)| path.parent()))
        .collect();
    for dir in dirs {
        fs::create_dir_all(dir).map_err(|source| Error::IoError {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    // Phase 3: Write all files
    let mut summary = ExportSummary::default();
    for (path, page) in targets {
        if !options.overwrite && path.exists() {
            tracing::debug!("Skipping existing page: {}", path.display());
            summary.skipped.push(path);
            continue;
        }

        write_page(&path, &page.content, options)?;
        tracing::debug!("Wrote page: {}", path.display());
        summary.written.push(path);
    }

    tracing::info!(
        "Exported {} pages to {} ({} skipped)",
        summary.written.len(),
        base.display(),
        summary.skipped.len()
    );

    Ok(summary)
}

/// Checks that a page path stays inside the output directory.
///
/// # Errors
///
/// Returns [`Error::InvalidPath`] if the path is empty, absolute, contains a
/// `..` component, or names a file with an empty stem such as `.md`.
///
/// # Examples
///
/// ```
/// use markdocs_files::validate_page_path;
///
/// assert!(validate_page_path("check-project.md").is_ok());
/// assert!(validate_page_path("../escape.md").unwrap_err().is_invalid_path());
/// assert!(validate_page_path("/etc/passwd").unwrap_err().is_invalid_path());
/// assert!(validate_page_path(".md").unwrap_err().is_invalid_path());
/// ```
pub fn validate_page_path(page_path: &str) -> Result<&Path> {
    let invalid = |reason: &str| Error::InvalidPath {
        path: page_path.to_string(),
        reason: reason.to_string(),
    };

    if page_path.trim().is_empty() {
        return Err(invalid("path is empty"));
    }

    let path = Path::new(page_path);
    if path.is_absolute() || page_path.starts_with('/') || page_path.starts_with('\\') {
        return Err(invalid("absolute paths are not allowed"));
    }

    for component in path.components() {
        match component {
            Component::ParentDir => {
                return Err(invalid("parent directory components are not allowed"));
            }
            Component::RootDir | Component::Prefix(_) => {
                return Err(invalid("absolute paths are not allowed"));
            }
            Component::CurDir | Component::Normal(_) => {}
        }
    }

    let has_stem = path
        .file_stem()
        .is_some_and(|stem| !stem.is_empty() && !stem.to_string_lossy().starts_with('.'));
    if !has_stem {
        return Err(invalid("file name is empty"));
    }

    Ok(path)
}

/// Writes file content to disk.
///
/// If atomic mode is enabled, writes to `<file>.tmp` then renames.
/// Otherwise, writes directly.
fn write_page(path: &Path, content: &str, options: &ExportOptions) -> Result<()> {
    if options.atomic {
        let temp_path = temp_path_for(path);

        write_then_rename(&temp_path, path, content).inspect_err(|_| {
            let _ = fs::remove_file(&temp_path);
        })?;
    } else {
        fs::write(path, content).map_err(io_error(path))?;
    }

    Ok(())
}

fn write_then_rename(temp_path: &Path, path: &Path, content: &str) -> Result<()> {
    let mut file = fs::File::create(temp_path).map_err(io_error(temp_path))?;
    file.write_all(content.as_bytes())
        .map_err(io_error(temp_path))?;
    file.sync_all().map_err(io_error(temp_path))?;
    drop(file);

    fs::rename(temp_path, path).map_err(io_error(path))
}

fn io_error(path: &Path) -> impl FnOnce(io::Error) -> Error {
    let path = path.to_path_buf();
    move |source| Error::IoError { path, source }
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map_or_else(OsString::new, std::ffi::OsStr::to_os_string);
    name.push(".tmp");
    path.with_file_name(name)
}
