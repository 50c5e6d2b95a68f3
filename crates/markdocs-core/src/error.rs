//! Error types for markdocs.
//!
//! Every library crate in the workspace reports failures through this single
//! error type. Variants carry the context a caller needs to explain the
//! failure (the offending path, the decoder position, the template name).
//!
//! # Examples
//!
//! ```
//! use markdocs_core::{Error, Result};
//!
//! fn require_title(title: &str) -> Result<&str> {
//!     if title.is_empty() {
//!         return Err(Error::ConfigError {
//!             message: "title cannot be empty".to_string(),
//!         });
//!     }
//!     Ok(title)
//! }
//!
//! let err = require_title("").unwrap_err();
//! assert!(err.is_config_error());
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for markdocs.
#[derive(Error, Debug)]
pub enum Error {
    /// The plugin descriptor could not be structurally decoded.
    ///
    /// Raised for XML syntax errors, mismatched or unclosed tags, documents
    /// without a root element, and input that is not valid UTF-8. No partial
    /// descriptor is ever returned alongside this error.
    #[error("Malformed plugin descriptor: {message}")]
    MalformedDescriptor {
        /// Description of the decoding failure
        message: String,
        /// Byte offset in the input where decoding stopped, if known
        position: Option<u64>,
    },

    /// Template registration or rendering failed.
    #[error("Template rendering failed: {message}")]
    TemplateError {
        /// Description of the template failure
        message: String,
        /// Underlying template engine error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// File I/O operation failed.
    #[error("File I/O error for {path:?}")]
    IoError {
        /// The path that caused the error
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A generated page path cannot be written safely.
    ///
    /// Page paths must be relative, non-empty, and must not escape the
    /// output directory.
    #[error("Invalid page path '{path}': {reason}")]
    InvalidPath {
        /// The rejected path
        path: String,
        /// Why the path was rejected
        reason: String,
    },

    /// Configuration error.
    ///
    /// Raised when the configuration file cannot be parsed or the resolved
    /// configuration is unusable.
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration problem
        message: String,
    },

    /// Invalid argument error.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Creates a [`Error::MalformedDescriptor`] without position information.
    ///
    /// # Examples
    ///
    /// ```
    /// use markdocs_core::Error;
    ///
    /// let err = Error::malformed("no root element");
    /// assert!(err.is_malformed_descriptor());
    /// assert!(err.to_string().contains("no root element"));
    /// ```
    #[must_use]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedDescriptor {
            message: message.into(),
            position: None,
        }
    }

    /// Returns `true` if this is a malformed descriptor error.
    ///
    /// # Examples
    ///
    /// ```
    /// use markdocs_core::Error;
    ///
    /// let err = Error::MalformedDescriptor {
    ///     message: "unexpected end of input".to_string(),
    ///     position: Some(42),
    /// };
    /// assert!(err.is_malformed_descriptor());
    /// ```
    #[must_use]
    pub const fn is_malformed_descriptor(&self) -> bool {
        matches!(self, Self::MalformedDescriptor { .. })
    }

    /// Returns `true` if this is a template error.
    #[must_use]
    pub const fn is_template_error(&self) -> bool {
        matches!(self, Self::TemplateError { .. })
    }

    /// Returns `true` if this is an I/O error.
    ///
    /// # Examples
    ///
    /// ```
    /// use markdocs_core::Error;
    /// use std::io;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::IoError {
    ///     path: PathBuf::from("target/markdocs/README.md"),
    ///     source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
    /// };
    /// assert!(err.is_io_error());
    /// ```
    #[must_use]
    pub const fn is_io_error(&self) -> bool {
        matches!(self, Self::IoError { .. })
    }

    /// Returns `true` if this is an I/O error caused by a missing file.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::IoError { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }

    /// Returns `true` if this is an invalid page path error.
    #[must_use]
    pub const fn is_invalid_path(&self) -> bool {
        matches!(self, Self::InvalidPath { .. })
    }

    /// Returns `true` if this is a configuration error.
    ///
    /// # Examples
    ///
    /// ```
    /// use markdocs_core::Error;
    ///
    /// let err = Error::ConfigError {
    ///     message: "output directory cannot be empty".to_string(),
    /// };
    /// assert!(err.is_config_error());
    /// ```
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::ConfigError { .. })
    }
}

/// Result type alias for markdocs operations.
///
/// # Examples
///
/// ```
/// use markdocs_core::{Error, Result};
///
/// fn non_empty(value: &str) -> Result<&str> {
///     if value.is_empty() {
///         return Err(Error::InvalidArgument("value is empty".to_string()));
///     }
///     Ok(value)
/// }
///
/// assert!(non_empty("goal").is_ok());
/// assert!(non_empty("").is_err());
/// ```
pub type Result<T> = std::result::Result<T, Error>;
