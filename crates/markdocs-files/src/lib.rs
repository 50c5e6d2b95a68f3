//! Page export for markdocs.
//!
//! Writes [`GeneratedDocs`] to an output directory, one file per page.
//!
//! [`GeneratedDocs`]: markdocs_codegen::GeneratedDocs

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod filesystem;

pub use filesystem::{ExportOptions, ExportSummary, export_pages, validate_page_path};
