//! Markdown documentation generation for Maven plugin descriptors.
//!
//! Renders a parsed [`Descriptor`] into an overview page (`README.md`)
//! linking every goal, and one page per goal describing its phase, usage,
//! parameters and an example `<configuration>` block.
//!
//! Layout lives in Handlebars templates under `templates/`; the formatting
//! rules (summaries, short type names, titles) live in [`format`].
//!
//! [`Descriptor`]: markdocs_core::Descriptor

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod format;
pub mod generator;
pub mod template_engine;
pub mod types;

pub use generator::MarkdownGenerator;
pub use types::{GeneratedDocs, GeneratedPage, OVERVIEW_PAGE};
