//! Core types and errors for markdocs.
//!
//! This crate provides the descriptor model shared by the parser, the
//! Markdown renderer, the page exporter, and the CLI.
//!
//! # Architecture
//!
//! The core consists of:
//! - The descriptor model (`Descriptor`, `Command`, `Parameter`)
//! - Error hierarchy with contextual information
//! - Generation configuration and its TOML file form
//! - CLI value types (`OutputFormat`, `ExitCode`)

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod cli;
mod config;
mod error;
mod model;

pub use config::{
    ConfigFile, DEFAULT_DESCRIPTOR_PATH, DEFAULT_OUTPUT_DIRECTORY, GenerateSection,
    GenerationConfig,
};
pub use error::{Error, Result};
pub use model::{CONTEXTUAL_TYPES, Command, Descriptor, Parameter};
