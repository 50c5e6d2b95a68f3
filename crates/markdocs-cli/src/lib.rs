//! markdocs CLI library.
//!
//! This library provides the core functionality for the `markdocs` binary,
//! exposing modules for commands and formatters that can be tested.

#![allow(clippy::unused_async)]
#![allow(clippy::missing_errors_doc)]

pub mod commands;
pub mod formatters;

use markdocs_core::Error;
use markdocs_core::cli::ExitCode;

/// Picks the process exit code for a failed command.
///
/// The first [`markdocs_core::Error`] in the cause chain decides the code;
/// anything else is a general error.
///
/// # Examples
///
/// ```
/// use anyhow::Context;
/// use markdocs_cli::exit_code_for;
/// use markdocs_core::Error;
/// use markdocs_core::cli::ExitCode;
///
/// let err = Err::<(), _>(Error::malformed("unclosed tag"))
///     .context("failed to parse plugin descriptor")
///     .unwrap_err();
/// assert_eq!(exit_code_for(&err), ExitCode::INVALID_INPUT);
///
/// let other = anyhow::anyhow!("something else");
/// assert_eq!(exit_code_for(&other), ExitCode::ERROR);
/// ```
#[must_use]
pub fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    error
        .chain()
        .find_map(|cause| cause.downcast_ref::<Error>())
        .map_or(ExitCode::ERROR, ExitCode::for_error)
}
