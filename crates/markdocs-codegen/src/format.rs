//! Text formatting rules for generated pages.
//!
//! # Examples
//!
//! ```
//! use markdocs_codegen::format::{goal_title, short_type, summarize};
//!
//! assert_eq!(goal_title("check-project"), "Check project Goal");
//! assert_eq!(short_type(Some("java.util.List")), "List");
//! assert_eq!(summarize("Checks coverage. Fails the build."), "Checks coverage.");
//! ```

/// Maximum length of an overview summary, in characters.
pub const SUMMARY_LIMIT: usize = 80;

const ELLIPSIS: &str = "...";

/// Type shown for parameters that declare none.
pub const DEFAULT_TYPE: &str = "String";

/// Phase named in the usage sentence when a goal declares none.
pub const UNSPECIFIED_PHASE: &str = "unspecified";

/// Builds the overview summary of a description.
///
/// Takes the text before the first `.`. A fragment longer than
/// [`SUMMARY_LIMIT`] characters is cut so that the summary, ellipsis
/// included, is exactly [`SUMMARY_LIMIT`] characters long. Shorter fragments
/// get a closing period.
///
/// # Examples
///
/// ```
/// use markdocs_codegen::format::{SUMMARY_LIMIT, summarize};
///
/// assert_eq!(summarize("Display help information"), "Display help information.");
///
/// let long = "x".repeat(120);
/// let summary = summarize(&long);
/// assert_eq!(summary.chars().count(), SUMMARY_LIMIT);
/// assert!(summary.ends_with("..."));
/// ```
#[must_use]
pub fn summarize(description: &str) -> String {
    let fragment = description
        .split_once('.')
        .map_or(description, |(head, _)| head);

    if fragment.chars().count() > SUMMARY_LIMIT {
        let head: String = fragment
            .chars()
            .take(SUMMARY_LIMIT - ELLIPSIS.len())
            .collect();
        format!("{head}{ELLIPSIS}")
    } else {
        format!("{fragment}.")
    }
}

/// Strips the package qualifier from a type name.
///
/// Absent types are shown as [`DEFAULT_TYPE`].
///
/// # Examples
///
/// ```
/// use markdocs_codegen::format::short_type;
///
/// assert_eq!(short_type(Some("java.io.File")), "File");
/// assert_eq!(short_type(Some("boolean")), "boolean");
/// assert_eq!(short_type(None), "String");
/// ```
#[must_use]
pub fn short_type(type_name: Option<&str>) -> &str {
    type_name.map_or(DEFAULT_TYPE, |name| {
        name.rsplit_once('.').map_or(name, |(_, short)| short)
    })
}

/// Builds a goal page heading from a goal name.
///
/// Upper-cases the first character, turns every `-` into a space and adds
/// ` Goal`. An empty name yields just `Goal`.
#[must_use]
pub fn goal_title(name: &str) -> String {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return "Goal".to_string();
    };

    let mut title: String = first.to_uppercase().collect();
    title.push_str(chars.as_str());
    format!("{} Goal", title.replace('-', " "))
}

/// Trims a description and makes sure it ends with a period.
///
/// # Examples
///
/// ```
/// use markdocs_codegen::format::sentence;
///
/// assert_eq!(sentence("  Where the jar is written "), "Where the jar is written.");
/// assert_eq!(sentence("Already punctuated."), "Already punctuated.");
/// ```
#[must_use]
pub fn sentence(description: &str) -> String {
    let trimmed = description.trim();
    if trimmed.ends_with('.') {
        trimmed.to_string()
    } else {
        format!("{trimmed}.")
    }
}

/// Qualifier shown next to a parameter type.
#[must_use]
pub const fn requirement(required: bool) -> &'static str {
    if required { "Required" } else { "Optional" }
}

/// Line describing a parameter's default value, if one is shown.
///
/// Required parameters without a default get no line at all.
#[must_use]
pub fn default_line(default_value: Option<&str>, required: bool) -> Option<String> {
    match default_value {
        Some(value) => Some(format!("*Default:* `{value}`")),
        None if required => None,
        None => Some("*Default:* None.".to_string()),
    }
}
