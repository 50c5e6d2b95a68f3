//! Output formatters for CLI commands.
//!
//! Every command prints its result through [`format_output`], so the
//! `--format` flag behaves the same everywhere.

use anyhow::Result;
use colored::Colorize;
use markdocs_core::cli::OutputFormat;
use serde::Serialize;

/// Format data according to the specified output format.
///
/// # Errors
///
/// Returns an error if the data cannot be serialized.
///
/// # Examples
///
/// ```
/// use markdocs_cli::formatters::format_output;
/// use markdocs_core::cli::OutputFormat;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Run {
///     plugin: String,
///     page_count: usize,
/// }
///
/// let run = Run {
///     plugin: "demo-maven-plugin".to_string(),
///     page_count: 3,
/// };
///
/// let output = format_output(&run, OutputFormat::Text)?;
/// assert_eq!(output, r#"{"plugin":"demo-maven-plugin","page_count":3}"#);
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn format_output<T: Serialize + ?Sized>(data: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::format(data),
        OutputFormat::Text => text::format(data),
        OutputFormat::Pretty => pretty::format(data),
    }
}

/// JSON output formatting.
pub mod json {
    use super::{Result, Serialize};

    /// Format data as JSON with 2-space indentation.
    pub fn format<T: Serialize + ?Sized>(data: &T) -> Result<String> {
        Ok(serde_json::to_string_pretty(data)?)
    }

    /// Format data as single-line JSON.
    pub fn format_compact<T: Serialize + ?Sized>(data: &T) -> Result<String> {
        Ok(serde_json::to_string(data)?)
    }
}

/// Plain text output formatting.
pub mod text {
    use super::{Result, Serialize, json};

    /// Format data as single-line JSON, for piping into other tools.
    pub fn format<T: Serialize + ?Sized>(data: &T) -> Result<String> {
        json::format_compact(data)
    }
}

/// Pretty (human-readable) output formatting.
///
/// Objects become indented `key: value` lines and arrays become `- item`
/// lists. Strings are printed without quotes.
pub mod pretty {
    use super::{Colorize, Result, Serialize};
    use serde_json::{Map, Value};

    /// Format data as colorized, indented output.
    pub fn format<T: Serialize + ?Sized>(data: &T) -> Result<String> {
        let value = serde_json::to_value(data)?;
        Ok(layout(&value, true))
    }

    /// Lays out a JSON value, optionally with colors.
    pub(crate) fn layout(value: &Value, colorize: bool) -> String {
        let mut lines = Vec::new();
        match value {
            Value::Object(map) => object_lines(map, 0, colorize, &mut lines),
            Value::Array(items) => array_lines(items, 0, colorize, &mut lines),
            scalar => lines.push(paint_scalar(scalar, colorize)),
        }
        lines.join("\n")
    }

    fn object_lines(map: &Map<String, Value>, indent: usize, colorize: bool, out: &mut Vec<String>) {
        if map.is_empty() {
            out.push(format!("{}{{}}", "  ".repeat(indent)));
            return;
        }

        let pad = "  ".repeat(indent);
        for (key, value) in map {
            let key = if colorize {
                key.blue().bold().to_string()
            } else {
                key.clone()
            };

            match value {
                Value::Object(inner) if !inner.is_empty() => {
                    out.push(format!("{pad}{key}:"));
                    object_lines(inner, indent + 1, colorize, out);
                }
                Value::Array(items) if !items.is_empty() => {
                    out.push(format!("{pad}{key}:"));
                    array_lines(items, indent + 1, colorize, out);
                }
                Value::Object(_) => out.push(format!("{pad}{key}: {{}}")),
                Value::Array(_) => out.push(format!("{pad}{key}: []")),
                scalar => out.push(format!("{pad}{key}: {}", paint_scalar(scalar, colorize))),
            }
        }
    }

    fn array_lines(items: &[Value], indent: usize, colorize: bool, out: &mut Vec<String>) {
        let pad = "  ".repeat(indent);
        for item in items {
            match item {
                Value::Object(map) if !map.is_empty() => {
                    // The first entry shares the line with the dash.
                    let start = out.len();
                    object_lines(map, indent + 1, colorize, out);
                    let nested_pad = "  ".repeat(indent + 1);
                    if let Some(rest) = out[start].strip_prefix(nested_pad.as_str()) {
                        out[start] = format!("{pad}- {rest}");
                    }
                }
                Value::Array(inner) if !inner.is_empty() => {
                    out.push(format!("{pad}-"));
                    array_lines(inner, indent + 1, colorize, out);
                }
                Value::Object(_) => out.push(format!("{pad}- {{}}")),
                Value::Array(_) => out.push(format!("{pad}- []")),
                scalar => out.push(format!("{pad}- {}", paint_scalar(scalar, colorize))),
            }
        }
    }

    fn paint_scalar(value: &Value, colorize: bool) -> String {
        let plain = match value {
            Value::Null => "~".to_string(),
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };

        if !colorize {
            return plain;
        }

        match value {
            Value::Null => plain.dimmed().to_string(),
            Value::Bool(_) => plain.yellow().to_string(),
            Value::Number(_) => plain.cyan().to_string(),
            _ => plain.green().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;
    use serde_json::json;

    #[derive(Serialize)]
    struct RunData {
        plugin: String,
        page_count: usize,
        atomic: bool,
    }

    fn data() -> RunData {
        RunData {
            plugin: "demo-maven-plugin".to_string(),
            page_count: 3,
            atomic: true,
        }
    }

    // ========================================================================
    // JSON / Text Tests
    // ========================================================================

    #[test]
    fn test_json_format() {
        let output = json::format(&data()).unwrap();
        assert!(output.contains("\"plugin\": \"demo-maven-plugin\""));
        assert!(output.contains("\"page_count\": 3"));
        assert!(output.contains('\n'));
    }

    #[test]
    fn test_text_format_is_single_line() {
        let output = text::format(&data()).unwrap();
        assert_eq!(
            output,
            r#"{"plugin":"demo-maven-plugin","page_count":3,"atomic":true}"#
        );
    }

    #[test]
    fn test_format_output_dispatch() {
        let json = format_output(&data(), OutputFormat::Json).unwrap();
        let text = format_output(&data(), OutputFormat::Text).unwrap();
        let pretty = format_output(&data(), OutputFormat::Pretty).unwrap();

        assert_ne!(json, text);
        assert!(pretty.contains("plugin"));
        assert!(pretty.contains("demo-maven-plugin"));
    }

    // ========================================================================
    // Pretty Layout Tests
    // ========================================================================

    // Keys come out sorted: `serde_json::Value` objects are ordered maps.
    #[test]
    fn test_pretty_layout_scalars() {
        let value = json!({"plugin": "demo", "page_count": 3, "atomic": true, "title": null});
        assert_eq!(
            pretty::layout(&value, false),
            "atomic: true\npage_count: 3\nplugin: demo\ntitle: ~"
        );
    }

    #[test]
    fn test_pretty_layout_nested() {
        let value = json!({
            "pages": ["docs/README.md", "docs/help.md"],
            "skipped": [],
            "commands": [
                {"name": "help", "parameters": [{"name": "detail", "required": false}]},
                {"name": "check", "parameters": []}
            ]
        });

        assert_eq!(
            pretty::layout(&value, false),
            "commands:\n  - name: help\n    parameters:\n      - name: detail\n        \
             required: false\n  - name: check\n    parameters: []\npages:\n  - docs/README.md\n  \
             - docs/help.md\nskipped: []"
        );
    }

    #[test]
    fn test_pretty_layout_top_level_array() {
        let value = json!(["a", 1, {}]);
        assert_eq!(pretty::layout(&value, false), "- a\n- 1\n- {}");
    }

    #[test]
    fn test_pretty_layout_empty_object() {
        assert_eq!(pretty::layout(&json!({}), false), "{}");
    }
}
