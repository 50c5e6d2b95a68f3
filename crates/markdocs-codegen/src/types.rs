//! Types for documentation generation.
//!
//! Two groups live here: the rendered output ([`GeneratedDocs`] and
//! [`GeneratedPage`]) and the template contexts the generator hands to
//! Handlebars. Contexts carry display-ready strings only; every formatting
//! decision is made while building them, so the templates stay pure layout.
//!
//! # Examples
//!
//! ```
//! use markdocs_codegen::{GeneratedDocs, GeneratedPage};
//!
//! let mut docs = GeneratedDocs::new();
//! docs.add_page(GeneratedPage {
//!     path: "README.md".to_string(),
//!     content: "# Goals\n".to_string(),
//! });
//!
//! assert_eq!(docs.page_count(), 1);
//! ```

use serde::{Deserialize, Serialize};

/// File name of the overview page.
pub const OVERVIEW_PAGE: &str = "README.md";

/// Rendered documentation for one descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedDocs {
    /// Rendered pages; the overview comes first, then goals in source order
    pub pages: Vec<GeneratedPage>,
}

impl GeneratedDocs {
    /// Creates an empty page set.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { pages: Vec::new() }
    }

    /// Appends a page.
    pub fn add_page(&mut self, page: GeneratedPage) {
        self.pages.push(page);
    }

    /// Returns the number of pages.
    #[inline]
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Finds a page by its relative path.
    ///
    /// # Examples
    ///
    /// ```
    /// use markdocs_codegen::{GeneratedDocs, GeneratedPage};
    ///
    /// let docs = GeneratedDocs {
    ///     pages: vec![GeneratedPage {
    ///         path: "help.md".to_string(),
    ///         content: "# Help Goal\n".to_string(),
    ///     }],
    /// };
    ///
    /// assert!(docs.page("help.md").is_some());
    /// assert!(docs.page("README.md").is_none());
    /// ```
    #[must_use]
    pub fn page(&self, path: &str) -> Option<&GeneratedPage> {
        self.pages.iter().find(|page| page.path == path)
    }

    /// Returns the page paths in output order.
    #[must_use]
    pub fn paths(&self) -> Vec<&str> {
        self.pages.iter().map(|page| page.path.as_str()).collect()
    }
}

/// One rendered Markdown page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedPage {
    /// Path relative to the output directory, e.g. `check-project.md`
    pub path: String,
    /// Markdown text
    pub content: String,
}

/// Context for the `overview` template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverviewContext {
    /// Page heading
    pub title: String,
    /// Plugin name used in the introduction
    pub plugin_name: String,
    /// One entry per goal, in source order
    pub goals: Vec<GoalLinkContext>,
}

/// One link line on the overview page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GoalLinkContext {
    /// Goal name shown as link text
    pub name: String,
    /// Link target, `<name>.md`
    pub link: String,
    /// First-sentence summary, already punctuated
    pub summary: Option<String>,
}

/// Context for the `goal` template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GoalContext {
    /// Page heading, e.g. `Check project Goal`
    pub title: String,
    /// Goal name
    pub name: String,
    /// Bound lifecycle phase
    pub phase: Option<String>,
    /// Full goal description
    pub description: Option<String>,
    /// Phase named in the usage sentence
    pub usage_phase: String,
    /// Whether the parameters section is rendered
    pub has_parameters: bool,
    /// All parameters, in source order
    pub parameters: Vec<ParameterContext>,
    /// Whether the example configuration block is rendered
    pub has_example: bool,
    /// Entries of the example configuration block
    pub example_parameters: Vec<ExampleParameterContext>,
}

/// One entry of the parameters section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterContext {
    /// Parameter name
    pub name: String,
    /// Unqualified type name
    pub short_type: String,
    /// `Required` or `Optional`
    pub qualifier: String,
    /// Indented lines below the entry: description, then default
    pub details: Vec<String>,
}

/// One element of the example `<configuration>` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExampleParameterContext {
    /// Parameter name, used as the element tag
    pub name: String,
    /// `required` or `optional`
    pub marker: String,
}
