//! Template engine for page rendering using Handlebars.
//!
//! Wraps Handlebars with the built-in Markdown page templates registered.
//! Rendering runs in strict mode, so a context missing a field the template
//! uses is an error rather than an empty string. HTML escaping is disabled:
//! the output is Markdown, and descriptor text that contains markup is
//! passed through as written.
//!
//! # Examples
//!
//! ```
//! use markdocs_codegen::template_engine::TemplateEngine;
//! use serde_json::json;
//!
//! let mut engine = TemplateEngine::new().unwrap();
//! engine.register_template_string("greeting", "Hello <{{name}}>").unwrap();
//!
//! let rendered = engine.render("greeting", &json!({"name": "maven"})).unwrap();
//! assert_eq!(rendered, "Hello <maven>");
//! ```

use handlebars::Handlebars;
use markdocs_core::{Error, Result};
use serde::Serialize;

/// Name of the overview page template.
pub const OVERVIEW_TEMPLATE: &str = "overview";

/// Name of the goal page template.
pub const GOAL_TEMPLATE: &str = "goal";

/// Template engine for documentation pages.
///
/// # Thread Safety
///
/// This type is `Send` and `Sync`, allowing it to be used across
/// thread boundaries safely.
#[derive(Debug)]
pub struct TemplateEngine<'a> {
    handlebars: Handlebars<'a>,
}

impl<'a> TemplateEngine<'a> {
    /// Creates a new template engine with the page templates registered.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TemplateError`] if a built-in template fails to
    /// register.
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();

        // Strict mode: fail on missing variables
        handlebars.set_strict_mode(true);
        handlebars.register_escape_fn(handlebars::no_escape);

        Self::register_page_templates(&mut handlebars)?;

        Ok(Self { handlebars })
    }

    fn register_page_templates(handlebars: &mut Handlebars<'a>) -> Result<()> {
        handlebars
            .register_template_string(
                OVERVIEW_TEMPLATE,
                include_str!("../templates/overview.md.hbs"),
            )
            .map_err(|e| Error::TemplateError {
                message: format!("Failed to register overview template: {e}"),
                source: None,
            })?;

        handlebars
            .register_template_string(GOAL_TEMPLATE, include_str!("../templates/goal.md.hbs"))
            .map_err(|e| Error::TemplateError {
                message: format!("Failed to register goal template: {e}"),
                source: None,
            })?;

        Ok(())
    }

    /// Renders a template with the given context.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TemplateError`] if:
    /// - Template name is not registered
    /// - Context cannot be serialized
    /// - The template references a field the context lacks
    pub fn render<T: Serialize>(&self, template_name: &str, context: &T) -> Result<String> {
        self.handlebars
            .render(template_name, context)
            .map_err(|e| Error::TemplateError {
                message: format!("Failed to render template '{template_name}': {e}"),
                source: None,
            })
    }

    /// Registers a custom template, replacing any template of the same name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TemplateError`] if the template string is invalid.
    pub fn register_template_string(&mut self, name: &str, template: &str) -> Result<()> {
        self.handlebars
            .register_template_string(name, template)
            .map_err(|e| Error::TemplateError {
                message: format!("Failed to register template '{name}': {e}"),
                source: None,
            })
    }

    /// Returns `true` if a template with the given name is registered.
    #[must_use]
    pub fn has_template(&self, name: &str) -> bool {
        self.handlebars.has_template(name)
    }
}
