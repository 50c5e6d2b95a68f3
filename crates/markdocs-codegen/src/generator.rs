//! Markdown page generator.
//!
//! Turns a [`Descriptor`] into an overview page and one page per goal.
//!
//! # Examples
//!
//! ```
//! use markdocs_codegen::MarkdownGenerator;
//! use markdocs_core::{Command, Descriptor, Parameter};
//!
//! let descriptor = Descriptor {
//!     name: "demo-maven-plugin".to_string(),
//!     commands: vec![
//!         Command::new("check-project")
//!             .with_description("Checks coverage. Fails when too low.")
//!             .with_phase("verify")
//!             .with_parameter(Parameter::new("haltOnFailure").with_type("boolean").required(true)),
//!     ],
//!     ..Default::default()
//! };
//!
//! let generator = MarkdownGenerator::new().unwrap();
//! let docs = generator.generate_all(&descriptor, None).unwrap();
//!
//! assert_eq!(docs.paths(), vec!["README.md", "check-project.md"]);
//! assert!(docs.pages[0].content.contains("- [check-project](check-project.md): Checks coverage."));
//! assert!(docs.pages[1].content.starts_with("# Check project Goal\n"));
//! ```

use crate::format;
use crate::template_engine::{GOAL_TEMPLATE, OVERVIEW_TEMPLATE, TemplateEngine};
use crate::types::{
    ExampleParameterContext, GeneratedDocs, GeneratedPage, GoalContext, GoalLinkContext,
    OVERVIEW_PAGE, OverviewContext, ParameterContext,
};
use markdocs_core::{Command, Descriptor, Parameter, Result};

/// Generator for Markdown documentation pages.
///
/// Both page kinds are pure functions of their input; the generator only
/// holds the compiled templates.
///
/// # Thread Safety
///
/// This type is `Send` and `Sync`, allowing safe use across threads.
#[derive(Debug)]
pub struct MarkdownGenerator<'a> {
    engine: TemplateEngine<'a>,
}

impl MarkdownGenerator<'_> {
    /// Creates a new generator with the built-in templates.
    ///
    /// # Errors
    ///
    /// Returns error if template registration fails (should not happen
    /// with valid built-in templates).
    pub fn new() -> Result<Self> {
        let engine = TemplateEngine::new()?;
        Ok(Self { engine })
    }

    /// Renders the overview page.
    ///
    /// `title` replaces the default heading `<plugin name> Goals
    /// Documentation` when it is non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`markdocs_core::Error::TemplateError`] if rendering fails.
    pub fn generate_overview(&self, descriptor: &Descriptor, title: Option<&str>) -> Result<String> {
        let context = overview_context(descriptor, title);
        self.engine.render(OVERVIEW_TEMPLATE, &context)
    }

    /// Renders the page for a single goal.
    ///
    /// # Errors
    ///
    /// Returns [`markdocs_core::Error::TemplateError`] if rendering fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use markdocs_codegen::MarkdownGenerator;
    /// use markdocs_core::Command;
    ///
    /// let generator = MarkdownGenerator::new().unwrap();
    /// let page = generator.generate_goal_page(&Command::new("help")).unwrap();
    ///
    /// assert!(page.contains("**Goal Name:** `help`"));
    /// assert!(page.contains("bound to the `unspecified` phase"));
    /// ```
    pub fn generate_goal_page(&self, command: &Command) -> Result<String> {
        let context = goal_context(command);
        self.engine.render(GOAL_TEMPLATE, &context)
    }

    /// Renders the overview as `README.md` and one `<name>.md` page per goal.
    ///
    /// Pages follow goal order. Duplicate goal names produce duplicate paths.
    ///
    /// # Errors
    ///
    /// Returns [`markdocs_core::Error::TemplateError`] if any page fails to
    /// render.
    pub fn generate_all(&self, descriptor: &Descriptor, title: Option<&str>) -> Result<GeneratedDocs> {
        tracing::info!(
            "Generating documentation for plugin: {}",
            descriptor.name
        );

        let mut docs = GeneratedDocs::new();

        docs.add_page(GeneratedPage {
            path: OVERVIEW_PAGE.to_string(),
            content: self.generate_overview(descriptor, title)?,
        });
        tracing::debug!("Generated {OVERVIEW_PAGE}");

        for command in &descriptor.commands {
            let path = page_path(&command.name);
            docs.add_page(GeneratedPage {
                content: self.generate_goal_page(command)?,
                path,
            });
            tracing::debug!("Generated goal page for '{}'", command.name);
        }

        tracing::info!(
            "Successfully generated {} pages for {}",
            docs.page_count(),
            descriptor.name
        );

        Ok(docs)
    }
}

/// Relative path of a goal's page.
#[must_use]
pub fn page_path(goal_name: &str) -> String {
    format!("{goal_name}.md")
}

/// Builds the overview template context.
#[must_use]
pub fn overview_context(descriptor: &Descriptor, title: Option<&str>) -> OverviewContext {
    let title = title
        .filter(|t| !t.is_empty())
        .map_or_else(|| format!("{} Goals Documentation", descriptor.name), str::to_string);

    OverviewContext {
        title,
        plugin_name: descriptor.name.clone(),
        goals: descriptor
            .commands
            .iter()
            .map(|command| GoalLinkContext {
                name: command.name.clone(),
                link: page_path(&command.name),
                summary: command.description.as_deref().map(format::summarize),
            })
            .collect(),
    }
}

/// Builds the goal page template context.
#[must_use]
pub fn goal_context(command: &Command) -> GoalContext {
    let parameters: Vec<_> = command.parameters.iter().map(parameter_context).collect();
    let example_parameters: Vec<_> = command
        .configurable_parameters()
        .map(|param| ExampleParameterContext {
            name: param.name.clone(),
            marker: format::requirement(param.required).to_lowercase(),
        })
        .collect();

    GoalContext {
        title: format::goal_title(&command.name),
        name: command.name.clone(),
        phase: command.phase.clone(),
        description: command.description.clone(),
        usage_phase: command
            .phase
            .clone()
            .unwrap_or_else(|| format::UNSPECIFIED_PHASE.to_string()),
        has_parameters: !parameters.is_empty(),
        parameters,
        has_example: !example_parameters.is_empty(),
        example_parameters,
    }
}

fn parameter_context(param: &Parameter) -> ParameterContext {
    let details = param
        .description
        .as_deref()
        .map(format::sentence)
        .into_iter()
        .chain(format::default_line(
            param.default_value.as_deref(),
            param.required,
        ))
        .collect();

    ParameterContext {
        name: param.name.clone(),
        short_type: format::short_type(param.type_name.as_deref()).to_string(),
        qualifier: format::requirement(param.required).to_string(),
        details,
    }
}
