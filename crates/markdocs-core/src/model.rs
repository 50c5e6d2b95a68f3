//! Descriptor model.
//!
//! Plain data describing a plugin and its invocable commands (goals). The
//! parser builds these values once per document; everything downstream only
//! reads them.
//!
//! Optional source fields are `Option<String>`. An absent element and an
//! empty element both map to `None`, so renderers never have to tell an
//! empty string apart from a missing value.
//!
//! # Examples
//!
//! ```
//! use markdocs_core::{Command, Descriptor, Parameter};
//!
//! let command = Command::new("check-project")
//!     .with_phase("verify")
//!     .with_parameter(Parameter::new("haltOnFailure").with_type("boolean").required(true));
//!
//! let descriptor = Descriptor {
//!     name: "easy-jacoco-maven-plugin".to_string(),
//!     commands: vec![command],
//!     ..Default::default()
//! };
//!
//! assert_eq!(descriptor.command_count(), 1);
//! assert!(descriptor.command("check-project").is_some());
//! ```

use serde::{Deserialize, Serialize};

/// Parameter types injected by the build host.
///
/// Parameters of these types are filled in by Maven itself and cannot be
/// set from a `<configuration>` block.
pub const CONTEXTUAL_TYPES: &[&str] = &[
    "org.apache.maven.execution.MavenSession",
    "org.apache.maven.project.MavenProject",
];

/// A parsed plugin descriptor.
///
/// `commands` preserves the order in which goals appear in the source
/// document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Descriptor {
    /// Maven group id of the plugin
    pub group_id: String,
    /// Maven artifact id of the plugin
    pub artifact_id: String,
    /// Plugin version
    pub version: String,
    /// Human-readable plugin name
    pub name: String,
    /// Plugin description
    pub description: Option<String>,
    /// Goals declared by the plugin, in source order
    pub commands: Vec<Command>,
}

impl Descriptor {
    /// Returns the number of commands.
    #[inline]
    #[must_use]
    pub const fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Finds the first command with the given name.
    ///
    /// # Examples
    ///
    /// ```
    /// use markdocs_core::{Command, Descriptor};
    ///
    /// let descriptor = Descriptor {
    ///     commands: vec![Command::new("help"), Command::new("report")],
    ///     ..Default::default()
    /// };
    ///
    /// assert_eq!(descriptor.command("report").map(|c| c.name.as_str()), Some("report"));
    /// assert!(descriptor.command("missing").is_none());
    /// ```
    #[must_use]
    pub fn command(&self, name: &str) -> Option<&Command> {
        self.commands.iter().find(|command| command.name == name)
    }

    /// Returns the command names in source order.
    #[must_use]
    pub fn command_names(&self) -> Vec<&str> {
        self.commands.iter().map(|command| command.name.as_str()).collect()
    }
}

/// One invocable goal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    /// Goal name, used for page file names and links.
    ///
    /// Empty when the source omitted it.
    pub name: String,
    /// Goal description
    pub description: Option<String>,
    /// Implementing class, e.g. `com.example.CheckMojo`
    pub implementation: Option<String>,
    /// Lifecycle phase the goal is bound to
    pub phase: Option<String>,
    /// Goal parameters, in source order
    pub parameters: Vec<Parameter>,
}

impl Command {
    /// Creates a command with the given name and no optional fields.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the implementing class.
    #[must_use]
    pub fn with_implementation(mut self, implementation: impl Into<String>) -> Self {
        self.implementation = Some(implementation.into());
        self
    }

    /// Sets the lifecycle phase.
    #[must_use]
    pub fn with_phase(mut self, phase: impl Into<String>) -> Self {
        self.phase = Some(phase.into());
        self
    }

    /// Appends a parameter.
    #[must_use]
    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Returns the parameters a user can set in a `<configuration>` block.
    ///
    /// See [`Parameter::is_configurable`].
    ///
    /// # Examples
    ///
    /// ```
    /// use markdocs_core::{Command, Parameter};
    ///
    /// let command = Command::new("report")
    ///     .with_parameter(Parameter::new("project").with_type("org.apache.maven.project.MavenProject"))
    ///     .with_parameter(Parameter::new("formats").with_type("java.util.List"));
    ///
    /// let names: Vec<_> = command.configurable_parameters().map(|p| p.name.as_str()).collect();
    /// assert_eq!(names, vec!["formats"]);
    /// ```
    pub fn configurable_parameters(&self) -> impl Iterator<Item = &Parameter> {
        self.parameters.iter().filter(|p| p.is_configurable())
    }

    /// Returns `true` if the command has no name.
    #[inline]
    #[must_use]
    pub const fn is_unnamed(&self) -> bool {
        self.name.is_empty()
    }
}

/// One goal parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    /// Parameter name
    pub name: String,
    /// Possibly qualified type name, e.g. `java.util.List`
    #[serde(rename = "type")]
    pub type_name: Option<String>,
    /// Parameter description
    pub description: Option<String>,
    /// Default value expression
    pub default_value: Option<String>,
    /// Whether the parameter must be set
    pub required: bool,
    /// Whether the user may override the parameter
    pub editable: bool,
}

impl Default for Parameter {
    fn default() -> Self {
        Self {
            name: String::new(),
            type_name: None,
            description: None,
            default_value: None,
            required: false,
            editable: true,
        }
    }
}

impl Parameter {
    /// Creates an optional, editable, untyped parameter.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the type name.
    #[must_use]
    pub fn with_type(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the default value.
    #[must_use]
    pub fn with_default(mut self, default_value: impl Into<String>) -> Self {
        self.default_value = Some(default_value.into());
        self
    }

    /// Sets the required flag.
    #[must_use]
    pub const fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Sets the editable flag.
    #[must_use]
    pub const fn editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }

    /// Returns `true` if the type is one Maven injects from the build context.
    #[must_use]
    pub fn is_contextual(&self) -> bool {
        self.type_name
            .as_deref()
            .is_some_and(|t| CONTEXTUAL_TYPES.contains(&t))
    }

    /// Returns `true` if the parameter belongs in an example configuration.
    ///
    /// A configurable parameter is editable, has a type, and the type is
    /// not a contextual (host-injected) type.
    ///
    /// # Examples
    ///
    /// ```
    /// use markdocs_core::Parameter;
    ///
    /// assert!(Parameter::new("skip").with_type("boolean").is_configurable());
    /// assert!(!Parameter::new("skip").is_configurable());
    /// assert!(!Parameter::new("skip").with_type("boolean").editable(false).is_configurable());
    /// assert!(!Parameter::new("session")
    ///     .with_type("org.apache.maven.execution.MavenSession")
    ///     .is_configurable());
    /// ```
    #[must_use]
    pub fn is_configurable(&self) -> bool {
        self.editable && self.type_name.is_some() && !self.is_contextual()
    }
}
