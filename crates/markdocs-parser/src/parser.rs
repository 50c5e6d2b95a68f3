//! Descriptor extraction.
//!
//! Decoding happens in two passes: the raw bytes become a small element tree
//! (see the `xml` module), then [`DescriptorParser`] walks the tree and reads
//! the model fields. Only the first pass can fail; every field the second pass
//! cannot find is simply left empty.

use crate::variant::SchemaVariant;
use crate::xml::{self, Element};
use markdocs_core::{Command, Descriptor, Error, Parameter, Result};
use std::path::Path;

/// Sections a field lookup never descends into.
///
/// Keeps a command's `description` lookup from landing on a parameter's
/// description, and the plugin's `groupId` lookup from landing on a
/// dependency's.
const NESTED_SECTIONS: &[&str] = &[
    "goals",
    "mojos",
    "parameters",
    "configuration",
    "requirements",
    "dependencies",
];

/// Parser for Maven plugin descriptors.
///
/// # Examples
///
/// ```
/// use markdocs_parser::DescriptorParser;
///
/// let xml = r#"
///     <plugin>
///       <groupId>com.example</groupId>
///       <name>demo-maven-plugin</name>
///       <goals>
///         <goal>
///           <goal>report</goal>
///           <parameters>
///             <parameter>
///               <name>formats</name>
///               <type>java.util.List</type>
///               <required>true</required>
///             </parameter>
///           </parameters>
///         </goal>
///       </goals>
///     </plugin>
/// "#;
///
/// let descriptor = DescriptorParser::new().parse_str(xml).unwrap();
/// assert_eq!(descriptor.group_id, "com.example");
///
/// let param = &descriptor.commands[0].parameters[0];
/// assert_eq!(param.type_name.as_deref(), Some("java.util.List"));
/// assert!(param.required);
/// assert!(param.editable);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DescriptorParser {
    skip_unnamed: bool,
}

impl DescriptorParser {
    /// Creates a parser that keeps goals without a name.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            skip_unnamed: false,
        }
    }

    /// Drops goals without a name instead of passing them through.
    ///
    /// Unnamed goals cannot be linked or written to a page of their own, so
    /// callers that export pages may prefer to leave them out.
    #[must_use]
    pub const fn skip_unnamed(mut self, skip: bool) -> Self {
        self.skip_unnamed = skip;
        self
    }

    /// Parses a descriptor from raw bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedDescriptor`] if the bytes are not a
    /// well-formed UTF-8 XML document. Missing fields never cause an error.
    pub fn parse(&self, input: &[u8]) -> Result<Descriptor> {
        let root = xml::parse_document(input)?;
        Ok(self.extract(&root))
    }

    /// Parses a descriptor from a string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedDescriptor`] if the text is not a
    /// well-formed XML document.
    pub fn parse_str(&self, input: &str) -> Result<Descriptor> {
        self.parse(input.as_bytes())
    }

    /// Reads and parses a descriptor file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IoError`] if the file cannot be read and
    /// [`Error::MalformedDescriptor`] if its content cannot be decoded.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<Descriptor> {
        let path = path.as_ref();
        tracing::debug!("Reading plugin descriptor from {}", path.display());

        let bytes = std::fs::read(path).map_err(|source| Error::IoError {
            path: path.to_path_buf(),
            source,
        })?;

        self.parse(&bytes)
    }

    fn extract(&self, root: &Element) -> Descriptor {
        let variant = variant_of(root);
        let mut commands = Vec::new();

        match variant {
            Some(variant) => {
                tracing::debug!("Detected {variant} descriptor layout");
                for item in items(root, variant) {
                    let command = extract_command(item, variant);
                    if command.is_unnamed() {
                        if self.skip_unnamed {
                            tracing::warn!("Skipping goal without a name");
                            continue;
                        }
                        tracing::warn!("Goal without a name in plugin descriptor");
                    }
                    tracing::debug!(
                        "Parsed goal '{}' with {} parameters",
                        command.name,
                        command.parameters.len()
                    );
                    commands.push(command);
                }
            }
            None => {
                tracing::warn!("Plugin descriptor declares neither <goals> nor <mojos>");
            }
        }

        let descriptor = Descriptor {
            group_id: field(root, "groupId").unwrap_or_default(),
            artifact_id: field(root, "artifactId").unwrap_or_default(),
            version: field(root, "version").unwrap_or_default(),
            name: field(root, "name").unwrap_or_default(),
            description: field(root, "description"),
            commands,
        };

        tracing::info!(
            "Parsed plugin descriptor '{}' with {} goals",
            descriptor.name,
            descriptor.command_count()
        );

        descriptor
    }
}

/// Parses a descriptor from raw bytes with the default parser.
///
/// # Errors
///
/// Returns [`Error::MalformedDescriptor`] if the bytes are not a well-formed
/// UTF-8 XML document.
pub fn parse(input: &[u8]) -> Result<Descriptor> {
    DescriptorParser::new().parse(input)
}

/// Detects which goal container a document uses.
///
/// Returns `Ok(None)` for a well-formed document with neither container.
///
/// # Errors
///
/// Returns [`Error::MalformedDescriptor`] if the document cannot be decoded.
///
/// # Examples
///
/// ```
/// use markdocs_parser::{SchemaVariant, detect_variant};
///
/// let variant = detect_variant(b"<plugin><goals/></plugin>").unwrap();
/// assert_eq!(variant, Some(SchemaVariant::Goals));
///
/// assert_eq!(detect_variant(b"<plugin/>").unwrap(), None);
/// ```
pub fn detect_variant(input: &[u8]) -> Result<Option<SchemaVariant>> {
    let root = xml::parse_document(input)?;
    Ok(variant_of(&root))
}

fn variant_of(root: &Element) -> Option<SchemaVariant> {
    SchemaVariant::ALL
        .into_iter()
        .find(|variant| root.first_child(variant.container_tag()).is_some())
}

fn items(root: &Element, variant: SchemaVariant) -> impl Iterator<Item = &Element> {
    root.first_child(variant.container_tag())
        .into_iter()
        .flat_map(move |container| container.children_named(variant.item_tag()))
}

fn extract_command(item: &Element, variant: SchemaVariant) -> Command {
    let name = variant
        .name_tags()
        .iter()
        .find_map(|tag| field(item, tag))
        .unwrap_or_default();

    let parameters = item
        .first_child("parameters")
        .into_iter()
        .flat_map(|container| container.children_named("parameter"))
        .map(extract_parameter)
        .collect();

    Command {
        name,
        description: field(item, "description"),
        implementation: field(item, "implementation"),
        phase: field(item, "phase"),
        parameters,
    }
}

fn extract_parameter(element: &Element) -> Parameter {
    let name = field(element, "name").unwrap_or_default();
    if name.is_empty() {
        tracing::warn!("Parameter without a name in plugin descriptor");
    }

    Parameter {
        name,
        type_name: field(element, "type"),
        description: field(element, "description"),
        default_value: field(element, "defaultValue"),
        required: raw_text(element, "required").as_deref() == Some("true"),
        editable: raw_text(element, "editable").as_deref() != Some("false"),
    }
}

/// Reads the untrimmed text of the first matching descendant.
///
/// Boolean flags compare against the exact literal, padding included.
fn raw_text(element: &Element, tag: &str) -> Option<String> {
    element
        .find_descendant(tag, NESTED_SECTIONS)
        .map(Element::text_content)
}

/// Reads the trimmed text of the first matching descendant.
///
/// Blank text counts as absent.
fn field(element: &Element, tag: &str) -> Option<String> {
    element
        .find_descendant(tag, NESTED_SECTIONS)
        .map(|found| found.text_content().trim().to_string())
        .filter(|value| !value.is_empty())
}
