//! Maven plugin descriptor parsing.
//!
//! Decodes a `plugin.xml` document into the [`Descriptor`] model. Two schema
//! shapes are accepted for the same model: goals nested under
//! `<goals><goal>` and goals nested under `<mojos><mojo>`. The shape is
//! detected once per document and both shapes share one extraction routine.
//!
//! # Examples
//!
//! ```
//! use markdocs_parser::{DescriptorParser, SchemaVariant};
//!
//! let xml = r#"
//!     <plugin>
//!       <name>demo-maven-plugin</name>
//!       <mojos>
//!         <mojo>
//!           <goal>check</goal>
//!           <phase>verify</phase>
//!         </mojo>
//!       </mojos>
//!     </plugin>
//! "#;
//!
//! let descriptor = DescriptorParser::new().parse_str(xml).unwrap();
//! assert_eq!(descriptor.name, "demo-maven-plugin");
//! assert_eq!(descriptor.commands[0].name, "check");
//! assert_eq!(descriptor.commands[0].phase.as_deref(), Some("verify"));
//!
//! assert_eq!(
//!     markdocs_parser::detect_variant(xml.as_bytes()).unwrap(),
//!     Some(SchemaVariant::Mojos)
//! );
//! ```
//!
//! [`Descriptor`]: markdocs_core::Descriptor

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod parser;
mod variant;
mod xml;

pub use parser::{DescriptorParser, detect_variant, parse};
pub use variant::SchemaVariant;
