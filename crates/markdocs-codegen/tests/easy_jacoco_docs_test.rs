//! End-to-end page generation for the easy-jacoco plugin descriptor.

use markdocs_codegen::{GeneratedDocs, MarkdownGenerator};
use markdocs_core::Descriptor;
use markdocs_parser::DescriptorParser;
use std::path::Path;

fn descriptor() -> Descriptor {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../markdocs-parser/tests/fixtures/plugin.xml");
    DescriptorParser::new().parse_file(path).unwrap()
}

fn docs(title: Option<&str>) -> GeneratedDocs {
    MarkdownGenerator::new()
        .unwrap()
        .generate_all(&descriptor(), title)
        .unwrap()
}

fn page(docs: &GeneratedDocs, path: &str) -> String {
    docs.page(path)
        .unwrap_or_else(|| panic!("missing page {path}"))
        .content
        .clone()
}

#[test]
fn test_page_set() {
    let docs = docs(None);
    assert_eq!(
        docs.paths(),
        vec![
            "README.md",
            "check-project.md",
            "help.md",
            "instrument-jar.md",
            "persist-report-project.md",
            "report-project.md",
        ]
    );
}

#[test]
fn test_overview_page() {
    let docs = docs(Some("Easy JaCoCo Maven Plugin Goals Documentation"));
    let overview = page(&docs, "README.md");

    assert!(overview.starts_with("# Easy JaCoCo Maven Plugin Goals Documentation\n\n"));
    assert!(overview.contains(
        "This directory provides detailed documentation for each Maven goal available in the \
         easy-jacoco-maven-plugin. Click on the goal name for full details:"
    ));

    assert!(overview.contains(
        "- [check-project](check-project.md): Checks that the code coverage of the whole \
         project meets the configured rules.\n"
    ));
    assert!(overview.contains(
        "- [help](help.md): Display help information on easy-jacoco-maven-plugin.\n"
    ));
    assert!(overview.contains(
        "- [persist-report-project](persist-report-project.md): Copies the aggregated coverage \
         report into the project site directory.\n"
    ));

    let links = overview.lines().filter(|l| l.starts_with("- [")).count();
    assert_eq!(links, 5);
}

#[test]
fn test_overview_truncates_long_first_sentence() {
    let overview = page(&docs(None), "README.md");

    let line = overview
        .lines()
        .find(|l| l.starts_with("- [instrument-jar]"))
        .unwrap();
    let summary = line
        .strip_prefix("- [instrument-jar](instrument-jar.md): ")
        .unwrap();

    assert_eq!(summary.chars().count(), 80);
    assert!(summary.starts_with("Maven Mojo for instrumenting jar files offline"));
    assert!(summary.ends_with("..."));
}

#[test]
fn test_check_project_page() {
    let check = page(&docs(None), "check-project.md");

    assert!(check.starts_with("# Check project Goal\n\n"));
    assert!(check.contains("**Goal Name:** `check-project`"));
    assert!(check.contains("**Phase:** `verify`"));
    assert!(check.contains("**Usage:**  \nThis goal is bound to the `verify` phase"));
    assert!(check.contains("**Parameters:**"));

    assert!(check.contains(
        "- **dataFileExcludes** (List, Optional)\n  Exclusion patterns for execution data files.\n  *Default:* None.\n\n"
    ));
    assert!(check.contains(
        "- **haltOnFailure** (boolean, Required)\n  Whether to fail the build when a coverage rule is violated.\n\n"
    ));
    assert!(check.contains("- **project** (MavenProject, Required)\n  The Maven project being checked.\n\n"));

    assert!(check.contains(
        "  <configuration>\n    <dataFileExcludes><!-- optional --></dataFileExcludes>\n    \
         <haltOnFailure><!-- required --></haltOnFailure>\n    \
         <projectRules><!-- optional --></projectRules>\n  </configuration>\n"
    ));
    assert!(!check.contains("<project>"));
}

#[test]
fn test_help_page() {
    let help = page(&docs(None), "help.md");

    assert!(help.starts_with("# Help Goal\n"));
    assert!(!help.contains("**Phase:**"));
    assert!(help.contains("bound to the `unspecified` phase"));
    assert!(help.contains("**Description:**  \nDisplay help information on easy-jacoco-maven-plugin.<br>"));
    assert!(help.contains("- **detail** (boolean, Optional)\n  If <code>true</code>, display all settable properties for each goal.\n"));
    assert!(help.contains("- **goal** (String, Optional)"));
}

#[test]
fn test_instrument_jar_page() {
    let page = page(&docs(None), "instrument-jar.md");

    assert!(page.starts_with("# Instrument jar Goal\n"));
    assert!(page.contains("**Phase:** `package`"));
    assert!(page.contains("- **destination** (File, Required)\n  Where the instrumented jar is written.\n\n"));
    assert!(page.contains("- **source** (File, Required)\n  The jar to instrument.\n\n"));
    assert!(page.contains("**Example Configuration:**"));
}

#[test]
fn test_persist_report_page_has_no_example() {
    let page = page(&docs(None), "persist-report-project.md");

    assert!(page.contains("- **session** (MavenSession, Required)"));
    assert!(!page.contains("**Example Configuration:**"));
    assert!(page.ends_with("- **project** (MavenProject, Required)\n  The Maven project.\n\n"));
}

#[test]
fn test_report_project_defaults() {
    let page = page(&docs(None), "report-project.md");

    assert!(page.contains("# Report project Goal"));
    assert!(page.contains("  *Default:* `HTML,XML,CSV`\n"));
    assert!(page.contains("  *Default:* `${project.reporting.outputDirectory}/jacoco-aggregate`\n"));
    assert!(page.ends_with("  </configuration>\n</plugin>\n```\n\n"));
}
