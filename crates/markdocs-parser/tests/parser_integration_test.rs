//! Integration tests for markdocs-parser.
//!
//! Runs the parser over complete descriptors as produced by
//! `maven-plugin-tools`:
//! - both container layouts
//! - contextual and read-only parameters
//! - escaped markup in descriptions

use markdocs_core::Descriptor;
use markdocs_parser::{DescriptorParser, SchemaVariant, detect_variant};
use std::path::{Path, PathBuf};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn parse_fixture(name: &str) -> Descriptor {
    DescriptorParser::new().parse_file(fixture(name)).unwrap()
}

#[test]
fn test_parse_easy_jacoco_descriptor() {
    let descriptor = parse_fixture("plugin.xml");

    assert_eq!(descriptor.name, "easy-jacoco-maven-plugin");
    assert_eq!(descriptor.group_id, "com.marvinformatics.jacoco");
    assert_eq!(descriptor.artifact_id, "easy-jacoco-maven-plugin");
    assert_eq!(descriptor.version, "0.0.1-SNAPSHOT");
    assert!(
        descriptor
            .description
            .as_deref()
            .unwrap()
            .contains("This project aims at making jacoco easy")
    );

    assert_eq!(
        descriptor.command_names(),
        vec![
            "check-project",
            "help",
            "instrument-jar",
            "persist-report-project",
            "report-project",
        ]
    );
}

#[test]
fn test_goal_phases() {
    let descriptor = parse_fixture("plugin.xml");

    let phase = |name: &str| descriptor.command(name).unwrap().phase.clone();
    assert_eq!(phase("check-project").as_deref(), Some("verify"));
    assert_eq!(phase("instrument-jar").as_deref(), Some("package"));
    assert_eq!(phase("report-project").as_deref(), Some("verify"));
    assert_eq!(phase("help"), None);
}

#[test]
fn test_check_project_parameters() {
    let descriptor = parse_fixture("plugin.xml");
    let check = descriptor.command("check-project").unwrap();

    assert_eq!(
        check.implementation.as_deref(),
        Some("com.marvinformatics.jacoco.CheckProjectMojo")
    );

    let names: Vec<_> = check.parameters.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["dataFileExcludes", "haltOnFailure", "project", "projectRules"]
    );

    let halt = &check.parameters[1];
    assert_eq!(halt.type_name.as_deref(), Some("boolean"));
    assert!(halt.required);
    assert!(halt.editable);
    assert!(halt.default_value.is_none());

    let project = &check.parameters[2];
    assert!(!project.editable);
    assert!(project.is_contextual());

    let configurable: Vec<_> = check
        .configurable_parameters()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(
        configurable,
        vec!["dataFileExcludes", "haltOnFailure", "projectRules"]
    );
}

#[test]
fn test_configuration_section_does_not_override_parameters() {
    // <configuration> repeats parameter names with expressions as text.
    let descriptor = parse_fixture("plugin.xml");
    let help = descriptor.command("help").unwrap();

    assert_eq!(help.name, "help");
    let detail = &help.parameters[0];
    assert_eq!(detail.name, "detail");
    assert!(detail.default_value.is_none());
}

#[test]
fn test_escaped_markup_in_descriptions() {
    let descriptor = parse_fixture("plugin.xml");
    let help = descriptor.command("help").unwrap();

    let description = help.description.as_deref().unwrap();
    assert!(description.starts_with("Display help information on easy-jacoco-maven-plugin.<br>"));
    assert!(description.contains("-Dgoal=&lt;goal-name&gt;"));
}

#[test]
fn test_report_project_defaults() {
    let descriptor = parse_fixture("plugin.xml");
    let report = descriptor.command("report-project").unwrap();

    let formats = report.parameters.iter().find(|p| p.name == "formats").unwrap();
    assert_eq!(formats.default_value.as_deref(), Some("HTML,XML,CSV"));

    let output = report
        .parameters
        .iter()
        .find(|p| p.name == "outputDirectory")
        .unwrap();
    assert_eq!(
        output.default_value.as_deref(),
        Some("${project.reporting.outputDirectory}/jacoco-aggregate")
    );
}

#[test]
fn test_only_contextual_parameters_have_no_configurable_subset() {
    let descriptor = parse_fixture("plugin.xml");
    let persist = descriptor.command("persist-report-project").unwrap();

    assert_eq!(persist.parameters.len(), 2);
    assert_eq!(persist.configurable_parameters().count(), 0);
}

#[test]
fn test_both_layouts_parse_to_equal_descriptors() {
    let mojos = parse_fixture("plugin.xml");
    let goals = parse_fixture("plugin-goals.xml");

    assert_eq!(mojos, goals);
}

#[test]
fn test_detect_fixture_variants() {
    let mojos = std::fs::read(fixture("plugin.xml")).unwrap();
    let goals = std::fs::read(fixture("plugin-goals.xml")).unwrap();

    assert_eq!(detect_variant(&mojos).unwrap(), Some(SchemaVariant::Mojos));
    assert_eq!(detect_variant(&goals).unwrap(), Some(SchemaVariant::Goals));
}

#[test]
fn test_truncated_descriptor_is_malformed() {
    let bytes = std::fs::read(fixture("plugin.xml")).unwrap();
    let truncated = &bytes[..bytes.len() / 2];

    let err = markdocs_parser::parse(truncated).unwrap_err();
    assert!(err.is_malformed_descriptor());
}

#[test]
fn test_parse_file_from_temp_dir() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plugin.xml");
    std::fs::write(
        &path,
        "<plugin><name>tmp</name><goals><goal><goal>run</goal></goal></goals></plugin>",
    )
    .unwrap();

    let descriptor = DescriptorParser::new().parse_file(&path).unwrap();
    assert_eq!(descriptor.name, "tmp");
    assert_eq!(descriptor.command_names(), vec!["run"]);
}
