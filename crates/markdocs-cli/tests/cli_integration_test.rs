//! Integration tests for the documentation workflow and the `markdocs` binary.

use markdocs_cli::commands::generate::{GenerateArgs, generate};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn fixture() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../markdocs-parser/tests/fixtures/plugin.xml")
}

fn markdocs(args: &[&str], cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_markdocs"))
        .args(args)
        .current_dir(cwd)
        .env_remove("MARKDOCS_DESCRIPTOR")
        .env_remove("MARKDOCS_OUTPUT")
        .env_remove("MARKDOCS_TITLE")
        .env_remove("MARKDOCS_CONFIG")
        .env("NO_COLOR", "1")
        .output()
        .unwrap()
}

// ============================================================================
// Library Workflow Tests
// ============================================================================

#[tokio::test]
async fn test_generate_writes_fixture_pages() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("docs");
    let args = GenerateArgs {
        descriptor: Some(fixture()),
        output: Some(output.clone()),
        title: Some("Easy JaCoCo Maven Plugin Goals Documentation".to_string()),
        ..Default::default()
    };

    let result = generate(&args, None).await.unwrap();

    assert_eq!(result.plugin, "easy-jacoco-maven-plugin");
    assert_eq!(result.page_count, 6);
    assert_eq!(result.pages.len(), 6);
    assert!(result.skipped.is_empty());

    let overview = fs::read_to_string(output.join("README.md")).unwrap();
    assert!(overview.starts_with("# Easy JaCoCo Maven Plugin Goals Documentation\n"));
    assert!(overview.contains("- [report-project](report-project.md)"));

    let check = fs::read_to_string(output.join("check-project.md")).unwrap();
    assert!(check.starts_with("# Check project Goal\n"));
}

#[tokio::test]
async fn test_generate_respects_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("site");
    let config = temp_dir.path().join("markdocs.toml");
    fs::write(
        &config,
        format!(
            "[generate]\ndescriptor = \"{}\"\noutput_directory = \"{}\"\ntitle = \"From Config\"\n",
            fixture().display(),
            output.display()
        ),
    )
    .unwrap();

    let result = generate(&GenerateArgs::default(), Some(&config)).await.unwrap();

    assert_eq!(result.output_directory, output.display().to_string());
    let overview = fs::read_to_string(output.join("README.md")).unwrap();
    assert!(overview.starts_with("# From Config\n"));
}

#[tokio::test]
async fn test_generate_without_overwrite_keeps_existing_pages() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("docs");
    fs::create_dir_all(&output).unwrap();
    fs::write(output.join("help.md"), "hand-written\n").unwrap();

    let args = GenerateArgs {
        descriptor: Some(fixture()),
        output: Some(output.clone()),
        no_overwrite: true,
        ..Default::default()
    };
    let result = generate(&args, None).await.unwrap();

    assert_eq!(result.skipped, vec![output.join("help.md").display().to_string()]);
    assert_eq!(result.pages.len(), 5);
    assert_eq!(fs::read_to_string(output.join("help.md")).unwrap(), "hand-written\n");
}

// ============================================================================
// Binary Tests
// ============================================================================

#[test]
fn test_binary_generate_json_summary() {
    let temp_dir = TempDir::new().unwrap();
    let fixture = fixture();
    let out = markdocs(
        &[
            "--format",
            "json",
            "generate",
            fixture.to_str().unwrap(),
            "--output",
            "docs",
        ],
        temp_dir.path(),
    );

    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let summary: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(summary["plugin"], "easy-jacoco-maven-plugin");
    assert_eq!(summary["page_count"], 6);
    assert!(temp_dir.path().join("docs/instrument-jar.md").exists());
}

#[test]
fn test_binary_missing_descriptor_exits_not_found() {
    let temp_dir = TempDir::new().unwrap();
    let out = markdocs(&["generate"], temp_dir.path());

    assert_eq!(out.status.code(), Some(3));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains(
        "Plugin descriptor not found: target/classes/META-INF/maven/plugin.xml"
    ));
    assert!(!temp_dir.path().join("target/markdocs").exists());
}

#[test]
fn test_binary_malformed_descriptor_exits_invalid_input() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("plugin.xml"), "<plugin><mojos><mojo>").unwrap();

    let out = markdocs(&["generate", "plugin.xml"], temp_dir.path());

    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Malformed plugin descriptor"));
    assert!(!temp_dir.path().join("target/markdocs").exists());
}

#[test]
fn test_binary_inspect_text() {
    let temp_dir = TempDir::new().unwrap();
    let fixture = fixture();
    let out = markdocs(
        &["--format", "text", "inspect", fixture.to_str().unwrap(), "--goal", "help"],
        temp_dir.path(),
    );

    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(stdout.lines().count(), 1);
    assert!(stdout.contains("\"name\":\"help\""));
}

#[test]
fn test_binary_completions() {
    let temp_dir = TempDir::new().unwrap();
    let out = markdocs(&["completions", "bash"], temp_dir.path());

    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).contains("markdocs"));
}
