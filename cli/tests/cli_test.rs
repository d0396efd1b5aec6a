//! Integration tests for the planmark binary.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use planmark::DocumentModel;
use tempfile::TempDir;

const REPORT: &str = r#"{
    "Résumé": "Le nom de l'entreprise est Solaris\nNous installons des panneaux.",
    "Marché": "* Particuliers\n* Collectivités\n| Année | CA |\n| : | : |\n| 2025 | 120 |"
}"#;

fn planmark(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_planmark"))
        .args(args)
        .env("NO_COLOR", "1")
        .env_remove("PLANMARK_COMPANY")
        .output()
        .unwrap()
}

fn write_report(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("report.json");
    fs::write(&path, REPORT).unwrap();
    path
}

fn arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn test_normalize_to_file() {
    let dir = TempDir::new().unwrap();
    let input = write_report(&dir);
    let output = dir.path().join("report.md");

    let result = planmark(&["normalize", arg(&input), "-o", arg(&output)]);
    assert!(result.status.success());

    let markdown = fs::read_to_string(&output).unwrap();
    assert!(markdown.starts_with("# Business Plan\n\n## Entreprise: Solaris\n\n## Résumé\n"));
    assert!(markdown.contains("- Particuliers\n- Collectivités\n"));
}

#[test]
fn test_normalize_company_override() {
    let dir = TempDir::new().unwrap();
    let input = write_report(&dir);

    let result = planmark(&["normalize", arg(&input), "--company", "Atlas"]);
    assert!(result.status.success());
    assert!(String::from_utf8_lossy(&result.stdout).contains("## Entreprise: Atlas\n"));
}

#[test]
fn test_build_text() {
    let dir = TempDir::new().unwrap();
    let input = write_report(&dir);
    let output = dir.path().join("report.txt");

    let result = planmark(&["build", arg(&input), "--format", "text", "-o", arg(&output)]);
    assert!(result.status.success());

    let text = fs::read_to_string(&output).unwrap();
    assert!(text.starts_with("Business Plan\n"));
    assert!(text.contains("• Particuliers"));
    assert!(text.contains("Année\tCA\n2025\t120"));
}

#[test]
fn test_build_json_format_from_extension() {
    let dir = TempDir::new().unwrap();
    let input = write_report(&dir);
    let output = dir.path().join("model.json");

    let result = planmark(&["build", arg(&input), "-o", arg(&output)]);
    assert!(result.status.success());

    let doc: DocumentModel = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(doc.metadata.author.as_deref(), Some("Solaris"));
    assert_eq!(doc.headings()[1], (2, "Entreprise: Solaris"));
    assert_eq!(doc.blocks.iter().filter(|b| b.is_table()).count(), 1);
}

#[test]
fn test_build_markdown_input() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("plan.md");
    fs::write(&input, "## Intro\n- a\n**Key**").unwrap();

    let result = planmark(&["build", arg(&input)]);
    assert!(result.status.success());
    assert_eq!(
        String::from_utf8_lossy(&result.stdout).trim_end(),
        "## Intro\n\n- a\n\n**Key**"
    );
}

#[test]
fn test_binary_format_needs_output_file() {
    let dir = TempDir::new().unwrap();
    let input = write_report(&dir);

    let result = planmark(&["build", arg(&input), "--format", "docx"]);
    assert!(!result.status.success());
    assert!(String::from_utf8_lossy(&result.stderr).contains("--output"));
}

#[test]
fn test_missing_input_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("absent.json");

    let result = planmark(&["normalize", arg(&missing)]);
    assert_eq!(result.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&result.stderr).contains("Error"));
}

#[test]
fn test_batch_writes_one_file_per_input() {
    let dir = TempDir::new().unwrap();
    let report = write_report(&dir);
    let notes = dir.path().join("notes.md");
    fs::write(&notes, "## Notes\n- rappel").unwrap();
    let out = dir.path().join("out");

    let result = planmark(&[
        "batch",
        arg(&report),
        arg(&notes),
        "--format",
        "text",
        "-o",
        arg(&out),
    ]);
    assert!(result.status.success());

    let report_text = fs::read_to_string(out.join("report.txt")).unwrap();
    assert!(report_text.contains("Entreprise: Solaris"));
    let notes_text = fs::read_to_string(out.join("notes.txt")).unwrap();
    assert!(notes_text.contains("• rappel"));
}

#[test]
fn test_info_json() {
    let dir = TempDir::new().unwrap();
    let input = write_report(&dir);

    let result = planmark(&["info", arg(&input), "--json"]);
    assert!(result.status.success());

    let stats: serde_json::Value = serde_json::from_slice(&result.stdout).unwrap();
    assert_eq!(stats["heading_count"], 4);
    assert_eq!(stats["bullet_count"], 2);
    assert_eq!(stats["table_count"], 1);
}

#[test]
fn test_version() {
    let result = planmark(&["version"]);
    assert!(result.status.success());
    assert!(String::from_utf8_lossy(&result.stdout).contains(env!("CARGO_PKG_VERSION")));
}
