use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn folio_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("folio"));
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

fn stdout_json(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).unwrap()
}

// =============================================================================
// Basic CLI
// =============================================================================

#[test]
fn test_help() {
    folio_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("portfolio"));
}

#[test]
fn test_version() {
    folio_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("folio"));
}

#[test]
fn test_unknown_section_rejected() {
    folio_cmd()
        .args(["show", "blog"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"))
        .stderr(predicate::str::contains("Unknown section: blog"));
}

#[test]
fn test_show_accepts_section_label() {
    let json = stdout_json(folio_cmd().args(["show", "Certifications", "--json"]));
    assert_eq!(json["section"], "certifications");
}

// =============================================================================
// Sections
// =============================================================================

#[test]
fn test_sections_lists_all_eight() {
    let mut assert = folio_cmd().arg("sections").assert().success();
    for label in [
        "Home",
        "About",
        "Skills",
        "Experience",
        "Projects",
        "Achievements",
        "Certifications",
        "Contact",
    ] {
        assert = assert.stdout(predicate::str::contains(label));
    }
}

#[test]
fn test_sections_json() {
    let json = stdout_json(folio_cmd().args(["ls", "--json"]));
    let ids: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_str().unwrap())
        .collect();
    assert_eq!(
        ids,
        [
            "home",
            "about",
            "skills",
            "experience",
            "projects",
            "achievements",
            "certifications",
            "contact"
        ]
    );
}

// =============================================================================
// Show
// =============================================================================

#[test]
fn test_show_home() {
    folio_cmd()
        .args(["show", "home"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Arka Sain"))
        .stdout(predicate::str::contains("Welcome to My Portfolio"))
        .stdout(predicate::str::contains("Made by Arka Sain"));
}

#[test]
fn test_show_skills_prints_chart_bars() {
    folio_cmd()
        .args(["show", "skills"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Technical Skills Proficiency"))
        .stdout(predicate::str::contains("Python"))
        .stdout(predicate::str::contains("█"))
        .stdout(predicate::str::contains("Professional Experience").not());
}

#[test]
fn test_show_achievements_pie_shares() {
    folio_cmd()
        .args(["show", "achievements"])
        .assert()
        .success()
        .stdout(predicate::str::contains("33.3%"));
}

#[test]
fn test_show_json_render_tree() {
    let json = stdout_json(folio_cmd().args(["show", "certifications", "--json"]));
    assert_eq!(json["section"], "certifications");
    let blocks = json["blocks"].as_array().unwrap();
    assert_eq!(blocks[0]["block"], "title");
    assert_eq!(blocks[0]["text"], "Professional Certifications");
    assert!(blocks
        .iter()
        .any(|b| b["block"] == "chart" && b["spec"]["kind"] == "scatter"));
}

// =============================================================================
// Contact
// =============================================================================

#[test]
fn test_contact_acknowledged() {
    folio_cmd()
        .args([
            "contact",
            "--name",
            "Jane",
            "--email",
            "jane@x.com",
            "-s",
            "general-inquiry",
            "-m",
            "Hi",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Thank you for your message! I'll get back to you soon.",
        ))
        .stdout(predicate::str::contains("General Inquiry"));
}

#[test]
fn test_contact_json_receipt() {
    let json = stdout_json(folio_cmd().args([
        "contact", "--name", "Jane", "--email", "jane@x.com", "-m", "Hi", "--json",
    ]));
    assert_eq!(json["accepted"], true);
    assert_eq!(json["subject"], "job-opportunity");
}

#[test]
fn test_contact_rejects_unknown_subject() {
    folio_cmd()
        .args(["contact", "--name", "Jane", "--email", "jane@x.com", "-s", "spam", "-m", "Hi"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid subject: spam"));
}

#[test]
fn test_contact_rejects_empty_message() {
    folio_cmd()
        .args(["contact", "--name", "Jane", "--email", "jane@x.com"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Message cannot be empty"));
}

#[test]
fn test_contact_rejects_bad_email() {
    folio_cmd()
        .args(["contact", "--name", "Jane", "--email", "jane", "-m", "Hi"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a valid address"));
}

// =============================================================================
// GraphQL
// =============================================================================

#[test]
fn test_query_sections() {
    let json = stdout_json(folio_cmd().args(["query", "{ sections { slug label } }"]));
    assert_eq!(json["data"]["sections"][2]["slug"], "skills");
    assert_eq!(json["data"]["sections"][2]["label"], "Skills");
}

#[test]
fn test_query_with_variables() {
    let json = stdout_json(folio_cmd().args([
        "query",
        "query($id: Section!) { charts(id: $id) }",
        "--variables",
        r#"{"id": "SKILLS"}"#,
    ]));
    let charts = json["data"]["charts"].as_array().unwrap();
    assert_eq!(charts.len(), 2);
    assert_eq!(charts[0]["kind"], "bar");
    assert_eq!(charts[1]["kind"], "radar");
}

// =============================================================================
// Config
// =============================================================================

#[test]
fn test_missing_config_fails() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nope.toml");

    folio_cmd()
        .args(["--config", path.to_str().unwrap(), "sections"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load config"));
}

#[test]
fn test_invalid_config_fails() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("folio.toml");
    std::fs::write(&path, "[tui]\nsidebar_width = 4\n").unwrap();

    folio_cmd()
        .args(["--config", path.to_str().unwrap(), "sections"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("sidebar_width"));
}

#[test]
fn test_valid_config_is_accepted() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("folio.toml");
    std::fs::write(&path, "[server]\nport = 8080\n").unwrap();

    folio_cmd()
        .args(["--config", path.to_str().unwrap(), "show", "about"])
        .assert()
        .success()
        .stdout(predicate::str::contains("About Me"));
}
