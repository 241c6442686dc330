use assert_cmd::Command;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn proofdesk() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("proofdesk-cli").unwrap()
}

const ARTICLE: &str = r#"{
    "title": "Fox Report",
    "content": "<p>The quick fox jumps.</p>\n\n<p>It lands &amp; rests.</p>",
    "issues": [
        {"id": "i1", "original_text": "quick", "suggested_text": "slow",
         "decision_status": "pending", "severity": "warning", "engine": "ai",
         "explanation": "Pacing"},
        {"id": "i2", "original_text": "jumps", "suggested_text": "<em>leaps</em>",
         "decision_status": "accepted", "severity": "critical", "engine": "deterministic"},
        {"id": "i3", "original_text": "rests", "suggested_text": "sleeps",
         "decision_status": "pending", "severity": "info", "engine": "ai"}
    ]
}"#;

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

fn setup() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let article = write(dir.path(), "article.json", ARTICLE);
    (dir, article)
}

fn stdout_json(cmd: &mut Command) -> Value {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn preview_applies_issue_status() {
    let (dir, article) = setup();
    proofdesk()
        .arg("preview")
        .arg("--article")
        .arg(&article)
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("Fox Report"))
        .stdout(predicates::str::contains("The quick fox leaps."))
        .stdout(predicates::str::contains("It lands & rests."))
        .stdout(predicates::str::contains("1 accepted, 0 rejected, 0 modified, 2 pending (3 issues)"));
}

#[test]
fn preview_with_decisions_file_and_flags() {
    let (dir, article) = setup();
    let decisions = write(
        dir.path(),
        "decisions.json",
        r#"[
            {"issue_id": "i1", "decision_type": "accepted"},
            {"issue_id": "i2", "decision_type": "rejected"}
        ]"#,
    );

    let output = proofdesk()
        .arg("preview")
        .arg("--plain")
        .arg("--article")
        .arg(&article)
        .arg("--decisions")
        .arg(&decisions)
        .args(["--modify", "i3=naps"])
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout, "The slow fox jumps.\n\nIt lands & naps.\n");
}

#[test]
fn modify_overrides_earlier_accept() {
    let (dir, article) = setup();
    let json = stdout_json(
        proofdesk()
            .args(["--json", "preview"])
            .arg("--article")
            .arg(&article)
            .args(["--accept", "i1", "--modify", "i1=very slow"])
            .current_dir(dir.path()),
    );
    assert_eq!(
        json["reconciled_text"],
        "The very slow fox leaps.\n\nIt lands & rests."
    );
    assert_eq!(json["paragraphs"].as_array().unwrap().len(), 2);
    assert_eq!(json["stats"]["modified"], 1);
    assert_eq!(json["stats"]["accepted"], 1);
    assert_eq!(json["stats"]["total"], 3);
    assert_eq!(json["title"], "Fox Report");
}

#[test]
fn empty_article_shows_placeholder() {
    let dir = TempDir::new().unwrap();
    let article = write(dir.path(), "empty.json", r#"{"content": ""}"#);
    proofdesk()
        .arg("preview")
        .arg("--article")
        .arg(&article)
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("No content to preview."));
}

#[test]
fn config_file_changes_placeholder_and_hides_stats() {
    let dir = TempDir::new().unwrap();
    let article = write(dir.path(), "empty.json", r#"{"content": "<p> </p>"}"#);
    write(
        dir.path(),
        "proofdesk.toml",
        "[preview]\nempty_placeholder = \"Nothing to show\"\nshow_stats = false\n",
    );
    let output = proofdesk()
        .arg("preview")
        .arg("--article")
        .arg(&article)
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Nothing to show"));
    assert!(!stdout.contains("issues)"));
}

#[test]
fn explicit_missing_config_fails() {
    let (dir, article) = setup();
    proofdesk()
        .args(["--config", "missing.toml", "preview"])
        .arg("--article")
        .arg(&article)
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("missing.toml"));
}

#[test]
fn stats_json_totals() {
    let (dir, article) = setup();
    let json = stdout_json(
        proofdesk()
            .args(["stats", "--json", "--reject", "i2"])
            .arg("--article")
            .arg(&article)
            .current_dir(dir.path()),
    );
    assert_eq!(json["accepted"], 0);
    assert_eq!(json["rejected"], 1);
    assert_eq!(json["pending"], 2);
    assert_eq!(json["total"], 3);
}

#[test]
fn stats_text_output() {
    let (dir, article) = setup();
    proofdesk()
        .arg("stats")
        .arg("--article")
        .arg(&article)
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("Accepted: 1"))
        .stdout(predicates::str::contains("Total:    3"));
}

#[test]
fn issues_filter_by_status() {
    let (dir, article) = setup();
    let json = stdout_json(
        proofdesk()
            .args(["--json", "issues", "--status", "pending", "--accept", "i3"])
            .arg("--article")
            .arg(&article)
            .current_dir(dir.path()),
    );
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["id"], "i1");
    assert_eq!(entries[0]["status"], "pending");
    assert_eq!(entries[0]["object"]["explanation"], "Pacing");
}

#[test]
fn issues_grouped_by_severity() {
    let (dir, article) = setup();
    let output = proofdesk()
        .args(["issues", "--group"])
        .arg("--article")
        .arg(&article)
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let critical = stdout.find("critical (1)").unwrap();
    let warning = stdout.find("warning (1)").unwrap();
    let info = stdout.find("info (1)").unwrap();
    assert!(critical < warning && warning < info);
    assert!(stdout.contains("[warning] i1 (ai, pending)"));
}

#[test]
fn issues_no_match() {
    let (dir, article) = setup();
    proofdesk()
        .args(["issues", "--engine", "deterministic", "--severity", "info"])
        .arg("--article")
        .arg(&article)
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("No matching issues found."));
}

#[test]
fn unknown_severity_fails() {
    let (dir, article) = setup();
    proofdesk()
        .args(["issues", "--severity", "urgent"])
        .arg("--article")
        .arg(&article)
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("unknown severity: urgent"));
}

#[test]
fn decision_for_unknown_issue_fails() {
    let (dir, article) = setup();
    proofdesk()
        .args(["preview", "--accept", "nope"])
        .arg("--article")
        .arg(&article)
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("issue not found: nope"));
}

#[test]
fn malformed_modify_fails() {
    let (dir, article) = setup();
    proofdesk()
        .args(["preview", "--modify", "i1"])
        .arg("--article")
        .arg(&article)
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("expected 'id=text'"));
}

#[test]
fn missing_article_fails() {
    let dir = TempDir::new().unwrap();
    proofdesk()
        .args(["preview", "--article", "absent.json"])
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("absent.json"));
}
