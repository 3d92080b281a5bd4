use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

#[path = "../common/mod.rs"]
mod common;
use common::{TempWorkspace, closed_url};

fn radar(ws: &TempWorkspace) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_project_radar"));
    cmd.current_dir(ws.path()).env_remove("TEAMS_WEBHOOK_URL").env_remove("RUST_LOG");
    cmd
}

fn stdout_json(cmd: &mut Command) -> Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).unwrap()
}

#[test]
fn shows_help() {
    let ws = TempWorkspace::new();
    radar(&ws)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("scan").and(predicate::str::contains("report")));
}

#[test]
fn scan_lists_classified_files_as_json() {
    let ws = TempWorkspace::new();
    ws.write("docs/AlphaGen1/spec.txt", "alpha spec");
    ws.write("docs/notes.md", "misc");
    ws.write("docs/node_modules/dep.txt", "ignored");
    ws.write("docs/run.log", "ignored");

    let json = stdout_json(radar(&ws).args(["scan", "--root"]).arg(ws.path().join("docs")));
    let files = json["files"].as_array().unwrap();
    let names: Vec<&str> = files.iter().map(|f| f["filename"].as_str().unwrap()).collect();

    assert_eq!(files.len(), 2, "{names:?}");
    assert!(names.contains(&"spec.txt"));
    assert!(names.contains(&"notes.md"));
    let spec = files.iter().find(|f| f["filename"] == "spec.txt").unwrap();
    assert_eq!(spec["project"], "Project-Alpha");
    assert_eq!(spec["owner"], "");
}

#[test]
fn scan_table_prints_a_count_line() {
    let ws = TempWorkspace::new();
    ws.write("docs/beta_notes.md", "beta");

    radar(&ws)
        .args(["scan", "--format", "table", "--root"])
        .arg(ws.path().join("docs"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Project-Beta").and(predicate::str::contains("1 files")));
}

#[test]
fn missing_root_yields_empty_file_list() {
    let ws = TempWorkspace::new();
    let json = stdout_json(radar(&ws).args(["scan", "--root"]).arg(ws.path().join("absent")));
    assert_eq!(json["files"], Value::Array(Vec::new()));
}

#[test]
fn extract_prints_text_and_placeholders() {
    let ws = TempWorkspace::new();
    let text = ws.write("readme.txt", "hello radar");
    let image = ws.write("photo.psd", "binary");

    radar(&ws)
        .arg("extract")
        .arg(&text)
        .arg(&image)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("=== File: readme.txt ===\nhello radar")
                .and(predicate::str::contains("[Unsupported format: .psd]")),
        );
}

#[test]
fn report_without_webhook_skips_notification() {
    let ws = TempWorkspace::new();
    ws.write("docs/gamma_monitoring.md", "dashboards");

    let json = stdout_json(radar(&ws).args(["report", "--no-analysis", "--root"]).arg(ws.path().join("docs")));

    assert_eq!(json["recent_projects"], 1);
    assert_eq!(json["recent_files"], 1);
    assert_eq!(json["notifications_sent"], 0);
    assert_eq!(json["notifications_skipped"], 1);
    assert_eq!(json["analyses"], Value::Array(Vec::new()));
}

#[test]
fn analyze_reports_unreachable_llm_as_error_status() {
    let ws = TempWorkspace::new();
    let file = ws.write("alpha.txt", "some content");

    let json = stdout_json(radar(&ws).env("OLLAMA_API_URL", closed_url()).arg("analyze").arg(&file));
    assert_eq!(json["status"], "error");
    assert!(!json["message"].as_str().unwrap().is_empty());
}

#[test]
fn invalid_settings_file_fails() {
    let ws = TempWorkspace::new();
    let config = ws.write("radar.yaml", "report:\n  window_days: 0\n");

    radar(&ws)
        .arg("--config")
        .arg(&config)
        .arg("scan")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load settings"));
}
