use serde_json::Value;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

fn run_folio(dir: &Path, args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_folio"))
        .arg("--dir")
        .arg(dir)
        .args(args)
        .output()
        .expect("folio binary should run")
}

fn run_folio_json(dir: &Path, args: &[&str]) -> Value {
    let output = run_folio(dir, args);
    assert!(
        output.status.success(),
        "command {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

#[test]
fn test_init_then_show() {
    let tmp = tempdir().unwrap();
    let init = run_folio(tmp.path(), &["init"]);
    assert!(init.status.success());

    let out = run_folio_json(tmp.path(), &["show", "--format", "json"]);
    assert_eq!(out["status"], "ok");
    assert_eq!(out["document"]["about"]["name"], "Web3 Multi-Specialist");
    assert_eq!(out["document"]["experience"].as_array().unwrap().len(), 3);
}

#[test]
fn test_export_then_import_restores_snapshot() {
    let tmp = tempdir().unwrap();
    assert!(run_folio(tmp.path(), &["init"]).status.success());

    let export_dir = tmp.path().join("exports");
    fs::create_dir_all(&export_dir).unwrap();
    let out = run_folio_json(
        tmp.path(),
        &[
            "data",
            "export",
            "--out",
            export_dir.to_str().unwrap(),
            "--format",
            "json",
        ],
    );
    let snapshot = out["file"].as_str().unwrap().to_string();
    assert!(
        Path::new(&snapshot)
            .file_name()
            .unwrap()
            .to_str()
            .unwrap()
            .starts_with("portfolio-data-")
    );

    // Drift from the snapshot, then import it back.
    let added = run_folio_json(
        tmp.path(),
        &["experience", "add", "Drift Corp", "--format", "json"],
    );
    assert_eq!(added["status"], "ok");
    let summary = run_folio_json(tmp.path(), &["data", "summary", "--format", "json"]);
    assert_eq!(summary["experience"], 4);

    let imported = run_folio_json(
        tmp.path(),
        &["data", "import", &snapshot, "--format", "json"],
    );
    assert_eq!(imported["status"], "ok");
    let summary = run_folio_json(tmp.path(), &["data", "summary", "--format", "json"]);
    assert_eq!(summary["experience"], 3);
}

#[test]
fn test_import_rejects_incomplete_document() {
    let tmp = tempdir().unwrap();
    assert!(run_folio(tmp.path(), &["init"]).status.success());

    let bad = tmp.path().join("partial.json");
    fs::write(&bad, r#"{"about": {}, "experience": [], "contact": {}}"#).unwrap();
    let output = run_folio(tmp.path(), &["data", "import", bad.to_str().unwrap()]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("missing required section: projects"));
}

#[test]
fn test_import_rejects_non_json_extension() {
    let tmp = tempdir().unwrap();
    let bad = tmp.path().join("portfolio.txt");
    fs::write(&bad, "{}").unwrap();
    let output = run_folio(tmp.path(), &["data", "import", bad.to_str().unwrap()]);
    assert!(!output.status.success());
}

#[test]
fn test_sample_export_uses_fixed_filename() {
    let tmp = tempdir().unwrap();
    let out = run_folio_json(
        tmp.path(),
        &[
            "data",
            "sample",
            "--out",
            tmp.path().to_str().unwrap(),
            "--format",
            "json",
        ],
    );
    assert_eq!(out["status"], "ok");
    let sample_path = tmp.path().join("sample-portfolio-data.json");
    assert!(sample_path.exists());
    let sample: Value = serde_json::from_str(&fs::read_to_string(sample_path).unwrap()).unwrap();
    assert_eq!(sample["about"]["name"], "Sample Web3 Specialist");
}

#[test]
fn test_reset_requires_confirmation() {
    let tmp = tempdir().unwrap();
    assert!(run_folio(tmp.path(), &["init"]).status.success());

    let refused = run_folio(tmp.path(), &["data", "reset"]);
    assert!(!refused.status.success());

    run_folio_json(tmp.path(), &["projects", "add", "Scratch", "--format", "json"]);
    let reset = run_folio_json(tmp.path(), &["data", "reset", "--yes", "--format", "json"]);
    assert_eq!(reset["status"], "ok");
    let summary = run_folio_json(tmp.path(), &["data", "summary", "--format", "json"]);
    assert_eq!(summary["projects"], 5);
}

#[test]
fn test_theme_preference_round_trips() {
    let tmp = tempdir().unwrap();
    run_folio_json(tmp.path(), &["theme", "dark", "--format", "json"]);
    let shown = run_folio_json(tmp.path(), &["theme", "show", "--format", "json"]);
    assert_eq!(shown["dark"], true);

    run_folio_json(tmp.path(), &["theme", "light", "--format", "json"]);
    let shown = run_folio_json(tmp.path(), &["theme", "show", "--format", "json"]);
    assert_eq!(shown["dark"], false);
}

#[test]
fn test_edit_merges_without_dropping_fields() {
    let tmp = tempdir().unwrap();
    let added = run_folio_json(
        tmp.path(),
        &[
            "projects",
            "add",
            "Original Title",
            "--category",
            "Tools",
            "--format",
            "json",
        ],
    );
    let id = added["id"].as_str().unwrap().to_string();

    run_folio_json(
        tmp.path(),
        &[
            "projects",
            "edit",
            "--id",
            &id,
            "--title",
            "Renamed",
            "--format",
            "json",
        ],
    );
    let got = run_folio_json(
        tmp.path(),
        &["projects", "get", "--id", &id, "--format", "json"],
    );
    assert_eq!(got["item"]["title"], "Renamed");
    assert_eq!(got["item"]["category"], "Tools");
}
