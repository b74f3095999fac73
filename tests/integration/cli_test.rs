//! Integration tests for the `sonic` binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use super::helpers::temp_file;

fn sonic(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("sonic").expect("binary should build");
    cmd.arg("--config")
        .arg(config_dir.path().join("config.toml"))
        .env_remove("SONIC_LOG");
    cmd
}

#[test]
fn timeline_json_lists_built_in_segments() {
    let dir = TempDir::new().unwrap();
    let output = sonic(&dir)
        .args(["timeline", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["boundary"], "inclusive");
    let ids: Vec<&str> = report["segments"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_str().unwrap())
        .collect();
    assert_eq!(
        ids,
        vec![
            "activation",
            "intense-clean",
            "pulse-mode",
            "whitening-pulse",
            "deep-scrub",
            "closing-burst"
        ]
    );
    assert_eq!(report["overlaps"].as_array().unwrap().len(), 0);
}

#[test]
fn timeline_text_shows_precise_times() {
    let dir = TempDir::new().unwrap();
    sonic(&dir)
        .arg("timeline")
        .assert()
        .success()
        .stdout(predicate::str::contains("intense-clean"))
        .stdout(predicate::str::contains("00:10.50"));
}

#[test]
fn timeline_file_overrides_config() {
    let dir = TempDir::new().unwrap();
    let (_tl_dir, path) = temp_file(
        "timeline.toml",
        r#"
boundary = "half-open"

[[segments]]
id = "solo"
start = 1.0
end = 2.0
pattern = [200, 100, 200]
name = "Solo"
intensity = "high"
"#,
    );

    sonic(&dir)
        .args(["timeline", "--json", "--timeline"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"solo\""))
        .stdout(predicate::str::contains("half-open"))
        .stdout(predicate::str::contains("activation").not());
}

#[test]
fn invalid_timeline_file_fails() {
    let dir = TempDir::new().unwrap();
    let (_tl_dir, path) = temp_file(
        "timeline.toml",
        r#"
[[segments]]
id = "dup"
start = 1.0
end = 2.0
pattern = 100
name = "One"

[[segments]]
id = "dup"
start = 3.0
end = 4.0
pattern = 100
name = "Two"
"#,
    );

    sonic(&dir)
        .args(["timeline", "--timeline"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Duplicate segment id 'dup'"));
}

#[test]
fn config_path_prints_override() {
    let dir = TempDir::new().unwrap();
    let expected = dir.path().join("config.toml");
    sonic(&dir)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(expected.display().to_string()));
}

#[test]
fn config_init_writes_once_unless_forced() {
    let dir = TempDir::new().unwrap();
    sonic(&dir).args(["config", "init"]).assert().success();

    let written = std::fs::read_to_string(dir.path().join("config.toml")).unwrap();
    assert!(written.contains("media_duration"));
    assert!(written.contains("whitening-pulse"));

    sonic(&dir)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    sonic(&dir).args(["config", "init", "--force"]).assert().success();
}

#[test]
fn config_show_prints_defaults() {
    let dir = TempDir::new().unwrap();
    sonic(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[player]"))
        .stdout(predicate::str::contains("loop_playback = true"));
}

#[test]
fn version_flag_works() {
    let dir = TempDir::new().unwrap();
    sonic(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("sonic"));
}
