use std::fs;

use assert_cmd::Command;
use rainfall_excess_lib::config::Config;
use tempfile::TempDir;

fn run_in(dir: &TempDir, args: &[&str]) -> String {
    let mut cmd = Command::cargo_bin("rainfall-excess").unwrap();
    cmd.current_dir(dir.path()).arg("run").args(args);
    let assert = cmd.assert().success();
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

#[test]
fn cli_help_smoke() {
    let mut cmd = Command::cargo_bin("rainfall-excess").unwrap();
    cmd.arg("--help");
    cmd.assert().success();
}

#[test]
fn run_with_builtin_defaults() {
    let tmp = TempDir::new().unwrap();
    let stdout = run_in(&tmp, &[]);

    assert!(stdout.contains("Design storm: Kuala Lumpur"));
    assert!(stdout.contains("10-15"));
    assert!(stdout.contains("25-30"));
    assert!(stdout.lines().any(|l| l.starts_with("Total")));
    assert!(stdout.trim_end().ends_with("✓ Done."));
}

#[test]
fn run_reads_config_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("storm.toml");

    let mut config = Config::default();
    config.storm.location = "Ipoh".to_string();
    config.pattern.fractions = vec![0.5, 0.5];
    config.save_to_path(&path).unwrap();

    let stdout = run_in(&tmp, &["--config", path.to_str().unwrap()]);
    assert!(stdout.contains("Design storm: Ipoh"));
    assert!(stdout.contains("5-10"));
    assert!(!stdout.contains("10-15"));
}

#[test]
fn run_json_output() {
    let tmp = TempDir::new().unwrap();
    let stdout = run_in(
        &tmp,
        &[
            "--json", "--ari", "1", "--duration", "60", "--idf-k", "1", "--idf-x", "1",
            "--idf-a", "0", "--idf-n", "1", "--pervious-initial", "0",
            "--pervious-continuous", "0", "--impervious-initial", "0",
            "--impervious-continuous", "0", "--pattern", "1,0,0,0,0,0",
        ],
    );

    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["intensity"], 1.0);
    assert_eq!(json["total_depth"], 1.0);
    assert_eq!(json["bins"][0]["excess"], 1.0);
    assert_eq!(json["bins"][5]["excess"], 0.0);
    assert_eq!(json["summary"]["loss"], 0.0);
}

#[test]
fn run_with_unparseable_value_shows_unavailable() {
    let tmp = TempDir::new().unwrap();
    let stdout = run_in(&tmp, &["--ari", "ten"]);
    assert!(stdout.contains("Intensity (mm/hr): —"));

    let stdout = run_in(&tmp, &["--json", "--duration", ""]);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert!(json["intensity"].is_null());
    assert!(json["summary"]["excess"].is_null());
}

#[test]
fn run_accepts_negative_values() {
    let tmp = TempDir::new().unwrap();
    // (A + t) = -1 + 0.5
    let stdout = run_in(&tmp, &["--idf-a", "-1"]);
    assert!(stdout.contains("Intensity (mm/hr): —"));

    let stdout = run_in(&tmp, &["--json", "--pervious-initial", "-0.5"]);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert!(json["intensity"].is_number());
    assert_eq!(json["bins"].as_array().unwrap().len(), 6);
}

#[test]
fn run_reports_warnings() {
    let tmp = TempDir::new().unwrap();
    let stdout = run_in(
        &tmp,
        &[
            "--pattern",
            "0.1,0.1,0.1,0.1,0.1,0.1",
            "--pervious-pct",
            "60",
            "--impervious-pct",
            "30",
        ],
    );
    assert!(stdout.contains(
        "⚠ Temporal pattern sums to 0.600 (not ~1.000). Areas sum to 90.0% (not 100%)."
    ));
}

#[test]
fn run_with_missing_config_fails() {
    let tmp = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("rainfall-excess").unwrap();
    cmd.current_dir(tmp.path())
        .arg("run")
        .arg("--config")
        .arg(tmp.path().join("absent.toml"));
    cmd.assert().failure();
}

#[test]
fn init_config_writes_defaults_once() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("rainfall-config.toml");

    let mut cmd = Command::cargo_bin("rainfall-excess").unwrap();
    cmd.arg("init-config").arg("--path").arg(&path);
    cmd.assert().success();

    let written: Config = toml::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(written, Config::default());

    let mut cmd = Command::cargo_bin("rainfall-excess").unwrap();
    cmd.arg("init-config").arg("--path").arg(&path);
    cmd.assert().failure();

    let mut cmd = Command::cargo_bin("rainfall-excess").unwrap();
    cmd.arg("init-config").arg("--path").arg(&path).arg("--force");
    cmd.assert().success();
}
