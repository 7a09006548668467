use std::fs;
use std::process::Command;

use tempfile::TempDir;

#[test]
fn config_where_reports_override_directory() {
    let root = TempDir::new().unwrap();
    let config_dir = root.path().join("config");
    fs::create_dir_all(&config_dir).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_trispin"))
        .env("TRISPIN_CONFIG_DIR", &config_dir)
        .args(["config", "where"])
        .output()
        .expect("failed to run trispin config where");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("settings.toml"));
    assert!(stdout.contains(config_dir.to_str().unwrap()));
}

#[test]
fn config_init_writes_template_and_refuses_overwrite() {
    let root = TempDir::new().unwrap();
    let config_dir = root.path().join("config");

    let status = Command::new(env!("CARGO_BIN_EXE_trispin"))
        .env("TRISPIN_CONFIG_DIR", &config_dir)
        .args(["config", "init"])
        .status()
        .expect("failed to run trispin config init");
    assert!(status.success());

    let settings = config_dir.join("settings.toml");
    assert!(settings.exists());
    let body = fs::read_to_string(&settings).unwrap();
    assert!(body.contains("[animation]"));
    assert!(body.contains("sway_step"));

    let second = Command::new(env!("CARGO_BIN_EXE_trispin"))
        .env("TRISPIN_CONFIG_DIR", &config_dir)
        .args(["config", "init"])
        .status()
        .expect("failed to rerun trispin config init");
    assert!(!second.success());

    let forced = Command::new(env!("CARGO_BIN_EXE_trispin"))
        .env("TRISPIN_CONFIG_DIR", &config_dir)
        .args(["config", "init", "--force"])
        .status()
        .expect("failed to run trispin config init --force");
    assert!(forced.success());
}

#[test]
fn missing_explicit_settings_file_fails_fast() {
    let root = TempDir::new().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_trispin"))
        .env("TRISPIN_CONFIG_DIR", root.path())
        .args(["--settings", "/nonexistent/settings.toml"])
        .output()
        .expect("failed to run trispin");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("does not exist"));
}
