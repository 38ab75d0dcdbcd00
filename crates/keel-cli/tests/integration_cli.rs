//! End-to-end tests for the `keel` binary.
//!
//! Every invocation clears the inherited environment so only the variables
//! a test sets are visible to the resolver.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn project() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("package.json"),
        r#"{
            "name": "admin-web",
            "version": "1.4.0",
            "dependencies": { "vue": "^3.4.0" },
            "devDependencies": { "vite": "^5.0.0" }
        }"#,
    )
    .unwrap();
    fs::create_dir_all(dir.path().join("src/components/global")).unwrap();
    fs::create_dir_all(dir.path().join("src/assets/svg")).unwrap();
    fs::write(
        dir.path().join(".env.development"),
        "VITE_PUBLIC_PATH=/\nVITE_PORT=5173\nVITE_OPEN=true\n\
         VITE_PROXY_URL=http://localhost:8080\nVITE_BASE_URL=/api\nVITE_DROP_CONSOLE=false\n",
    )
    .unwrap();
    dir
}

fn keel(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("keel").unwrap();
    cmd.env_clear().current_dir(dir).arg("--no-color");
    cmd
}

#[test]
fn resolve_prints_json() {
    let dir = project();
    let output = keel(dir.path()).arg("resolve").output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["mode"], "development");
    assert_eq!(value["server"]["port"], "5173");
    assert_eq!(value["server"]["open"], true);
    assert_eq!(value["server"]["proxy"]["/api"]["target"], "http://localhost:8080");
    assert_eq!(value["deadCode"], serde_json::json!([]));

    let app_info: serde_json::Value =
        serde_json::from_str(value["define"]["__APP_INFO__"].as_str().unwrap()).unwrap();
    assert_eq!(app_info["pkg"]["name"], "admin-web");
    assert_eq!(app_info["pkg"]["devDependencies"]["vite"], "^5.0.0");
}

#[test]
fn resolve_production_mode_from_flag() {
    let dir = project();
    fs::write(
        dir.path().join(".env.production"),
        "VITE_PUBLIC_PATH=/admin/\nVITE_PORT=80\nVITE_OPEN=false\n\
         VITE_PROXY_URL=https://api.example.com\nVITE_BASE_URL=/prod-api\nVITE_DROP_CONSOLE=true\n",
    )
    .unwrap();

    let output = keel(dir.path())
        .args(["resolve", "--mode", "production"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["base"], "/admin/");
    assert_eq!(value["deadCode"], serde_json::json!(["console.log", "debugger"]));
    assert!(value["server"]["proxy"]["/prod-api"].is_object());
}

#[test]
fn mode_from_keel_mode_variable() {
    let dir = project();
    fs::write(
        dir.path().join(".env.staging"),
        "VITE_PUBLIC_PATH=/\nVITE_PORT=6000\nVITE_OPEN=false\n\
         VITE_PROXY_URL=http://staging\nVITE_BASE_URL=/api\nVITE_DROP_CONSOLE=true\n",
    )
    .unwrap();

    keel(dir.path())
        .env("KEEL_MODE", "staging")
        .arg("resolve")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"port\":\"6000\""));
}

#[test]
fn process_variables_fill_gaps_but_overlay_wins() {
    let dir = project();
    keel(dir.path())
        .env("VITE_PORT", "9999")
        .arg("env")
        .assert()
        .success()
        .stdout(predicate::str::contains("VITE_PORT=5173"))
        .stdout(predicate::str::contains("VITE_PORT=9999").not());
}

#[test]
fn missing_key_fails_with_variable_name() {
    let dir = project();
    fs::write(
        dir.path().join(".env.development"),
        "VITE_PUBLIC_PATH=/\nVITE_OPEN=true\n\
         VITE_PROXY_URL=http://localhost:8080\nVITE_BASE_URL=/api\nVITE_DROP_CONSOLE=false\n",
    )
    .unwrap();

    keel(dir.path())
        .arg("resolve")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("VITE_PORT"));
}

#[test]
fn loose_boolean_fails() {
    let dir = project();
    fs::write(dir.path().join(".env.development.local"), "VITE_OPEN=1\n").unwrap();
    keel(dir.path())
        .arg("resolve")
        .assert()
        .failure()
        .stderr(predicate::str::contains("VITE_OPEN"));
}

#[test]
fn missing_package_json_fails() {
    let dir = project();
    fs::remove_file(dir.path().join("package.json")).unwrap();
    keel(dir.path())
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("package.json"));
}

#[test]
fn check_reports_summary() {
    let dir = project();
    keel(dir.path())
        .arg("check")
        .assert()
        .success()
        .stderr(predicate::str::contains("Configuration resolved"))
        .stderr(predicate::str::contains("admin-web@1.4.0"))
        .stderr(predicate::str::contains("No warnings found"));
}

#[test]
fn check_warns_on_out_of_range_port() {
    let dir = project();
    fs::write(dir.path().join(".env.development.local"), "VITE_PORT=70000\n").unwrap();
    keel(dir.path())
        .arg("check")
        .assert()
        .success()
        .stderr(predicate::str::contains("70000"));
}

#[test]
fn proxy_routes_matching_path() {
    let dir = project();
    keel(dir.path())
        .args(["proxy", "/api/users?page=2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("url:     http://localhost:8080/users?page=2"));
}

#[test]
fn proxy_reports_local_path() {
    let dir = project();
    keel(dir.path())
        .args(["proxy", "/index.html"])
        .assert()
        .success()
        .stdout(predicate::str::contains("served locally"));
}

#[test]
fn cwd_flag_selects_project() {
    let dir = project();
    let elsewhere = TempDir::new().unwrap();
    let mut cmd = keel(elsewhere.path());
    cmd.arg("resolve")
        .arg("--cwd")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("admin-web"));
}

#[test]
fn reserved_mode_is_rejected() {
    let dir = project();
    keel(dir.path())
        .args(["resolve", "--mode", "local"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid mode"));
}

#[test]
fn env_dir_flag_reads_overlays_elsewhere() {
    let dir = project();
    let env_dir = TempDir::new().unwrap();
    fs::write(env_dir.path().join(".env"), "VITE_PROXY_URL=http://10.0.0.2:9000\n").unwrap();

    keel(dir.path())
        .arg("env")
        .arg("--env-dir")
        .arg(env_dir.path())
        .assert()
        .success()
        .stdout("VITE_PROXY_URL=http://10.0.0.2:9000\n");
}
