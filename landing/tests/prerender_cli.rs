use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;

fn prerender() -> assert_cmd::Command {
    cargo_bin_cmd!("astra-prerender")
}

#[test]
fn writes_document_to_stdout() {
    prerender()
        .args(["--year", "2030"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<!DOCTYPE html>"))
        .stdout(predicate::str::contains("© 2030 All rights reserved."));
}

#[test]
fn writes_document_to_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("dist/index.html");

    prerender().arg("--out").arg(&out).assert().success();

    let html = fs::read_to_string(&out).expect("rendered page");
    assert!(html.contains("data-section=\"footer\""));
}

#[test]
fn custom_config_and_no_motion() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = dir.path().join("astra.toml");
    fs::write(
        &config,
        "[studio]\nname = \"NOVA\"\nfooter_name = \"Nova Works\"\n\n[scene]\nenabled = false\n",
    )
    .expect("write config");

    prerender()
        .arg("--config")
        .arg(&config)
        .arg("--no-motion")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nova Works"))
        .stdout(predicate::str::contains("data-scene-state=\"disabled\""))
        .stdout(predicate::str::contains(" revealed\""));
}

#[test]
fn broken_config_is_reported() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = dir.path().join("astra.toml");
    fs::write(&config, "[studio\nname = ").expect("write config");

    prerender()
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load config"));
}

#[test]
fn missing_config_is_reported() {
    prerender()
        .args(["--config", "/nonexistent/astra.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("/nonexistent/astra.toml"));
}
