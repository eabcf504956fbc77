use std::fs;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::str::contains;
use serde_json::Value;
use tempfile::TempDir;

fn opentime_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("opentime"));
    cmd.env("NO_COLOR", "1");
    cmd
}

fn stdout_json(cmd: &mut Command) -> Value {
    let assert = cmd.assert().success();
    serde_json::from_slice(&assert.get_output().stdout).expect("stdout is JSON")
}

#[test]
fn list_json_matches_listing_endpoint_shape() {
    let body = stdout_json(opentime_cmd().args(["list", "--at", "8:00", "--json"]));
    assert_eq!(body["currentTime"], "8:00:00");
    let settings = body["settings"].as_array().expect("settings");
    assert_eq!(settings.len(), 3);
    assert_eq!(settings[0]["parameter"], "new-number");
    assert_eq!(settings[0]["isOpen"], true);
    assert_eq!(settings[2]["parameter"], "carrier-change");
    assert_eq!(settings[2]["isOpen"], false);
}

#[test]
fn list_table_shows_every_window() {
    opentime_cmd()
        .args(["list", "--at", "21:00"])
        .assert()
        .success()
        .stdout(contains("current time: 21:00:00"))
        .stdout(contains("new-number"))
        .stdout(contains("ore-chan-phone"))
        .stdout(contains("carrier-change"))
        .stdout(contains("9:00 - 21:00"));
}

#[test]
fn check_boundaries() {
    for (at, open) in [("8:59", false), ("9:00", true), ("21:00", true), ("21:01", false)] {
        let body = stdout_json(opentime_cmd().args(["check", "carrier-change", "--at", at, "--json"]));
        assert_eq!(body["isOpen"], open, "at {at}");
        assert_eq!(body["startTime"], "9:00");
        assert_eq!(body["endTime"], "21:00");
        assert_eq!(body["title"], "他社から乗り換え");
    }
}

#[test]
fn check_unknown_id_fails_with_message() {
    opentime_cmd()
        .args(["check", "unknown-id"])
        .assert()
        .failure()
        .stderr(contains("設定が見つかりません: unknown-id"));
}

#[test]
fn check_rejects_malformed_at() {
    opentime_cmd()
        .args(["check", "carrier-change", "--at", "25:00"])
        .assert()
        .failure()
        .stderr(contains("25:00"));
}

#[test]
fn config_file_replaces_builtin_table() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("windows.yaml");
    fs::write(
        &path,
        "windows:\n  - id: lunch\n    startTime: \"12:00\"\n    endTime: \"13:00\"\n    title: Lunch\n",
    )
    .expect("write config");

    let body = stdout_json(opentime_cmd().args([
        "list",
        "--config",
        path.to_str().expect("utf8 path"),
        "--at",
        "12:30",
        "--json",
    ]));
    let settings = body["settings"].as_array().expect("settings");
    assert_eq!(settings.len(), 1);
    assert_eq!(settings[0]["parameter"], "lunch");
    assert_eq!(settings[0]["isOpen"], true);

    opentime_cmd()
        .args(["check", "carrier-change", "--config", path.to_str().expect("utf8 path")])
        .assert()
        .failure()
        .stderr(contains("carrier-change"));
}

#[test]
fn invalid_config_fails_fast() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("windows.yaml");
    fs::write(
        &path,
        "windows:\n  - id: a\n    startTime: \"9:00\"\n    endTime: \"9:00\"\n    title: A\n  - id: a\n    startTime: \"10:00\"\n    endTime: \"11:00\"\n    title: B\n",
    )
    .expect("write config");

    opentime_cmd()
        .args(["serve", "--port", "0", "--config", path.to_str().expect("utf8 path")])
        .assert()
        .failure()
        .stderr(contains("duplicate window id 'a'"));
}
