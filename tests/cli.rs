//! End-to-end tests for the datecalc binary

#![allow(deprecated)]

use assert_cmd::Command;
use mockito::{Matcher, Server, ServerGuard};
use predicates::prelude::*;
use rstest::{fixture, rstest};
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[fixture]
fn server() -> ServerGuard {
    Server::new()
}

#[fixture]
fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

fn write_config(temp_dir: &TempDir, base_url: &str) -> PathBuf {
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, format!("base_url = \"{base_url}\"\ntimeout_secs = 5\n")).unwrap();
    path
}

fn datecalc_cmd(config: &Path) -> Command {
    let mut cmd = Command::cargo_bin("datecalc").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd.arg("--config").arg(config);
    cmd
}

#[rstest]
fn test_calendar_formats_digits_and_prints_results(mut server: ServerGuard, temp_dir: TempDir) {
    let mock = server
        .mock("POST", "/api/CalcCalendarDate")
        .match_body(Matcher::Json(json!({"date": "07/04/2023"})))
        .with_status(200)
        .with_body(
            json!({"results": {"DayOfWeek": "TUE.", "AcscJulian": "23-185", "ErrorFlag": "0"}})
                .to_string(),
        )
        .expect(1)
        .create();
    let config = write_config(&temp_dir, &format!("{}/api/", server.url()));

    datecalc_cmd(&config)
        .args(["calendar", "07042023"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"dayOfWeek\s+TUE\.").unwrap())
        .stdout(predicate::str::contains("23-185"))
        .stdout(predicate::str::contains("sysdate"));

    mock.assert();
}

#[rstest]
fn test_calendar_validate_refuses_unknown_shape(mut server: ServerGuard, temp_dir: TempDir) {
    let mock = server
        .mock("POST", "/api/CalcCalendarDate")
        .expect(0)
        .create();
    let config = write_config(&temp_dir, &format!("{}/api/", server.url()));

    datecalc_cmd(&config)
        .args(["calendar", "2023/07/04", "--validate"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("is not a valid"));

    mock.assert();
}

#[rstest]
fn test_calendar_empty_date_prints_prompt(mut server: ServerGuard, temp_dir: TempDir) {
    let _mock = server
        .mock("POST", "/api/CalcCalendarDate")
        .match_body(Matcher::Json(json!({"date": ""})))
        .with_status(400)
        .with_body(
            json!({"results": {"ErrorFlag": "HTTP: 400", "ErrorText": "invalid date: empty"}})
                .to_string(),
        )
        .create();
    let config = write_config(&temp_dir, &format!("{}/api/", server.url()));

    datecalc_cmd(&config)
        .args(["calendar", ""])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Please enter a date."));
}

#[rstest]
fn test_service_error_flag_exits_non_zero(mut server: ServerGuard, temp_dir: TempDir) {
    let _mock = server
        .mock("POST", "/api/CalcHundredYearDate")
        .match_body(Matcher::Json(json!({"date": "100000"})))
        .with_status(400)
        .with_body(
            json!({"results": {
                "ErrorFlag": "HTTP: 400",
                "ErrorText": "100 year date out of range: must be between 0 and 99999"
            }})
            .to_string(),
        )
        .create();
    let config = write_config(&temp_dir, &format!("{}/api/", server.url()));

    datecalc_cmd(&config)
        .args(["hundred-year", "100000"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("100 year date out of range"))
        .stderr(predicate::str::contains("rejected"));
}

#[rstest]
fn test_unreachable_service_exits_non_zero(temp_dir: TempDir) {
    let config = write_config(&temp_dir, "http://localhost:1/api/");

    datecalc_cmd(&config)
        .args(["calendar", "07/04/2023"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed"));
}

#[rstest]
fn test_missing_config_file_exits_non_zero(temp_dir: TempDir) {
    let config = temp_dir.path().join("absent.toml");

    datecalc_cmd(&config)
        .arg("now")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Could not find config file"));
}

#[rstest]
fn test_now_prints_clock(temp_dir: TempDir) {
    let config = write_config(&temp_dir, "http://localhost:1/api/");

    datecalc_cmd(&config)
        .arg("now")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"sysdate\s+\d{8}").unwrap())
        .stdout(predicate::str::is_match(r"udate\s+\d{8}").unwrap())
        .stdout(predicate::str::is_match(r"pageTime\s+\d{2}:\d{2}:\d{2}").unwrap());
}
