//! CLI behavior of the rcmp binary

use std::fs;

use assert_cmd::Command;
use httpmock::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{fixtures_dir, load_fixture, write_config};

/// rcmp with an isolated HOME so no user config leaks in.
fn rcmp(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("rcmp").expect("rcmp binary");
    cmd.env("HOME", home.path())
        .env_remove("RCMP_API_URL")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_lists_subcommands() {
    let home = TempDir::new().unwrap();
    rcmp(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("parse"))
        .stdout(predicate::str::contains("view"))
        .stdout(predicate::str::contains("export"))
        .stdout(predicate::str::contains("models"));
}

#[test]
fn view_print_renders_requested_tab() {
    let home = TempDir::new().unwrap();
    rcmp(&home)
        .args(["view", "--print", "--tab", "education"])
        .arg(fixtures_dir().join("envelope.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Parsed Resume Data"))
        .stdout(predicate::str::contains("Education"))
        .stdout(predicate::str::contains("Private tutoring"))
        .stdout(predicate::str::contains("No education data found"))
        .stdout(predicate::str::contains("\x1b[").not());
}

#[test]
fn view_rejects_unknown_tab() {
    let home = TempDir::new().unwrap();
    rcmp(&home)
        .args(["view", "--print", "--tab", "hobbies"])
        .arg(fixtures_dir().join("envelope.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid --tab value 'hobbies'"));
}

#[test]
fn view_missing_file_fails_with_context() {
    let home = TempDir::new().unwrap();
    rcmp(&home)
        .args(["view", "--print", "missing.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read missing.json"));
}

#[test]
fn export_writes_both_artifacts() {
    let home = TempDir::new().unwrap();
    let out = home.path().join("out");
    rcmp(&home)
        .arg("export")
        .arg(fixtures_dir().join("envelope.json"))
        .arg("--out")
        .arg(&out)
        .assert()
        .success()
        .stderr(predicate::str::contains("resume-data.csv"));

    let csv = fs::read_to_string(out.join("resume-data.csv")).unwrap();
    assert!(csv.starts_with("Model,Field,Value\n"));
    assert!(csv.contains("GPT-4o,Skills,\"Python; C++\""));

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out.join("resume-data.json")).unwrap()).unwrap();
    assert_eq!(json["results"].as_array().unwrap().len(), 2);
}

#[test]
fn export_uses_configured_labels() {
    let home = TempDir::new().unwrap();
    write_config(
        home.path(),
        "[labels]\n\"huggingface:openai/gpt-oss-120b\" = \"OSS\"\n",
    );
    rcmp(&home)
        .args(["export", "--format", "csv", "--out"])
        .arg(home.path())
        .arg(fixtures_dir().join("envelope.json"))
        .assert()
        .success();

    let csv = fs::read_to_string(home.path().join("resume-data.csv")).unwrap();
    assert!(csv.contains("OSS,Name,\"A. Lovelace, Countess\""));
    assert!(!home.path().join("resume-data.json").exists());
}

#[test]
fn models_marks_defaults() {
    let home = TempDir::new().unwrap();
    rcmp(&home)
        .arg("models")
        .assert()
        .success()
        .stdout(predicate::str::contains("* openai:gpt-4o"))
        .stdout(predicate::str::contains("* openai:gpt-5.1"))
        .stdout(predicate::str::contains("huggingface:openai/gpt-oss-120b:groq"));
}

#[test]
fn config_show_prints_annotated_defaults() {
    let home = TempDir::new().unwrap();
    rcmp(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Parsing service connection"))
        .stdout(predicate::str::contains("url = \"http://localhost:8000\""));
}

#[test]
fn completions_generate_for_bash() {
    let home = TempDir::new().unwrap();
    rcmp(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rcmp"));
}

#[test]
fn parse_rejects_unsupported_document_before_any_request() {
    let home = TempDir::new().unwrap();
    let doc = home.path().join("cv.rtf");
    fs::write(&doc, "{\\rtf1}").unwrap();
    rcmp(&home)
        .args(["parse", "--print", "--api-url", "http://127.0.0.1:9"])
        .arg(&doc)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported file type"));
}

#[test]
fn parse_print_against_service() {
    let home = TempDir::new().unwrap();
    let doc = home.path().join("cv.txt");
    fs::write(&doc, "Ada Lovelace").unwrap();
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/parse")
            .query_param("models", "openai:gpt-4o,openai:gpt-5-preview");
        then.status(200)
            .header("content-type", "application/json")
            .body(load_fixture("envelope.json"));
    });

    rcmp(&home)
        .args(["parse", "--print", "--models", "openai:gpt-4o,openai:gpt-5-preview"])
        .arg("--api-url")
        .arg(server.base_url())
        .arg("--export")
        .arg(home.path().join("exports"))
        .arg(&doc)
        .assert()
        .success()
        .stdout(predicate::str::contains("Name: Ada Lovelace"))
        .stdout(predicate::str::contains(
            "openai:gpt-5-preview — no response from backend",
        ));

    mock.assert();
    assert!(home.path().join("exports/resume-data.csv").exists());
}

#[test]
fn parse_surfaces_service_rejection() {
    let home = TempDir::new().unwrap();
    let doc = home.path().join("cv.txt");
    fs::write(&doc, "Ada Lovelace").unwrap();
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/parse");
        then.status(422)
            .json_body(serde_json::json!({ "detail": "No models selected" }));
    });

    rcmp(&home)
        .args(["parse", "--print", "--api-url"])
        .arg(server.base_url())
        .arg(&doc)
        .assert()
        .failure()
        .stderr(predicate::str::contains("No models selected"));
}

#[test]
fn api_url_env_is_used() {
    let home = TempDir::new().unwrap();
    let doc = home.path().join("cv.txt");
    fs::write(&doc, "Ada Lovelace").unwrap();
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/api/parse");
        then.status(200).body(r#"{"results": [], "errors": []}"#);
    });

    rcmp(&home)
        .env("RCMP_API_URL", server.base_url())
        .args(["parse", "--print", "--models", "openai:gpt-4o"])
        .arg(&doc)
        .assert()
        .success()
        .stdout(predicate::str::contains("Comparing 0 models"));
    mock.assert();
}
