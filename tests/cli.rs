//! Tests for the `layout-reader` binary.

use assert_cmd::Command;
use layout_reader::Document;
use mockito::Matcher;
use predicates::prelude::*;

const PARSE_PATH: &str = "/api/parseDocument";

const BLOCKS_BODY: &str = r#"{
    "return_dict": {
        "result": {
            "blocks": [
                {"tag": "header", "level": 0, "sentences": ["Introduction"]},
                {"tag": "para", "level": 1, "sentences": ["Opening words."]},
                {"tag": "header", "level": 1, "sentences": ["Background"]},
                {"tag": "table", "level": 2, "table_rows": [
                    {"type": "table_header", "cells": [{"cell_value": "k"}, {"cell_value": "v"}]},
                    {"type": "table_data_row", "cells": [{"cell_value": "a"}, {"cell_value": 1}]}
                ]},
                {"tag": "header", "level": 0, "sentences": ["Method"]}
            ]
        }
    }
}"#;

fn bin() -> Command {
    let mut cmd = Command::cargo_bin("layout-reader").expect("binary built");
    cmd.env_remove("RUST_LOG").env_remove("LAYOUT_READER_API_URL");
    cmd
}

/// Mock parser plus a local PDF to upload; held for the command's lifetime.
struct ParserFixture {
    _server: mockito::ServerGuard,
    mock: mockito::Mock,
    _dir: tempfile::TempDir,
    api_url: String,
    pdf: String,
}

fn parser_fixture() -> ParserFixture {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", PARSE_PATH)
        .match_query(Matcher::Any)
        .match_body(Matcher::Regex(r#"filename="paper.pdf""#.into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(BLOCKS_BODY)
        .expect(1)
        .create();

    let dir = tempfile::tempdir().unwrap();
    let pdf = dir.path().join("paper.pdf");
    std::fs::write(&pdf, b"%PDF-1.4 cli").unwrap();

    ParserFixture {
        api_url: format!("{}{}?renderFormat=all", server.url(), PARSE_PATH),
        pdf: pdf.to_str().unwrap().to_string(),
        _server: server,
        mock,
        _dir: dir,
    }
}

#[test]
fn no_arguments_prints_success() {
    bin().assert().success().stdout("success\n");
}

#[test]
fn path_argument_is_ignored() {
    bin()
        .arg("/tmp/any.pdf")
        .assert()
        .success()
        .stdout("success\n");
}

#[test]
fn greet_prints_greeting() {
    bin()
        .args(["--greet", "World"])
        .assert()
        .success()
        .stdout("Hello, World!\n");
}

#[test]
fn greet_empty_name() {
    bin()
        .args(["--greet", ""])
        .assert()
        .success()
        .stdout("Hello, !\n");
}

#[test]
fn parse_without_input_fails() {
    bin()
        .arg("--parse")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--parse needs a PDF path or URL"));
}

#[test]
fn parse_with_bad_api_url_fails() {
    bin()
        .args(["--parse", "--api-url", "ftp://x", "doc.pdf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid parser API URL"));
}

#[test]
fn json_requires_parse() {
    bin().arg("--json").assert().failure();
}

#[test]
fn parse_prints_section_summary() {
    let fx = parser_fixture();

    bin()
        .args(["--parse", "--api-url", fx.api_url.as_str(), fx.pdf.as_str()])
        .assert()
        .success()
        .stdout(
            "Blocks:    5\n\
             Sections:  3\n\
             Tables:    1\n\
             Introduction\n  \
             Background\n\
             Method\n",
        );
    fx.mock.assert();
}

#[test]
fn parse_json_round_trips_into_document() {
    let fx = parser_fixture();

    let output = bin()
        .args(["--parse", "--json", "--api-url", fx.api_url.as_str(), fx.pdf.as_str()])
        .output()
        .expect("run binary");
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    fx.mock.assert();

    let doc: Document = serde_json::from_slice(&output.stdout).expect("stdout is a Document");
    assert_eq!(doc.len(), 5);
    assert_eq!(doc.sections().len(), 3);
    assert_eq!(doc.tables()[0].to_text(), "k | v\na | 1");
}

#[test]
fn parse_reports_api_failure() {
    let mut server = mockito::Server::new();
    let _m = server
        .mock("POST", PARSE_PATH)
        .match_query(Matcher::Any)
        .with_status(503)
        .with_body("overloaded")
        .create();
    let dir = tempfile::tempdir().unwrap();
    let pdf = dir.path().join("paper.pdf");
    std::fs::write(&pdf, b"%PDF").unwrap();

    bin()
        .args(["--parse", "--api-url"])
        .arg(format!("{}{}", server.url(), PARSE_PATH))
        .arg(&pdf)
        .assert()
        .failure()
        .stderr(predicate::str::contains("HTTP 503"));
}
