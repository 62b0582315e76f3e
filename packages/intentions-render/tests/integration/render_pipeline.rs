//! End-to-end tests: directory in, JSON report out

#[path = "../common/mod.rs"]
mod common;

use std::fs;
use std::path::Path;

use common::*;
use intentions_render::{
    build_report, collect_intentions, create_intentions_json, render_report, Classification,
    IntentionsError, RenderConfig,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn fixture_json() -> Value {
    let report = collect_intentions(Path::new(FIXTURES_DIR), &RenderConfig::default()).unwrap();
    serde_json::from_str(&render_report(&report).unwrap()).unwrap()
}

#[test]
fn test_domains_in_first_seen_order() {
    let report = collect_intentions(Path::new(FIXTURES_DIR), &RenderConfig::default()).unwrap();
    assert_eq!(
        report.domains().collect::<Vec<_>>(),
        vec!["payments", "accounts", "investments"]
    );
    assert_eq!(report.record_count(), 7);
}

#[test]
fn test_class_decorated_methods() {
    let value = fixture_json();
    let accounts = value["accounts"]["accounts"]["service"].as_array().unwrap();
    assert_eq!(accounts.len(), 3);

    assert_eq!(
        accounts[0],
        json!({
            "file_path": "tests/fixtures/test_file.py",
            "class_name": "TestAccountsService",
            "class_code_line": 10,
            "case_name": "Transfer money with insufficient balance",
            "function_name": "test_transfer_money_with_insufficient_balance",
            "function_code_line": 12,
            "intentions": [
                {"type": "when", "code_line": 13, "description": "Sender account has insufficient balance"},
                {"type": "case", "code_line": 16, "description": "Transfer money from one sender to receiver"},
                {"type": "expect", "code_line": 19, "description": "No transfers have been made"}
            ]
        })
    );
    assert_eq!(accounts[1]["function_code_line"], 22);
    assert_eq!(accounts[1]["class_code_line"], 10);
}

#[test]
fn test_free_decorated_function() {
    let value = fixture_json();
    let accounts = &value["accounts"]["accounts"]["service"];
    assert_eq!(
        accounts[2],
        json!({
            "file_path": "tests/fixtures/test_file.py",
            "class_name": null,
            "class_code_line": null,
            "case_name": "Transfer money to non existing receiver account",
            "function_name": "test_transfer_money_to_non_existing_receiver_account",
            "function_code_line": 34,
            "intentions": [
                {"type": "when", "code_line": 35, "description": "Receiver account does not exist"},
                {"type": "case", "code_line": 38, "description": "Transfer money from one sender to receiver"},
                {"type": "expect", "code_line": 41, "description": "Receiver account does not exist error is raised"}
            ]
        })
    );
}

#[test]
fn test_case_and_expect_only() {
    let value = fixture_json();
    let stocks = &value["investments"]["investments"]["service"][0];
    assert_eq!(stocks["class_name"], "TestInvestmentsService");
    assert_eq!(stocks["class_code_line"], 46);
    assert_eq!(stocks["function_code_line"], 48);
    let kinds: Vec<_> = stocks["intentions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["type"].as_str().unwrap())
        .collect();
    assert_eq!(kinds, vec!["case", "expect"]);
}

#[test]
fn test_undecorated_and_markerless_functions_are_excluded() {
    let report = collect_intentions(Path::new(FIXTURES_DIR), &RenderConfig::default()).unwrap();
    let names: Vec<_> = report
        .records()
        .map(|(_, record)| record.function_name().to_string())
        .collect();

    assert!(!names.contains(&"test_invest_into_non_existing_crypto".to_string()));
    assert!(!names.contains(&"test_sum".to_string()));
    assert!(!names.contains(&"test_bare_decorator".to_string()));
    assert_eq!(
        names
            .iter()
            .filter(|name| name.starts_with("test_invest"))
            .count(),
        3
    );
}

#[test]
fn test_nested_module_markers() {
    let report = collect_intentions(Path::new(FIXTURES_DIR), &RenderConfig::default()).unwrap();
    let cards = report
        .bucket(&Classification::new("payments", "cards", "api"))
        .unwrap();
    assert_eq!(cards.len(), 1);

    let charge = &cards[0];
    assert_eq!(charge.file_path(), "tests/fixtures/nested/test_payments.py");
    assert_eq!(charge.class_name(), Some("TestCardsApi"));
    assert_eq!(charge.class_line(), Some(12));
    let lines: Vec<_> = charge.markers().iter().map(|m| m.source_line).collect();
    assert_eq!(lines, vec![15, 22, 26]);
}

#[test]
fn test_async_test_functions_are_excluded() {
    let report = collect_intentions(Path::new(FIXTURES_DIR), &RenderConfig::default()).unwrap();
    assert!(report
        .records()
        .all(|(_, record)| record.function_name() != "test_refund_card"));
}

#[test]
fn test_marker_lines_are_increasing() {
    let report = collect_intentions(Path::new(FIXTURES_DIR), &RenderConfig::default()).unwrap();
    for (_, record) in report.records() {
        let lines: Vec<_> = record.markers().iter().map(|m| m.source_line).collect();
        let mut sorted = lines.clone();
        sorted.sort_unstable();
        assert_eq!(lines, sorted, "{}", record.function_name());
        assert!(!lines.is_empty());
    }
}

#[test]
fn test_output_is_deterministic() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.json");
    let second = dir.path().join("second.json");

    create_intentions_json(Path::new(FIXTURES_DIR), &first, &RenderConfig::default()).unwrap();
    create_intentions_json(Path::new(FIXTURES_DIR), &second, &RenderConfig::default()).unwrap();

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn test_explicit_file_order_is_kept() {
    let dir = tempfile::tempdir().unwrap();
    let zeta = write_module(dir.path(), "test_zeta.py", &fixture_free_test("zeta", "test_z"));
    let alpha = write_module(dir.path(), "test_alpha.py", &fixture_free_test("alpha", "test_a"));

    let report = build_report(&[zeta, alpha], &RenderConfig::default()).unwrap();
    assert_eq!(report.domains().collect::<Vec<_>>(), vec!["zeta", "alpha"]);
}

#[test]
fn test_syntax_error_aborts_without_output() {
    let dir = tempfile::tempdir().unwrap();
    write_module(dir.path(), "a/test_good.py", &fixture_free_test("good", "test_good"));
    write_module(dir.path(), "b/test_broken.py", "def test_broken(:\n    pass\n");
    let output = dir.path().join("out").join("intentions.json");

    let err = create_intentions_json(dir.path(), &output, &RenderConfig::default()).unwrap_err();
    match &err {
        IntentionsError::Parse { file, line, .. } => {
            assert!(file.ends_with("b/test_broken.py"));
            assert_eq!(*line, 1);
        }
        other => panic!("expected parse error, got {other:?}"),
    }
    assert!(!output.exists());
}

#[test]
fn test_malformed_describe_aborts_and_keeps_previous_output() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("src");
    write_module(&source, "test_ok.py", &fixture_free_test("ok", "test_ok"));
    let output = dir.path().join("intentions.json");
    create_intentions_json(&source, &output, &RenderConfig::default()).unwrap();
    let before = fs::read_to_string(&output).unwrap();

    write_module(
        &source,
        "test_wrong.py",
        "@describe(layer='l', domain='d', component='c')\ndef test_wrong():\n    with case('x'):\n        pass\n",
    );
    let err = create_intentions_json(&source, &output, &RenderConfig::default()).unwrap_err();

    assert!(matches!(err, IntentionsError::ClassificationShape { line: 1, .. }));
    assert_eq!(fs::read_to_string(&output).unwrap(), before);
}

#[test]
fn test_yaml_config_drives_discovery_and_detection() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("suite");
    write_module(
        &source,
        "check_billing.py",
        "@describe(domain='billing', component='invoices', layer='domain')\ndef check_totals():\n    with expect('Totals add up'):\n        pass\n",
    );
    write_module(&source, "test_ignored.py", &fixture_free_test("ignored", "test_ignored"));
    let config_path = write_module(
        dir.path(),
        "intentions.yaml",
        "version: 1\nrender:\n  test_prefix: check_\n  file_prefix: check_\n",
    );

    let config = RenderConfig::from_yaml(&config_path).unwrap();
    let report = collect_intentions(&source, &config).unwrap();

    assert_eq!(report.domains().collect::<Vec<_>>(), vec!["billing"]);
    let record = &report
        .bucket(&Classification::new("billing", "invoices", "domain"))
        .unwrap()[0];
    assert_eq!(record.case_name(), "Totals");
}
