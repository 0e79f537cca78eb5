//! End-to-end tests of the spendlog binary
//!
//! Every invocation is a fresh session: the ledger is rebuilt from the
//! demo dataset (or empty with --no-demo) and discarded on exit.

use assert_cmd::Command;
use predicates::prelude::*;

fn spendlog() -> Command {
    Command::cargo_bin("spendlog").unwrap()
}

#[test]
fn add_valid_expense_prints_row_and_total() {
    spendlog()
        .args(["--no-demo", "add", "12.50", "Coffee", "--category", "food"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added:"))
        .stdout(predicate::str::contains("Coffee"))
        .stdout(predicate::str::contains("$12.50"))
        .stdout(predicate::str::contains("Ledger total: $12.50"));
}

#[test]
fn add_rejects_non_numeric_amount() {
    spendlog()
        .args(["--no-demo", "add", "abc", "Coffee", "--category", "food"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount"));
}

#[test]
fn add_rejects_non_positive_amount() {
    spendlog()
        .args(["--no-demo", "add", "0", "Coffee", "--category", "food"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount"));
}

#[test]
fn add_rejects_empty_description() {
    spendlog()
        .args(["--no-demo", "add", "12.50", "   ", "--category", "food"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Description cannot be empty"));
}

#[test]
fn add_rejects_unknown_category() {
    spendlog()
        .args(["--no-demo", "add", "12.50", "Coffee", "--category", "groceries"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown category: groceries"));
}

#[test]
fn add_rejects_malformed_date() {
    spendlog()
        .args([
            "--no-demo",
            "add",
            "12.50",
            "Coffee",
            "--category",
            "food",
            "--date",
            "01/08/2026",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"));
}

#[test]
fn list_empty_ledger() {
    spendlog()
        .args(["--no-demo", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses found"));
}

#[test]
fn list_shows_demo_dataset() {
    spendlog()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Grocery shopping"))
        .stdout(predicate::str::contains("Netflix subscription"))
        .stdout(predicate::str::contains("Total:"));
}

#[test]
fn list_category_filter_as_json() {
    let output = spendlog()
        .args(["list", "--category", "food", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let expenses: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let expenses = expenses.as_array().unwrap();
    assert_eq!(expenses.len(), 3); // 15 demo records cycling 5 categories
    assert!(expenses.iter().all(|e| e["category"] == "food"));
}

#[test]
fn recent_respects_limit() {
    let output = spendlog()
        .args(["recent", "--limit", "1"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    // Newest demo record is today's "Grocery shopping"; header, separator,
    // one row, separator, total.
    assert!(stdout.contains("Grocery shopping"));
    assert!(!stdout.contains("Gas station"));
}

#[test]
fn total_of_empty_ledger_is_zero() {
    spendlog()
        .args(["--no-demo", "total"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: $0.00"));
}

#[test]
fn total_for_category_without_matches_is_zero() {
    spendlog()
        .args(["--no-demo", "total", "food"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Food total: $0.00"));
}

#[test]
fn categories_lists_the_closed_set() {
    let output = spendlog().arg("categories").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    for name in ["Food", "Transport", "Utilities", "Entertainment", "Other"] {
        assert!(stdout.contains(name), "missing {}", name);
    }
    assert_eq!(stdout.lines().count(), 5);
}

#[test]
fn summary_of_empty_ledger() {
    spendlog()
        .args(["--no-demo", "summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No spending to report"));
}

#[test]
fn summary_of_demo_dataset_shows_percentages() {
    spendlog()
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Category"))
        .stdout(predicate::str::contains("%"))
        .stdout(predicate::str::contains("Total"));
}

#[test]
fn export_csv_header_only_for_empty_ledger() {
    let output = spendlog().args(["--no-demo", "export"]).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 1);
    assert_eq!(stdout.lines().next().unwrap(), "ID,Date,Description,Category,Amount");
}

#[test]
fn export_csv_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("expenses.csv");

    spendlog()
        .args(["export", "--output"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 15 expenses"));

    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(contents.lines().count(), 16); // header + 15 demo records
    assert!(contents.contains("Phone bill"));
}

#[test]
fn export_json_is_parseable() {
    let output = spendlog()
        .args(["export", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["expenses"].as_array().unwrap().len(), 15);
}

#[test]
fn export_rejects_unknown_format() {
    spendlog()
        .args(["export", "--format", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported format"));
}

#[test]
fn currency_symbol_from_environment() {
    spendlog()
        .env("SPENDLOG_CURRENCY", "€")
        .args(["--no-demo", "total"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: €0.00"));
}
