use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn budget(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("budget").unwrap();
    cmd.env("BUDGET_CLI_DIR", config_dir.path())
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn demo_prints_ledgers_and_chart() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("**********Groceries***********"))
        .stdout(predicate::str::contains("Total: 0.99"))
        .stdout(predicate::str::contains("Percentage spent by category"))
        .stdout(predicate::str::contains("    -------"))
        .stdout(predicate::str::contains("withdraw $200.99 from Groceries"));
}

#[test]
fn demo_without_chart() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .args(["demo", "--no-chart", "--summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Percentage spent").not())
        .stdout(predicate::str::contains("% of spend"));
}

#[test]
fn run_scenario_file() {
    let dir = TempDir::new().unwrap();
    let scenario = dir.path().join("scenario.json");
    fs::write(
        &scenario,
        r#"{
            "categories": ["Food", "Clothing", "Auto"],
            "operations": [
                { "op": "deposit", "category": "Food", "amount": 900, "description": "deposit" },
                { "op": "deposit", "category": "Clothing", "amount": 900, "description": "deposit" },
                { "op": "deposit", "category": "Auto", "amount": 900, "description": "deposit" },
                { "op": "withdraw", "category": "Food", "amount": 105.55 },
                { "op": "withdraw", "category": "Clothing", "amount": 33.40 },
                { "op": "withdraw", "category": "Auto", "amount": "10.99" }
            ]
        }"#,
    )
    .unwrap();

    budget(&dir)
        .arg("run")
        .arg(&scenario)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: 794.45"))
        .stdout(predicate::str::contains(" 70| o        "))
        .stdout(predicate::str::contains("  0| o  o  o  "))
        .stdout(predicate::str::contains("Declined").not());
}

#[test]
fn strict_run_rejects_negative_deposit() {
    let dir = TempDir::new().unwrap();
    let scenario = dir.path().join("negative.json");
    fs::write(
        &scenario,
        r#"{"categories": ["A"], "operations": [{"op": "deposit", "category": "A", "amount": -1}]}"#,
    )
    .unwrap();

    budget(&dir)
        .arg("run")
        .arg(&scenario)
        .arg("--strict")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));
}

#[test]
fn run_missing_file_fails() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .args(["run", "does-not-exist.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read scenario file"));
}

#[test]
fn init_then_config() {
    let dir = TempDir::new().unwrap();

    budget(&dir).arg("init").assert().success();
    assert!(dir.path().join("config.json").exists());

    budget(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized:      yes"))
        .stdout(predicate::str::contains("Strict amounts: false"));
}

#[test]
fn settings_can_hide_ledgers() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.json"), r#"{"show_ledgers": false}"#).unwrap();

    budget(&dir)
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("Groceries***").not())
        .stdout(predicate::str::contains("Percentage spent by category"));
}
