mod common;

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;

fn cli(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("rental_core_cli").unwrap();
    cmd.env("RENTAL_CORE_CLI_SCRIPT", "1")
        .env("RENTAL_CORE_HOME", home)
        .env("RUST_LOG", "off");
    cmd
}

#[test]
fn help_lists_commands() {
    let home = common::temp_base();
    cli(&home)
        .write_stdin("help\nexit\n")
        .assert()
        .success()
        .stdout(contains("=== Tenants & payments ==="))
        .stdout(contains("=== Expenses & distribution ==="))
        .stdout(contains("mark-all-paid"))
        .stdout(contains("export <txt|json> [dir]"));
}

#[test]
fn version_prints_build_summary() {
    let home = common::temp_base();
    cli(&home)
        .write_stdin("version\n")
        .assert()
        .success()
        .stdout(contains("Rental Core v0.0.1"));
}

#[test]
fn fresh_home_lists_seed_tenants() {
    let home = common::temp_base();
    cli(&home)
        .write_stdin("tenants\nsummary\n")
        .assert()
        .success()
        .stdout(contains("Ging Bagro"))
        .stdout(contains("Total Expected Rent"))
        .stdout(contains("₱7,000.00"));
    assert!(home.join("data").join("propfit-last-reset-month.json").exists());
}

#[test]
fn remove_and_undo_round_trip() {
    let home = common::temp_base();
    cli(&home)
        .write_stdin("remove lyn\nundo\nundo\n")
        .assert()
        .success()
        .stdout(contains("Removed Lyn Villanueva"))
        .stdout(contains("Restored Lyn Villanueva."))
        .stdout(contains("Nothing to undo."));
}

#[test]
fn add_defaults_to_the_shared_unit() {
    let home = common::temp_base();
    cli(&home)
        .write_stdin("add \"Nico Reyes\"\n")
        .assert()
        .success()
        .stdout(contains("Added Nico Reyes"))
        .stdout(contains("Unit 3 (10 pax) - up/down, rent ₱833.33"));
}

#[test]
fn notes_persist_between_runs() {
    let home = common::temp_base();
    cli(&home).write_stdin("notes Fix the gate\n").assert().success();
    cli(&home)
        .write_stdin("notes\n")
        .assert()
        .success()
        .stdout(contains("Fix the gate"));
}

#[test]
fn unknown_command_gets_a_suggestion() {
    let home = common::temp_base();
    cli(&home)
        .write_stdin("summry\n")
        .assert()
        .success()
        .stdout(contains("Unknown command `summry`"))
        .stdout(contains("Suggestion: `summary`?"));
}

#[test]
fn bad_amount_is_reported_and_the_shell_continues() {
    let home = common::temp_base();
    cli(&home)
        .write_stdin("pay franz lots\nexpenses\n")
        .assert()
        .success()
        .stderr(contains("`lots` is not a valid amount"))
        .stdout(contains("Internet"));
}

#[test]
fn export_writes_report_into_directory() {
    let home = common::temp_base();
    let out = home.join("out");
    cli(&home)
        .write_stdin(format!("prepared-by Ruby\nexport txt {}\n", out.display()))
        .assert()
        .success()
        .stdout(contains("Report written to"));

    let file = std::fs::read_dir(&out)
        .unwrap()
        .filter_map(Result::ok)
        .find(|entry| entry.file_name().to_string_lossy().ends_with(".txt"))
        .expect("report file");
    let text = std::fs::read_to_string(file.path()).unwrap();
    assert!(text.contains("Prepared by: Ruby"));
}

#[test]
fn exit_stops_processing() {
    let home = common::temp_base();
    cli(&home)
        .write_stdin("exit\nversion\n")
        .assert()
        .success()
        .stdout(contains("Rental Core v").not());
}
