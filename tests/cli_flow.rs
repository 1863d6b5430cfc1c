//! End-to-end checks for the terminal front-end

use assert_cmd::Command;
use predicates::prelude::*;

fn unbeatable() -> Command {
    Command::cargo_bin("unbeatable").expect("binary should build")
}

#[test]
fn analyze_reports_the_winning_cell() {
    // O to move holds a win in the middle column at cell 7
    unbeatable()
        .args(["analyze", "XOXXO...O_O"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("cell 7")
                .and(predicate::str::contains("10 (win)"))
                .and(predicate::str::contains("-10 (loss)")),
        );
}

#[test]
fn analyze_rejects_unreachable_positions() {
    unbeatable()
        .args(["analyze", "XXX...OOO"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not reachable"));
}

#[test]
fn analyze_rejects_malformed_text() {
    unbeatable()
        .args(["analyze", "XO"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("parse position"));
}

#[test]
fn analyze_exports_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("analysis.json");

    unbeatable()
        .args(["analyze", "XOXXO...O_O", "--export"])
        .arg(&path)
        .assert()
        .success();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json["best"]["position"], 7);
    assert_eq!(json["best"]["score"], 10);
    assert_eq!(json["maximizer"], "O");
}

#[test]
fn play_session_runs_from_scripted_input() {
    unbeatable()
        .args(["play", "--mark", "x"])
        .write_stdin("0\n1\n3\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Computer plays 4.")
                .and(predicate::str::contains("Computer wins!")),
        );
}

#[test]
fn play_reprompts_on_invalid_input() {
    unbeatable()
        .args(["play"])
        .write_stdin("cell\n42\n0\n1\n3\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Enter a cell index between 0 and 8.")
                .and(predicate::str::contains("not available")),
        );
}

#[test]
fn selfplay_against_random_never_loses() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.json");

    unbeatable()
        .args([
            "selfplay",
            "--opponent",
            "random",
            "--games",
            "10",
            "--seed",
            "42",
            "--no-progress",
            "--export",
        ])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Selfplay results"));

    let report: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(report["games"], 10);
    assert_eq!(report["losses"], 0);
}

#[test]
fn selfplay_optimal_is_all_draws() {
    unbeatable()
        .args([
            "selfplay",
            "--opponent",
            "optimal",
            "--games",
            "2",
            "--seed",
            "7",
            "--no-progress",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Draws:").and(predicate::str::contains("2")));
}

#[test]
fn selfplay_rejects_unknown_opponents() {
    unbeatable()
        .args(["selfplay", "--opponent", "psychic", "--no-progress"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid opponent"));
}
