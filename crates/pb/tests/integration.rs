//! End-to-end CLI integration tests for the `pb` binary.
//!
//! Each test runs in its own temporary directory, so no `board.yaml` from
//! the surrounding tree is picked up, and exercises the `pb` binary as a
//! subprocess via `assert_cmd`.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Build a `Command` targeting the cargo-built `pb` binary, isolated in `tmp`.
fn pb(tmp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pb").unwrap();
    cmd.current_dir(tmp.path())
        .env_remove("PBOARD_CONFIG")
        .env("NO_COLOR", "1");
    cmd
}

/// Runs `script` through `pb run --json` and returns the board JSON.
fn run_json(tmp: &TempDir, script: &str) -> serde_json::Value {
    let output = pb(tmp)
        .args(["run", "--json"])
        .write_stdin(script)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "run failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

fn titles(column: &serde_json::Value) -> Vec<String> {
    column
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["title"].as_str().unwrap().to_string())
        .collect()
}

// ---------------------------------------------------------------------------
// Sessions
// ---------------------------------------------------------------------------

#[test]
fn run_adds_and_drags_projects() {
    let tmp = TempDir::new().unwrap();
    let board = run_json(
        &tmp,
        "add Launch | Ship the board | 3\n\
         add Report | Collect numbers | 1\n\
         drag #1 finished\n",
    );

    assert_eq!(titles(&board["active"]), vec!["Report"]);
    assert_eq!(titles(&board["finished"]), vec!["Launch"]);
    let launch = &board["finished"][0];
    assert_eq!(launch["people"], 3);
    assert_eq!(launch["status"], "finished");
    assert!(launch["id"].as_str().unwrap().starts_with("prj-"));
}

#[test]
fn run_prints_board_text() {
    let tmp = TempDir::new().unwrap();
    pb(&tmp)
        .arg("run")
        .write_stdin("# a comment\n\nadd Launch | Ship the board | 1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Added prj-"))
        .stdout(predicate::str::contains("ACTIVE PROJECTS"))
        .stdout(predicate::str::contains("FINISHED PROJECTS"))
        .stdout(predicate::str::contains("1 person assigned."));
}

#[test]
fn invalid_input_alerts_and_continues() {
    let tmp = TempDir::new().unwrap();
    pb(&tmp)
        .args(["run", "--json"])
        .write_stdin("add Launch | tiny | 3\nadd Report | Collect numbers | 9\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Invalid input please try again!"))
        .stdout(predicate::str::contains("\"active\": []"));
}

#[test]
fn moving_to_same_status_is_reported_as_unchanged() {
    let tmp = TempDir::new().unwrap();
    pb(&tmp)
        .arg("run")
        .write_stdin("add Launch | Ship the board | 2\nmove #1 active\nmove prj-nope finished\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("is already active"))
        .stdout(predicate::str::contains("No project prj-nope"));
}

#[test]
fn list_and_show_print_mid_session() {
    let tmp = TempDir::new().unwrap();
    pb(&tmp)
        .arg("run")
        .write_stdin(
            "add Launch | Ship the board | 2\nadd Report | Collect numbers | 1\n\
             move #2 finished\nlist finished\nshow\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("finished - Report (1 person)"));
}

#[test]
fn script_errors_fail_with_line_number() {
    let tmp = TempDir::new().unwrap();
    pb(&tmp)
        .arg("run")
        .write_stdin("add Launch | Ship the board | 2\nfly #1 away\n")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("line 2: unknown command 'fly'"));

    pb(&tmp)
        .arg("run")
        .write_stdin("drag #4 finished\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 1: no project #4"));
}

#[test]
fn script_errors_as_json() {
    let tmp = TempDir::new().unwrap();
    let output = pb(&tmp)
        .args(["run", "--json"])
        .write_stdin("move #1 done\n")
        .output()
        .unwrap();
    assert!(!output.status.success());
    let err: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert!(err["error"].as_str().unwrap().contains("line 1"));
}

#[test]
fn run_reads_script_file() {
    let tmp = TempDir::new().unwrap();
    let script = tmp.path().join("session.txt");
    std::fs::write(&script, "add Launch | Ship the board | 2\n").unwrap();

    let output = pb(&tmp)
        .args(["run", "--json", "--script"])
        .arg(&script)
        .output()
        .unwrap();
    assert!(output.status.success());
    let board: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(titles(&board["active"]), vec!["Launch"]);
}

#[test]
fn demo_runs() {
    let tmp = TempDir::new().unwrap();
    let output = pb(&tmp).args(["demo", "--json"]).output().unwrap();
    assert!(output.status.success());
    let board: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        titles(&board["active"]),
        vec!["Quarterly report", "Onboarding guide"]
    );
    assert_eq!(titles(&board["finished"]), vec!["Website relaunch"]);
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

#[test]
fn config_init_then_show() {
    let tmp = TempDir::new().unwrap();
    pb(&tmp)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("board.yaml"));
    assert!(tmp.path().join("board.yaml").is_file());

    pb(&tmp)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    let output = pb(&tmp).args(["config", "show", "--json"]).output().unwrap();
    assert!(output.status.success());
    let shown: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(shown["exists"], true);
    assert_eq!(shown["config"]["ids"]["prefix"], "prj");
    assert_eq!(shown["config"]["validation"]["people-max"], 5);
}

#[test]
fn config_file_changes_ids_and_rules() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(
        tmp.path().join("board.yaml"),
        "ids:\n  prefix: web\nvalidation:\n  people-max: 10\n",
    )
    .unwrap();

    let board = run_json(&tmp, "add Big | Large team project | 8\n");
    let id = board["active"][0]["id"].as_str().unwrap();
    assert!(id.starts_with("web-"), "unexpected id {}", id);
}

#[test]
fn explicit_config_flag_and_invalid_values() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("custom.yaml");
    std::fs::write(&path, "validation:\n  people-min: 4\n  people-max: 2\n").unwrap();

    pb(&tmp)
        .args(["run", "--config"])
        .arg(&path)
        .write_stdin("show\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("people-min"));
}

// ---------------------------------------------------------------------------
// Misc
// ---------------------------------------------------------------------------

#[test]
fn version_and_completion() {
    let tmp = TempDir::new().unwrap();
    pb(&tmp)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("pb version"));
    pb(&tmp)
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pb"));
}
