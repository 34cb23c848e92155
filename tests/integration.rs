//! Integration tests for the noughts binary.
//!
//! Spawns the binary with various flags and checks its stdout and exit status.

use std::process::{Command, Output, Stdio};

/// Runs the binary with `args` and returns its output.
fn run_noughts(args: &[&str]) -> Output {
    let exe = env!("CARGO_BIN_EXE_noughts");
    Command::new(exe)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .expect("failed to start noughts")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8(output.stdout.clone())
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn prints_states_sweeps_and_value() {
    let output = run_noughts(&["--quiet"]);
    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert_eq!(lines[0], "states 5478");
    assert_eq!(lines[1], "sweeps 9");
    assert!(lines[2].starts_with("value 0.99479"), "got {}", lines[2]);
}

#[test]
fn quiet_suppresses_progress() {
    let output = run_noughts(&["--quiet"]);
    assert!(output.stderr.is_empty());

    let output = run_noughts(&[]);
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("info sweep 1 delta"));
    assert!(stderr.contains("Generated 5478 states"));
}

#[test]
fn start_with_o() {
    let output = run_noughts(&["--quiet", "--start", "O"]);
    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert_eq!(lines[0], "states 5478");
    assert!(lines[2].starts_with("value 0.92486"), "got {}", lines[2]);
}

#[test]
fn position_lists_move_values() {
    let output = run_noughts(&["--quiet", "--position", "XX./OO./... X"]);
    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert!(lines.contains(&"position XX./OO./... X value 1".to_string()));
    let moves: Vec<&String> = lines.iter().filter(|l| l.starts_with("move ")).collect();
    assert_eq!(moves.len(), 5);
    assert_eq!(moves[0], "move 2 1");
}

#[test]
fn unreachable_position_fails() {
    let output = run_noughts(&["--quiet", "--position", "OOO/.../... X"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("not reachable"));
}

#[test]
fn json_report_to_stdout() {
    let output = run_noughts(&["--quiet", "--json", "-"]);
    assert!(output.status.success());
    let text = String::from_utf8(output.stdout).unwrap();
    let json_start = text.find('{').expect("no JSON object in output");
    let report: serde_json::Value = serde_json::from_str(&text[json_start..]).unwrap();
    assert_eq!(report["states"], 5478);
    assert_eq!(report["terminal_states"], 958);
    assert_eq!(report["sweeps"], 9);
    assert_eq!(report["start"], "X");
    assert_eq!(report["trace"].as_array().unwrap().len(), 9);
}

#[test]
fn selfplay_summary_line() {
    let output = run_noughts(&["--quiet", "--games", "50", "--seed", "3"]);
    assert!(output.status.success());
    let lines = stdout_lines(&output);
    let line = lines
        .iter()
        .find(|l| l.starts_with("selfplay "))
        .expect("missing selfplay line");
    assert!(line.starts_with("selfplay games 50 "), "got {}", line);
}

#[test]
fn sweep_cap_exits_with_error() {
    let output = run_noughts(&["--quiet", "--max-sweeps", "2"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("did not converge after 2 sweeps"), "got {}", stderr);
}

#[test]
fn invalid_arguments_exit_with_error() {
    for args in [
        &["--bogus"][..],
        &["--discount"][..],
        &["--discount", "abc"][..],
        &["--discount", "1.5"][..],
        &["--start", "Z"][..],
        &["--position", "nonsense"][..],
    ] {
        let output = run_noughts(args);
        assert!(!output.status.success(), "args {:?} should fail", args);
        assert!(output.stdout.is_empty(), "args {:?} wrote stdout", args);
    }
}

#[test]
fn help_prints_usage() {
    let output = run_noughts(&["--help"]);
    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Usage: noughts"));
}
