#![cfg(unix)]

use std::process::Command;

fn runpar() -> Command {
    Command::new(env!("CARGO_BIN_EXE_runpar"))
}

fn runpar_simple() -> Command {
    Command::new(env!("CARGO_BIN_EXE_runpar-simple"))
}

#[test]
fn bare_invocation_prints_usage_and_succeeds() {
    for mut cmd in [runpar(), runpar_simple()] {
        let output = cmd.output().unwrap();
        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("Usage:"));
        assert!(stdout.contains("FILE"));
    }
}

#[test]
fn invalid_memory_class_exits_non_zero() {
    let output = runpar()
        .args(["--call", "echo {query}", "-C", "TINYMEM", "a.txt"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("TINYMEM"));
}

#[test]
fn stacked_run_through_shell_submitter() {
    let output = runpar()
        .args(["--sbatch", "sh", "--call", "true {query}", "--stack", "2"])
        .args(["a.txt", "b.txt", "c.txt"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Submitted stacked Slurm job for 2 files: 'a.txt', 'b.txt'\n\
         Submitted Slurm job for: 'c.txt'\n"
    );
}

#[test]
fn submission_error_stops_after_prior_successes() {
    // The second file name turns its command line into a write to stderr.
    let output = runpar_simple()
        .args(["--sbatch", "sh", "--call", "echo {query} > /dev/null"])
        .args(["ok.txt", "oops >&2; echo failed", "never.txt"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Submitted Slurm job for: 'ok.txt'\n"
    );
    assert!(String::from_utf8_lossy(&output.stderr).contains("oops"));
}
