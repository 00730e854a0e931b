#![cfg(unix)]

// `sh` with no arguments executes whatever arrives on stdin, which makes it a
// convenient stand-in for sbatch: the script body decides what the fake
// submitter prints and where.

use std::ffi::OsStr;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use runpar::{Error, Sbatch, Submit};
use tempfile::TempDir;

#[test]
fn script_arrives_on_stdin() {
    let script = "#!/usr/bin/env bash\n#SBATCH -N 1\necho 'Submitted batch job 77'";
    let stdout = Sbatch::new("sh").submit(OsStr::new(script)).unwrap();
    assert_eq!(stdout, "Submitted batch job 77\n");
}

#[test]
fn stacked_lines_all_reach_the_submitter() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("seen.txt");
    let script = format!(
        "#!/usr/bin/env bash\n#SBATCH -J sbatch\necho a.txt >> '{0}'\necho b.txt >> '{0}'",
        out.display()
    );

    Sbatch::new("sh").submit(OsStr::new(&script)).unwrap();
    assert_eq!(std::fs::read_to_string(&out).unwrap(), "a.txt\nb.txt\n");
}

#[test]
fn stderr_output_is_a_failed_submission() {
    let script = "echo 'sbatch: error: Batch job submission failed' >&2";
    match Sbatch::new("sh").submit(OsStr::new(script)) {
        Err(Error::Submission { stderr }) => {
            assert!(stderr.contains("Batch job submission failed"))
        }
        other => panic!("expected submission error, got {other:?}"),
    }
}

#[test]
fn stderr_wins_over_zero_exit_and_stdout() {
    let err = Sbatch::new("sh")
        .submit(OsStr::new("echo 'Submitted batch job 1'\necho warning >&2\nexit 0"))
        .unwrap_err();
    assert!(matches!(err, Error::Submission { ref stderr } if stderr == "warning\n"));
}

#[test]
fn nonzero_exit_without_stderr_is_success() {
    assert_eq!(Sbatch::new("sh").submit(OsStr::new("exit 3")).unwrap(), "");
}

#[test]
fn submitter_that_ignores_stdin_still_succeeds() {
    assert_eq!(Sbatch::new("true").submit(OsStr::new("echo ignored")).unwrap(), "");
}

#[test]
fn missing_program_is_a_spawn_error() {
    let dir = TempDir::new().unwrap();
    let err = Sbatch::new(dir.path().join("no-such-sbatch"))
        .submit(OsStr::new("echo x"))
        .unwrap_err();
    assert!(matches!(err, Error::Spawn { .. }));
}

#[test]
fn large_stderr_burst_before_reading_stdin_does_not_hang() {
    // The child fills its stderr pipe before it has read the bulk of the
    // script, so both pipes must be serviced at once.
    let mut script = String::from("head -c 200000 /dev/zero >&2\n");
    while script.len() < 256 * 1024 {
        script.push_str("# padding padding padding padding padding padding padding\n");
    }

    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let _ = tx.send(Sbatch::new("sh").submit(OsStr::new(&script)));
    });
    let result = rx
        .recv_timeout(Duration::from_secs(10))
        .expect("submission did not finish");

    match result {
        Err(Error::Submission { stderr }) => assert_eq!(stderr.len(), 200_000),
        other => panic!("expected submission error, got {other:?}"),
    }
}

#[test]
fn non_utf8_file_names_reach_stdin_verbatim() {
    use std::ffi::OsString;
    use std::os::unix::ffi::OsStringExt;

    let dir = TempDir::new().unwrap();
    let mut script = format!("touch '{}/", dir.path().display()).into_bytes();
    script.extend_from_slice(b"reads_\xff.fa'");
    let script = OsString::from_vec(script);

    Sbatch::new("sh").submit(&script).unwrap();
    let created = OsString::from_vec(b"reads_\xff.fa".to_vec());
    assert!(dir.path().join(created).exists());
}
