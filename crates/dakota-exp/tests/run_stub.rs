#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use dakota_core::DakotaError;
use dakota_exp::Experiment;
use tempfile::tempdir;

// Forking while another test still holds a stub open for writing makes exec
// fail with ETXTBSY, so stub creation and launch are serialized.
static SERIAL: Mutex<()> = Mutex::new(());

fn stub(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("dakota-stub");
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("write stub");
    let mut perms = fs::metadata(&path).expect("stub metadata").permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).expect("chmod stub");
    path
}

fn experiment_in(dir: &Path, executable: PathBuf) -> Experiment {
    let mut experiment = Experiment::default().with_executable(executable);
    experiment.input_file = dir.join("dakota.in");
    experiment.output_file = dir.join("dakota.out");
    experiment
}

#[test]
fn successful_run_returns_ok() {
    let _guard = SERIAL.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let temp = tempdir().expect("tmp dir");
    let exe = stub(
        temp.path(),
        r#"[ "$1" = "-i" ] && [ "$3" = "-o" ] || exit 9
test -f "$2" || exit 8
cp "$2" "$4"
echo "run complete"
exit 0"#,
    );
    let mut experiment = experiment_in(temp.path(), exe);
    experiment.write_input_file(None).expect("write input");
    experiment.run().expect("run succeeds");
    let output = fs::read_to_string(temp.path().join("dakota.out")).expect("output file");
    assert_eq!(output, experiment.input_text());
}

#[test]
fn failing_run_carries_combined_output() {
    let _guard = SERIAL.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let temp = tempdir().expect("tmp dir");
    let exe = stub(
        temp.path(),
        "echo 'to stdout'\necho 'to stderr' >&2\nexit 1",
    );
    let mut experiment = experiment_in(temp.path(), exe);
    experiment.write_input_file(None).expect("write input");
    let err = experiment.run().unwrap_err();
    assert!(matches!(err, DakotaError::Process(_)), "{err}");
    assert_eq!(err.exit_code(), Some(1));
    let output = err.output().expect("captured output");
    assert_eq!(output, "to stdout\nto stderr\n");
}

#[test]
fn run_does_not_write_the_input_file() {
    let _guard = SERIAL.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let temp = tempdir().expect("tmp dir");
    let exe = stub(temp.path(), r#"test -f "$2" || { echo "missing $2"; exit 2; }"#);
    let experiment = experiment_in(temp.path(), exe);
    let err = experiment.run().unwrap_err();
    assert_eq!(err.exit_code(), Some(2));
    assert!(err.output().unwrap_or_default().starts_with("missing "));
    assert!(!temp.path().join("dakota.in").exists());
}

#[test]
fn missing_binary_is_an_io_error() {
    let _guard = SERIAL.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let temp = tempdir().expect("tmp dir");
    let experiment = experiment_in(temp.path(), temp.path().join("no-such-dakota"));
    let err = experiment.run().unwrap_err();
    assert!(matches!(err, DakotaError::Io(ref info) if info.code == "dakota_exp.spawn"));
}
