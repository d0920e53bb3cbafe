use initpyproj::{
    error::Error,
    process::{run_checked, ProcessRunner, SystemRunner},
};
use std::path::Path;
use tempfile::TempDir;

#[test]
fn test_missing_program() {
    let temp_dir = TempDir::new().unwrap();
    let result =
        SystemRunner::new().run("initpyproj-no-such-program", &["--version"], temp_dir.path());

    match result {
        Err(Error::ProgramNotFound { program }) => {
            assert_eq!(program, "initpyproj-no-such-program")
        }
        other => panic!("Expected ProgramNotFound, got {other:?}"),
    }
}

#[cfg(unix)]
#[test]
fn test_missing_working_directory() {
    let result = SystemRunner::new().run("sh", &["-c", "true"], Path::new("/definitely/not/here"));

    match result {
        Err(Error::IoError(e)) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
        other => panic!("Expected IoError, got {other:?}"),
    }
}

#[cfg(unix)]
#[test]
fn test_captures_output_and_exit_code() {
    let temp_dir = TempDir::new().unwrap();
    let output = SystemRunner::new()
        .run("sh", &["-c", "echo out; echo err >&2; exit 3"], temp_dir.path())
        .unwrap();

    assert_eq!(output.stdout, "out\n");
    assert_eq!(output.stderr, "err\n");
    assert_eq!(output.code, Some(3));
    assert!(!output.success());
}

#[cfg(unix)]
#[test]
fn test_run_checked_with_real_process() {
    let temp_dir = TempDir::new().unwrap();
    let runner = SystemRunner::new();

    let output = run_checked(&runner, "sh", &["-c", "pwd"], temp_dir.path()).unwrap();
    assert_eq!(
        Path::new(output.stdout.trim()).canonicalize().unwrap(),
        temp_dir.path().canonicalize().unwrap()
    );

    match run_checked(&runner, "sh", &["-c", "echo denied >&2; exit 2"], temp_dir.path()) {
        Err(Error::ExternalProcessFailure { code, diagnostic, .. }) => {
            assert_eq!(code, Some(2));
            assert_eq!(diagnostic, "denied");
        }
        other => panic!("Expected ExternalProcessFailure, got {other:?}"),
    }
}
