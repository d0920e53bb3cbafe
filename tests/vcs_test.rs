mod common;

use common::ScriptedRunner;
use initpyproj::{error::Error, vcs::GitDriver};
use std::path::PathBuf;

#[test]
fn test_commands_run_in_repo_dir() {
    let runner = ScriptedRunner::new();
    let git = GitDriver::new(&runner, "/work/demo");

    git.init().unwrap();
    git.stage_all().unwrap();
    git.commit("initial commit by initpyproj").unwrap();
    git.push("origin").unwrap();

    let calls = runner.calls();
    assert_eq!(runner.verbs(), ["git init", "git add", "git commit", "git push"]);
    assert!(calls.iter().all(|c| c.cwd == PathBuf::from("/work/demo")));
    assert_eq!(calls[1].args, ["add", "-A"]);
    assert_eq!(calls[2].args, ["commit", "-m", "initial commit by initpyproj"]);
    assert_eq!(calls[3].args, ["push", "-u", "origin", "HEAD"]);
}

#[test]
fn test_failure_carries_diagnostic() {
    let runner = ScriptedRunner::new().then_fail(128, "fatal: permission denied\n");
    let git = GitDriver::with_program(&runner, "/usr/bin/git", "/work/demo");

    match git.init() {
        Err(Error::ExternalProcessFailure { command, code, diagnostic }) => {
            assert_eq!(command, "/usr/bin/git init");
            assert_eq!(code, Some(128));
            assert_eq!(diagnostic, "fatal: permission denied");
        }
        other => panic!("Expected ExternalProcessFailure, got {other:?}"),
    }
}

#[test]
fn test_commit_is_not_guarded() {
    let runner = ScriptedRunner::new();
    GitDriver::new(&runner, "/work/demo").commit("msg").unwrap();
    assert_eq!(runner.verbs(), ["git commit"]);
}
