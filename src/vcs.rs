//! Local git repository operations.
//!
//! Each method issues exactly one git command in the project directory.
//! Callers run them in order: `init`, `stage_all`, `commit`, then `push`
//! once a remote exists.
use log::info;
use std::path::PathBuf;

use crate::constants::GIT_PROGRAM;
use crate::error::Result;
use crate::process::{run_checked, ProcessRunner};

pub struct GitDriver<'a> {
    runner: &'a dyn ProcessRunner,
    program: String,
    repo_dir: PathBuf,
}

impl<'a> GitDriver<'a> {
    pub fn new<P: Into<PathBuf>>(runner: &'a dyn ProcessRunner, repo_dir: P) -> Self {
        Self::with_program(runner, GIT_PROGRAM, repo_dir)
    }

    pub fn with_program<S: Into<String>, P: Into<PathBuf>>(
        runner: &'a dyn ProcessRunner,
        program: S,
        repo_dir: P,
    ) -> Self {
        Self { runner, program: program.into(), repo_dir: repo_dir.into() }
    }

    /// `git init`
    pub fn init(&self) -> Result<()> {
        info!("Initializing git repository in {}", self.repo_dir.display());
        self.git(&["init"])
    }

    /// `git add -A`
    pub fn stage_all(&self) -> Result<()> {
        self.git(&["add", "-A"])
    }

    /// `git commit -m <message>`
    pub fn commit(&self, message: &str) -> Result<()> {
        info!("Committing: {}", message);
        self.git(&["commit", "-m", message])
    }

    /// `git push -u <remote> HEAD`
    pub fn push(&self, remote: &str) -> Result<()> {
        info!("Pushing to {}", remote);
        self.git(&["push", "-u", remote, "HEAD"])
    }

    fn git(&self, args: &[&str]) -> Result<()> {
        run_checked(self.runner, &self.program, args, &self.repo_dir).map(|_| ())
    }
}
