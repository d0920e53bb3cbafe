//! External command execution.
//!
//! All calls to `git` and `gh` go through [`ProcessRunner`] so that tests can
//! replace real processes with a scripted recorder.
use log::debug;
use std::io;
use std::path::Path;
use std::process::Command;

use crate::error::{Error, Result};

/// Captured result of one finished external command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    pub stdout: String,
    pub stderr: String,
    /// Exit code, `None` when the process was terminated by a signal
    pub code: Option<i32>,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Text reported to the user when the command failed: stderr, or stdout
    /// when nothing was written to stderr.
    pub fn diagnostic(&self) -> String {
        let stderr = self.stderr.trim();
        if stderr.is_empty() {
            self.stdout.trim().to_string()
        } else {
            stderr.to_string()
        }
    }
}

/// Runs one external command to completion.
pub trait ProcessRunner {
    /// Runs `program` with `args` using `cwd` as working directory.
    ///
    /// # Returns
    /// * `Result<ProcessOutput>` - Captured output, whatever the exit code
    ///
    /// # Errors
    /// * `Error::ProgramNotFound` if `program` cannot be found
    /// * `Error::IoError` if the process cannot be started or waited on
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> Result<ProcessOutput>;
}

/// Runs commands as real child processes, blocking until they exit.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> Result<ProcessOutput> {
        // a missing cwd also spawns with NotFound
        if !cwd.is_dir() {
            return Err(Error::IoError(io::Error::new(
                io::ErrorKind::NotFound,
                format!("working directory '{}' does not exist", cwd.display()),
            )));
        }

        let output = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .output()
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => {
                    Error::ProgramNotFound { program: program.to_string() }
                }
                _ => Error::IoError(e),
            })?;

        Ok(ProcessOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            code: output.status.code(),
        })
    }
}

/// Renders a command line for logs and error messages.
pub fn command_line(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .map(|part| {
            if part.is_empty() || part.contains(char::is_whitespace) {
                format!("\"{part}\"")
            } else {
                part.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Runs a command and turns a non-zero exit into [`Error::ExternalProcessFailure`].
///
/// # Errors
/// * `Error::ExternalProcessFailure` carrying the process diagnostic output
/// * Any error of [`ProcessRunner::run`]
pub fn run_checked(
    runner: &dyn ProcessRunner,
    program: &str,
    args: &[&str],
    cwd: &Path,
) -> Result<ProcessOutput> {
    let command = command_line(program, args);
    debug!("Running `{}` in {}", command, cwd.display());

    let output = runner.run(program, args, cwd)?;
    if !output.success() {
        return Err(Error::ExternalProcessFailure {
            command,
            code: output.code,
            diagnostic: output.diagnostic(),
        });
    }
    Ok(output)
}
