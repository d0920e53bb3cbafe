//! Error handling for the initpyproj application.
//! Defines custom error types and results used throughout the application.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Custom error types for initpyproj operations.
///
/// Every failure in the scaffolding workflow propagates to the caller as one
/// of these variants; nothing is retried and nothing is rolled back.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// A file or directory that scaffolding wants to create is already present.
    #[error("'{}' already exists.", .path.display())]
    AlreadyExists { path: PathBuf },

    /// An external command exited with a non-zero status.
    #[error("External command `{command}` failed{}: {diagnostic}", exit_code_suffix(.code))]
    ExternalProcessFailure {
        /// The command line that was executed
        command: String,
        /// Exit code, `None` when the process was terminated by a signal
        code: Option<i32>,
        /// Diagnostic output captured from the process
        diagnostic: String,
    },

    /// An external program could not be started at all.
    #[error("Program '{program}' was not found. Is it installed and on PATH?")]
    ProgramNotFound { program: String },

    /// Represents invalid user-supplied values
    #[error("Invalid argument: {0}.")]
    InvalidArgument(String),

    /// Represents errors that occur during configuration parsing or processing
    #[error("Configuration error: {0}.")]
    ConfigError(String),
}

fn exit_code_suffix(code: &Option<i32>) -> String {
    code.map(|c| format!(" with exit code {c}")).unwrap_or_default()
}

/// Convenience type alias for Results with Error as the error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Converts an io error raised while creating `path` into [`Error::AlreadyExists`]
    /// when that is what it means, keeping other io errors as they are.
    pub fn from_create(err: io::Error, path: impl Into<PathBuf>) -> Self {
        if err.kind() == io::ErrorKind::AlreadyExists {
            Error::AlreadyExists { path: path.into() }
        } else {
            Error::IoError(err)
        }
    }
}

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
