//! Remote repository creation through the GitHub CLI.
use log::{debug, info, warn};
use regex::Regex;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use crate::constants::{DEFAULT_REMOTE_NAME, HOST_PROGRAM, REPOSITORY_URL_PATTERN};
use crate::error::Result;
use crate::process::{run_checked, ProcessRunner};

static REPOSITORY_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(REPOSITORY_URL_PATTERN).expect("repository url pattern is valid")
});

/// Protocol the host CLI uses for git operations (`gh config get git_protocol`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transport {
    Https,
    Ssh,
    Other(String),
}

impl Transport {
    /// Parses the configured protocol. An unset value means the CLI default, https.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "https" => Transport::Https,
            "ssh" => Transport::Ssh,
            other => Transport::Other(other.to_string()),
        }
    }

    /// Whether `gh repo create` prints an https clone URL for this transport.
    pub fn reports_url(&self) -> bool {
        matches!(self, Transport::Https)
    }
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transport::Https => write!(f, "https"),
            Transport::Ssh => write!(f, "ssh"),
            Transport::Other(value) => write!(f, "{value}"),
        }
    }
}

/// Visibility of a new remote repository.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Public,
    Private,
}

impl Visibility {
    fn flag(self) -> &'static str {
        match self {
            Visibility::Public => "--public",
            Visibility::Private => "--private",
        }
    }
}

/// Parameters of `gh repo create`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteRequest {
    pub name: String,
    pub description: Option<String>,
    pub visibility: Visibility,
    /// Local repository the new remote is attached to
    pub source_dir: PathBuf,
    /// Name of the git remote that is added to the local repository
    pub remote_name: String,
}

impl RemoteRequest {
    pub fn new<S: Into<String>, P: Into<PathBuf>>(name: S, source_dir: P) -> Self {
        Self {
            name: name.into(),
            description: None,
            visibility: Visibility::default(),
            source_dir: source_dir.into(),
            remote_name: DEFAULT_REMOTE_NAME.to_string(),
        }
    }

    fn args(&self) -> Vec<&str> {
        let mut args = vec!["repo", "create", self.name.as_str(), self.visibility.flag()];
        if let Some(description) = self.description.as_deref().filter(|d| !d.is_empty()) {
            args.extend(["--description", description]);
        }
        args.extend(["--source", ".", "--remote", self.remote_name.as_str()]);
        args
    }
}

/// Drives the GitHub CLI.
pub struct GitHubDriver<'a> {
    runner: &'a dyn ProcessRunner,
    program: String,
}

impl<'a> GitHubDriver<'a> {
    pub fn new(runner: &'a dyn ProcessRunner) -> Self {
        Self::with_program(runner, HOST_PROGRAM)
    }

    pub fn with_program<S: Into<String>>(runner: &'a dyn ProcessRunner, program: S) -> Self {
        Self { runner, program: program.into() }
    }

    /// Reads the configured git protocol.
    pub fn transport(&self, cwd: &Path) -> Result<Transport> {
        let output = run_checked(
            self.runner,
            &self.program,
            &["config", "get", "git_protocol"],
            cwd,
        )?;
        let transport = Transport::parse(&output.stdout);
        debug!("Configured git protocol: {}", transport);
        Ok(transport)
    }

    /// Creates the remote repository and wires it to the local one.
    ///
    /// # Returns
    /// * `Result<Option<String>>` - The repository URL when the https transport
    ///   is configured and the URL could be found in the command output
    ///
    /// # Errors
    /// * `Error::ExternalProcessFailure` if either `gh` command fails
    pub fn create_repository(&self, request: &RemoteRequest) -> Result<Option<String>> {
        let transport = self.transport(&request.source_dir)?;

        info!("Creating remote repository '{}'", request.name);
        let output = run_checked(self.runner, &self.program, &request.args(), &request.source_dir)?;

        if !transport.reports_url() {
            debug!("Transport '{}' does not report a repository url", transport);
            return Ok(None);
        }

        let url = extract_repository_url(&output.stdout)
            .or_else(|| extract_repository_url(&output.stderr));
        if url.is_none() {
            warn!("Could not find the repository url in the output of `{} repo create`", self.program);
        }
        Ok(url)
    }
}

/// Finds the first `https://github.com/....git` URL in `output`.
pub fn extract_repository_url(output: &str) -> Option<String> {
    REPOSITORY_URL.find(output).map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_parse() {
        assert_eq!(Transport::parse("https\n"), Transport::Https);
        assert_eq!(Transport::parse(""), Transport::Https);
        assert_eq!(Transport::parse("SSH"), Transport::Ssh);
        assert_eq!(Transport::parse("git"), Transport::Other("git".to_string()));
        assert!(!Transport::Ssh.reports_url());
    }

    #[test]
    fn test_request_args() {
        let mut request = RemoteRequest::new("demo", "/tmp/demo");
        assert_eq!(
            request.args(),
            ["repo", "create", "demo", "--public", "--source", ".", "--remote", "origin"]
        );

        request.visibility = Visibility::Private;
        request.description = Some("a demo".to_string());
        assert_eq!(
            request.args(),
            [
                "repo", "create", "demo", "--private", "--description", "a demo", "--source", ".",
                "--remote", "origin"
            ]
        );
    }
}
