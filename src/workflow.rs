//! Orchestration of one project creation: scaffold, commit, publish.
use log::info;

use crate::config::Config;
use crate::error::Result;
use crate::process::ProcessRunner;
use crate::processor::{ScaffoldedProject, Scaffolder};
use crate::project::ProjectSpec;
use crate::remote::{GitHubDriver, RemoteRequest, Visibility};
use crate::vcs::GitDriver;

/// Which steps of the workflow run after scaffolding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Steps {
    pub local_repository: bool,
    pub remote_repository: bool,
    pub visibility: Visibility,
}

impl Default for Steps {
    fn default() -> Self {
        Self { local_repository: true, remote_repository: true, visibility: Visibility::Public }
    }
}

/// What a finished run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub project: ScaffoldedProject,
    pub local_repository: bool,
    pub remote_created: bool,
    /// URL of the remote repository, when it could be determined
    pub remote_url: Option<String>,
}

/// Creates a project and, depending on `steps`, its local and remote repositories.
///
/// The steps run strictly in order and the first failure is returned as is.
/// Nothing that was created before the failure is removed.
pub fn create_project(
    spec: &ProjectSpec,
    url: &str,
    steps: Steps,
    config: &Config,
    scaffolder: &Scaffolder<'_>,
    runner: &dyn ProcessRunner,
) -> Result<Outcome> {
    let project = scaffolder.scaffold(spec, url)?;
    let mut outcome = Outcome {
        project,
        local_repository: false,
        remote_created: false,
        remote_url: None,
    };

    if !steps.local_repository {
        info!("Skipping git repository");
        return Ok(outcome);
    }

    let git = GitDriver::with_program(runner, &config.git_program, &outcome.project.root);
    git.init()?;
    git.stage_all()?;
    git.commit(&config.commit_message)?;
    outcome.local_repository = true;

    if !steps.remote_repository {
        info!("Skipping remote repository");
        return Ok(outcome);
    }

    let host = GitHubDriver::with_program(runner, &config.host_program);
    let request = RemoteRequest {
        name: spec.name().to_string(),
        description: Some(spec.description().to_string()),
        visibility: steps.visibility,
        source_dir: outcome.project.root.clone(),
        remote_name: config.remote_name.clone(),
    };
    outcome.remote_url = host.create_repository(&request)?;
    outcome.remote_created = true;

    git.push(&config.remote_name)?;
    Ok(outcome)
}
