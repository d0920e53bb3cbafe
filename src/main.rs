//! initpyproj's main application entry point.
//! Parses arguments, configures logging, and runs the scaffolding workflow.

use initpyproj::{
    cli::{get_args, Args, Verbosity},
    config::get_config,
    error::{default_error_handler, Error, Result},
    logger::init_logger,
    process::SystemRunner,
    processor::{Layout, Scaffolder},
    project::ProjectSpec,
    renderer::PlaceholderRenderer,
    template::TemplateMapping,
    workflow::{create_project, Steps},
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbosity());

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Loads configuration
/// 2. Validates the project description
/// 3. Scaffolds the project directory
/// 4. Creates the local git repository and first commit
/// 5. Creates the GitHub repository and pushes to it
fn run(args: Args) -> Result<()> {
    let config = get_config(args.config.as_ref())?;

    let parent_dir = match &args.parent_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().map_err(Error::IoError)?,
    };
    let spec = ProjectSpec::new(
        args.name.clone(),
        parent_dir,
        args.description.clone(),
        args.keywords.clone(),
    )?;

    let steps = Steps {
        local_repository: !args.no_git,
        remote_repository: !args.no_git && !args.no_remote,
        visibility: args.visibility(config.private),
    };

    let mut layout = Layout::default();
    if !config.seed_module {
        layout.seed_directory = None;
    }
    let scaffolder = Scaffolder::new(layout, TemplateMapping::builtin(), &PlaceholderRenderer);

    let outcome = create_project(&spec, &args.url, steps, &config, &scaffolder, &SystemRunner)?;

    if args.verbosity() != Verbosity::Quiet {
        println!("Project created in {}.", outcome.project.root.display());
        if outcome.local_repository {
            println!("Initialized git repository with an initial commit.");
        }
        match (&outcome.remote_url, outcome.remote_created) {
            (Some(url), _) => println!("Remote repository: {url}"),
            (None, true) => println!("Remote repository created."),
            (None, false) => {}
        }
    }
    Ok(())
}
