//! Command-line interface implementation for initpyproj.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, ArgGroup, CommandFactory, Parser};
use std::path::PathBuf;

use crate::remote::Visibility;

/// Command-line arguments structure for initpyproj.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "initpyproj: initialize an empty python project, make it a git repo and sync it with a new GitHub repo",
    long_about = None,
    group(ArgGroup::new("verbosity").args(["verbose", "quiet", "debug"]).multiple(false))
)]
pub struct Args {
    /// Name of the new project
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Short description of the project
    #[arg(short, long)]
    pub description: Option<String>,

    /// Keywords describing the project, comma separated or repeated
    #[arg(short, long, value_name = "KEYWORD", value_delimiter = ',', num_args = 1)]
    pub keywords: Vec<String>,

    /// Directory in which the project directory is created [default: current directory]
    #[arg(short, long, value_name = "DIR")]
    pub parent_dir: Option<PathBuf>,

    /// Project URL written into the templates
    #[arg(short, long, default_value = "")]
    pub url: String,

    /// Do not initialize a git repository (implies --no-remote)
    #[arg(long)]
    pub no_git: bool,

    /// Initialize a local git repository but do not create a remote one
    #[arg(long)]
    pub no_remote: bool,

    /// Create the remote repository as private
    #[arg(long)]
    pub private: bool,

    /// Path to a JSON or YAML configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Report each step
    #[arg(short, long)]
    pub verbose: bool,

    /// Only report errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Report every command and file operation
    #[arg(long)]
    pub debug: bool,
}

/// How much the application reports while it works.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    Debug,
}

impl Args {
    pub fn verbosity(&self) -> Verbosity {
        match (self.quiet, self.verbose, self.debug) {
            (true, _, _) => Verbosity::Quiet,
            (_, _, true) => Verbosity::Debug,
            (_, true, _) => Verbosity::Verbose,
            _ => Verbosity::Normal,
        }
    }

    /// Visibility of the remote repository; `--private` wins over the configuration.
    pub fn visibility(&self, private_by_default: bool) -> Visibility {
        if self.private || private_by_default {
            Visibility::Private
        } else {
            Visibility::Public
        }
    }
}

/// Parses command line arguments and returns the Args structure.
///
/// # Returns
/// * `Args` - Parsed command line arguments
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                let _ = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
