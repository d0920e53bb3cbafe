//! initpyproj scaffolds a new python project.
//! It creates a fixed directory skeleton, renders the project templates into it,
//! and optionally creates a local git repository and a matching GitHub repository.

/// Command-line interface module for the initpyproj application
pub mod cli;

/// Configuration file handling
/// Supports JSON and YAML formats
pub mod config;

/// Common constants
pub mod constants;

/// Error types and handling for the initpyproj application
pub mod error;

pub mod logger;

/// External command execution
pub mod process;

/// Directory and file scaffolding
pub mod processor;

/// Description of the project to create
pub mod project;

/// GitHub repository creation through the `gh` CLI
pub mod remote;

/// Placeholder substitution
pub mod renderer;

/// Template store
pub mod template;

/// Local git operations
pub mod vcs;

/// Ordered scaffold, commit and publish workflow
pub mod workflow;
