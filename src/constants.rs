//! Common constants used throughout the initpyproj application.

/// Subdirectories created inside every new project, in creation order
pub const SUBDIRECTORIES: [&str; 4] = ["_core", "scripts", "tests", "data"];

/// Subdirectory that receives the seed module named after the project
pub const CORE_DIRECTORY: &str = "_core";

/// Empty marker file written into every subdirectory
pub const MARKER_FILE: &str = "__init__.py";

/// Placeholder tokens recognized in template files
pub const NAME_TOKEN: &str = "<NAME>";
pub const URL_TOKEN: &str = "<URL>";
pub const DESCRIPTION_TOKEN: &str = "<DESCRIPTION>";
pub const KEYWORDS_TOKEN: &str = "<KEYWORDS>";

/// Default external programs
pub const GIT_PROGRAM: &str = "git";
pub const HOST_PROGRAM: &str = "gh";

pub const DEFAULT_COMMIT_MESSAGE: &str = "initial commit by initpyproj";
pub const DEFAULT_REMOTE_NAME: &str = "origin";

/// Repository URL printed by `gh repo create` when the https protocol is used
pub const REPOSITORY_URL_PATTERN: &str = r"https://github\.com/\S+\.git";
