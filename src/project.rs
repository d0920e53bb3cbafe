//! Description of the project to scaffold.
use crate::error::{Error, Result};
use crate::renderer::Variables;
use std::path::{Path, PathBuf};

/// The project to create. Validated on construction and not changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSpec {
    name: String,
    parent_directory: PathBuf,
    description: String,
    keywords: Vec<String>,
}

impl ProjectSpec {
    /// Creates a project description.
    ///
    /// # Errors
    /// * `Error::InvalidArgument` if `name` is not a usable directory name
    pub fn new<S: Into<String>, P: Into<PathBuf>>(
        name: S,
        parent_directory: P,
        description: Option<String>,
        keywords: Vec<String>,
    ) -> Result<Self> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Self {
            name,
            parent_directory: parent_directory.into(),
            description: description.unwrap_or_default(),
            keywords,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent_directory(&self) -> &Path {
        &self.parent_directory
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// `<parent_directory>/<name>`
    pub fn root(&self) -> PathBuf {
        self.parent_directory.join(&self.name)
    }

    /// Placeholder values for this project with the given repository URL.
    pub fn variables(&self, url: &str) -> Variables {
        Variables {
            name: self.name.clone(),
            url: url.to_string(),
            description: self.description.clone(),
            keywords: self.keywords.clone(),
        }
    }
}

/// Checks that `name` can be used as a single directory and file name.
pub fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::InvalidArgument("project name must not be empty".to_string()));
    }
    if name.starts_with('-') || name.starts_with('.') {
        return Err(Error::InvalidArgument(format!(
            "project name '{name}' must not start with '-' or '.'"
        )));
    }
    if let Some(c) = name
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.')))
    {
        return Err(Error::InvalidArgument(format!(
            "project name '{name}' contains invalid character {c:?}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert!(validate_name("demo").is_ok());
        assert!(validate_name("my_proj-2.0").is_ok());

        for bad in ["", ".", "..", ".hidden", "-flag", "a/b", "a\\b", "a b", "a\0b"] {
            assert!(
                matches!(validate_name(bad), Err(Error::InvalidArgument(_))),
                "{bad:?} should be rejected"
            );
        }
    }
}
