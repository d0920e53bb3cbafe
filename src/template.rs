//! Template store: the fixed set of files rendered into every new project.
use crate::error::{Error, Result};
use std::fmt;
use std::path::{Path, PathBuf};

/// Where the text of a template comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// Template compiled into the binary
    Embedded(&'static str),
    /// Template read from the local filesystem
    LocalPath(PathBuf),
}

impl fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateSource::Embedded(_) => write!(f, "built-in template"),
            TemplateSource::LocalPath(path) => write!(f, "local path: '{}'", path.display()),
        }
    }
}

impl TemplateSource {
    /// Returns the template text.
    ///
    /// # Errors
    /// * `Error::IoError` if a local template cannot be read
    pub fn read(&self) -> Result<String> {
        match self {
            TemplateSource::Embedded(text) => Ok((*text).to_string()),
            TemplateSource::LocalPath(path) => std::fs::read_to_string(path).map_err(Error::IoError),
        }
    }
}

/// One rendered output file and the template it comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateEntry {
    /// Output path, relative to the project root
    pub output: PathBuf,
    pub source: TemplateSource,
}

/// Ordered mapping of output files to template sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateMapping {
    entries: Vec<TemplateEntry>,
}

impl TemplateMapping {
    pub fn new(entries: Vec<TemplateEntry>) -> Self {
        Self { entries }
    }

    /// The templates shipped with initpyproj.
    pub fn builtin() -> Self {
        let builtin: [(&str, &'static str); 6] = [
            ("LICENSE", include_str!("../templates/LICENSE.tmpl")),
            ("CHANGELOG.md", include_str!("../templates/CHANGELOG.tmpl")),
            ("MANIFEST.in", include_str!("../templates/MANIFEST.tmpl")),
            ("README.md", include_str!("../templates/README.tmpl")),
            ("setup.py", include_str!("../templates/setup.tmpl")),
            (".gitignore", include_str!("../templates/gitignore.tmpl")),
        ];
        Self::new(
            builtin
                .into_iter()
                .map(|(output, text)| TemplateEntry {
                    output: PathBuf::from(output),
                    source: TemplateSource::Embedded(text),
                })
                .collect(),
        )
    }

    /// Builds a mapping from `(output, template file)` pairs, resolving each
    /// template file relative to `template_dir`.
    pub fn from_dir<P: AsRef<Path>>(template_dir: P, files: &[(&str, &str)]) -> Self {
        let template_dir = template_dir.as_ref();
        Self::new(
            files
                .iter()
                .map(|(output, template)| TemplateEntry {
                    output: PathBuf::from(output),
                    source: TemplateSource::LocalPath(template_dir.join(template)),
                })
                .collect(),
        )
    }

    pub fn entries(&self) -> &[TemplateEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for TemplateMapping {
    fn default() -> Self {
        Self::builtin()
    }
}
