//! Project scaffolding: creates the directory skeleton and renders the
//! templates into it.
//!
//! Every directory and file is created exclusively, so scaffolding never
//! overwrites anything. A failure stops the run where it happened and leaves
//! whatever was created so far in place.
use log::{debug, info};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::{
    constants::{CORE_DIRECTORY, MARKER_FILE, SUBDIRECTORIES},
    error::{Error, Result},
    project::ProjectSpec,
    renderer::{PlaceholderRenderer, TemplateRenderer},
    template::TemplateMapping,
};

/// Fixed directory layout of a new project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Subdirectories of the project root, in creation order
    pub subdirectories: Vec<String>,
    /// Empty file written into each subdirectory
    pub marker_file: String,
    /// Subdirectory that also receives `<name>.py`, `None` to skip the seed module
    pub seed_directory: Option<String>,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            subdirectories: SUBDIRECTORIES.iter().map(|d| d.to_string()).collect(),
            marker_file: MARKER_FILE.to_string(),
            seed_directory: Some(CORE_DIRECTORY.to_string()),
        }
    }
}

/// Everything one scaffolding run created, in creation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScaffoldedProject {
    pub root: PathBuf,
    pub directories: Vec<PathBuf>,
    pub files: Vec<PathBuf>,
}

/// Creates project trees from a layout and a template mapping.
pub struct Scaffolder<'a> {
    layout: Layout,
    templates: TemplateMapping,
    renderer: &'a dyn TemplateRenderer,
}

impl Default for Scaffolder<'static> {
    fn default() -> Self {
        Scaffolder::new(Layout::default(), TemplateMapping::builtin(), &PlaceholderRenderer)
    }
}

impl<'a> Scaffolder<'a> {
    pub fn new(
        layout: Layout,
        templates: TemplateMapping,
        renderer: &'a dyn TemplateRenderer,
    ) -> Self {
        Self { layout, templates, renderer }
    }

    /// Creates the project described by `spec`.
    ///
    /// # Arguments
    /// * `spec` - Project to create
    /// * `url` - Value for the `<URL>` placeholder
    ///
    /// # Returns
    /// * `Result<ScaffoldedProject>` - Paths of everything that was created
    ///
    /// # Errors
    /// * `Error::AlreadyExists` if the project root or any output file exists
    /// * `Error::IoError` for any other filesystem failure
    pub fn scaffold(&self, spec: &ProjectSpec, url: &str) -> Result<ScaffoldedProject> {
        let root = spec.root();
        info!("Creating project '{}' in {}", spec.name(), root.display());

        create_dir(&root)?;
        let mut project = ScaffoldedProject { root: root.clone(), ..Default::default() };

        for dir_name in &self.layout.subdirectories {
            let dir = root.join(dir_name);
            create_dir(&dir)?;
            project.directories.push(dir.clone());

            let marker = dir.join(&self.layout.marker_file);
            create_file(&marker, "")?;
            project.files.push(marker);

            if self.layout.seed_directory.as_ref() == Some(dir_name) {
                let seed = dir.join(format!("{}.py", spec.name()));
                create_file(&seed, "")?;
                project.files.push(seed);
            }
        }

        let variables = spec.variables(url);
        for entry in self.templates.entries() {
            debug!("Rendering {} from {}", entry.output.display(), entry.source);
            let content = entry.source.read()?;
            let rendered = self.renderer.render(&content, &variables);
            let target = root.join(&entry.output);
            create_file(&target, &rendered)?;
            project.files.push(target);
        }

        info!(
            "Created {} directories and {} files",
            project.directories.len(),
            project.files.len()
        );
        Ok(project)
    }
}

fn create_dir(path: &Path) -> Result<()> {
    debug!("Creating directory: {}", path.display());
    fs::create_dir(path).map_err(|e| Error::from_create(e, path))
}

fn create_file(path: &Path, content: &str) -> Result<()> {
    debug!("Writing file: {}", path.display());
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| Error::from_create(e, path))?;
    file.write_all(content.as_bytes()).map_err(Error::IoError)
}
