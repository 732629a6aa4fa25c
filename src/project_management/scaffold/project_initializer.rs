use std::path::PathBuf;
use serde_json::json;

use crate::code_generation::core::{FileMaterializer, OverwritePolicy, TemplateRenderer};
use crate::code_generation::language::go::templates::{MAIN_TEMPLATE, ROOT_TEMPLATE};
use crate::project_management::scaffold::models::Project;
use crate::shared::error::ScaffoldResult;

/// Files touched by one initialization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitReport {
    pub main_file: PathBuf,
    pub root_file: PathBuf,
    /// False when an existing root file was kept
    pub root_created: bool,
    pub license_file: PathBuf,
}

/// Creates the initial skeleton of a project
pub struct ProjectInitializer;

impl ProjectInitializer {
    /// Write the entry point, root command and LICENSE.
    ///
    /// The root command file is only written when missing since `add` grows it
    /// in place. A failure leaves earlier files on disk.
    pub fn initialize(project: &Project) -> ScaffoldResult<InitReport> {
        let renderer = TemplateRenderer::default();

        FileMaterializer::ensure_dir(project.root())?;

        // cmd/<app>/main.go
        FileMaterializer::ensure_dir(project.cmd_dir())?;
        let main_file = project.main_file();
        FileMaterializer::materialize(&main_file, OverwritePolicy::Always, || {
            renderer.render("main", MAIN_TEMPLATE, project)
        })?;

        // pkg/<app>/root.go
        FileMaterializer::ensure_dir(project.pkg_dir())?;
        let root_file = project.root_file();
        let root_created = FileMaterializer::materialize(&root_file, OverwritePolicy::IfAbsent, || {
            renderer.render("root", ROOT_TEMPLATE, project)
        })?;
        if !root_created {
            tracing::info!(path = %root_file.display(), "root command file already exists, leaving it untouched");
        }

        let license_file = Self::create_license_file(&renderer, project)?;

        Ok(InitReport {
            main_file,
            root_file,
            root_created,
            license_file,
        })
    }

    fn create_license_file(renderer: &TemplateRenderer, project: &Project) -> ScaffoldResult<PathBuf> {
        let license_file = project.license_file();
        let data = json!({ "copyright": project.copyright });

        FileMaterializer::materialize(&license_file, OverwritePolicy::Always, || {
            renderer.render("license", &project.legal.text, &data)
        })?;

        Ok(license_file)
    }
}
