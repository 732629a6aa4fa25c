use std::io::ErrorKind;
use std::path::PathBuf;
use regex::bytes::{NoExpand, Regex};

use crate::code_generation::core::{FileMaterializer, OverwritePolicy, TemplateRenderer};
use crate::code_generation::language::go::templates::{
    ADD_COMMAND_TEMPLATE, COMMANDS_IMPORT_MARKER, SUBCOMMANDS_MARKER,
};
use crate::project_management::scaffold::models::Command;
use crate::shared::error::{ScaffoldError, ScaffoldResult};

/// Result of rewriting the root command file for one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Injection {
    pub content: Vec<u8>,
    /// Whether the import marker was found and replaced
    pub import_added: bool,
    /// Whether the registration marker was found
    pub registered: bool,
}

/// Files touched by one `add`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddReport {
    pub command_file: PathBuf,
    pub root_file: PathBuf,
    pub import_added: bool,
    pub registered: bool,
}

/// Adds subcommands to an initialized project
pub struct CommandInjector;

impl CommandInjector {
    /// Generate the command file and register it in the root command file.
    ///
    /// The root file is read, rewritten in memory and swapped in whole, so a
    /// failed write leaves the previous content in place. There is no
    /// locking: two concurrent runs against the same project can both read
    /// the old content and the later write drops the earlier registration.
    pub fn add_command(command: &Command) -> ScaffoldResult<AddReport> {
        let project = command.project;
        let root_file = project.root_file();
        let root_content = Self::read_root_file(command)?;

        FileMaterializer::ensure_dir(project.commands_dir())?;

        let command_file = command.file();
        FileMaterializer::materialize(&command_file, OverwritePolicy::Always, || {
            Self::render_command_file(command)
        })?;

        let injection = Self::inject_command(&root_content, command)?;
        FileMaterializer::replace(&root_file, &injection.content)?;
        tracing::info!(
            command = %command.cmd_name,
            import_added = injection.import_added,
            "registered command in {}",
            root_file.display()
        );

        Ok(AddReport {
            command_file,
            root_file,
            import_added: injection.import_added,
            registered: injection.registered,
        })
    }

    /// Read the root command file, which `init` must have created
    pub fn read_root_file(command: &Command) -> ScaffoldResult<Vec<u8>> {
        let root_file = command.project.root_file();
        match FileMaterializer::read(&root_file) {
            Err(ScaffoldError::Io { source, .. }) if source.kind() == ErrorKind::NotFound => {
                Err(ScaffoldError::RootFileMissing { path: root_file })
            }
            other => other,
        }
    }

    pub fn render_command_file(command: &Command) -> ScaffoldResult<Vec<u8>> {
        TemplateRenderer::default().render("sub", ADD_COMMAND_TEMPLATE, command)
    }

    /// Rewrite root file content to import the commands package and register `command`.
    ///
    /// The import marker is consumed by its first replacement; once it is gone
    /// the import is already in place and the step does nothing. The
    /// registration marker is written back after the new statement, so every
    /// call inserts directly above it and registrations keep call order.
    pub fn inject_command(content: &[u8], command: &Command) -> ScaffoldResult<Injection> {
        let import_line = format!("\"{}\"", command.project.commands_import_path());
        let (content, import_added) = replace_first(content, COMMANDS_IMPORT_MARKER, &import_line)?;
        if !import_added {
            tracing::debug!("commands import marker already consumed");
        }

        let registration = format!(
            "rootCmd.AddCommand(commands.{}())\n\t{}",
            command.builder_symbol(),
            SUBCOMMANDS_MARKER
        );
        let (content, registered) = replace_first(&content, SUBCOMMANDS_MARKER, &registration)?;
        if !registered {
            tracing::warn!("subcommands marker not found, {} was not registered", command.cmd_name);
        }

        Ok(Injection {
            content,
            import_added,
            registered,
        })
    }
}

/// Replace the first occurrence of `marker`, reporting whether it was present
fn replace_first(content: &[u8], marker: &str, replacement: &str) -> ScaffoldResult<(Vec<u8>, bool)> {
    let re = Regex::new(&regex::escape(marker))?;
    if !re.is_match(content) {
        return Ok((content.to_vec(), false));
    }
    let replaced = re.replacen(content, 1, NoExpand(replacement.as_bytes()));
    Ok((replaced.into_owned(), true))
}
