use std::path::{Path, PathBuf};
use regex::Regex;
use serde::Serialize;

use crate::code_generation::core::template_funcs;
use crate::code_generation::language::go::templates::{
    COMMANDS_DIR, LICENSE_FILE, MAIN_FILE, ROOT_FILE, SOURCE_EXT,
};
use crate::project_management::license::License;
use crate::shared::error::{ScaffoldError, ScaffoldResult};

/// A generation target. Field names are what templates see.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Project<'a> {
    pub pkg_name: String,
    pub copyright: String,
    pub absolute_path: PathBuf,
    pub legal: &'a License,
    pub viper: bool,
    pub app_name: String,
}

/// A subcommand to add to an initialized project
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Command<'a> {
    pub cmd_name: String,
    /// Recorded for nested commands; registration always targets the root command
    pub cmd_parent: Option<String>,
    pub project: &'a Project<'a>,
}

impl<'a> Project<'a> {
    pub fn new(
        pkg_name: impl Into<String>,
        copyright: impl Into<String>,
        absolute_path: impl Into<PathBuf>,
        legal: &'a License,
        viper: bool,
        app_name: impl Into<String>,
    ) -> ScaffoldResult<Self> {
        let app_name = app_name.into();
        validate_identifier("application", &app_name)?;

        Ok(Self {
            pkg_name: pkg_name.into(),
            copyright: copyright.into(),
            absolute_path: absolute_path.into(),
            legal,
            viper,
            app_name,
        })
    }

    pub fn root(&self) -> &Path {
        &self.absolute_path
    }

    /// `<root>/cmd/<app>`
    pub fn cmd_dir(&self) -> PathBuf {
        self.absolute_path.join("cmd").join(&self.app_name)
    }

    pub fn main_file(&self) -> PathBuf {
        self.cmd_dir().join(MAIN_FILE)
    }

    /// `<root>/pkg/<app>`
    pub fn pkg_dir(&self) -> PathBuf {
        self.absolute_path.join("pkg").join(&self.app_name)
    }

    pub fn root_file(&self) -> PathBuf {
        self.pkg_dir().join(ROOT_FILE)
    }

    pub fn commands_dir(&self) -> PathBuf {
        self.pkg_dir().join(COMMANDS_DIR)
    }

    pub fn license_file(&self) -> PathBuf {
        self.absolute_path.join(LICENSE_FILE)
    }

    /// Go import path of the package every subcommand lives in
    pub fn commands_import_path(&self) -> String {
        format!("{}/pkg/{}/{}", self.pkg_name, self.app_name, COMMANDS_DIR)
    }
}

impl<'a> Command<'a> {
    pub fn new(
        cmd_name: impl Into<String>,
        cmd_parent: Option<String>,
        project: &'a Project<'a>,
    ) -> ScaffoldResult<Self> {
        let cmd_name = cmd_name.into();
        validate_identifier("command", &cmd_name)?;

        Ok(Self {
            cmd_name,
            cmd_parent,
            project,
        })
    }

    /// Name of the Go function that builds this command, e.g. `BuildServeCmd`
    pub fn builder_symbol(&self) -> String {
        format!("Build{}Cmd", template_funcs::title(&self.cmd_name))
    }

    pub fn file(&self) -> PathBuf {
        self.project
            .commands_dir()
            .join(format!("{}.{}", self.cmd_name, SOURCE_EXT))
    }
}

/// Application and command names become Go identifiers and path segments
pub fn validate_identifier(kind: &'static str, name: &str) -> ScaffoldResult<()> {
    let re = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$")?;
    if re.is_match(name) {
        Ok(())
    } else {
        Err(ScaffoldError::InvalidName {
            kind,
            name: name.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn license() -> License {
        License::new("MIT License", Some("SPDX-License-Identifier: MIT".to_string()), "{{copyright}}")
    }

    #[test]
    fn test_project_layout() {
        let legal = license();
        let project = Project::new("example.com/demo", "Copyright © 2024 Me", "/work/demo", &legal, false, "demo").unwrap();

        assert_eq!(project.main_file(), PathBuf::from("/work/demo/cmd/demo/main.go"));
        assert_eq!(project.root_file(), PathBuf::from("/work/demo/pkg/demo/root.go"));
        assert_eq!(project.commands_dir(), PathBuf::from("/work/demo/pkg/demo/commands"));
        assert_eq!(project.license_file(), PathBuf::from("/work/demo/LICENSE"));
        assert_eq!(project.commands_import_path(), "example.com/demo/pkg/demo/commands");
    }

    #[test]
    fn test_command_builder_symbol_and_file() {
        let legal = license();
        let project = Project::new("example.com/demo", "", "/work/demo", &legal, false, "demo").unwrap();
        let command = Command::new("serve", None, &project).unwrap();

        assert_eq!(command.builder_symbol(), "BuildServeCmd");
        assert_eq!(command.file(), PathBuf::from("/work/demo/pkg/demo/commands/serve.go"));
    }

    #[test]
    fn test_invalid_names_rejected() {
        let legal = license();
        assert!(matches!(
            Project::new("x", "", "/tmp/x", &legal, false, "my app"),
            Err(ScaffoldError::InvalidName { kind: "application", .. })
        ));

        let project = Project::new("x", "", "/tmp/x", &legal, false, "x").unwrap();
        for name in ["", "1st", "../evil", "foo-bar"] {
            assert!(Command::new(name, None, &project).is_err(), "{name}");
        }
        assert!(Command::new("_internal2", None, &project).is_ok());
    }

    #[test]
    fn test_template_field_names() {
        let legal = license();
        let project = Project::new("example.com/demo", "c", "/work/demo", &legal, true, "demo").unwrap();
        let command = Command::new("serve", Some("root".to_string()), &project).unwrap();

        let value = serde_json::to_value(&command).unwrap();
        assert_eq!(value["CmdName"], "serve");
        assert_eq!(value["CmdParent"], "root");
        assert_eq!(value["Project"]["PkgName"], "example.com/demo");
        assert_eq!(value["Project"]["AppName"], "demo");
        assert_eq!(value["Project"]["Viper"], true);
        assert_eq!(value["Project"]["Legal"]["Header"], "SPDX-License-Identifier: MIT");
    }
}
