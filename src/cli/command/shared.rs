use std::path::{Component, Path, PathBuf};
use anyhow::{bail, Context, Result};
use chrono::Datelike;
use clap::{Arg, ArgAction, ArgMatches};

use crate::project_management::config::models::copyright_line;
use crate::project_management::config::{ConfigParser, ConfigValidator, UserConfig};
use crate::project_management::license::LicenseRegistry;
use crate::project_management::scaffold::Project;
use crate::shared::utils::gomod;

/// Flags describing the target project, shared by `init` and `add`
pub fn project_args() -> Vec<Arg> {
    vec![
        Arg::new("pkg-name")
            .long("pkg-name")
            .help("Go module path of the application, e.g. example.com/demo")
            .long_help(
                "Go module path of the application, e.g. example.com/demo. \
                When omitted, the module directive of go.mod in the project root is used."
            )
            .value_name("PKG"),
        Arg::new("app-name")
            .long("app-name")
            .help("Application name (defaults to the project directory name)")
            .value_name("NAME"),
        Arg::new("author")
            .short('a')
            .long("author")
            .help("Author name for the copyright line")
            .value_name("AUTHOR"),
        Arg::new("license")
            .short('l')
            .long("license")
            .help("License id: none, mit, isc, bsd-2, bsd-3, or custom from the config file")
            .value_name("LICENSE"),
        Arg::new("viper")
            .long("viper")
            .help("Wire the root command to viper for config files")
            .action(ArgAction::SetTrue),
    ]
}

/// Read and validate the user config named by the global `--config` flag
pub fn load_config(matches: &ArgMatches) -> Result<UserConfig> {
    let explicit = matches.get_one::<PathBuf>("config");
    let config = ConfigParser::load(explicit.map(PathBuf::as_path))?;
    ConfigValidator::validate(&config)?;
    Ok(config)
}

/// Project settings after applying flags over the config file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSettings {
    pub root: PathBuf,
    pub pkg_name: String,
    pub app_name: String,
    pub author: String,
    pub year: String,
    pub license: String,
    pub viper: bool,
}

impl ProjectSettings {
    pub fn resolve(matches: &ArgMatches, config: &UserConfig, root: PathBuf) -> Result<Self> {
        let pkg_name = match matches.get_one::<String>("pkg-name") {
            Some(pkg) => pkg.clone(),
            None => gomod::module_path(&root)?.with_context(|| {
                format!(
                    "--pkg-name is required when {} has no go.mod",
                    root.display()
                )
            })?,
        };

        let app_name = match matches.get_one::<String>("app-name") {
            Some(name) => name.clone(),
            None => match root.file_name() {
                Some(name) => name.to_string_lossy().to_string(),
                None => bail!("Cannot derive an application name from {}; pass --app-name", root.display()),
            },
        };

        let author = matches
            .get_one::<String>("author")
            .cloned()
            .unwrap_or_else(|| config.author().to_string());
        let year = config
            .year
            .clone()
            .unwrap_or_else(|| chrono::Local::now().year().to_string());
        let license = matches
            .get_one::<String>("license")
            .cloned()
            .unwrap_or_else(|| config.license().to_string());
        let viper = matches.get_flag("viper") || config.use_viper;

        Ok(Self {
            root,
            pkg_name,
            app_name,
            author,
            year,
            license,
            viper,
        })
    }

    pub fn project<'a>(&self, registry: &'a LicenseRegistry) -> Result<Project<'a>> {
        let legal = registry.find(&self.license)?;
        let project = Project::new(
            self.pkg_name.clone(),
            copyright_line(&self.author, &self.year),
            self.root.clone(),
            legal,
            self.viper,
            self.app_name.clone(),
        )?;
        Ok(project)
    }
}

/// Resolve `path` against the current directory without touching the filesystem
pub fn absolutize<P: AsRef<Path>>(path: P) -> Result<PathBuf> {
    let path = path.as_ref();
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .context("Failed to determine the current directory")?
            .join(path)
    };
    Ok(normalize(&joined))
}

fn normalize(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                result.pop();
            }
            other => result.push(other.as_os_str()),
        }
    }
    result
}
