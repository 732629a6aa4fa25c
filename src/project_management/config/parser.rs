use std::fs;
use std::path::{Path, PathBuf};
use anyhow::{bail, Context, Result};

use crate::project_management::config::models::UserConfig;

pub const CONFIG_FILE_NAME: &str = ".cobra.yaml";

/// Loads the user configuration file
pub struct ConfigParser;

impl ConfigParser {
    /// `~/.cobra.yaml`, when a home directory can be determined
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(CONFIG_FILE_NAME))
    }

    /// Load an explicitly requested file, or the default one if it exists
    pub fn load(explicit: Option<&Path>) -> Result<UserConfig> {
        match explicit {
            Some(path) => {
                if !path.is_file() {
                    bail!("Config file not found: {}", path.display());
                }
                Self::parse_file(path)
            }
            None => match Self::default_path().filter(|p| p.is_file()) {
                Some(path) => Self::parse_file(&path),
                None => {
                    tracing::debug!("no user config file, using defaults");
                    Ok(UserConfig::default())
                }
            },
        }
    }

    pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<UserConfig> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::parse_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded user config");
        Ok(config)
    }

    pub fn parse_str(content: &str) -> Result<UserConfig> {
        if content.trim().is_empty() {
            return Ok(UserConfig::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("cobra.yaml");
        fs::write(&path, "author: Jane\nlicense: bsd\n").unwrap();

        let config = ConfigParser::load(Some(&path)).unwrap();

        assert_eq!(config.author(), "Jane");
        assert_eq!(config.license(), "bsd");
    }

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(ConfigParser::parse_str("\n").unwrap(), UserConfig::default());
    }

    #[test]
    fn test_explicit_missing_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope.yaml");

        let err = ConfigParser::load(Some(&missing)).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_invalid_yaml_fails() {
        assert!(ConfigParser::parse_str("useViper: [not, a, bool]").is_err());
    }
}
