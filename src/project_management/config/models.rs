use serde::{Deserialize, Deserializer, Serialize};

use crate::project_management::license::{License, LicenseRegistry};

pub const DEFAULT_AUTHOR: &str = "NAME HERE <EMAIL ADDRESS>";
pub const DEFAULT_LICENSE: &str = "none";
pub const CUSTOM_LICENSE_ID: &str = "custom";

/// User configuration read from `~/.cobra.yaml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserConfig {
    #[serde(default)]
    pub author: Option<String>,
    /// Overrides the current year in copyright lines
    #[serde(default, deserialize_with = "string_or_number")]
    pub year: Option<String>,
    #[serde(default)]
    pub license: Option<String>,
    #[serde(default)]
    pub use_viper: bool,
    #[serde(default)]
    pub custom_license: Option<CustomLicense>,
}

/// License supplied by the user, selectable as `custom`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomLicense {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub header: Option<String>,
    pub text: String,
}

impl UserConfig {
    pub fn author(&self) -> &str {
        self.author.as_deref().filter(|a| !a.trim().is_empty()).unwrap_or(DEFAULT_AUTHOR)
    }

    pub fn license(&self) -> &str {
        self.license.as_deref().unwrap_or(DEFAULT_LICENSE)
    }

    /// Built-in licenses plus the custom one, if configured
    pub fn license_registry(&self) -> LicenseRegistry {
        let mut registry = LicenseRegistry::builtin();
        if let Some(custom) = &self.custom_license {
            registry.register(
                CUSTOM_LICENSE_ID,
                &[],
                License::new(
                    custom.name.clone().unwrap_or_else(|| "Custom License".to_string()),
                    custom.header.clone(),
                    custom.text.clone(),
                ),
            );
        }
        registry
    }
}

/// `Copyright © <year> <author>`
pub fn copyright_line(author: &str, year: &str) -> String {
    format!("Copyright © {} {}", year, author)
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(u64),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let yaml = r#"
author: Jane Doe <jane@example.com>
year: 2021
license: MIT
useViper: true
customLicense:
  header: Internal use only
  text: "{{copyright}} All rights reserved."
"#;
        let config: UserConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.author(), "Jane Doe <jane@example.com>");
        assert_eq!(config.year.as_deref(), Some("2021"));
        assert_eq!(config.license(), "MIT");
        assert!(config.use_viper);

        let registry = config.license_registry();
        let custom = registry.find("custom").unwrap();
        assert_eq!(custom.header.as_deref(), Some("Internal use only"));
        assert_eq!(custom.name, "Custom License");
    }

    #[test]
    fn test_defaults() {
        let config: UserConfig = serde_yaml::from_str("{}").unwrap();

        assert_eq!(config, UserConfig::default());
        assert_eq!(config.author(), DEFAULT_AUTHOR);
        assert_eq!(config.license(), DEFAULT_LICENSE);
        assert!(config.license_registry().find("custom").is_err());
    }

    #[test]
    fn test_copyright_line() {
        assert_eq!(copyright_line("Jane", "2024"), "Copyright © 2024 Jane");
    }
}
