use anyhow::{bail, Result};

use crate::project_management::config::models::{UserConfig, CUSTOM_LICENSE_ID};

/// Validator for the user configuration file
pub struct ConfigValidator;

#[derive(Debug, Clone)]
pub struct ValidationError {
    pub message: String,
    pub path: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Validation error at {}: {}", self.path, self.message)
    }
}

impl ConfigValidator {
    pub fn validate(config: &UserConfig) -> Result<()> {
        let mut errors = Vec::new();

        if let Some(year) = &config.year {
            if year.trim().is_empty() || !year.chars().all(|c| c.is_ascii_digit() || c == '-') {
                errors.push(ValidationError {
                    message: format!("Year must be digits or a range like 2020-2024, got '{}'", year),
                    path: "year".to_string(),
                });
            }
        }

        if let Some(custom) = &config.custom_license {
            if custom.text.trim().is_empty() {
                errors.push(ValidationError {
                    message: "Custom license text cannot be empty".to_string(),
                    path: "customLicense.text".to_string(),
                });
            }
        }

        let registry = config.license_registry();
        if let Err(e) = registry.find(config.license()) {
            let message = if config.license().eq_ignore_ascii_case(CUSTOM_LICENSE_ID) {
                "License 'custom' requires a customLicense section".to_string()
            } else {
                e.to_string()
            };
            errors.push(ValidationError {
                message,
                path: "license".to_string(),
            });
        }

        if !errors.is_empty() {
            let error_messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            bail!("Configuration validation failed:\n{}", error_messages.join("\n"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project_management::config::models::CustomLicense;

    #[test]
    fn test_default_config_is_valid() {
        assert!(ConfigValidator::validate(&UserConfig::default()).is_ok());
    }

    #[test]
    fn test_unknown_license() {
        let config = UserConfig {
            license: Some("wtfpl".to_string()),
            ..Default::default()
        };

        let err = ConfigValidator::validate(&config).unwrap_err();
        assert!(err.to_string().contains("Validation error at license"));
    }

    #[test]
    fn test_custom_license_without_section() {
        let config = UserConfig {
            license: Some("custom".to_string()),
            ..Default::default()
        };

        let err = ConfigValidator::validate(&config).unwrap_err();
        assert!(err.to_string().contains("requires a customLicense section"));
    }

    #[test]
    fn test_collects_every_error() {
        let config = UserConfig {
            year: Some("last year".to_string()),
            license: Some("custom".to_string()),
            custom_license: Some(CustomLicense {
                name: None,
                header: None,
                text: "  ".to_string(),
            }),
            ..Default::default()
        };

        let message = ConfigValidator::validate(&config).unwrap_err().to_string();
        assert!(message.contains("at year"));
        assert!(message.contains("at customLicense.text"));
        assert!(!message.contains("at license"));
    }
}
