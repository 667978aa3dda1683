use std::str::FromStr;
use thiserror::Error;

use crate::config::Settings;

/// Largest accepted `preview.indent`
pub const MAX_INDENT: usize = 8;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

pub struct ConfigValidator;

impl ConfigValidator {
    /// Collect every problem instead of stopping at the first
    pub fn validate(settings: &Settings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if settings.server.host.trim().is_empty() {
            errors.push(ValidationError::MissingField("server.host".to_string()));
        }

        if settings.preview.indent > MAX_INDENT {
            errors.push(ValidationError::InvalidValue {
                field: "preview.indent".to_string(),
                reason: format!("{} exceeds the maximum of {}", settings.preview.indent, MAX_INDENT),
            });
        }

        if tracing::Level::from_str(&settings.logging.level).is_err() {
            errors.push(ValidationError::InvalidValue {
                field: "logging.level".to_string(),
                reason: format!(
                    "'{}' is not one of trace, debug, info, warn, error",
                    settings.logging.level
                ),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(ConfigValidator::validate(&Settings::default()).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut settings = Settings::default();
        settings.server.host = " ".to_string();
        settings.preview.indent = 9;
        settings.logging.level = "chatty".to_string();

        let errors = ConfigValidator::validate(&settings).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(matches!(errors[0], ValidationError::MissingField(ref f) if f == "server.host"));
    }

    #[test]
    fn test_log_level_is_case_insensitive() {
        let mut settings = Settings::default();
        settings.logging.level = "WARN".to_string();
        assert!(ConfigValidator::validate(&settings).is_ok());
    }
}
