//! Configuration validation.

use std::path::{Component, Path};

use crate::error::ConfigError;
use crate::schema::Config;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Convert the first error into a [`ConfigError`].
    pub fn into_result(self) -> Result<Vec<ValidationWarning>, ConfigError> {
        match self.errors.into_iter().next() {
            Some(error) => Err(ConfigError::InvalidValue {
                field: error.path,
                message: error.message,
            }),
            None => Ok(self.warnings),
        }
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &Config) -> ValidationResult {
        let mut result = ValidationResult::default();

        Self::validate_workspace(config, &mut result);
        Self::validate_codec(config, &mut result);
        Self::validate_list(config, &mut result);
        Self::validate_logging(config, &mut result);

        result
    }

    fn validate_workspace(config: &Config, result: &mut ValidationResult) {
        let workspace = &config.workspace;

        if workspace.clog_dir.trim().is_empty() {
            result.add_error(ValidationError::new(
                "workspace.clog_dir",
                "clog_dir cannot be empty",
            ));
        }

        if workspace.memo_dir.trim().is_empty() {
            result.add_error(ValidationError::new(
                "workspace.memo_dir",
                "memo_dir cannot be empty",
            ));
        } else if !is_nested_relative(&workspace.memo_dir) {
            result.add_error(ValidationError::new(
                "workspace.memo_dir",
                "memo_dir must be a relative path inside clog_dir",
            ));
        }

        let extension = &workspace.extension;
        if extension.is_empty() {
            result.add_error(ValidationError::new(
                "workspace.extension",
                "extension cannot be empty",
            ));
        } else if !extension.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-') {
            result.add_error(ValidationError::new(
                "workspace.extension",
                "extension must not contain a dot or path separators",
            ));
        }
    }

    fn validate_codec(config: &Config, result: &mut ValidationResult) {
        if config.codec.summary_chars == 0 {
            result.add_error(ValidationError::new(
                "codec.summary_chars",
                "summary_chars must be greater than 0",
            ));
        }

        if config.codec.summary_chars > 500 {
            result.add_warning(ValidationWarning::new(
                "codec.summary_chars",
                "summary_chars is very high (>500), preambles will be large",
            ));
        }

        if config.codec.max_document_bytes == 0 {
            result.add_error(ValidationError::new(
                "codec.max_document_bytes",
                "max_document_bytes must be greater than 0",
            ));
        }

        if config.codec.max_document_bytes > 64 * 1024 * 1024 {
            result.add_warning(ValidationWarning::new(
                "codec.max_document_bytes",
                "max_document_bytes is above 64 MiB",
            ));
        }
    }

    fn validate_list(config: &Config, result: &mut ValidationResult) {
        if config.list.limit == 0 {
            result.add_error(ValidationError::new(
                "list.limit",
                "limit must be greater than 0",
            ));
        }

        if config.list.limit > 1000 {
            result.add_warning(ValidationWarning::new(
                "list.limit",
                "limit is very high (>1000), listing reads every note",
            ));
        }
    }

    fn validate_logging(config: &Config, result: &mut ValidationResult) {
        let level = config.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            result.add_warning(ValidationWarning::new(
                "logging.level",
                format!(
                    "'{}' is not a plain level, it will be used as a filter directive",
                    config.logging.level
                ),
            ));
        }

        if let Some(dir) = &config.logging.file_dir {
            if dir.as_os_str().is_empty() {
                result.add_error(ValidationError::new(
                    "logging.file_dir",
                    "file_dir cannot be empty",
                ));
            }
        }
    }
}

fn is_nested_relative(path: &str) -> bool {
    Path::new(path)
        .components()
        .all(|component| matches!(component, Component::Normal(_) | Component::CurDir))
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
