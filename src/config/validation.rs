//! Configuration validation logic.

use crate::config::loader::Config;
use crate::error::{Error, Result};
use regex::Regex;

/// Placeholders the filename template must contain.
const REQUIRED_PLACEHOLDERS: [&str; 3] = ["{subject}", "{session}", "{condition}"];

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    config.base_directory()?;
    validate_subject_prefix(&config.layout.subject_prefix)?;
    validate_session_dirs(&config.layout.session_dirs)?;
    validate_conditions(&config.layout.conditions)?;
    validate_template(&config.layout.filename_template)?;
    validate_extension(&config.layout.extension)?;
    validate_rename(&config.rename.find, &config.rename.replace_with)?;

    Ok(())
}

/// Validate the subject directory prefix.
pub fn validate_subject_prefix(prefix: &str) -> Result<()> {
    if prefix.is_empty() {
        return Err(Error::MissingConfig("subject_prefix".to_string()));
    }

    // Prefix pattern: alphanumeric, hyphens, underscores
    let prefix_pattern = Regex::new(r"^[a-zA-Z0-9_-]+$").unwrap();
    if !prefix_pattern.is_match(prefix) {
        return Err(Error::ConfigValidation {
            field: "subject_prefix".to_string(),
            message: format!(
                "Prefix '{}' contains invalid characters. Only alphanumeric, hyphens, and underscores allowed.",
                prefix
            ),
        });
    }

    Ok(())
}

/// Validate the session directory list.
pub fn validate_session_dirs(session_dirs: &[String]) -> Result<()> {
    if session_dirs.is_empty() {
        return Err(Error::MissingConfig(
            "session_dirs (at least one session directory required)".to_string(),
        ));
    }

    for dir in session_dirs {
        if dir.is_empty() || dir.contains('/') || dir.contains('\\') {
            return Err(Error::ConfigValidation {
                field: "session_dirs".to_string(),
                message: format!(
                    "Session directory '{}' must be a single non-empty path component",
                    dir
                ),
            });
        }
    }

    Ok(())
}

/// Validate the condition label list.
pub fn validate_conditions(conditions: &[String]) -> Result<()> {
    if conditions.is_empty() {
        return Err(Error::MissingConfig(
            "conditions (at least one condition label required)".to_string(),
        ));
    }

    for cond in conditions {
        if cond.is_empty() {
            return Err(Error::ConfigValidation {
                field: "conditions".to_string(),
                message: "Condition labels cannot be empty".to_string(),
            });
        }
    }

    Ok(())
}

/// Validate the filename template.
pub fn validate_template(template: &str) -> Result<()> {
    if template.is_empty() {
        return Err(Error::MissingConfig("filename_template".to_string()));
    }

    for placeholder in REQUIRED_PLACEHOLDERS {
        if !template.contains(placeholder) {
            return Err(Error::ConfigValidation {
                field: "filename_template".to_string(),
                message: format!(
                    "Template '{}' is missing the {} placeholder",
                    template, placeholder
                ),
            });
        }
    }

    if template.contains('/') || template.contains('\\') {
        return Err(Error::ConfigValidation {
            field: "filename_template".to_string(),
            message: "Template must not contain path separators".to_string(),
        });
    }

    Ok(())
}

/// Validate the file extension.
pub fn validate_extension(extension: &str) -> Result<()> {
    if extension.is_empty() {
        return Err(Error::MissingConfig("extension".to_string()));
    }

    if !extension.starts_with('.') || extension.len() < 2 {
        return Err(Error::ConfigValidation {
            field: "extension".to_string(),
            message: format!(
                "Extension '{}' must start with a dot and name a suffix (e.g. \".xlsx\")",
                extension
            ),
        });
    }

    Ok(())
}

/// Validate the rename substring pair.
pub fn validate_rename(find: &str, replace_with: &str) -> Result<()> {
    if find.is_empty() {
        return Err(Error::MissingConfig("rename.find".to_string()));
    }

    if find == replace_with {
        return Err(Error::ConfigValidation {
            field: "rename.replace_with".to_string(),
            message: format!(
                "Replacement '{}' is identical to the search substring; the rename stage would never change any filename",
                replace_with
            ),
        });
    }

    if replace_with.contains('/') || replace_with.contains('\\') {
        return Err(Error::ConfigValidation {
            field: "rename.replace_with".to_string(),
            message: "Replacement must not contain path separators".to_string(),
        });
    }

    Ok(())
}
