//! Configuration structures and loading logic.

use crate::config::modes::RunMode;
use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub layout: LayoutConfig,

    #[serde(default)]
    pub rename: RenameConfig,

    #[serde(default)]
    pub options: OptionsConfig,
}

/// Source and destination directory configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PathsConfig {
    /// Root directory of the study tree, containing the subject folders.
    #[serde(default)]
    pub base_directory: Option<PathBuf>,

    /// Flat directory that collected files land in.
    /// Defaults to `<base_directory>/BehavioralData`.
    #[serde(default)]
    pub dest_directory: Option<PathBuf>,
}

/// Directory-tree and filename layout configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LayoutConfig {
    /// Prefix that subject directory names must start with.
    #[serde(default = "default_subject_prefix")]
    pub subject_prefix: String,

    /// Per-session subdirectory names, in session order.
    /// Session numbers in filenames are 1-based indices into this list.
    #[serde(default = "default_session_dirs")]
    pub session_dirs: Vec<String>,

    /// Task subdirectory name under each session directory.
    #[serde(default = "default_task_dir")]
    pub task_dir: String,

    /// Condition labels crossed with every subject and session.
    #[serde(default = "default_conditions")]
    pub conditions: Vec<String>,

    /// Filename template. Recognized placeholders: `{subject}`, `{session}`
    /// (zero-padded to two digits), `{condition}`.
    #[serde(default = "default_filename_template")]
    pub filename_template: String,

    /// File extension appended to the rendered template, including the dot.
    #[serde(default = "default_extension")]
    pub extension: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            subject_prefix: default_subject_prefix(),
            session_dirs: default_session_dirs(),
            task_dir: default_task_dir(),
            conditions: default_conditions(),
            filename_template: default_filename_template(),
            extension: default_extension(),
        }
    }
}

/// Substring substitution configuration for the rename stage.
#[derive(Debug, Clone, Deserialize)]
pub struct RenameConfig {
    /// Literal substring to look for in collected filenames.
    #[serde(default = "default_find")]
    pub find: String,

    /// Replacement substring.
    #[serde(default = "default_replace_with")]
    pub replace_with: String,
}

impl Default for RenameConfig {
    fn default() -> Self {
        Self {
            find: default_find(),
            replace_with: default_replace_with(),
        }
    }
}

/// Run behavior configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct OptionsConfig {
    /// Which stage(s) to run (all, collect, rename).
    #[serde(default)]
    pub run_mode: RunMode,

    /// Whether to print a line for every copied file.
    #[serde(default = "default_true")]
    pub show_copied: bool,

    /// Whether to print a line for every missing candidate.
    #[serde(default = "default_true")]
    pub show_missing: bool,

    /// Whether to print a line for every renamed file.
    #[serde(default = "default_true")]
    pub show_renamed: bool,
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            run_mode: RunMode::default(),
            show_copied: true,
            show_missing: true,
            show_renamed: true,
        }
    }
}

fn default_subject_prefix() -> String {
    "Sub".to_string()
}

fn default_session_dirs() -> Vec<String> {
    vec!["Session1".to_string(), "Session2".to_string()]
}

fn default_task_dir() -> String {
    "Task".to_string()
}

fn default_conditions() -> Vec<String> {
    ["A", "B", "C", "D", "Sham"]
        .iter()
        .map(|c| c.to_string())
        .collect()
}

fn default_filename_template() -> String {
    "{subject}_Sess{session}_{condition}".to_string()
}

fn default_extension() -> String {
    ".xlsx".to_string()
}

fn default_find() -> String {
    "Sess".to_string()
}

fn default_replace_with() -> String {
    "Session".to_string()
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}. Create one from config.example.toml",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Get the base directory, which must have been configured.
    pub fn base_directory(&self) -> Result<&Path> {
        self.paths
            .base_directory
            .as_deref()
            .ok_or_else(|| Error::MissingConfig("base_directory".to_string()))
    }

    /// Get the effective destination directory.
    pub fn dest_directory(&self) -> Result<PathBuf> {
        if let Some(dest) = &self.paths.dest_directory {
            return Ok(dest.clone());
        }
        Ok(self.base_directory()?.join("BehavioralData"))
    }
}
