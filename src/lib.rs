//! Behavior Organizer - organize behavioral task spreadsheets on disk
//!
//! This library flattens a nested study tree of per-subject, per-session task
//! spreadsheets into a single directory and normalizes the collected
//! filenames.
//!
//! # Features
//!
//! - Collect stage: copy every existing `<subject>/<session>/Task`
//!   spreadsheet into a flat destination directory, preserving permissions
//!   and timestamps
//! - Rename stage: rewrite a literal substring in collected filenames
//!   (`Sess` -> `Session` by default), skipping hidden and sidecar files
//! - Missing sources are reported and skipped, never fatal
//! - Layout, naming template, and substitution pair are all configurable
//!
//! # Example
//!
//! ```no_run
//! use std::path::PathBuf;
//! use behavior_organizer::{collect_files, rename_files, CollectState, Config, RenameState};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut config = Config::default();
//!     config.paths.base_directory = Some(PathBuf::from("/data/study"));
//!
//!     let mut collect_state = CollectState::default();
//!     collect_files(&config, &mut collect_state)?;
//!
//!     let mut rename_state = RenameState::default();
//!     rename_files(&config, &mut rename_state)?;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod collect;
pub mod config;
pub mod error;
pub mod fs;
pub mod output;
pub mod rename;

// Re-exports for convenience
pub use collect::{collect_files, CollectState};
pub use config::{Config, RunMode};
pub use error::{Error, Result};
pub use rename::{rename_files, RenameState};
