//! Filesystem module.
//!
//! Provides:
//! - Path construction for the study tree and the flat destination
//! - Filename rendering and rename computation

pub mod naming;
pub mod paths;

pub use naming::{is_ignored, render_filename, renamed_filename};
pub use paths::{dest_path, ensure_dir, source_path};
