//! Collect stage: copy per-subject task spreadsheets into a flat directory.

pub mod copier;
pub mod state;
pub mod subjects;

pub use copier::{collect_files, copy_with_metadata};
pub use state::CollectState;
pub use subjects::list_subjects;
