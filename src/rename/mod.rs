//! Rename stage: substring substitution over collected filenames.

pub mod renamer;
pub mod state;

pub use renamer::rename_files;
pub use state::RenameState;
