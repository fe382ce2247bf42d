//! The rename pass: substring substitution over collected filenames.

use tracing::debug;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::fs::{is_ignored, renamed_filename};
use crate::output::{print_success, print_warning};
use crate::rename::state::RenameState;

/// Run the rename stage.
///
/// Scans the destination directory once. Hidden files, AppleDouble sidecars,
/// and entries without the configured extension are skipped unconditionally.
/// Remaining entries containing the search substring are renamed in place.
/// An entry that vanishes between the scan and its rename is reported and
/// skipped rather than failing the pass.
pub fn rename_files(config: &Config, state: &mut RenameState) -> Result<()> {
    let dest_dir = config.dest_directory()?;
    if !dest_dir.is_dir() {
        return Err(Error::Rename(format!(
            "Destination directory does not exist: {}. Run the collect stage first.",
            dest_dir.display()
        )));
    }

    // Snapshot and sort so report order is deterministic and renamed files
    // are never revisited within the pass.
    let mut names = Vec::new();
    for entry in std::fs::read_dir(&dest_dir)? {
        let entry = entry?;
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(raw) => debug!("Skipping non-UTF-8 entry: {:?}", raw),
        }
    }
    names.sort();

    for name in names {
        if is_ignored(&name, &config.layout.extension) {
            debug!("Ignoring entry: {}", name);
            state.record_ignored();
            continue;
        }

        let Some(new_name) =
            renamed_filename(&name, &config.rename.find, &config.rename.replace_with)
        else {
            state.record_no_match();
            continue;
        };

        let source = dest_dir.join(&name);
        if !source.exists() {
            state.record_skipped_missing();
            print_warning(&format!("Skipping missing: {}", source.display()));
            continue;
        }

        std::fs::rename(&source, dest_dir.join(&new_name))?;
        state.record_renamed();
        if config.options.show_renamed {
            print_success(&format!("Renamed: {} -> {}", name, new_name));
        }
    }

    Ok(())
}
