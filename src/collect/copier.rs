//! The collect pass: copy-and-flatten of per-session task spreadsheets.

use std::fs::{File, FileTimes};
use std::path::Path;

use tracing::debug;

use crate::collect::state::CollectState;
use crate::collect::subjects::list_subjects;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::fs::{dest_path, ensure_dir, render_filename, source_path};
use crate::output::{print_success, print_warning};

/// Run the collect stage.
///
/// Enumerates subjects under the base directory and, for every
/// subject x session x condition candidate, copies the source spreadsheet
/// into the flat destination directory when it exists. Missing sources are
/// reported and skipped; filesystem errors on an attempted copy abort the
/// pass.
pub fn collect_files(config: &Config, state: &mut CollectState) -> Result<()> {
    let base_dir = config.base_directory()?;
    if !base_dir.is_dir() {
        return Err(Error::Collect(format!(
            "Base directory does not exist: {}",
            base_dir.display()
        )));
    }

    let dest_dir = config.dest_directory()?;
    ensure_dir(&dest_dir)?;

    let subjects = list_subjects(base_dir, &config.layout.subject_prefix)?;
    state.subjects_found = subjects.len() as u64;
    debug!("Found {} subject directories", subjects.len());

    for subject in &subjects {
        for (session, session_dir) in config.layout.session_dirs.iter().enumerate() {
            // Session numbers in filenames are 1-based
            let session = session + 1;
            for condition in &config.layout.conditions {
                let filename = render_filename(&config.layout, subject, session, condition);
                let source = source_path(config, subject, session_dir, &filename)?;
                let dest = dest_path(config, &filename)?;

                if source.exists() {
                    copy_with_metadata(&source, &dest)?;
                    state.record_copied();
                    if config.options.show_copied {
                        print_success(&format!("Copied: {}", filename));
                    }
                } else {
                    state.record_missing();
                    if config.options.show_missing {
                        print_warning(&format!("Missing: {}", filename));
                    }
                }
            }
        }
    }

    Ok(())
}

/// Copy a file and carry over its permissions and timestamps.
///
/// `std::fs::copy` already preserves permission bits; modification and
/// access times are applied afterwards from the source metadata.
pub fn copy_with_metadata(source: &Path, dest: &Path) -> Result<()> {
    std::fs::copy(source, dest)?;

    let metadata = std::fs::metadata(source)?;
    let mut times = FileTimes::new();
    if let Ok(modified) = metadata.modified() {
        times = times.set_modified(modified);
    }
    if let Ok(accessed) = metadata.accessed() {
        times = times.set_accessed(accessed);
    }

    let dest_file = File::options().write(true).open(dest)?;
    dest_file.set_times(times)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn make_test_config(base: &Path) -> Config {
        let mut config = Config::default();
        config.paths.base_directory = Some(base.to_path_buf());
        config
    }

    fn plant_source(base: &Path, subject: &str, session_dir: &str, filename: &str, body: &[u8]) {
        let dir = base.join(subject).join(session_dir).join("Task");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(filename), body).unwrap();
    }

    #[test]
    fn test_collects_existing_sources() {
        let tmp = tempfile::tempdir().unwrap();
        let config = make_test_config(tmp.path());

        plant_source(tmp.path(), "Sub01", "Session1", "Sub01_Sess01_A.xlsx", b"alpha");
        plant_source(tmp.path(), "Sub01", "Session2", "Sub01_Sess02_Sham.xlsx", b"sham");

        let mut state = CollectState::default();
        collect_files(&config, &mut state).unwrap();

        let dest = tmp.path().join("BehavioralData");
        assert_eq!(
            fs::read(dest.join("Sub01_Sess01_A.xlsx")).unwrap(),
            b"alpha"
        );
        assert_eq!(
            fs::read(dest.join("Sub01_Sess02_Sham.xlsx")).unwrap(),
            b"sham"
        );

        assert_eq!(state.subjects_found, 1);
        // 1 subject x 2 sessions x 5 conditions
        assert_eq!(state.candidates_examined, 10);
        assert_eq!(state.copied_count, 2);
        assert_eq!(state.missing_count, 8);
    }

    #[test]
    fn test_missing_source_creates_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let config = make_test_config(tmp.path());
        fs::create_dir(tmp.path().join("Sub02")).unwrap();

        let mut state = CollectState::default();
        collect_files(&config, &mut state).unwrap();

        let dest = tmp.path().join("BehavioralData");
        assert!(dest.is_dir());
        assert_eq!(fs::read_dir(&dest).unwrap().count(), 0);
        assert_eq!(state.copied_count, 0);
        assert_eq!(state.missing_count, 10);
    }

    #[test]
    fn test_rerun_overwrites_with_same_bytes() {
        let tmp = tempfile::tempdir().unwrap();
        let config = make_test_config(tmp.path());
        plant_source(tmp.path(), "Sub01", "Session1", "Sub01_Sess01_B.xlsx", b"beta");

        let mut state = CollectState::default();
        collect_files(&config, &mut state).unwrap();
        collect_files(&config, &mut state).unwrap();

        let dest = tmp.path().join("BehavioralData").join("Sub01_Sess01_B.xlsx");
        assert_eq!(fs::read(dest).unwrap(), b"beta");
    }

    #[test]
    fn test_copy_with_metadata_preserves_mtime() {
        let tmp = tempfile::tempdir().unwrap();
        let source = tmp.path().join("src.xlsx");
        let dest = tmp.path().join("dst.xlsx");
        fs::write(&source, b"payload").unwrap();

        copy_with_metadata(&source, &dest).unwrap();

        assert_eq!(fs::read(&dest).unwrap(), b"payload");
        let src_mtime = fs::metadata(&source).unwrap().modified().unwrap();
        let dst_mtime = fs::metadata(&dest).unwrap().modified().unwrap();
        assert_eq!(src_mtime, dst_mtime);
    }

    #[test]
    fn test_missing_base_dir_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let config = make_test_config(&tmp.path().join("gone"));

        let mut state = CollectState::default();
        assert!(matches!(
            collect_files(&config, &mut state),
            Err(Error::Collect(_))
        ));
    }

    #[test]
    fn test_dest_directory_honored() {
        let tmp = tempfile::tempdir().unwrap();
        let mut config = make_test_config(tmp.path());
        let elsewhere = tmp.path().join("flat");
        config.paths.dest_directory = Some(PathBuf::from(&elsewhere));

        plant_source(tmp.path(), "Sub05", "Session1", "Sub05_Sess01_C.xlsx", b"c");

        let mut state = CollectState::default();
        collect_files(&config, &mut state).unwrap();

        assert!(elsewhere.join("Sub05_Sess01_C.xlsx").is_file());
    }
}
