//! Subject directory enumeration.

use std::path::Path;

use tracing::debug;

use crate::error::Result;

/// List subject directories directly under the base directory.
///
/// An entry qualifies if its name starts with `prefix` and it is a directory.
/// Entries with non-UTF-8 names are skipped. The result is sorted so that the
/// per-candidate report order is deterministic.
pub fn list_subjects(base_dir: &Path, prefix: &str) -> Result<Vec<String>> {
    let mut subjects = Vec::new();

    for entry in std::fs::read_dir(base_dir)? {
        let entry = entry?;

        let name = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(raw) => {
                debug!("Skipping non-UTF-8 entry: {:?}", raw);
                continue;
            }
        };

        if !name.starts_with(prefix) {
            continue;
        }

        if !entry.path().is_dir() {
            debug!("Skipping non-directory entry: {}", name);
            continue;
        }

        subjects.push(name);
    }

    subjects.sort();
    Ok(subjects)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_lists_only_prefixed_directories() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir(tmp.path().join("Sub01")).unwrap();
        fs::create_dir(tmp.path().join("Sub02")).unwrap();
        fs::create_dir(tmp.path().join("BehavioralData")).unwrap();
        fs::create_dir(tmp.path().join("pilot03")).unwrap();
        // A file with the prefix must not count as a subject
        fs::write(tmp.path().join("Sub99.txt"), b"").unwrap();

        let subjects = list_subjects(tmp.path(), "Sub").unwrap();
        assert_eq!(subjects, vec!["Sub01", "Sub02"]);
    }

    #[test]
    fn test_sorted_output() {
        let tmp = tempfile::tempdir().unwrap();
        for name in ["Sub10", "Sub02", "Sub01"] {
            fs::create_dir(tmp.path().join(name)).unwrap();
        }

        let subjects = list_subjects(tmp.path(), "Sub").unwrap();
        assert_eq!(subjects, vec!["Sub01", "Sub02", "Sub10"]);
    }

    #[test]
    fn test_empty_base_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let subjects = list_subjects(tmp.path(), "Sub").unwrap();
        assert!(subjects.is_empty());
    }

    #[test]
    fn test_missing_base_dir_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let gone = tmp.path().join("nope");
        assert!(list_subjects(&gone, "Sub").is_err());
    }
}
