//! Filename generation and manipulation.

use crate::config::LayoutConfig;

/// Render the expected filename for one (subject, session, condition) triple.
///
/// `session` is the 1-based session index; it renders zero-padded to two
/// digits, so session 1 of subject "Sub01" under the default template becomes
/// "Sub01_Sess01_A.xlsx".
pub fn render_filename(
    layout: &LayoutConfig,
    subject: &str,
    session: usize,
    condition: &str,
) -> String {
    let name = layout
        .filename_template
        .replace("{subject}", subject)
        .replace("{session}", &format!("{:02}", session))
        .replace("{condition}", condition);

    format!("{}{}", name, layout.extension)
}

/// Check whether a directory entry should be ignored by the rename stage.
///
/// Hidden files (".DS_Store") and AppleDouble sidecars ("._Sub01_...") are
/// skipped unconditionally, as is anything without the configured extension.
pub fn is_ignored(filename: &str, extension: &str) -> bool {
    filename.starts_with("._") || filename.starts_with('.') || !filename.ends_with(extension)
}

/// Compute the post-rename filename, if the name contains the search
/// substring.
///
/// Every occurrence of `find` is replaced, except occurrences that already
/// sit at the start of `replace_with` (relevant when the replacement embeds
/// the search string, as "Sess" -> "Session" does). That exception is what
/// makes a second pass over an already-renamed directory a no-op.
pub fn renamed_filename(filename: &str, find: &str, replace_with: &str) -> Option<String> {
    let mut out = String::with_capacity(filename.len());
    let mut rest = filename;
    let mut changed = false;

    while let Some(pos) = rest.find(find) {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        if replace_with.starts_with(find) && tail.starts_with(replace_with) {
            // Already renamed here; step over the replacement untouched.
            rest = &tail[replace_with.len()..];
        } else {
            changed = true;
            rest = &tail[find.len()..];
        }
        out.push_str(replace_with);
    }
    out.push_str(rest);

    changed.then_some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_filename_default_template() {
        let layout = LayoutConfig::default();
        assert_eq!(
            render_filename(&layout, "Sub01", 1, "A"),
            "Sub01_Sess01_A.xlsx"
        );
        assert_eq!(
            render_filename(&layout, "Sub02", 2, "Sham"),
            "Sub02_Sess02_Sham.xlsx"
        );
    }

    #[test]
    fn test_render_filename_pads_session() {
        let layout = LayoutConfig::default();
        let name = render_filename(&layout, "Sub10", 10, "B");
        assert_eq!(name, "Sub10_Sess10_B.xlsx");
    }

    #[test]
    fn test_render_filename_custom_template() {
        let layout = LayoutConfig {
            filename_template: "{condition}-{subject}-s{session}".to_string(),
            extension: ".csv".to_string(),
            ..LayoutConfig::default()
        };
        assert_eq!(render_filename(&layout, "Sub03", 2, "D"), "D-Sub03-s02.csv");
    }

    #[test]
    fn test_is_ignored_hidden_and_sidecar() {
        assert!(is_ignored(".DS_Store", ".xlsx"));
        assert!(is_ignored("._Sub01_Sess01_A.xlsx", ".xlsx"));
        assert!(is_ignored(".hidden.xlsx", ".xlsx"));
    }

    #[test]
    fn test_is_ignored_wrong_extension() {
        assert!(is_ignored("notes.txt", ".xlsx"));
        assert!(is_ignored("Sub01_Sess01_A.xls", ".xlsx"));
        assert!(!is_ignored("Sub01_Sess01_A.xlsx", ".xlsx"));
    }

    #[test]
    fn test_renamed_filename() {
        assert_eq!(
            renamed_filename("Sub01_Sess01_A.xlsx", "Sess", "Session"),
            Some("Sub01_Session01_A.xlsx".to_string())
        );
        assert_eq!(
            renamed_filename("Sub01_Visit01_A.xlsx", "Sess", "Session"),
            None
        );
    }

    #[test]
    fn test_renamed_filename_second_pass_is_noop() {
        let first = renamed_filename("Sub02_Sess02_Sham.xlsx", "Sess", "Session").unwrap();
        assert_eq!(first, "Sub02_Session02_Sham.xlsx");
        assert_eq!(renamed_filename(&first, "Sess", "Session"), None);
    }

    #[test]
    fn test_renamed_filename_mixed_occurrences() {
        // One occurrence already renamed, one not
        assert_eq!(
            renamed_filename("Session1_Sess01.xlsx", "Sess", "Session"),
            Some("Session1_Session01.xlsx".to_string())
        );
    }

    #[test]
    fn test_renamed_filename_disjoint_replacement() {
        assert_eq!(
            renamed_filename("Sub01_Sess01_A.xlsx", "Sess", "Visit"),
            Some("Sub01_Visit01_A.xlsx".to_string())
        );
    }
}
