//! Statistics reporting.

use console::style;

use crate::collect::CollectState;
use crate::rename::RenameState;

/// Print statistics for the collect stage.
pub fn print_collect_stats(state: &CollectState) {
    println!();
    println!("{}", style("Collect stage:").bold());
    println!("  Subjects:   {}", state.subjects_found);
    println!("  Candidates: {}", state.candidates_examined);
    println!("  Copied:     {}", style(state.copied_count).green());
    if state.missing_count > 0 {
        println!("  Missing:    {}", style(state.missing_count).yellow());
    } else {
        println!("  Missing:    0");
    }
}

/// Print statistics for the rename stage.
pub fn print_rename_stats(state: &RenameState) {
    println!();
    println!("{}", style("Rename stage:").bold());
    println!("  Scanned:  {}", state.entries_scanned);
    println!("  Renamed:  {}", style(state.renamed_count).green());
    println!("  No match: {}", state.no_match_count);
    println!("  Ignored:  {}", state.ignored_count);
    if state.skipped_missing_count > 0 {
        println!(
            "  Skipped:  {} (missing)",
            style(state.skipped_missing_count).yellow()
        );
    }
}

/// Print the closing run summary.
pub fn print_run_summary(collect: Option<&CollectState>, rename: Option<&RenameState>) {
    println!();
    println!("{}", style("═".repeat(50)).dim());
    println!("{}", style("Run summary:").bold());
    if let Some(state) = collect {
        println!(
            "  Collected {} of {} candidates",
            state.copied_count, state.candidates_examined
        );
    }
    if let Some(state) = rename {
        println!(
            "  Renamed {} of {} entries",
            state.renamed_count, state.entries_scanned
        );
    }
    println!("{}", style("═".repeat(50)).dim());
}
