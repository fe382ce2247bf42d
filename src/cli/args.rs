//! Command-line argument definitions using clap.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::{Config, RunMode};

/// Behavioral data organizer CLI.
#[derive(Parser, Debug)]
#[command(
    name = "behavior-organizer",
    version,
    about = "Collect and rename behavioral task spreadsheets",
    long_about = "A CLI tool to flatten per-subject/per-session task spreadsheets into a\n\
                  single directory and normalize their filenames.\n\n\
                  The collect stage copies every existing <subject>/<session>/Task\n\
                  spreadsheet into the flat destination directory; the rename stage\n\
                  rewrites a substring in the collected filenames."
)]
pub struct Args {
    /// Root directory of the study tree containing the subject folders.
    #[arg(short, long = "base-dir", env = "ORGANIZER_BASE_DIR")]
    pub base_dir: Option<PathBuf>,

    /// Flat destination directory for collected files.
    /// Defaults to <base>/BehavioralData.
    #[arg(short = 'd', long = "dest-dir")]
    pub dest_dir: Option<PathBuf>,

    /// Which stage(s) to run.
    #[arg(long, value_enum)]
    pub mode: Option<RunModeArg>,

    /// Prefix that subject directory names must start with.
    #[arg(long = "subject-prefix")]
    pub subject_prefix: Option<String>,

    /// Substring to search for in the rename stage.
    #[arg(long)]
    pub find: Option<String>,

    /// Replacement substring for the rename stage.
    #[arg(long = "replace-with")]
    pub replace_with: Option<String>,

    /// Path to configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Hide the per-file copied/renamed lines (missing candidates still warn).
    #[arg(long, short)]
    pub quiet: bool,

    /// Hide the per-candidate missing warnings.
    #[arg(long)]
    pub hide_missing: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

/// CLI run mode argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum RunModeArg {
    /// Run the collect stage, then the rename stage.
    All,
    /// Only copy files into the flat destination directory.
    Collect,
    /// Only rename already-collected files.
    Rename,
}

impl From<RunModeArg> for RunMode {
    fn from(arg: RunModeArg) -> Self {
        match arg {
            RunModeArg::All => RunMode::All,
            RunModeArg::Collect => RunMode::Collect,
            RunModeArg::Rename => RunMode::Rename,
        }
    }
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(self, config: &mut Config) {
        if let Some(base) = self.base_dir {
            config.paths.base_directory = Some(base);
        }

        if let Some(dest) = self.dest_dir {
            config.paths.dest_directory = Some(dest);
        }

        if let Some(mode) = self.mode {
            config.options.run_mode = mode.into();
        }

        if let Some(prefix) = self.subject_prefix {
            config.layout.subject_prefix = prefix;
        }

        if let Some(find) = self.find {
            config.rename.find = find;
        }

        if let Some(replace_with) = self.replace_with {
            config.rename.replace_with = replace_with;
        }

        if self.quiet {
            config.options.show_copied = false;
            config.options.show_renamed = false;
        }

        if self.hide_missing {
            config.options.show_missing = false;
        }
    }
}
