//! Behavior Organizer - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use behavior_organizer::{
    cli::Args,
    collect::{collect_files, CollectState},
    config::{validate_config, Config, RunMode},
    error::{exit_codes, Error, Result},
    output::{
        print_banner, print_collect_stats, print_config_summary, print_error, print_info,
        print_rename_stats, print_run_summary, print_warning,
    },
    rename::{rename_files, RenameState},
};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Config(_) | Error::ConfigValidation { .. } | Error::MissingConfig(_) => {
                    ExitCode::from(exit_codes::CONFIG_ERROR as u8)
                }
                Error::Collect(_) => ExitCode::from(exit_codes::COLLECT_ERROR as u8),
                Error::Rename(_) => ExitCode::from(exit_codes::RENAME_ERROR as u8),
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    // Print banner
    print_banner();

    // Load configuration
    let config_path = args.config.clone();
    let mut config = if config_path.exists() {
        Config::load(&config_path)?
    } else {
        print_warning(&format!(
            "Configuration file not found: {}",
            config_path.display()
        ));
        print_info("Using default configuration with CLI arguments");
        Config::default()
    };

    // Merge CLI arguments into config
    args.merge_into_config(&mut config);

    // Validate configuration
    validate_config(&config)?;

    // Print configuration summary
    print_config_summary(
        &config.options.run_mode.to_string(),
        &config.base_directory()?.display().to_string(),
        &config.dest_directory()?.display().to_string(),
    );

    let mut collect_state = None;
    let mut rename_state = None;

    // Execute based on run mode
    match config.options.run_mode {
        RunMode::All => {
            collect_state = Some(run_collect(&config)?);
            rename_state = Some(run_rename(&config)?);
        }
        RunMode::Collect => {
            collect_state = Some(run_collect(&config)?);
        }
        RunMode::Rename => {
            rename_state = Some(run_rename(&config)?);
        }
    }

    print_run_summary(collect_state.as_ref(), rename_state.as_ref());

    Ok(())
}

/// Run the collect stage and report its statistics.
fn run_collect(config: &Config) -> Result<CollectState> {
    print_info("Collecting task spreadsheets...");

    let mut state = CollectState::default();
    collect_files(config, &mut state)?;

    if state.subjects_found == 0 {
        print_warning(&format!(
            "No subject directories starting with '{}' found under {}",
            config.layout.subject_prefix,
            config.base_directory()?.display()
        ));
    }

    print_collect_stats(&state);
    Ok(state)
}

/// Run the rename stage and report its statistics.
fn run_rename(config: &Config) -> Result<RenameState> {
    print_info(&format!(
        "Renaming collected files ('{}' -> '{}')...",
        config.rename.find, config.rename.replace_with
    ));

    let mut state = RenameState::default();
    rename_files(config, &mut state)?;

    print_rename_stats(&state);
    Ok(state)
}
