//! Run mode definitions.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Which stage(s) of the run to execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunMode {
    /// Run the collect stage, then the rename stage (default).
    #[default]
    All,
    /// Only copy files into the flat destination directory.
    Collect,
    /// Only rename already-collected files.
    Rename,
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunMode::All => write!(f, "all"),
            RunMode::Collect => write!(f, "collect"),
            RunMode::Rename => write!(f, "rename"),
        }
    }
}

impl FromStr for RunMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(RunMode::All),
            "collect" => Ok(RunMode::Collect),
            "rename" => Ok(RunMode::Rename),
            _ => Err(format!("Unknown run mode: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_roundtrip() {
        for mode in [RunMode::All, RunMode::Collect, RunMode::Rename] {
            assert_eq!(mode.to_string().parse::<RunMode>().unwrap(), mode);
        }
        assert!("everything".parse::<RunMode>().is_err());
    }
}
