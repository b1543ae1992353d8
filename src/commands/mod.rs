// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: Apache-2.0
//! Command implementations

mod config_cmds;
mod insights;
mod report;

pub use config_cmds::*;
pub use insights::*;
pub use report::*;

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::cli::DataArgs;
use crate::config::OpsdeskConfig;

/// Format a duration as minutes and seconds
pub(crate) fn format_duration(seconds: i64) -> String {
    let minutes = seconds / 60;
    let remaining_seconds = seconds % 60;
    format!("{}m {}s", minutes, remaining_seconds)
}

/// Resolve record-file paths: flags first, then the persisted config
pub(crate) fn resolve_record_files(
    data: &DataArgs,
    config: &OpsdeskConfig,
) -> Result<(PathBuf, PathBuf)> {
    let interactions = data
        .interactions
        .clone()
        .or_else(|| config.interactions_file.clone())
        .context("No interactions file; pass --interactions or run `opsdesk config set`")?;
    let agents = data
        .agents
        .clone()
        .or_else(|| config.agents_file.clone())
        .context("No agents file; pass --agents or run `opsdesk config set`")?;
    Ok((interactions, agents))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "0m 0s");
        assert_eq!(format_duration(59), "0m 59s");
        assert_eq!(format_duration(70), "1m 10s");
        assert_eq!(format_duration(600), "10m 0s");
    }
}
