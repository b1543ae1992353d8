// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: Apache-2.0
//! Config command implementations

use anyhow::{Context, Result};
use colored::*;
use std::path::PathBuf;

use crate::config::OpsdeskConfig;

/// Print the current configuration and where it lives
pub fn config_show() -> Result<()> {
    let config = OpsdeskConfig::load().context("Failed to load config")?;
    let path = OpsdeskConfig::config_path()?;

    println!("\n{} Configuration ({})", "[*]".blue(), path.display());
    println!(
        "  interactions_file: {}",
        display_path(&config.interactions_file)
    );
    println!("  agents_file:       {}", display_path(&config.agents_file));
    println!("  rows_per_page:     {}", config.rows_per_page);

    Ok(())
}

/// Update and persist configuration values
pub fn config_set(
    interactions: Option<PathBuf>,
    agents: Option<PathBuf>,
    rows_per_page: Option<usize>,
) -> Result<()> {
    let mut config = OpsdeskConfig::load().context("Failed to load config")?;

    if let Some(path) = interactions {
        config.interactions_file = Some(path);
    }
    if let Some(path) = agents {
        config.agents_file = Some(path);
    }
    if let Some(rows) = rows_per_page {
        config.rows_per_page = rows.max(1);
    }

    config.save().context("Failed to save config")?;
    println!("{} Configuration saved", "[OK]".green());

    Ok(())
}

fn display_path(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(not set)".to_string())
}
