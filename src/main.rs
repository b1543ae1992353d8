// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: Apache-2.0
//! Opsdesk - Main entry point
//!
//! A CLI tool to aggregate, rank, and export agent interaction analytics.

mod analytics;
mod cli;
mod commands;
mod config;
mod error;
mod models;
mod storage;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands, ConfigCommands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        // ====================================================================
        // Report Commands
        // ====================================================================
        Commands::Report {
            data,
            query,
            page,
            page_size,
            format,
        } => commands::daily_report(&data, &query, page, page_size, format),

        // ====================================================================
        // Insight Commands
        // ====================================================================
        Commands::Performance { data, format } => commands::performance_summary(&data, format),
        Commands::Workload { data, format } => commands::workload_distribution(&data, format),

        // ====================================================================
        // Export Commands
        // ====================================================================
        Commands::Export {
            data,
            query,
            output,
        } => commands::export_report(&data, &query, &output),

        // ====================================================================
        // Config Commands
        // ====================================================================
        Commands::Config { command } => match command {
            ConfigCommands::Show => commands::config_show(),
            ConfigCommands::Set {
                interactions,
                agents,
                rows_per_page,
            } => commands::config_set(interactions, agents, rows_per_page),
        },
    }
}
