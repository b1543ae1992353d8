// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! CLI argument definitions using clap derive macros

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::analytics::{SortDirection, SortField};

/// Opsdesk - Analyze contact-center agent interactions
#[derive(Parser)]
#[command(name = "opsdesk")]
#[command(author = "Nervosys")]
#[command(version)]
#[command(about = "Aggregate, rank, and export agent interaction analytics", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    // ============================================================================
    // Report Commands
    // ============================================================================
    /// Agents daily report with filtering, sorting, and pagination
    #[command(visible_alias = "rpt")]
    Report {
        #[command(flatten)]
        data: DataArgs,

        #[command(flatten)]
        query: QueryArgs,

        /// Page number (1-based)
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Rows per page (defaults to the configured value)
        #[arg(long)]
        page_size: Option<usize>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    // ============================================================================
    // Insight Commands
    // ============================================================================
    /// Performance summary: team averages, top performer, needs support
    #[command(visible_alias = "perf")]
    Performance {
        #[command(flatten)]
        data: DataArgs,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Workload distribution across agents with capacity tiers
    Workload {
        #[command(flatten)]
        data: DataArgs,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    // ============================================================================
    // Export Commands
    // ============================================================================
    /// Export the filtered daily report as CSV
    Export {
        #[command(flatten)]
        data: DataArgs,

        #[command(flatten)]
        query: QueryArgs,

        /// Destination file
        #[arg(short, long)]
        output: PathBuf,
    },

    // ============================================================================
    // Config Commands
    // ============================================================================
    /// Show or change the persisted configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Record-file locations; flags win over the persisted config
#[derive(Args)]
pub struct DataArgs {
    /// Interactions record file (JSON)
    #[arg(long, env = "OPSDESK_INTERACTIONS")]
    pub interactions: Option<PathBuf>,

    /// Agents record file (JSON)
    #[arg(long, env = "OPSDESK_AGENTS")]
    pub agents: Option<PathBuf>,
}

/// Filter and sort state for the daily report
#[derive(Args)]
pub struct QueryArgs {
    /// Case-insensitive substring filter on agent name
    #[arg(long, default_value = "")]
    pub search: String,

    /// Show a single agent by exact name
    #[arg(long)]
    pub agent: Option<String>,

    /// Inclusive lower date bound (YYYY-MM-DD)
    #[arg(long, default_value = "")]
    pub from_date: String,

    /// Sort column
    #[arg(long, value_enum, default_value_t = SortField::Date)]
    pub sort_by: SortField,

    /// Sort direction
    #[arg(long, value_enum, default_value_t = SortDirection::Desc)]
    pub direction: SortDirection,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the current configuration and its location
    Show,
    /// Set default record files and paging
    Set {
        /// Default interactions record file
        #[arg(long)]
        interactions: Option<PathBuf>,

        /// Default agents record file
        #[arg(long)]
        agents: Option<PathBuf>,

        /// Rows per report page
        #[arg(long)]
        rows_per_page: Option<usize>,
    },
}

/// Console or machine-readable output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
