// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: Apache-2.0
//! Opsdesk - Library
//!
//! Derives operational analytics from flat contact-center records: two
//! input collections (interaction events and an agent directory) feed a
//! set of pure derivation passes.
//!
//! - [`analytics::compute_daily_summaries`] - per-agent daily summaries
//!   over a synthetic recent-day window
//! - [`analytics::query_daily_summaries`] - filter/sort/paginate those
//!   summaries with pre-pagination statistics
//! - [`analytics::analyze_performance`] - lifetime rankings and team
//!   averages
//! - [`analytics::distribute_workload`] - volume shares and capacity
//!   tiers
//! - [`analytics::export_rows`] - delimited text export
//!
//! Every pass is a pure function over its input snapshot; nothing derived
//! is cached or persisted.

pub mod analytics;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod models;
pub mod storage;

// Re-export commonly used items
pub use analytics::{
    analyze_performance, compute_daily_summaries, daily_report_csv, distribute_workload,
    export_rows, query_daily_summaries, AgentDailySummary, AgentPerformance, PageRequest,
    PerformanceReport, ReportFilter, ReportPage, ReportSort, ReportStats, SortDirection,
    SortField, TierCounts, WorkloadEntry, WorkloadReport, WorkloadTier,
};
pub use cli::{Cli, Commands, ConfigCommands, OutputFormat};
pub use config::OpsdeskConfig;
pub use error::OpsdeskError;
pub use models::{agent_name_lookup, Agent, Interaction};
pub use storage::{load_agents, load_interactions};
