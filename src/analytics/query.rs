// Copyright (c) 2024-2027 Nervosys LLC
// SPDX-License-Identifier: Apache-2.0
//! Report query engine
//!
//! Filters, sorts, and paginates daily summaries. Filter, sort, and page
//! state are explicit immutable structs passed in on every call, so any
//! view of the report can be replayed exactly.

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashSet;

use super::daily::AgentDailySummary;

/// Column to sort the daily report by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SortField {
    Date,
    AgentName,
    TotalInteractions,
    AverageLengthSeconds,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Row filters, applied before sorting and pagination
#[derive(Debug, Clone, Default)]
pub struct ReportFilter {
    /// Case-insensitive substring match on agent name; empty matches all
    pub search_term: String,
    /// Exact agent-name match; `None` means "all agents"
    pub selected_agent: Option<String>,
    /// Inclusive ISO-date lower bound; empty disables the filter
    pub min_date: String,
}

/// Sort state for the daily report
#[derive(Debug, Clone, Copy)]
pub struct ReportSort {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for ReportSort {
    fn default() -> Self {
        Self {
            field: SortField::Date,
            direction: SortDirection::Desc,
        }
    }
}

/// 1-based pagination request
#[derive(Debug, Clone, Copy)]
pub struct PageRequest {
    pub page: usize,
    pub page_size: usize,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 10,
        }
    }
}

/// Summary statistics over the filtered (pre-pagination) row set
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReportStats {
    /// Distinct agents in the filtered set
    pub agent_count: usize,
    /// Sum of per-row interaction counts
    pub total_interactions: usize,
    /// Rounded interactions per agent; 0 when no agents match
    pub avg_interactions_per_agent: i64,
    /// Rounded mean of per-row average lengths; 0 when no rows match
    pub avg_length_seconds: i64,
}

/// One page of the daily report plus its pre-pagination statistics
#[derive(Debug, Clone, Serialize)]
pub struct ReportPage {
    pub rows: Vec<AgentDailySummary>,
    pub stats: ReportStats,
    /// Filtered row count before pagination
    pub total_rows: usize,
}

/// Apply filters, sort, and pagination to daily summaries.
///
/// Fixed pipeline: search filter, agent filter, date filter, stable sort,
/// page slice. Statistics are computed over the filtered set before the
/// page slice, and a page past the end yields empty rows rather than an
/// error.
pub fn query_daily_summaries(
    summaries: &[AgentDailySummary],
    filter: &ReportFilter,
    sort: &ReportSort,
    page: &PageRequest,
) -> ReportPage {
    let mut filtered: Vec<AgentDailySummary> = summaries
        .iter()
        .filter(|row| {
            filter.search_term.is_empty()
                || row
                    .agent_name
                    .to_lowercase()
                    .contains(&filter.search_term.to_lowercase())
        })
        .filter(|row| match &filter.selected_agent {
            Some(agent) => row.agent_name == *agent,
            None => true,
        })
        .filter(|row| filter.min_date.is_empty() || row.date.as_str() >= filter.min_date.as_str())
        .cloned()
        .collect();

    let stats = summary_stats(&filtered);
    let total_rows = filtered.len();

    // Vec::sort_by is stable, so tied rows keep their pre-sort order
    filtered.sort_by(|a, b| {
        let ordering = compare_rows(a, b, sort.field);
        match sort.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });

    let page_number = page.page.max(1);
    let start = (page_number - 1).saturating_mul(page.page_size);
    let rows = if start >= filtered.len() {
        Vec::new()
    } else {
        let end = (start + page.page_size).min(filtered.len());
        filtered[start..end].to_vec()
    };

    ReportPage {
        rows,
        stats,
        total_rows,
    }
}

fn compare_rows(a: &AgentDailySummary, b: &AgentDailySummary, field: SortField) -> Ordering {
    match field {
        SortField::Date => parse_date(&a.date).cmp(&parse_date(&b.date)),
        SortField::AgentName => a.agent_name.cmp(&b.agent_name),
        SortField::TotalInteractions => a.total_interactions.cmp(&b.total_interactions),
        SortField::AverageLengthSeconds => {
            a.average_length_seconds.cmp(&b.average_length_seconds)
        }
    }
}

// Unparseable dates order before all valid ones
fn parse_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

fn summary_stats(filtered: &[AgentDailySummary]) -> ReportStats {
    let agent_count = filtered
        .iter()
        .map(|row| row.agent_id)
        .collect::<HashSet<_>>()
        .len();
    let total_interactions: usize = filtered.iter().map(|row| row.total_interactions).sum();

    let avg_interactions_per_agent = if agent_count > 0 {
        (total_interactions as f64 / agent_count as f64).round() as i64
    } else {
        0
    };

    let avg_length_seconds = if !filtered.is_empty() {
        let total_length: i64 = filtered.iter().map(|row| row.average_length_seconds).sum();
        (total_length as f64 / filtered.len() as f64).round() as i64
    } else {
        0
    };

    ReportStats {
        agent_count,
        total_interactions,
        avg_interactions_per_agent,
        avg_length_seconds,
    }
}
