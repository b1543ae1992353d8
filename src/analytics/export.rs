// Copyright (c) 2024-2027 Nervosys LLC
// SPDX-License-Identifier: Apache-2.0
//! Report export
//!
//! Serializes ordered report rows to a delimited text blob. Pure
//! formatting: no filtering, no computation, no quoting of embedded
//! delimiters.

use super::daily::AgentDailySummary;

/// Column header of the daily report CSV
pub const DAILY_REPORT_HEADER: [&str; 4] = [
    "Date",
    "Agent",
    "Total Interactions",
    "Average Length (seconds)",
];

/// Render header and rows as comma-separated lines. No trailing newline.
pub fn export_rows(header: &[&str], rows: &[Vec<String>]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(header.join(","));
    for row in rows {
        lines.push(row.join(","));
    }
    lines.join("\n")
}

/// Render daily summaries under the standard report header
pub fn daily_report_csv(rows: &[AgentDailySummary]) -> String {
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            vec![
                row.date.clone(),
                row.agent_name.clone(),
                row.total_interactions.to_string(),
                row.average_length_seconds.to_string(),
            ]
        })
        .collect();
    export_rows(&DAILY_REPORT_HEADER, &cells)
}
