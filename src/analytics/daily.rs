// Copyright (c) 2024-2027 Nervosys LLC
// SPDX-License-Identifier: Apache-2.0
//! Daily aggregation
//!
//! Upstream interaction records carry no usable `created_at`, so the daily
//! report spreads each agent's interactions over a synthetic window of
//! recent calendar days, weighting toward the most recent days.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::group_by_agent;
use crate::models::{agent_name_lookup, Agent, Interaction, UNKNOWN_AGENT_DAILY};

/// Length of the synthetic report window in calendar days
pub const REPORT_WINDOW_DAYS: usize = 7;

/// Target interaction volume per synthesized day; drives how many days an
/// agent's records are spread across
const INTERACTIONS_PER_DAY: usize = 3;

/// One agent's activity on one (synthesized) calendar day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentDailySummary {
    /// ISO date (YYYY-MM-DD)
    pub date: String,
    pub agent_id: i64,
    pub agent_name: String,
    /// Always >= 1; empty days are never emitted
    pub total_interactions: usize,
    /// Rounded mean duration over the day's interactions
    pub average_length_seconds: i64,
}

/// Synthesize the report window: `REPORT_WINDOW_DAYS` dates ending at
/// `today`, most recent first
pub fn synthetic_report_dates(today: NaiveDate) -> Vec<String> {
    (0..REPORT_WINDOW_DAYS)
        .map(|i| (today - Duration::days(i as i64)).format("%Y-%m-%d").to_string())
        .collect()
}

/// Derive per-agent daily summaries from raw records.
///
/// `today` anchors the synthetic window and is injected rather than read
/// from the clock so reruns over the same inputs are bit-identical.
pub fn compute_daily_summaries(
    interactions: &[Interaction],
    agents: &[Agent],
    today: NaiveDate,
) -> Vec<AgentDailySummary> {
    let lookup = agent_name_lookup(agents);
    let dates = synthetic_report_dates(today);

    let mut summaries = Vec::new();

    for (agent_id, group) in group_by_agent(interactions) {
        let agent_name = lookup
            .get(&agent_id)
            .copied()
            .unwrap_or(UNKNOWN_AGENT_DAILY)
            .to_string();

        let total = group.len();
        let days_with_data = REPORT_WINDOW_DAYS.min(total.div_ceil(INTERACTIONS_PER_DAY).max(1));
        let day_step = total / days_with_data;

        for (i, date) in dates.iter().take(days_with_data).enumerate() {
            // Recent days get a larger quota. The quota can overshoot the
            // per-day offset step, so the block is capped at the next
            // day's offset: each interaction lands on at most one day.
            // TODO: replace this heuristic with real created_at grouping
            // once the upstream API starts populating timestamps.
            let quota = (((total as f64 / days_with_data as f64)
                * (days_with_data - i) as f64
                / days_with_data as f64)
                * 2.0)
                .floor() as usize;
            let quota = quota.max(1);

            let start = i * day_step;
            let end = if i + 1 < days_with_data {
                (start + quota).min((i + 1) * day_step)
            } else {
                (start + quota).min(total)
            };

            if end <= start {
                continue;
            }

            let block = &group[start..end];
            let total_length: i64 = block.iter().map(|x| x.length_or_zero()).sum();
            let average_length_seconds =
                (total_length as f64 / block.len() as f64).round() as i64;

            summaries.push(AgentDailySummary {
                date: date.clone(),
                agent_id,
                agent_name: agent_name.clone(),
                total_interactions: block.len(),
                average_length_seconds,
            });
        }
    }

    summaries
}
