// Copyright (c) 2024-2027 Nervosys LLC
// SPDX-License-Identifier: Apache-2.0
//! Workload distribution
//!
//! Computes each agent's share of total interaction volume and classifies
//! agents into coarse capacity tiers relative to the team average.

use serde::Serialize;

use super::group_by_agent;
use crate::models::{agent_name_lookup, Agent, Interaction, UNKNOWN_AGENT};

/// At most this many highest-volume agents are retained in the breakdown
pub const MAX_WORKLOAD_ENTRIES: usize = 8;

/// Capacity tier relative to the team average
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkloadTier {
    Low,
    Medium,
    High,
}

/// One agent's share of the interaction volume
#[derive(Debug, Clone, Serialize)]
pub struct WorkloadEntry {
    pub agent_id: i64,
    pub agent_name: String,
    pub interaction_count: usize,
    pub percentage_of_total: f64,
    pub tier: WorkloadTier,
}

/// Tier counts over the retained entries only; agents beyond the top-8
/// cutoff are deliberately not represented
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TierCounts {
    pub overloaded: usize,
    pub balanced: usize,
    pub underutilized: usize,
}

/// Output of [`distribute_workload`]
#[derive(Debug, Clone, Default, Serialize)]
pub struct WorkloadReport {
    pub entries: Vec<WorkloadEntry>,
    pub tier_counts: TierCounts,
}

/// Break down interaction volume per agent with capacity tiers.
///
/// Empty interactions or an empty directory yield an empty report rather
/// than dividing by zero.
pub fn distribute_workload(interactions: &[Interaction], agents: &[Agent]) -> WorkloadReport {
    if interactions.is_empty() || agents.is_empty() {
        return WorkloadReport::default();
    }

    let lookup = agent_name_lookup(agents);
    let total_interactions = interactions.len();
    let average_per_agent = total_interactions as f64 / agents.len() as f64;

    let mut entries: Vec<WorkloadEntry> = group_by_agent(interactions)
        .into_iter()
        .map(|(agent_id, group)| {
            let interaction_count = group.len();
            let percentage_of_total =
                interaction_count as f64 / total_interactions as f64 * 100.0;
            let tier = if interaction_count as f64 > average_per_agent * 1.5 {
                WorkloadTier::High
            } else if (interaction_count as f64) < average_per_agent * 0.5 {
                WorkloadTier::Low
            } else {
                WorkloadTier::Medium
            };

            WorkloadEntry {
                agent_id,
                agent_name: lookup
                    .get(&agent_id)
                    .copied()
                    .unwrap_or(UNKNOWN_AGENT)
                    .to_string(),
                interaction_count,
                percentage_of_total,
                tier,
            }
        })
        .collect();

    // Stable sort: equal-volume agents keep first-encountered order
    entries.sort_by(|a, b| b.interaction_count.cmp(&a.interaction_count));
    entries.truncate(MAX_WORKLOAD_ENTRIES);

    let mut tier_counts = TierCounts::default();
    for entry in &entries {
        match entry.tier {
            WorkloadTier::High => tier_counts.overloaded += 1,
            WorkloadTier::Medium => tier_counts.balanced += 1,
            WorkloadTier::Low => tier_counts.underutilized += 1,
        }
    }

    WorkloadReport {
        entries,
        tier_counts,
    }
}
