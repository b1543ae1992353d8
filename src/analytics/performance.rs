// Copyright (c) 2024-2027 Nervosys LLC
// SPDX-License-Identifier: Apache-2.0
//! Performance analysis
//!
//! Computes lifetime per-agent metrics from raw interactions and ranks
//! agents into a top performer and an agent needing support, alongside
//! team-wide averages.

use serde::Serialize;

use super::group_by_agent;
use crate::models::{agent_name_lookup, Agent, Interaction, UNKNOWN_AGENT};

/// Lifetime metrics for one agent (not day-windowed)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgentPerformance {
    pub agent_id: i64,
    pub name: String,
    pub interaction_count: usize,
    pub total_time_seconds: i64,
    /// Rounded mean handle time
    pub average_length_seconds: i64,
}

/// Team-wide averages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TeamAverage {
    /// Rounded interactions per directory agent
    pub interactions: i64,
    /// Rounded mean interaction length across all interactions
    pub avg_length_seconds: i64,
}

/// Coarse improving/declining counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TrendEstimate {
    pub improving: usize,
    pub declining: usize,
}

/// Output of [`analyze_performance`]
#[derive(Debug, Clone, Default, Serialize)]
pub struct PerformanceReport {
    pub top_performer: Option<AgentPerformance>,
    pub needs_support: Option<AgentPerformance>,
    pub team_average: TeamAverage,
    pub trends: TrendEstimate,
    /// Agents with at least one attributable interaction
    pub active_agent_count: usize,
}

/// Rank agents and compute team averages from raw interactions.
///
/// With no interactions or no agents every field is zero/`None`; the
/// report never faults on empty input.
pub fn analyze_performance(interactions: &[Interaction], agents: &[Agent]) -> PerformanceReport {
    if interactions.is_empty() || agents.is_empty() {
        return PerformanceReport::default();
    }

    let lookup = agent_name_lookup(agents);
    let metrics: Vec<AgentPerformance> = group_by_agent(interactions)
        .into_iter()
        .map(|(agent_id, group)| {
            let interaction_count = group.len();
            let total_time_seconds: i64 = group.iter().map(|x| x.length_or_zero()).sum();
            let average_length_seconds =
                (total_time_seconds as f64 / interaction_count as f64).round() as i64;
            AgentPerformance {
                agent_id,
                name: lookup.get(&agent_id).copied().unwrap_or(UNKNOWN_AGENT).to_string(),
                interaction_count,
                total_time_seconds,
                average_length_seconds,
            }
        })
        .collect();

    // Strict comparisons keep the first-encountered agent on ties
    let top_performer = metrics
        .iter()
        .fold(None::<&AgentPerformance>, |best, agent| match best {
            Some(current) if efficiency_score(agent) <= efficiency_score(current) => Some(current),
            _ => Some(agent),
        })
        .cloned();

    let needs_support = metrics
        .iter()
        .fold(None::<&AgentPerformance>, |worst, agent| match worst {
            Some(current) if support_score(agent) >= support_score(current) => Some(current),
            _ => Some(agent),
        })
        .cloned();

    // Team totals span ALL interactions, attributed or not, and divide by
    // the full directory size; this matches the upstream dashboard.
    let total_interactions = interactions.len();
    let total_time: i64 = interactions.iter().map(|x| x.length_or_zero()).sum();
    let team_average = TeamAverage {
        interactions: (total_interactions as f64 / agents.len() as f64).round() as i64,
        avg_length_seconds: (total_time as f64 / total_interactions as f64).round() as i64,
    };

    let active_agent_count = metrics.len();

    PerformanceReport {
        top_performer,
        needs_support,
        team_average,
        trends: illustrative_trend_estimate(active_agent_count),
        active_agent_count,
    }
}

/// Volume weighted by efficiency; lower average handle time scores higher
fn efficiency_score(agent: &AgentPerformance) -> f64 {
    agent.interaction_count as f64 * (10000.0 / agent.average_length_seconds.max(1) as f64)
}

/// Lower scores flag agents for support. Low volume dominates the flag;
/// long average handle time only mildly lowers the score because the
/// duration term shrinks as length grows. Preserved as-is for behavioral
/// compatibility with the upstream dashboard; review before reuse.
fn support_score(agent: &AgentPerformance) -> f64 {
    agent.interaction_count as f64 + 20000.0 / agent.average_length_seconds.max(1) as f64
}

/// Placeholder trend counts derived from the active-agent count alone.
///
/// These are NOT measured time series; the upstream data has no history
/// to compare against, so the dashboard shows fixed proportions.
pub fn illustrative_trend_estimate(active_agent_count: usize) -> TrendEstimate {
    TrendEstimate {
        improving: (active_agent_count as f64 * 0.3).floor() as usize,
        declining: (active_agent_count as f64 * 0.15).floor() as usize,
    }
}
