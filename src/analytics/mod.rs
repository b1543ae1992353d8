// Copyright (c) 2024-2027 Nervosys LLC
// SPDX-License-Identifier: Apache-2.0
//! Analytics module
//!
//! Derives operational reports from interaction and agent records:
//! per-agent daily summaries, performance rankings, workload
//! distribution, and CSV export.

pub mod daily;
pub mod export;
pub mod performance;
pub mod query;
pub mod workload;

pub use daily::*;
pub use export::*;
pub use performance::*;
pub use query::*;
pub use workload::*;

use crate::models::Interaction;

/// Partition interactions by agent id, preserving first-encountered agent
/// order. Records without an agent id are discarded; this is the single
/// grouping rule shared by all aggregation passes.
pub(crate) fn group_by_agent(interactions: &[Interaction]) -> Vec<(i64, Vec<&Interaction>)> {
    let mut order: Vec<i64> = Vec::new();
    let mut groups: std::collections::HashMap<i64, Vec<&Interaction>> =
        std::collections::HashMap::new();

    for interaction in interactions {
        let Some(agent_id) = interaction.agent_id else {
            continue;
        };
        if !groups.contains_key(&agent_id) {
            order.push(agent_id);
        }
        groups.entry(agent_id).or_default().push(interaction);
    }

    order
        .into_iter()
        .map(|id| {
            let group = groups.remove(&id).unwrap_or_default();
            (id, group)
        })
        .collect()
}
