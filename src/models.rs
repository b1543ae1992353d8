// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: Apache-2.0
//! Data models for interaction and agent records
//!
//! Records arrive from the upstream contact-center API with every field
//! optional; aggregation code substitutes explicit defaults rather than
//! relying on falsy coercion.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single logged agent-customer contact
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Interaction {
    /// Record identifier
    #[serde(default)]
    pub id: Option<i64>,

    /// Handling agent (records without one are excluded from per-agent aggregation)
    #[serde(default)]
    pub agent_id: Option<i64>,

    /// Customer on the other end of the contact
    #[serde(default)]
    pub customer_id: Option<i64>,

    /// Contact duration in seconds (absent contributes zero)
    #[serde(default)]
    pub length_seconds: Option<i64>,

    /// Creation timestamp; routinely absent upstream, so the daily
    /// aggregator substitutes synthetic dates instead of reading this
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Interaction {
    /// Duration with the missing-value rule applied
    pub fn length_or_zero(&self) -> i64 {
        self.length_seconds.unwrap_or(0)
    }
}

/// Directory entry naming a staff member who handles interactions
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Agent {
    #[serde(default)]
    pub id: Option<i64>,

    #[serde(default)]
    pub name: Option<String>,
}

/// Placeholder name for interactions referencing an unknown agent id
/// in performance and workload breakdowns
pub const UNKNOWN_AGENT: &str = "Unknown";

/// Placeholder name used by the daily report
pub const UNKNOWN_AGENT_DAILY: &str = "Unknown Agent";

/// Build the agent id -> name lookup used by every aggregation pass
pub fn agent_name_lookup(agents: &[Agent]) -> HashMap<i64, &str> {
    agents
        .iter()
        .filter_map(|agent| {
            let id = agent.id?;
            Some((id, agent.name.as_deref().unwrap_or(UNKNOWN_AGENT)))
        })
        .collect()
}
