// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: Apache-2.0
//! Record file loading
//!
//! The record source is a pair of JSON files exported from the
//! contact-center API. Files hold either a bare array or the
//! `{ "data": [...] }` envelope the API responds with.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{OpsdeskError, Result};
use crate::models::{Agent, Interaction};

#[derive(Deserialize)]
#[serde(untagged)]
enum RecordFile<T> {
    Enveloped { data: Vec<T> },
    Bare(Vec<T>),
}

fn load_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    if !path.exists() {
        return Err(OpsdeskError::RecordFileNotFound(
            path.display().to_string(),
        ));
    }

    let content = fs::read_to_string(path)?;
    let parsed: RecordFile<T> = serde_json::from_str(&content)
        .map_err(|e| OpsdeskError::InvalidRecordFormat(format!("{}: {}", path.display(), e)))?;

    Ok(match parsed {
        RecordFile::Enveloped { data } => data,
        RecordFile::Bare(records) => records,
    })
}

/// Load interaction records from a JSON file
pub fn load_interactions(path: &Path) -> Result<Vec<Interaction>> {
    let interactions = load_records(path)?;
    log::debug!(
        "Loaded {} interaction(s) from {}",
        interactions.len(),
        path.display()
    );
    Ok(interactions)
}

/// Load the agent directory from a JSON file
pub fn load_agents(path: &Path) -> Result<Vec<Agent>> {
    let agents = load_records(path)?;
    log::debug!("Loaded {} agent(s) from {}", agents.len(), path.display());
    Ok(agents)
}
