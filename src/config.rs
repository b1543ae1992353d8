// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! CLI configuration stored on disk
//!
//! Holds default record-file locations and report paging so repeated runs
//! don't need the flags every time. Flags always win over the config.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::error::{OpsdeskError, Result};

/// Persisted opsdesk configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpsdeskConfig {
    /// Default interactions record file
    #[serde(default)]
    pub interactions_file: Option<PathBuf>,

    /// Default agents record file
    #[serde(default)]
    pub agents_file: Option<PathBuf>,

    /// Rows per report page
    #[serde(default = "default_rows_per_page")]
    pub rows_per_page: usize,
}

fn default_rows_per_page() -> usize {
    10
}

impl Default for OpsdeskConfig {
    fn default() -> Self {
        Self {
            interactions_file: None,
            agents_file: None,
            rows_per_page: default_rows_per_page(),
        }
    }
}

impl OpsdeskConfig {
    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = if cfg!(target_os = "windows") {
            dirs::config_dir().map(|p| p.join("opsdesk"))
        } else {
            dirs::home_dir().map(|p| p.join(".config/opsdesk"))
        };

        config_dir
            .map(|p| p.join("config.json"))
            .ok_or(OpsdeskError::ConfigDirNotFound)
    }

    /// Load config from disk, falling back to defaults if not present
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = fs::read_to_string(&config_path)?;
            serde_json::from_str(&content)
                .map_err(|e| OpsdeskError::InvalidRecordFormat(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to disk, creating the parent directory if needed
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, content)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = OpsdeskConfig::default();
        assert!(config.interactions_file.is_none());
        assert_eq!(config.rows_per_page, 10);
    }

    #[test]
    fn test_round_trips_through_json() {
        let config = OpsdeskConfig {
            interactions_file: Some(PathBuf::from("/data/interactions.json")),
            agents_file: Some(PathBuf::from("/data/agents.json")),
            rows_per_page: 25,
        };
        let json = serde_json::to_string(&config).unwrap();
        let loaded: OpsdeskConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded.rows_per_page, 25);
        assert_eq!(
            loaded.agents_file,
            Some(PathBuf::from("/data/agents.json"))
        );
    }

    #[test]
    fn test_missing_rows_per_page_falls_back() {
        let loaded: OpsdeskConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(loaded.rows_per_page, 10);
    }
}
