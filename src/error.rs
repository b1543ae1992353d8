// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Error types for opsdesk

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OpsdeskError {
    #[error("Record file not found: {0}")]
    RecordFileNotFound(String),

    #[error("Invalid record format: {0}")]
    InvalidRecordFormat(String),

    #[error("Config directory not found")]
    ConfigDirNotFound,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, OpsdeskError>;
