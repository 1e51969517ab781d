// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Error type shared by the storage layer and the repositories.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiaryError {
    /// Any failure reported by SQLite, passed through as-is.
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    /// Diamond type outside the fixed set A, B, C, D.
    #[error("Unknown diamond type '{0}', expected one of A, B, C, D")]
    UnknownType(String),

    #[error("Invalid date '{0}', expected DD/MM/YYYY")]
    InvalidDate(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DiaryError>;
