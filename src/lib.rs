// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod cli;
pub mod commands;
pub mod config;
pub mod db;
pub mod diary;
pub mod error;
pub mod models;
pub mod repo;
pub mod utils;

pub use diary::Diary;
pub use error::{DiaryError, Result};
pub use models::{DayDetail, DayTotal, DiamondType, Entry, EntryLine, RateSheet, Totals};
