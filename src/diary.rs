// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Path-holding handle over the diary database.
//!
//! Every method opens its own connection, runs against it, and drops it before
//! returning, so no connection outlives a single operation.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use rusqlite::Connection;

use crate::db;
use crate::error::Result;
use crate::models::{DayDetail, DayTotal, DiamondType, Entry, EntryLine, RateSheet, Totals};
use crate::repo::{entries, rates};

#[derive(Debug, Clone)]
pub struct Diary {
    path: PathBuf,
}

impl Diary {
    /// Creates the handle and initializes the schema once. Later operations
    /// connect to the already initialized file.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        db::open_or_init(&path)?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn with_conn<T>(&self, f: impl FnOnce(&Connection) -> Result<T>) -> Result<T> {
        let conn = Connection::open(&self.path)?;
        f(&conn)
    }

    pub fn record(&self, date: &str, lines: &BTreeMap<DiamondType, EntryLine>) -> Result<usize> {
        self.with_conn(|c| entries::record(c, date, lines))
    }

    pub fn record_at_current_rates(
        &self,
        date: &str,
        quantities: &BTreeMap<DiamondType, i64>,
    ) -> Result<usize> {
        self.with_conn(|c| entries::record_at_current_rates(c, date, quantities))
    }

    pub fn history(&self) -> Result<Vec<DayTotal>> {
        self.with_conn(entries::history)
    }

    pub fn history_chronological(&self) -> Result<Vec<DayTotal>> {
        self.with_conn(entries::history_chronological)
    }

    pub fn totals(&self) -> Result<Totals> {
        self.with_conn(entries::totals)
    }

    pub fn detail(&self, date: &str) -> Result<DayDetail> {
        self.with_conn(|c| entries::detail(c, date))
    }

    pub fn delete_by_date(&self, date: &str) -> Result<usize> {
        self.with_conn(|c| entries::delete_by_date(c, date))
    }

    pub fn all_entries(&self) -> Result<Vec<Entry>> {
        self.with_conn(entries::all_entries)
    }

    pub fn rates(&self) -> Result<RateSheet> {
        self.with_conn(rates::get_all)
    }

    pub fn set_rates(&self, sheet: &RateSheet) -> Result<()> {
        self.with_conn(|c| rates::set_all(c, sheet))
    }
}
