// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rusqlite::{Connection, params};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DiaryError, Result};
use crate::models::DiamondType;

pub(crate) static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "HiraDiary", "hira-diary"));

pub fn db_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2).ok_or_else(|| {
        DiaryError::Config("Could not determine platform-specific data dir".into())
    })?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir)?;
    Ok(data_dir.join("hira_diary.sqlite"))
}

/// Opens the database at `path` and makes sure the schema exists.
pub fn open_or_init(path: &Path) -> Result<Connection> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let conn = Connection::open(path)?;
    init_schema(&conn)?;
    Ok(conn)
}

/// Creates both tables if absent and seeds a zero rate per diamond type when
/// the rate table is empty. Running it again is a no-op.
pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
    CREATE TABLE IF NOT EXISTS entries(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        date TEXT,
        type TEXT,
        quantity INTEGER,
        rate REAL,
        total REAL
    );
    CREATE INDEX IF NOT EXISTS idx_entries_date ON entries(date);

    CREATE TABLE IF NOT EXISTS rates(
        type TEXT PRIMARY KEY,
        rate REAL
    );
    "#,
    )?;

    let count: i64 = conn.query_row("SELECT COUNT(*) FROM rates", [], |r| r.get(0))?;
    if count == 0 {
        let mut stmt = conn.prepare("INSERT INTO rates(type, rate) VALUES (?1, 0.0)")?;
        for t in DiamondType::ALL {
            stmt.execute(params![t])?;
        }
        tracing::info!("seeded default rates for {} diamond types", DiamondType::ALL.len());
    }
    Ok(())
}
