// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::cmp::Reverse;
use std::collections::BTreeMap;

use rusqlite::{Connection, params};

use crate::error::Result;
use crate::models::{DayDetail, DayTotal, DetailLine, DiamondType, Entry, EntryLine, Totals};
use crate::repo::rates;
use crate::utils::parse_display_date;

/// Inserts one row per type whose quantity is positive. Rows are written one
/// statement at a time; a failure part-way leaves the earlier rows in place.
pub fn record(
    conn: &Connection,
    date: &str,
    lines: &BTreeMap<DiamondType, EntryLine>,
) -> Result<usize> {
    let mut stmt = conn.prepare(
        "INSERT INTO entries(date, type, quantity, rate, total) VALUES (?1, ?2, ?3, ?4, ?5)",
    )?;
    let mut written = 0;
    for (t, line) in lines {
        if line.quantity <= 0 {
            continue;
        }
        let total = line.quantity as f64 * line.rate;
        stmt.execute(params![date, t, line.quantity, line.rate, total])?;
        written += 1;
    }
    tracing::debug!(date, written, "recorded entries");
    Ok(written)
}

/// Records quantities at the rates currently stored. The rate is copied into
/// each row, so later rate changes leave these rows alone.
pub fn record_at_current_rates(
    conn: &Connection,
    date: &str,
    quantities: &BTreeMap<DiamondType, i64>,
) -> Result<usize> {
    let sheet = rates::get_all(conn)?;
    let lines: BTreeMap<DiamondType, EntryLine> = quantities
        .iter()
        .map(|(t, q)| (*t, EntryLine::new(*q, sheet.get(t).copied().unwrap_or(0.0))))
        .collect();
    record(conn, date, &lines)
}

/// Per-date totals, newest first by plain string comparison of the stored
/// `DD/MM/YYYY` text. This is not calendar order across months.
///
/// Each day's total is added up row by row in insertion order, the same way
/// [`detail`] adds its lines, so both report the identical value.
pub fn history(conn: &Connection) -> Result<Vec<DayTotal>> {
    let mut stmt = conn.prepare("SELECT date, total FROM entries ORDER BY id")?;
    let rows = stmt.query_map([], |r| {
        Ok((r.get::<_, String>(0)?, r.get::<_, Option<f64>>(1)?.unwrap_or(0.0)))
    })?;
    let mut by_date: BTreeMap<String, f64> = BTreeMap::new();
    for row in rows {
        let (date, total) = row?;
        *by_date.entry(date).or_insert(0.0) += total;
    }
    let out: Vec<DayTotal> = by_date
        .into_iter()
        .rev()
        .map(|(date, total)| DayTotal { date, total })
        .collect();
    tracing::debug!(days = out.len(), "loaded history");
    Ok(out)
}

/// Same rows as [`history`], ordered by calendar date, newest first.
/// Dates that fail to parse follow, in descending string order.
pub fn history_chronological(conn: &Connection) -> Result<Vec<DayTotal>> {
    let mut days = history(conn)?;
    days.sort_by_key(|d| match parse_display_date(&d.date) {
        Some(parsed) => (0, Reverse(Some(parsed)), Reverse(d.date.clone())),
        None => (1, Reverse(None), Reverse(d.date.clone())),
    });
    Ok(days)
}

pub fn totals(conn: &Connection) -> Result<Totals> {
    let (quantity, amount) = conn.query_row(
        "SELECT IFNULL(SUM(quantity), 0), IFNULL(SUM(total), 0.0) FROM entries",
        [],
        |r| Ok((r.get::<_, i64>(0)?, r.get::<_, f64>(1)?)),
    )?;
    Ok(Totals { quantity, amount })
}

pub fn detail(conn: &Connection, date: &str) -> Result<DayDetail> {
    let mut stmt = conn.prepare(
        "SELECT type, quantity, rate, total FROM entries WHERE date=?1 ORDER BY id",
    )?;
    let rows = stmt.query_map(params![date], |r| {
        Ok(DetailLine {
            r#type: r.get(0)?,
            quantity: r.get(1)?,
            rate: r.get(2)?,
            total: r.get(3)?,
        })
    })?;
    let mut lines = Vec::new();
    for row in rows {
        lines.push(row?);
    }
    let total = lines.iter().fold(0.0, |acc, l| acc + l.total);
    Ok(DayDetail {
        date: date.to_string(),
        lines,
        total,
    })
}

/// Removes every entry for the exact date string. There is no undo.
pub fn delete_by_date(conn: &Connection, date: &str) -> Result<usize> {
    let removed = conn.execute("DELETE FROM entries WHERE date=?1", params![date])?;
    tracing::info!(date, removed, "deleted entries");
    Ok(removed)
}

pub fn all_entries(conn: &Connection) -> Result<Vec<Entry>> {
    let mut stmt =
        conn.prepare("SELECT id, date, type, quantity, rate, total FROM entries ORDER BY id")?;
    let rows = stmt.query_map([], |r| {
        Ok(Entry {
            id: r.get(0)?,
            date: r.get(1)?,
            r#type: r.get(2)?,
            quantity: r.get(3)?,
            rate: r.get(4)?,
            total: r.get(5)?,
        })
    })?;
    let mut out = Vec::new();
    for row in rows {
        out.push(row?);
    }
    Ok(out)
}
