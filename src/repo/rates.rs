// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rusqlite::{Connection, params};

use crate::error::Result;
use crate::models::{DiamondType, RateSheet};

/// Current rate of every diamond type. A type with no stored row reads as 0.
pub fn get_all(conn: &Connection) -> Result<RateSheet> {
    let mut sheet: RateSheet = DiamondType::ALL.iter().map(|t| (*t, 0.0)).collect();
    let mut stmt = conn.prepare("SELECT type, rate FROM rates")?;
    let rows = stmt.query_map([], |r| {
        Ok((r.get::<_, DiamondType>(0)?, r.get::<_, Option<f64>>(1)?))
    })?;
    for row in rows {
        let (t, rate) = row?;
        sheet.insert(t, rate.unwrap_or(0.0));
    }
    Ok(sheet)
}

/// Overwrites the rate of all four types. Types missing from `sheet` are set to 0.
pub fn set_all(conn: &Connection, sheet: &RateSheet) -> Result<()> {
    let mut stmt = conn.prepare("UPDATE rates SET rate=?1 WHERE type=?2")?;
    for t in DiamondType::ALL {
        let rate = sheet.get(&t).copied().unwrap_or(0.0);
        stmt.execute(params![rate, t])?;
    }
    tracing::debug!(?sheet, "updated rates");
    Ok(())
}
