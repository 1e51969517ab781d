// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::io::{BufRead, Write};

use anyhow::Result;
use chrono::{Local, NaiveDate};
use comfy_table::{Cell, Table, presets::UTF8_FULL};

use crate::error::DiaryError;

pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Validates a `DD/MM/YYYY` date and returns it zero-padded, the form stored
/// in the `entries` table.
pub fn parse_date(s: &str) -> std::result::Result<String, DiaryError> {
    parse_display_date(s)
        .map(|d| d.format(DATE_FORMAT).to_string())
        .ok_or_else(|| DiaryError::InvalidDate(s.to_string()))
}

pub fn parse_display_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok()
}

pub fn today() -> String {
    Local::now().date_naive().format(DATE_FORMAT).to_string()
}

/// Empty or non-numeric input counts as zero.
pub fn parse_quantity(s: &str) -> i64 {
    s.trim().parse().unwrap_or(0)
}

/// Empty, non-numeric or non-finite input counts as zero.
pub fn parse_rate(s: &str) -> f64 {
    match s.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

pub fn fmt_amount(v: f64) -> String {
    format!("{:.2}", v)
}

/// Rates keep their decimal point, so a whole rate prints as `100.0`.
pub fn fmt_rate(v: f64) -> String {
    format!("{:?}", v)
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}

/// Asks a yes/no question; anything other than `y`/`yes` is a no.
pub fn confirm<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> Result<bool> {
    write!(output, "{} [y/N] ", question)?;
    output.flush()?;
    let mut answer = String::new();
    input.read_line(&mut answer)?;
    let answer = answer.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}
