// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeMap;
use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::config::Config;
use crate::diary::Diary;
use crate::models::{DayTotal, DiamondType, Totals};
use crate::utils::{
    confirm, fmt_amount, fmt_rate, maybe_print_json, parse_date, parse_quantity, pretty_table,
    today,
};

/// Reads `--a/--b/--c/--d` into a type-keyed map; missing or malformed values are 0.
pub fn per_type_values<T>(
    sub: &clap::ArgMatches,
    parse: impl Fn(&str) -> T,
) -> BTreeMap<DiamondType, T> {
    DiamondType::ALL
        .into_iter()
        .map(|t| {
            let id = t.as_str().to_ascii_lowercase();
            let raw = sub.get_one::<String>(&id).map(String::as_str).unwrap_or("");
            (t, parse(raw))
        })
        .collect()
}

pub fn add(diary: &Diary, sub: &clap::ArgMatches) -> Result<usize> {
    let date = match sub.get_one::<String>("date") {
        Some(d) => parse_date(d)?,
        None => today(),
    };
    let quantities = per_type_values(sub, parse_quantity);
    let written = diary
        .record_at_current_rates(&date, &quantities)
        .with_context(|| format!("Record entries for {}", date))?;
    if written == 0 {
        println!("Nothing recorded for {} (all quantities are zero)", date);
    } else {
        let noun = if written == 1 { "entry" } else { "entries" };
        println!("Recorded {} {} on {}", written, noun, date);
    }
    Ok(written)
}

#[derive(Serialize)]
pub struct HistoryReport {
    pub days: Vec<DayTotal>,
    pub totals: Totals,
}

pub fn history_report(
    diary: &Diary,
    config: &Config,
    sub: &clap::ArgMatches,
) -> Result<HistoryReport> {
    let chronological = sub.get_flag("chronological") || config.chronological_history;
    let days = if chronological {
        diary.history_chronological()?
    } else {
        diary.history()?
    };
    let totals = diary.totals()?;
    Ok(HistoryReport { days, totals })
}

pub fn history(diary: &Diary, config: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let report = history_report(diary, config, sub)?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &report)? {
        let rows = report
            .days
            .iter()
            .map(|d| vec![d.date.clone(), format!("₹ {}", fmt_amount(d.total))])
            .collect();
        println!("{}", pretty_table(&["Date", "Total"], rows));
        println!(
            "TOTAL 💎 : {}    NET ₹ : {}",
            report.totals.quantity,
            fmt_amount(report.totals.amount)
        );
    }
    Ok(())
}

pub fn totals(diary: &Diary, sub: &clap::ArgMatches) -> Result<()> {
    let t = diary.totals()?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &t)? {
        println!("TOTAL 💎 : {}", t.quantity);
        println!("NET ₹ : {}", fmt_amount(t.amount));
    }
    Ok(())
}

pub fn show(diary: &Diary, sub: &clap::ArgMatches) -> Result<()> {
    let date = parse_date(sub.get_one::<String>("date").unwrap())?;
    let detail = diary.detail(&date)?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &detail)? {
        println!("DATE: {}", detail.date);
        for l in &detail.lines {
            println!(
                "{} : {} * {} = {}",
                l.r#type,
                l.quantity,
                fmt_rate(l.rate),
                fmt_amount(l.total)
            );
        }
        println!("TOTAL = {}", fmt_amount(detail.total));
    }
    Ok(())
}

pub fn delete(diary: &Diary, sub: &clap::ArgMatches) -> Result<usize> {
    let stdin = std::io::stdin();
    delete_with(diary, sub, &mut stdin.lock(), &mut std::io::stdout())
}

/// Deletes a day's entries after confirmation read from `input`, unless `--yes`.
pub fn delete_with<R: BufRead, W: Write>(
    diary: &Diary,
    sub: &clap::ArgMatches,
    input: &mut R,
    output: &mut W,
) -> Result<usize> {
    let date = parse_date(sub.get_one::<String>("date").unwrap())?;
    if !sub.get_flag("yes") {
        let question = format!("Delete every entry on {}? This cannot be undone.", date);
        if !confirm(input, output, &question)? {
            writeln!(output, "Aborted")?;
            return Ok(0);
        }
    }
    let removed = diary.delete_by_date(&date)?;
    let noun = if removed == 1 { "entry" } else { "entries" };
    writeln!(output, "Deleted {} {} on {}", removed, noun, date)?;
    Ok(removed)
}
