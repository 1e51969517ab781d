// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::commands::entries::per_type_values;
use crate::diary::Diary;
use crate::utils::{fmt_rate, maybe_print_json, parse_rate, pretty_table};

pub fn handle(diary: &Diary, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(diary, sub)?,
        Some(("set", sub)) => set(diary, sub)?,
        _ => {}
    }
    Ok(())
}

fn list(diary: &Diary, sub: &clap::ArgMatches) -> Result<()> {
    let sheet = diary.rates()?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &sheet)? {
        let rows = sheet
            .iter()
            .map(|(t, r)| vec![t.to_string(), fmt_rate(*r)])
            .collect();
        println!("{}", pretty_table(&["Type", "Rate"], rows));
    }
    Ok(())
}

fn set(diary: &Diary, sub: &clap::ArgMatches) -> Result<()> {
    let sheet = per_type_values(sub, parse_rate);
    diary.set_rates(&sheet)?;
    let summary: Vec<String> = sheet
        .iter()
        .map(|(t, r)| format!("{}={}", t, fmt_rate(*r)))
        .collect();
    println!("Rates updated: {}", summary.join(", "));
    Ok(())
}
