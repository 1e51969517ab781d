// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, bail};

use crate::diary::Diary;

pub fn handle(diary: &Diary, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("entries", sub)) => export_entries(diary, sub),
        _ => Ok(()),
    }
}

fn export_entries(diary: &Diary, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();

    if fmt != "csv" && fmt != "json" {
        bail!("Unknown format: {} (use csv|json)", fmt);
    }

    let entries = diary.all_entries()?;
    if fmt == "csv" {
        let mut wtr = csv::Writer::from_path(out)?;
        wtr.write_record(["date", "type", "quantity", "rate", "total"])?;
        for e in &entries {
            wtr.write_record([
                e.date.clone(),
                e.r#type.to_string(),
                e.quantity.to_string(),
                e.rate.to_string(),
                e.total.to_string(),
            ])?;
        }
        wtr.flush()?;
    } else {
        std::fs::write(out, serde_json::to_string_pretty(&entries)?)?;
    }
    tracing::info!(count = entries.len(), out = %out, "exported entries");
    println!("Exported {} entries to {}", entries.len(), out);
    Ok(())
}
