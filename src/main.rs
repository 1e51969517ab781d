// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use hira_diary::config::Config;
use hira_diary::{Diary, cli, commands};

const LOG_ENV: &str = "HIRA_DIARY_LOG";

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let matches = cli::build_cli().get_matches();

    let config = Config::load(matches.get_one::<PathBuf>("config").map(PathBuf::as_path))?;
    let path = config.database_path(matches.get_one::<PathBuf>("db").map(PathBuf::as_path))?;
    let diary = Diary::open(&path)
        .with_context(|| format!("Open diary at {}", path.display()))?;
    tracing::debug!(path = %path.display(), "diary ready");

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Database initialized at {}", diary.path().display());
        }
        Some(("add", sub)) => {
            commands::entries::add(&diary, sub)?;
        }
        Some(("history", sub)) => commands::entries::history(&diary, &config, sub)?,
        Some(("totals", sub)) => commands::entries::totals(&diary, sub)?,
        Some(("show", sub)) => commands::entries::show(&diary, sub)?,
        Some(("delete", sub)) => {
            commands::entries::delete(&diary, sub)?;
        }
        Some(("rates", sub)) => commands::rates::handle(&diary, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&diary, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
