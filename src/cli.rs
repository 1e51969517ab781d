// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, command, value_parser};
use std::path::PathBuf;

fn json_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .conflicts_with("jsonl")
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

/// One optional `--a/--b/--c/--d` value per diamond type.
fn per_type_args(cmd: Command, value_name: &'static str) -> Command {
    [("a", "Type A"), ("b", "Type B"), ("c", "Type C"), ("d", "Type D")]
        .into_iter()
        .fold(cmd, |cmd, (id, help)| {
            cmd.arg(
                Arg::new(id)
                    .long(id)
                    .value_name(value_name)
                    .allow_hyphen_values(true)
                    .help(help),
            )
        })
}

pub fn build_cli() -> Command {
    command!()
        .name("hira-diary")
        .about("Diamond inventory diary: daily entries, rates, and history")
        .arg(
            Arg::new("db")
                .long("db")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("SQLite file to use (overrides config)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Config file (default: $HIRA_DIARY_CONFIG or platform config dir)"),
        )
        .subcommand(Command::new("init").about("Create the database and default rates"))
        .subcommand(per_type_args(
            Command::new("add")
                .about("Record quantities for a day at the current rates")
                .arg(
                    Arg::new("date")
                        .long("date")
                        .value_name("DD/MM/YYYY")
                        .help("Entry date (default: today)"),
                ),
            "QTY",
        ))
        .subcommand(json_args(
            Command::new("history")
                .about("Per-date totals with grand totals")
                .arg(
                    Arg::new("chronological")
                        .long("chronological")
                        .action(ArgAction::SetTrue)
                        .help("Sort by calendar date instead of stored text"),
                ),
        ))
        .subcommand(json_args(Command::new("totals").about("Grand quantity and amount")))
        .subcommand(json_args(
            Command::new("show")
                .about("Breakdown of one day")
                .arg(Arg::new("date").required(true).value_name("DD/MM/YYYY")),
        ))
        .subcommand(
            Command::new("delete")
                .about("Delete every entry of one day")
                .arg(Arg::new("date").required(true).value_name("DD/MM/YYYY"))
                .arg(
                    Arg::new("yes")
                        .long("yes")
                        .short('y')
                        .action(ArgAction::SetTrue)
                        .help("Skip the confirmation prompt"),
                ),
        )
        .subcommand(
            Command::new("rates")
                .about("Per-type rates")
                .subcommand_required(true)
                .subcommand(json_args(Command::new("list").about("Show current rates")))
                .subcommand(per_type_args(
                    Command::new("set").about("Overwrite all four rates; omitted types become 0"),
                    "RATE",
                )),
        )
        .subcommand(
            Command::new("export")
                .about("Export data")
                .subcommand_required(true)
                .subcommand(
                    Command::new("entries")
                        .about("Export every entry")
                        .arg(
                            Arg::new("format")
                                .long("format")
                                .required(true)
                                .help("csv|json"),
                        )
                        .arg(Arg::new("out").long("out").required(true)),
                ),
        )
}
