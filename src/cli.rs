// Copyright (c) 2025 Fintrack Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, crate_description, crate_version, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print pretty JSON instead of tables"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print one JSON object per line"),
    )
}

fn month_arg() -> Arg {
    Arg::new("month")
        .long("month")
        .value_name("YYYY-MM")
        .help("Calendar month to scope to (default: current month)")
}

fn draft_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("date")
            .long("date")
            .required(true)
            .value_name("YYYY-MM-DD"),
    )
    .arg(
        Arg::new("amount")
            .long("amount")
            .required(true)
            .help("Signed amount: positive income, negative expense"),
    )
    .arg(Arg::new("category").long("category").required(true))
    .arg(Arg::new("description").long("description").required(true))
}

pub fn build_cli() -> Command {
    Command::new("fintrack")
        .version(crate_version!())
        .about(crate_description!())
        .subcommand(json_flags(
            Command::new("dashboard")
                .about("Monthly summary, category breakdown and balance trend")
                .arg(month_arg()),
        ))
        .subcommand(
            Command::new("tx")
                .about("Manage ledger transactions")
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List transactions, newest first")
                        .arg(month_arg())
                        .arg(Arg::new("category").long("category").value_name("NAME"))
                        .arg(
                            Arg::new("search")
                                .long("search")
                                .value_name("TEXT")
                                .help("Substring match on the description"),
                        )
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        ),
                ))
                .subcommand(draft_args(
                    Command::new("add").about("Record a new transaction"),
                ))
                .subcommand(draft_args(
                    Command::new("edit")
                        .about("Replace an existing transaction")
                        .arg(
                            Arg::new("id")
                                .required(true)
                                .value_parser(value_parser!(i64)),
                        ),
                ))
                .subcommand(
                    Command::new("rm").about("Delete a transaction").arg(
                        Arg::new("id")
                            .required(true)
                            .value_parser(value_parser!(i64)),
                    ),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Write the ledger to a file")
                .arg(month_arg())
                .arg(
                    Arg::new("format")
                        .long("format")
                        .default_value("csv")
                        .help("csv or json"),
                )
                .arg(Arg::new("out").long("out").required(true).value_name("FILE")),
        )
        .subcommand(
            Command::new("config")
                .about("Manage client settings")
                .subcommand(
                    Command::new("set-url")
                        .about("Set the API base URL")
                        .arg(Arg::new("url").required(true)),
                )
                .subcommand(
                    Command::new("set-token")
                        .about("Store the bearer token for API calls")
                        .arg(Arg::new("token").required(true)),
                )
                .subcommand(Command::new("show").about("Print current settings")),
        )
        .subcommand(Command::new("doctor").about("Check connectivity to the fin-track API"))
}
