// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, crate_version, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print pretty JSON instead of a table"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print one JSON object per line"),
    )
}

fn filter_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("search")
            .long("search")
            .default_value("")
            .help("Case-insensitive text to look for in descriptions"),
    )
    .arg(
        Arg::new("category")
            .long("category")
            .default_value("all")
            .help("Category id, or 'all'"),
    )
    .arg(
        Arg::new("card")
            .long("card")
            .default_value("all")
            .help("Card id, or 'all'"),
    )
    .arg(
        Arg::new("status")
            .long("status")
            .default_value("all")
            .help("paid, pending or all"),
    )
    .arg(
        Arg::new("from")
            .long("from")
            .default_value("")
            .help("Inclusive start of the occurrence date range (YYYY-MM-DD)"),
    )
    .arg(
        Arg::new("to")
            .long("to")
            .default_value("")
            .help("Inclusive end of the occurrence date range (YYYY-MM-DD)"),
    )
}

pub fn build_cli() -> Command {
    Command::new("carteira")
        .version(crate_version!())
        .about("Personal finance client: cards, categories, transactions, balances")
        .subcommand(
            Command::new("login")
                .about("Authenticate and store the session")
                .arg(Arg::new("email").long("email").required(true))
                .arg(Arg::new("password").long("password").required(true)),
        )
        .subcommand(Command::new("logout").about("Clear the stored session"))
        .subcommand(Command::new("whoami").about("Show the logged-in user"))
        .subcommand(
            Command::new("card")
                .about("Manage payment cards")
                .subcommand(
                    Command::new("add")
                        .about("Register a card")
                        .arg(Arg::new("issuer").long("issuer").help("Issuing institution"))
                        .arg(
                            Arg::new("last-four")
                                .long("last-four")
                                .help("Last four digits on the card"),
                        )
                        .arg(Arg::new("alias").long("alias").help("Display alias"))
                        .arg(
                            Arg::new("shared")
                                .long("shared")
                                .action(ArgAction::SetTrue)
                                .help("Mark the card as shared with the household"),
                        ),
                )
                .subcommand(json_flags(Command::new("list").about("List cards")))
                .subcommand(
                    Command::new("edit")
                        .about("Update a card")
                        .arg(Arg::new("id").required(true).value_parser(value_parser!(i64)))
                        .arg(Arg::new("issuer").long("issuer"))
                        .arg(Arg::new("last-four").long("last-four"))
                        .arg(Arg::new("alias").long("alias"))
                        .arg(
                            Arg::new("shared")
                                .long("shared")
                                .value_parser(["y", "n"])
                                .help("y for shared, n for personal"),
                        ),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Delete a card")
                        .arg(Arg::new("id").required(true).value_parser(value_parser!(i64))),
                ),
        )
        .subcommand(
            Command::new("category")
                .about("Manage spending categories")
                .subcommand(
                    Command::new("add")
                        .about("Create a category")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(Arg::new("description").long("description"))
                        .arg(
                            Arg::new("kind")
                                .long("kind")
                                .required(true)
                                .help("income, expense or investment"),
                        ),
                )
                .subcommand(json_flags(
                    Command::new("list").about("List categories").arg(
                        Arg::new("kind")
                            .long("kind")
                            .help("Only categories of this kind"),
                    ),
                ))
                .subcommand(
                    Command::new("edit")
                        .about("Update a category")
                        .arg(Arg::new("id").required(true).value_parser(value_parser!(i64)))
                        .arg(Arg::new("name").long("name"))
                        .arg(Arg::new("description").long("description"))
                        .arg(Arg::new("kind").long("kind")),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Delete a category")
                        .arg(Arg::new("id").required(true).value_parser(value_parser!(i64))),
                ),
        )
        .subcommand(
            Command::new("tx")
                .about("Manage transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record a transaction")
                        .arg(Arg::new("description").long("description"))
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .required(true)
                                .value_parser(value_parser!(i64))
                                .help("Category id"),
                        )
                        .arg(
                            Arg::new("card")
                                .long("card")
                                .value_parser(value_parser!(i64))
                                .help("Card id; omit for cash"),
                        )
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .help("Occurrence date (YYYY-MM-DD), defaults to today"),
                        )
                        .arg(
                            Arg::new("due")
                                .long("due")
                                .help("Due date (YYYY-MM-DD), defaults to the occurrence date"),
                        )
                        .arg(
                            Arg::new("recurring")
                                .long("recurring")
                                .action(ArgAction::SetTrue),
                        )
                        .arg(
                            Arg::new("paid")
                                .long("paid")
                                .action(ArgAction::SetTrue)
                                .help("Record as already settled"),
                        ),
                )
                .subcommand(json_flags(filter_args(
                    Command::new("list").about("List transactions, filtered client-side"),
                )))
                .subcommand(
                    Command::new("edit")
                        .about("Update a transaction")
                        .arg(Arg::new("id").required(true).value_parser(value_parser!(i64)))
                        .arg(Arg::new("description").long("description"))
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .value_parser(value_parser!(i64)),
                        )
                        .arg(
                            Arg::new("card")
                                .long("card")
                                .value_parser(value_parser!(i64)),
                        )
                        .arg(Arg::new("amount").long("amount"))
                        .arg(Arg::new("date").long("date"))
                        .arg(Arg::new("due").long("due"))
                        .arg(
                            Arg::new("recurring")
                                .long("recurring")
                                .value_parser(["y", "n"]),
                        ),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Delete a transaction")
                        .arg(Arg::new("id").required(true).value_parser(value_parser!(i64))),
                )
                .subcommand(
                    Command::new("pay")
                        .about("Mark a pending transaction as paid")
                        .arg(Arg::new("id").required(true).value_parser(value_parser!(i64))),
                ),
        )
        .subcommand(
            Command::new("report")
                .about("Derived views over the current snapshot")
                .subcommand(json_flags(
                    Command::new("balance").about("Income, expenses, investments and net balance"),
                ))
                .subcommand(json_flags(
                    Command::new("recent").about("Most recent expenses").arg(
                        Arg::new("limit")
                            .long("limit")
                            .value_parser(value_parser!(usize))
                            .help("Maximum entries (default 5)"),
                    ),
                ))
                .subcommand(json_flags(filter_args(
                    Command::new("summary").about("Paid/pending totals over a filtered view"),
                ))),
        )
        .subcommand(
            Command::new("export").about("Export data").subcommand(filter_args(
                Command::new("transactions")
                    .about("Write the filtered transaction list to a file")
                    .arg(
                        Arg::new("format")
                            .long("format")
                            .default_value("csv")
                            .help("csv or json"),
                    )
                    .arg(Arg::new("out").long("out").required(true)),
            )),
        )
}
