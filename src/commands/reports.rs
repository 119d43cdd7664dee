// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::api::ApiClient;
use crate::commands::transactions::filters_from_args;
use crate::engine::{self, DEFAULT_RECENT_LIMIT};
use crate::models::DEFAULT_CURRENCY;
use crate::session::require_user;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};

pub fn handle(api: &ApiClient, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("balance", sub)) => balance(api, sub)?,
        Some(("recent", sub)) => recent(api, sub)?,
        Some(("summary", sub)) => summary(api, sub)?,
        _ => {}
    }
    Ok(())
}

fn balance(api: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let user = require_user()?;
    let transactions = api.transactions_by_user(user.id)?;
    let categories = api.categories_by_user(user.id)?;

    let balance = engine::compute_balance(&transactions, &categories);
    if !maybe_print_json(json_flag, jsonl_flag, &balance)? {
        let rows = vec![
            vec![
                "Income".to_string(),
                fmt_money(&balance.income, DEFAULT_CURRENCY),
            ],
            vec![
                "Expenses".to_string(),
                fmt_money(&balance.expense, DEFAULT_CURRENCY),
            ],
            vec![
                "Investments".to_string(),
                fmt_money(&balance.investment, DEFAULT_CURRENCY),
            ],
            vec![
                "Balance".to_string(),
                fmt_money(&balance.balance, DEFAULT_CURRENCY),
            ],
        ];
        println!("{}", pretty_table(&["", "Paid total"], rows));
    }
    Ok(())
}

fn recent(api: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let limit = *sub.get_one::<usize>("limit").unwrap_or(&DEFAULT_RECENT_LIMIT);
    let user = require_user()?;
    let transactions = api.transactions_by_user(user.id)?;
    let categories = api.categories_by_user(user.id)?;

    let expenses = engine::recent_expenses(&transactions, &categories, limit);
    if !maybe_print_json(json_flag, jsonl_flag, &expenses)? {
        let rows: Vec<Vec<String>> = expenses
            .iter()
            .map(|t| {
                let category = categories
                    .iter()
                    .find(|c| c.id == t.category_id)
                    .map(|c| c.name.clone())
                    .unwrap_or_default();
                vec![
                    t.occurred_at.to_string(),
                    t.description.clone().unwrap_or_default(),
                    category,
                    format!("-{}", fmt_money(&t.amount, &t.currency)),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Date", "Description", "Category", "Amount"], rows)
        );
    }
    Ok(())
}

fn summary(api: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let user = require_user()?;
    let transactions = api.transactions_by_user(user.id)?;

    let filters = filters_from_args(sub);
    let filtered = engine::apply_filters(&transactions, &filters)?;
    let summary = engine::summarize(&filtered);

    if !maybe_print_json(json_flag, jsonl_flag, &summary)? {
        let rows = vec![
            vec![
                "Total".to_string(),
                fmt_money(&summary.total_amount, DEFAULT_CURRENCY),
                summary.total_count.to_string(),
            ],
            vec![
                "Paid".to_string(),
                fmt_money(&summary.paid_amount, DEFAULT_CURRENCY),
                summary.paid_count.to_string(),
            ],
            vec![
                "Pending".to_string(),
                fmt_money(&summary.pending_amount, DEFAULT_CURRENCY),
                summary.pending_count.to_string(),
            ],
        ];
        println!("{}", pretty_table(&["", "Amount", "Transactions"], rows));
    }
    Ok(())
}
