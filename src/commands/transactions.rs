// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::Local;

use crate::api::ApiClient;
use crate::engine::{self, RawFilters};
use crate::models::{
    Card, Category, DEFAULT_CURRENCY, NewTransaction, PaidStatus, Recurrence, Transaction,
    TransactionPatch,
};
use crate::session::require_user;
use crate::utils::{fmt_money, maybe_print_json, parse_amount, parse_date, pretty_table};

pub fn handle(api: &ApiClient, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(api, sub)?,
        Some(("list", sub)) => list(api, sub)?,
        Some(("edit", sub)) => edit(api, sub)?,
        Some(("rm", sub)) => rm(api, sub)?,
        Some(("pay", sub)) => pay(api, sub)?,
        _ => {}
    }
    Ok(())
}

/// Assemble the engine's filter record from the shared filter flags.
pub fn filters_from_args(sub: &clap::ArgMatches) -> RawFilters {
    RawFilters {
        search: sub.get_one::<String>("search").cloned().unwrap_or_default(),
        category_id: sub
            .get_one::<String>("category")
            .cloned()
            .unwrap_or_else(|| "all".to_string()),
        card_id: sub
            .get_one::<String>("card")
            .cloned()
            .unwrap_or_else(|| "all".to_string()),
        is_paid: sub
            .get_one::<String>("status")
            .cloned()
            .unwrap_or_else(|| "all".to_string()),
        start_date: sub.get_one::<String>("from").cloned().unwrap_or_default(),
        end_date: sub.get_one::<String>("to").cloned().unwrap_or_default(),
    }
}

fn add(api: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let user = require_user()?;
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
    let occurred_at = match sub.get_one::<String>("date") {
        Some(d) => parse_date(d)?,
        None => Local::now().date_naive(),
    };
    let due_date = match sub.get_one::<String>("due") {
        Some(d) => parse_date(d)?,
        None => occurred_at,
    };
    let tx = NewTransaction {
        description: sub.get_one::<String>("description").map(|s| s.to_string()),
        category_id: *sub.get_one::<i64>("category").unwrap(),
        user_id: user.id,
        card_id: sub.get_one::<i64>("card").copied(),
        amount,
        currency: DEFAULT_CURRENCY.to_string(),
        occurred_at,
        due_date,
        is_recurring: if sub.get_flag("recurring") {
            Recurrence::Recurring
        } else {
            Recurrence::OneTime
        },
        is_paid: if sub.get_flag("paid") {
            PaidStatus::Paid
        } else {
            PaidStatus::Pending
        },
    };
    let created = api.create_transaction(&tx)?;
    println!(
        "Recorded {} on {} ('{}')",
        fmt_money(&created.amount, &created.currency),
        created.occurred_at,
        created.description.as_deref().unwrap_or("")
    );
    Ok(())
}

fn list(api: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let user = require_user()?;
    let transactions = api.transactions_by_user(user.id)?;
    let categories = api.categories_by_user(user.id)?;
    let cards = api.cards_by_user(user.id)?;

    let filters = filters_from_args(sub);
    let filtered = engine::apply_filters(&transactions, &filters)?;

    if !maybe_print_json(json_flag, jsonl_flag, &filtered)? {
        let rows = table_rows(&filtered, &categories, &cards);
        println!(
            "{}",
            pretty_table(
                &["Id", "Date", "Description", "Category", "Card", "Amount", "Status"],
                rows,
            )
        );
    }
    Ok(())
}

pub fn table_rows(
    transactions: &[Transaction],
    categories: &[Category],
    cards: &[Card],
) -> Vec<Vec<String>> {
    transactions
        .iter()
        .map(|t| {
            let category = categories
                .iter()
                .find(|c| c.id == t.category_id)
                .map(|c| c.name.clone())
                .unwrap_or_default();
            let card = match t.card_id {
                None => "cash".to_string(),
                Some(id) => cards
                    .iter()
                    .find(|c| c.id == id)
                    .map(|c| {
                        c.alias
                            .clone()
                            .or_else(|| c.issuer.clone())
                            .unwrap_or_else(|| c.masked_number())
                    })
                    .unwrap_or_default(),
            };
            vec![
                t.id.to_string(),
                t.occurred_at.to_string(),
                t.description.clone().unwrap_or_default(),
                category,
                card,
                fmt_money(&t.amount, &t.currency),
                match t.is_paid {
                    PaidStatus::Paid => "paid".to_string(),
                    PaidStatus::Pending => "pending".to_string(),
                },
            ]
        })
        .collect()
}

fn edit(api: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    require_user()?;
    let id = *sub.get_one::<i64>("id").unwrap();
    let amount = match sub.get_one::<String>("amount") {
        Some(a) => Some(parse_amount(a)?),
        None => None,
    };
    let occurred_at = match sub.get_one::<String>("date") {
        Some(d) => Some(parse_date(d)?),
        None => None,
    };
    let due_date = match sub.get_one::<String>("due") {
        Some(d) => Some(parse_date(d)?),
        None => None,
    };
    let patch = TransactionPatch {
        description: sub.get_one::<String>("description").map(|s| s.to_string()),
        category_id: sub.get_one::<i64>("category").copied(),
        card_id: sub.get_one::<i64>("card").copied(),
        amount,
        currency: None,
        occurred_at,
        due_date,
        is_recurring: sub.get_one::<String>("recurring").map(|s| {
            if s == "y" {
                Recurrence::Recurring
            } else {
                Recurrence::OneTime
            }
        }),
        // Settlement only moves through 'tx pay'.
        is_paid: None,
    };
    let updated = api.update_transaction(id, &patch)?;
    println!("Updated transaction {}", updated.id);
    Ok(())
}

fn rm(api: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    require_user()?;
    let id = *sub.get_one::<i64>("id").unwrap();
    api.delete_transaction(id)?;
    println!("Removed transaction {}", id);
    Ok(())
}

fn pay(api: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    require_user()?;
    let id = *sub.get_one::<i64>("id").unwrap();
    let paid = api.pay_transaction(id)?;
    println!(
        "Transaction {} marked as paid ({})",
        paid.id,
        fmt_money(&paid.amount, &paid.currency)
    );
    Ok(())
}
