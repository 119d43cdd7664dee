// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde_json::json;

use crate::api::ApiClient;
use crate::commands::transactions::filters_from_args;
use crate::engine;
use crate::models::{Card, Category, PaidStatus, Recurrence, Transaction};
use crate::session::require_user;

pub fn handle(api: &ApiClient, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(api, sub),
        _ => Ok(()),
    }
}

fn export_transactions(api: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();

    let user = require_user()?;
    let transactions = api.transactions_by_user(user.id)?;
    let categories = api.categories_by_user(user.id)?;
    let cards = api.cards_by_user(user.id)?;

    let filters = filters_from_args(sub);
    let filtered = engine::apply_filters(&transactions, &filters)?;

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record([
                "date", "due", "description", "category", "card", "amount", "currency",
                "status", "recurring",
            ])?;
            for row in rows(&filtered, &categories, &cards) {
                wtr.write_record(row)?;
            }
            wtr.flush()?;
        }
        "json" => {
            let items: Vec<serde_json::Value> = rows(&filtered, &categories, &cards)
                .into_iter()
                .map(
                    |[date, due, description, category, card, amount, currency, status, recurring]| {
                        json!({
                            "date": date, "due": due, "description": description,
                            "category": category, "card": card, "amount": amount,
                            "currency": currency, "status": status, "recurring": recurring
                        })
                    },
                )
                .collect();
            std::fs::write(out, serde_json::to_string_pretty(&items)?)?;
        }
        _ => {
            eprintln!("Unknown format: {} (use csv|json)", fmt);
            return Ok(());
        }
    }
    println!("Exported {} transactions to {}", filtered.len(), out);
    Ok(())
}

fn rows(
    transactions: &[Transaction],
    categories: &[Category],
    cards: &[Card],
) -> Vec<[String; 9]> {
    transactions
        .iter()
        .map(|t| {
            let category = categories
                .iter()
                .find(|c| c.id == t.category_id)
                .map(|c| c.name.clone())
                .unwrap_or_default();
            let card = t
                .card_id
                .and_then(|id| cards.iter().find(|c| c.id == id))
                .and_then(|c| c.alias.clone().or_else(|| c.issuer.clone()))
                .unwrap_or_default();
            [
                t.occurred_at.to_string(),
                t.due_date.to_string(),
                t.description.clone().unwrap_or_default(),
                category,
                card,
                t.amount.to_string(),
                t.currency.clone(),
                match t.is_paid {
                    PaidStatus::Paid => "paid".to_string(),
                    PaidStatus::Pending => "pending".to_string(),
                },
                match t.is_recurring {
                    Recurrence::Recurring => "recurring".to_string(),
                    Recurrence::OneTime => "one-time".to_string(),
                },
            ]
        })
        .collect()
}
