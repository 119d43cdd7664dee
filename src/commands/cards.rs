// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::api::ApiClient;
use crate::models::{CardPatch, CardScope, NewCard};
use crate::session::require_user;
use crate::utils::{maybe_print_json, pretty_table, validate_last_four};

pub fn handle(api: &ApiClient, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(api, sub)?,
        Some(("list", sub)) => list(api, sub)?,
        Some(("edit", sub)) => edit(api, sub)?,
        Some(("rm", sub)) => rm(api, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(api: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let user = require_user()?;
    let last_four = sub.get_one::<String>("last-four").map(|s| s.to_string());
    if let Some(ref digits) = last_four {
        validate_last_four(digits)?;
    }
    let card = NewCard {
        issuer: sub.get_one::<String>("issuer").map(|s| s.to_string()),
        last_four_digits: last_four,
        alias: sub.get_one::<String>("alias").map(|s| s.to_string()),
        shared: if sub.get_flag("shared") {
            CardScope::Shared
        } else {
            CardScope::Personal
        },
        user_id: user.id,
    };
    let created = api.create_card(&card)?;
    println!(
        "Added card '{}' ({})",
        created.alias.as_deref().unwrap_or("unnamed"),
        created.masked_number()
    );
    Ok(())
}

fn list(api: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let user = require_user()?;
    let cards = api.cards_by_user(user.id)?;
    if !maybe_print_json(json_flag, jsonl_flag, &cards)? {
        let rows: Vec<Vec<String>> = cards
            .iter()
            .map(|c| {
                vec![
                    c.id.to_string(),
                    c.alias.clone().unwrap_or_default(),
                    c.issuer.clone().unwrap_or_default(),
                    c.masked_number(),
                    match c.shared {
                        CardScope::Shared => "shared".to_string(),
                        CardScope::Personal => "personal".to_string(),
                    },
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Id", "Alias", "Issuer", "Number", "Scope"], rows)
        );
    }
    Ok(())
}

fn edit(api: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    require_user()?;
    let id = *sub.get_one::<i64>("id").unwrap();
    let last_four = sub.get_one::<String>("last-four").map(|s| s.to_string());
    if let Some(ref digits) = last_four {
        validate_last_four(digits)?;
    }
    let patch = CardPatch {
        issuer: sub.get_one::<String>("issuer").map(|s| s.to_string()),
        last_four_digits: last_four,
        alias: sub.get_one::<String>("alias").map(|s| s.to_string()),
        shared: sub.get_one::<String>("shared").map(|s| {
            if s == "y" {
                CardScope::Shared
            } else {
                CardScope::Personal
            }
        }),
    };
    let updated = api.update_card(id, &patch)?;
    println!(
        "Updated card {} ('{}')",
        updated.id,
        updated.alias.as_deref().unwrap_or("unnamed")
    );
    Ok(())
}

fn rm(api: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    require_user()?;
    let id = *sub.get_one::<i64>("id").unwrap();
    api.delete_card(id)?;
    println!("Removed card {}", id);
    Ok(())
}
