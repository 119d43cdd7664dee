// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, bail};

use crate::api::ApiClient;
use crate::models::{CategoryPatch, NewCategory};
use crate::session::require_user;
use crate::utils::{maybe_print_json, parse_kind, pretty_table};

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
    let category = NewCategory {
        name: sub.get_one::<String>("name").unwrap().to_string(),
        description: sub.get_one::<String>("description").map(|s| s.to_string()),
        kind: parse_kind(sub.get_one::<String>("kind").unwrap())?,
        user_id: user.id,
    };
    let created = api.create_category(&category)?;
    println!("Added category '{}' ({})", created.name, created.kind.label());
    Ok(())
}

fn list(api: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let user = require_user()?;
    let categories = match sub.get_one::<String>("kind") {
        Some(kind) => api.categories_by_kind(parse_kind(kind)?, user.id)?,
        None => api.categories_by_user(user.id)?,
    };
    if !maybe_print_json(json_flag, jsonl_flag, &categories)? {
        let rows: Vec<Vec<String>> = categories
            .iter()
            .map(|c| {
                vec![
                    c.id.to_string(),
                    c.name.clone(),
                    c.kind.label().to_string(),
                    if c.is_system() {
                        "system".to_string()
                    } else {
                        "mine".to_string()
                    },
                    c.description.clone().unwrap_or_default(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Id", "Name", "Kind", "Owner", "Description"], rows)
        );
    }
    Ok(())
}

fn edit(api: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    require_user()?;
    let id = *sub.get_one::<i64>("id").unwrap();
    let patch = CategoryPatch {
        name: sub.get_one::<String>("name").map(|s| s.to_string()),
        description: sub.get_one::<String>("description").map(|s| s.to_string()),
        kind: match sub.get_one::<String>("kind") {
            Some(kind) => Some(parse_kind(kind)?),
            None => None,
        },
    };
    let updated = api.update_category(id, &patch)?;
    println!("Updated category {} ('{}')", updated.id, updated.name);
    Ok(())
}

fn rm(api: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let user = require_user()?;
    let id = *sub.get_one::<i64>("id").unwrap();
    // System defaults (no owner) are read-only for everyone.
    let categories = api.categories_by_user(user.id)?;
    if let Some(cat) = categories.iter().find(|c| c.id == id) {
        if cat.is_system() {
            bail!("Category '{}' is a system default and cannot be deleted", cat.name);
        }
    }
    api.delete_category(id)?;
    println!("Removed category {}", id);
    Ok(())
}
