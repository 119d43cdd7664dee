// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::User;

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Carteira", "carteira"));

pub fn session_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific config dir")?;
    let config_dir = proj.config_dir();
    fs::create_dir_all(config_dir).context("Failed to create config dir")?;
    Ok(config_dir.join("session.json"))
}

pub fn load() -> Result<Option<User>> {
    load_from(&session_path()?)
}

/// Missing file means logged out. A file that no longer parses is removed
/// and treated the same, so a bad write cannot wedge the CLI.
pub fn load_from(path: &Path) -> Result<Option<User>> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(e).with_context(|| format!("Read session at {}", path.display()));
        }
    };
    match serde_json::from_str::<User>(&raw) {
        Ok(user) => Ok(Some(user)),
        Err(_) => {
            fs::remove_file(path)
                .with_context(|| format!("Remove corrupt session at {}", path.display()))?;
            Ok(None)
        }
    }
}

pub fn save(user: &User) -> Result<()> {
    save_to(&session_path()?, user)
}

pub fn save_to(path: &Path, user: &User) -> Result<()> {
    let raw = serde_json::to_string_pretty(user)?;
    fs::write(path, raw).with_context(|| format!("Write session at {}", path.display()))?;
    Ok(())
}

pub fn clear() -> Result<()> {
    clear_at(&session_path()?)
}

pub fn clear_at(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e).with_context(|| format!("Remove session at {}", path.display())),
    }
}

pub fn require_user() -> Result<User> {
    load()?.context("Not logged in. Run 'carteira login --email <EMAIL> --password <PASSWORD>'")
}
