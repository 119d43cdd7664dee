// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};

use crate::api::ApiClient;
use crate::session;

pub fn login(api: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let email = sub.get_one::<String>("email").unwrap();
    let password = sub.get_one::<String>("password").unwrap();

    let user = api
        .login(email, password)
        .with_context(|| format!("Login failed for '{}'", email))?;
    session::save(&user)?;
    println!("Logged in as {} <{}>", user.name, user.email);
    Ok(())
}

pub fn logout() -> Result<()> {
    session::clear()?;
    println!("Session cleared");
    Ok(())
}

pub fn whoami() -> Result<()> {
    match session::load()? {
        Some(user) => println!("{} <{}> (id {})", user.name, user.email, user.id),
        None => println!("Not logged in"),
    }
    Ok(())
}
