// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use carteira::{api::ApiClient, cli, commands};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let api = ApiClient::from_env()?;

    match matches.subcommand() {
        Some(("login", sub)) => commands::auth::login(&api, sub)?,
        Some(("logout", _)) => commands::auth::logout()?,
        Some(("whoami", _)) => commands::auth::whoami()?,
        Some(("card", sub)) => commands::cards::handle(&api, sub)?,
        Some(("category", sub)) => commands::categories::handle(&api, sub)?,
        Some(("tx", sub)) => commands::transactions::handle(&api, sub)?,
        Some(("report", sub)) => commands::reports::handle(&api, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&api, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
