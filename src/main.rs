// Copyright (c) 2025 Fintrack Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use fintrack::api::ApiClient;
use fintrack::{cli, commands, config};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    match matches.subcommand() {
        Some(("dashboard", sub)) => commands::dashboard::handle(&client()?, sub)?,
        Some(("tx", sub)) => commands::transactions::handle(&client()?, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&client()?, sub)?,
        Some(("config", sub)) => commands::settings::handle(sub)?,
        Some(("doctor", _)) => commands::doctor::handle(&client()?)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}

fn client() -> Result<ApiClient> {
    let settings = config::load()?;
    ApiClient::new(&settings)
}
