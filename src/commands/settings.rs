// Copyright (c) 2025 Fintrack Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::config;
use crate::utils::pretty_table;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set-url", sub)) => {
            let mut settings = config::load()?;
            settings.api_url = sub
                .get_one::<String>("url")
                .unwrap()
                .trim_end_matches('/')
                .to_string();
            config::save(&settings)?;
            println!("API base URL set to {}", settings.api_url);
        }
        Some(("set-token", sub)) => {
            let mut settings = config::load()?;
            settings.access_token = Some(sub.get_one::<String>("token").unwrap().to_string());
            config::save(&settings)?;
            println!("Access token stored");
        }
        Some(("show", _)) => {
            let settings = config::load()?;
            let token = match &settings.access_token {
                Some(_) => "(set)".to_string(),
                None => "(not set)".to_string(),
            };
            let rows = vec![
                vec!["config file".to_string(), config::config_path()?.display().to_string()],
                vec!["api_url".to_string(), settings.api_url],
                vec!["access_token".to_string(), token],
            ];
            println!("{}", pretty_table(&["Setting", "Value"], rows));
        }
        _ => {}
    }
    Ok(())
}
