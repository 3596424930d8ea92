// Copyright (c) 2025 Fintrack Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::aggregate::filter_by_period;
use crate::api::ApiClient;
use crate::models::{Transaction, TransactionDraft};
use crate::utils::{maybe_print_json, parse_date, parse_decimal, parse_month, pretty_table};

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

fn draft_from_args(sub: &clap::ArgMatches) -> Result<TransactionDraft> {
    Ok(TransactionDraft {
        date: parse_date(sub.get_one::<String>("date").unwrap())?,
        amount: parse_decimal(sub.get_one::<String>("amount").unwrap())?,
        category: sub.get_one::<String>("category").unwrap().to_string(),
        description: sub.get_one::<String>("description").unwrap().to_string(),
    })
}

fn add(api: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let draft = draft_from_args(sub)?;
    api.add_transaction(&draft)?;
    println!(
        "Recorded {} on {} ({})",
        draft.amount, draft.date, draft.category
    );
    Ok(())
}

fn edit(api: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let draft = draft_from_args(sub)?;
    api.update_transaction(id, &draft)?;
    println!("Updated transaction {}", id);
    Ok(())
}

fn rm(api: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    api.delete_transaction(id)?;
    println!("Deleted transaction {}", id);
    Ok(())
}

fn list(api: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let month = sub
        .get_one::<String>("month")
        .map(|s| parse_month(s))
        .transpose()?;
    let transactions = api.list_transactions(month)?;
    let data = filter_rows(transactions, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|t| {
                vec![
                    t.id.to_string(),
                    t.date.to_string(),
                    t.category.clone(),
                    t.description.clone(),
                    format!("{:.2}", t.amount),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["ID", "Date", "Category", "Description", "Amount"], rows)
        );
    }
    Ok(())
}

/// Apply the list filters to an already-fetched ledger. The month filter is
/// re-applied locally by parsed year/month even when the server was asked to
/// scope, so a permissive server cannot leak out-of-period rows.
pub fn filter_rows(
    transactions: Vec<Transaction>,
    sub: &clap::ArgMatches,
) -> Result<Vec<Transaction>> {
    let mut rows = match sub.get_one::<String>("month") {
        Some(m) => filter_by_period(&transactions, parse_month(m)?),
        None => transactions,
    };
    if let Some(category) = sub.get_one::<String>("category") {
        rows.retain(|t| &t.category == category);
    }
    if let Some(needle) = sub.get_one::<String>("search") {
        let needle = needle.to_lowercase();
        rows.retain(|t| t.description.to_lowercase().contains(&needle));
    }
    rows.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
    if let Some(limit) = sub.get_one::<usize>("limit") {
        rows.truncate(*limit);
    }
    Ok(rows)
}
