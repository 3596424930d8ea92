// Copyright (c) 2025 Fintrack Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::aggregate;
use crate::api::ApiClient;
use crate::utils::{current_period, maybe_print_json, parse_month, pretty_table};

pub fn handle(api: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let period = match sub.get_one::<String>("month") {
        Some(m) => parse_month(m)?,
        None => current_period(),
    };

    let transactions = api.list_transactions(None)?;
    let report = aggregate::monthly_report(&transactions, period);

    if maybe_print_json(json_flag, jsonl_flag, &report)? {
        return Ok(());
    }

    println!("Dashboard {}", period);
    println!(
        "{}",
        pretty_table(
            &["Income", "Expense", "Balance"],
            vec![vec![
                format!("{:.2}", report.summary.income),
                format!("{:.2}", report.summary.expense),
                format!("{:.2}", report.summary.balance),
            ]],
        )
    );

    // Biggest spenders first; the contract leaves the order to us.
    let mut categories = report.categories.clone();
    categories.sort_by(|a, b| b.total.cmp(&a.total));
    let cat_rows: Vec<Vec<String>> = categories
        .iter()
        .map(|c| {
            vec![
                c.name.clone(),
                format!("{:.2}", c.total),
                format!("{}%", c.percentage),
            ]
        })
        .collect();
    println!("{}", pretty_table(&["Category", "Spent", "Share"], cat_rows));

    let series_rows: Vec<Vec<String>> = report
        .series
        .iter()
        .map(|p| {
            vec![
                p.date.format("%m-%d").to_string(),
                format!("{:.2}", p.income),
                format!("{:.2}", p.expense),
                format!("{:.2}", p.balance),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Date", "Income", "Expense", "Balance"], series_rows)
    );

    let mut recent = aggregate::filter_by_period(&transactions, period);
    recent.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
    recent.truncate(5);
    let recent_rows: Vec<Vec<String>> = recent
        .iter()
        .map(|t| {
            vec![
                t.date.to_string(),
                t.category.clone(),
                t.description.clone(),
                format!("{:.2}", t.amount),
            ]
        })
        .collect();
    println!("Recent transactions");
    println!(
        "{}",
        pretty_table(&["Date", "Category", "Description", "Amount"], recent_rows)
    );
    Ok(())
}
