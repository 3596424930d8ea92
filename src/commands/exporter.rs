// Copyright (c) 2025 Fintrack Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, bail};

use crate::aggregate::filter_by_period;
use crate::api::ApiClient;
use crate::models::Transaction;
use crate::utils::parse_month;

pub fn handle(api: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();
    // Reject bad formats before touching the network or the output path.
    if !matches!(fmt.as_str(), "csv" | "json") {
        bail!("Unknown format: {} (use csv|json)", fmt);
    }
    let month = sub
        .get_one::<String>("month")
        .map(|s| parse_month(s))
        .transpose()?;

    let mut rows = api.list_transactions(month)?;
    if let Some(period) = month {
        rows = filter_by_period(&rows, period);
    }
    rows.sort_by(|a, b| a.date.cmp(&b.date).then(a.id.cmp(&b.id)));

    if fmt == "csv" {
        write_csv(out, &rows)?;
    } else {
        std::fs::write(out, serde_json::to_string_pretty(&rows)?)?;
    }
    println!("Exported {} transactions to {}", rows.len(), out);
    Ok(())
}

pub fn write_csv(out: &str, rows: &[Transaction]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(out)?;
    wtr.write_record(["id", "date", "category", "description", "amount"])?;
    for t in rows {
        wtr.write_record([
            t.id.to_string(),
            t.date.to_string(),
            t.category.clone(),
            t.description.clone(),
            t.amount.to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}
