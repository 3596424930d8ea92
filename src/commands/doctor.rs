// Copyright (c) 2025 Fintrack Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::api::{ApiClient, ApiError};
use crate::utils::pretty_table;

pub fn handle(api: &ApiClient) -> Result<()> {
    // 1) server reachable at all, 2) server can reach its own database
    let rows = failure_rows(api.ping(), api.ping_db());
    if rows.is_empty() {
        println!("✅ doctor: API and its database are reachable");
    } else {
        println!("{}", pretty_table(&["Check", "Failure"], rows));
    }
    Ok(())
}

/// Both probes always report; a dead server shows up as two rows, not one.
pub fn failure_rows(
    ping: Result<String, ApiError>,
    ping_db: Result<String, ApiError>,
) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    if let Err(err) = ping {
        rows.push(vec!["ping".into(), err.to_string()]);
    }
    if let Err(err) = ping_db {
        rows.push(vec!["ping-db".into(), err.to_string()]);
    }
    rows
}
