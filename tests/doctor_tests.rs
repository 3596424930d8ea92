// Copyright (c) 2025 Fintrack Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use fintrack::api::ApiError;
use fintrack::commands::doctor;

#[test]
fn collects_every_failed_check() {
    let rows = doctor::failure_rows(
        Err(ApiError::Http {
            status: 502,
            message: "bad gateway".to_string(),
        }),
        Err(ApiError::MissingData),
    );
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0][0], "ping");
    assert!(rows[0][1].contains("502"));
    assert_eq!(rows[1][0], "ping-db");
}

#[test]
fn healthy_probes_produce_no_rows() {
    let rows = doctor::failure_rows(Ok("pong".to_string()), Ok("DB OK".to_string()));
    assert!(rows.is_empty());
}

#[test]
fn one_failure_still_reports_the_other_probe_as_healthy() {
    let rows = doctor::failure_rows(Ok("pong".to_string()), Err(ApiError::MissingData));
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][0], "ping-db");
}
