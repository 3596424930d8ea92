// Copyright (c) 2025 Fintrack Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use fintrack::api::ApiClient;
use fintrack::commands::exporter;
use fintrack::config::Settings;
use fintrack::models::Transaction;
use fintrack::cli;
use rust_decimal::Decimal;
use tempfile::tempdir;

#[test]
fn csv_export_round_trips_through_the_reader() {
    let rows = vec![Transaction {
        id: 7,
        date: NaiveDate::from_ymd_opt(2025, 11, 3).unwrap(),
        category: "간식".to_string(),
        description: "coffee".to_string(),
        amount: Decimal::from(-2_100),
    }];

    let dir = tempdir().unwrap();
    let out_path = dir.path().join("ledger.csv");
    let out_str = out_path.to_string_lossy().to_string();
    exporter::write_csv(&out_str, &rows).unwrap();

    let mut rdr = csv::Reader::from_path(&out_path).unwrap();
    assert_eq!(
        rdr.headers().unwrap(),
        &csv::StringRecord::from(vec!["id", "date", "category", "description", "amount"])
    );
    let records: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
    assert_eq!(records.len(), 1);
    assert_eq!(&records[0][0], "7");
    assert_eq!(&records[0][1], "2025-11-03");
    assert_eq!(&records[0][2], "간식");
    assert_eq!(&records[0][4], "-2100");
}

#[test]
fn unknown_format_errors_without_creating_the_output_file() {
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("ledger.xml");
    let out_str = out_path.to_string_lossy().to_string();

    // Unroutable URL: the format check must fire before any request is made.
    let api = ApiClient::new(&Settings {
        api_url: "http://127.0.0.1:9".to_string(),
        access_token: None,
    })
    .unwrap();

    let matches = cli::build_cli().get_matches_from([
        "fintrack", "export", "--format", "xml", "--out", &out_str,
    ]);
    if let Some(("export", export_m)) = matches.subcommand() {
        assert!(exporter::handle(&api, export_m).is_err());
    } else {
        panic!("no export subcommand");
    }
    assert!(!out_path.exists());
}
