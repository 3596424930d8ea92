// Copyright (c) 2025 Fintrack Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use fintrack::config::{self, DEFAULT_API_URL, Settings};
use tempfile::tempdir;

#[test]
fn settings_round_trip_through_the_config_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");

    let settings = Settings {
        api_url: "https://fin.example.com/fin-track".to_string(),
        access_token: Some("ey.test.token".to_string()),
    };
    config::save_to(&path, &settings).unwrap();

    let loaded = config::load_from(&path).unwrap();
    assert_eq!(loaded.api_url, "https://fin.example.com/fin-track");
    assert_eq!(loaded.access_token.as_deref(), Some("ey.test.token"));
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("does-not-exist.json");
    let loaded = config::load_from(&path).unwrap();
    assert_eq!(loaded.api_url, DEFAULT_API_URL);
    assert!(loaded.access_token.is_none());
}

#[test]
fn token_field_is_optional_in_the_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"api_url": "http://localhost:9999"}"#).unwrap();
    let loaded = config::load_from(&path).unwrap();
    assert_eq!(loaded.api_url, "http://localhost:9999");
    assert!(loaded.access_token.is_none());
}
