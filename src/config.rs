// Copyright (c) 2025 Fintrack Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("dev.fintrack", "Fintrack", "fintrack"));

pub const DEFAULT_API_URL: &str = "http://localhost:8080/fin-track";

/// Client settings persisted between runs. The access token is issued by an
/// external auth service and is opaque here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub api_url: String,
    #[serde(default)]
    pub access_token: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            api_url: DEFAULT_API_URL.to_string(),
            access_token: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific config dir")?;
    let config_dir = proj.config_dir();
    fs::create_dir_all(config_dir).context("Failed to create config dir")?;
    Ok(config_dir.join("config.json"))
}

pub fn load_from(path: &Path) -> Result<Settings> {
    let mut settings = if path.exists() {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Read config at {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Parse config at {}", path.display()))?
    } else {
        Settings::default()
    };
    if let Ok(url) = std::env::var("FINTRACK_API_URL") {
        settings.api_url = url;
    }
    if let Ok(token) = std::env::var("FINTRACK_TOKEN") {
        settings.access_token = Some(token);
    }
    Ok(settings)
}

pub fn save_to(path: &Path, settings: &Settings) -> Result<()> {
    fs::write(path, serde_json::to_string_pretty(settings)?)
        .with_context(|| format!("Write config at {}", path.display()))?;
    Ok(())
}

pub fn load() -> Result<Settings> {
    load_from(&config_path()?)
}

pub fn save(settings: &Settings) -> Result<()> {
    save_to(&config_path()?, settings)
}
