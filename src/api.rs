// Copyright (c) 2025 Fintrack Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde::Deserialize;
use thiserror::Error;

use crate::config::Settings;
use crate::models::{Period, Transaction, TransactionDraft};
use crate::utils::http_client;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },
    #[error("API rejected the request (status {code}): {message}")]
    Rejected { code: i64, message: String },
    #[error("API response carried no data payload")]
    MissingData,
    #[error("malformed API response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Response wrapper used by every fin-track JSON endpoint. `statusCode` zero
/// means success; anything else carries a human-readable `message`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    pub status_code: i64,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<Vec<serde_json::Value>>,
}

/// Decode a transaction listing from an envelope body. Records that fail to
/// deserialize (bad date, bad amount) are skipped with a warning so one
/// corrupt record cannot blank the whole ledger.
pub fn transactions_from_envelope(body: &str) -> Result<Vec<Transaction>, ApiError> {
    let envelope: Envelope = serde_json::from_str(body)?;
    if envelope.status_code != 0 {
        return Err(ApiError::Rejected {
            code: envelope.status_code,
            message: envelope
                .message
                .unwrap_or_else(|| "unknown error".to_string()),
        });
    }
    let data = envelope.data.ok_or(ApiError::MissingData)?;
    let mut transactions = Vec::with_capacity(data.len());
    for record in data {
        match serde_json::from_value::<Transaction>(record) {
            Ok(t) => transactions.push(t),
            Err(err) => eprintln!("Skipping malformed transaction record: {}", err),
        }
    }
    Ok(transactions)
}

/// Map a non-success HTTP response to an error, surfacing the envelope's
/// `message` when the body carries one. Transport-level status lives in
/// `ApiError::Http`; the envelope's application `statusCode` stays in
/// `ApiError::Rejected`.
pub fn http_rejection(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<Envelope>(body)
        .ok()
        .and_then(|e| e.message)
        .unwrap_or_else(|| "request failed".to_string());
    ApiError::Http { status, message }
}

pub struct ApiClient {
    http: reqwest::blocking::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(settings: &Settings) -> Result<Self> {
        Ok(ApiClient {
            http: http_client()?,
            base_url: settings.api_url.trim_end_matches('/').to_string(),
            token: settings.access_token.clone(),
        })
    }

    fn authorized(&self, req: reqwest::blocking::RequestBuilder) -> reqwest::blocking::RequestBuilder {
        match &self.token {
            Some(t) => req.bearer_auth(t),
            None => req,
        }
    }

    fn check(resp: reqwest::blocking::Response) -> Result<reqwest::blocking::Response, ApiError> {
        if resp.status().is_success() {
            return Ok(resp);
        }
        let status = resp.status().as_u16();
        let body = resp.text().unwrap_or_default();
        Err(http_rejection(status, &body))
    }

    /// GET /api/v1/transactions, optionally scoped to a month server-side.
    pub fn list_transactions(&self, month: Option<Period>) -> Result<Vec<Transaction>, ApiError> {
        let mut url = format!("{}/api/v1/transactions", self.base_url);
        if let Some(period) = month {
            url.push_str(&format!("?month={}", period));
        }
        let resp = Self::check(self.authorized(self.http.get(url)).send()?)?;
        transactions_from_envelope(&resp.text()?)
    }

    pub fn add_transaction(&self, draft: &TransactionDraft) -> Result<(), ApiError> {
        let url = format!("{}/api/v1/transactions", self.base_url);
        Self::check(self.authorized(self.http.post(url)).json(draft).send()?)?;
        Ok(())
    }

    pub fn update_transaction(&self, id: i64, draft: &TransactionDraft) -> Result<(), ApiError> {
        let url = format!("{}/api/v1/transactions/{}", self.base_url, id);
        Self::check(self.authorized(self.http.put(url)).json(draft).send()?)?;
        Ok(())
    }

    pub fn delete_transaction(&self, id: i64) -> Result<(), ApiError> {
        let url = format!("{}/api/v1/transactions/{}", self.base_url, id);
        Self::check(self.authorized(self.http.delete(url)).send()?)?;
        Ok(())
    }

    /// GET /ping, plain text ("pong" when the server is up).
    pub fn ping(&self) -> Result<String, ApiError> {
        let resp = Self::check(self.http.get(format!("{}/ping", self.base_url)).send()?)?;
        Ok(resp.text()?)
    }

    /// GET /ping-db, plain text; exercises the server's database connection.
    pub fn ping_db(&self) -> Result<String, ApiError> {
        let resp = Self::check(self.http.get(format!("{}/ping-db", self.base_url)).send()?)?;
        Ok(resp.text()?)
    }
}
