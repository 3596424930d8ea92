// Copyright (c) 2025 Fintrack Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A ledger entry as the fin-track API returns it. Positive amounts are
/// income, negative amounts are expenses; the magnitude is the transacted
/// value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub date: NaiveDate,
    pub category: String,
    pub description: String,
    pub amount: Decimal,
}

/// Request body for creating or replacing a transaction.
#[derive(Debug, Clone, Serialize)]
pub struct TransactionDraft {
    pub date: NaiveDate,
    pub category: String,
    pub description: String,
    pub amount: Decimal,
}

/// A calendar year+month used to scope a ledger view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    pub year: i32,
    pub month: u32, // 1-12
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Summary {
    pub income: Decimal,
    pub expense: Decimal,
    pub balance: Decimal,
}

/// Per-category expense total within a period. `percentage` is the share of
/// the period's total expense, 0-100.
#[derive(Debug, Clone, Serialize)]
pub struct CategorySpend {
    pub name: String,
    pub total: Decimal,
    pub percentage: u32,
}

/// One point of the cumulative balance series: a date with activity, its
/// income/expense totals, and the running balance after that date.
#[derive(Debug, Clone, Serialize)]
pub struct BalancePoint {
    pub date: NaiveDate,
    pub income: Decimal,
    pub expense: Decimal,
    pub balance: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthlyReport {
    pub summary: Summary,
    pub categories: Vec<CategorySpend>,
    pub series: Vec<BalancePoint>,
}
