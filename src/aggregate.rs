// Copyright (c) 2025 Fintrack Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Monthly aggregation over an in-memory ledger. Pure functions, no I/O:
//! every derived value is recomputed from scratch per call.

use std::collections::BTreeMap;

use chrono::Datelike;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{BalancePoint, CategorySpend, MonthlyReport, Period, Summary, Transaction};

/// Transactions whose date falls in the given calendar month, matched on
/// parsed year/month components rather than string prefixes.
pub fn filter_by_period(transactions: &[Transaction], period: Period) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|t| t.date.year() == period.year && t.date.month() == period.month)
        .cloned()
        .collect()
}

/// Income/expense/balance totals. Order-independent summation; zero amounts
/// contribute to neither side.
pub fn compute_summary(period_transactions: &[Transaction]) -> Summary {
    let mut income = Decimal::ZERO;
    let mut expense = Decimal::ZERO;
    for t in period_transactions {
        if t.amount > Decimal::ZERO {
            income += t.amount;
        } else if t.amount < Decimal::ZERO {
            expense += -t.amount;
        }
    }
    Summary {
        income,
        expense,
        balance: income - expense,
    }
}

/// Expense totals per category with each category's share of the period's
/// total expense. Categories with no expense activity are omitted; when the
/// total expense is zero every percentage is zero.
pub fn compute_category_breakdown(period_transactions: &[Transaction]) -> Vec<CategorySpend> {
    let mut totals: BTreeMap<&str, Decimal> = BTreeMap::new();
    for t in period_transactions {
        if t.amount < Decimal::ZERO {
            *totals.entry(t.category.as_str()).or_insert(Decimal::ZERO) += -t.amount;
        }
    }
    let grand_total: Decimal = totals.values().copied().sum();
    totals
        .into_iter()
        .map(|(name, total)| CategorySpend {
            name: name.to_string(),
            total,
            percentage: if grand_total.is_zero() {
                0
            } else {
                (total * Decimal::ONE_HUNDRED / grand_total)
                    .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
                    .to_u32()
                    .unwrap_or(0)
            },
        })
        .collect()
}

/// Cumulative balance trace: one point per distinct date with activity,
/// ascending, carrying the running balance after that date. The running
/// total starts at zero for the period; nothing carries over from earlier
/// months.
pub fn compute_balance_series(period_transactions: &[Transaction]) -> Vec<BalancePoint> {
    let mut daily: BTreeMap<chrono::NaiveDate, (Decimal, Decimal)> = BTreeMap::new();
    for t in period_transactions {
        let entry = daily.entry(t.date).or_insert((Decimal::ZERO, Decimal::ZERO));
        if t.amount > Decimal::ZERO {
            entry.0 += t.amount;
        } else if t.amount < Decimal::ZERO {
            entry.1 += -t.amount;
        }
    }
    let mut running = Decimal::ZERO;
    daily
        .into_iter()
        .map(|(date, (income, expense))| {
            running += income - expense;
            BalancePoint {
                date,
                income,
                expense,
                balance: running,
            }
        })
        .collect()
}

/// Filter to the period and compute all three derived views in one pass.
pub fn monthly_report(transactions: &[Transaction], period: Period) -> MonthlyReport {
    let scoped = filter_by_period(transactions, period);
    MonthlyReport {
        summary: compute_summary(&scoped),
        categories: compute_category_breakdown(&scoped),
        series: compute_balance_series(&scoped),
    }
}
