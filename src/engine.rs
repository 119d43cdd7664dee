// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Category, CategoryKind, Transaction};

pub const DEFAULT_RECENT_LIMIT: usize = 5;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("invalid {field} '{value}', expected YYYY-MM-DD")]
    InvalidDate { field: &'static str, value: String },
    #[error("invalid category filter '{0}', expected a numeric id or 'all'")]
    InvalidCategory(String),
    #[error("invalid card filter '{0}', expected a numeric id or 'all'")]
    InvalidCard(String),
    #[error("invalid paid filter '{0}', expected 'paid', 'pending' or 'all'")]
    InvalidPaid(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Balance {
    pub income: Decimal,
    pub expense: Decimal,
    pub investment: Decimal,
    pub balance: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total_amount: Decimal,
    pub paid_amount: Decimal,
    pub pending_amount: Decimal,
    pub total_count: usize,
    pub paid_count: usize,
    pub pending_count: usize,
}

fn kind_index(categories: &[Category]) -> HashMap<i64, CategoryKind> {
    categories.iter().map(|c| (c.id, c.kind)).collect()
}

/// Typed totals over the paid portion of a transaction snapshot.
///
/// Only Paid transactions contribute. Each one's amount is accumulated under
/// its category's kind; `balance = income - expense - investment`, since an
/// investment is an outflow of available cash. A transaction whose category
/// id does not resolve within `categories` contributes zero to every total
/// (fail-open, never an error).
pub fn compute_balance(transactions: &[Transaction], categories: &[Category]) -> Balance {
    let kinds = kind_index(categories);
    let mut income = Decimal::ZERO;
    let mut expense = Decimal::ZERO;
    let mut investment = Decimal::ZERO;
    for tx in transactions {
        if !tx.is_paid.is_paid() {
            continue;
        }
        let Some(kind) = kinds.get(&tx.category_id) else {
            continue;
        };
        match kind {
            CategoryKind::Income => income += tx.amount,
            CategoryKind::Expense => expense += tx.amount,
            CategoryKind::Investment => investment += tx.amount,
        }
    }
    Balance {
        income,
        expense,
        investment,
        balance: income - expense - investment,
    }
}

/// The most recent expense-kind transactions, paid or not, newest occurrence
/// date first. The sort is stable, so same-day expenses keep their snapshot
/// order. Never returns more than `limit` items.
pub fn recent_expenses(
    transactions: &[Transaction],
    categories: &[Category],
    limit: usize,
) -> Vec<Transaction> {
    let kinds = kind_index(categories);
    let mut expenses: Vec<Transaction> = transactions
        .iter()
        .filter(|tx| kinds.get(&tx.category_id) == Some(&CategoryKind::Expense))
        .cloned()
        .collect();
    expenses.sort_by(|a, b| b.occurred_at.cmp(&a.occurred_at));
    expenses.truncate(limit);
    expenses
}

/// Filter values as they arrive from the boundary: ids as decimal strings or
/// "all", dates as "YYYY-MM-DD" or empty for unbounded, paid as
/// "paid"/"pending"/"all", search as a free-text needle. The defaults select
/// everything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawFilters {
    pub search: String,
    pub category_id: String,
    pub card_id: String,
    pub is_paid: String,
    pub start_date: String,
    pub end_date: String,
}

impl Default for RawFilters {
    fn default() -> Self {
        RawFilters {
            search: String::new(),
            category_id: "all".to_string(),
            card_id: "all".to_string(),
            is_paid: "all".to_string(),
            start_date: String::new(),
            end_date: String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PaidFilter {
    #[default]
    All,
    Paid,
    Pending,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub category_id: Option<i64>,
    pub card_id: Option<i64>,
    pub paid: PaidFilter,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub search: Option<String>,
}

fn parse_id(
    value: &str,
    err: impl Fn(String) -> FilterError,
) -> Result<Option<i64>, FilterError> {
    match value {
        "" | "all" => Ok(None),
        other => other
            .parse::<i64>()
            .map(Some)
            .map_err(|_| err(other.to_string())),
    }
}

fn parse_bound(field: &'static str, value: &str) -> Result<Option<NaiveDate>, FilterError> {
    if value.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| FilterError::InvalidDate {
            field,
            value: value.to_string(),
        })
}

impl TryFrom<&RawFilters> for FilterCriteria {
    type Error = FilterError;

    fn try_from(raw: &RawFilters) -> Result<Self, Self::Error> {
        let paid = match raw.is_paid.as_str() {
            "" | "all" => PaidFilter::All,
            "paid" => PaidFilter::Paid,
            "pending" => PaidFilter::Pending,
            other => return Err(FilterError::InvalidPaid(other.to_string())),
        };
        let search = raw.search.trim();
        Ok(FilterCriteria {
            category_id: parse_id(&raw.category_id, FilterError::InvalidCategory)?,
            card_id: parse_id(&raw.card_id, FilterError::InvalidCard)?,
            paid,
            start_date: parse_bound("start date", &raw.start_date)?,
            end_date: parse_bound("end date", &raw.end_date)?,
            search: if search.is_empty() {
                None
            } else {
                Some(search.to_lowercase())
            },
        })
    }
}

impl FilterCriteria {
    pub fn matches(&self, tx: &Transaction) -> bool {
        if let Some(id) = self.category_id {
            if tx.category_id != id {
                return false;
            }
        }
        if let Some(id) = self.card_id {
            if tx.card_id != Some(id) {
                return false;
            }
        }
        match self.paid {
            PaidFilter::All => {}
            PaidFilter::Paid => {
                if !tx.is_paid.is_paid() {
                    return false;
                }
            }
            PaidFilter::Pending => {
                if tx.is_paid.is_paid() {
                    return false;
                }
            }
        }
        // Date bounds are inclusive on the occurrence date.
        if let Some(start) = self.start_date {
            if tx.occurred_at < start {
                return false;
            }
        }
        if let Some(end) = self.end_date {
            if tx.occurred_at > end {
                return false;
            }
        }
        if let Some(needle) = self.search.as_deref() {
            let hit = tx
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(needle));
            if !hit {
                return false;
            }
        }
        true
    }
}

/// AND of every active predicate over the full snapshot, preserving the
/// snapshot's relative order. Malformed criteria fail the whole operation
/// rather than silently matching everything.
pub fn apply_filters(
    transactions: &[Transaction],
    filters: &RawFilters,
) -> Result<Vec<Transaction>, FilterError> {
    let criteria = FilterCriteria::try_from(filters)?;
    Ok(transactions
        .iter()
        .filter(|tx| criteria.matches(tx))
        .cloned()
        .collect())
}

/// Total, paid, and pending amounts and counts over an already-filtered
/// list. Paid/pending is read straight off each transaction; no category
/// resolution is involved.
pub fn summarize(transactions: &[Transaction]) -> Summary {
    let mut summary = Summary::default();
    for tx in transactions {
        summary.total_amount += tx.amount;
        summary.total_count += 1;
        if tx.is_paid.is_paid() {
            summary.paid_amount += tx.amount;
            summary.paid_count += 1;
        } else {
            summary.pending_amount += tx.amount;
            summary.pending_count += 1;
        }
    }
    summary
}
