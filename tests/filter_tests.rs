// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use carteira::engine::{FilterError, RawFilters, apply_filters};
use carteira::models::{PaidStatus, Recurrence, Transaction};
use chrono::NaiveDate;
use rust_decimal::Decimal;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn tx(id: i64, category_id: i64, card_id: Option<i64>, paid: bool, day: &str) -> Transaction {
    Transaction {
        id,
        description: Some(format!("transaction number {id}")),
        category_id,
        user_id: 1,
        card_id,
        amount: Decimal::from(10 * id),
        currency: "BRL".to_string(),
        occurred_at: date(day),
        due_date: date(day),
        is_recurring: Recurrence::OneTime,
        is_paid: if paid {
            PaidStatus::Paid
        } else {
            PaidStatus::Pending
        },
        created_at: None,
        updated_at: None,
    }
}

fn snapshot() -> Vec<Transaction> {
    vec![
        tx(1, 1, None, true, "2025-03-01"),
        tx(2, 2, Some(7), true, "2025-03-05"),
        tx(3, 2, None, false, "2025-03-09"),
        tx(4, 3, Some(7), false, "2025-04-02"),
        tx(5, 1, Some(8), true, "2025-04-20"),
    ]
}

fn ids(transactions: &[Transaction]) -> Vec<i64> {
    transactions.iter().map(|t| t.id).collect()
}

#[test]
fn default_criteria_select_everything() {
    let all = snapshot();
    let filtered = apply_filters(&all, &RawFilters::default()).unwrap();
    assert_eq!(ids(&filtered), vec![1, 2, 3, 4, 5]);
}

#[test]
fn pending_filter_selects_only_unsettled() {
    let all = vec![
        tx(1, 1, None, true, "2025-03-01"),
        tx(2, 2, None, true, "2025-03-02"),
        tx(3, 2, None, false, "2025-03-03"),
    ];
    let filters = RawFilters {
        is_paid: "pending".to_string(),
        ..RawFilters::default()
    };
    let filtered = apply_filters(&all, &filters).unwrap();
    assert_eq!(ids(&filtered), vec![3]);
}

#[test]
fn filtering_is_idempotent() {
    let all = snapshot();
    let filters = RawFilters {
        is_paid: "paid".to_string(),
        start_date: "2025-03-01".to_string(),
        ..RawFilters::default()
    };
    let once = apply_filters(&all, &filters).unwrap();
    let twice = apply_filters(&once, &filters).unwrap();
    assert_eq!(ids(&once), ids(&twice));
}

#[test]
fn date_bounds_are_inclusive() {
    let all = snapshot();
    let filters = RawFilters {
        start_date: "2025-03-05".to_string(),
        end_date: "2025-04-02".to_string(),
        ..RawFilters::default()
    };
    let filtered = apply_filters(&all, &filters).unwrap();
    assert_eq!(ids(&filtered), vec![2, 3, 4]);
}

#[test]
fn start_beyond_every_transaction_is_empty_not_an_error() {
    let all = snapshot();
    let filters = RawFilters {
        start_date: "2030-01-01".to_string(),
        ..RawFilters::default()
    };
    let filtered = apply_filters(&all, &filters).unwrap();
    assert!(filtered.is_empty());
}

#[test]
fn unparseable_dates_fail_the_operation() {
    let all = snapshot();
    let filters = RawFilters {
        start_date: "03/01/2025".to_string(),
        ..RawFilters::default()
    };
    let err = apply_filters(&all, &filters).unwrap_err();
    assert_eq!(
        err,
        FilterError::InvalidDate {
            field: "start date",
            value: "03/01/2025".to_string(),
        }
    );
}

#[test]
fn malformed_ids_and_paid_flags_are_rejected() {
    let all = snapshot();
    let bad_category = RawFilters {
        category_id: "groceries".to_string(),
        ..RawFilters::default()
    };
    assert_eq!(
        apply_filters(&all, &bad_category).unwrap_err(),
        FilterError::InvalidCategory("groceries".to_string())
    );

    let bad_paid = RawFilters {
        is_paid: "settled".to_string(),
        ..RawFilters::default()
    };
    assert_eq!(
        apply_filters(&all, &bad_paid).unwrap_err(),
        FilterError::InvalidPaid("settled".to_string())
    );
}

#[test]
fn category_filter_is_an_exact_match() {
    let all = snapshot();
    let filters = RawFilters {
        category_id: "2".to_string(),
        ..RawFilters::default()
    };
    let filtered = apply_filters(&all, &filters).unwrap();
    assert_eq!(ids(&filtered), vec![2, 3]);
}

#[test]
fn card_filter_matches_the_card_and_skips_cash() {
    let all = snapshot();
    let filters = RawFilters {
        card_id: "7".to_string(),
        ..RawFilters::default()
    };
    let filtered = apply_filters(&all, &filters).unwrap();
    assert_eq!(ids(&filtered), vec![2, 4]);
}

#[test]
fn search_is_a_case_insensitive_substring() {
    let mut all = snapshot();
    all[0].description = Some("Supermarket RUN".to_string());
    all[2].description = None; // no description never matches

    let filters = RawFilters {
        search: "supermarket".to_string(),
        ..RawFilters::default()
    };
    let filtered = apply_filters(&all, &filters).unwrap();
    assert_eq!(ids(&filtered), vec![1]);
}

#[test]
fn combined_predicates_and_together_in_snapshot_order() {
    let all = snapshot();
    let filters = RawFilters {
        is_paid: "paid".to_string(),
        end_date: "2025-04-30".to_string(),
        ..RawFilters::default()
    };
    let filtered = apply_filters(&all, &filters).unwrap();
    // Stable filter: original relative order survives.
    assert_eq!(ids(&filtered), vec![1, 2, 5]);
}
