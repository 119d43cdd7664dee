// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use carteira::engine::{DEFAULT_RECENT_LIMIT, recent_expenses};
use carteira::models::{Category, CategoryKind, PaidStatus, Recurrence, Transaction};
use chrono::NaiveDate;
use rust_decimal::Decimal;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn category(id: i64, kind: CategoryKind) -> Category {
    Category {
        id,
        user_id: Some(1),
        name: format!("cat-{id}"),
        description: None,
        kind,
        created_at: None,
        updated_at: None,
    }
}

fn tx(id: i64, category_id: i64, paid: bool, day: &str) -> Transaction {
    Transaction {
        id,
        description: None,
        category_id,
        user_id: 1,
        card_id: None,
        amount: Decimal::from(id),
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

#[test]
fn only_expense_kind_transactions_show_up() {
    let categories = vec![
        category(1, CategoryKind::Income),
        category(2, CategoryKind::Expense),
        category(3, CategoryKind::Investment),
    ];
    let transactions = vec![
        tx(1, 1, true, "2025-05-01"),
        tx(2, 2, true, "2025-05-02"),
        tx(3, 3, true, "2025-05-03"),
        tx(4, 2, false, "2025-05-04"), // pending expenses count too
    ];

    let recent = recent_expenses(&transactions, &categories, DEFAULT_RECENT_LIMIT);
    let ids: Vec<i64> = recent.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![4, 2]);
}

#[test]
fn never_more_than_the_limit() {
    let categories = vec![category(2, CategoryKind::Expense)];
    let transactions: Vec<Transaction> = (1..=10)
        .map(|i| tx(i, 2, true, &format!("2025-05-{:02}", i)))
        .collect();

    let recent = recent_expenses(&transactions, &categories, 3);
    assert_eq!(recent.len(), 3);
    let ids: Vec<i64> = recent.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![10, 9, 8]);
}

#[test]
fn same_day_expenses_keep_their_snapshot_order() {
    let categories = vec![category(2, CategoryKind::Expense)];
    let transactions = vec![
        tx(1, 2, true, "2025-05-01"),
        tx(2, 2, true, "2025-05-03"),
        tx(3, 2, true, "2025-05-03"),
        tx(4, 2, true, "2025-05-02"),
    ];

    let recent = recent_expenses(&transactions, &categories, 10);
    let ids: Vec<i64> = recent.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![2, 3, 4, 1]);
}

#[test]
fn unresolved_categories_are_not_expenses() {
    let categories = vec![category(2, CategoryKind::Expense)];
    let transactions = vec![
        tx(1, 2, true, "2025-05-01"),
        tx(2, 99, true, "2025-05-02"), // unknown category
    ];

    let recent = recent_expenses(&transactions, &categories, 10);
    let ids: Vec<i64> = recent.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1]);
}
