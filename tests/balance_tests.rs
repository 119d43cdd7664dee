// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use carteira::engine::compute_balance;
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

fn tx(id: i64, category_id: i64, amount: i64, paid: bool) -> Transaction {
    Transaction {
        id,
        description: Some(format!("tx-{id}")),
        category_id,
        user_id: 1,
        card_id: None,
        amount: Decimal::from(amount),
        currency: "BRL".to_string(),
        occurred_at: date("2025-06-01"),
        due_date: date("2025-06-10"),
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
fn paid_transactions_drive_the_balance() {
    let categories = vec![
        category(1, CategoryKind::Income),
        category(2, CategoryKind::Expense),
    ];
    let transactions = vec![
        tx(1, 1, 1000, true),
        tx(2, 2, 300, true),
        tx(3, 2, 50, false), // pending, must not contribute
    ];

    let balance = compute_balance(&transactions, &categories);
    assert_eq!(balance.income, Decimal::from(1000));
    assert_eq!(balance.expense, Decimal::from(300));
    assert_eq!(balance.investment, Decimal::ZERO);
    assert_eq!(balance.balance, Decimal::from(700));
}

#[test]
fn nothing_paid_means_zero_everywhere() {
    let categories = vec![
        category(1, CategoryKind::Income),
        category(2, CategoryKind::Expense),
        category(3, CategoryKind::Investment),
    ];
    let transactions = vec![
        tx(1, 1, 1000, false),
        tx(2, 2, 300, false),
        tx(3, 3, 200, false),
    ];

    let balance = compute_balance(&transactions, &categories);
    assert_eq!(balance.income, Decimal::ZERO);
    assert_eq!(balance.expense, Decimal::ZERO);
    assert_eq!(balance.investment, Decimal::ZERO);
    assert_eq!(balance.balance, Decimal::ZERO);
}

#[test]
fn unresolved_category_contributes_nothing() {
    let categories = vec![
        category(1, CategoryKind::Income),
        category(2, CategoryKind::Expense),
    ];
    let transactions = vec![
        tx(1, 1, 1000, true),
        tx(2, 2, 300, true),
        tx(3, 99, 500, true), // category 99 is not in the snapshot
    ];

    let balance = compute_balance(&transactions, &categories);
    assert_eq!(balance.income, Decimal::from(1000));
    assert_eq!(balance.expense, Decimal::from(300));
    assert_eq!(balance.investment, Decimal::ZERO);
    assert_eq!(balance.balance, Decimal::from(700));
}

#[test]
fn investments_reduce_available_cash() {
    let categories = vec![
        category(1, CategoryKind::Income),
        category(2, CategoryKind::Expense),
        category(3, CategoryKind::Investment),
    ];
    let transactions = vec![
        tx(1, 1, 5000, true),
        tx(2, 2, 1200, true),
        tx(3, 3, 800, true),
        tx(4, 2, 75, true),
    ];

    let balance = compute_balance(&transactions, &categories);
    assert_eq!(balance.income, Decimal::from(5000));
    assert_eq!(balance.expense, Decimal::from(1275));
    assert_eq!(balance.investment, Decimal::from(800));
    // Definitional identity, not just the concrete number.
    assert_eq!(
        balance.balance,
        balance.income - balance.expense - balance.investment
    );
    assert_eq!(balance.balance, Decimal::from(2925));
}

#[test]
fn empty_snapshot_is_a_zero_balance() {
    let balance = compute_balance(&[], &[]);
    assert_eq!(balance.income, Decimal::ZERO);
    assert_eq!(balance.balance, Decimal::ZERO);
}
