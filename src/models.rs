// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CURRENCY: &str = "BRL";

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub doc: String,
    pub phone: String,
    pub r#type: i64,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Category kind. The backend encodes it as the ordinal 0/1/2; that mapping
/// is the wire contract and must not drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum CategoryKind {
    Income,
    Expense,
    Investment,
}

impl From<CategoryKind> for u8 {
    fn from(kind: CategoryKind) -> u8 {
        match kind {
            CategoryKind::Income => 0,
            CategoryKind::Expense => 1,
            CategoryKind::Investment => 2,
        }
    }
}

impl TryFrom<u8> for CategoryKind {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(CategoryKind::Income),
            1 => Ok(CategoryKind::Expense),
            2 => Ok(CategoryKind::Investment),
            other => Err(format!(
                "invalid category kind code {other}, expected 0, 1 or 2"
            )),
        }
    }
}

impl CategoryKind {
    pub fn label(self) -> &'static str {
        match self {
            CategoryKind::Income => "income",
            CategoryKind::Expense => "expense",
            CategoryKind::Investment => "investment",
        }
    }
}

/// Settlement state of a transaction, "Y"/"N" on the wire. A missing flag
/// reads as Pending. The only transition is Pending -> Paid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PaidStatus {
    Paid,
    #[default]
    Pending,
}

impl PaidStatus {
    pub fn is_paid(self) -> bool {
        matches!(self, PaidStatus::Paid)
    }
}

impl From<PaidStatus> for String {
    fn from(status: PaidStatus) -> String {
        match status {
            PaidStatus::Paid => "Y",
            PaidStatus::Pending => "N",
        }
        .to_string()
    }
}

impl TryFrom<String> for PaidStatus {
    type Error = String;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        match code.as_str() {
            "Y" => Ok(PaidStatus::Paid),
            "N" => Ok(PaidStatus::Pending),
            other => Err(format!("invalid paid flag '{other}', expected Y or N")),
        }
    }
}

/// Recurrence flag, "Y"/"N" on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Recurrence {
    Recurring,
    #[default]
    OneTime,
}

impl From<Recurrence> for String {
    fn from(rec: Recurrence) -> String {
        match rec {
            Recurrence::Recurring => "Y",
            Recurrence::OneTime => "N",
        }
        .to_string()
    }
}

impl TryFrom<String> for Recurrence {
    type Error = String;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        match code.as_str() {
            "Y" => Ok(Recurrence::Recurring),
            "N" => Ok(Recurrence::OneTime),
            other => Err(format!("invalid recurring flag '{other}', expected Y or N")),
        }
    }
}

/// Whether a card is shared with other household members, "Y"/"N" on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CardScope {
    Shared,
    #[default]
    Personal,
}

impl From<CardScope> for String {
    fn from(scope: CardScope) -> String {
        match scope {
            CardScope::Shared => "Y",
            CardScope::Personal => "N",
        }
        .to_string()
    }
}

impl TryFrom<String> for CardScope {
    type Error = String;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        match code.as_str() {
            "Y" => Ok(CardScope::Shared),
            "N" => Ok(CardScope::Personal),
            other => Err(format!("invalid shared flag '{other}', expected Y or N")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i64,
    /// None marks a system-wide default, read-only to end users.
    #[serde(default)]
    pub user_id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: CategoryKind,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Category {
    pub fn is_system(&self) -> bool {
        self.user_id.is_none()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: i64,
    #[serde(default)]
    pub issuer: Option<String>,
    #[serde(default)]
    pub last_four_digits: Option<String>,
    #[serde(default)]
    pub alias: Option<String>,
    #[serde(default)]
    pub shared: CardScope,
    pub user_id: i64,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Card {
    pub fn masked_number(&self) -> String {
        format!(
            "**** **** **** {}",
            self.last_four_digits.as_deref().unwrap_or("****")
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: i64,
    #[serde(default)]
    pub description: Option<String>,
    pub category_id: i64,
    pub user_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_id: Option<i64>,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(with = "wire_date")]
    pub occurred_at: NaiveDate,
    #[serde(with = "wire_date")]
    pub due_date: NaiveDate,
    #[serde(default)]
    pub is_recurring: Recurrence,
    #[serde(default)]
    pub is_paid: PaidStatus,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCard {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_four_digits: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    pub shared: CardScope,
    pub user_id: i64,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_four_digits: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared: Option<CardScope>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: CategoryKind,
    pub user_id: i64,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<CategoryKind>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub category_id: i64,
    pub user_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_id: Option<i64>,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub currency: String,
    #[serde(with = "wire_date")]
    pub occurred_at: NaiveDate,
    #[serde(with = "wire_date")]
    pub due_date: NaiveDate,
    pub is_recurring: Recurrence,
    pub is_paid: PaidStatus,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_id: Option<i64>,
    #[serde(
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(with = "wire_date_opt", skip_serializing_if = "Option::is_none")]
    pub occurred_at: Option<NaiveDate>,
    #[serde(with = "wire_date_opt", skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_recurring: Option<Recurrence>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_paid: Option<PaidStatus>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Calendar dates cross the wire as "YYYY-MM-DD"; the backend sometimes
/// appends a "T..." time suffix, which is tolerated on decode and never
/// emitted.
pub(crate) mod wire_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(date: &NaiveDate, ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_str(&date.format("%Y-%m-%d").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(de)?;
        let day = raw.split('T').next().unwrap_or(raw.as_str());
        NaiveDate::parse_from_str(day, "%Y-%m-%d").map_err(de::Error::custom)
    }
}

pub(crate) mod wire_date_opt {
    use chrono::NaiveDate;
    use serde::Serializer;

    pub fn serialize<S: Serializer>(
        date: &Option<NaiveDate>,
        ser: S,
    ) -> Result<S::Ok, S::Error> {
        match date {
            Some(d) => super::wire_date::serialize(d, ser),
            None => ser.serialize_none(),
        }
    }
}
