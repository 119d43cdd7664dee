// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use reqwest::blocking::RequestBuilder;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::models::{
    Card, CardPatch, Category, CategoryKind, CategoryPatch, Credentials, NewCard, NewCategory,
    NewTransaction, Transaction, TransactionPatch, User,
};

const UA: &str = concat!(
    "carteira/",
    env!("CARGO_PKG_VERSION"),
    " (+https://github.com/alphavelocity/carteira)"
);

pub const ENV_BASE_URL: &str = "CARTEIRA_API_URL";
pub const DEFAULT_BASE_URL: &str = "https://api.carteira.example/api";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("could not decode server response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("{0}")]
    Server(String),
    #[error("server response carried no data")]
    EmptyBody,
}

/// Blocking client for the carteira backend. Responses usually arrive in a
/// `{success, data, message, error, timestamp}` envelope, but bare payloads
/// are accepted too; either way the caller sees the payload or an error.
pub struct ApiClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .user_agent(UA)
            .build()?;
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Ok(ApiClient { http, base_url })
    }

    /// Base URL from CARTEIRA_API_URL, falling back to the hosted default.
    pub fn from_env() -> Result<Self, ApiError> {
        let base = std::env::var(ENV_BASE_URL).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn raw(&self, req: RequestBuilder) -> Result<Value, ApiError> {
        let resp = req.send()?;
        let status = resp.status();
        let text = resp.text()?;
        // Failure bodies are not guaranteed to be JSON; fall back to the
        // status line when they aren't.
        let value: Value = match serde_json::from_str(&text) {
            Ok(value) => value,
            Err(_) if text.trim().is_empty() => Value::Null,
            Err(e) if status.is_success() => return Err(ApiError::Decode(e)),
            Err(_) => Value::Null,
        };
        if !status.is_success() {
            let message = envelope_failure(&value)
                .unwrap_or_else(|| format!("request failed with status {status}"));
            return Err(ApiError::Server(message));
        }
        Ok(value)
    }

    fn fetch<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T, ApiError> {
        decode_body(self.raw(req)?)
    }

    fn confirm(&self, req: RequestBuilder) -> Result<(), ApiError> {
        let value = self.raw(req)?;
        match envelope_failure(&value) {
            Some(message) => Err(ApiError::Server(message)),
            None => Ok(()),
        }
    }

    pub fn login(&self, email: &str, password: &str) -> Result<User, ApiError> {
        let credentials = Credentials {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.fetch(self.http.post(self.url("/login")).json(&credentials))
    }

    pub fn cards_by_user(&self, user_id: i64) -> Result<Vec<Card>, ApiError> {
        self.fetch(self.http.get(self.url(&format!("/card/all/{user_id}"))))
    }

    pub fn create_card(&self, card: &NewCard) -> Result<Card, ApiError> {
        self.fetch(self.http.post(self.url("/card")).json(card))
    }

    pub fn update_card(&self, id: i64, patch: &CardPatch) -> Result<Card, ApiError> {
        self.fetch(self.http.put(self.url(&format!("/card/{id}"))).json(patch))
    }

    pub fn delete_card(&self, id: i64) -> Result<(), ApiError> {
        self.confirm(self.http.delete(self.url(&format!("/card/{id}"))))
    }

    pub fn categories_by_user(&self, user_id: i64) -> Result<Vec<Category>, ApiError> {
        self.fetch(self.http.get(self.url(&format!("/category/all/{user_id}"))))
    }

    pub fn categories_by_kind(
        &self,
        kind: CategoryKind,
        user_id: i64,
    ) -> Result<Vec<Category>, ApiError> {
        let code = u8::from(kind);
        self.fetch(
            self.http
                .get(self.url(&format!("/category/{code}/{user_id}"))),
        )
    }

    pub fn create_category(&self, category: &NewCategory) -> Result<Category, ApiError> {
        self.fetch(self.http.post(self.url("/category")).json(category))
    }

    pub fn update_category(&self, id: i64, patch: &CategoryPatch) -> Result<Category, ApiError> {
        self.fetch(
            self.http
                .put(self.url(&format!("/category/{id}")))
                .json(patch),
        )
    }

    pub fn delete_category(&self, id: i64) -> Result<(), ApiError> {
        self.confirm(self.http.delete(self.url(&format!("/category/{id}"))))
    }

    pub fn transactions_by_user(&self, user_id: i64) -> Result<Vec<Transaction>, ApiError> {
        self.fetch(self.http.get(self.url(&format!("/transaction/{user_id}"))))
    }

    pub fn create_transaction(&self, tx: &NewTransaction) -> Result<Transaction, ApiError> {
        self.fetch(self.http.post(self.url("/transaction")).json(tx))
    }

    pub fn update_transaction(
        &self,
        id: i64,
        patch: &TransactionPatch,
    ) -> Result<Transaction, ApiError> {
        self.fetch(
            self.http
                .put(self.url(&format!("/transaction/{id}")))
                .json(patch),
        )
    }

    /// The one-way Pending -> Paid transition. There is no reverse call.
    pub fn pay_transaction(&self, id: i64) -> Result<Transaction, ApiError> {
        self.fetch(self.http.patch(self.url(&format!("/transaction/{id}/pay"))))
    }

    pub fn delete_transaction(&self, id: i64) -> Result<(), ApiError> {
        self.confirm(self.http.delete(self.url(&format!("/transaction/{id}"))))
    }
}

fn envelope_failure(value: &Value) -> Option<String> {
    let obj = value.as_object()?;
    let success = obj.get("success")?.as_bool()?;
    if success {
        return None;
    }
    let message = obj
        .get("message")
        .or_else(|| obj.get("error"))
        .and_then(Value::as_str)
        .unwrap_or("server reported a failure");
    Some(message.to_string())
}

/// Unwrap a response body into its payload. Enveloped bodies yield their
/// `data` field (a failure envelope becomes `ApiError::Server`); anything
/// without a `success` key is treated as the payload itself.
pub fn decode_body<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    if let Some(message) = envelope_failure(&value) {
        return Err(ApiError::Server(message));
    }
    let payload = match value {
        Value::Object(mut obj) if obj.contains_key("success") => {
            obj.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    };
    if payload.is_null() {
        return Err(ApiError::EmptyBody);
    }
    Ok(serde_json::from_value(payload)?)
}
