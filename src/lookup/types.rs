//! Suggestion data model and response decoding
//!
//! The lookup endpoints answer `{"results": [{"id", "text"}], "pagination":
//! {"more": bool}}`. Decoding is deliberately lenient: a missing or non-array
//! `results` is an empty page, rows that do not deserialize are skipped, and
//! only a body that is not JSON at all counts as a failure.

use std::fmt;

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Which lookup endpoint a picker queries. Paths are configured per kind in
/// the `[server]` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EndpointKind {
    #[default]
    Primary,
    Component,
}

/// Record id as the server sent it. Numbers stay numbers and strings stay
/// strings so the id round-trips through the submit payload unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SuggestionId {
    Number(i64),
    Text(String),
}

impl fmt::Display for SuggestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SuggestionId::Number(n) => write!(f, "{n}"),
            SuggestionId::Text(t) => f.write_str(t),
        }
    }
}

impl From<i64> for SuggestionId {
    fn from(n: i64) -> Self {
        SuggestionId::Number(n)
    }
}

impl From<&str> for SuggestionId {
    fn from(s: &str) -> Self {
        SuggestionId::Text(s.to_string())
    }
}

impl From<String> for SuggestionId {
    fn from(s: String) -> Self {
        SuggestionId::Text(s)
    }
}

impl From<&SuggestionId> for Value {
    fn from(id: &SuggestionId) -> Self {
        match id {
            SuggestionId::Number(n) => Value::from(*n),
            SuggestionId::Text(t) => Value::from(t.clone()),
        }
    }
}

/// One candidate record from a lookup endpoint
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Suggestion {
    pub id: SuggestionId,
    /// Display label. A row without one renders as an empty string.
    #[serde(default)]
    pub text: String,
}

impl Suggestion {
    pub fn new(id: impl Into<SuggestionId>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// Decoded page of suggestions plus the server's more-pages hint
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LookupPage {
    pub suggestions: Vec<Suggestion>,
    pub more: bool,
}

/// Lookup outcomes carried in worker replies
#[derive(Debug, Clone, Error)]
pub enum LookupError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("server returned status {0}")]
    Status(u16),

    #[error("invalid response body: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            LookupError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            LookupError::Status(status.as_u16())
        } else {
            LookupError::Transport(err.to_string())
        }
    }
}

/// Decode a raw response body. Fails only when the body is not JSON.
pub fn parse_lookup_body(body: &str) -> Result<LookupPage, LookupError> {
    let value: Value =
        serde_json::from_str(body).map_err(|err| LookupError::Decode(err.to_string()))?;
    Ok(parse_lookup_value(&value))
}

/// Extract suggestions from an already-decoded JSON body.
pub fn parse_lookup_value(value: &Value) -> LookupPage {
    let mut suggestions = Vec::new();
    let mut skipped = 0usize;

    if let Some(rows) = value.get("results").and_then(Value::as_array) {
        for row in rows {
            match serde_json::from_value::<Suggestion>(row.clone()) {
                Ok(suggestion) => suggestions.push(suggestion),
                Err(_) => skipped += 1,
            }
        }
    }

    if skipped > 0 {
        log::debug!("skipped {} malformed suggestion rows", skipped);
    }

    let more = value
        .pointer("/pagination/more")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    LookupPage { suggestions, more }
}
