use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Numeric identifier of an item within a bank.
pub type ItemId = u32;

/// Opaque code naming a latent scoring dimension (e.g. `SCL`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConstructCode(pub String);

impl ConstructCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConstructCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ConstructCode {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Partial credit over constructs, carried by an option and recovered for an answer.
pub type ScoreVector = BTreeMap<ConstructCode, u32>;

/// The two item banks served by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BankId {
    Employer,
    Applicant,
}

impl BankId {
    pub const fn label(self) -> &'static str {
        match self {
            BankId::Employer => "employer",
            BankId::Applicant => "applicant",
        }
    }

    /// Prefix used when items are keyed as strings on the wire (`E3`, `Q12`).
    pub const fn key_prefix(self) -> char {
        match self {
            BankId::Employer => 'E',
            BankId::Applicant => 'Q',
        }
    }

    pub fn item_key(self, item_id: ItemId) -> String {
        format!("{}{}", self.key_prefix(), item_id)
    }
}

/// One selectable answer to an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemOption {
    pub text: String,
    #[serde(default)]
    pub scores: ScoreVector,
}

/// One question with its options in authored order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub prompt: String,
    pub options: Vec<ItemOption>,
}

/// A validated answer as submitted by the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemResponse {
    pub item_id: ItemId,
    pub chosen_text: String,
    #[serde(default)]
    pub latency_seconds: Option<f64>,
    #[serde(default)]
    pub answered_at: Option<DateTime<Utc>>,
}

impl ItemResponse {
    pub fn new(item_id: ItemId, chosen_text: impl Into<String>) -> Self {
        Self {
            item_id,
            chosen_text: chosen_text.into(),
            latency_seconds: None,
            answered_at: None,
        }
    }

    pub fn with_latency(mut self, latency_seconds: f64) -> Self {
        self.latency_seconds = Some(latency_seconds);
        self
    }
}

/// How a submitted answer was tied back to an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    Label,
    Exact,
    Substring,
    Unresolved,
}

/// Outcome of resolving one answer against the canonical item data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedAnswer {
    pub item_id: ItemId,
    pub chosen_text: String,
    pub matched_option: Option<ItemOption>,
    pub match_kind: MatchKind,
    pub contribution: ScoreVector,
    #[serde(default)]
    pub latency_seconds: Option<f64>,
    #[serde(default)]
    pub answered_at: Option<DateTime<Utc>>,
}

impl ResolvedAnswer {
    pub fn is_matched(&self) -> bool {
        self.matched_option.is_some()
    }
}
