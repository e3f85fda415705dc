//! Boundary validation of raw response payloads.
//!
//! Malformed entries are rejected explicitly (and logged), never coerced.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};
use tracing::warn;

use super::domain::{ItemId, ItemResponse};

/// Highest ordinal an employer item accepts.
pub const EMPLOYER_MAX_ORDINAL: i64 = 4;

/// One response value as it arrives on the wire.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawAnswer {
    Text(String),
    Detailed {
        #[serde(alias = "text", alias = "choice")]
        chosen_text: String,
        latency_seconds: Option<f64>,
        answered_at: Option<DateTime<Utc>>,
    },
    Other(serde_json::Value),
}

impl From<&str> for RawAnswer {
    fn from(value: &str) -> Self {
        RawAnswer::Text(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ResponseRejection {
    #[error("key `{0}` is not an item id (expected `12`, `Q12` or `E12`)")]
    UnrecognizedKey(String),
    #[error("chosen text is empty")]
    EmptyChoice,
    #[error("response value is not text")]
    NotText,
    #[error("latency {0} is not a non-negative number of seconds")]
    InvalidLatency(f64),
    #[error("item {0} was answered more than once")]
    DuplicateItem(ItemId),
    #[error("employer answer is not an integer")]
    NotAnOrdinal,
    #[error("employer answer {0} is outside 1..=4")]
    OrdinalOutOfRange(i64),
}

impl Serialize for ResponseRejection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RejectedResponse {
    pub key: String,
    pub reason: ResponseRejection,
}

impl RejectedResponse {
    fn logged(key: &str, reason: ResponseRejection) -> Self {
        warn!(key, reason = %reason, "rejected response entry");
        Self {
            key: key.to_string(),
            reason,
        }
    }
}

/// Accepted responses (sorted by item id) alongside every rejected entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResponseBatch {
    pub accepted: Vec<ItemResponse>,
    pub rejected: Vec<RejectedResponse>,
}

/// Parse `12`, `Q12`, `q12`, `E12` into item id 12. Id 0 is never valid.
pub fn parse_item_key(key: &str) -> Option<ItemId> {
    let trimmed = key.trim();
    let digits = trimmed
        .strip_prefix(['Q', 'q', 'E', 'e'])
        .unwrap_or(trimmed);
    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    digits.parse::<ItemId>().ok().filter(|id| *id > 0)
}

pub fn validate_responses<K: AsRef<str>>(
    raw: impl IntoIterator<Item = (K, RawAnswer)>,
) -> ResponseBatch {
    let mut accepted: BTreeMap<ItemId, ItemResponse> = BTreeMap::new();
    let mut rejected = Vec::new();

    for (key, answer) in raw {
        let key = key.as_ref();
        match validate_entry(key, answer) {
            Ok(response) if accepted.contains_key(&response.item_id) => {
                rejected.push(RejectedResponse::logged(
                    key,
                    ResponseRejection::DuplicateItem(response.item_id),
                ));
            }
            Ok(response) => {
                accepted.insert(response.item_id, response);
            }
            Err(reason) => rejected.push(RejectedResponse::logged(key, reason)),
        }
    }

    ResponseBatch {
        accepted: accepted.into_values().collect(),
        rejected,
    }
}

fn validate_entry(key: &str, answer: RawAnswer) -> Result<ItemResponse, ResponseRejection> {
    let item_id =
        parse_item_key(key).ok_or_else(|| ResponseRejection::UnrecognizedKey(key.to_string()))?;

    let (chosen_text, latency_seconds, answered_at) = match answer {
        RawAnswer::Text(text) => (text, None, None),
        RawAnswer::Detailed {
            chosen_text,
            latency_seconds,
            answered_at,
        } => (chosen_text, latency_seconds, answered_at),
        RawAnswer::Other(_) => return Err(ResponseRejection::NotText),
    };

    if chosen_text.trim().is_empty() {
        return Err(ResponseRejection::EmptyChoice);
    }
    if let Some(latency) = latency_seconds {
        if !latency.is_finite() || latency < 0.0 {
            return Err(ResponseRejection::InvalidLatency(latency));
        }
    }

    Ok(ItemResponse {
        item_id,
        chosen_text,
        latency_seconds,
        answered_at,
    })
}

/// Employer ordinals (1..=4) keyed by item id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployerAnswers {
    ordinals: BTreeMap<ItemId, u8>,
}

impl EmployerAnswers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn validate<K: AsRef<str>>(
        raw: impl IntoIterator<Item = (K, serde_json::Value)>,
    ) -> (Self, Vec<RejectedResponse>) {
        let mut answers = Self::new();
        let mut rejected = Vec::new();

        for (key, value) in raw {
            let key = key.as_ref();
            let outcome = parse_item_key(key)
                .ok_or_else(|| ResponseRejection::UnrecognizedKey(key.to_string()))
                .and_then(|item_id| {
                    let ordinal = value.as_i64().ok_or(ResponseRejection::NotAnOrdinal)?;
                    answers.insert(item_id, ordinal)
                });
            if let Err(reason) = outcome {
                rejected.push(RejectedResponse::logged(key, reason));
            }
        }

        (answers, rejected)
    }

    pub fn insert(&mut self, item_id: ItemId, ordinal: i64) -> Result<(), ResponseRejection> {
        if !(1..=EMPLOYER_MAX_ORDINAL).contains(&ordinal) {
            return Err(ResponseRejection::OrdinalOutOfRange(ordinal));
        }
        if self.ordinals.contains_key(&item_id) {
            return Err(ResponseRejection::DuplicateItem(item_id));
        }
        // in range 1..=4, so the narrowing cannot truncate
        self.ordinals.insert(item_id, ordinal as u8);
        Ok(())
    }

    pub fn get(&self, item_id: ItemId) -> Option<u8> {
        self.ordinals.get(&item_id).copied()
    }

    pub fn len(&self) -> usize {
        self.ordinals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordinals.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ItemId, u8)> + '_ {
        self.ordinals.iter().map(|(item_id, ordinal)| (*item_id, *ordinal))
    }
}

impl FromIterator<(ItemId, u8)> for EmployerAnswers {
    fn from_iter<I: IntoIterator<Item = (ItemId, u8)>>(iter: I) -> Self {
        Self {
            ordinals: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn item_keys_accept_plain_and_prefixed_forms() {
        assert_eq!(parse_item_key("12"), Some(12));
        assert_eq!(parse_item_key("Q12"), Some(12));
        assert_eq!(parse_item_key(" e7 "), Some(7));
        assert_eq!(parse_item_key("Q0"), None);
        assert_eq!(parse_item_key("QQ1"), None);
        assert_eq!(parse_item_key("+3"), None);
        assert_eq!(parse_item_key("item"), None);
    }

    #[test]
    fn raw_answers_deserialize_from_text_or_object() {
        let raw: BTreeMap<String, RawAnswer> = serde_json::from_value(json!({
            "Q1": "Start and adjust as you go",
            "2": {"text": "Rules evolve based on situations", "latency_seconds": 4.5},
            "3": 7,
        }))
        .expect("deserialize");

        assert_eq!(raw["Q1"], RawAnswer::from("Start and adjust as you go"));
        assert!(matches!(
            raw["2"],
            RawAnswer::Detailed { latency_seconds: Some(latency), .. } if latency == 4.5
        ));
        assert!(matches!(raw["3"], RawAnswer::Other(_)));
    }

    #[test]
    fn malformed_entries_are_rejected_not_coerced() {
        let batch = validate_responses(vec![
            ("Q1", RawAnswer::from("Clear rules and procedures")),
            ("1", RawAnswer::from("Rules evolve based on situations")),
            ("Q2", RawAnswer::from("   ")),
            ("abc", RawAnswer::from("Agree")),
            ("3", RawAnswer::Other(json!(true))),
            (
                "4",
                RawAnswer::Detailed {
                    chosen_text: "Agree".into(),
                    latency_seconds: Some(-1.0),
                    answered_at: None,
                },
            ),
        ]);

        assert_eq!(batch.accepted.len(), 1);
        assert_eq!(batch.accepted[0].chosen_text, "Clear rules and procedures");
        let reasons: Vec<_> = batch.rejected.iter().map(|r| r.reason.clone()).collect();
        assert_eq!(
            reasons,
            vec![
                ResponseRejection::DuplicateItem(1),
                ResponseRejection::EmptyChoice,
                ResponseRejection::UnrecognizedKey("abc".into()),
                ResponseRejection::NotText,
                ResponseRejection::InvalidLatency(-1.0),
            ]
        );
    }

    #[test]
    fn employer_answers_require_integer_ordinals() {
        let (answers, rejected) = EmployerAnswers::validate(vec![
            ("E1", json!(3)),
            ("2", json!(4)),
            ("3", json!(5)),
            ("4", json!(2.5)),
            ("5", json!("2")),
        ]);

        assert_eq!(answers.len(), 2);
        assert_eq!(answers.get(1), Some(3));
        let reasons: Vec<_> = rejected.into_iter().map(|r| r.reason).collect();
        assert_eq!(
            reasons,
            vec![
                ResponseRejection::OrdinalOutOfRange(5),
                ResponseRejection::NotAnOrdinal,
                ResponseRejection::NotAnOrdinal,
            ]
        );
    }
}
