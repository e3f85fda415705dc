use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::assessment::domain::{BankId, ItemId};

use super::catalog;

/// Item as authored, before load-time validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawItem {
    pub id: ItemId,
    #[serde(alias = "text")]
    pub prompt: String,
    #[serde(default)]
    pub options: Vec<RawOption>,
}

/// Option as authored. Scores are signed so malformed credit can be detected and dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawOption {
    pub text: String,
    #[serde(default)]
    pub scores: BTreeMap<String, i64>,
}

/// Content file layout: one list of raw items per bank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentDocument {
    #[serde(default)]
    pub employer: Vec<RawItem>,
    #[serde(default)]
    pub applicant: Vec<RawItem>,
}

impl ContentDocument {
    pub fn items(&self, bank: BankId) -> &[RawItem] {
        match bank {
            BankId::Employer => &self.employer,
            BankId::Applicant => &self.applicant,
        }
    }
}

/// Supplier of raw item tables, versioned independently of the engine.
pub trait ContentSource: Send + Sync {
    fn raw_items(&self, bank: BankId) -> Result<Vec<RawItem>, ContentError>;
}

/// Content compiled into the crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl ContentSource for BuiltinCatalog {
    fn raw_items(&self, bank: BankId) -> Result<Vec<RawItem>, ContentError> {
        Ok(match bank {
            BankId::Employer => catalog::employer_items(),
            BankId::Applicant => catalog::applicant_items(),
        })
    }
}

/// Content read from a JSON document (`{"employer": [...], "applicant": [...]}`).
#[derive(Debug, Clone, Default)]
pub struct JsonContentSource {
    document: ContentDocument,
}

impl JsonContentSource {
    pub fn from_document(document: ContentDocument) -> Self {
        Self { document }
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ContentError> {
        let document = serde_json::from_reader(reader)?;
        Ok(Self { document })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ContentError> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn document(&self) -> &ContentDocument {
        &self.document
    }
}

impl ContentSource for JsonContentSource {
    fn raw_items(&self, bank: BankId) -> Result<Vec<RawItem>, ContentError> {
        Ok(self.document.items(bank).to_vec())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("failed to read content: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse content: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_source_accepts_text_alias_and_missing_scores() {
        let payload = r#"{
            "applicant": [
                {"id": 3, "text": "Pick one", "options": [
                    {"text": "Left", "scores": {"SCL": 2}},
                    {"text": "Right"}
                ]}
            ]
        }"#;
        let source = JsonContentSource::from_reader(payload.as_bytes()).expect("parse");

        let applicant = source.raw_items(BankId::Applicant).expect("applicant");
        assert_eq!(applicant.len(), 1);
        assert_eq!(applicant[0].prompt, "Pick one");
        assert!(applicant[0].options[1].scores.is_empty());
        assert!(source.raw_items(BankId::Employer).expect("employer").is_empty());
    }

    #[test]
    fn malformed_json_is_a_content_error() {
        let error = JsonContentSource::from_reader("{\"applicant\": 7}".as_bytes())
            .expect_err("should fail");
        assert!(matches!(error, ContentError::Json(_)));
    }
}
