use std::sync::Arc;

use axum::response::Response;
use axum::Router;
use serde_json::Value;

use crate::assessment::assessment_router;
use crate::assessment::bank::catalog::employer_items;
use crate::assessment::bank::{ItemBank, ItemBanks, RawItem, RawOption};
use crate::assessment::domain::{BankId, ItemResponse};
use crate::assessment::service::AssessmentEngine;
use crate::assessment::shuffle::Shuffler;

pub(super) const SEED: u64 = 11;

fn option(text: &str, scores: &[(&str, i64)]) -> RawOption {
    RawOption {
        text: text.to_string(),
        scores: scores
            .iter()
            .map(|(code, value)| (code.to_string(), *value))
            .collect(),
    }
}

/// Small applicant bank exercising ordinal scales, partial construct coverage and overlap.
pub(super) fn applicant_items() -> Vec<RawItem> {
    vec![
        RawItem {
            id: 1,
            prompt: "How often do your priorities shift?".to_string(),
            options: vec![
                option("Rarely", &[("CVL", 1)]),
                option("Occasionally", &[("CVL", 2)]),
                option("Frequently", &[("CVL", 3)]),
                option("Constantly", &[("CVL", 4)]),
            ],
        },
        RawItem {
            id: 2,
            prompt: "What keeps you going on long projects?".to_string(),
            options: vec![
                option("Visible progress", &[("MSD", 2)]),
                option("Ownership of the outcome", &[("MSD", 3), ("AJL", 2)]),
                option("No strong preference", &[]),
            ],
        },
        RawItem {
            id: 3,
            prompt: "I prefer clear direction before proceeding.".to_string(),
            options: vec![
                option("Agree", &[("SCL", 2)]),
                option("Strongly agree", &[("SCL", 3)]),
            ],
        },
        RawItem {
            id: 4,
            prompt: "You\u{2019}re told your plan is wrong. You:".to_string(),
            options: vec![
                option("You\u{2019}re overqualified for this", &[("ERL", 3)]),
                option("Shrug it off", &[("ERL", 1)]),
            ],
        },
        RawItem {
            id: 40,
            prompt: "Only asked in long assessments".to_string(),
            options: vec![
                option("Yes", &[("ICI", 3)]),
                option("No", &[("ICI", 1)]),
            ],
        },
    ]
}

pub(super) fn engine() -> AssessmentEngine {
    let banks = ItemBanks::new(
        ItemBank::from_raw(BankId::Employer, employer_items()),
        ItemBank::from_raw(BankId::Applicant, applicant_items()),
    );
    AssessmentEngine::new(banks, Shuffler::seeded(SEED))
}

pub(super) fn builtin_engine() -> AssessmentEngine {
    AssessmentEngine::builtin().with_shuffler(Shuffler::seeded(SEED))
}

pub(super) fn response(item_id: u32, text: &str) -> ItemResponse {
    ItemResponse::new(item_id, text)
}

pub(super) fn router() -> Router {
    assessment_router(Arc::new(engine()))
}

pub(super) fn builtin_router() -> Router {
    assessment_router(Arc::new(builtin_engine()))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
