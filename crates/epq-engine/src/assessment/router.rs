use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::{BankId, ConstructCode, ItemId};
use super::environment::EnvironmentClass;
use super::intake::{validate_responses, EmployerAnswers, RawAnswer};
use super::service::AssessmentEngine;
use super::shuffle::Presentation;

/// Router builder exposing item listing and scoring endpoints.
pub fn assessment_router(engine: Arc<AssessmentEngine>) -> Router {
    Router::new()
        .route("/api/v1/banks/:bank/items", get(items_handler))
        .route("/api/v1/employer/scope", post(employer_scope_handler))
        .route("/api/v1/applicant/score", post(applicant_score_handler))
        .route(
            "/api/v1/environment/dimensions",
            post(environment_dimensions_handler),
        )
        .with_state(engine)
}

#[derive(Debug, Default, Deserialize)]
pub struct ItemsQuery {
    pub max_items: Option<u32>,
    #[serde(default)]
    pub shuffle: bool,
}

/// Option as served to the presentation layer: scores never leave the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionView {
    pub label: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemView {
    pub id: ItemId,
    pub prompt: String,
    pub options: Vec<OptionView>,
}

impl From<Presentation> for ItemView {
    fn from(presentation: Presentation) -> Self {
        Self {
            id: presentation.item_id,
            prompt: presentation.prompt,
            options: presentation
                .options
                .into_iter()
                .map(|presented| OptionView {
                    label: presented.label,
                    text: presented.option.text,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct EmployerScopeRequest {
    pub answers: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub struct ApplicantScoreRequest {
    pub responses: BTreeMap<String, RawAnswer>,
    /// Role environment; the full applicant bank is scored when absent.
    #[serde(default)]
    pub environment: Option<EnvironmentClass>,
}

#[derive(Debug, Deserialize)]
pub struct DimensionsRequest {
    pub construct_scores: BTreeMap<ConstructCode, f64>,
}

fn parse_bank(bank: &str) -> Option<BankId> {
    match bank.trim().to_ascii_lowercase().as_str() {
        "employer" => Some(BankId::Employer),
        "applicant" => Some(BankId::Applicant),
        _ => None,
    }
}

pub(crate) async fn items_handler(
    State(engine): State<Arc<AssessmentEngine>>,
    Path(bank): Path<String>,
    Query(query): Query<ItemsQuery>,
) -> Response {
    let Some(bank_id) = parse_bank(&bank) else {
        let payload = json!({
            "error": format!("unknown item bank `{bank}`"),
        });
        return (StatusCode::NOT_FOUND, axum::Json(payload)).into_response();
    };

    let presentations = if query.shuffle {
        engine.present_items(bank_id, query.max_items)
    } else {
        engine
            .list_items(bank_id, query.max_items)
            .iter()
            .map(Presentation::unshuffled)
            .collect()
    };
    let items: Vec<ItemView> = presentations.into_iter().map(ItemView::from).collect();

    let payload = json!({
        "bank": bank_id.label(),
        "max_items": query.max_items,
        "count": items.len(),
        "items": items,
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

pub(crate) async fn employer_scope_handler(
    State(engine): State<Arc<AssessmentEngine>>,
    axum::Json(request): axum::Json<EmployerScopeRequest>,
) -> Response {
    let (answers, rejected) = EmployerAnswers::validate(request.answers);
    let missing: Vec<ItemId> = engine
        .bank(BankId::Employer)
        .items(None)
        .iter()
        .map(|item| item.id)
        .filter(|item_id| answers.get(*item_id).is_none())
        .collect();

    if !rejected.is_empty() || !missing.is_empty() {
        let payload = json!({
            "error": "every employer item must be answered with an integer from 1 to 4",
            "missing": missing,
            "rejected": rejected,
        });
        return (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response();
    }

    let scope = engine.employer_scope(&answers);
    let payload = json!({
        "environment": scope.environment.label(),
        "max_items": scope.max_items,
        "overall_average": (scope.overall_average * 100.0).round() / 100.0,
        "band": scope.band.label(),
        "band_description": scope.band.description(),
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

pub(crate) async fn applicant_score_handler(
    State(engine): State<Arc<AssessmentEngine>>,
    axum::Json(request): axum::Json<ApplicantScoreRequest>,
) -> Response {
    let batch = validate_responses(request.responses);
    let environment = request.environment.unwrap_or(EnvironmentClass::High);
    let report = engine.evaluate_applicant(environment, batch);
    (StatusCode::OK, axum::Json(report)).into_response()
}

pub(crate) async fn environment_dimensions_handler(
    State(engine): State<Arc<AssessmentEngine>>,
    axum::Json(request): axum::Json<DimensionsRequest>,
) -> Response {
    let profile = engine.map_to_environment_dimensions(&request.construct_scores);
    (StatusCode::OK, axum::Json(profile)).into_response()
}
