use super::common::*;
use axum::body::Body;
use axum::extract::{Path, Query, State};
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use crate::assessment::router::{items_handler, ItemsQuery};

fn post_json(uri: &str, payload: Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&payload).expect("encode")))
        .expect("request")
}

#[tokio::test]
async fn items_route_lists_capped_items_without_scores() {
    let response = router()
        .oneshot(
            Request::get("/api/v1/banks/applicant/items?max_items=3")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["count"], 3);
    assert_eq!(payload["items"][0]["options"][0]["label"], "A");
    assert_eq!(payload["items"][0]["options"][0]["text"], "Rarely");
    assert!(payload["items"][0]["options"][0].get("scores").is_none());
}

#[tokio::test]
async fn items_handler_shuffles_on_request() {
    let engine = Arc::new(engine());
    let response = items_handler(
        State(engine),
        Path("applicant".to_string()),
        Query(ItemsQuery {
            max_items: Some(1),
            shuffle: true,
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let mut texts: Vec<String> = payload["items"][0]["options"]
        .as_array()
        .expect("options")
        .iter()
        .map(|option| option["text"].as_str().expect("text").to_string())
        .collect();
    texts.sort();
    assert_eq!(texts, vec!["Constantly", "Frequently", "Occasionally", "Rarely"]);
}

#[tokio::test]
async fn unknown_bank_is_not_found() {
    let response = router()
        .oneshot(
            Request::get("/api/v1/banks/manager/items")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn employer_scope_requires_every_item() {
    let response = builtin_router()
        .oneshot(post_json(
            "/api/v1/employer/scope",
            json!({"answers": {"1": 3, "2": 9}}),
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert_eq!(payload["missing"].as_array().map(Vec::len), Some(19));
    assert_eq!(payload["rejected"][0]["key"], "2");
}

#[tokio::test]
async fn employer_scope_returns_environment_and_cap() {
    let answers: serde_json::Map<String, Value> =
        (1..=20).map(|id| (format!("E{id}"), json!(3))).collect();
    let response = builtin_router()
        .oneshot(post_json(
            "/api/v1/employer/scope",
            json!({ "answers": answers }),
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["environment"], "high");
    assert_eq!(payload["max_items"], 50);
    assert_eq!(payload["band"], "Advanced");
}

#[tokio::test]
async fn applicant_score_route_reports_constructs_and_rejections() {
    let response = router()
        .oneshot(post_json(
            "/api/v1/applicant/score",
            json!({
                "environment": "low",
                "responses": {
                    "Q1": "frequently",
                    "Q3": {"text": "Strongly agree", "latency_seconds": 3.2},
                    "Q9": 12,
                    "Q40": "Yes"
                }
            }),
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["max_items"], 25);
    assert_eq!(payload["summary"]["construct_scores"]["CVL"], 3.0);
    assert_eq!(payload["summary"]["construct_scores"]["SCL"], 3.0);
    assert_eq!(payload["ignored_items"], json!([40]));
    assert_eq!(payload["rejected"][0]["key"], "Q9");
}

#[tokio::test]
async fn environment_dimensions_route_maps_scores() {
    let response = router()
        .oneshot(post_json(
            "/api/v1/environment/dimensions",
            json!({"construct_scores": {"AJL": 4.0, "ICI": 4.0, "ERL": 1.0}}),
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["autonomy"], 100);
    assert_eq!(payload["collaboration"], 100);
    assert_eq!(payload["structure"], 50);
}
