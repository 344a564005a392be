//! End-to-end tests over the HTTP surface, with the hosted analytics API
//! replaced by a stub provider serving canned result sets.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::{Duration, Utc};
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use devactivity_backend::app::create_app;
use devactivity_backend::config::Config;
use devactivity_backend::external::dataset_provider::{DatasetProvider, ProviderError};
use devactivity_backend::models::{Dataset, Row};
use devactivity_backend::state::AppState;

struct StubProvider {
    datasets: HashMap<Uuid, Vec<Row>>,
}

#[async_trait]
impl DatasetProvider for StubProvider {
    async fn fetch_latest(&self, query_id: Uuid) -> Result<Dataset, ProviderError> {
        self.datasets
            .get(&query_id)
            .map(|rows| Dataset::new(rows.clone()))
            .ok_or_else(|| ProviderError::BadResponse(format!("no dataset for query {}", query_id)))
    }
}

fn rows(value: Value) -> Vec<Row> {
    serde_json::from_value(value).expect("array of objects")
}

fn test_app() -> axum::Router {
    let config = Config::from_env().expect("default config");
    let now = Utc::now();

    let mut datasets = HashMap::new();
    datasets.insert(
        config.queries.current_price,
        rows(json!([{"HOURLY_PRICE": 2.44}])),
    );
    datasets.insert(
        config.queries.hourly_price,
        rows(json!([
            {"BLOCKCHAIN": "NEAR", "HOUR": (now - Duration::hours(30)).to_rfc3339(), "HOURLY_PRICE": 2.31},
            {"BLOCKCHAIN": "FLOW", "HOUR": (now - Duration::hours(2)).to_rfc3339(), "HOURLY_PRICE": 1.05},
            {"BLOCKCHAIN": "NEAR", "HOUR": (now - Duration::hours(2)).to_rfc3339(), "HOURLY_PRICE": 2.40},
            {"BLOCKCHAIN": "NEAR", "HOUR": (now - Duration::hours(1)).to_rfc3339(), "HOURLY_PRICE": 2.44},
        ])),
    );
    datasets.insert(
        config.queries.summary_metrics,
        rows(json!([{
            "Organizations": 119, "Repositories": 1403, "Developers": 2360,
            "PRs": 74012, "Actions": 385115, "Issues": 41921
        }])),
    );
    datasets.insert(
        config.queries.daily_activity,
        rows(json!([
            {"DATE": "2023-01-25", "Developers": 31, "PRs": 12, "Issues": 4},
            {"DATE": "2023-01-26", "Developers": 28, "PRs": 9, "Issues": 7},
        ])),
    );
    datasets.insert(
        config.queries.developer_roles,
        rows(json!([
            {"AUTHORASSOCIATION": "OWNER", "COUNT": 10},
            {"AUTHORASSOCIATION": "OWNER", "COUNT": 3},
        ])),
    );
    datasets.insert(
        config.queries.devs_by_org,
        rows(json!([{"ORG": "near", "NO_OF_DEVELOPERS": 240}])),
    );
    datasets.insert(
        config.queries.devs_by_repo,
        rows(json!([{"REPO": "near/nearcore", "NO_OF_DEVELOPERS": 118}])),
    );

    let state = AppState {
        provider: Arc::new(StubProvider { datasets }),
        config: Arc::new(config),
    };
    create_app(state)
}

async fn get(app: axum::Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::String(
            String::from_utf8_lossy(&bytes).into_owned(),
        ))
    };
    (status, body)
}

#[tokio::test]
async fn health_answers_ok() {
    let (status, body) = get(test_app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::String("OK".to_string()));
}

#[tokio::test]
async fn current_price_is_passed_through() {
    let (status, body) = get(test_app(), "/api/price/current").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["price"], json!(2.44));
}

#[tokio::test]
async fn all_time_history_keeps_every_row_of_the_configured_chain() {
    let (status, body) = get(test_app(), "/api/price/history?range=all").await;
    assert_eq!(status, StatusCode::OK);
    // Three NEAR rows; the FLOW row never reaches the chart.
    assert_eq!(body["meta"]["points"], json!(3));
    assert_eq!(body["meta"]["range"], json!("All Time"));
}

#[tokio::test]
async fn day_window_drops_rows_older_than_24_hours() {
    let (status, body) = get(test_app(), "/api/price/history?range=24h").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["meta"]["points"], json!(2));
    let series = body["series"].as_array().unwrap();
    assert_eq!(series[0]["price"], json!(2.40));
    assert_eq!(series[1]["price"], json!(2.44));
}

#[tokio::test]
async fn unknown_range_is_rejected() {
    let (status, body) = get(test_app(), "/api/price/history?range=fortnight").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        Value::String("unknown time range selector 'fortnight'".to_string())
    );
}

#[tokio::test]
async fn missing_range_is_rejected() {
    let (status, _) = get(test_app(), "/api/price/history").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn summary_metrics_come_back_as_named_counters() {
    let (status, body) = get(test_app(), "/api/metrics").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["organizations"], json!(119));
    assert_eq!(body["issues"], json!(41921));
}

#[tokio::test]
async fn daily_activity_projects_the_requested_metric() {
    let (status, body) = get(test_app(), "/api/activity?metric=prs").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([
        {"date": "2023-01-25", "count": 12},
        {"date": "2023-01-26", "count": 9},
    ]));
}

#[tokio::test]
async fn unknown_activity_metric_is_rejected() {
    let (status, _) = get(test_app(), "/api/activity?metric=commits").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn role_share_keeps_duplicate_labels() {
    let (status, body) = get(test_app(), "/api/developers/roles").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([
        {"label": "OWNER", "value": 10.0},
        {"label": "OWNER", "value": 3.0},
    ]));
}

#[tokio::test]
async fn org_and_repo_shares_are_served() {
    let (status, body) = get(test_app(), "/api/developers/orgs").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["label"], json!("near"));

    let (status, body) = get(test_app(), "/api/developers/repos").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["value"], json!(118.0));
}
