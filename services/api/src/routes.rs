use crate::infra::AppState;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use talent_rank::ranking::{Candidate, FilterCriteria, RankingEngine};
use tracing::info;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RankRequest {
    #[serde(default)]
    pub(crate) job_description: Option<String>,
    #[serde(default)]
    pub(crate) filters: FilterCriteria,
    #[serde(default)]
    pub(crate) candidates: Option<Vec<Candidate>>,
}

pub(crate) fn with_ranking_routes(engine: Arc<RankingEngine>) -> Router {
    Router::new()
        .route("/api/v1/rank", post(rank_endpoint))
        .with_state(engine)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn rank_endpoint(
    State(engine): State<Arc<RankingEngine>>,
    Json(payload): Json<RankRequest>,
) -> Response {
    let RankRequest {
        job_description,
        filters,
        candidates,
    } = payload;

    let Some(candidates) = candidates else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Missing candidates" })),
        )
            .into_response();
    };

    info!(candidates = candidates.len(), "rank request received");
    let ranked = engine.rank(job_description.as_deref(), &filters, &candidates);
    Json(ranked).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use serde_json::Value;
    use std::sync::atomic::AtomicBool;
    use tower::ServiceExt;

    fn app(ready: bool) -> Router {
        let state = AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
        };
        with_ranking_routes(Arc::new(RankingEngine::default())).layer(Extension(state))
    }

    async fn post_rank(body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/rank")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request builds");

        let response = app(true).oneshot(request).await.expect("router responds");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");
        (status, serde_json::from_slice(&bytes).expect("json body"))
    }

    #[tokio::test]
    async fn rank_endpoint_returns_ranked_candidates() {
        let (status, body) = post_rank(json!({
            "jobDescription": "React developer with 2+ years in Pune",
            "filters": { "maxSalary": 1500000 },
            "candidates": [
                {
                    "id": "C1", "name": "Neha", "skills": ["React"], "experience": 4,
                    "location": "Pune", "salaryExpectation": 1100000,
                    "resumeText": "React developer with 4 years"
                },
                {
                    "id": "C2", "name": "Amit", "skills": ["Java"], "experience": 3,
                    "location": "Pune", "salaryExpectation": 900000,
                    "resumeText": "Java backend engineer"
                },
                {
                    "id": "C3", "name": "Riya", "skills": ["React"], "experience": 6,
                    "location": "Pune", "salaryExpectation": 1900000,
                    "resumeText": "React lead"
                }
            ]
        }))
        .await;

        assert_eq!(status, StatusCode::OK);
        let ranked = body.as_array().expect("array body");
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0]["id"], "C1");
        assert_eq!(ranked[0]["rank"], 1);
        assert_eq!(ranked[0]["score"], 1.0);
        assert_eq!(ranked[0]["matchedSkills"], json!(["React"]));
        assert_eq!(ranked[1]["missingSkills"], json!(["React"]));
        assert_eq!(ranked[1]["experienceFit"], "Meets Requirement");
    }

    #[tokio::test]
    async fn missing_candidates_is_a_bad_request() {
        let (status, body) = post_rank(json!({ "jobDescription": "React developer" })).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Missing candidates" }));
    }

    #[tokio::test]
    async fn empty_pool_returns_empty_array() {
        let (status, body) = post_rank(json!({ "candidates": [] })).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn readiness_reports_initializing_until_bound() {
        let request = Request::builder()
            .uri("/ready")
            .body(Body::empty())
            .expect("request builds");

        let response = app(false).oneshot(request).await.expect("router responds");
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let Json(body) = healthcheck().await;
        assert_eq!(body["status"], "ok");
    }
}
