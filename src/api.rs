//! REST API server for the math tutor
//!
//! Exposes the classify-then-solve pipeline over HTTP and renders the
//! worked solution for the browser frontend

use askama::Template;
use axum::{
    http::StatusCode,
    response::Html,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};

use crate::classifier::QuestionClassifier;
use crate::error::SolverError;
use crate::solvers;
use crate::Result;

/// =============================
/// Request / Response Models
/// =============================

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SolveRequest {
    pub question: String,
}

/// Landing page shell; the frontend posts questions to /solve
#[derive(Template)]
#[template(path = "base.html")]
struct IndexPage;

/// =============================
/// Health Endpoint
/// =============================

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// =============================
/// Index Endpoint
/// =============================

async fn index() -> (StatusCode, Html<String>) {
    match IndexPage.render() {
        Ok(html) => (StatusCode::OK, Html(html)),
        Err(e) => {
            error!("index template rendering failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(format!("Template error: {}", e)),
            )
        }
    }
}

/// =============================
/// Solve Endpoint
/// =============================

async fn solve_question(
    Json(req): Json<SolveRequest>,
) -> (StatusCode, Json<serde_json::Value>) {
    match handle_solve(&req) {
        Ok(body) => (StatusCode::OK, Json(body)),
        Err(e) => {
            error!("Solve request failed: {}", e);
            (
                error_status(&e),
                Json(serde_json::json!({ "error": e.to_string() })),
            )
        }
    }
}

/// The classify-then-solve pipeline behind the endpoint
fn handle_solve(req: &SolveRequest) -> Result<serde_json::Value> {
    let question = req.question.trim();

    if question.is_empty() {
        return Err(SolverError::EmptyQuestion);
    }

    info!("Processing question: {}", question);

    let topic = QuestionClassifier::classify(question);
    info!("Classified as: {}", topic);

    let solution = solvers::solve(topic, question);
    let html = solution.render_html()?;

    Ok(serde_json::json!({
        "question_type": topic.as_str(),
        "solution_html": html,
    }))
}

/// Map boundary errors to HTTP statuses: bad input 400, everything else 500
fn error_status(err: &SolverError) -> StatusCode {
    match err {
        SolverError::EmptyQuestion | SolverError::UnsupportedTopic(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// =============================
/// Router
/// =============================

pub fn create_router() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/solve", post(solve_question))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// =============================
/// Server Startup
/// =============================

pub async fn start_server(port: u16) -> Result<()> {
    let router = create_router();

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    info!("API Server listening on http://0.0.0.0:{}", port);
    info!("Local: http://127.0.0.1:{}", port);

    axum::serve(listener, router).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::util::ServiceExt;

    #[tokio::test]
    async fn test_empty_question_is_bad_request() {
        let (status, Json(body)) = solve_question(Json(SolveRequest {
            question: "   ".to_string(),
        }))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "No question provided");
    }

    #[tokio::test]
    async fn test_solve_trigonometry_question() {
        let (status, Json(body)) = solve_question(Json(SolveRequest {
            question: "In a right triangle, AB = 7 cm and BC = 24 cm. Find sec C + cot A."
                .to_string(),
        }))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["question_type"], "trigonometry");
        let html = body["solution_html"].as_str().unwrap();
        assert!(html.contains("25/24"));
        assert!(html.contains("24/7"));
    }

    #[tokio::test]
    async fn test_solve_interest_question() {
        let (status, Json(body)) = solve_question(Json(SolveRequest {
            question: "₹1000 becomes ₹1210 in 2 years. Find the rate of compound interest."
                .to_string(),
        }))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["question_type"], "compound_interest");
        let html = body["solution_html"].as_str().unwrap();
        assert!(html.contains("10.00%"));
    }

    #[tokio::test]
    async fn test_router_end_to_end() {
        let app = create_router();

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/solve")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        r#"{"question":"A right triangle has legs 7 cm and 24 cm."}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["question_type"], "trigonometry");
        assert!(body["solution_html"]
            .as_str()
            .unwrap()
            .contains("forms a right triangle"));
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let app = create_router();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
