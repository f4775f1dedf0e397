//! REST API for the financial advice dispatcher
//!
//! Thin HTTP binding over the four dispatcher operations.

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::advisor::FinancialAdvisor;
use crate::error::AdvisorError;
use crate::models::{ChatMessage, Goal, UserProfile};

/// =============================
/// Request Models
/// =============================

#[derive(Debug, Deserialize)]
pub struct AdviceRequest {
    pub prompt: String,
}

#[derive(Debug, Deserialize)]
pub struct PersonalizedAdviceRequest {
    pub profile: UserProfile,
    pub question: String,
    pub area: String,
}

#[derive(Debug, Deserialize)]
pub struct GoalStrategyRequest {
    pub profile: UserProfile,
    pub goal: Goal,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
}

/// =============================
/// Response Wrapper
/// =============================

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    pub data: Option<serde_json::Value>,
    pub error: Option<String>,
    pub timestamp: String,
}

impl ApiResponse {
    pub fn success<T: Serialize>(data: T) -> Self {
        Self {
            success: true,
            data: serde_json::to_value(data).ok(),
            error: None,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// =============================
/// API State
/// =============================

#[derive(Clone)]
pub struct ApiState {
    pub advisor: Arc<FinancialAdvisor>,
}

fn respond(result: crate::Result<String>) -> (StatusCode, Json<ApiResponse>) {
    match result {
        Ok(answer) => (
            StatusCode::OK,
            Json(ApiResponse::success(serde_json::json!({ "answer": answer }))),
        ),
        Err(e @ AdvisorError::InvalidInput(_)) => {
            (StatusCode::BAD_REQUEST, Json(ApiResponse::error(e.to_string())))
        }
        Err(e @ AdvisorError::GenerationFailed(_)) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(e.to_string())),
        ),
    }
}

/// =============================
/// Handlers
/// =============================

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn advice_handler(
    State(state): State<ApiState>,
    Json(req): Json<AdviceRequest>,
) -> (StatusCode, Json<ApiResponse>) {
    info!("Received advice request");
    respond(state.advisor.generate_financial_advice(&req.prompt).await)
}

async fn personalized_advice_handler(
    State(state): State<ApiState>,
    Json(req): Json<PersonalizedAdviceRequest>,
) -> (StatusCode, Json<ApiResponse>) {
    info!("Received personalized advice request (area: {})", req.area);
    respond(
        state
            .advisor
            .generate_personalized_advice(&req.profile, &req.question, &req.area)
            .await,
    )
}

async fn goal_strategy_handler(
    State(state): State<ApiState>,
    Json(req): Json<GoalStrategyRequest>,
) -> (StatusCode, Json<ApiResponse>) {
    info!("Received goal strategy request (type: {})", req.goal.goal_type);
    respond(
        state
            .advisor
            .generate_goal_strategy(&req.profile, &req.goal)
            .await,
    )
}

async fn chat_handler(
    State(state): State<ApiState>,
    Json(req): Json<ChatRequest>,
) -> (StatusCode, Json<ApiResponse>) {
    info!("Received chat request ({} messages)", req.messages.len());
    respond(state.advisor.generate_chat_response(&req.messages).await)
}

/// =============================
/// Router
/// =============================

pub fn create_router(advisor: Arc<FinancialAdvisor>) -> Router {
    let state = ApiState { advisor };

    Router::new()
        .route("/health", axum::routing::get(health))
        .route("/api/advice", post(advice_handler))
        .route("/api/advice/personalized", post(personalized_advice_handler))
        .route("/api/goals/strategy", post(goal_strategy_handler))
        .route("/api/chat", post(chat_handler))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// =============================
/// Server Startup
/// =============================

pub async fn start_server(
    advisor: Arc<FinancialAdvisor>,
    port: u16,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let router = create_router(advisor);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    info!("API Server listening on http://0.0.0.0:{}", port);

    axum::serve(listener, router).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{BackendError, EchoBackend, GenerativeBackend};
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request};
    use tower::ServiceExt;

    struct UnavailableBackend;

    #[async_trait]
    impl GenerativeBackend for UnavailableBackend {
        async fn generate(&self, _prompt: &str) -> std::result::Result<String, BackendError> {
            Err(BackendError::Status {
                status: 503,
                body: "model overloaded".to_string(),
            })
        }
    }

    fn router() -> Router {
        create_router(Arc::new(FinancialAdvisor::new(Box::new(EchoBackend))))
    }

    async fn post_json(uri: &str, body: serde_json::Value) -> (StatusCode, ApiResponse) {
        send_json(router(), uri, body).await
    }

    async fn send_json(
        router: Router,
        uri: &str,
        body: serde_json::Value,
    ) -> (StatusCode, ApiResponse) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn profile_json() -> serde_json::Value {
        serde_json::json!({
            "annualIncome": 72000,
            "monthlyExpenses": {"rent": 1400, "groceries": 350},
            "currentSavings": 8000,
            "financialGoals": ["Emergency fund"],
            "riskTolerance": "moderate"
        })
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let response = router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_chat_endpoint() {
        let (status, body) = post_json(
            "/api/chat",
            serde_json::json!({"messages": [
                {"role": "user", "content": "Hi"},
                {"role": "assistant", "content": "Hello"}
            ]}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.success);
        assert_eq!(body.data.unwrap()["answer"], "user: Hi\nassistant: Hello");
    }

    #[tokio::test]
    async fn test_goal_strategy_endpoint() {
        let (status, body) = post_json(
            "/api/goals/strategy",
            serde_json::json!({
                "profile": profile_json(),
                "goal": {
                    "type": "Emergency Fund",
                    "targetAmount": 10000,
                    "currentAmount": 2500,
                    "targetDate": "2025-12-31"
                }
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let answer = body.data.unwrap()["answer"].as_str().unwrap().to_string();
        assert!(answer.contains("December 31, 2025"));
        assert!(answer.contains("{\"rent\":1400,\"groceries\":350}"));
    }

    #[tokio::test]
    async fn test_advice_endpoint() {
        let (status, body) =
            post_json("/api/advice", serde_json::json!({"prompt": "What is a Roth IRA?"})).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.success);
        assert!(body.error.is_none());
        assert_eq!(body.data.unwrap()["answer"], "What is a Roth IRA?");
    }

    #[tokio::test]
    async fn test_personalized_advice_endpoint() {
        let (status, body) = post_json(
            "/api/advice/personalized",
            serde_json::json!({"profile": profile_json(), "question": "Should I invest?", "area": "Investing"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let answer = body.data.unwrap()["answer"].as_str().unwrap().to_string();
        assert!(answer.contains("- Annual Income: $72000\n"));
        assert!(answer.contains("Question: Should I invest?"));
        assert!(answer.contains("Area of Interest: Investing"));
    }

    #[tokio::test]
    async fn test_negative_savings_reach_the_prompt() {
        let mut profile = profile_json();
        profile["currentSavings"] = serde_json::json!(-2500);

        let (status, body) = post_json(
            "/api/advice/personalized",
            serde_json::json!({"profile": profile, "question": "Why?", "area": "Tax"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.success);
        let answer = body.data.unwrap()["answer"].as_str().unwrap().to_string();
        assert!(answer.contains("- Current Savings: $-2500\n"));
    }

    #[tokio::test]
    async fn test_backend_failure_is_internal_error_with_fixed_message() {
        let failing = || create_router(Arc::new(FinancialAdvisor::new(Box::new(UnavailableBackend))));

        let cases = vec![
            (
                "/api/advice",
                serde_json::json!({"prompt": "Hi"}),
                "Failed to generate financial advice",
            ),
            (
                "/api/chat",
                serde_json::json!({"messages": [{"role": "user", "content": "Hi"}]}),
                "Failed to generate chat response",
            ),
        ];

        for (uri, payload, expected) in cases {
            let (status, body) = send_json(failing(), uri, payload).await;

            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert!(!body.success);
            assert!(body.data.is_none());
            let error = body.error.unwrap();
            assert_eq!(error, expected);
            assert!(!error.contains("overloaded"));
        }
    }
}
