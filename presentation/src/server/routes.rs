//! Axum routes and middleware

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{SecondsFormat, Utc};
use nlq_application::TranslateMessageUseCase;
use nlq_domain::ToolSpec;
use serde::Deserialize;
use serde_json::json;
use std::any::Any;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    use_case: Arc<TranslateMessageUseCase>,
}

impl AppState {
    pub fn new(use_case: TranslateMessageUseCase) -> Self {
        Self {
            use_case: Arc::new(use_case),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChatRequest {
    #[serde(default)]
    message: Option<String>,
}

/// Build the API router with CORS, request tracing and panic recovery.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/chat", post(chat))
        .route("/api/health", get(health))
        .route("/api/tools", get(tools))
        .with_state(state)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Bind `address` and serve `app` until the process exits.
pub async fn serve(address: &str, app: Router) -> std::io::Result<()> {
    let listener = TcpListener::bind(address).await?;
    info!("Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await
}

async fn chat(State(state): State<AppState>, body: Bytes) -> Response {
    let message = serde_json::from_slice::<ChatRequest>(&body)
        .ok()
        .and_then(|request| request.message)
        .filter(|message| !message.trim().is_empty());

    let Some(message) = message else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Message is required" })),
        )
            .into_response();
    };

    Json(state.use_case.execute(&message).await).into_response()
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    }))
}

async fn tools(State(state): State<AppState>) -> Json<Vec<ToolSpec>> {
    Json(state.use_case.registry().list_tools().cloned().collect())
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic".to_string()
    };

    let body = json!({ "error": "Internal server error", "message": message });
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        [(header::CONTENT_TYPE, "application/json")],
        body.to_string(),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::Request;
    use nlq_application::GraphqlExecutor;
    use nlq_domain::{ExecutionResult, GraphqlRequest, default_registry};
    use serde_json::Value;
    use tower::ServiceExt;

    struct StaticExecutor(Value);

    #[async_trait]
    impl GraphqlExecutor for StaticExecutor {
        async fn execute(&self, _request: &GraphqlRequest) -> ExecutionResult {
            ExecutionResult::success(self.0.clone())
        }
    }

    struct PanickingExecutor;

    #[async_trait]
    impl GraphqlExecutor for PanickingExecutor {
        async fn execute(&self, _request: &GraphqlRequest) -> ExecutionResult {
            panic!("gateway exploded")
        }
    }

    fn app(executor: Arc<dyn GraphqlExecutor>) -> Router {
        let use_case = TranslateMessageUseCase::new(Arc::new(default_registry()), executor);
        router(AppState::new(use_case))
    }

    fn products_app() -> Router {
        app(Arc::new(StaticExecutor(
            json!({"productsByCategory": [{"id": "1", "name": "Laptop"}]}),
        )))
    }

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_chat(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/chat")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_chat_returns_payload() {
        let response = products_app()
            .oneshot(post_chat(r#"{"message": "show me electronics products"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["message"], "show me electronics products");
        assert_eq!(body["intent"], "get_products");
        assert_eq!(body["arguments"]["category"], "Electronics");
        assert_eq!(body["result"]["productsByCategory"][0]["name"], "Laptop");
        assert_eq!(body["error"], Value::Null);
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_chat_requires_message() {
        for request in ["{}", r#"{"message": "   "}"#, r#"{"message": 42}"#, "not json"] {
            let response = products_app().oneshot(post_chat(request)).await.unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", request);
            assert_eq!(
                body_json(response).await,
                json!({"error": "Message is required"})
            );
        }
    }

    #[tokio::test]
    async fn test_health() {
        let response = products_app()
            .oneshot(
                Request::builder()
                    .uri("/api/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
        assert!(body["timestamp"].as_str().unwrap().ends_with('Z'));
    }

    #[tokio::test]
    async fn test_tools_lists_catalog() {
        let response = products_app()
            .oneshot(
                Request::builder()
                    .uri("/api/tools")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let body = body_json(response).await;
        let names: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|tool| tool["name"].as_str().unwrap())
            .collect();
        assert_eq!(names.len(), default_registry().len());
        assert_eq!(names[0], "get_products");
        assert!(names.contains(&"get_customer_orders"));
    }

    #[tokio::test]
    async fn test_panic_becomes_500() {
        let response = app(Arc::new(PanickingExecutor))
            .oneshot(post_chat(r#"{"message": "list orders"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Internal server error");
        assert_eq!(body["message"], "gateway exploded");
    }

    #[tokio::test]
    async fn test_cors_headers_present() {
        let response = products_app()
            .oneshot(
                Request::builder()
                    .uri("/api/health")
                    .header("origin", "http://localhost:3000")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(
            response
                .headers()
                .contains_key("access-control-allow-origin")
        );
    }
}
