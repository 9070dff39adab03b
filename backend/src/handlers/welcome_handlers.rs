use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, ConnectInfo, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::api::text_generation::GenerationError;
use crate::error::ApiError;
use crate::prompts::{self, Language};
use crate::AppState;

#[derive(Deserialize)]
pub struct WelcomeRequest {
    pub name: String,
    pub language: Language,
}

#[derive(Serialize, Deserialize)]
pub struct WelcomeResponse {
    pub message: String,
}

pub async fn generate_welcome(
    State(state): State<Arc<AppState>>,
    ConnectInfo(client): ConnectInfo<SocketAddr>,
    payload: Result<Json<WelcomeRequest>, JsonRejection>,
) -> Result<Json<WelcomeResponse>, ApiError> {
    // unknown language codes fail here as well
    let Json(req) = payload.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    let language = req.language;

    let name = prompts::sanitize_name(&req.name);
    if name.is_empty() {
        return Err(ApiError::BadRequest("Name is required".to_string()));
    }

    if state.welcome_limiter.check_key(&client.ip()).is_err() {
        tracing::warn!("Welcome rate limit exceeded for {}", client.ip());
        return Err(ApiError::RateLimited);
    }
    if state.welcome_budget.check().is_err() {
        tracing::warn!("Global welcome budget exhausted");
        return Err(ApiError::RateLimited);
    }

    let prompt = prompts::welcome_prompt(language, &name);
    let message = state.generator.generate(&prompt).await.map_err(|e| {
        tracing::error!("Welcome generation failed: {}", e);
        e
    })?;

    let message = message.trim();
    if message.is_empty() {
        return Err(GenerationError::Empty.into());
    }
    if prompts::mentions_clinical_terms(message) {
        tracing::warn!("Discarding generated welcome with clinical wording");
        return Err(GenerationError::Forbidden.into());
    }

    tracing::info!("Generated welcome message ({:?})", language);
    Ok(Json(WelcomeResponse {
        message: message.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::text_generation::MockTextGenerator;
    use axum::{
        body::Body,
        extract::connect_info::MockConnectInfo,
        http::{Request, StatusCode},
        Router,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn client_router(state: &Arc<AppState>, client: [u8; 4]) -> Router {
        crate::api_router(state.clone()).layer(MockConnectInfo(SocketAddr::from((client, 40000))))
    }

    fn app(generator: MockTextGenerator) -> Router {
        client_router(&Arc::new(AppState::new(Arc::new(generator))), [127, 0, 0, 1])
    }

    async fn post_welcome(app: Router, body: Value) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/welcome")
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn returns_generated_message() {
        let mut generator = MockTextGenerator::new();
        generator
            .expect_generate()
            .withf(|prompt: &str| prompt.contains("\"Ana\"") && prompt.contains("español"))
            .times(1)
            .returning(|_| Ok("  ¡Bienvenida, Ana! Creceremos juntas.  ".to_string()));

        let (status, body) = post_welcome(app(generator), json!({ "name": "Ana", "language": "es" })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "¡Bienvenida, Ana! Creceremos juntas.");
    }

    #[tokio::test]
    async fn rejects_blank_name_without_calling_the_model() {
        let mut generator = MockTextGenerator::new();
        generator.expect_generate().never();

        let (status, body) = post_welcome(app(generator), json!({ "name": " \n", "language": "en" })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Name is required");
    }

    #[tokio::test]
    async fn rejects_unsupported_language() {
        let mut generator = MockTextGenerator::new();
        generator.expect_generate().never();

        let (status, _) = post_welcome(app(generator), json!({ "name": "Ana", "language": "fr" })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn provider_failure_is_bad_gateway() {
        let mut generator = MockTextGenerator::new();
        generator
            .expect_generate()
            .returning(|_| Err(GenerationError::Timeout));

        let (status, body) = post_welcome(app(generator), json!({ "name": "Ana", "language": "en" })).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"], "Welcome message unavailable");
    }

    #[tokio::test]
    async fn clinical_wording_is_never_returned() {
        let mut generator = MockTextGenerator::new();
        generator
            .expect_generate()
            .returning(|_| Ok("Welcome to your therapy journey, Sam!".to_string()));

        let (status, _) = post_welcome(app(generator), json!({ "name": "Sam", "language": "en" })).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn empty_generation_is_bad_gateway() {
        let mut generator = MockTextGenerator::new();
        generator.expect_generate().returning(|_| Ok("   ".to_string()));

        let (status, _) = post_welcome(app(generator), json!({ "name": "Sam", "language": "de" })).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn missing_language_is_bad_request() {
        let mut generator = MockTextGenerator::new();
        generator.expect_generate().never();

        let (status, body) = post_welcome(app(generator), json!({ "name": "Ana" })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("language"));
    }

    #[tokio::test]
    async fn changing_the_name_does_not_reset_the_client_quota() {
        let mut generator = MockTextGenerator::new();
        generator
            .expect_generate()
            .times(5)
            .returning(|_| Ok("Welcome!".to_string()));
        let state = Arc::new(AppState::new(Arc::new(generator)));
        let app = client_router(&state, [203, 0, 113, 7]);

        for i in 0..5 {
            let (status, _) =
                post_welcome(app.clone(), json!({ "name": format!("Ana{i}"), "language": "en" })).await;
            assert_eq!(status, StatusCode::OK);
        }
        for i in 5..50 {
            let (status, _) =
                post_welcome(app.clone(), json!({ "name": format!("Ana{i}"), "language": "en" })).await;
            assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
        }
        assert_eq!(state.welcome_limiter.len(), 1);

        let (status, _) = post_welcome(
            client_router(&state, [198, 51, 100, 2]),
            json!({ "name": "Ana", "language": "en" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn shared_budget_caps_many_clients() {
        let mut generator = MockTextGenerator::new();
        generator
            .expect_generate()
            .times(30)
            .returning(|_| Ok("Welcome!".to_string()));
        let state = Arc::new(AppState::new(Arc::new(generator)));

        for client in 1..=30u8 {
            let (status, _) = post_welcome(
                client_router(&state, [10, 0, 0, client]),
                json!({ "name": "Ana", "language": "en" }),
            )
            .await;
            assert_eq!(status, StatusCode::OK);
        }
        let (status, body) = post_welcome(
            client_router(&state, [10, 0, 1, 1]),
            json!({ "name": "Ana", "language": "en" }),
        )
        .await;
        assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(body["error"], "Too many requests, try again later");
    }
}
