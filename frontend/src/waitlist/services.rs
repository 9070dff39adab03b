use async_trait::async_trait;
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config;
use crate::i18n::Language;
use super::Submission;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntakeError {
    #[error("intake endpoint answered with status {0}")]
    Rejected(u16),
    #[error("intake request failed: {0}")]
    Network(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("welcome service answered with status {0}")]
    Status(u16),
    #[error("welcome request failed: {0}")]
    Network(String),
    #[error("could not read welcome response: {0}")]
    Decode(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WelcomeRequest {
    pub name: String,
    pub language: Language,
}

#[derive(Deserialize)]
struct WelcomeResponse {
    message: String,
}

/// Third-party form backend that stores the waitlist.
#[async_trait(?Send)]
pub trait IntakeClient {
    async fn submit(&self, submission: &Submission) -> Result<(), IntakeError>;
}

/// Source of the personalized thank-you line shown after signing up.
#[async_trait(?Send)]
pub trait WelcomeGenerator {
    async fn generate(&self, request: &WelcomeRequest) -> Result<String, GenerationError>;
}

pub struct FormspreeIntake {
    endpoint: String,
}

impl FormspreeIntake {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }
}

impl Default for FormspreeIntake {
    fn default() -> Self {
        Self::new(config::INTAKE_URL)
    }
}

#[async_trait(?Send)]
impl IntakeClient for FormspreeIntake {
    async fn submit(&self, submission: &Submission) -> Result<(), IntakeError> {
        let request = Request::post(&self.endpoint)
            .header("Accept", "application/json")
            .json(submission)
            .map_err(|e| IntakeError::Network(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| IntakeError::Network(e.to_string()))?;

        if response.ok() {
            Ok(())
        } else {
            Err(IntakeError::Rejected(response.status()))
        }
    }
}

/// Asks our own backend, which holds the model credentials and the prompt.
pub struct BackendWelcome {
    url: String,
}

impl BackendWelcome {
    pub fn new(backend_url: &str) -> Self {
        Self { url: format!("{}/api/welcome", backend_url) }
    }
}

impl Default for BackendWelcome {
    fn default() -> Self {
        Self::new(config::get_backend_url())
    }
}

#[async_trait(?Send)]
impl WelcomeGenerator for BackendWelcome {
    async fn generate(&self, request: &WelcomeRequest) -> Result<String, GenerationError> {
        let response = Request::post(&self.url)
            .json(request)
            .map_err(|e| GenerationError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| GenerationError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(GenerationError::Status(response.status()));
        }

        response
            .json::<WelcomeResponse>()
            .await
            .map(|body| body.message)
            .map_err(|e| GenerationError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn welcome_request_uses_language_code() {
        let request = WelcomeRequest { name: "Ana".to_string(), language: Language::Es };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "Ana", "language": "es" }));
    }

    #[test]
    fn backend_welcome_targets_api_route() {
        let client = BackendWelcome::new("http://localhost:3001");
        assert_eq!(client.url, "http://localhost:3001/api/welcome");
        assert_eq!(BackendWelcome::new("").url, "/api/welcome");
    }
}
