//! Gemini gateway adapter
//!
//! Implements `LlmGateway` against the generativelanguage REST API. The
//! API key is resolved through the settings store on every request —
//! never cached — so key changes take effect immediately.

use super::session::GeminiChatSession;
use super::types::{Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part};
use async_trait::async_trait;
use eduquiz_application::{
    ChatSession, ChatSessionConfig, GatewayError, GenerationRequest, LlmGateway, SettingsStore,
};
use eduquiz_domain::{ChatTurn, Model};
use std::sync::Arc;
use tracing::debug;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

pub struct GeminiGateway {
    http: reqwest::Client,
    settings: Arc<dyn SettingsStore>,
    base_url: String,
}

impl GeminiGateway {
    pub fn new(settings: Arc<dyn SettingsStore>) -> Self {
        Self {
            http: reqwest::Client::new(),
            settings,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Override the API base URL (test servers)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn api_key(&self) -> Result<String, GatewayError> {
        self.settings
            .resolve()
            .api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| GatewayError::RequestFailed("no API key configured".to_string()))
    }
}

/// Execute one `generateContent` call and extract the reply text.
///
/// Non-success statuses keep the numeric code in the error text; the
/// rate-limit heuristic upstream depends on "429" surviving here.
pub(crate) async fn post_generate_content(
    http: &reqwest::Client,
    base_url: &str,
    api_key: &str,
    model: &Model,
    request: &GenerateContentRequest,
) -> Result<String, GatewayError> {
    let url = format!("{}/models/{}:generateContent", base_url, model.as_str());
    debug!(model = %model, "Calling generateContent");

    let response = http
        .post(&url)
        .query(&[("key", api_key)])
        .json(request)
        .send()
        .await
        .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(GatewayError::RequestFailed(format!(
            "status {}: {}",
            status.as_u16(),
            body
        )));
    }

    let payload: GenerateContentResponse = response
        .json()
        .await
        .map_err(|e| GatewayError::MalformedResponse(e.to_string()))?;

    let text = payload.text();
    if text.is_empty() {
        return Err(GatewayError::MalformedResponse(
            "no text in response candidates".to_string(),
        ));
    }
    Ok(text)
}

/// Build the wire request for a one-shot generation.
pub(crate) fn one_shot_request(request: &GenerationRequest) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content::user(vec![Part::text(&request.prompt)])],
        system_instruction: None,
        generation_config: GenerationConfig {
            temperature: request.temperature,
            response_mime_type: request
                .response_schema
                .is_some()
                .then(|| "application/json".to_string()),
            response_schema: request.response_schema.clone(),
        },
    }
}

#[async_trait]
impl LlmGateway for GeminiGateway {
    async fn generate(
        &self,
        model: &Model,
        request: &GenerationRequest,
    ) -> Result<String, GatewayError> {
        let api_key = self.api_key()?;
        let wire = one_shot_request(request);
        post_generate_content(&self.http, &self.base_url, &api_key, model, &wire).await
    }

    async fn create_chat_session(
        &self,
        model: &Model,
        config: &ChatSessionConfig,
        history: &[ChatTurn],
    ) -> Result<Box<dyn ChatSession>, GatewayError> {
        let api_key = self.api_key()?;
        Ok(Box::new(GeminiChatSession::new(
            self.http.clone(),
            self.base_url.clone(),
            api_key,
            model.clone(),
            config.clone(),
            history,
        )))
    }
}
