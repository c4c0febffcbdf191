//! Gemini chat session implementation
//!
//! The generateContent API is stateless, so the session keeps the mapped
//! conversation locally and sends the whole thing on every call. Each
//! session lives for exactly one candidate attempt in the fallback walk,
//! seeded with the full prior history.

use super::gateway::post_generate_content;
use super::types::{Content, GenerateContentRequest, GenerationConfig, Part};
use async_trait::async_trait;
use eduquiz_application::{ChatSession, ChatSessionConfig, GatewayError};
use eduquiz_domain::{ChatTurn, Model, OutgoingTurn};

pub struct GeminiChatSession {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: Model,
    config: ChatSessionConfig,
    history: Vec<Content>,
}

impl GeminiChatSession {
    pub fn new(
        http: reqwest::Client,
        base_url: String,
        api_key: String,
        model: Model,
        config: ChatSessionConfig,
        history: &[ChatTurn],
    ) -> Self {
        Self {
            http,
            base_url,
            api_key,
            model,
            config,
            history: history.iter().map(Content::from_turn).collect(),
        }
    }
}

/// Wire parts for the outgoing turn: inline image first, then text.
fn outgoing_parts(turn: &OutgoingTurn) -> Vec<Part> {
    let mut parts = Vec::with_capacity(2);
    if let Some(image) = &turn.image {
        parts.push(Part::inline_image(image));
    }
    parts.push(Part::text(&turn.text));
    parts
}

#[async_trait]
impl ChatSession for GeminiChatSession {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn send(&self, turn: &OutgoingTurn) -> Result<String, GatewayError> {
        let mut contents = self.history.clone();
        contents.push(Content::user(outgoing_parts(turn)));

        let request = GenerateContentRequest {
            contents,
            system_instruction: Some(Content::system(&self.config.system_instruction)),
            generation_config: GenerationConfig {
                temperature: self.config.temperature,
                response_mime_type: None,
                response_schema: None,
            },
        };

        post_generate_content(
            &self.http,
            &self.base_url,
            &self.api_key,
            &self.model,
            &request,
        )
        .await
    }
}
