//! Chat tutor reply path.
//!
//! Unlike the quiz path, this never raises: every failure resolves into a
//! user-facing reply string so the tutoring UI stays responsive. The
//! fallback strategy is the same — candidates tried strictly in chain
//! order, a fresh session per candidate seeded with the full prior
//! history, first success wins.

use crate::config::GenerationParams;
use crate::ports::llm_gateway::{ChatSessionConfig, GatewayError, LlmGateway};
use crate::ports::settings::SettingsStore;
use eduquiz_domain::{ChatTurn, ImageAttachment, ModelChain, OutgoingTurn, PromptTemplate};
use std::sync::Arc;
use tracing::{debug, warn};

/// Use case for producing one tutoring reply
pub struct ChatTutorUseCase {
    settings: Arc<dyn SettingsStore>,
    gateway: Arc<dyn LlmGateway>,
    params: GenerationParams,
}

impl ChatTutorUseCase {
    /// Reply when no API key is resolvable (no network attempt is made)
    pub const MISSING_KEY_REPLY: &'static str =
        "Vui lòng nhập API Key trong Settings để sử dụng Chat.";

    /// Reply when the last failure carries the rate-limit signature
    pub const RATE_LIMITED_REPLY: &'static str =
        "⚠️ Hệ thống đang quá tải (Lỗi 429). Vui lòng thử lại sau giây lát hoặc đổi API Key.";

    pub fn new(settings: Arc<dyn SettingsStore>, gateway: Arc<dyn LlmGateway>) -> Self {
        Self {
            settings,
            gateway,
            params: GenerationParams::default(),
        }
    }

    pub fn with_params(mut self, params: GenerationParams) -> Self {
        self.params = params;
        self
    }

    /// Produce a reply to the new message.
    ///
    /// `image` is an optional data-URL (or bare base64) payload. All
    /// failure paths resolve to a reply string; the caller never sees an
    /// error.
    pub async fn respond(
        &self,
        history: &[ChatTurn],
        message: &str,
        image: Option<&str>,
    ) -> String {
        let settings = self.settings.resolve();
        if !settings.has_api_key() {
            return Self::MISSING_KEY_REPLY.to_string();
        }

        let chain = ModelChain::for_preferred(settings.preferred_or_default());
        let turn = OutgoingTurn::new(message, image.map(ImageAttachment::from_data_url));
        let config = ChatSessionConfig {
            system_instruction: PromptTemplate::tutor_system().to_string(),
            temperature: self.params.temperature,
        };

        let mut last_error: Option<GatewayError> = None;
        for model in &chain {
            debug!("Chat attempt using model {}", model);
            let attempt = async {
                let session = self
                    .gateway
                    .create_chat_session(model, &config, history)
                    .await?;
                session.send(&turn).await
            };
            match attempt.await {
                Ok(reply) => return reply,
                Err(error) => {
                    warn!("Chat model {} failed: {}", model, error);
                    last_error = Some(error);
                }
            }
        }

        let last = last_error.expect("chain is never empty");
        if last.is_rate_limited() {
            Self::RATE_LIMITED_REPLY.to_string()
        } else {
            format!("⚠️ Lỗi kết nối: {}. Vui lòng kiểm tra API Key.", last)
        }
    }
}
