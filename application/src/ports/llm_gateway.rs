//! LLM Gateway port
//!
//! Defines the interface for communicating with the generative-language
//! backend. Implementations (adapters) live in the infrastructure layer.

use async_trait::async_trait;
use eduquiz_domain::{ChatTurn, Model, OutgoingTurn};
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur during gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Other error: {0}")]
    Other(String),
}

impl GatewayError {
    /// Check whether this error carries a rate-limit/quota signature.
    ///
    /// The backend guarantees no structured status code, so detection is a
    /// substring match on the stringified error ("429" or
    /// "RESOURCE_EXHAUSTED"). Callers rely on this exact heuristic to show
    /// a distinct quota message.
    pub fn is_rate_limited(&self) -> bool {
        let text = self.to_string();
        text.contains("429") || text.contains("RESOURCE_EXHAUSTED")
    }
}

/// A one-shot generation request
///
/// `response_schema` is an optional output-shape constraint in the
/// backend's schema form; when present the model is asked to return
/// conforming JSON directly rather than free text.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub prompt: String,
    pub response_schema: Option<Value>,
    pub temperature: f32,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            response_schema: None,
            temperature: crate::config::GenerationParams::DEFAULT_TEMPERATURE,
        }
    }

    pub fn with_schema(mut self, schema: Value) -> Self {
        self.response_schema = Some(schema);
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }
}

/// Static configuration for a chat session
#[derive(Debug, Clone)]
pub struct ChatSessionConfig {
    pub system_instruction: String,
    pub temperature: f32,
}

/// Gateway for model invocation
///
/// One call maps to one attempt against one candidate model; retry and
/// fallback policy belong to the use cases, never to the adapter.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// One-shot, optionally schema-constrained generation
    async fn generate(
        &self,
        model: &Model,
        request: &GenerationRequest,
    ) -> Result<String, GatewayError>;

    /// Create a conversational session seeded with prior history
    async fn create_chat_session(
        &self,
        model: &Model,
        config: &ChatSessionConfig,
        history: &[ChatTurn],
    ) -> Result<Box<dyn ChatSession>, GatewayError>;
}

/// An active chat session
#[async_trait]
pub trait ChatSession: Send + Sync {
    /// Get the model used by this session
    fn model(&self) -> &Model;

    /// Send the outgoing turn and get the reply text
    async fn send(&self, turn: &OutgoingTurn) -> Result<String, GatewayError>;
}
