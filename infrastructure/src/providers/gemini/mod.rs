//! Gemini provider adapter
//!
//! Implements the application's `LlmGateway` port against the
//! generativelanguage REST surface. The API is stateless, so chat
//! sessions carry their full history on every call.

mod gateway;
mod session;
mod types;

pub use gateway::GeminiGateway;
pub use session::GeminiChatSession;
pub use types::{
    Candidate, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    InlineData, Part,
};
