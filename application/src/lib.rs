//! Application layer for eduquiz
//!
//! This crate contains use cases, port definitions, and application
//! configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::GenerationParams;
pub use ports::{
    llm_gateway::{ChatSession, ChatSessionConfig, GatewayError, GenerationRequest, LlmGateway},
    random::RandomSource,
    settings::{SettingsSnapshot, SettingsStore, StaticSettings},
};
pub use use_cases::chat_tutor::ChatTutorUseCase;
pub use use_cases::generate_batch::{
    AttemptFailure, BatchError, BatchRequest, ExhaustionReason, QuestionBatchGenerator,
};
pub use use_cases::generate_quiz::{GenerateQuizError, GenerateQuizUseCase, QuizRequest};
