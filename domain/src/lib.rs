//! Domain layer for eduquiz
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Model chain
//!
//! Every generation request walks an ordered chain of candidate Gemini
//! models: the user's preferred model first, then a static fallback order.
//! Candidates are tried strictly in sequence until one yields usable
//! output.
//!
//! ## Quiz / Chat
//!
//! - **Quiz**: per-difficulty question batches, planned from the caller's
//!   education level and grade, merged into one shuffled answer set
//! - **Chat**: a tutoring conversation with a fixed persona, optional
//!   image attachments, and the same fallback strategy

pub mod chat;
pub mod core;
pub mod prompt;
pub mod quiz;

// Re-export commonly used types
pub use chat::{ChatTurn, ImageAttachment, OutgoingTurn, Speaker};
pub use prompt::PromptTemplate;
pub use quiz::{
    difficulty::{Difficulty, EducationLevel},
    distribution::DifficultyDistribution,
    question::{AnswerKey, GeneratedQuestion, RawQuestion},
};
pub use self::core::{
    error::DomainError,
    model::{Model, ModelChain},
};
