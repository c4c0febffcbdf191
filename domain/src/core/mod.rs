//! Core domain concepts shared across the quiz and chat subdomains.
//!
//! - [`model::Model`] — candidate Gemini models and the static fallback order
//! - [`model::ModelChain`] — ordered, de-duplicated candidate list
//! - [`error::DomainError`] — pure validation failures

pub mod error;
pub mod model;
