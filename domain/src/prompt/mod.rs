//! Prompt templates for quiz generation and the chat tutor persona.

pub mod template;

pub use template::PromptTemplate;
