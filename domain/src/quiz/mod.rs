//! Quiz subdomain: difficulty tiers, batch distribution, questions.

pub mod difficulty;
pub mod distribution;
pub mod question;

pub use difficulty::{Difficulty, EducationLevel};
pub use distribution::DifficultyDistribution;
pub use question::{AnswerKey, GeneratedQuestion, RawQuestion};
