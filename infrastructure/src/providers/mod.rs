//! Provider adapters for the model invocation boundary.

pub mod gemini;
