//! Application-level configuration.
//!
//! Static parameters that control how use cases call the backend; they are
//! application concerns, not domain policy.

mod generation;

pub use generation::GenerationParams;
