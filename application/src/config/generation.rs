//! Generation parameters shared by the quiz and chat paths.

use serde::{Deserialize, Serialize};

/// Model-call tuning parameters.
///
/// Temperature is fixed at 0.7 across the whole core; the struct exists so
/// embedding hosts can override it in one place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationParams {
    pub temperature: f32,
}

impl GenerationParams {
    pub const DEFAULT_TEMPERATURE: f32 = 0.7;

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            temperature: Self::DEFAULT_TEMPERATURE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_temperature() {
        assert_eq!(GenerationParams::default().temperature, 0.7);
    }

    #[test]
    fn test_builder() {
        let params = GenerationParams::default().with_temperature(0.2);
        assert_eq!(params.temperature, 0.2);
    }
}
