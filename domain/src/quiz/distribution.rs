//! Per-tier question counts derived from education level and grade

use super::difficulty::{Difficulty, EducationLevel};
use serde::{Deserialize, Serialize};

/// How many questions of each difficulty tier a quiz request contains
/// (Value Object)
///
/// Derived deterministically from `(level, grade)`; recomputed per request
/// and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyDistribution {
    pub recognition: u32,
    pub understanding: u32,
    pub application: u32,
}

impl DifficultyDistribution {
    /// Compute the distribution for a level/grade pair.
    ///
    /// The policy table is exhaustive and deterministic:
    ///
    /// | level   | grade  | recognition | understanding | application |
    /// |---------|--------|-------------|---------------|-------------|
    /// | primary | 1 or 2 | 12          | 6             | 2           |
    /// | primary | other  | 10          | 6             | 4           |
    /// | middle  | any    | 6           | 8             | 6           |
    /// | high    | any    | 4           | 8             | 8           |
    pub fn plan(level: EducationLevel, grade: u8) -> Self {
        match level {
            EducationLevel::Primary => {
                if grade == 1 || grade == 2 {
                    Self {
                        recognition: 12,
                        understanding: 6,
                        application: 2,
                    }
                } else {
                    Self {
                        recognition: 10,
                        understanding: 6,
                        application: 4,
                    }
                }
            }
            EducationLevel::Middle => Self {
                recognition: 6,
                understanding: 8,
                application: 6,
            },
            EducationLevel::High => Self {
                recognition: 4,
                understanding: 8,
                application: 8,
            },
        }
    }

    /// Count requested for one tier
    pub fn count_for(&self, difficulty: Difficulty) -> u32 {
        match difficulty {
            Difficulty::Recognition => self.recognition,
            Difficulty::Understanding => self.understanding,
            Difficulty::Application => self.application,
        }
    }

    /// Total question count across all tiers
    pub fn total(&self) -> u32 {
        self.recognition + self.understanding + self.application
    }
}
