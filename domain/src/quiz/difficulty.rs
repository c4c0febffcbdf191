//! Difficulty tiers and education levels (Value Objects)

use serde::{Deserialize, Serialize};

/// The three difficulty tiers that partition a quiz request.
///
/// Tier ids are stable identifier strings; display labels follow the
/// Vietnamese curriculum terminology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Recognition,
    Understanding,
    Application,
}

impl Difficulty {
    /// Stable lowercase identifier (used in question ids and prompts)
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Recognition => "recognition",
            Difficulty::Understanding => "understanding",
            Difficulty::Application => "application",
        }
    }

    /// Human-readable Vietnamese label
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Recognition => "Nhận biết",
            Difficulty::Understanding => "Thông hiểu",
            Difficulty::Application => "Vận dụng",
        }
    }

    /// All tiers, in canonical order
    pub fn all() -> [Difficulty; 3] {
        [
            Difficulty::Recognition,
            Difficulty::Understanding,
            Difficulty::Application,
        ]
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "recognition" => Ok(Difficulty::Recognition),
            "understanding" => Ok(Difficulty::Understanding),
            "application" => Ok(Difficulty::Application),
            other => Err(format!("unknown difficulty: {}", other)),
        }
    }
}

/// Education level of the requesting student
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EducationLevel {
    /// Tiểu học (grades 1-5)
    Primary,
    /// THCS (grades 6-9)
    Middle,
    /// THPT (grades 10-12)
    High,
}

impl EducationLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            EducationLevel::Primary => "primary",
            EducationLevel::Middle => "middle",
            EducationLevel::High => "high",
        }
    }
}

impl std::fmt::Display for EducationLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for EducationLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "primary" => Ok(EducationLevel::Primary),
            "middle" => Ok(EducationLevel::Middle),
            "high" => Ok(EducationLevel::High),
            other => Err(format!("unknown education level: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_labels() {
        assert_eq!(Difficulty::Recognition.label(), "Nhận biết");
        assert_eq!(Difficulty::Understanding.label(), "Thông hiểu");
        assert_eq!(Difficulty::Application.label(), "Vận dụng");
    }

    #[test]
    fn test_difficulty_roundtrip() {
        for tier in Difficulty::all() {
            let parsed: Difficulty = tier.as_str().parse().unwrap();
            assert_eq!(tier, parsed);
        }
    }

    #[test]
    fn test_difficulty_unknown() {
        assert!("expert".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_level_roundtrip() {
        for level in [
            EducationLevel::Primary,
            EducationLevel::Middle,
            EducationLevel::High,
        ] {
            let parsed: EducationLevel = level.as_str().parse().unwrap();
            assert_eq!(level, parsed);
        }
    }
}
