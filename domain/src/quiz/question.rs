//! Question entities and untrusted-output normalization.
//!
//! Model output is never trusted: it arrives as [`RawQuestion`] (the exact
//! JSON shape requested from the model) and only becomes a
//! [`GeneratedQuestion`] after validation and normalization. The answer
//! key cleanup is pure domain logic — no I/O, just text handling.

use super::difficulty::Difficulty;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// The canonical answer letter of a multiple-choice question.
///
/// The raw "correct answer" captured from a model may be anything
/// (`"  b) "`, `"Đáp án C"`, `"xyz"`); [`AnswerKey::normalize`] reduces it
/// to one of the four letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnswerKey {
    A,
    B,
    C,
    D,
}

impl AnswerKey {
    /// Normalize a raw answer string to a canonical letter.
    ///
    /// Strips every character other than A/B/C/D (case-insensitive) and
    /// keeps the first survivor. Defaults to `A` when nothing remains.
    pub fn normalize(raw: &str) -> AnswerKey {
        raw.chars()
            .find_map(|c| match c.to_ascii_uppercase() {
                'A' => Some(AnswerKey::A),
                'B' => Some(AnswerKey::B),
                'C' => Some(AnswerKey::C),
                'D' => Some(AnswerKey::D),
                _ => None,
            })
            .unwrap_or(AnswerKey::A)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AnswerKey::A => "A",
            AnswerKey::B => "B",
            AnswerKey::C => "C",
            AnswerKey::D => "D",
        }
    }
}

impl std::fmt::Display for AnswerKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Raw question shape as returned by a model (untrusted)
///
/// Field names match the JSON contract embedded in the batch prompt. The
/// `difficulty` echo from the model is captured but ignored — the
/// requesting tier is authoritative.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawQuestion {
    pub text: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub explanation: String,
    #[serde(default)]
    pub difficulty: String,
}

impl RawQuestion {
    /// Validate and normalize into a [`GeneratedQuestion`].
    ///
    /// Rejects wrong option arity; the answer key is normalized, the tier
    /// is forced to the requested one and its label attached.
    pub fn into_question(
        self,
        id: String,
        difficulty: Difficulty,
    ) -> Result<GeneratedQuestion, DomainError> {
        let options: [String; 4] = self.options.try_into().map_err(|v: Vec<String>| {
            DomainError::InvalidQuestion(format!("expected 4 options, got {}", v.len()))
        })?;

        Ok(GeneratedQuestion {
            id,
            text: self.text,
            options,
            correct_answer: AnswerKey::normalize(&self.correct_answer),
            explanation: self.explanation,
            difficulty,
            difficulty_label: difficulty.label().to_string(),
        })
    }
}

/// A validated, normalized quiz question (Entity)
///
/// Owned by the caller once returned; never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedQuestion {
    /// Opaque identifier, unique within one generation call
    pub id: String,
    pub text: String,
    pub options: [String; 4],
    pub correct_answer: AnswerKey,
    pub explanation: String,
    pub difficulty: Difficulty,
    /// Human-readable tier label (Vietnamese)
    pub difficulty_label: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(correct: &str, options: usize) -> RawQuestion {
        RawQuestion {
            text: "Chuột máy tính dùng để làm gì?".to_string(),
            options: (0..options).map(|i| format!("Lựa chọn {}", i)).collect(),
            correct_answer: correct.to_string(),
            explanation: "- Bước 1: quan sát\n=> Kết luận".to_string(),
            difficulty: "recognition".to_string(),
        }
    }

    #[test]
    fn test_normalize_plain_letters() {
        assert_eq!(AnswerKey::normalize("A"), AnswerKey::A);
        assert_eq!(AnswerKey::normalize("B"), AnswerKey::B);
        assert_eq!(AnswerKey::normalize("C"), AnswerKey::C);
        assert_eq!(AnswerKey::normalize("D"), AnswerKey::D);
    }

    #[test]
    fn test_normalize_strips_noise() {
        assert_eq!(AnswerKey::normalize("  b) "), AnswerKey::B);
        assert_eq!(AnswerKey::normalize("Đáp án: C"), AnswerKey::C);
        assert_eq!(AnswerKey::normalize("(d)"), AnswerKey::D);
    }

    #[test]
    fn test_normalize_defaults_to_a() {
        assert_eq!(AnswerKey::normalize("xyz"), AnswerKey::A);
        assert_eq!(AnswerKey::normalize(""), AnswerKey::A);
        assert_eq!(AnswerKey::normalize("123"), AnswerKey::A);
    }

    #[test]
    fn test_normalize_first_survivor_wins() {
        assert_eq!(AnswerKey::normalize("B hoặc D"), AnswerKey::B);
    }

    #[test]
    fn test_raw_question_deserializes_camel_case() {
        let json = r#"{
            "text": "Python là gì?",
            "options": ["A. Ngôn ngữ", "B. Trình duyệt", "C. Phần cứng", "D. Virus"],
            "correctAnswer": "A",
            "explanation": "Python là một ngôn ngữ lập trình.",
            "difficulty": "recognition"
        }"#;
        let raw: RawQuestion = serde_json::from_str(json).unwrap();
        assert_eq!(raw.correct_answer, "A");
        assert_eq!(raw.options.len(), 4);
    }

    #[test]
    fn test_into_question_normalizes() {
        let q = raw("  b) ", 4)
            .into_question("recognition-0-1-abc".to_string(), Difficulty::Recognition)
            .unwrap();
        assert_eq!(q.correct_answer, AnswerKey::B);
        assert_eq!(q.difficulty, Difficulty::Recognition);
        assert_eq!(q.difficulty_label, "Nhận biết");
        assert_eq!(q.id, "recognition-0-1-abc");
    }

    #[test]
    fn test_into_question_overrides_model_tier_echo() {
        // The model claimed "recognition" but this batch is application tier.
        let q = raw("C", 4)
            .into_question("application-0-1-abc".to_string(), Difficulty::Application)
            .unwrap();
        assert_eq!(q.difficulty, Difficulty::Application);
        assert_eq!(q.difficulty_label, "Vận dụng");
    }

    #[test]
    fn test_into_question_rejects_wrong_arity() {
        for count in [0, 3, 5] {
            let result = raw("A", count)
                .into_question("id".to_string(), Difficulty::Understanding);
            assert!(matches!(result, Err(DomainError::InvalidQuestion(_))));
        }
    }
}
