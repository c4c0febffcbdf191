//! Conversation turn entities
//!
//! History is append-only from the caller's perspective: the core only
//! reads it to seed a session, never mutates it.

use serde::{Deserialize, Serialize};

/// Who produced a turn in the conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    Tutor,
}

/// Inline image payload attached to a turn
///
/// Carries the base64 data with its data-URL prefix stripped, plus the
/// detected media type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageAttachment {
    /// Base64 image bytes, no `data:` prefix
    pub data: String,
    pub mime_type: String,
}

impl ImageAttachment {
    const DEFAULT_MIME: &'static str = "image/jpeg";

    /// Build an attachment from a caller-supplied data URL or bare base64
    /// string.
    ///
    /// A `data:<mime>;base64,` prefix is detected and stripped; anything
    /// else is treated as bare base64 with a defaulted media type.
    pub fn from_data_url(raw: &str) -> Self {
        if let Some(rest) = raw.strip_prefix("data:")
            && let Some((mime, data)) = rest.split_once(";base64,")
        {
            return Self {
                data: data.to_string(),
                mime_type: if mime.is_empty() {
                    Self::DEFAULT_MIME.to_string()
                } else {
                    mime.to_string()
                },
            };
        }

        Self {
            data: raw.to_string(),
            mime_type: Self::DEFAULT_MIME.to_string(),
        }
    }
}

/// One turn of a tutoring conversation (Entity)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub speaker: Speaker,
    pub text: String,
    pub image: Option<ImageAttachment>,
}

impl ChatTurn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::User,
            text: text.into(),
            image: None,
        }
    }

    pub fn tutor(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Tutor,
            text: text.into(),
            image: None,
        }
    }
}

/// The new message being sent in a chat call
#[derive(Debug, Clone)]
pub struct OutgoingTurn {
    pub text: String,
    pub image: Option<ImageAttachment>,
}

impl OutgoingTurn {
    /// Placeholder used when the caller sends an image with no text
    pub const DEFAULT_TEXT: &'static str = "Hãy giải bài này giúp em.";

    /// Build the outgoing turn, defaulting empty text to the fixed
    /// placeholder.
    pub fn new(text: &str, image: Option<ImageAttachment>) -> Self {
        let text = if text.trim().is_empty() {
            Self::DEFAULT_TEXT.to_string()
        } else {
            text.to_string()
        };
        Self { text, image }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_from_data_url() {
        let img = ImageAttachment::from_data_url("data:image/png;base64,iVBORw0KGgo=");
        assert_eq!(img.mime_type, "image/png");
        assert_eq!(img.data, "iVBORw0KGgo=");
    }

    #[test]
    fn test_image_bare_base64_defaults_mime() {
        let img = ImageAttachment::from_data_url("/9j/4AAQSkZJRg==");
        assert_eq!(img.mime_type, "image/jpeg");
        assert_eq!(img.data, "/9j/4AAQSkZJRg==");
    }

    #[test]
    fn test_image_empty_mime_defaults() {
        let img = ImageAttachment::from_data_url("data:;base64,AAAA");
        assert_eq!(img.mime_type, "image/jpeg");
        assert_eq!(img.data, "AAAA");
    }

    #[test]
    fn test_outgoing_turn_defaults_empty_text() {
        let turn = OutgoingTurn::new("   ", None);
        assert_eq!(turn.text, OutgoingTurn::DEFAULT_TEXT);

        let turn = OutgoingTurn::new("Giải thích vòng lặp for?", None);
        assert_eq!(turn.text, "Giải thích vòng lặp for?");
    }

    #[test]
    fn test_turn_constructors() {
        let turn = ChatTurn::user("Em chào thầy");
        assert_eq!(turn.speaker, Speaker::User);
        assert!(turn.image.is_none());

        let turn = ChatTurn::tutor("Chào em 👋");
        assert_eq!(turn.speaker, Speaker::Tutor);
    }
}
