//! Chat subdomain: tutoring conversation turns and attachments.

pub mod turn;

pub use turn::{ChatTurn, ImageAttachment, OutgoingTurn, Speaker};
