//! Note domain model.
//!
//! # Responsibility
//! - Define the canonical note record and its fixed color palette.
//! - Own id issuance semantics (epoch-ms with monotonic bump).
//!
//! # Invariants
//! - `id` is unique within one store instance for its lifetime.
//! - `text` is the only mutable field after creation.
//! - `color` is always one of the six palette tags.

use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// Stable identifier for a note: epoch milliseconds at creation time.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NoteId = i64;

/// Fixed six-tag color palette for note cards.
///
/// Cosmetic only; assignment is a uniform random pick at creation and the
/// tag never changes afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Yellow,
    Pink,
    Blue,
    Green,
    Purple,
    Orange,
}

/// All palette tags, in display order.
pub const PALETTE: [Color; 6] = [
    Color::Yellow,
    Color::Pink,
    Color::Blue,
    Color::Green,
    Color::Purple,
    Color::Orange,
];

impl Color {
    /// Picks one palette tag uniformly at random.
    pub fn random() -> Self {
        let mut rng = rand::thread_rng();
        // PALETTE is non-empty, choose cannot return None.
        *PALETTE.choose(&mut rng).unwrap_or(&Color::Yellow)
    }

    /// Returns the lowercase wire tag for this color.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Yellow => "yellow",
            Self::Pink => "pink",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Purple => "purple",
            Self::Orange => "orange",
        }
    }
}

/// A user-authored sticky note.
///
/// Persisted field names follow the external schema: `id`, `text`, `color`,
/// `createdAt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Creation timestamp in epoch milliseconds, doubling as the stable id.
    pub id: NoteId,
    /// Note body, exactly as entered (leading/trailing whitespace kept).
    pub text: String,
    /// One of the six palette tags.
    pub color: Color,
    /// Human-readable local creation time.
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl Note {
    /// Creates a note with a caller-provided id and a random palette color.
    ///
    /// Id issuance (uniqueness across rapid creation) is owned by the store;
    /// this constructor does not validate it.
    pub fn with_id(id: NoteId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            color: Color::random(),
            created_at: local_timestamp(),
        }
    }
}

/// Formats the current local time as a human-readable string.
pub fn local_timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M").to_string()
}

/// Returns the current epoch time in milliseconds.
pub fn now_epoch_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::{local_timestamp, Color, Note, PALETTE};

    #[test]
    fn random_color_is_from_palette() {
        for _ in 0..64 {
            let color = Color::random();
            assert!(PALETTE.contains(&color));
        }
    }

    #[test]
    fn color_serializes_as_lowercase_tag() {
        for color in PALETTE {
            let json = serde_json::to_string(&color).expect("color should serialize");
            assert_eq!(json, format!("\"{}\"", color.tag()));
        }
    }

    #[test]
    fn note_round_trips_through_json_with_wire_field_names() {
        let note = Note {
            id: 1_700_000_000_000,
            text: "  keep my spaces  ".to_string(),
            color: Color::Pink,
            created_at: "2026-08-26 10:30".to_string(),
        };

        let json = serde_json::to_string(&note).expect("note should serialize");
        assert!(json.contains("\"createdAt\""));
        assert!(json.contains("\"pink\""));

        let back: Note = serde_json::from_str(&json).expect("note should deserialize");
        assert_eq!(back, note);
    }

    #[test]
    fn local_timestamp_is_not_empty() {
        assert!(!local_timestamp().is_empty());
    }
}
