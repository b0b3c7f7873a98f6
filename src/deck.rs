//! Deck loading and validation.
//!
//! The deck is a single JSON file (`data/cards.json` by default): a flat
//! array of card records with no cross-references. It is read once at the
//! start of a build and held in memory read-only.
//!
//! ```json
//! [
//!   {
//!     "id": "WI-001",
//!     "location_title": "Door County",
//!     "reveal_title": "Sunrise at Cave Point",
//!     "cost": "FREE",
//!     "time_of_day": "DAY",
//!     "duration": "HALF DAY",
//!     "setting": "OUTDOOR",
//!     "effort": "MODERATE",
//!     "season": "SUMMER",
//!     "bonus": "Free parking before 8am",
//!     "summary_blurb": "Waves on limestone ledges.",
//!     "steps": ["Drive to the county park", "Walk the shoreline trail"],
//!     "notes": ["Rocks are slippery when wet"],
//!     "links": [{"label": "Park info", "url": "https://example.com/park"}]
//!   }
//! ]
//! ```
//!
//! ## Validation
//!
//! A record missing a required field fails JSON deserialization, which aborts
//! the whole run: malformed source data is a systemic error, not a per-card
//! one. Two invariants serde cannot check are validated explicitly after
//! parsing, each with an error naming the offending record:
//!
//! - `id` must be unique across the deck
//! - `id` must be filesystem-safe (it becomes the `cards/<id>/` path segment)

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeckError {
    #[error("cannot read deck file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("deck file is not a valid card array: {0}")]
    Json(#[from] serde_json::Error),
    #[error("duplicate card id: {0}")]
    DuplicateId(String),
    #[error("card id {0:?} is not filesystem-safe (use letters, digits, '-', '_')")]
    UnsafeId(String),
}

/// One adventure card: display text, categorical attributes, and action
/// content. Cards are independent; the deck has no cross-references.
#[derive(Debug, Clone, Deserialize)]
pub struct Card {
    /// Unique identifier, e.g. `WI-001`. Display label and path segment.
    pub id: String,
    /// Where the adventure happens (card front).
    pub location_title: String,
    /// What the adventure is (revealed on the card page).
    pub reveal_title: String,
    pub cost: String,
    pub time_of_day: String,
    pub duration: String,
    pub setting: String,
    pub effort: String,
    pub season: String,
    /// Optional perk. Absent or empty suppresses the bonus block.
    #[serde(default)]
    pub bonus: Option<String>,
    /// Optional one-line flavor text. Absent or empty suppresses the block.
    #[serde(default)]
    pub summary_blurb: Option<String>,
    /// Ordered instructions. May be empty.
    pub steps: Vec<String>,
    /// Ordered advisories. May be empty.
    pub notes: Vec<String>,
    /// Ordered external references. May be empty.
    pub links: Vec<CardLink>,
}

/// A labeled external link on a card page.
#[derive(Debug, Clone, Deserialize)]
pub struct CardLink {
    pub label: String,
    pub url: String,
}

/// Load and validate the deck from a JSON file.
pub fn load_deck(path: &Path) -> Result<Vec<Card>, DeckError> {
    let content = fs::read_to_string(path).map_err(|source| DeckError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let cards: Vec<Card> = serde_json::from_str(&content)?;
    validate_deck(&cards)?;
    Ok(cards)
}

/// Check deck-wide invariants: unique, filesystem-safe ids.
pub fn validate_deck(cards: &[Card]) -> Result<(), DeckError> {
    let mut seen = std::collections::HashSet::new();
    for card in cards {
        if !is_safe_id(&card.id) {
            return Err(DeckError::UnsafeId(card.id.clone()));
        }
        if !seen.insert(card.id.as_str()) {
            return Err(DeckError::DuplicateId(card.id.clone()));
        }
    }
    Ok(())
}

/// An id is safe when it is non-empty ASCII alphanumerics, `-`, or `_`.
/// Anything else (separators, dots, spaces, unicode) is rejected rather than
/// sanitized: the id doubles as a display label, so mangling it silently
/// would lie to the reader.
fn is_safe_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
