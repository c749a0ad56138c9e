use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of user action recorded against a fragrance
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InteractionKind {
    View,
    Favorite,
    AddToInventory,
    Click,
}

/// A single recorded user interaction. Immutable once appended to the log.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Interaction {
    pub fragrance_id: String,
    pub kind: InteractionKind,
    pub timestamp: DateTime<Utc>,
}

impl Interaction {
    /// Creates an interaction stamped with the current time
    pub fn new(fragrance_id: impl Into<String>, kind: InteractionKind) -> Self {
        Self {
            fragrance_id: fragrance_id.into(),
            kind,
            timestamp: Utc::now(),
        }
    }
}
