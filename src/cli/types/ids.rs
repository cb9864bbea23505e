//! ID types for NBA stats data.

use serde::{Deserialize, Serialize};
use std::fmt;

/// League-assigned per-game ID.
///
/// Game IDs are ten characters with a leading `"00"` prefix
/// (e.g. `0022100001`), but the upstream data sometimes supplies them with
/// the prefix stripped. [`GameId::normalize`] restores the canonical form
/// before the ID is used in any path or API call.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameId(pub String);

impl GameId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Prepend the `"00"` prefix when missing. Idempotent.
    pub fn normalize(&self) -> GameId {
        if self.0.starts_with("00") {
            self.clone()
        } else {
            GameId(format!("00{}", self.0))
        }
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for GameId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
