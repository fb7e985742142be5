//! Player preferences
//!
//! Persisted separately from the leaderboard in LocalStorage.

use crate::config::SETTINGS_KEY;
use crate::storage::{self, StorageError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Silence all sound cues
    pub muted: bool,
}

impl Settings {
    pub fn load() -> Self {
        storage::load_or_default(SETTINGS_KEY)
    }

    pub fn save(&self) -> Result<(), StorageError> {
        storage::save_json(SETTINGS_KEY, self)
    }

    pub fn toggled_mute(self) -> Self {
        Self { muted: !self.muted }
    }
}
