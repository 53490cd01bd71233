use serde::{Deserialize, Serialize};

use crate::creature::check_name_chars;
use crate::error::EngineError;
use crate::{CreatureId, PlayerId};

/// A trainer owning a box of creatures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    #[serde(default)]
    pub monster_box: Vec<CreatureId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerDraft {
    pub name: String,
}

impl PlayerDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Only the character set is checked; a blank name is accepted.
    pub fn validate(&self) -> Result<(), EngineError> {
        check_name_chars(&self.name).map_err(EngineError::InvalidPlayer)
    }
}
