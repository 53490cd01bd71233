use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::CreatureId;

/// A combatant. `health == 0` means fainted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creature {
    pub id: CreatureId,
    pub name: String,
    pub attack: u32,
    pub defence: u32,
    pub health: u32,
}

impl Creature {
    pub fn new(name: impl Into<String>, attack: u32, defence: u32, health: u32) -> Self {
        Self {
            id: CreatureId::new(),
            name: name.into(),
            attack,
            defence,
            health,
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.health > 0
    }

    pub fn is_fainted(&self) -> bool {
        self.health == 0
    }
}

/// Unvalidated creature attributes as they arrive from a caller.
///
/// Numbers are signed so that negative input reaches validation instead of
/// failing deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatureDraft {
    pub name: String,
    pub attack: i64,
    pub defence: i64,
    pub health: i64,
}

impl CreatureDraft {
    pub fn new(name: impl Into<String>, attack: i64, defence: i64, health: i64) -> Self {
        Self {
            name: name.into(),
            attack,
            defence,
            health,
        }
    }

    /// Checks name, non-negative attack/defence and positive health.
    pub fn validate(&self) -> Result<(), EngineError> {
        validate_name(&self.name).map_err(EngineError::InvalidCreature)?;
        if self.attack < 0 {
            return Err(invalid("attack must be non-negative"));
        }
        if self.defence < 0 {
            return Err(invalid("defence must be non-negative"));
        }
        if self.health <= 0 {
            return Err(invalid("health must be positive"));
        }
        Ok(())
    }

    /// Validates and builds a creature with the given identity.
    pub fn into_creature(self, id: CreatureId) -> Result<Creature, EngineError> {
        self.validate()?;
        Ok(Creature {
            id,
            attack: stat("attack", self.attack)?,
            defence: stat("defence", self.defence)?,
            health: stat("health", self.health)?,
            name: self.name,
        })
    }
}

/// Creature names are required and limited to ASCII letters, digits and spaces.
pub(crate) fn validate_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("name cannot be empty".to_string());
    }
    check_name_chars(name)
}

/// ASCII letters, digits and spaces only. An empty name passes.
pub(crate) fn check_name_chars(name: &str) -> Result<(), String> {
    match name.chars().find(|c| !(c.is_ascii_alphanumeric() || *c == ' ')) {
        Some(bad) => Err(format!("name contains invalid character {:?}", bad)),
        None => Ok(()),
    }
}

fn invalid(reason: &str) -> EngineError {
    EngineError::InvalidCreature(reason.to_string())
}

fn stat(field: &str, value: i64) -> Result<u32, EngineError> {
    u32::try_from(value)
        .map_err(|_| EngineError::InvalidCreature(format!("{} out of range: {}", field, value)))
}
