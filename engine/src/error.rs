use thiserror::Error;

use crate::fight::Side;
use crate::{CreatureId, FightId, PlayerId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("{side} cannot be empty")]
    InvalidTeam { side: Side },

    #[error("creature not found with id: {0}")]
    CreatureNotFound(CreatureId),

    #[error("{side} has no healthy creatures")]
    NoHealthyCreatures { side: Side },

    #[error("fight not found with id: {0}")]
    FightNotFound(FightId),

    /// The fight references an active creature outside its own roster.
    #[error("{side} active creature not found: {id}")]
    ActiveCreatureNotFound { side: Side, id: CreatureId },

    /// Fight rosters are fixed once created, so their creatures cannot leave
    /// the registry.
    #[error("creature {0} is part of a fight and cannot be deleted")]
    CreatureInFight(CreatureId),

    #[error("invalid creature: {0}")]
    InvalidCreature(String),

    #[error("invalid player: {0}")]
    InvalidPlayer(String),

    #[error("player not found with id: {0}")]
    PlayerNotFound(PlayerId),

    #[error("player with name '{0}' already exists")]
    DuplicatePlayerName(String),

    #[error("creature {creature} is not in the monster box of player {player}")]
    CreatureNotInBox {
        player: PlayerId,
        creature: CreatureId,
    },
}

impl EngineError {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            EngineError::CreatureNotFound(_)
                | EngineError::FightNotFound(_)
                | EngineError::ActiveCreatureNotFound { .. }
                | EngineError::PlayerNotFound(_)
                | EngineError::CreatureNotInBox { .. }
        )
    }

    /// Stable machine-readable code for the variant.
    pub fn code(&self) -> &'static str {
        match self {
            EngineError::InvalidTeam { .. } => "INVALID_TEAM",
            EngineError::CreatureNotFound(_) => "CREATURE_NOT_FOUND",
            EngineError::NoHealthyCreatures { .. } => "NO_HEALTHY_CREATURES",
            EngineError::FightNotFound(_) => "FIGHT_NOT_FOUND",
            EngineError::ActiveCreatureNotFound { .. } => "ACTIVE_CREATURE_NOT_FOUND",
            EngineError::CreatureInFight(_) => "CREATURE_IN_FIGHT",
            EngineError::InvalidCreature(_) => "INVALID_CREATURE",
            EngineError::InvalidPlayer(_) => "INVALID_PLAYER",
            EngineError::PlayerNotFound(_) => "PLAYER_NOT_FOUND",
            EngineError::DuplicatePlayerName(_) => "DUPLICATE_PLAYER_NAME",
            EngineError::CreatureNotInBox { .. } => "CREATURE_NOT_IN_BOX",
        }
    }
}
