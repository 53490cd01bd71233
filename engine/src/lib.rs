use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod api;
pub mod battle;
pub mod content;
pub mod creature;
pub mod error;
pub mod fight;
pub mod player;
pub mod service;
pub mod store;

pub use battle::{damage, first_healthy, has_healthy, resolve_exchange, ExchangeReport};
pub use creature::{Creature, CreatureDraft};
pub use error::EngineError;
pub use fight::{Fight, FightState, FightStatus, Side};
pub use player::{Player, PlayerDraft};
pub use service::{CreatureService, FightService, PlayerService};

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Fresh random identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s).map(Self)
            }
        }
    };
}

entity_id!(
    /// Identity of a creature in the creature store.
    CreatureId
);
entity_id!(
    /// Identity of a fight record.
    FightId
);
entity_id!(PlayerId);
