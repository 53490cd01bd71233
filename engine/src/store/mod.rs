//! Persistence seams consumed by the services.
//!
//! Stores are plain synchronous traits: the services treat their latency as
//! opaque and never hold partial results. Implementations must be internally
//! synchronized so a single instance can be shared across threads.

mod memory;

pub use memory::{InMemoryCreatureStore, InMemoryFightStore, InMemoryPlayerStore};

use crate::creature::Creature;
use crate::fight::Fight;
use crate::player::Player;
use crate::{CreatureId, FightId, PlayerId};

pub trait CreatureStore: Send + Sync {
    fn find_by_id(&self, id: CreatureId) -> Option<Creature>;

    /// All creatures in insertion order.
    fn find_all(&self) -> Vec<Creature>;

    fn find_by_name(&self, name: &str) -> Vec<Creature>;

    /// Insert or replace by id.
    fn save(&self, creature: Creature) -> Creature;

    /// Returns whether a creature was removed.
    fn delete(&self, id: CreatureId) -> bool;

    fn exists(&self, id: CreatureId) -> bool {
        self.find_by_id(id).is_some()
    }
}

pub trait FightStore: Send + Sync {
    fn find_by_id(&self, id: FightId) -> Option<Fight>;

    fn save(&self, fight: Fight) -> Fight;

    /// Whether any fight lists the creature in either roster.
    fn references_creature(&self, id: CreatureId) -> bool;
}

pub trait PlayerStore: Send + Sync {
    fn find_by_id(&self, id: PlayerId) -> Option<Player>;

    fn find_all(&self) -> Vec<Player>;

    fn find_by_name(&self, name: &str) -> Option<Player>;

    fn save(&self, player: Player) -> Player;

    fn delete(&self, id: PlayerId) -> bool;

    fn exists_by_name(&self, name: &str) -> bool {
        self.find_by_name(name).is_some()
    }
}
