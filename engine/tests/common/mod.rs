#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use fighter_engine::store::{CreatureStore, FightStore, InMemoryCreatureStore, InMemoryFightStore};
use fighter_engine::{Creature, CreatureId, Fight, FightId, FightService};

/// Store wrappers that count writes.
#[derive(Default)]
pub struct CountingCreatures {
    inner: InMemoryCreatureStore,
    pub saves: AtomicUsize,
}

impl CreatureStore for CountingCreatures {
    fn find_by_id(&self, id: CreatureId) -> Option<Creature> {
        self.inner.find_by_id(id)
    }

    fn find_all(&self) -> Vec<Creature> {
        self.inner.find_all()
    }

    fn find_by_name(&self, name: &str) -> Vec<Creature> {
        self.inner.find_by_name(name)
    }

    fn save(&self, creature: Creature) -> Creature {
        self.saves.fetch_add(1, Ordering::SeqCst);
        self.inner.save(creature)
    }

    fn delete(&self, id: CreatureId) -> bool {
        self.inner.delete(id)
    }
}

#[derive(Default)]
pub struct CountingFights {
    inner: InMemoryFightStore,
    pub saves: AtomicUsize,
}

impl FightStore for CountingFights {
    fn find_by_id(&self, id: FightId) -> Option<Fight> {
        self.inner.find_by_id(id)
    }

    fn save(&self, fight: Fight) -> Fight {
        self.saves.fetch_add(1, Ordering::SeqCst);
        self.inner.save(fight)
    }

    fn references_creature(&self, id: CreatureId) -> bool {
        self.inner.references_creature(id)
    }
}

pub struct Arena {
    pub creatures: Arc<CountingCreatures>,
    pub fights: Arc<CountingFights>,
    pub service: FightService<CountingCreatures, CountingFights>,
}

impl Arena {
    pub fn new() -> Self {
        let creatures = Arc::new(CountingCreatures::default());
        let fights = Arc::new(CountingFights::default());
        let service = FightService::new(Arc::clone(&creatures), Arc::clone(&fights));
        Self {
            creatures,
            fights,
            service,
        }
    }

    /// Store a creature directly, bypassing registry validation.
    pub fn put(&self, name: &str, attack: u32, defence: u32, health: u32) -> Creature {
        self.creatures
            .inner
            .save(Creature::new(name, attack, defence, health))
    }

    pub fn health(&self, id: CreatureId) -> u32 {
        self.creatures.find_by_id(id).map_or(0, |c| c.health)
    }

    pub fn writes(&self) -> (usize, usize) {
        (
            self.creatures.saves.load(Ordering::SeqCst),
            self.fights.saves.load(Ordering::SeqCst),
        )
    }
}
