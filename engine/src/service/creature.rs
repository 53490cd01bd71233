use std::sync::Arc;

use tracing::info;

use crate::creature::{Creature, CreatureDraft};
use crate::error::EngineError;
use crate::store::{CreatureStore, FightStore};
use crate::CreatureId;

/// Registry operations over the creature store.
pub struct CreatureService<C, F> {
    creatures: Arc<C>,
    fights: Arc<F>,
}

impl<C: CreatureStore, F: FightStore> CreatureService<C, F> {
    pub fn new(creatures: Arc<C>, fights: Arc<F>) -> Self {
        Self { creatures, fights }
    }

    pub fn list(&self) -> Vec<Creature> {
        self.creatures.find_all()
    }

    pub fn get(&self, id: CreatureId) -> Option<Creature> {
        self.creatures.find_by_id(id)
    }

    pub fn find_by_name(&self, name: &str) -> Vec<Creature> {
        self.creatures.find_by_name(name)
    }

    pub fn create(&self, draft: CreatureDraft) -> Result<Creature, EngineError> {
        let creature = self.creatures.save(draft.into_creature(CreatureId::new())?);
        info!(creature = %creature.id, name = %creature.name, "creature created");
        Ok(creature)
    }

    /// Replace every attribute of an existing creature.
    pub fn update(&self, id: CreatureId, draft: CreatureDraft) -> Result<Creature, EngineError> {
        if !self.creatures.exists(id) {
            return Err(EngineError::CreatureNotFound(id));
        }
        Ok(self.creatures.save(draft.into_creature(id)?))
    }

    /// Creatures enlisted in any fight, decided or not, stay in the registry.
    pub fn delete(&self, id: CreatureId) -> Result<(), EngineError> {
        if !self.creatures.exists(id) {
            return Err(EngineError::CreatureNotFound(id));
        }
        if self.fights.references_creature(id) {
            return Err(EngineError::CreatureInFight(id));
        }
        if !self.creatures.delete(id) {
            return Err(EngineError::CreatureNotFound(id));
        }
        info!(creature = %id, "creature deleted");
        Ok(())
    }
}
