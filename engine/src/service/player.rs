use std::sync::Arc;

use tracing::info;

use crate::creature::{Creature, CreatureDraft};
use crate::error::EngineError;
use crate::player::{Player, PlayerDraft};
use crate::store::{CreatureStore, PlayerStore};
use crate::{CreatureId, PlayerId};

/// Players and their monster boxes.
pub struct PlayerService<P, C> {
    players: Arc<P>,
    creatures: Arc<C>,
}

impl<P: PlayerStore, C: CreatureStore> PlayerService<P, C> {
    pub fn new(players: Arc<P>, creatures: Arc<C>) -> Self {
        Self { players, creatures }
    }

    pub fn list(&self) -> Vec<Player> {
        self.players.find_all()
    }

    pub fn get(&self, id: PlayerId) -> Option<Player> {
        self.players.find_by_id(id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<Player> {
        self.players.find_by_name(name)
    }

    /// Names are unique across players.
    pub fn create(&self, draft: PlayerDraft) -> Result<Player, EngineError> {
        draft.validate()?;
        if self.players.exists_by_name(&draft.name) {
            return Err(EngineError::DuplicatePlayerName(draft.name));
        }
        let player = self.players.save(Player {
            id: PlayerId::new(),
            name: draft.name,
            monster_box: Vec::new(),
        });
        info!(player = %player.id, name = %player.name, "player created");
        Ok(player)
    }

    /// Rename a player. Keeping the current name is always allowed.
    pub fn update(&self, id: PlayerId, draft: PlayerDraft) -> Result<Player, EngineError> {
        let mut player = self.load(id)?;
        draft.validate()?;
        if player.name != draft.name && self.players.exists_by_name(&draft.name) {
            return Err(EngineError::DuplicatePlayerName(draft.name));
        }
        player.name = draft.name;
        Ok(self.players.save(player))
    }

    pub fn delete(&self, id: PlayerId) -> Result<(), EngineError> {
        if !self.players.delete(id) {
            return Err(EngineError::PlayerNotFound(id));
        }
        info!(player = %id, "player deleted");
        Ok(())
    }

    /// Creatures in the player's box, in box order. Ids whose creature was
    /// deleted from the registry are skipped.
    pub fn monsters(&self, id: PlayerId) -> Result<Vec<Creature>, EngineError> {
        let player = self.load(id)?;
        Ok(player
            .monster_box
            .iter()
            .filter_map(|&creature| self.creatures.find_by_id(creature))
            .collect())
    }

    /// Register a new creature and append it to the player's box.
    pub fn add_monster(&self, id: PlayerId, draft: CreatureDraft) -> Result<Player, EngineError> {
        let mut player = self.load(id)?;
        let creature = self.creatures.save(draft.into_creature(CreatureId::new())?);
        player.monster_box.push(creature.id);
        info!(player = %id, creature = %creature.id, "creature added to box");
        Ok(self.players.save(player))
    }

    pub fn remove_monster(
        &self,
        id: PlayerId,
        creature: CreatureId,
    ) -> Result<Player, EngineError> {
        let mut player = self.load(id)?;
        let before = player.monster_box.len();
        player.monster_box.retain(|&c| c != creature);
        if player.monster_box.len() == before {
            return Err(EngineError::CreatureNotInBox {
                player: id,
                creature,
            });
        }
        Ok(self.players.save(player))
    }

    fn load(&self, id: PlayerId) -> Result<Player, EngineError> {
        self.players
            .find_by_id(id)
            .ok_or(EngineError::PlayerNotFound(id))
    }
}
