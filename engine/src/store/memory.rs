use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use indexmap::IndexMap;

use super::{CreatureStore, FightStore, PlayerStore};
use crate::creature::Creature;
use crate::fight::Fight;
use crate::player::Player;
use crate::{CreatureId, FightId, PlayerId};

/// Insertion-ordered map behind a lock. Writes replace whole records, so a
/// poisoned lock is still consistent.
#[derive(Debug)]
struct Table<K, V> {
    rows: RwLock<IndexMap<K, V>>,
}

impl<K, V> Default for Table<K, V> {
    fn default() -> Self {
        Self {
            rows: RwLock::new(IndexMap::new()),
        }
    }
}

impl<K: std::hash::Hash + Eq, V: Clone> Table<K, V> {
    fn read(&self) -> RwLockReadGuard<'_, IndexMap<K, V>> {
        self.rows.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, IndexMap<K, V>> {
        self.rows.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn get(&self, key: &K) -> Option<V> {
        self.read().get(key).cloned()
    }

    fn all(&self) -> Vec<V> {
        self.read().values().cloned().collect()
    }

    fn put(&self, key: K, value: V) -> V {
        self.write().insert(key, value.clone());
        value
    }

    fn remove(&self, key: &K) -> bool {
        self.write().shift_remove(key).is_some()
    }
}

#[derive(Debug, Default)]
pub struct InMemoryCreatureStore {
    table: Table<CreatureId, Creature>,
}

impl InMemoryCreatureStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.table.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CreatureStore for InMemoryCreatureStore {
    fn find_by_id(&self, id: CreatureId) -> Option<Creature> {
        self.table.get(&id)
    }

    fn find_all(&self) -> Vec<Creature> {
        self.table.all()
    }

    fn find_by_name(&self, name: &str) -> Vec<Creature> {
        self.table
            .read()
            .values()
            .filter(|c| c.name == name)
            .cloned()
            .collect()
    }

    fn save(&self, creature: Creature) -> Creature {
        self.table.put(creature.id, creature)
    }

    fn delete(&self, id: CreatureId) -> bool {
        self.table.remove(&id)
    }
}

#[derive(Debug, Default)]
pub struct InMemoryFightStore {
    table: Table<FightId, Fight>,
}

impl InMemoryFightStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FightStore for InMemoryFightStore {
    fn find_by_id(&self, id: FightId) -> Option<Fight> {
        self.table.get(&id)
    }

    fn save(&self, fight: Fight) -> Fight {
        self.table.put(fight.id, fight)
    }

    fn references_creature(&self, id: CreatureId) -> bool {
        self.table
            .read()
            .values()
            .any(|f| f.team_a.contains(&id) || f.team_b.contains(&id))
    }
}

#[derive(Debug, Default)]
pub struct InMemoryPlayerStore {
    table: Table<PlayerId, Player>,
}

impl InMemoryPlayerStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PlayerStore for InMemoryPlayerStore {
    fn find_by_id(&self, id: PlayerId) -> Option<Player> {
        self.table.get(&id)
    }

    fn find_all(&self) -> Vec<Player> {
        self.table.all()
    }

    fn find_by_name(&self, name: &str) -> Option<Player> {
        self.table.read().values().find(|p| p.name == name).cloned()
    }

    fn save(&self, player: Player) -> Player {
        self.table.put(player.id, player)
    }

    fn delete(&self, id: PlayerId) -> bool {
        self.table.remove(&id)
    }
}
