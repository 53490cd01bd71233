use std::sync::Arc;

use fighter_engine::store::{InMemoryCreatureStore, InMemoryFightStore, InMemoryPlayerStore};
use fighter_engine::{CreatureService, FightService, PlayerService};

pub type Creatures = InMemoryCreatureStore;
pub type Fights = InMemoryFightStore;
pub type Players = InMemoryPlayerStore;

/// Services shared by every handler. Cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub fights: Arc<FightService<Creatures, Fights>>,
    pub creatures: Arc<CreatureService<Creatures, Fights>>,
    pub players: Arc<PlayerService<Players, Creatures>>,
}

impl AppState {
    /// All three services over one set of in-memory stores.
    pub fn in_memory() -> Self {
        let creatures = Arc::new(Creatures::new());
        let fights = Arc::new(Fights::new());
        let players = Arc::new(Players::new());
        Self {
            fights: Arc::new(FightService::new(Arc::clone(&creatures), Arc::clone(&fights))),
            creatures: Arc::new(CreatureService::new(Arc::clone(&creatures), fights)),
            players: Arc::new(PlayerService::new(players, creatures)),
        }
    }
}
