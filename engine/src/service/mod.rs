//! Use-case layer: validation, store access and locking around the pure
//! battle rules.

mod creature;
mod fight;
mod locks;
mod player;

pub use creature::CreatureService;
pub use fight::FightService;
pub use player::PlayerService;
