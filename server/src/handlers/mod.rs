//! HTTP handlers. Each one translates a request into a single service call.

mod fight;
mod health;
mod monster;
mod player;

pub use fight::{create_fight, execute_exchange, get_fight_state};
pub use health::health_check;
pub use monster::{
    create_monster, delete_monster, get_monster, get_monsters_by_name, list_monsters,
    update_monster,
};
pub use player::{
    add_player_monster, create_player, delete_player, get_player, get_player_by_name,
    list_player_monsters, list_players, remove_player_monster, update_player,
};
