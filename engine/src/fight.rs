use std::fmt;

use serde::{Deserialize, Serialize};

use crate::creature::Creature;
use crate::{CreatureId, FightId};

/// One side of a fight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    #[serde(rename = "TEAM_A")]
    A,
    #[serde(rename = "TEAM_B")]
    B,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::A => f.write_str("Team A"),
            Side::B => f.write_str("Team B"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FightStatus {
    Ongoing,
    TeamAWon,
    TeamBWon,
}

impl FightStatus {
    /// Won states absorb every further exchange.
    pub fn is_terminal(self) -> bool {
        !matches!(self, FightStatus::Ongoing)
    }

    pub fn winner(self) -> Option<Side> {
        match self {
            FightStatus::Ongoing => None,
            FightStatus::TeamAWon => Some(Side::A),
            FightStatus::TeamBWon => Some(Side::B),
        }
    }
}

/// Persisted fight record. Rosters are held as ordered creature ids; the
/// creatures themselves live in the creature store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fight {
    pub id: FightId,
    pub team_a: Vec<CreatureId>,
    pub team_b: Vec<CreatureId>,
    pub active_monster_a: CreatureId,
    pub active_monster_b: CreatureId,
    pub status: FightStatus,
    /// Bumped on every write of this record.
    #[serde(default)]
    pub version: u64,
}

impl Fight {
    pub fn new(
        team_a: Vec<CreatureId>,
        team_b: Vec<CreatureId>,
        active_monster_a: CreatureId,
        active_monster_b: CreatureId,
    ) -> Self {
        Self {
            id: FightId::new(),
            team_a,
            team_b,
            active_monster_a,
            active_monster_b,
            status: FightStatus::Ongoing,
            version: 0,
        }
    }

    pub fn team(&self, side: Side) -> &[CreatureId] {
        match side {
            Side::A => &self.team_a,
            Side::B => &self.team_b,
        }
    }

    pub fn active(&self, side: Side) -> CreatureId {
        match side {
            Side::A => self.active_monster_a,
            Side::B => self.active_monster_b,
        }
    }
}

/// Read-only snapshot of a fight with both rosters resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FightState {
    pub fight_id: FightId,
    pub active_monster_a: CreatureId,
    pub active_monster_b: CreatureId,
    pub team_a: Vec<Creature>,
    pub team_b: Vec<Creature>,
    pub status: FightStatus,
}

impl FightState {
    pub fn project(fight: &Fight, team_a: Vec<Creature>, team_b: Vec<Creature>) -> Self {
        Self {
            fight_id: fight.id,
            active_monster_a: fight.active_monster_a,
            active_monster_b: fight.active_monster_b,
            team_a,
            team_b,
            status: fight.status,
        }
    }

    pub fn active_creature(&self, side: Side) -> Option<&Creature> {
        let (roster, id) = match side {
            Side::A => (&self.team_a, self.active_monster_a),
            Side::B => (&self.team_b, self.active_monster_b),
        };
        roster.iter().find(|c| c.id == id)
    }
}
