use std::sync::Arc;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::content::{RosterFile, builtin_roster};
use crate::creature::{Creature, CreatureDraft};
use crate::fight::{FightStatus, Side};
use crate::service::{CreatureService, FightService};
use crate::store::{InMemoryCreatureStore, InMemoryFightStore};
use crate::{CreatureId, FightId};

/// Safety cap; every exchange deals at least 1 damage so real fights end well before.
pub const DEFAULT_MAX_EXCHANGES: u32 = 10_000;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SimulationResult {
    pub fight_id: FightId,
    pub status: FightStatus,
    pub winner: Option<Side>,
    pub exchanges: u32,
    pub team_a: Vec<Creature>,
    pub team_b: Vec<Creature>,
    pub log: Vec<String>,
}

/// Register both rosters in fresh in-memory stores and run exchanges until the
/// fight is decided or `max_exchanges` is reached.
pub fn simulate_fight(roster: &RosterFile, max_exchanges: u32) -> Result<SimulationResult> {
    let creatures = Arc::new(InMemoryCreatureStore::new());
    let fights = Arc::new(InMemoryFightStore::new());
    let registry = CreatureService::new(Arc::clone(&creatures), Arc::clone(&fights));
    let service = FightService::new(creatures, fights);

    let team_a = register(&registry, &roster.team_a, Side::A)?;
    let team_b = register(&registry, &roster.team_b, Side::B)?;
    let fight = service
        .create_fight(&team_a, &team_b)
        .context("failed to create fight")?;

    let mut log = vec![format!(
        "[START] {} ({}) vs {} ({})",
        Side::A,
        roster_names(&roster.team_a),
        Side::B,
        roster_names(&roster.team_b)
    )];

    let mut state = service.fight_state(fight.id)?;
    let mut exchanges = 0u32;
    while !state.status.is_terminal() && exchanges < max_exchanges {
        exchanges += 1;
        log.push(format!("[ROUND] {}", exchanges));
        state = service.execute_exchange_with_log(fight.id, |line| log.push(line))?;
    }

    if !state.status.is_terminal() {
        log.push(format!("[END] undecided after {} exchanges", exchanges));
    }

    Ok(SimulationResult {
        fight_id: fight.id,
        status: state.status,
        winner: state.status.winner(),
        exchanges,
        team_a: state.team_a,
        team_b: state.team_b,
        log,
    })
}

pub fn simulate_builtin(name: &str, max_exchanges: u32) -> Result<SimulationResult> {
    let roster = builtin_roster(name)?;
    simulate_fight(&roster, max_exchanges)
}

fn register(
    registry: &CreatureService<InMemoryCreatureStore, InMemoryFightStore>,
    drafts: &[CreatureDraft],
    side: Side,
) -> Result<Vec<CreatureId>> {
    drafts
        .iter()
        .map(|draft| {
            registry
                .create(draft.clone())
                .map(|c| c.id)
                .with_context(|| format!("{}: creature '{}'", side, draft.name))
        })
        .collect()
}

fn roster_names(drafts: &[CreatureDraft]) -> String {
    drafts
        .iter()
        .map(|d| d.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
