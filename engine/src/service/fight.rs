use std::sync::{Arc, PoisonError};

use tracing::{debug, info, warn};

use super::locks::FightLocks;
use crate::battle::{first_healthy, resolve_exchange};
use crate::creature::Creature;
use crate::error::EngineError;
use crate::fight::{Fight, FightState, Side};
use crate::store::{CreatureStore, FightStore};
use crate::{CreatureId, FightId};

/// Creates fights and drives them one exchange at a time.
pub struct FightService<C, F> {
    creatures: Arc<C>,
    fights: Arc<F>,
    locks: FightLocks,
}

impl<C: CreatureStore, F: FightStore> FightService<C, F> {
    pub fn new(creatures: Arc<C>, fights: Arc<F>) -> Self {
        Self {
            creatures,
            fights,
            locks: FightLocks::default(),
        }
    }

    /// Start a fight between two rosters of existing creatures.
    ///
    /// Both id lists must be non-empty and resolve, and each roster needs at
    /// least one healthy creature; the first healthy one per side becomes
    /// active. Nothing is written unless every check passes.
    pub fn create_fight(
        &self,
        team_a: &[CreatureId],
        team_b: &[CreatureId],
    ) -> Result<Fight, EngineError> {
        validate_team(team_a, Side::A)?;
        validate_team(team_b, Side::B)?;

        let roster_a = self.load_roster(team_a)?;
        let roster_b = self.load_roster(team_b)?;

        let active_a = first_healthy(&roster_a)
            .map(|c| c.id)
            .ok_or(EngineError::NoHealthyCreatures { side: Side::A })?;
        let active_b = first_healthy(&roster_b)
            .map(|c| c.id)
            .ok_or(EngineError::NoHealthyCreatures { side: Side::B })?;

        let fight = self.fights.save(Fight::new(
            team_a.to_vec(),
            team_b.to_vec(),
            active_a,
            active_b,
        ));
        info!(
            fight = %fight.id,
            team_a = team_a.len(),
            team_b = team_b.len(),
            "fight created"
        );
        Ok(fight)
    }

    /// Resolve one exchange; see [`FightService::execute_exchange_with_log`].
    pub fn execute_exchange(&self, fight_id: FightId) -> Result<FightState, EngineError> {
        self.execute_exchange_with_log(fight_id, |line| debug!(fight = %fight_id, "{}", line))
    }

    /// Resolve one exchange of an ongoing fight and persist the result.
    ///
    /// A fight that already has a winner is returned as-is without any write.
    /// Exchanges on the same fight are serialized for the whole
    /// read-compute-write cycle. Unknown and decided fights never take a lock.
    pub fn execute_exchange_with_log(
        &self,
        fight_id: FightId,
        log: impl FnMut(String),
    ) -> Result<FightState, EngineError> {
        let fight = self.load_fight(fight_id)?;
        if fight.status.is_terminal() {
            debug!(fight = %fight_id, status = ?fight.status, "fight already decided");
            return self.project(&fight);
        }

        let lock = self.locks.for_fight(fight_id);
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);
        let state = self.exchange_locked(fight_id, log)?;
        if state.status.is_terminal() {
            self.locks.release(fight_id);
        }
        Ok(state)
    }

    /// Body of an exchange; the caller holds the fight's lock.
    fn exchange_locked(
        &self,
        fight_id: FightId,
        log: impl FnMut(String),
    ) -> Result<FightState, EngineError> {
        // status may have changed while waiting for the lock
        let mut fight = self.load_fight(fight_id)?;
        if fight.status.is_terminal() {
            return self.project(&fight);
        }
        let mut roster_a = self.load_roster(&fight.team_a)?;
        let mut roster_b = self.load_roster(&fight.team_b)?;

        let report = resolve_exchange(
            &mut roster_a,
            &mut roster_b,
            fight.active_monster_a,
            fight.active_monster_b,
            log,
        )
        .inspect_err(|e| warn!(fight = %fight_id, error = %e, "corrupted fight state"))?;

        for id in [report.fighter_a, report.fighter_b] {
            if let Some(creature) = roster_a.iter().chain(roster_b.iter()).find(|c| c.id == id) {
                self.creatures.save(creature.clone());
            }
        }

        fight.active_monster_a = report.active_a;
        fight.active_monster_b = report.active_b;
        fight.status = report.status;
        fight.version += 1;
        let fight = self.fights.save(fight);

        debug!(
            fight = %fight_id,
            damage_to_a = report.damage_to_a,
            damage_to_b = report.damage_to_b,
            version = fight.version,
            "exchange resolved"
        );
        if fight.status.is_terminal() {
            info!(fight = %fight_id, status = ?fight.status, "fight decided");
        }

        Ok(FightState::project(&fight, roster_a, roster_b))
    }

    pub fn fight_state(&self, fight_id: FightId) -> Result<FightState, EngineError> {
        let fight = self.load_fight(fight_id)?;
        self.project(&fight)
    }

    fn project(&self, fight: &Fight) -> Result<FightState, EngineError> {
        let roster_a = self.load_roster(&fight.team_a)?;
        let roster_b = self.load_roster(&fight.team_b)?;
        Ok(FightState::project(fight, roster_a, roster_b))
    }

    fn load_fight(&self, fight_id: FightId) -> Result<Fight, EngineError> {
        self.fights
            .find_by_id(fight_id)
            .ok_or(EngineError::FightNotFound(fight_id))
    }

    fn load_roster(&self, ids: &[CreatureId]) -> Result<Vec<Creature>, EngineError> {
        ids.iter()
            .map(|&id| {
                self.creatures
                    .find_by_id(id)
                    .ok_or(EngineError::CreatureNotFound(id))
            })
            .collect()
    }
}

fn validate_team(ids: &[CreatureId], side: Side) -> Result<(), EngineError> {
    if ids.is_empty() {
        return Err(EngineError::InvalidTeam { side });
    }
    Ok(())
}
