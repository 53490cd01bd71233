use crate::creature::Creature;
use crate::error::EngineError;
use crate::fight::{FightStatus, Side};
use crate::CreatureId;

/// Damage one strike deals: `attack - defence`, never below 1.
pub fn damage(attacker: &Creature, defender: &Creature) -> u32 {
    attacker.attack.saturating_sub(defender.defence).max(1)
}

/// First creature with health left, in roster order.
pub fn first_healthy(roster: &[Creature]) -> Option<&Creature> {
    roster.iter().find(|c| c.is_healthy())
}

pub fn has_healthy(roster: &[Creature]) -> bool {
    roster.iter().any(Creature::is_healthy)
}

/// Team A is checked first, so wiping both teams at once hands the win to team B.
pub fn decide_status(team_a: &[Creature], team_b: &[Creature]) -> FightStatus {
    if !has_healthy(team_a) {
        FightStatus::TeamBWon
    } else if !has_healthy(team_b) {
        FightStatus::TeamAWon
    } else {
        FightStatus::Ongoing
    }
}

/// Outcome of a single exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeReport {
    /// Creatures that traded blows; both have been mutated and need saving.
    pub fighter_a: CreatureId,
    pub fighter_b: CreatureId,
    pub damage_to_a: u32,
    pub damage_to_b: u32,
    /// Active creatures after switching.
    pub active_a: CreatureId,
    pub active_b: CreatureId,
    pub status: FightStatus,
}

impl ExchangeReport {
    pub fn switched(&self, side: Side) -> bool {
        match side {
            Side::A => self.active_a != self.fighter_a,
            Side::B => self.active_b != self.fighter_b,
        }
    }
}

/// Resolve one exchange in place.
///
/// Both active creatures strike simultaneously: damage is computed from the
/// pre-exchange stats of both sides before any health is reduced. A side whose
/// active creature faints switches to its first healthy roster entry; with no
/// replacement the fainted creature stays active and the status check ends the
/// fight.
pub fn resolve_exchange(
    team_a: &mut [Creature],
    team_b: &mut [Creature],
    active_a: CreatureId,
    active_b: CreatureId,
    mut log: impl FnMut(String),
) -> Result<ExchangeReport, EngineError> {
    let a = find(team_a, active_a)
        .cloned()
        .ok_or(EngineError::ActiveCreatureNotFound {
            side: Side::A,
            id: active_a,
        })?;
    let b = find(team_b, active_b)
        .cloned()
        .ok_or(EngineError::ActiveCreatureNotFound {
            side: Side::B,
            id: active_b,
        })?;

    let damage_to_b = damage(&a, &b);
    let damage_to_a = damage(&b, &a);
    log(format!(
        "[EXCHANGE] {} (ATK {}, DEF {}, HP {}) vs {} (ATK {}, DEF {}, HP {})",
        a.name, a.attack, a.defence, a.health, b.name, b.attack, b.defence, b.health
    ));

    apply_strike(team_a, team_b, &b, damage_to_b, &mut log);
    apply_strike(team_a, team_b, &a, damage_to_a, &mut log);

    let next_a = switch_in(Side::A, team_a, active_a, &mut log);
    let next_b = switch_in(Side::B, team_b, active_b, &mut log);

    let status = decide_status(team_a, team_b);
    if let Some(winner) = status.winner() {
        log(format!("[END] {} wins", winner));
    }

    Ok(ExchangeReport {
        fighter_a: active_a,
        fighter_b: active_b,
        damage_to_a,
        damage_to_b,
        active_a: next_a,
        active_b: next_b,
        status,
    })
}

fn find(roster: &[Creature], id: CreatureId) -> Option<&Creature> {
    roster.iter().find(|c| c.id == id)
}

/// Reduce the target's health and mirror it onto every roster slot holding
/// the same creature.
fn apply_strike(
    team_a: &mut [Creature],
    team_b: &mut [Creature],
    target: &Creature,
    dmg: u32,
    log: &mut impl FnMut(String),
) {
    let before = team_a
        .iter()
        .chain(team_b.iter())
        .find(|c| c.id == target.id)
        .map_or(target.health, |c| c.health);
    let after = before.saturating_sub(dmg);

    for slot in team_a
        .iter_mut()
        .chain(team_b.iter_mut())
        .filter(|c| c.id == target.id)
    {
        slot.health = after;
    }

    log(format!(
        "[DMG][{}] {} → {} (−{})",
        target.name, before, after, dmg
    ));
    if before > 0 && after == 0 {
        log(format!("[FAINT][{}] drops to 0 HP", target.name));
    }
}

fn switch_in(
    side: Side,
    roster: &[Creature],
    active: CreatureId,
    log: &mut impl FnMut(String),
) -> CreatureId {
    let Some(current) = find(roster, active) else {
        return active;
    };
    if current.is_healthy() {
        return active;
    }
    match first_healthy(roster) {
        Some(next) => {
            log(format!("[SWITCH][{}] {} → {}", side, current.name, next.name));
            next.id
        }
        None => {
            log(format!("[SWITCH][{}] no healthy creatures left", side));
            active
        }
    }
}
