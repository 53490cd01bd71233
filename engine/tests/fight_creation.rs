mod common;

use common::Arena;
use fighter_engine::{CreatureId, EngineError, FightStatus, Side};

#[test]
fn first_healthy_creature_of_each_roster_becomes_active() {
    let arena = Arena::new();
    let fainted = arena.put("Fainted", 5, 5, 0);
    let ready = arena.put("Ready", 5, 5, 10);
    let foe = arena.put("Foe", 5, 5, 10);

    let fight = arena
        .service
        .create_fight(&[fainted.id, ready.id], &[foe.id])
        .unwrap();

    assert_eq!(fight.active_monster_a, ready.id);
    assert_eq!(fight.active_monster_b, foe.id);
    assert_eq!(fight.status, FightStatus::Ongoing);
    assert_eq!(fight.team_a, vec![fainted.id, ready.id]);
}

#[test]
fn empty_team_is_invalid() {
    let arena = Arena::new();
    let foe = arena.put("Foe", 5, 5, 10);

    assert_eq!(
        arena.service.create_fight(&[], &[foe.id]),
        Err(EngineError::InvalidTeam { side: Side::A })
    );
    assert_eq!(
        arena.service.create_fight(&[foe.id], &[]),
        Err(EngineError::InvalidTeam { side: Side::B })
    );
    assert_eq!(arena.writes(), (0, 0));
}

#[test]
fn unknown_creature_id_fails() {
    let arena = Arena::new();
    let foe = arena.put("Foe", 5, 5, 10);
    let ghost = CreatureId::new();

    assert_eq!(
        arena.service.create_fight(&[foe.id], &[ghost]),
        Err(EngineError::CreatureNotFound(ghost))
    );
    assert_eq!(arena.writes(), (0, 0));
}

#[test]
fn team_without_healthy_creatures_fails() {
    let arena = Arena::new();
    let dead = arena.put("Dead", 5, 5, 0);
    let alive = arena.put("Alive", 5, 5, 10);

    assert_eq!(
        arena.service.create_fight(&[dead.id], &[alive.id]),
        Err(EngineError::NoHealthyCreatures { side: Side::A })
    );
    assert_eq!(
        arena.service.create_fight(&[alive.id], &[dead.id]),
        Err(EngineError::NoHealthyCreatures { side: Side::B })
    );
    assert_eq!(arena.writes(), (0, 0));
}

#[test]
fn team_a_is_validated_before_team_b() {
    let arena = Arena::new();
    let dead = arena.put("Dead", 5, 5, 0);
    assert_eq!(
        arena.service.create_fight(&[dead.id], &[dead.id]),
        Err(EngineError::NoHealthyCreatures { side: Side::A })
    );
}

#[test]
fn creation_does_not_touch_creatures() {
    let arena = Arena::new();
    let a = arena.put("A", 5, 5, 10);
    let b = arena.put("B", 5, 5, 10);
    arena.service.create_fight(&[a.id], &[b.id]).unwrap();
    assert_eq!(arena.writes(), (0, 1));
    assert_eq!(arena.health(a.id), 10);
}
