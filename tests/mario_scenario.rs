//! End-to-end scenarios for the built-in power-up machine.

use statetable::builder::compile_handlers;
use statetable::core::Variant;
use statetable::machine::{Automaton, InvalidEvent, Machine, MachineConfig};
use statetable::mario::{self, Item, Mario, PowerUp};

#[test]
fn mushroom_monster_fire_cape_monster() {
    let mut mario = Mario::table_driven();

    let step = mario.obtain_mushroom().unwrap();
    assert_eq!((step.to, step.score), (PowerUp::Super, 100));

    let step = mario.meet_monster().unwrap();
    assert_eq!((step.to, step.score), (PowerUp::Small, 0));

    let step = mario.obtain_fire_flower().unwrap();
    assert_eq!((step.to, step.score), (PowerUp::Fire, 300));

    let step = mario.obtain_cape().unwrap();
    assert_eq!((step.to, step.score), (PowerUp::Fire, 300));
    assert!(step.is_self_loop());

    let step = mario.meet_monster().unwrap();
    assert_eq!((step.to, step.score), (PowerUp::Small, 0));

    assert_eq!(
        mario.history().get_path(),
        vec![
            &PowerUp::Small,
            &PowerUp::Super,
            &PowerUp::Small,
            &PowerUp::Fire,
            &PowerUp::Fire,
            &PowerUp::Small,
        ]
    );
}

#[test]
fn state_pattern_runs_same_scenario() {
    let mut mario = Mario::state_pattern();

    let steps = mario
        .machine_mut()
        .run([
            Item::GotMushroom,
            Item::MetMonster,
            Item::GotFire,
            Item::GotCape,
            Item::MetMonster,
        ])
        .unwrap();

    let scores: Vec<i64> = steps.iter().map(|step| step.score).collect();
    assert_eq!(scores, vec![100, 0, 300, 300, 0]);
    assert_eq!(mario.current_state(), PowerUp::Small);
}

#[test]
fn upgrade_from_super_to_cape() {
    let mut mario = Mario::table_driven();
    mario.obtain_mushroom().unwrap();
    mario.obtain_cape().unwrap();

    assert_eq!(mario.current_state(), PowerUp::Cape);
    assert_eq!(mario.score(), 300);

    mario.meet_monster().unwrap();
    assert_eq!(mario.score(), 100);
}

#[test]
fn raw_input_is_validated_before_lookup() {
    let mut mario = Mario::table_driven();
    mario.obtain_cape().unwrap();

    let by_code = mario.machine_mut().apply_code(Item::cardinality());
    let by_name = mario.machine_mut().apply_named("GotStar");

    assert!(matches!(by_code, Err(InvalidEvent::UnknownCode { code: 4, .. })));
    assert!(matches!(by_name, Err(InvalidEvent::UnknownName { .. })));
    assert_eq!(mario.current_state(), PowerUp::Cape);
    assert_eq!(mario.score(), 200);
    assert_eq!(mario.history().len(), 1);

    let step = mario.machine_mut().apply_named("MetMonster").unwrap();
    assert_eq!(step.to, PowerUp::Small);
}

#[test]
fn available_events_are_in_code_order() {
    let mario = Mario::table_driven();
    let codes: Vec<usize> = mario
        .machine()
        .available_events()
        .iter()
        .map(|event| event.code())
        .collect();

    assert_eq!(codes, vec![0, 1, 2, 3]);
}

#[test]
fn handlers_compile_to_the_reference_table() {
    let compiled = compile_handlers(&mario::handlers()).unwrap();
    assert_eq!(compiled, *mario::rules());
}

#[test]
fn reset_returns_to_small_with_zero_score() {
    let mut mario = Mario::state_pattern();
    mario.obtain_fire_flower().unwrap();

    mario.machine_mut().reset();

    assert_eq!(mario.current_state(), PowerUp::Small);
    assert_eq!(mario.score(), 0);
    assert!(mario.history().is_empty());
}

#[test]
fn history_can_be_disabled() {
    let machine = Machine::with_config(mario::rules(), MachineConfig::without_history());
    let mut mario = Mario::with_machine(machine);

    mario.obtain_mushroom().unwrap();

    assert!(mario.history().is_empty());
    assert_eq!(mario.score(), 100);
}
