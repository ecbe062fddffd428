//! Mario Power-Up Machine
//!
//! This demo drives the built-in power-up machine in both designs.
//!
//! Key concepts:
//! - Table-driven machine with shared, validated rules
//! - State-pattern machine with one stateless handler per power-up
//! - Cell-by-cell equivalence between the two
//! - Score deltas committed together with the next state
//!
//! Run with: RUST_LOG=debug cargo run --example mario

use statetable::equivalence::divergences;
use statetable::machine::{Automaton, InvalidEvent};
use statetable::mario::{self, Item, Mario, PowerUp};
use tracing_subscriber::EnvFilter;

fn print_step<M: Automaton<PowerUp, Item>>(label: &str, mario: &Mario<M>) {
    println!(
        "  {:<20} -> {:<6} score {:>4}",
        label,
        mario.current_state(),
        mario.score()
    );
}

fn main() -> Result<(), InvalidEvent> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Mario Power-Up Machine ===\n");

    println!("Table-driven:");
    let mut table = Mario::table_driven();
    print_step("start", &table);
    table.obtain_mushroom()?;
    print_step("obtain mushroom", &table);
    table.meet_monster()?;
    print_step("meet monster", &table);
    table.obtain_fire_flower()?;
    print_step("obtain fire flower", &table);
    table.obtain_cape()?;
    print_step("obtain cape", &table);
    table.meet_monster()?;
    print_step("meet monster", &table);

    println!("\nState pattern, same events:");
    let mut handlers = Mario::state_pattern();
    let steps = handlers.machine_mut().run([
        Item::GotMushroom,
        Item::MetMonster,
        Item::GotFire,
        Item::GotCape,
        Item::MetMonster,
    ])?;
    for step in &steps {
        println!(
            "  {:<6} --{:<11}--> {:<6} {:>+5}  score {:>4}",
            step.from, step.event, step.to, step.delta, step.score
        );
    }

    println!("\nPath: {:?}", handlers.history().get_path());
    println!(
        "Both designs end in {} with score {}",
        handlers.current_state(),
        handlers.score()
    );

    let differences = divergences(&mario::rules(), &mario::handlers());
    println!("Divergent cells between table and handlers: {}", differences.len());

    println!("\nRaw input from outside the type system:");
    match table.machine_mut().apply_named("GotStar") {
        Ok(step) => println!("  unexpected step: {:?}", step),
        Err(err) => println!("  rejected: {}", err),
    }
    print_step("after rejection", &table);

    println!("\n=== Demo Complete ===");
    Ok(())
}
