//! Order Status Machine
//!
//! This demo wires up a custom machine from scratch.
//!
//! Key concepts:
//! - Declaring states and events with explicit codes
//! - Building rules with an explicit self-loop policy
//! - Seeing every configuration problem reported at once
//! - Sharing one rule set between many orders
//!
//! Run with: RUST_LOG=debug cargo run --example order_status

use statetable::machine::{Automaton, Machine, MachineConfig};
use statetable::table::Rules;
use statetable::{event_enum, state_enum};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

state_enum! {
    enum OrderStatus {
        Placed = 0,
        Paid = 1,
        Shipped = 2,
        Delivered = 3,
        Cancelled = 4,
    }
}

event_enum! {
    enum OrderEvent {
        Pay = 0,
        Ship = 1,
        Deliver = 2,
        Cancel = 3,
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Order Status Machine ===\n");

    // A definition with gaps and no self-loop policy is rejected as a whole
    let incomplete = Rules::builder()
        .initial(OrderStatus::Placed)
        .on(OrderStatus::Placed, OrderEvent::Pay, OrderStatus::Paid, 0)
        .transition(OrderStatus::Paid, OrderEvent::Ship, OrderStatus::Shipped)
        .build();

    match incomplete {
        Ok(_) => println!("Unexpectedly accepted an incomplete table"),
        Err(err) => {
            println!("Incomplete table rejected with {} problems", err.violations().len());
            for violation in err.violations().iter().take(3) {
                println!("  - {}", violation);
            }
            println!("  ...\n");
        }
    }

    // Score counts revenue in cents; anything unspecified is a no-op
    let rules = Arc::new(
        Rules::builder()
            .initial(OrderStatus::Placed)
            .on(OrderStatus::Placed, OrderEvent::Pay, OrderStatus::Paid, 4_999)
            .on(OrderStatus::Placed, OrderEvent::Cancel, OrderStatus::Cancelled, 0)
            .on(OrderStatus::Paid, OrderEvent::Ship, OrderStatus::Shipped, 0)
            .on(OrderStatus::Paid, OrderEvent::Cancel, OrderStatus::Cancelled, -4_999)
            .on(OrderStatus::Shipped, OrderEvent::Deliver, OrderStatus::Delivered, 0)
            .absorb_unspecified()
            .build()
            .expect("order rules are complete"),
    );

    println!("Rules built: {} cells", rules.cells().count());

    let mut fulfilled = Machine::new(Arc::clone(&rules));
    let mut refunded = Machine::with_config(Arc::clone(&rules), MachineConfig::default().with_history_limit(2));

    fulfilled
        .run([OrderEvent::Pay, OrderEvent::Ship, OrderEvent::Deliver, OrderEvent::Cancel])
        .expect("typed events are always valid");
    refunded
        .run([OrderEvent::Pay, OrderEvent::Cancel, OrderEvent::Ship])
        .expect("typed events are always valid");

    println!("\nOrder 1: {} (revenue {})", fulfilled.current_state(), fulfilled.score());
    for transition in fulfilled.history().transitions() {
        println!("  {} --{}--> {}", transition.from, transition.event, transition.to);
    }

    println!("\nOrder 2: {} (revenue {})", refunded.current_state(), refunded.score());
    println!("  kept the last {} of 3 transitions", refunded.history().len());

    println!("\nAccepted events: {:?}", fulfilled.available_events());

    println!("\n=== Demo Complete ===");
}
