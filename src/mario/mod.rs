//! Reference instantiation: Mario's power-up machine.
//!
//! Mario starts small with a score of 0. Items grant power-ups and points;
//! meeting a monster drops him back to small and takes away the points of
//! the power he lost. The same behaviour is available in both designs:
//!
//! ```rust
//! use statetable::mario::{Mario, PowerUp};
//!
//! let mut table = Mario::table_driven();
//! let mut handlers = Mario::state_pattern();
//!
//! table.obtain_mushroom().unwrap();
//! handlers.obtain_mushroom().unwrap();
//!
//! assert_eq!(table.current_state(), PowerUp::Super);
//! assert_eq!(handlers.score(), table.score());
//! ```

mod handlers;
mod rules;

pub use handlers::{build_handlers, handlers, CapeMario, FireMario, SmallMario, SuperMario};
pub use rules::{build_rules, rules};

use crate::core::{StateHistory, Step};
use crate::machine::{Automaton, HandlerMachine, InvalidEvent, Machine};
use crate::{event_enum, state_enum};

state_enum! {
    /// Mario's power-up.
    pub enum PowerUp {
        Small = 0,
        Super = 1,
        Cape = 2,
        Fire = 3,
    }
}

event_enum! {
    /// Things Mario can run into.
    pub enum Item {
        GotMushroom = 0,
        GotCape = 1,
        GotFire = 2,
        MetMonster = 3,
    }
}

/// Mario, driven by either machine design.
#[derive(Clone, Debug)]
pub struct Mario<M> {
    machine: M,
}

impl Mario<Machine<PowerUp, Item>> {
    /// Mario backed by the shared transition table.
    pub fn table_driven() -> Self {
        Self::with_machine(Machine::new(rules()))
    }
}

impl Mario<HandlerMachine<PowerUp, Item>> {
    /// Mario backed by the per-state handlers.
    pub fn state_pattern() -> Self {
        Self::with_machine(HandlerMachine::new(handlers()))
    }
}

impl<M: Automaton<PowerUp, Item>> Mario<M> {
    pub fn with_machine(machine: M) -> Self {
        Self { machine }
    }

    pub fn obtain_mushroom(&mut self) -> Result<Step<PowerUp, Item>, InvalidEvent> {
        self.machine.apply(Item::GotMushroom)
    }

    pub fn obtain_cape(&mut self) -> Result<Step<PowerUp, Item>, InvalidEvent> {
        self.machine.apply(Item::GotCape)
    }

    pub fn obtain_fire_flower(&mut self) -> Result<Step<PowerUp, Item>, InvalidEvent> {
        self.machine.apply(Item::GotFire)
    }

    pub fn meet_monster(&mut self) -> Result<Step<PowerUp, Item>, InvalidEvent> {
        self.machine.apply(Item::MetMonster)
    }

    pub fn score(&self) -> i64 {
        self.machine.score()
    }

    pub fn current_state(&self) -> PowerUp {
        self.machine.current_state()
    }

    pub fn history(&self) -> &StateHistory<PowerUp, Item> {
        self.machine.history()
    }

    pub fn machine(&self) -> &M {
        &self.machine
    }

    pub fn machine_mut(&mut self) -> &mut M {
        &mut self.machine
    }

    pub fn into_machine(self) -> M {
        self.machine
    }
}
