//! One stateless handler per power-up.

use super::{Item, PowerUp};
use crate::builder::ConfigurationError;
use crate::core::Outcome;
use crate::handler::{HandlerSet, StateHandler};
use std::sync::{Arc, OnceLock};

/// Small Mario grows with any item and shrugs off monsters.
#[derive(Clone, Copy, Debug, Default)]
pub struct SmallMario;

/// Super Mario upgrades to cape or fire and shrinks on a monster.
#[derive(Clone, Copy, Debug, Default)]
pub struct SuperMario;

#[derive(Clone, Copy, Debug, Default)]
pub struct CapeMario;

#[derive(Clone, Copy, Debug, Default)]
pub struct FireMario;

impl StateHandler<PowerUp, Item> for SmallMario {
    fn state(&self) -> PowerUp {
        PowerUp::Small
    }

    fn handle(&self, item: Item) -> Outcome<PowerUp> {
        match item {
            Item::GotMushroom => Outcome::new(PowerUp::Super, 100),
            Item::GotCape => Outcome::new(PowerUp::Cape, 200),
            Item::GotFire => Outcome::new(PowerUp::Fire, 300),
            Item::MetMonster => Outcome::stay(PowerUp::Small),
        }
    }
}

impl StateHandler<PowerUp, Item> for SuperMario {
    fn state(&self) -> PowerUp {
        PowerUp::Super
    }

    fn handle(&self, item: Item) -> Outcome<PowerUp> {
        match item {
            Item::GotMushroom => Outcome::stay(PowerUp::Super),
            Item::GotCape => Outcome::new(PowerUp::Cape, 200),
            Item::GotFire => Outcome::new(PowerUp::Fire, 300),
            Item::MetMonster => Outcome::new(PowerUp::Small, -100),
        }
    }
}

impl StateHandler<PowerUp, Item> for CapeMario {
    fn state(&self) -> PowerUp {
        PowerUp::Cape
    }

    fn handle(&self, item: Item) -> Outcome<PowerUp> {
        match item {
            Item::MetMonster => Outcome::new(PowerUp::Small, -200),
            _ => Outcome::stay(PowerUp::Cape),
        }
    }
}

impl StateHandler<PowerUp, Item> for FireMario {
    fn state(&self) -> PowerUp {
        PowerUp::Fire
    }

    fn handle(&self, item: Item) -> Outcome<PowerUp> {
        match item {
            Item::MetMonster => Outcome::new(PowerUp::Small, -300),
            _ => Outcome::stay(PowerUp::Fire),
        }
    }
}

/// Build the handler set for the four power-ups.
pub fn build_handlers() -> Result<HandlerSet<PowerUp, Item>, ConfigurationError> {
    HandlerSet::builder()
        .initial(PowerUp::Small)
        .handler(SmallMario)
        .handler(SuperMario)
        .handler(CapeMario)
        .handler(FireMario)
        .build()
}

/// Process-wide handler set, validated on first use.
///
/// # Panics
///
/// Panics with the configuration error if the built-in handler set is invalid.
pub fn handlers() -> Arc<HandlerSet<PowerUp, Item>> {
    static HANDLERS: OnceLock<Arc<HandlerSet<PowerUp, Item>>> = OnceLock::new();

    HANDLERS
        .get_or_init(|| match build_handlers() {
            Ok(handlers) => Arc::new(handlers),
            Err(err) => panic!("built-in power-up handlers are invalid: {err}"),
        })
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equivalence::divergences;
    use crate::mario::rules;

    #[test]
    fn every_power_up_has_a_handler() {
        let handlers = handlers();
        assert_eq!(handlers.len(), 4);
        assert_eq!(handlers.handler_for(PowerUp::Cape).state(), PowerUp::Cape);
    }

    #[test]
    fn handlers_agree_with_table() {
        assert!(divergences(&rules(), &handlers()).is_empty());
    }

    #[test]
    fn small_mario_upgrades() {
        assert_eq!(SmallMario.handle(Item::GotFire), Outcome::new(PowerUp::Fire, 300));
        assert_eq!(SmallMario.handle(Item::MetMonster), Outcome::stay(PowerUp::Small));
    }

    #[test]
    fn fire_mario_keeps_fire_over_cape() {
        assert_eq!(FireMario.handle(Item::GotCape), Outcome::stay(PowerUp::Fire));
    }
}
