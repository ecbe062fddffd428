//! The power-up transition and reward table.

use super::{Item, PowerUp};
use crate::builder::ConfigurationError;
use crate::table::Rules;
use std::sync::{Arc, OnceLock};

/// Build the power-up rules with every cell written out.
///
/// | state \ item | GotMushroom | GotCape    | GotFire    | MetMonster  |
/// |--------------|-------------|------------|------------|-------------|
/// | Small        | Super +100  | Cape +200  | Fire +300  | Small 0     |
/// | Super        | Super 0     | Cape +200  | Fire +300  | Small -100  |
/// | Cape         | Cape 0      | Cape 0     | Cape 0     | Small -200  |
/// | Fire         | Fire 0      | Fire 0     | Fire 0     | Small -300  |
pub fn build_rules() -> Result<Rules<PowerUp, Item>, ConfigurationError> {
    use Item::*;
    use PowerUp::*;

    Rules::builder()
        .initial(Small)
        .on(Small, GotMushroom, Super, 100)
        .on(Small, GotCape, Cape, 200)
        .on(Small, GotFire, Fire, 300)
        .stay(Small, MetMonster)
        .stay(Super, GotMushroom)
        .on(Super, GotCape, Cape, 200)
        .on(Super, GotFire, Fire, 300)
        .on(Super, MetMonster, Small, -100)
        .stay(Cape, GotMushroom)
        .stay(Cape, GotCape)
        .stay(Cape, GotFire)
        .on(Cape, MetMonster, Small, -200)
        .stay(Fire, GotMushroom)
        .stay(Fire, GotCape)
        .stay(Fire, GotFire)
        .on(Fire, MetMonster, Small, -300)
        .build()
}

/// Process-wide power-up rules, validated on first use.
///
/// # Panics
///
/// Panics with the configuration error if the built-in table is invalid.
pub fn rules() -> Arc<Rules<PowerUp, Item>> {
    static RULES: OnceLock<Arc<Rules<PowerUp, Item>>> = OnceLock::new();

    RULES
        .get_or_init(|| match build_rules() {
            Ok(rules) => Arc::new(rules),
            Err(err) => panic!("built-in power-up rules are invalid: {err}"),
        })
        .clone()
}
