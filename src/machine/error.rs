//! Errors raised while applying events.

use crate::core::{Event, State};
use thiserror::Error;

/// An event the machine could not apply.
///
/// Raised before anything is committed; the machine is left untouched.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvalidEvent {
    #[error("Unknown event code {code}: the domain declares {cardinality} events")]
    UnknownCode { code: usize, cardinality: usize },

    #[error("Unknown event name '{name}'")]
    UnknownName { name: String },

    #[error("Event '{name}' reports code {code} outside its domain of {cardinality} events")]
    OutOfDomain {
        name: String,
        code: usize,
        cardinality: usize,
    },

    #[error("Handler for '{event}' moved to state '{state}' with code {code} outside its domain")]
    TargetOutOfDomain {
        event: String,
        state: String,
        code: usize,
    },

    #[error("Applying '{event}' overflows the score: {score} + {delta}")]
    ScoreOverflow { event: String, score: i64, delta: i64 },
}

/// Check that a typed event indexes inside its own domain.
pub(crate) fn check_event<E: Event>(event: &E) -> Result<(), InvalidEvent> {
    let cardinality = E::cardinality();
    if event.code() < cardinality && E::VARIANTS.contains(event) {
        Ok(())
    } else {
        tracing::warn!(
            event = event.name(),
            code = event.code(),
            cardinality,
            "event code outside its domain"
        );
        Err(InvalidEvent::OutOfDomain {
            name: event.name().to_string(),
            code: event.code(),
            cardinality,
        })
    }
}

/// Check that a handler's next state belongs to its enumeration.
pub(crate) fn check_target<S: State, E: Event>(event: &E, next: &S) -> Result<(), InvalidEvent> {
    if next.code() < S::cardinality() && S::VARIANTS.contains(next) {
        Ok(())
    } else {
        tracing::warn!(
            event = event.name(),
            state = next.name(),
            code = next.code(),
            "handler returned a state outside its domain"
        );
        Err(InvalidEvent::TargetOutOfDomain {
            event: event.name().to_string(),
            state: next.name().to_string(),
            code: next.code(),
        })
    }
}

/// Resolve a raw event code.
pub(crate) fn resolve_code<E: Event>(code: usize) -> Result<E, InvalidEvent> {
    E::from_code(code).ok_or(InvalidEvent::UnknownCode {
        code,
        cardinality: E::cardinality(),
    })
}

/// Resolve an event name.
pub(crate) fn resolve_name<E: Event>(name: &str) -> Result<E, InvalidEvent> {
    E::from_name(name).ok_or_else(|| InvalidEvent::UnknownName {
        name: name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Variant;
    use crate::{event_enum, state_enum};
    use serde::{Deserialize, Serialize};

    event_enum! {
        enum Knock {
            Once = 0,
            Twice = 1,
        }
    }

    /// Event whose code lies about its domain.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum Rogue {
        Honest,
        Liar,
    }

    impl Variant for Rogue {
        const VARIANTS: &'static [Self] = &[Self::Honest, Self::Liar];

        fn code(&self) -> usize {
            match self {
                Self::Honest => 0,
                Self::Liar => 9,
            }
        }

        fn name(&self) -> &'static str {
            match self {
                Self::Honest => "Honest",
                Self::Liar => "Liar",
            }
        }
    }

    impl Event for Rogue {}

    state_enum! {
        enum Door {
            Shut = 0,
            Ajar = 1,
        }
    }

    /// State with a variant missing from its own list.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum Leaky {
        Listed,
        Hidden,
    }

    impl Variant for Leaky {
        const VARIANTS: &'static [Self] = &[Self::Listed];

        fn code(&self) -> usize {
            match self {
                Self::Listed => 0,
                Self::Hidden => 7,
            }
        }

        fn name(&self) -> &'static str {
            match self {
                Self::Listed => "Listed",
                Self::Hidden => "Hidden",
            }
        }
    }

    impl State for Leaky {}

    #[test]
    fn check_target_accepts_listed_states() {
        assert!(check_target(&Knock::Once, &Door::Ajar).is_ok());
        assert!(check_target(&Knock::Once, &Leaky::Listed).is_ok());
    }

    #[test]
    fn check_target_rejects_unlisted_state() {
        assert_eq!(
            check_target(&Knock::Twice, &Leaky::Hidden),
            Err(InvalidEvent::TargetOutOfDomain {
                event: "Twice".to_string(),
                state: "Hidden".to_string(),
                code: 7,
            })
        );
    }

    #[test]
    fn overflow_message_names_the_event() {
        let error = InvalidEvent::ScoreOverflow {
            event: "Coin".to_string(),
            score: i64::MAX,
            delta: 1,
        };
        assert_eq!(
            error.to_string(),
            format!("Applying 'Coin' overflows the score: {} + 1", i64::MAX)
        );
    }

    #[test]
    fn resolve_code_rejects_unknown() {
        assert_eq!(resolve_code::<Knock>(1), Ok(Knock::Twice));
        assert_eq!(
            resolve_code::<Knock>(2),
            Err(InvalidEvent::UnknownCode {
                code: 2,
                cardinality: 2,
            })
        );
    }

    #[test]
    fn resolve_name_rejects_unknown() {
        assert_eq!(resolve_name::<Knock>("Once"), Ok(Knock::Once));
        assert_eq!(
            resolve_name::<Knock>("Thrice"),
            Err(InvalidEvent::UnknownName {
                name: "Thrice".to_string(),
            })
        );
    }

    #[test]
    fn check_event_catches_out_of_domain_code() {
        assert!(check_event(&Rogue::Honest).is_ok());
        assert_eq!(
            check_event(&Rogue::Liar),
            Err(InvalidEvent::OutOfDomain {
                name: "Liar".to_string(),
                code: 9,
                cardinality: 2,
            })
        );
    }

    #[test]
    fn messages_name_the_event() {
        let error = InvalidEvent::UnknownName {
            name: "Jump".to_string(),
        };
        assert_eq!(error.to_string(), "Unknown event name 'Jump'");
    }
}
