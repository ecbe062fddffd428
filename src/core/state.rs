//! State and Event traits.
//!
//! Both are enumerations with stable codes (see [`Variant`]). They are
//! serializable so that recorded histories can be exported.

use super::variant::Variant;
use serde::{Deserialize, Serialize};

/// Trait for state machine states.
///
/// States are immutable values drawn from a fixed enumeration. A machine's
/// current state is always one of [`Variant::VARIANTS`].
///
/// # Required Traits
///
/// - [`Variant`]: a fixed enumeration with dense codes, used for table indexing
/// - `Serialize` + `Deserialize`: for exporting transition histories
///
/// # Example
///
/// ```rust
/// use statetable::core::{State, Variant};
/// use statetable::state_enum;
///
/// state_enum! {
///     pub enum DoorState {
///         Closed = 0,
///         Open = 1,
///         Locked = 2,
///     }
/// }
///
/// fn describe<S: State>(state: S) -> String {
///     format!("{} (#{})", state.name(), state.code())
/// }
///
/// assert_eq!(describe(DoorState::Locked), "Locked (#2)");
/// ```
pub trait State: Variant + Serialize + for<'de> Deserialize<'de> {}

/// Trait for events that drive transitions.
///
/// Events are drawn from a fixed enumeration, indexed the same way as
/// states.
///
/// # Example
///
/// ```rust
/// use statetable::core::{Event, Variant};
/// use statetable::event_enum;
///
/// event_enum! {
///     pub enum DoorEvent {
///         Push = 0,
///         Pull = 1,
///     }
/// }
///
/// fn codes<E: Event>() -> Vec<usize> {
///     E::by_code().iter().map(|e| e.code()).collect()
/// }
///
/// assert_eq!(codes::<DoorEvent>(), vec![0, 1]);
/// ```
pub trait Event: Variant + Serialize + for<'de> Deserialize<'de> {}
