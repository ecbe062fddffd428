//! Enumerated variants with stable codes.
//!
//! Tables are indexed by a small integer *code* that each variant declares
//! explicitly. Codes never come from declaration order, so reordering an
//! enum cannot silently reshuffle a table.

use std::fmt::Debug;
use std::hash::Hash;

/// A member of a small, fixed enumeration.
///
/// Implementations must list every value in [`Variant::VARIANTS`] and give
/// each one a distinct code in `0..VARIANTS.len()`. The rules builder checks
/// both properties before any table is built, so a bad implementation is a
/// configuration error rather than a lookup fault.
///
/// Most implementations come from [`state_enum!`](crate::state_enum) or
/// [`event_enum!`](crate::event_enum).
///
/// # Example
///
/// ```rust
/// use statetable::core::Variant;
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// enum Signal {
///     Stop,
///     Go,
/// }
///
/// impl Variant for Signal {
///     const VARIANTS: &'static [Self] = &[Self::Stop, Self::Go];
///
///     fn code(&self) -> usize {
///         match self {
///             Self::Stop => 0,
///             Self::Go => 1,
///         }
///     }
///
///     fn name(&self) -> &'static str {
///         match self {
///             Self::Stop => "Stop",
///             Self::Go => "Go",
///         }
///     }
/// }
///
/// assert_eq!(Signal::cardinality(), 2);
/// assert_eq!(Signal::from_code(1), Some(Signal::Go));
/// assert_eq!(Signal::from_name("Stop"), Some(Signal::Stop));
/// assert_eq!(Signal::from_code(2), None);
/// ```
pub trait Variant: Copy + Eq + Hash + Debug + Send + Sync + 'static {
    /// Every value of the enumeration.
    const VARIANTS: &'static [Self];

    /// Dense table index for this value.
    fn code(&self) -> usize;

    /// Stable name for display and lookup.
    fn name(&self) -> &'static str;

    /// Number of values in the enumeration.
    fn cardinality() -> usize {
        Self::VARIANTS.len()
    }

    /// Resolve a raw code back into a value.
    fn from_code(code: usize) -> Option<Self> {
        Self::VARIANTS.iter().copied().find(|v| v.code() == code)
    }

    /// Resolve a name back into a value. Matching is exact.
    fn from_name(name: &str) -> Option<Self> {
        Self::VARIANTS.iter().copied().find(|v| v.name() == name)
    }

    /// All values ordered by code.
    fn by_code() -> Vec<Self> {
        let mut values = Self::VARIANTS.to_vec();
        values.sort_by_key(|v| v.code());
        values
    }
}
