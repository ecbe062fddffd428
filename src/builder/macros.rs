//! Macros for declaring state and event enumerations.

#[doc(hidden)]
#[macro_export]
macro_rules! __variant_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $code:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::Variant for $name {
            const VARIANTS: &'static [Self] = &[$(Self::$variant),*];

            fn code(&self) -> usize {
                match self {
                    $(Self::$variant => $code),*
                }
            }

            fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.pad($crate::core::Variant::name(self))
            }
        }
    };
}

/// Declare a state enumeration with explicit table codes.
///
/// Each variant is followed by `= code`. Codes must cover `0..n` exactly
/// once; the builders reject anything else. The enum itself carries no
/// discriminants, so table indexing never depends on declaration order.
///
/// # Example
///
/// ```
/// use statetable::core::Variant;
/// use statetable::state_enum;
///
/// state_enum! {
///     pub enum OrderStatus {
///         Placed = 0,
///         Paid = 1,
///         Shipped = 2,
///         Cancelled = 3,
///     }
/// }
///
/// assert_eq!(OrderStatus::Shipped.code(), 2);
/// assert_eq!(OrderStatus::from_name("Paid"), Some(OrderStatus::Paid));
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $code:literal
            ),* $(,)?
        }
    ) => {
        $crate::__variant_enum! {
            $(#[$meta])*
            $vis enum $name {
                $(
                    $(#[$variant_meta])*
                    $variant = $code
                ),*
            }
        }

        impl $crate::core::State for $name {}
    };
}

/// Declare an event enumeration with explicit table codes.
///
/// Same syntax as [`state_enum!`].
///
/// # Example
///
/// ```
/// use statetable::core::Variant;
/// use statetable::event_enum;
///
/// event_enum! {
///     pub enum OrderEvent {
///         Pay = 0,
///         Ship = 1,
///         Cancel = 2,
///     }
/// }
///
/// assert_eq!(OrderEvent::cardinality(), 3);
/// assert_eq!(OrderEvent::from_code(1), Some(OrderEvent::Ship));
/// ```
#[macro_export]
macro_rules! event_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $code:literal
            ),* $(,)?
        }
    ) => {
        $crate::__variant_enum! {
            $(#[$meta])*
            $vis enum $name {
                $(
                    $(#[$variant_meta])*
                    $variant = $code
                ),*
            }
        }

        impl $crate::core::Event for $name {}
    };
}
