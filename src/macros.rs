//! Macros for declaring engine state enums.

/// Declare a fieldless state enum.
///
/// Generates the enum with value-type derives, its
/// [`State`](crate::core::State) implementation, a `Display` impl that
/// prints the variant name, and an `ALL` constant listing every variant
/// in declaration order. Variants listed under `error:` report
/// `is_error() == true`.
///
/// # Example
///
/// ```
/// use tally::core::State;
/// use tally::state_enum;
///
/// state_enum! {
///     pub enum KeypadMode {
///         Standard,
///         Locked,
///     }
///     error: [Locked]
/// }
///
/// assert_eq!(KeypadMode::ALL, [KeypadMode::Standard, KeypadMode::Locked]);
/// assert_eq!(KeypadMode::Locked.to_string(), "Locked");
/// assert!(KeypadMode::Locked.is_error());
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),+ $(,)?
        }
        $(error: [$($error:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),+
                }
            }

            fn is_error(&self) -> bool {
                match self {
                    $($(Self::$error => true,)*)?
                    #[allow(unreachable_patterns)]
                    _ => false,
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::core::State::name(self))
            }
        }
    };
}
