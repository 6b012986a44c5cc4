//! Macros for declaring controller state enums.

/// Declare a state enum and generate its [`State`](crate::core::State)
/// implementation.
///
/// Variants listed under `final:` are absorbing; variants listed under
/// `transient:` fire immediately without consuming input. Everything else
/// is stable.
///
/// # Example
///
/// ```
/// use vendfsm::core::State;
/// use vendfsm::state_enum;
///
/// state_enum! {
///     pub enum Turnstile {
///         Locked,
///         Unlocking,
///         Open,
///         Broken,
///     }
///     final: [Broken]
///     transient: [Unlocking]
/// }
///
/// assert_eq!(Turnstile::ALL.len(), 4);
/// assert!(Turnstile::Unlocking.is_transient());
/// assert!(Turnstile::Open.is_stable());
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(final: [$($final:ident),* $(,)?])?
        $(transient: [$($transient:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$(Self::$variant),*];
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            #[allow(unreachable_patterns)]
            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    _ => false,
                }
            }

            #[allow(unreachable_patterns)]
            fn is_transient(&self) -> bool {
                match self {
                    $($(Self::$transient => true,)*)?
                    _ => false,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::core::State::name(self))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::State;

    state_enum! {
        enum TestState {
            Idle,
            Warming,
            Ready,
            Off,
        }
        final: [Off]
        transient: [Warming]
    }

    #[test]
    fn state_enum_macro_generates_trait() {
        assert_eq!(TestState::Idle.name(), "Idle");
        assert!(TestState::Idle.is_stable());

        assert!(TestState::Warming.is_transient());
        assert!(!TestState::Warming.is_final());

        assert!(TestState::Off.is_final());
        assert!(!TestState::Off.is_stable());
    }

    #[test]
    fn state_enum_lists_all_variants() {
        assert_eq!(
            TestState::ALL,
            &[
                TestState::Idle,
                TestState::Warming,
                TestState::Ready,
                TestState::Off
            ]
        );
    }

    #[test]
    fn state_enum_displays_name() {
        assert_eq!(TestState::Ready.to_string(), "Ready");
    }

    #[test]
    fn state_enum_works_without_final_or_transient() {
        state_enum! {
            enum MinimalState {
                One,
                Two,
            }
        }

        assert!(MinimalState::One.is_stable());
        assert!(MinimalState::Two.is_stable());
    }
}
