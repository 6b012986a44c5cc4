//! The closed set of tokens the machine understands.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::category::{classify, InputCategory};

macro_rules! count {
    () => { 0usize };
    ($head:ident $($tail:ident)*) => { 1usize + count!($($tail)*) };
}

/// Declares [`InputEvent`] together with `ALL`, `COUNT`, `label` and
/// `value`, so none of them can fall out of step with the variant list.
macro_rules! input_events {
    ($($variant:ident => $label:literal, $value:expr;)+) => {
        /// A discrete input delivered to the controller.
        ///
        /// Currency tokens carry their denomination and item tokens carry their
        /// price, both in cents. Control tokens are worth nothing.
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
        pub enum InputEvent {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl InputEvent {
            pub const COUNT: usize = count!($($variant)+);

            /// Every event, ordered by discriminant.
            pub const ALL: [InputEvent; InputEvent::COUNT] = [$(InputEvent::$variant),+];

            /// Denomination or price in cents.
            pub const fn value(self) -> u32 {
                match self {
                    $(Self::$variant => $value,)+
                }
            }

            /// Upper-case token used on the display and in scripts.
            pub const fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }
    };
}

input_events! {
    Nickel => "NICKEL", 5;
    Dime => "DIME", 10;
    Quarter => "QUARTER", 25;
    Dollar => "DOLLAR", 100;
    Toothpaste => "TOOTHPASTE", 200;
    Chips => "CHIPS", 75;
    Soda => "SODA", 100;
    Soap => "SOAP", 50;
    AbortTransaction => "ABORT_TRANSACTION", 0;
    Stop => "STOP", 0;
}

impl InputEvent {
    pub fn category(self) -> InputCategory {
        classify(self)
    }

    pub fn is_currency(self) -> bool {
        self.category() == InputCategory::Money
    }

    pub fn is_item(self) -> bool {
        self.category() == InputCategory::ItemSelection
    }
}

impl fmt::Display for InputEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A token that names no [`InputEvent`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown input token '{0}'")]
pub struct UnknownToken(pub String);

impl FromStr for InputEvent {
    type Err = UnknownToken;

    /// Parses a label case-insensitively. `ABORT` is accepted as a
    /// shorthand for `ABORT_TRANSACTION`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if token.eq_ignore_ascii_case("ABORT") {
            return Ok(Self::AbortTransaction);
        }
        Self::ALL
            .into_iter()
            .find(|event| event.label().eq_ignore_ascii_case(token))
            .ok_or_else(|| UnknownToken(token.to_string()))
    }
}
