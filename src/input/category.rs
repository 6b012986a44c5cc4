//! Coarse classification of input events.
//!
//! The lookup table is a `const` built from an exhaustive `match` and sized
//! by `InputEvent::COUNT`, which is generated with the variant list. A new
//! [`InputEvent`] without a category is a compile error, and the mapping can
//! never change at runtime.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::event::InputEvent;

/// The rule selector a stable state reacts to.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum InputCategory {
    Money,
    ItemSelection,
    QuitTransaction,
    ShutDown,
}

impl InputCategory {
    pub const ALL: [InputCategory; 4] = [
        InputCategory::Money,
        InputCategory::ItemSelection,
        InputCategory::QuitTransaction,
        InputCategory::ShutDown,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Money => "MONEY",
            Self::ItemSelection => "ITEM_SELECTION",
            Self::QuitTransaction => "QUIT_TRANSACTION",
            Self::ShutDown => "SHUT_DOWN",
        }
    }

    /// Events that fall into this category.
    pub fn members(self) -> impl Iterator<Item = InputEvent> {
        InputEvent::ALL
            .into_iter()
            .filter(move |event| classify(*event) == self)
    }
}

impl fmt::Display for InputCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const fn categorize(event: InputEvent) -> InputCategory {
    match event {
        InputEvent::Nickel | InputEvent::Dime | InputEvent::Quarter | InputEvent::Dollar => {
            InputCategory::Money
        }
        InputEvent::Toothpaste | InputEvent::Chips | InputEvent::Soda | InputEvent::Soap => {
            InputCategory::ItemSelection
        }
        InputEvent::AbortTransaction => InputCategory::QuitTransaction,
        InputEvent::Stop => InputCategory::ShutDown,
    }
}

const fn build_table() -> [InputCategory; InputEvent::COUNT] {
    let mut table = [InputCategory::ShutDown; InputEvent::COUNT];
    let mut index = 0;
    while index < InputEvent::COUNT {
        let event = InputEvent::ALL[index];
        assert!(event as usize == index, "InputEvent::ALL out of order");
        table[index] = categorize(event);
        index += 1;
    }
    table
}

static CATEGORIES: [InputCategory; InputEvent::COUNT] = build_table();

/// Classify an event. Total and O(1).
pub fn classify(event: InputEvent) -> InputCategory {
    CATEGORIES[event as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_is_money() {
        for event in [
            InputEvent::Nickel,
            InputEvent::Dime,
            InputEvent::Quarter,
            InputEvent::Dollar,
        ] {
            assert_eq!(classify(event), InputCategory::Money);
        }
    }

    #[test]
    fn items_are_selections() {
        for event in [
            InputEvent::Toothpaste,
            InputEvent::Chips,
            InputEvent::Soda,
            InputEvent::Soap,
        ] {
            assert_eq!(classify(event), InputCategory::ItemSelection);
        }
    }

    #[test]
    fn control_tokens() {
        assert_eq!(
            classify(InputEvent::AbortTransaction),
            InputCategory::QuitTransaction
        );
        assert_eq!(classify(InputEvent::Stop), InputCategory::ShutDown);
    }

    #[test]
    fn table_agrees_with_match() {
        for event in InputEvent::ALL {
            assert_eq!(classify(event), categorize(event));
        }
    }

    #[test]
    fn members_partition_the_events() {
        let total: usize = InputCategory::ALL
            .iter()
            .map(|category| category.members().count())
            .sum();
        assert_eq!(total, InputEvent::COUNT);
        assert_eq!(
            InputCategory::QuitTransaction.members().collect::<Vec<_>>(),
            vec![InputEvent::AbortTransaction]
        );
    }
}
