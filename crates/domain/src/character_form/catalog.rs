//! Option catalogs for the alignment and race dropdowns
//!
//! Both catalogs are `'static` tables. They are never mutated, so any number
//! of form instances can borrow them without copying.

use serde::Serialize;

use crate::types::SizeCategory;

/// A (label, value) pair rendered as one `<option>` of a select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    /// Display label
    pub label: &'static str,
    /// Machine value
    pub value: &'static str,
}

/// A race option; carries the size category the race implies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RaceOption {
    pub label: &'static str,
    pub value: &'static str,
    pub size: SizeCategory,
}

/// Alignment choices in dropdown order.
pub static ALIGNMENT_OPTIONS: [SelectOption; 9] = [
    SelectOption {
        label: "Lawful Good",
        value: "lawful-good",
    },
    SelectOption {
        label: "Neutral Good",
        value: "neutral-good",
    },
    SelectOption {
        label: "Chaotic Good",
        value: "chaotic-good",
    },
    SelectOption {
        label: "Lawful Neutral",
        value: "lawful-neutral",
    },
    SelectOption {
        label: "Neutral",
        value: "neutral",
    },
    SelectOption {
        label: "Chaotic Neutral",
        value: "chaotic-neutral",
    },
    SelectOption {
        label: "Lawful Evil",
        value: "lawful-evil",
    },
    SelectOption {
        label: "Neutral Evil",
        value: "neutral-evil",
    },
    SelectOption {
        label: "Chaotic Evil",
        value: "chaotic-evil",
    },
];

/// Race choices in dropdown order.
pub static RACE_OPTIONS: [RaceOption; 4] = [
    RaceOption {
        label: "Human",
        value: "human",
        size: SizeCategory::Medium,
    },
    RaceOption {
        label: "Elf",
        value: "elf",
        size: SizeCategory::Medium,
    },
    RaceOption {
        label: "Dwarf",
        value: "dwarf",
        size: SizeCategory::Medium,
    },
    RaceOption {
        label: "Halfling",
        value: "halfling",
        size: SizeCategory::Small,
    },
];

/// Both catalogs bundled for export (e.g. as JSON to a host page).
#[derive(Debug, Clone, Copy, Serialize)]
pub struct OptionCatalogs {
    pub alignments: &'static [SelectOption],
    pub races: &'static [RaceOption],
}

impl OptionCatalogs {
    pub fn get() -> Self {
        Self {
            alignments: &ALIGNMENT_OPTIONS,
            races: &RACE_OPTIONS,
        }
    }
}

/// Look up an alignment entry by its machine value
pub fn find_alignment(value: &str) -> Option<&'static SelectOption> {
    ALIGNMENT_OPTIONS.iter().find(|option| option.value == value)
}

/// Look up a race entry by its machine value
pub fn find_race(value: &str) -> Option<&'static RaceOption> {
    RACE_OPTIONS.iter().find(|option| option.value == value)
}
