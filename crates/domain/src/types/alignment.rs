//! Character alignment
//!
//! The classic two-axis alignment grid (law/chaos by good/evil). The machine
//! value of each variant is the kebab-case string used by form controls and
//! in serialized records, e.g. `"lawful-good"`.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the nine alignments a character can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Alignment {
    LawfulGood,
    NeutralGood,
    ChaoticGood,
    LawfulNeutral,
    /// True neutral
    Neutral,
    ChaoticNeutral,
    LawfulEvil,
    NeutralEvil,
    ChaoticEvil,
}

impl Alignment {
    /// All alignments in dropdown order (good row first, evil row last)
    pub fn all() -> &'static [Alignment] {
        &[
            Alignment::LawfulGood,
            Alignment::NeutralGood,
            Alignment::ChaoticGood,
            Alignment::LawfulNeutral,
            Alignment::Neutral,
            Alignment::ChaoticNeutral,
            Alignment::LawfulEvil,
            Alignment::NeutralEvil,
            Alignment::ChaoticEvil,
        ]
    }

    /// Machine value used by form controls
    pub fn value(&self) -> &'static str {
        match self {
            Alignment::LawfulGood => "lawful-good",
            Alignment::NeutralGood => "neutral-good",
            Alignment::ChaoticGood => "chaotic-good",
            Alignment::LawfulNeutral => "lawful-neutral",
            Alignment::Neutral => "neutral",
            Alignment::ChaoticNeutral => "chaotic-neutral",
            Alignment::LawfulEvil => "lawful-evil",
            Alignment::NeutralEvil => "neutral-evil",
            Alignment::ChaoticEvil => "chaotic-evil",
        }
    }

    /// Get a display name for the alignment
    pub fn display_name(&self) -> &'static str {
        match self {
            Alignment::LawfulGood => "Lawful Good",
            Alignment::NeutralGood => "Neutral Good",
            Alignment::ChaoticGood => "Chaotic Good",
            Alignment::LawfulNeutral => "Lawful Neutral",
            Alignment::Neutral => "Neutral",
            Alignment::ChaoticNeutral => "Chaotic Neutral",
            Alignment::LawfulEvil => "Lawful Evil",
            Alignment::NeutralEvil => "Neutral Evil",
            Alignment::ChaoticEvil => "Chaotic Evil",
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl FromStr for Alignment {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Alignment::all()
            .iter()
            .copied()
            .find(|alignment| alignment.value() == s)
            .ok_or_else(|| {
                DomainError::parse(format!(
                    "Unknown alignment: '{}'. Valid values: lawful-good, neutral-good, \
                    chaotic-good, lawful-neutral, neutral, chaotic-neutral, lawful-evil, \
                    neutral-evil, chaotic-evil",
                    s
                ))
            })
    }
}
