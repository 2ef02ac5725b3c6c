//! Playable races and the size category each one implies

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Size category shown in the read-only "Size" field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SizeCategory {
    Small,
    #[default]
    Medium,
}

impl SizeCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            SizeCategory::Small => "Small",
            SizeCategory::Medium => "Medium",
        }
    }
}

impl fmt::Display for SizeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Playable race
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Race {
    #[default]
    Human,
    Elf,
    Dwarf,
    Halfling,
}

impl Race {
    /// All races in dropdown order
    pub fn all() -> &'static [Race] {
        &[Race::Human, Race::Elf, Race::Dwarf, Race::Halfling]
    }

    /// Machine value used by form controls
    pub fn value(&self) -> &'static str {
        match self {
            Race::Human => "human",
            Race::Elf => "elf",
            Race::Dwarf => "dwarf",
            Race::Halfling => "halfling",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Race::Human => "Human",
            Race::Elf => "Elf",
            Race::Dwarf => "Dwarf",
            Race::Halfling => "Halfling",
        }
    }

    /// Size category implied by the race
    pub fn size(&self) -> SizeCategory {
        match self {
            Race::Halfling => SizeCategory::Small,
            Race::Human | Race::Elf | Race::Dwarf => SizeCategory::Medium,
        }
    }
}

impl fmt::Display for Race {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl FromStr for Race {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "human" => Ok(Race::Human),
            "elf" => Ok(Race::Elf),
            "dwarf" => Ok(Race::Dwarf),
            "halfling" => Ok(Race::Halfling),
            _ => Err(DomainError::parse(format!(
                "Unknown race: '{}'. Valid values: human, elf, dwarf, halfling",
                s
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_race_default_is_human() {
        assert_eq!(Race::default(), Race::Human);
    }

    #[test]
    fn test_race_parse() {
        assert_eq!("elf".parse::<Race>().unwrap(), Race::Elf);
        assert_eq!("halfling".parse::<Race>().unwrap(), Race::Halfling);
        assert!("gnome".parse::<Race>().is_err());
    }

    #[test]
    fn test_race_parse_is_exact() {
        // Same matching as compute_size, so parse and size never disagree
        for raw in ["Halfling", "HALFLING", " halfling", "halfling "] {
            assert!(raw.parse::<Race>().is_err(), "{raw:?}");
        }
    }

    #[test]
    fn test_race_size() {
        assert_eq!(Race::Halfling.size(), SizeCategory::Small);
        assert_eq!(Race::Human.size(), SizeCategory::Medium);
        assert_eq!(Race::Elf.size(), SizeCategory::Medium);
        assert_eq!(Race::Dwarf.size(), SizeCategory::Medium);
    }

    #[test]
    fn test_size_display() {
        assert_eq!(SizeCategory::Small.to_string(), "Small");
        assert_eq!(SizeCategory::Medium.to_string(), "Medium");
    }

    #[test]
    fn test_race_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Race::Dwarf).unwrap(), "\"dwarf\"");
        let race: Race = serde_json::from_str("\"halfling\"").unwrap();
        assert_eq!(race, Race::Halfling);
    }
}
