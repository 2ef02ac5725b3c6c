//! Derived size field

use crate::types::SizeCategory;

/// Size category for a raw race value.
///
/// Only `"halfling"` is small; every other value, recognized or not, falls
/// back to [`SizeCategory::Medium`].
pub fn compute_size(race: &str) -> SizeCategory {
    if race == "halfling" {
        SizeCategory::Small
    } else {
        SizeCategory::Medium
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Race;

    #[test]
    fn halfling_is_small() {
        assert_eq!(compute_size("halfling"), SizeCategory::Small);
    }

    #[test]
    fn other_catalog_races_are_medium() {
        for race in ["human", "elf", "dwarf"] {
            assert_eq!(compute_size(race), SizeCategory::Medium, "race {race}");
        }
    }

    #[test]
    fn unrecognized_values_fall_back_to_medium() {
        for race in ["", "gnome", "Halfling", " halfling", "HALFLING", "half-orc"] {
            assert_eq!(compute_size(race), SizeCategory::Medium, "race {race:?}");
        }
    }

    #[test]
    fn agrees_with_race_size() {
        for race in Race::all() {
            assert_eq!(compute_size(race.value()), race.size());
        }
    }
}
