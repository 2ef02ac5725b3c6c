//! Character creation form model
//!
//! - `catalog`: static option lists for the alignment and race selects
//! - `field`: the fixed set of editable fields and their controls
//! - `record`: the collected [`CharacterRecord`] and its update rules
//! - `size`: the derived, read-only size field
//! - `state`: the editing/submitted state machine

mod catalog;
mod field;
mod record;
mod size;
mod state;

pub use catalog::{
    find_alignment, find_race, OptionCatalogs, RaceOption, SelectOption, ALIGNMENT_OPTIONS,
    RACE_OPTIONS,
};
pub use field::{CharacterField, InputKind, SIZE_FIELD_KEY, SIZE_FIELD_LABEL};
pub use record::{initialize, CharacterRecord};
pub use size::compute_size;
pub use state::{CharacterFormState, FormPhase};
