//! HeroSheet domain: the character creation form without any UI.

pub mod character_form;
pub mod error;
pub mod types;

pub use character_form::{
    compute_size, find_alignment, find_race, initialize, CharacterField, CharacterFormState,
    CharacterRecord, FormPhase, InputKind, OptionCatalogs, RaceOption, SelectOption,
    ALIGNMENT_OPTIONS, RACE_OPTIONS, SIZE_FIELD_KEY, SIZE_FIELD_LABEL,
};
pub use error::DomainError;
pub use types::{Alignment, Race, SizeCategory};
