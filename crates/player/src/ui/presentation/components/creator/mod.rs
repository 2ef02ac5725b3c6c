//! Creator components - forms for building new characters

mod character_form;
pub use character_form::CharacterForm;
