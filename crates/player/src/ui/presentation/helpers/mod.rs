//! Pure helpers backing the presentation components

pub mod form_helpers;
