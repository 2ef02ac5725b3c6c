//! Common reusable UI components.
//!
//! Shared form controls and layout primitives.

mod form_field;
pub use form_field::FormField;
