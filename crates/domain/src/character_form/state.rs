//! Form state machine
//!
//! A [`CharacterFormState`] is an immutable snapshot: every accepted field
//! update and every submission yields a new value, the old one stays valid.
//!
//! ```text
//!            update_field            submit
//!  Editing ───────────────▶ Editing ───────▶ Submitted
//!     ▲                                         │
//!     └─────────────── update_field ────────────┘
//! ```

use super::field::CharacterField;
use super::record::{initialize, CharacterRecord};
use crate::error::DomainError;
use crate::types::SizeCategory;

/// Lifecycle phase of a form instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Editing,
    /// Record was handed to the submit callback
    Submitted,
}

/// Snapshot of one form instance
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CharacterFormState {
    record: CharacterRecord,
    phase: FormPhase,
}

impl CharacterFormState {
    /// A form in the `Editing` phase holding the default record
    pub fn new() -> Self {
        Self {
            record: initialize(),
            phase: FormPhase::Editing,
        }
    }

    pub fn record(&self) -> &CharacterRecord {
        &self.record
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Derived size for the current race
    pub fn size(&self) -> SizeCategory {
        self.record.size()
    }

    /// Apply one control change, returning the next snapshot.
    ///
    /// # Errors
    ///
    /// Propagates coercion failures from [`CharacterRecord::with_field`]; the
    /// caller keeps its current snapshot in that case.
    pub fn update_field(&self, field: CharacterField, raw: &str) -> Result<Self, DomainError> {
        Ok(Self {
            record: self.record.with_field(field, raw)?,
            phase: FormPhase::Editing,
        })
    }

    /// Apply one control change addressed by control name
    pub fn update_field_named(&self, key: &str, raw: &str) -> Result<Self, DomainError> {
        let field: CharacterField = key.parse()?;
        self.update_field(field, raw)
    }

    /// Hand the current record to `on_submit` exactly once and move to
    /// `Submitted`. There is no validation gate.
    pub fn submit<F>(&self, on_submit: F) -> Self
    where
        F: FnOnce(CharacterRecord),
    {
        on_submit(self.record.clone());
        Self {
            record: self.record.clone(),
            phase: FormPhase::Submitted,
        }
    }
}
