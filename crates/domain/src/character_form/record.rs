//! The record collected by the character form

use serde::{Deserialize, Serialize};

use super::field::CharacterField;
use super::size::compute_size;
use crate::error::DomainError;
use crate::types::{Alignment, Race, SizeCategory};

/// Basic identity attributes of a new character.
///
/// Serializes with camelCase keys, so the JSON shape matches the control
/// names (`playerName`, `charLevel`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterRecord {
    pub name: String,
    /// `None` until the player picks one
    pub alignment: Option<Alignment>,
    pub player_name: String,
    /// Number fields are `None` while their control is empty
    pub char_level: Option<f64>,
    pub deity: String,
    pub homeland: String,
    pub campaign: String,
    pub race: Race,
    pub gender: String,
    pub age: Option<f64>,
    pub height: Option<f64>,
    pub hair: String,
    pub eyes: String,
}

impl Default for CharacterRecord {
    fn default() -> Self {
        Self {
            name: String::new(),
            alignment: None,
            player_name: String::new(),
            char_level: Some(1.0),
            deity: String::new(),
            homeland: String::new(),
            campaign: String::new(),
            race: Race::Human,
            gender: String::new(),
            age: Some(0.0),
            height: Some(0.0),
            hair: String::new(),
            eyes: String::new(),
        }
    }
}

/// A fresh record populated with the form defaults
pub fn initialize() -> CharacterRecord {
    CharacterRecord::default()
}

impl CharacterRecord {
    /// Returns a copy of this record with one field replaced by `raw`.
    ///
    /// Text fields store `raw` verbatim. Number fields parse it as any finite
    /// number a number control can hold (`-1`, `5.5`, `1e3`); blank input
    /// empties the field. Select fields take the exact machine value; a blank
    /// alignment clears the selection.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidNumber` or `DomainError::Parse` when `raw`
    /// cannot be coerced. `self` is never modified.
    pub fn with_field(&self, field: CharacterField, raw: &str) -> Result<Self, DomainError> {
        let mut next = self.clone();
        match field {
            CharacterField::Name => next.name = raw.to_string(),
            CharacterField::Alignment => next.alignment = parse_alignment(raw)?,
            CharacterField::PlayerName => next.player_name = raw.to_string(),
            CharacterField::CharLevel => next.char_level = parse_number(field, raw)?,
            CharacterField::Deity => next.deity = raw.to_string(),
            CharacterField::Homeland => next.homeland = raw.to_string(),
            CharacterField::Campaign => next.campaign = raw.to_string(),
            CharacterField::Race => next.race = raw.parse()?,
            CharacterField::Gender => next.gender = raw.to_string(),
            CharacterField::Age => next.age = parse_number(field, raw)?,
            CharacterField::Height => next.height = parse_number(field, raw)?,
            CharacterField::Hair => next.hair = raw.to_string(),
            CharacterField::Eyes => next.eyes = raw.to_string(),
        }
        Ok(next)
    }

    /// Like [`with_field`](Self::with_field), addressing the field by its control name.
    pub fn with_field_named(&self, key: &str, raw: &str) -> Result<Self, DomainError> {
        let field: CharacterField = key.parse()?;
        self.with_field(field, raw)
    }

    /// Current value of a field as the string its control displays
    pub fn field_value(&self, field: CharacterField) -> String {
        match field {
            CharacterField::Name => self.name.clone(),
            CharacterField::Alignment => self
                .alignment
                .map(|alignment| alignment.value().to_string())
                .unwrap_or_default(),
            CharacterField::PlayerName => self.player_name.clone(),
            CharacterField::CharLevel => format_number(self.char_level),
            CharacterField::Deity => self.deity.clone(),
            CharacterField::Homeland => self.homeland.clone(),
            CharacterField::Campaign => self.campaign.clone(),
            CharacterField::Race => self.race.value().to_string(),
            CharacterField::Gender => self.gender.clone(),
            CharacterField::Age => format_number(self.age),
            CharacterField::Height => format_number(self.height),
            CharacterField::Hair => self.hair.clone(),
            CharacterField::Eyes => self.eyes.clone(),
        }
    }

    /// Size derived from the current race
    pub fn size(&self) -> SizeCategory {
        compute_size(self.race.value())
    }
}

fn parse_alignment(raw: &str) -> Result<Option<Alignment>, DomainError> {
    if raw.is_empty() {
        Ok(None)
    } else {
        raw.parse().map(Some)
    }
}

/// Only text no number control would ever send is rejected (letters,
/// `NaN`, `inf`).
fn parse_number(field: CharacterField, raw: &str) -> Result<Option<f64>, DomainError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Some(value)),
        _ => Err(DomainError::invalid_number(field.key(), raw)),
    }
}

fn format_number(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
