//! The fixed set of editable fields on the character form.

use crate::error::DomainError;
use std::fmt;
use std::str::FromStr;

/// Key of the read-only size control
pub const SIZE_FIELD_KEY: &str = "size";
/// Label of the read-only size control
pub const SIZE_FIELD_LABEL: &str = "Size:";

/// Which native control renders a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Number,
    Select,
}

impl InputKind {
    /// HTML `type` attribute for `<input>` controls
    pub fn html_type(&self) -> Option<&'static str> {
        match self {
            InputKind::Text => Some("text"),
            InputKind::Number => Some("number"),
            InputKind::Select => None,
        }
    }
}

/// An editable field of [`CharacterRecord`](super::CharacterRecord)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterField {
    Name,
    Alignment,
    PlayerName,
    CharLevel,
    Deity,
    Homeland,
    Campaign,
    Race,
    Gender,
    Age,
    Height,
    Hair,
    Eyes,
}

impl CharacterField {
    /// All fields in render order
    pub fn all() -> &'static [CharacterField] {
        &[
            CharacterField::Name,
            CharacterField::Alignment,
            CharacterField::PlayerName,
            CharacterField::CharLevel,
            CharacterField::Deity,
            CharacterField::Homeland,
            CharacterField::Campaign,
            CharacterField::Race,
            CharacterField::Gender,
            CharacterField::Age,
            CharacterField::Height,
            CharacterField::Hair,
            CharacterField::Eyes,
        ]
    }

    /// Control `id`/`name`, identical to the serialized record key
    pub fn key(&self) -> &'static str {
        match self {
            CharacterField::Name => "name",
            CharacterField::Alignment => "alignment",
            CharacterField::PlayerName => "playerName",
            CharacterField::CharLevel => "charLevel",
            CharacterField::Deity => "deity",
            CharacterField::Homeland => "homeland",
            CharacterField::Campaign => "campaign",
            CharacterField::Race => "race",
            CharacterField::Gender => "gender",
            CharacterField::Age => "age",
            CharacterField::Height => "height",
            CharacterField::Hair => "hair",
            CharacterField::Eyes => "eyes",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CharacterField::Name => "Character Name:",
            CharacterField::Alignment => "Alignment:",
            CharacterField::PlayerName => "Player Name:",
            CharacterField::CharLevel => "Level:",
            CharacterField::Deity => "Deity:",
            CharacterField::Homeland => "Homeland:",
            CharacterField::Campaign => "Campaign:",
            CharacterField::Race => "Race:",
            CharacterField::Gender => "Gender:",
            CharacterField::Age => "Age:",
            CharacterField::Height => "Height:",
            CharacterField::Hair => "Hair:",
            CharacterField::Eyes => "Eyes:",
        }
    }

    pub fn input_kind(&self) -> InputKind {
        match self {
            CharacterField::Alignment | CharacterField::Race => InputKind::Select,
            CharacterField::CharLevel | CharacterField::Age | CharacterField::Height => {
                InputKind::Number
            }
            _ => InputKind::Text,
        }
    }
}

impl fmt::Display for CharacterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for CharacterField {
    type Err = DomainError;

    /// Parses a control name. Keys are case-sensitive, like HTML `name`s.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CharacterField::all()
            .iter()
            .copied()
            .find(|field| field.key() == s)
            .ok_or_else(|| DomainError::unknown_field(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_fields_in_render_order() {
        let keys: Vec<_> = CharacterField::all().iter().map(|f| f.key()).collect();
        assert_eq!(
            keys,
            vec![
                "name",
                "alignment",
                "playerName",
                "charLevel",
                "deity",
                "homeland",
                "campaign",
                "race",
                "gender",
                "age",
                "height",
                "hair",
                "eyes",
            ]
        );
    }

    #[test]
    fn test_field_parse_by_key() {
        assert_eq!(
            "charLevel".parse::<CharacterField>().unwrap(),
            CharacterField::CharLevel
        );
        assert_eq!(
            "playerName".parse::<CharacterField>().unwrap(),
            CharacterField::PlayerName
        );
        assert_eq!(
            "charlevel".parse::<CharacterField>(),
            Err(DomainError::unknown_field("charlevel"))
        );
        assert!("size".parse::<CharacterField>().is_err());
    }

    #[test]
    fn test_input_kinds() {
        let numbers: Vec<_> = CharacterField::all()
            .iter()
            .filter(|f| f.input_kind() == InputKind::Number)
            .map(|f| f.key())
            .collect();
        assert_eq!(numbers, vec!["charLevel", "age", "height"]);

        let selects: Vec<_> = CharacterField::all()
            .iter()
            .filter(|f| f.input_kind() == InputKind::Select)
            .map(|f| f.key())
            .collect();
        assert_eq!(selects, vec!["alignment", "race"]);
    }

    #[test]
    fn test_labels() {
        assert_eq!(CharacterField::Name.label(), "Character Name:");
        assert_eq!(CharacterField::CharLevel.label(), "Level:");
        assert_eq!(SIZE_FIELD_LABEL, "Size:");
    }

    #[test]
    fn test_html_type() {
        assert_eq!(InputKind::Text.html_type(), Some("text"));
        assert_eq!(InputKind::Number.html_type(), Some("number"));
        assert_eq!(InputKind::Select.html_type(), None);
    }
}
