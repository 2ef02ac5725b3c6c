//! Form helper functions
//!
//! Pure logic behind the character form controls, kept out of the
//! components so it can be tested without a Dioxus runtime.

use herosheet_domain::{
    CharacterField, CharacterFormState, CharacterRecord, FormPhase, SelectOption,
    ALIGNMENT_OPTIONS, RACE_OPTIONS,
};

/// Placeholder entry shown while no alignment is selected
pub const ALIGNMENT_PLACEHOLDER: SelectOption = SelectOption {
    label: "Select alignment...",
    value: "",
};

/// Options rendered inside the `<select>` for a field.
///
/// Alignment starts unselected, so it gets a blank placeholder entry. Race
/// always holds a value and lists the catalog only. Non-select fields have
/// no options.
pub fn select_options(field: CharacterField) -> Vec<SelectOption> {
    match field {
        CharacterField::Alignment => std::iter::once(ALIGNMENT_PLACEHOLDER)
            .chain(ALIGNMENT_OPTIONS.iter().copied())
            .collect(),
        CharacterField::Race => RACE_OPTIONS
            .iter()
            .map(|race| SelectOption {
                label: race.label,
                value: race.value,
            })
            .collect(),
        _ => Vec::new(),
    }
}

/// Next snapshot after a control change.
///
/// Input that cannot be coerced is logged and dropped; the current snapshot
/// is returned so the control snaps back to the last accepted value.
pub fn next_state(
    current: &CharacterFormState,
    field: CharacterField,
    raw: &str,
) -> CharacterFormState {
    match current.update_field(field, raw) {
        Ok(next) => {
            tracing::debug!(field = %field, "Character field updated");
            next
        }
        Err(e) => {
            tracing::warn!(field = %field, error = %e, "Rejected character field input");
            current.clone()
        }
    }
}

/// One-line confirmation shown after a submission
pub fn submission_summary(record: &CharacterRecord) -> String {
    let name = record.name.trim();
    let name = if name.is_empty() { "Unnamed character" } else { name };
    let race = record.race.display_name();
    match record.char_level {
        Some(level) => format!("Submitted {} (level {} {})", name, level, race),
        None => format!("Submitted {} ({})", name, race),
    }
}

/// Confirmation to show under the form; only present while the last
/// action was a submission
pub fn submission_notice(state: &CharacterFormState) -> Option<String> {
    match state.phase() {
        FormPhase::Submitted => Some(submission_summary(state.record())),
        FormPhase::Editing => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use herosheet_domain::{Race, SizeCategory};

    mod select_options_tests {
        use super::*;

        #[test]
        fn alignment_has_placeholder_then_catalog() {
            let options = select_options(CharacterField::Alignment);
            assert_eq!(options.len(), 10);
            assert_eq!(options[0].value, "");
            assert_eq!(options[1].value, "lawful-good");
            assert_eq!(options[9].label, "Chaotic Evil");
        }

        #[test]
        fn race_lists_catalog_only() {
            let values: Vec<_> = select_options(CharacterField::Race)
                .iter()
                .map(|o| o.value)
                .collect();
            assert_eq!(values, vec!["human", "elf", "dwarf", "halfling"]);
        }

        #[test]
        fn text_fields_have_no_options() {
            assert!(select_options(CharacterField::Name).is_empty());
            assert!(select_options(CharacterField::Age).is_empty());
        }
    }

    mod next_state_tests {
        use super::*;

        #[test]
        fn accepted_change_produces_new_snapshot() {
            let current = CharacterFormState::new();
            let next = next_state(&current, CharacterField::Race, "halfling");

            assert_eq!(next.record().race, Race::Halfling);
            assert_eq!(next.size(), SizeCategory::Small);
            assert_eq!(current.record().race, Race::Human);
        }

        #[test]
        fn rejected_change_keeps_current_snapshot() {
            let current = next_state(&CharacterFormState::new(), CharacterField::Age, "25");
            let next = next_state(&current, CharacterField::Age, "twenty");
            assert_eq!(next, current);
            assert_eq!(next.record().age, Some(25.0));
        }

        #[test]
        fn change_after_submit_resumes_editing() {
            let submitted = CharacterFormState::new().submit(|_| {});
            let next = next_state(&submitted, CharacterField::Name, "Elora");
            assert_eq!(next.phase(), FormPhase::Editing);
        }
    }

    mod submission_summary_tests {
        use super::*;

        #[test]
        fn names_the_character() {
            let record = CharacterRecord {
                name: "Elora".to_string(),
                char_level: Some(5.0),
                race: Race::Elf,
                ..CharacterRecord::default()
            };
            assert_eq!(submission_summary(&record), "Submitted Elora (level 5 Elf)");
        }

        #[test]
        fn blank_name_falls_back() {
            assert_eq!(
                submission_summary(&CharacterRecord::default()),
                "Submitted Unnamed character (level 1 Human)"
            );
        }

        #[test]
        fn fractional_and_empty_levels() {
            let record = CharacterRecord {
                char_level: Some(2.5),
                ..CharacterRecord::default()
            };
            assert_eq!(
                submission_summary(&record),
                "Submitted Unnamed character (level 2.5 Human)"
            );

            let record = CharacterRecord {
                char_level: None,
                ..CharacterRecord::default()
            };
            assert_eq!(submission_summary(&record), "Submitted Unnamed character (Human)");
        }
    }

    mod submission_notice_tests {
        use super::*;

        #[test]
        fn hidden_while_editing() {
            assert_eq!(submission_notice(&CharacterFormState::new()), None);
        }

        #[test]
        fn shown_after_submit() {
            let editing = next_state(&CharacterFormState::new(), CharacterField::Name, "Elora");
            let submitted = editing.submit(|_| {});
            assert_eq!(
                submission_notice(&submitted).as_deref(),
                Some("Submitted Elora (level 1 Human)")
            );
        }

        #[test]
        fn cleared_by_next_edit() {
            let submitted = CharacterFormState::new().submit(|_| {});
            let edited = next_state(&submitted, CharacterField::Eyes, "grey");
            assert_eq!(submission_notice(&edited), None);
        }
    }
}
