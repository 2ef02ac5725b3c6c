//! Character Form - collect basic identity attributes for a new character

use dioxus::prelude::*;

use crate::presentation::components::common::FormField;
use crate::presentation::helpers::form_helpers::{next_state, select_options, submission_notice};
use herosheet_domain::{
    CharacterField, CharacterFormState, CharacterRecord, InputKind, SelectOption, SizeCategory,
    SIZE_FIELD_KEY, SIZE_FIELD_LABEL,
};

/// Character creation form.
///
/// Each instance owns its own record. `on_submit` receives a snapshot of the
/// record every time the player submits.
#[component]
pub fn CharacterForm(on_submit: EventHandler<CharacterRecord>) -> Element {
    let state = use_signal(CharacterFormState::new);

    rsx! {
        CharacterFormBody { state: state, on_submit: on_submit }
    }
}

/// Controls, size display and confirmation for one form snapshot
#[component]
fn CharacterFormBody(
    state: Signal<CharacterFormState>,
    on_submit: EventHandler<CharacterRecord>,
) -> Element {
    let size = state.read().size();
    let notice = submission_notice(&state.read());

    rsx! {
        form {
            class: "character-form flex flex-col gap-4 p-4 bg-dark-surface rounded-lg",
            onsubmit: move |e: FormEvent| {
                e.prevent_default();
                submit_form(state, on_submit);
            },

            for (field_key, field) in CharacterField::all().iter().map(|f| (f.key(), *f)) {
                FieldControl {
                    key: "{field_key}",
                    field: field,
                    state: state,
                }

                // Size is derived from race and sits right after it
                if field == CharacterField::Race {
                    SizeDisplay { size: size }
                }
            }

            button {
                r#type: "submit",
                class: "px-4 py-2 bg-blue-500 text-white border-none rounded cursor-pointer",
                "Submit"
            }
        }

        if let Some(notice) = notice {
            div {
                class: "submission-notice px-4 py-3 bg-green-500/10 text-green-500 text-sm",
                "{notice}"
            }
        }
    }
}

/// Input or select bound to one record field
#[component]
fn FieldControl(field: CharacterField, state: Signal<CharacterFormState>) -> Element {
    let key = field.key();
    let value = state.read().record().field_value(field);

    let control = match field.input_kind() {
        InputKind::Select => rsx! {
            select {
                id: key,
                name: key,
                value: "{value}",
                onchange: move |e: FormEvent| apply_change(state, field, e.value()),
                class: "w-full p-2 bg-dark-bg border border-gray-700 rounded text-white",

                for SelectOption { label, value: choice } in select_options(field) {
                    option {
                        key: "{choice}",
                        value: choice,
                        selected: choice == value,
                        "{label}"
                    }
                }
            }
        },
        kind => rsx! {
            input {
                r#type: kind.html_type().unwrap_or("text"),
                id: key,
                name: key,
                value: "{value}",
                oninput: move |e: FormEvent| apply_change(state, field, e.value()),
                class: "w-full p-2 bg-dark-bg border border-gray-700 rounded text-white",
            }
        },
    };

    rsx! {
        FormField {
            label: field.label(),
            html_for: key,
            {control}
        }
    }
}

/// Read-only size field
#[component]
fn SizeDisplay(size: SizeCategory) -> Element {
    rsx! {
        FormField {
            label: SIZE_FIELD_LABEL,
            html_for: SIZE_FIELD_KEY,
            input {
                r#type: "text",
                id: SIZE_FIELD_KEY,
                name: SIZE_FIELD_KEY,
                value: "{size}",
                readonly: true,
                class: "w-full p-2 bg-dark-bg border border-gray-700 rounded text-gray-400",
            }
        }
    }
}

fn apply_change(mut state: Signal<CharacterFormState>, field: CharacterField, raw: String) {
    let next = next_state(&state.read(), field, &raw);
    state.set(next);
}

fn submit_form(mut state: Signal<CharacterFormState>, on_submit: EventHandler<CharacterRecord>) {
    // Clone first so the handler never runs under a borrow of the signal
    let current = state.read().clone();
    let submitted = current.submit(|record| on_submit.call(record));
    state.set(submitted);
}
