use dioxus::prelude::*;

use herosheet_domain::CharacterRecord;

pub mod presentation;

pub use crate::runner::config::ShellKind;

use presentation::components::creator::CharacterForm;

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    // Provided by the composition root (see `crates/player/src/runner.rs`).
    let shell = use_context::<ShellKind>();

    rsx! {
        div {
            class: shell.layout_class(),

            h1 {
                class: "text-white m-0 text-xl",
                "Create Character"
            }

            CharacterForm {
                on_submit: move |record: CharacterRecord| log_submission(&record),
            }
        }
    }
}

fn log_submission(record: &CharacterRecord) {
    match serde_json::to_string(record) {
        Ok(json) => tracing::info!(record = %json, "Received character record"),
        Err(e) => tracing::warn!(error = %e, "Failed to serialize submitted record"),
    }
}
