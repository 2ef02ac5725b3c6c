//! Labeled form row

use dioxus::prelude::*;

/// A `<label>` associated with the control passed as children
#[component]
pub fn FormField(label: &'static str, html_for: &'static str, children: Element) -> Element {
    rsx! {
        div {
            class: "form-field flex flex-col gap-1",

            label {
                r#for: html_for,
                class: "text-gray-400 text-sm",
                "{label}"
            }

            {children}
        }
    }
}
