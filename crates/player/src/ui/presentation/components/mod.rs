//! Dioxus UI components

pub mod common;
pub mod creator;
