//! Presentation layer - Dioxus UI components and helpers

pub mod components;
pub mod helpers;
