//! HeroSheet Player crate.
//!
//! Dioxus UI for the character creation form, plus the runner that mounts it
//! in a desktop window (or a web page on `wasm32`).

pub mod runner;
pub mod ui;

pub use ui::presentation;

// Re-export commonly used entrypoints
pub use runner::{config::RunnerConfig, run};
pub use ui::{app, ShellKind};
