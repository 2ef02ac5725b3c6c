//! # HeroSheet Domain Types
//!
//! Shared vocabulary types for the character form: the enumerated values a
//! player picks from dropdowns and the size category derived from race.
//!
//! ## Design Principles
//!
//! 1. **Pure data types** - No I/O, no async, no side effects
//! 2. **Serializable** - All types derive Serialize/Deserialize

mod alignment;
pub use alignment::Alignment;

mod race;
pub use race::{Race, SizeCategory};
