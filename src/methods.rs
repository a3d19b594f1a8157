//! Facade methods, one per remote procedure, grouped by API area.

pub mod content;

pub use content::*;
