//! JSON-API style resource objects (`{ id, type, attributes }`).

pub mod talk;

pub use talk::{TalkAttributes, TalkResource};
