//! Input layer: crossterm key events mapped onto game actions.

pub mod map;

pub use map::{handle_key_event, should_quit};
