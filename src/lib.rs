//! FORAGE (workspace facade crate).
//!
//! This package keeps a single `tui_forage::{core,input,term,types}` public
//! API while the implementation lives in dedicated crates under `crates/`.

pub use tui_forage_core as core;
pub use tui_forage_input as input;
pub use tui_forage_term as term;
pub use tui_forage_types as types;
