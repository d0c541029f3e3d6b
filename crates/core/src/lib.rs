//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation
//! logic. It has **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical levels and pursuit rolls
//! - **Testable**: Unit tests for all game rules
//! - **Portable**: Can run in any environment (terminal, headless)
//!
//! # Module Structure
//!
//! - [`game_state`]: Session state, player movement, adversary pursuit
//! - [`level`]: Per-level entity placement with capped counts
//! - [`rng`]: Seedable LCG driving generation and adversary randomness
//!
//! # Game Rules
//!
//! - The player moves one interior cell per action; border cells and
//!   obstacles reject the move silently.
//! - Collecting an item scores 10 points; collecting every item in a level
//!   wins it, and any key then advances to a harder layout.
//! - Adversaries pursue greedily (30% re-target per tick, horizontal
//!   correction first) and re-randomize their facing when blocked. Stepping
//!   onto the player's cell ends the session.
//!
//! # Example
//!
//! ```
//! use tui_forage_core::GameState;
//! use tui_forage_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//! game.apply_action(GameAction::MoveRight);
//! assert!(!game.game_over);
//! ```

pub mod game_state;
pub mod level;
pub mod rng;

pub use tui_forage_types as types;

// Re-export commonly used types for convenience
pub use game_state::GameState;
pub use level::{generate, LevelLayout};
pub use rng::SimpleRng;
