//! Level generation: populates entity collections for a given level number.
//!
//! Every position is an independent uniform draw over the open interior, so
//! categories may overlap each other (an item can land under an obstacle, an
//! adversary on the player's start cell). That matches the game's original
//! rules and is kept as-is; the caps keep entity counts far below the number
//! of interior cells.

use arrayvec::ArrayVec;

use tui_forage_types::{
    Adversary, Direction, Position, GRID_HEIGHT, GRID_WIDTH, MAX_ADVERSARIES, MAX_ITEMS,
    MAX_OBSTACLES,
};

use crate::rng::SimpleRng;

/// Freshly generated entity placement for one level.
///
/// `score` and `level` live on `GameState` and are untouched by generation.
#[derive(Debug, Clone)]
pub struct LevelLayout {
    pub player: Position,
    pub items: ArrayVec<Position, MAX_ITEMS>,
    pub adversaries: ArrayVec<Adversary, MAX_ADVERSARIES>,
    pub obstacles: ArrayVec<Position, MAX_OBSTACLES>,
}

/// Number of items a level starts with (and requires to complete).
pub fn items_for_level(level: u32) -> usize {
    (5 + level as usize * 2).min(MAX_ITEMS)
}

/// Number of adversaries for a level.
pub fn adversaries_for_level(level: u32) -> usize {
    (1 + level as usize / 2).min(MAX_ADVERSARIES)
}

/// Number of obstacles for a level.
pub fn obstacles_for_level(level: u32) -> usize {
    (10 + level as usize * 3).min(MAX_OBSTACLES)
}

/// Generate the layout for `level`, consuming draws from `rng`.
///
/// Deterministic for a fixed RNG state: draw order is items, then
/// adversaries (position, then facing), then obstacles.
pub fn generate(level: u32, rng: &mut SimpleRng) -> LevelLayout {
    let mut layout = LevelLayout {
        player: Position::new(GRID_WIDTH / 2, GRID_HEIGHT / 2),
        items: ArrayVec::new(),
        adversaries: ArrayVec::new(),
        obstacles: ArrayVec::new(),
    };

    for _ in 0..items_for_level(level) {
        layout.items.push(random_interior(rng));
    }

    for _ in 0..adversaries_for_level(level) {
        let pos = random_interior(rng);
        let facing = Direction::from_index(rng.next_range(4));
        layout.adversaries.push(Adversary::new(pos, facing));
    }

    for _ in 0..obstacles_for_level(level) {
        layout.obstacles.push(random_interior(rng));
    }

    layout
}

/// Uniform draw over the open interior (1..=W-2, 1..=H-2).
fn random_interior(rng: &mut SimpleRng) -> Position {
    Position::new(
        rng.next_range((GRID_WIDTH - 2) as u32) as i32 + 1,
        rng.next_range((GRID_HEIGHT - 2) as u32) as i32 + 1,
    )
}
