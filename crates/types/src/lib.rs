//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Grid dimensions, border included.
pub const GRID_WIDTH: i32 = 40;
pub const GRID_HEIGHT: i32 = 20;

/// Entity count caps enforced by the level generator.
pub const MAX_ITEMS: usize = 64;
pub const MAX_ADVERSARIES: usize = 16;
pub const MAX_OBSTACLES: usize = 128;

/// Main loop timing: one poll every `POLL_MS`, adversaries advance every
/// `ADVERSARY_TICKS` polls (~300ms).
pub const POLL_MS: u64 = 50;
pub const ADVERSARY_TICKS: u32 = 6;

/// Score awarded per collected item.
pub const ITEM_SCORE: u32 = 10;

/// Chance (percent) per tick that an adversary re-targets the player.
pub const PURSUIT_CHANCE_PERCENT: u32 = 30;

/// A cell on the grid. Compared by value; no identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// True when strictly inside the playable interior (border excluded).
    pub fn in_interior(&self) -> bool {
        self.x > 0 && self.x < GRID_WIDTH - 1 && self.y > 0 && self.y < GRID_HEIGHT - 1
    }
}

/// Cardinal facing for adversaries.
///
/// Index order (up, right, down, left) matches the uniform draws used for
/// initial facing and dead-end escapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Map a uniform draw in [0, 4) to a facing.
    pub fn from_index(index: u32) -> Self {
        match index % 4 {
            0 => Direction::Up,
            1 => Direction::Right,
            2 => Direction::Down,
            _ => Direction::Left,
        }
    }

    /// One-cell step offset for this facing.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
        }
    }
}

/// A pursuer: a cell plus the facing it will step in next tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Adversary {
    pub pos: Position,
    pub facing: Direction,
}

impl Adversary {
    pub const fn new(pos: Position, facing: Direction) -> Self {
        Self { pos, facing }
    }
}

/// Player actions dispatched from input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
}

impl GameAction {
    /// One-cell step offset for this move.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            GameAction::MoveUp => (0, -1),
            GameAction::MoveDown => (0, 1),
            GameAction::MoveLeft => (-1, 0),
            GameAction::MoveRight => (1, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interior_excludes_border() {
        assert!(Position::new(1, 1).in_interior());
        assert!(Position::new(GRID_WIDTH - 2, GRID_HEIGHT - 2).in_interior());
        assert!(!Position::new(0, 5).in_interior());
        assert!(!Position::new(GRID_WIDTH - 1, 5).in_interior());
        assert!(!Position::new(5, 0).in_interior());
        assert!(!Position::new(5, GRID_HEIGHT - 1).in_interior());
    }

    #[test]
    fn direction_index_covers_all_four() {
        let dirs: Vec<Direction> = (0..4).map(Direction::from_index).collect();
        assert_eq!(
            dirs,
            vec![
                Direction::Up,
                Direction::Right,
                Direction::Down,
                Direction::Left
            ]
        );
        // Draws are already reduced mod 4, but large values must not panic.
        assert_eq!(Direction::from_index(7), Direction::Left);
    }
}
