//! Game state and simulation rules.
//!
//! `GameState` is created once and mutated in place for the whole session.
//! Level transitions rebuild the entity collections but preserve the
//! cumulative score and the level counter. All logic here is pure state
//! manipulation; rendering and input live elsewhere.

use arrayvec::ArrayVec;

use tui_forage_types::{
    Adversary, Direction, GameAction, Position, GRID_HEIGHT, GRID_WIDTH, ITEM_SCORE,
    MAX_ADVERSARIES, MAX_ITEMS, MAX_OBSTACLES, PURSUIT_CHANCE_PERCENT,
};

use crate::level::{self, LevelLayout};
use crate::rng::SimpleRng;

#[derive(Debug, Clone)]
pub struct GameState {
    pub player: Position,
    /// Collectible cells. Removal is swap-with-last, so order is not stable.
    pub items: ArrayVec<Position, MAX_ITEMS>,
    pub adversaries: ArrayVec<Adversary, MAX_ADVERSARIES>,
    pub obstacles: ArrayVec<Position, MAX_OBSTACLES>,
    pub score: u32,
    pub level: u32,
    /// Initial item count for this level; collecting them all wins the level.
    pub items_required: u32,
    /// Terminal for the session: once set, the simulation never advances again.
    pub game_over: bool,
    /// Set when the last item is collected; cleared by the next level load.
    pub level_won: bool,
    pub rng: SimpleRng,
}

impl GameState {
    /// Create a session at level 1 with a generated layout.
    pub fn new(seed: u32) -> Self {
        let mut state = Self {
            player: Position::new(GRID_WIDTH / 2, GRID_HEIGHT / 2),
            items: ArrayVec::new(),
            adversaries: ArrayVec::new(),
            obstacles: ArrayVec::new(),
            score: 0,
            level: 1,
            items_required: 0,
            game_over: false,
            level_won: false,
            rng: SimpleRng::new(seed),
        };
        let layout = level::generate(state.level, &mut state.rng);
        state.load_level(layout);
        state
    }

    /// Overwrite the mutable level fields from a generated layout.
    ///
    /// `score` and `level` are left untouched.
    pub fn load_level(&mut self, layout: LevelLayout) {
        self.player = layout.player;
        self.items = layout.items;
        self.adversaries = layout.adversaries;
        self.obstacles = layout.obstacles;
        self.items_required = self.items.len() as u32;
        self.level_won = false;
        self.game_over = false;
    }

    /// Move on to the next level (called on any key while `level_won`).
    pub fn advance_level(&mut self) {
        self.level += 1;
        let layout = level::generate(self.level, &mut self.rng);
        self.load_level(layout);
    }

    /// Items collected so far this level.
    pub fn items_collected(&self) -> u32 {
        self.items_required - self.items.len() as u32
    }

    pub fn obstacle_at(&self, pos: Position) -> bool {
        self.obstacles.iter().any(|&o| o == pos)
    }

    /// Apply a player movement action. No-op once the level is won or the
    /// session is over.
    pub fn apply_action(&mut self, action: GameAction) {
        if self.game_over || self.level_won {
            return;
        }
        let (dx, dy) = action.delta();
        self.try_move(dx, dy);
    }

    /// Attempt a one-cell player step. Rejections (border, obstacle) are
    /// silent no-ops. Returns whether the move committed.
    pub fn try_move(&mut self, dx: i32, dy: i32) -> bool {
        let next = Position::new(self.player.x + dx, self.player.y + dy);
        if !next.in_interior() || self.obstacle_at(next) {
            return false;
        }
        self.player = next;

        // Exactly one item per pickup, even if duplicates share the cell.
        if let Some(i) = self.items.iter().position(|&p| p == next) {
            self.items.swap_remove(i);
            self.score += ITEM_SCORE;
            if self.items.is_empty() {
                self.level_won = true;
            }
        }
        true
    }

    /// Advance every adversary one tick.
    ///
    /// Biased greedy pursuit: each adversary occasionally re-faces toward the
    /// player, then steps in its facing, re-randomizing the facing (without
    /// moving) when blocked. Exact cell overlap with the player ends the game;
    /// adversaries later in iteration order still take their turn in the same
    /// tick.
    pub fn advance_adversaries(&mut self) {
        if self.game_over {
            return;
        }
        for i in 0..self.adversaries.len() {
            let mut adv = self.adversaries[i];

            if self.rng.chance(PURSUIT_CHANCE_PERCENT) {
                if let Some(facing) = pursuit_facing(adv.pos, self.player) {
                    adv.facing = facing;
                }
            }

            let (dx, dy) = adv.facing.delta();
            let next = Position::new(adv.pos.x + dx, adv.pos.y + dy);
            if next.in_interior() && !self.obstacle_at(next) {
                adv.pos = next;
            } else {
                adv.facing = Direction::from_index(self.rng.next_range(4));
            }

            if adv.pos == self.player {
                self.game_over = true;
            }
            self.adversaries[i] = adv;
        }
    }
}

/// Single cardinal facing that most directly closes the gap to `target`.
///
/// Horizontal correction wins when the target is horizontally displaced;
/// `None` when already on the target cell (facing left unchanged).
fn pursuit_facing(from: Position, target: Position) -> Option<Direction> {
    if target.x > from.x {
        Some(Direction::Right)
    } else if target.x < from.x {
        Some(Direction::Left)
    } else if target.y > from.y {
        Some(Direction::Down)
    } else if target.y < from.y {
        Some(Direction::Up)
    } else {
        None
    }
}
