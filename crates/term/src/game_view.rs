//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameState;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Position, GRID_HEIGHT, GRID_WIDTH};

/// Fixed frame size: the 40x20 grid plus status box, legend and banner rows.
pub const VIEW_WIDTH: u16 = 48;
pub const VIEW_HEIGHT: u16 = 28;

const STATUS_BOX_Y: u16 = GRID_HEIGHT as u16 + 1;
const LEGEND_Y: u16 = GRID_HEIGHT as u16 + 5;
const BANNER_Y: u16 = GRID_HEIGHT as u16 + 7;

pub const GLYPH_OBSTACLE: char = '█';
pub const GLYPH_ITEM: char = '●';
pub const GLYPH_ADVERSARY: char = 'X';
pub const GLYPH_PLAYER: char = '@';

/// A lightweight terminal view for the grid game.
///
/// Entities draw in a fixed z-order (obstacles, items, adversaries, player),
/// so later categories win the cell when spawns overlap.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameView;

impl GameView {
    /// Render the current game state into an existing framebuffer.
    pub fn render_into(&self, state: &GameState, fb: &mut FrameBuffer) {
        fb.clear(Default::default());

        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            ..Default::default()
        };
        draw_border(fb, 0, 0, GRID_WIDTH as u16, GRID_HEIGHT as u16, border);

        let obstacle = CellStyle {
            fg: Rgb::new(130, 130, 140),
            ..Default::default()
        };
        for &pos in &state.obstacles {
            put_entity(fb, pos, GLYPH_OBSTACLE, obstacle);
        }

        let item = CellStyle {
            fg: Rgb::new(240, 200, 80),
            ..Default::default()
        };
        for &pos in &state.items {
            put_entity(fb, pos, GLYPH_ITEM, item);
        }

        let adversary = CellStyle {
            fg: Rgb::new(220, 70, 70),
            bold: true,
            ..Default::default()
        };
        for adv in &state.adversaries {
            put_entity(fb, adv.pos, GLYPH_ADVERSARY, adversary);
        }

        let player = CellStyle {
            fg: Rgb::new(90, 200, 220),
            bold: true,
            ..Default::default()
        };
        put_entity(fb, state.player, GLYPH_PLAYER, player);

        self.draw_status(state, fb);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, state: &GameState) -> FrameBuffer {
        let mut fb = FrameBuffer::new(VIEW_WIDTH, VIEW_HEIGHT);
        self.render_into(state, &mut fb);
        fb
    }

    fn draw_status(&self, state: &GameState, fb: &mut FrameBuffer) {
        let frame = CellStyle {
            fg: Rgb::new(200, 200, 200),
            ..Default::default()
        };
        let text = CellStyle::default();

        draw_border(fb, 0, STATUS_BOX_Y, GRID_WIDTH as u16, 3, frame);
        let status = format!(
            "Level: {:<3} Score: {:<6} Items: {}/{}",
            state.level,
            state.score,
            state.items_collected(),
            state.items_required
        );
        fb.put_str(2, STATUS_BOX_Y + 1, &status, text);

        let legend = CellStyle {
            fg: Rgb::new(150, 150, 150),
            ..Default::default()
        };
        fb.put_str(
            0,
            LEGEND_Y,
            "Controls: W=Up, S=Down, A=Left, D=Right, Q=Quit",
            legend,
        );

        let banner = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bold: true,
            ..Default::default()
        };
        if state.game_over {
            fb.put_str(0, BANNER_Y, "*** GAME OVER! You were caught! ***", banner);
        } else if state.level_won {
            fb.put_str(
                0,
                BANNER_Y,
                "*** LEVEL COMPLETE! Any key for next level ***",
                banner,
            );
        }
    }
}

/// Place an entity glyph, skipping anything not strictly inside the interior
/// so stray positions can never clobber the border.
fn put_entity(fb: &mut FrameBuffer, pos: Position, ch: char, style: CellStyle) {
    if pos.in_interior() {
        fb.put_char(pos.x as u16, pos.y as u16, ch, style);
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}
