//! View tests - glyph placement, z-order, status panel, banners

use tui_forage::core::GameState;
use tui_forage::term::game_view::{GLYPH_ADVERSARY, GLYPH_ITEM, GLYPH_OBSTACLE, GLYPH_PLAYER};
use tui_forage::term::{FrameBuffer, GameView, VIEW_HEIGHT, VIEW_WIDTH};
use tui_forage::types::{Adversary, Direction, Position, GRID_HEIGHT, GRID_WIDTH};

fn empty_state() -> GameState {
    let mut state = GameState::new(1);
    state.items.clear();
    state.adversaries.clear();
    state.obstacles.clear();
    state.items_required = 0;
    state.player = Position::new(20, 10);
    state
}

fn frame_text(fb: &FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        all.push_str(&fb.row_text(y));
        all.push('\n');
    }
    all
}

#[test]
fn test_frame_has_fixed_dimensions() {
    let fb = GameView.render(&empty_state());
    assert_eq!(fb.width(), VIEW_WIDTH);
    assert_eq!(fb.height(), VIEW_HEIGHT);
}

#[test]
fn test_border_and_edges() {
    let fb = GameView.render(&empty_state());
    let w = GRID_WIDTH as u16;
    let h = GRID_HEIGHT as u16;

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(w - 1, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, h - 1).unwrap().ch, '└');
    assert_eq!(fb.get(w - 1, h - 1).unwrap().ch, '┘');
    assert_eq!(fb.get(w / 2, 0).unwrap().ch, '─');
    assert_eq!(fb.get(0, h / 2).unwrap().ch, '│');
}

#[test]
fn test_entities_draw_at_their_cells() {
    let mut state = empty_state();
    state.obstacles.push(Position::new(3, 3));
    state.items.push(Position::new(5, 5));
    state.items_required = 1;
    state
        .adversaries
        .push(Adversary::new(Position::new(7, 7), Direction::Up));

    let fb = GameView.render(&state);
    assert_eq!(fb.get(3, 3).unwrap().ch, GLYPH_OBSTACLE);
    assert_eq!(fb.get(5, 5).unwrap().ch, GLYPH_ITEM);
    assert_eq!(fb.get(7, 7).unwrap().ch, GLYPH_ADVERSARY);
    assert_eq!(fb.get(20, 10).unwrap().ch, GLYPH_PLAYER);
}

#[test]
fn test_z_order_on_overlapping_cells() {
    let mut state = empty_state();
    let cell = Position::new(8, 8);
    state.obstacles.push(cell);
    state.items.push(cell);
    state.items_required = 1;

    // Item over obstacle.
    let fb = GameView.render(&state);
    assert_eq!(fb.get(8, 8).unwrap().ch, GLYPH_ITEM);

    // Adversary over both.
    state
        .adversaries
        .push(Adversary::new(cell, Direction::Up));
    let fb = GameView.render(&state);
    assert_eq!(fb.get(8, 8).unwrap().ch, GLYPH_ADVERSARY);

    // Player over everything.
    state.player = cell;
    let fb = GameView.render(&state);
    assert_eq!(fb.get(8, 8).unwrap().ch, GLYPH_PLAYER);
}

#[test]
fn test_status_panel_and_legend() {
    let mut state = empty_state();
    state.level = 3;
    state.score = 120;
    state.items.push(Position::new(5, 5));
    state.items.push(Position::new(6, 6));
    state.items_required = 5;

    let text = frame_text(&GameView.render(&state));
    assert!(text.contains("Level: 3"));
    assert!(text.contains("Score: 120"));
    assert!(text.contains("Items: 3/5"));
    assert!(text.contains("Controls: W=Up, S=Down, A=Left, D=Right, Q=Quit"));
}

#[test]
fn test_banners() {
    let mut state = empty_state();
    let text = frame_text(&GameView.render(&state));
    assert!(!text.contains("GAME OVER"));
    assert!(!text.contains("LEVEL COMPLETE"));

    state.level_won = true;
    let text = frame_text(&GameView.render(&state));
    assert!(text.contains("LEVEL COMPLETE"));

    state.level_won = false;
    state.game_over = true;
    let text = frame_text(&GameView.render(&state));
    assert!(text.contains("GAME OVER"));
    assert!(!text.contains("LEVEL COMPLETE"));
}

#[test]
fn test_render_leaves_state_untouched() {
    let state = GameState::new(4242);
    let before = state.clone();
    let _ = GameView.render(&state);
    assert_eq!(state.player, before.player);
    assert_eq!(state.items.as_slice(), before.items.as_slice());
    assert_eq!(state.score, before.score);
}
