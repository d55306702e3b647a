//! Input tests - keys and mouse clicks driving a game

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use tictactoe3d::core::GameState;
use tictactoe3d::input::{handle_key_event, should_quit, PointerEvent, PointerTracker};
use tictactoe3d::scene::tile_center;
use tictactoe3d::term::{GameView, Viewport};
use tictactoe3d::types::{GameAction, Piece, Pos};

fn click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

fn cell_of(view: &GameView, vp: Viewport, pos: Pos) -> (u16, u16) {
    let surface = vp.pixel_viewport();
    let win = view.camera_for(vp).project(tile_center(pos), surface);
    (win.x as u16, ((surface.height - win.y) / 2.0) as u16)
}

#[test]
fn test_click_places_piece_on_picked_tile() {
    let mut view = GameView::default();
    let vp = Viewport::new(80, 24);
    let mut pointer = PointerTracker::new();
    let mut game = GameState::new();

    let target = Pos::new(2, 0).unwrap();
    let (column, row) = cell_of(&view, vp, target);
    let Some(PointerEvent::Click { column, row }) = pointer.handle_mouse_event(click(column, row))
    else {
        panic!("left press should click");
    };

    let picked = view.pick_cell(vp, column, row).unwrap();
    assert_eq!(picked, target);
    assert!(game.apply_action(GameAction::Place(picked)));
    assert_eq!(game.board().get(target), Some(Piece::X));
}

#[test]
fn test_reset_key_clears_the_board() {
    let mut game = GameState::new();
    game.place(Pos::CENTER).unwrap();

    let action = handle_key_event(KeyEvent::from(KeyCode::Char(' '))).unwrap();
    assert!(game.apply_action(action));
    assert!(game.board().is_empty(Pos::CENTER));
    assert_eq!(game.turn(), Piece::X);
}

#[test]
fn test_quit_keys_do_not_map_to_actions() {
    for key in [
        KeyEvent::from(KeyCode::Esc),
        KeyEvent::from(KeyCode::Char('q')),
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
    ] {
        assert!(should_quit(key));
        assert_eq!(handle_key_event(key), None);
    }
}
