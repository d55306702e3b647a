use tictactoe3d::core::GameState;
use tictactoe3d::term::{
    status_text, GameView, Viewport, CLEAR_COLOR, GRID_COLOR, HALF_BLOCK, HOVER_COLOR, O_COLOR,
    WIN_COLOR, X_COLOR,
};
use tictactoe3d::types::Pos;

// Odd width and height put the centre tile on the middle of cell (40, 12).
const VP: Viewport = Viewport {
    width: 81,
    height: 25,
};
const CENTER_CELL: (u16, u16) = (40, 12);

fn pos(row: u8, col: u8) -> Pos {
    Pos::new(row, col).unwrap()
}

fn game(moves: &[(u8, u8)]) -> GameState {
    let mut game = GameState::new();
    for &(row, col) in moves {
        game.place(pos(row, col)).unwrap();
    }
    game
}

#[test]
fn term_view_fills_the_viewport_with_half_blocks() {
    let snap = GameState::new().snapshot();
    let fb = GameView::default().with_hud(false).render(&snap, None, VP);

    assert_eq!((fb.width(), fb.height()), (81, 25));
    assert!(fb.cells().iter().all(|c| c.ch == HALF_BLOCK));

    let corner = fb.get(0, 0).unwrap();
    assert_eq!(corner.style.fg, CLEAR_COLOR);
    assert_eq!(corner.style.bg, CLEAR_COLOR);
    assert!(fb.cells().iter().any(|c| c.style.fg == GRID_COLOR));
    assert!(!fb.cells().iter().any(|c| c.style.fg == X_COLOR));
}

#[test]
fn term_view_draws_pieces_in_their_colours() {
    let snap = game(&[(1, 1), (0, 0)]).snapshot();
    let fb = GameView::default().render(&snap, None, VP);

    let center = fb.get(CENTER_CELL.0, CENTER_CELL.1).unwrap();
    assert_eq!(center.style.fg, X_COLOR);
    assert_eq!(center.style.bg, X_COLOR);
    assert!(fb.cells().iter().any(|c| c.style.fg == O_COLOR));
    assert!(!fb.cells().iter().any(|c| c.style.fg == WIN_COLOR && c.ch == HALF_BLOCK));
}

#[test]
fn term_view_highlights_the_winning_line() {
    let snap = game(&[(0, 0), (0, 1), (1, 1), (0, 2), (2, 2)]).snapshot();
    let fb = GameView::default().render(&snap, None, VP);

    let center = fb.get(CENTER_CELL.0, CENTER_CELL.1).unwrap();
    assert_eq!(center.style.fg, WIN_COLOR);
    // O pieces are not part of the line.
    assert!(fb.cells().iter().any(|c| c.style.fg == O_COLOR));
    assert!(!fb.cells().iter().any(|c| c.style.fg == X_COLOR));
}

#[test]
fn term_view_hover_only_marks_empty_tiles_of_live_games() {
    let mut view = GameView::default();

    let snap = GameState::new().snapshot();
    let fb = view.render(&snap, Some(Pos::CENTER), VP);
    assert_eq!(fb.get(CENTER_CELL.0, CENTER_CELL.1).unwrap().style.fg, HOVER_COLOR);

    let fb = view.render(&snap, Some(pos(0, 0)), VP);
    assert_ne!(fb.get(CENTER_CELL.0, CENTER_CELL.1).unwrap().style.fg, HOVER_COLOR);

    let occupied = game(&[(1, 1)]).snapshot();
    let fb = view.render(&occupied, Some(Pos::CENTER), VP);
    assert_eq!(fb.get(CENTER_CELL.0, CENTER_CELL.1).unwrap().style.fg, X_COLOR);

    let finished = game(&[(0, 0), (1, 0), (0, 1), (1, 2), (0, 2)]).snapshot();
    let fb = view.render(&finished, Some(Pos::CENTER), VP);
    assert!(!fb.cells().iter().any(|c| c.style.fg == HOVER_COLOR));
}

#[test]
fn term_view_hud_shows_status_and_help() {
    let mut view = GameView::default();

    let fb = view.render(&GameState::new().snapshot(), None, VP);
    assert!(fb.row_text(0).contains("X to move"));
    assert!(fb.row_text(24).contains("esc/q: quit"));

    let snap = game(&[(0, 0)]).snapshot();
    assert_eq!(status_text(&snap), "O to move");

    let won = game(&[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]).snapshot();
    let fb = view.render(&won, None, VP);
    assert!(fb.row_text(0).contains("X wins!"));
}

#[test]
fn term_view_render_into_reuses_and_resizes_buffer() {
    let mut view = GameView::default();
    let snap = GameState::new().snapshot();

    let mut fb = view.render(&snap, None, Viewport::new(10, 5));
    view.render_into(&snap, None, VP, &mut fb);
    assert_eq!(fb, view.render(&snap, None, VP));
}

#[test]
fn term_view_click_and_hover_cover_the_same_cells() {
    let snap = GameState::new().snapshot();

    for vp in [
        Viewport::new(80, 24),
        Viewport::new(120, 40),
        Viewport::new(200, 60),
    ] {
        let mut view = GameView::default();
        let mut picked = Vec::with_capacity(usize::from(vp.width) * usize::from(vp.height));
        for row in 0..vp.height {
            for column in 0..vp.width {
                picked.push(view.pick_cell(vp, column, row));
            }
        }
        assert!(picked.iter().any(Option::is_some));

        // Hovering a tile tints exactly the cells that would pick it.
        for pos in Pos::ALL {
            let fb = view.render(&snap, Some(pos), vp);
            for (i, (cell, pick)) in fb.cells().iter().zip(&picked).enumerate() {
                let tinted = cell.style.fg == HOVER_COLOR || cell.style.bg == HOVER_COLOR;
                assert_eq!(
                    tinted,
                    *pick == Some(pos),
                    "{:?} cell ({}, {}) hover {}",
                    vp,
                    i % usize::from(vp.width),
                    i / usize::from(vp.width),
                    pos
                );
            }
        }
    }
}
