//! Mouse tracking: last cursor cell plus left-click detection.
//!
//! The terminal reports mouse positions in character cells. Converting a cell
//! into a screen point and then into a board tile is the caller's job, since it
//! depends on how the view maps cells to pixels.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

/// Pointer events the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    /// Left button pressed at a terminal cell
    Click { column: u16, row: u16 },
}

#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    cursor: Option<(u16, u16)>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self { cursor: None }
    }

    /// Last known cursor cell as `(column, row)`
    pub fn cursor(&self) -> Option<(u16, u16)> {
        self.cursor
    }

    /// Forget the cursor, e.g. when the terminal was resized
    pub fn clear(&mut self) {
        self.cursor = None;
    }

    /// Track the cursor and report left clicks
    pub fn handle_mouse_event(&mut self, event: MouseEvent) -> Option<PointerEvent> {
        let at = (event.column, event.row);
        match event.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                self.cursor = Some(at);
                None
            }
            MouseEventKind::Down(button) => {
                self.cursor = Some(at);
                (button == MouseButton::Left).then_some(PointerEvent::Click {
                    column: event.column,
                    row: event.row,
                })
            }
            _ => None,
        }
    }
}
