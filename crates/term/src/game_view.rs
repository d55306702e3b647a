//! GameView: draws a `core::GameSnapshot` as the 3D board into a framebuffer.
//!
//! This module is pure (no I/O). Every half-block pixel casts a camera ray
//! into the tile colliders and takes the colour of whatever it lands on: an X
//! or O glyph inside an occupied tile, the hovered tile, a grid bar on the
//! board plane, or the clear colour. A click on a terminal cell is resolved
//! from the same two pixels through the same colliders, so it always lands on
//! a tile drawn in that cell.

use crate::core::{GameSnapshot, GameStatus};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::scene::glam::{Vec2, Vec3};
use crate::scene::{Camera, Picker, ScreenViewport, TileLayout};
use crate::types::{Piece, Pos, DEFAULT_FOV_DEG, TILE_SIZE};

/// Background.
pub const CLEAR_COLOR: Rgb = Rgb::new(109, 225, 210);
pub const X_COLOR: Rgb = Rgb::new(255, 214, 58);
pub const O_COLOR: Rgb = Rgb::new(247, 90, 90);
pub const GRID_COLOR: Rgb = Rgb::new(255, 169, 85);
/// Pieces of the winning line.
pub const WIN_COLOR: Rgb = Rgb::WHITE;
pub const HOVER_COLOR: Rgb = Rgb::new(167, 237, 228);

/// Half thickness of a grid bar, world units
const GRID_HALF_WIDTH: f32 = 0.06;
/// Grid bars reach this far from the board centre
const GRID_EXTENT: f32 = TILE_SIZE * 1.5;
/// Glyphs fill this much of a tile's half size
const GLYPH_RADIUS: f32 = 0.4;
const X_STROKE_HALF_WIDTH: f32 = 0.1;
const O_INNER_RADIUS: f32 = 0.22;

const HUD_STYLE: CellStyle = CellStyle::new(Rgb::WHITE, Rgb::new(25, 40, 45)).bold();
const HELP_STYLE: CellStyle = CellStyle::new(Rgb::new(200, 210, 210), Rgb::new(25, 40, 45));
const HELP_TEXT: &str = "click: place   space/r: reset   esc/q: quit";

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Pixel surface: one pixel per column, two per row
    pub fn pixel_viewport(&self) -> ScreenViewport {
        ScreenViewport::new(f32::from(self.width), f32::from(self.height) * 2.0)
    }

    /// Centres of the top and bottom pixel of a terminal cell (y down)
    pub fn cell_pixels_px(&self, column: u16, row: u16) -> [(f32, f32); 2] {
        let x = f32::from(column) + 0.5;
        let top = f32::from(row) * 2.0 + 0.5;
        [(x, top), (x, top + 1.0)]
    }
}

/// Software renderer for the board.
///
/// Keeps one [`Picker`] whose camera follows the last viewport drawn or
/// picked.
#[derive(Debug, Clone)]
pub struct GameView {
    fov_deg: f32,
    layout: TileLayout,
    picker: Picker,
    picker_viewport: Viewport,
    show_hud: bool,
}

impl Default for GameView {
    fn default() -> Self {
        Self::new(DEFAULT_FOV_DEG)
    }
}

impl GameView {
    pub fn new(fov_deg: f32) -> Self {
        let picker_viewport = Viewport::new(0, 0);
        Self {
            fov_deg,
            layout: TileLayout::new(),
            picker: Picker::new(Camera::for_viewport(fov_deg, picker_viewport.pixel_viewport())),
            picker_viewport,
            show_hud: true,
        }
    }

    /// Toggle the status and help rows
    pub fn with_hud(mut self, show_hud: bool) -> Self {
        self.show_hud = show_hud;
        self
    }

    pub fn fov_deg(&self) -> f32 {
        self.fov_deg
    }

    /// The camera used to draw `viewport`
    pub fn camera_for(&self, viewport: Viewport) -> Camera {
        Camera::for_viewport(self.fov_deg, viewport.pixel_viewport())
    }

    /// The tile drawn under terminal cell `(column, row)`, if any
    ///
    /// Tries the cell's top pixel, then its bottom pixel. HUD rows never pick.
    pub fn pick_cell(&mut self, viewport: Viewport, column: u16, row: u16) -> Option<Pos> {
        if self.hud_row(viewport, row) {
            return None;
        }
        self.sync_picker(viewport);
        let surface = viewport.pixel_viewport();
        viewport
            .cell_pixels_px(column, row)
            .into_iter()
            .find_map(|(x, y)| self.picker.pick(x, y, surface))
    }

    fn sync_picker(&mut self, viewport: Viewport) {
        if self.picker_viewport != viewport {
            self.picker.set_camera(self.camera_for(viewport));
            self.picker_viewport = viewport;
        }
    }

    fn hud_visible(&self, viewport: Viewport) -> bool {
        self.show_hud && viewport.height >= 3
    }

    fn hud_row(&self, viewport: Viewport, row: u16) -> bool {
        self.hud_visible(viewport) && (row == 0 || row == viewport.height - 1)
    }

    /// Render into an existing framebuffer, resizing it to `viewport`.
    ///
    /// `hover` highlights an empty tile while the game is in progress.
    pub fn render_into(
        &mut self,
        snap: &GameSnapshot,
        hover: Option<Pos>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        self.sync_picker(viewport);

        let surface = viewport.pixel_viewport();
        for y in 0..viewport.height {
            for x in 0..viewport.width {
                let [(tx, ty), (bx, by)] = viewport.cell_pixels_px(x, y);
                let top = self.shade(snap, hover, surface, tx, ty);
                let bottom = self.shade(snap, hover, surface, bx, by);
                fb.put_half_block(x, y, top, bottom);
            }
        }

        if self.hud_visible(viewport) {
            draw_centered_bar(fb, 0, &status_text(snap), HUD_STYLE);
            draw_centered_bar(fb, viewport.height - 1, HELP_TEXT, HELP_STYLE);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&mut self, snap: &GameSnapshot, hover: Option<Pos>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, hover, viewport, &mut fb);
        fb
    }

    /// Colour of the pixel at `(x, y)`; tiles come from the pick colliders
    fn shade(
        &self,
        snap: &GameSnapshot,
        hover: Option<Pos>,
        surface: ScreenViewport,
        x: f32,
        y: f32,
    ) -> Rgb {
        let ray = self.picker.camera().screen_ray(x, y, surface);

        if let Some(hit) = self.picker.pick_ray(&ray) {
            let pos = hit.pos;
            let local = (hit.point - self.layout.position(pos)).truncate();
            match snap.cell(pos) {
                Some(piece) if glyph_covers(piece, local) => {
                    return if snap.in_winning_line(pos) {
                        WIN_COLOR
                    } else {
                        piece_color(piece)
                    };
                }
                None if hover == Some(pos) && snap.playable() => return HOVER_COLOR,
                _ => {}
            }
        }

        let Some(point) = ray.plane_z(0.0) else {
            return CLEAR_COLOR;
        };
        if grid_covers(point) {
            GRID_COLOR
        } else {
            CLEAR_COLOR
        }
    }
}

/// Top status line.
pub fn status_text(snap: &GameSnapshot) -> String {
    match snap.status {
        GameStatus::InProgress => format!("{} to move", snap.turn.as_str()),
        GameStatus::Won(piece) => format!("{} wins! press space to restart", piece.as_str()),
    }
}

pub fn piece_color(piece: Piece) -> Rgb {
    match piece {
        Piece::X => X_COLOR,
        Piece::O => O_COLOR,
    }
}

/// Is `local` (offset from the tile centre) part of the piece glyph?
fn glyph_covers(piece: Piece, local: Vec2) -> bool {
    match piece {
        Piece::X => {
            let inside = local.abs().max_element() <= GLYPH_RADIUS;
            let stroke = X_STROKE_HALF_WIDTH * std::f32::consts::SQRT_2;
            inside && ((local.x - local.y).abs() <= stroke || (local.x + local.y).abs() <= stroke)
        }
        Piece::O => {
            let r = local.length();
            (O_INNER_RADIUS..=GLYPH_RADIUS).contains(&r)
        }
    }
}

/// Two vertical and two horizontal bars between the tiles
fn grid_covers(point: Vec3) -> bool {
    let bar = TILE_SIZE * 0.5;
    let near_bar = |v: f32| (v.abs() - bar).abs() <= GRID_HALF_WIDTH;
    let (x, y) = (point.x, point.y);
    (near_bar(x) && y.abs() <= GRID_EXTENT) || (near_bar(y) && x.abs() <= GRID_EXTENT)
}

fn draw_centered_bar(fb: &mut FrameBuffer, y: u16, text: &str, style: CellStyle) {
    fb.fill_rect(0, y, fb.width(), 1, ' ', style);
    let text_w = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
    let x = fb.width().saturating_sub(text_w) / 2;
    fb.put_str(x, y, text, style);
}
