//! Screen geometry
//!
//! The 3x3 grid has a fixed cell size and is centered in the window. The
//! end-of-game "Yes"/"No" regions sit at fixed offsets from the screen center.
//! All offsets are floored to whole pixels.

use egui::{Pos2, Rect, Vec2};

use crate::board::{row_col, BOARD_SIZE, TOTAL_CELLS};

/// Initial window size
pub const WINDOW_SIZE: Vec2 = Vec2::new(1920.0, 1080.0);

/// Side of one cell in pixels
pub const CELL_SIZE: f32 = 50.0;
/// Side of the whole grid in pixels
pub const GRID_SIZE: f32 = CELL_SIZE * BOARD_SIZE as f32;

/// Distance of the status line above the grid
pub const STATUS_OFFSET: f32 = 50.0;
/// Distance of the "Play again?" prompt above the screen center
pub const PROMPT_OFFSET: f32 = 50.0;

/// Horizontal extent of the buttons, measured outward from the center
const BUTTON_INNER: f32 = 20.0;
const BUTTON_OUTER: f32 = 100.0;
/// Vertical extent of the buttons, measured down from the center
const BUTTON_TOP: f32 = 50.0;
const BUTTON_BOTTOM: f32 = 90.0;

/// Geometry for one frame, derived from the screen rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    screen: Rect,
}

impl Layout {
    pub fn new(screen: Rect) -> Self {
        Self { screen }
    }

    /// Layout for a screen of the given size anchored at the origin
    pub fn from_size(width: f32, height: f32) -> Self {
        Self::new(Rect::from_min_size(Pos2::ZERO, Vec2::new(width, height)))
    }

    #[inline]
    pub fn screen(&self) -> Rect {
        self.screen
    }

    /// Screen center, floored
    pub fn center(&self) -> Pos2 {
        self.screen.min + (self.screen.size() / 2.0).floor()
    }

    /// Top-left corner of the grid
    pub fn grid_origin(&self) -> Pos2 {
        self.screen.min + ((self.screen.size() - Vec2::splat(GRID_SIZE)) / 2.0).floor()
    }

    pub fn grid_rect(&self) -> Rect {
        Rect::from_min_size(self.grid_origin(), Vec2::splat(GRID_SIZE))
    }

    /// Screen rectangle of a cell
    pub fn cell_rect(&self, index: usize) -> Rect {
        debug_assert!(index < TOTAL_CELLS);
        let (row, col) = row_col(index);
        let min = self.grid_origin() + Vec2::new(col as f32, row as f32) * CELL_SIZE;
        Rect::from_min_size(min, Vec2::splat(CELL_SIZE))
    }

    /// Convert screen coordinates to a cell index.
    ///
    /// Returns `None` unless both the column and the row fall inside the grid.
    pub fn cell_at(&self, point: Pos2) -> Option<usize> {
        let relative = (point - self.grid_origin()) / CELL_SIZE;
        let col = relative.x.floor();
        let row = relative.y.floor();
        let range = 0.0..BOARD_SIZE as f32;

        if range.contains(&col) && range.contains(&row) {
            Some(row as usize * BOARD_SIZE + col as usize)
        } else {
            None
        }
    }

    /// Where the status line is centered
    pub fn status_anchor(&self) -> Pos2 {
        Pos2::new(self.center().x, self.grid_origin().y - STATUS_OFFSET)
    }

    /// Where the result message is centered
    pub fn message_anchor(&self) -> Pos2 {
        self.center()
    }

    /// Where the "Play again?" prompt is centered
    pub fn prompt_anchor(&self) -> Pos2 {
        self.center() - Vec2::new(0.0, PROMPT_OFFSET)
    }

    /// The "Yes" (play again) region
    pub fn yes_button(&self) -> Rect {
        let c = self.center();
        Rect::from_min_max(
            Pos2::new(c.x - BUTTON_OUTER, c.y + BUTTON_TOP),
            Pos2::new(c.x - BUTTON_INNER, c.y + BUTTON_BOTTOM),
        )
    }

    /// The "No" (quit) region
    pub fn no_button(&self) -> Rect {
        let c = self.center();
        Rect::from_min_max(
            Pos2::new(c.x + BUTTON_INNER, c.y + BUTTON_TOP),
            Pos2::new(c.x + BUTTON_OUTER, c.y + BUTTON_BOTTOM),
        )
    }

    #[inline]
    pub fn hits_yes(&self, point: Pos2) -> bool {
        contains_strict(self.yes_button(), point)
    }

    #[inline]
    pub fn hits_no(&self, point: Pos2) -> bool {
        contains_strict(self.no_button(), point)
    }
}

/// Interior test; points on the edge are outside
fn contains_strict(rect: Rect, point: Pos2) -> bool {
    rect.min.x < point.x && point.x < rect.max.x && rect.min.y < point.y && point.y < rect.max.y
}
