//! Diff-updated false-color image grid.
//!
//! [`RenderGrid`] owns the 15x15 display cells of the image area. Each cell
//! remembers the last color it was filled with; `update` recomputes every
//! cell's color from the normalized buffer and touches the display only for
//! cells whose color actually changed. Redrawing all 225 cells every frame
//! is the expensive path this exists to avoid; on a quiet scene a frame
//! writes a handful of cells, often none.
//!
//! Traversal order maps the sensor's view onto the panel:
//!
//! - normal: both row and column reversed (the scene as seen facing away
//!   from the operator);
//! - selfie: row reversed only (left-right preserved, like a mirror).
//!
//! [`RenderGrid::invalidate`] drops every stored color so the next update
//! repaints the full image; the status flash uses it after drawing text
//! over the image area.

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
};

use crate::config::{CELL_SIZE, GRID_AXIS, GRID_X_OFFSET};
use crate::interpolate::RenderBuffer;
use crate::palette;

/// The image-area display cells and their last-drawn colors.
pub struct RenderGrid {
    /// Row-major display cells; `None` until first drawn (or invalidated).
    colors: [[Option<Rgb565>; GRID_AXIS]; GRID_AXIS],
}

impl RenderGrid {
    /// Create a grid with every cell undrawn.
    pub const fn new() -> Self {
        Self {
            colors: [[None; GRID_AXIS]; GRID_AXIS],
        }
    }

    /// Forget all stored colors so the next [`RenderGrid::update`] repaints
    /// every cell. Call after anything else has drawn over the image area.
    pub fn invalidate(&mut self) {
        self.colors = [[None; GRID_AXIS]; GRID_AXIS];
    }

    /// Recompute cell colors from the normalized buffer and redraw only the
    /// cells that changed. Returns the number of cells written.
    pub fn update<D>(&mut self, display: &mut D, data: &RenderBuffer, selfie: bool) -> u32
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let mut drawn = 0;

        for row in 0..GRID_AXIS {
            for col in 0..GRID_AXIS {
                let value = if selfie {
                    data[GRID_AXIS - 1 - row][col]
                } else {
                    data[GRID_AXIS - 1 - row][GRID_AXIS - 1 - col]
                };
                let color = palette::resolve(value);

                if self.colors[row][col] != Some(color) {
                    Self::fill_cell(display, row, col, color);
                    self.colors[row][col] = Some(color);
                    drawn += 1;
                }
            }
        }

        drawn
    }

    /// Stored color of one display cell (row-major display coordinates).
    #[cfg(test)]
    const fn stored(&self, row: usize, col: usize) -> Option<Rgb565> {
        self.colors[row][col]
    }

    fn fill_cell<D>(display: &mut D, row: usize, col: usize, color: Rgb565)
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let x = GRID_X_OFFSET as i32 + col as i32 * CELL_SIZE as i32;
        let y = row as i32 * CELL_SIZE as i32;
        Rectangle::new(Point::new(x, y), Size::new(CELL_SIZE, CELL_SIZE))
            .into_styled(PrimitiveStyle::with_fill(color))
            .draw(display)
            .ok();
    }
}

impl Default for RenderGrid {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
