//! 2x bilinear upsampling of the normalized sensor grid.
//!
//! The render buffer is a 15x15 grid whose even row/column positions hold
//! the range-mapped 8x8 sensor samples; everything else is filled in place
//! by two separable passes:
//!
//! 1. every odd row, even columns only: average of the samples directly
//!    above and below;
//! 2. every row, odd columns: average of the left and right neighbors
//!    (which pass 1 has already filled on odd rows).
//!
//! Pass order matters: pass 2 reads pass 1's output, which leaves each
//! odd/odd interior point equal to the blend of its four diagonal sensor
//! neighbors. The grid is exactly `2S-1` per axis, so no edge extrapolation
//! is ever needed, and nothing allocates.

use crate::config::{GRID_AXIS, SENSOR_AXIS};
use crate::grid::TemperatureGrid;
use crate::range::RangeMapper;

/// The display-resolution working buffer of normalized values.
pub type RenderBuffer = [[f32; GRID_AXIS]; GRID_AXIS];

/// Write the range-mapped sensor samples into the stride-2 positions of the
/// render buffer. Odd positions are left for [`upsample`].
pub fn load_samples(buffer: &mut RenderBuffer, grid: &TemperatureGrid, range: &RangeMapper) {
    for row in 0..SENSOR_AXIS {
        for col in 0..SENSOR_AXIS {
            buffer[row * 2][col * 2] = range.normalize(grid.get(row, col));
        }
    }
}

/// Fill the odd positions of an upsampling grid in place.
///
/// Generic over the axis length so the two-pass rule can be exercised on
/// small grids in tests; `N` must be odd (one midpoint per sample pair).
/// Re-running the passes never touches the stride-2 originals and reproduces
/// the same interpolated values.
pub fn upsample<const N: usize>(buffer: &mut [[f32; N]; N]) {
    debug_assert!(N % 2 == 1, "upsampling grid must have 2S-1 cells per axis");

    // Pass 1: vertical midpoints on even columns
    for row in (1..N).step_by(2) {
        for col in (0..N).step_by(2) {
            buffer[row][col] = (buffer[row - 1][col] + buffer[row + 1][col]) / 2.0;
        }
    }

    // Pass 2: horizontal midpoints on every row, odd rows included
    for row in 0..N {
        for col in (1..N).step_by(2) {
            buffer[row][col] = (buffer[row][col - 1] + buffer[row][col + 1]) / 2.0;
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
