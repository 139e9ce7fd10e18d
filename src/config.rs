//! Application configuration constants.
//!
//! Everything the camera reads once at startup lives here: sensor and render
//! grid axes, the spectral palette size, the default display range, the
//! mirror ("selfie") flag, and the screen layout. Layout values such as
//! `CELL_SIZE` and `GRID_X_OFFSET` are computed at compile time as `const`
//! so the render loop never repeats the arithmetic.

use std::time::Duration;

// =============================================================================
// Sensor Configuration
// =============================================================================

/// Thermal sensor grid axis size; the AMG8833 sensor is 8x8.
pub const SENSOR_AXIS: usize = 8;

/// Valid physical interval for sensor readings (Celsius).
/// Readings outside this interval are clamped, never rejected.
pub const SENSOR_MIN_C: f32 = 0.0;
pub const SENSOR_MAX_C: f32 = 80.0;

// =============================================================================
// Display Grid Configuration
// =============================================================================

/// Render grid axis size: one interpolated cell between each sensor pair.
pub const GRID_AXIS: usize = (2 * SENSOR_AXIS) - 1;

/// Number of display colors in the spectral palette (must be > 0).
pub const PALETTE_SIZE: u32 = 100;

/// Mirror the image left-right for self-view ("selfie") orientation.
pub const SELFIE: bool = false;

// =============================================================================
// Display Range Configuration (display unit: Fahrenheit)
// =============================================================================

/// Default display range lower bound.
pub const MIN_RANGE_F: f32 = 60.0;

/// Default display range upper bound.
pub const MAX_RANGE_F: f32 = 120.0;

// =============================================================================
// Screen Layout (PyBadge/PyGamer panel geometry)
// =============================================================================

/// Display width in pixels.
pub const SCREEN_WIDTH: u32 = 160;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 128;

/// Axis size (pixels) for the square image area.
pub const GRID_SIZE: u32 = SCREEN_HEIGHT;

/// Right-align the image area with the display boundary; the strip to the
/// left is the numeric readout sidebar.
pub const GRID_X_OFFSET: u32 = SCREEN_WIDTH - GRID_SIZE;

/// Size of one display cell in pixels.
pub const CELL_SIZE: u32 = GRID_SIZE / GRID_AXIS as u32;

/// X coordinate of the status text, centered over the image area.
pub const STATUS_X: i32 = (GRID_X_OFFSET + GRID_SIZE / 2) as i32;

/// Y coordinate of the status text.
pub const STATUS_Y: i32 = (SCREEN_HEIGHT / 2) as i32;

// =============================================================================
// Timing Configuration
// =============================================================================

/// Target frame time. The AMG8833 refreshes at 10 Hz, so there is nothing to
/// gain from spinning faster than that.
pub const FRAME_TIME: Duration = Duration::from_millis(100);

/// Frames between performance report prints.
pub const PERF_REPORT_INTERVAL: u64 = 50;

/// Duration of the `-HOLD-` flash shown on every held frame.
pub const HOLD_FLASH: Duration = Duration::from_millis(250);

/// Duration of the `FOCUS` / `ORIG` flash on a focus toggle.
pub const FOCUS_FLASH: Duration = Duration::from_millis(200);

/// Duration of the `IRON` palette flash during startup.
pub const SPLASH_FLASH: Duration = Duration::from_millis(750);

// The two-pass interpolation assumes the render grid is exactly one midpoint
// per sensor pair; anything else is a construction bug.
const _: () = assert!(GRID_AXIS == 2 * SENSOR_AXIS - 1);
const _: () = assert!(PALETTE_SIZE > 0);

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_axis() {
        // 8x8 sensor upsamples to a 15x15 render grid
        assert_eq!(GRID_AXIS, 15, "GRID_AXIS should be 2*SENSOR_AXIS - 1");
    }

    #[test]
    fn test_cell_geometry() {
        // 128px image area / 15 cells = 8px cells, right-aligned on screen
        assert_eq!(CELL_SIZE, 8, "CELL_SIZE should be 8px");
        assert_eq!(GRID_X_OFFSET, 32, "image area should leave a 32px sidebar");
        assert!(
            GRID_X_OFFSET + CELL_SIZE * GRID_AXIS as u32 <= SCREEN_WIDTH,
            "image cells must fit on screen"
        );
    }

    #[test]
    fn test_clamp_interval() {
        assert!(SENSOR_MIN_C < SENSOR_MAX_C, "clamp interval must be non-degenerate");
    }

    #[test]
    fn test_default_range() {
        assert!(MIN_RANGE_F < MAX_RANGE_F, "default display range must be non-degenerate");
    }
}
