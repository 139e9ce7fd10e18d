//! Color constants for the sidebar readout and status text.
//!
//! The false-color image itself comes from the iron palette in
//! [`crate::palette`]; these are only the fixed UI colors.
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! This format is native to the PyBadge's ST7735 panel, so no conversion is
//! needed when writing to the display buffer.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

/// Pure black (0, 0, 0). Background and cleared text.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white (31, 63, 31). Status flash text.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure red (31, 0, 0). "max" readout.
pub const RED: Rgb565 = Rgb565::RED;

/// Pure yellow (31, 63, 0). "ave" readout.
pub const YELLOW: Rgb565 = Rgb565::YELLOW;

/// Pure cyan (0, 63, 31). "min" readout.
pub const CYAN: Rgb565 = Rgb565::CYAN;
