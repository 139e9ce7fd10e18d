//! Startup splash: welcome tones and the iron palette preview.
//!
//! Before any sensor data arrives, the render grid is loaded with a diagonal
//! spectrum ramp and drawn through the normal pipeline. This exercises every
//! display cell and the full palette once, and gives the operator a visual
//! reference for the color scale. The `IRON` flash names the active palette.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics_simulator::{SimulatorDisplay, SimulatorEvent, Window};

use crate::audio::{self, play_tone};
use crate::config::{GRID_AXIS, SELFIE, SPLASH_FLASH};
use crate::interpolate::RenderBuffer;
use crate::profiling::DebugLog;
use crate::render::RenderGrid;
use crate::widgets::flash_status;

/// Run the startup sequence. Returns `false` if the window was closed.
pub fn run_splash(
    display: &mut SimulatorDisplay<Rgb565>,
    window: &mut Window,
    image: &mut RenderGrid,
    log: &mut DebugLog,
) -> bool {
    play_tone(audio::WELCOME_LOW, log);
    play_tone(audio::WELCOME_HIGH, log);

    // Diagonal spectrum ramp over every cell: position / cell count
    let mut preview: RenderBuffer = [[0.0; GRID_AXIS]; GRID_AXIS];
    for (row, cells) in preview.iter_mut().enumerate() {
        for (col, value) in cells.iter_mut().enumerate() {
            *value = (row * GRID_AXIS + col) as f32 / (GRID_AXIS * GRID_AXIS) as f32;
        }
    }
    image.update(display, &preview, SELFIE);
    window.update(display);

    for ev in window.events() {
        if matches!(ev, SimulatorEvent::Quit) {
            return false;
        }
    }

    flash_status(display, window, image, "IRON", SPLASH_FLASH);
    play_tone(audio::READY_BLIP, log);
    log.push("Palette preview shown");
    true
}
