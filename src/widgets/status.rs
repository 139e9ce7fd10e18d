//! Transient status text flashed over the image area.
//!
//! `flash_status` is the camera's only modal feedback: white text centered
//! over the image, held for the given duration, then cleared with an equal
//! pause. Both pauses block the frame loop, so a new frame never begins
//! mid-flash. Clearing invalidates the render grid so the next frame
//! repaints the image the text covered.

use std::thread;
use std::time::Duration;

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
    text::Text,
};
use embedded_graphics_simulator::{SimulatorDisplay, Window};

use crate::colors::BLACK;
use crate::config::{GRID_SIZE, GRID_X_OFFSET, STATUS_X, STATUS_Y};
use crate::render::RenderGrid;
use crate::styles::{CENTERED, TEXT_WHITE};

/// Height of the band cleared after the flash (one text row plus margin).
const STATUS_BAND_HEIGHT: u32 = 16;

/// Black fill used to erase the status band.
const CLEAR_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(BLACK);

/// Flash a status message once over the image area.
pub fn flash_status(
    display: &mut SimulatorDisplay<Rgb565>,
    window: &mut Window,
    image: &mut RenderGrid,
    text: &str,
    duration: Duration,
) {
    Text::with_text_style(text, Point::new(STATUS_X, STATUS_Y), TEXT_WHITE, CENTERED)
        .draw(display)
        .ok();
    window.update(display);
    thread::sleep(duration);

    // Erase the band and let the next frame repaint the image beneath it
    Rectangle::new(
        Point::new(GRID_X_OFFSET as i32, STATUS_Y - (STATUS_BAND_HEIGHT / 2) as i32),
        Size::new(GRID_SIZE, STATUS_BAND_HEIGHT),
    )
    .into_styled(CLEAR_FILL)
    .draw(display)
    .ok();
    image.invalidate();
    window.update(display);
    thread::sleep(duration);
}
