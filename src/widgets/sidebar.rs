//! Numeric readout sidebar: max / ave / min in Fahrenheit.
//!
//! The 32px strip left of the image shows the frame statistics, color-coded
//! red/yellow/cyan from hottest to coldest. Values are formatted to 0.1 °F;
//! a value is redrawn only when its formatted text changes, so a steady
//! scene costs nothing here.

use core::fmt::Write;

use embedded_graphics::{
    mono_font::MonoTextStyle,
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
    text::Text,
};
use heapless::String;

use crate::colors::BLACK;
use crate::config::GRID_X_OFFSET;
use crate::grid::FrameStats;
use crate::styles::{LEFT_TOP, TEXT_CYAN, TEXT_RED, TEXT_YELLOW};
use crate::units::celsius_to_fahrenheit;

// =============================================================================
// Sidebar Layout Constants
// =============================================================================

/// Left margin for all sidebar text.
const TEXT_X: i32 = 1;

/// Value / label Y positions, top group (max, red).
const MAX_VALUE_Y: i32 = 10;
const MAX_LABEL_Y: i32 = 21;

/// Value / label Y positions, middle group (ave, yellow).
const AVE_VALUE_Y: i32 = 51;
const AVE_LABEL_Y: i32 = 62;

/// Value / label Y positions, bottom group (min, cyan).
const MIN_VALUE_Y: i32 = 93;
const MIN_LABEL_Y: i32 = 104;

/// Height of one cleared text row (ProFont 9pt line height).
const ROW_HEIGHT: u32 = 11;

/// Black fill used to clear a value row before rewriting it.
const CLEAR_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(BLACK);

/// Formatted readout value, e.g. `"102.4"`.
type ValueText = String<8>;

// =============================================================================
// Sidebar State
// =============================================================================

/// Tracks the last text drawn for each readout so unchanged values are
/// never rewritten.
pub struct Sidebar {
    last_max: ValueText,
    last_ave: ValueText,
    last_min: ValueText,
}

impl Sidebar {
    pub const fn new() -> Self {
        Self {
            last_max: ValueText::new(),
            last_ave: ValueText::new(),
            last_min: ValueText::new(),
        }
    }

    /// Draw the three static labels. Call once at startup.
    pub fn draw_labels<D>(&self, display: &mut D)
    where
        D: DrawTarget<Color = Rgb565>,
    {
        Text::with_text_style("max", Point::new(TEXT_X, MAX_LABEL_Y), TEXT_RED, LEFT_TOP)
            .draw(display)
            .ok();
        Text::with_text_style("ave", Point::new(TEXT_X, AVE_LABEL_Y), TEXT_YELLOW, LEFT_TOP)
            .draw(display)
            .ok();
        Text::with_text_style("min", Point::new(TEXT_X, MIN_LABEL_Y), TEXT_CYAN, LEFT_TOP)
            .draw(display)
            .ok();
    }

    /// Push the frame statistics to the readout, converting to the display
    /// unit. Only values whose formatted text changed are redrawn; returns
    /// how many were.
    pub fn update_values<D>(&mut self, display: &mut D, stats: &FrameStats) -> u32
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let max_text = format_value(celsius_to_fahrenheit(stats.max_c));
        let ave_text = format_value(celsius_to_fahrenheit(stats.mean_c));
        let min_text = format_value(celsius_to_fahrenheit(stats.min_c));

        let mut redrawn = 0;
        if max_text != self.last_max {
            draw_value(display, MAX_VALUE_Y, &max_text, TEXT_RED);
            self.last_max = max_text;
            redrawn += 1;
        }
        if ave_text != self.last_ave {
            draw_value(display, AVE_VALUE_Y, &ave_text, TEXT_YELLOW);
            self.last_ave = ave_text;
            redrawn += 1;
        }
        if min_text != self.last_min {
            draw_value(display, MIN_VALUE_Y, &min_text, TEXT_CYAN);
            self.last_min = min_text;
            redrawn += 1;
        }
        redrawn
    }
}

impl Default for Sidebar {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Helpers
// =============================================================================

fn format_value(deg_f: f32) -> ValueText {
    let mut text = ValueText::new();
    let _ = write!(text, "{deg_f:.1}");
    text
}

fn draw_value<D>(display: &mut D, y: i32, text: &str, style: MonoTextStyle<'static, Rgb565>)
where
    D: DrawTarget<Color = Rgb565>,
{
    // Clear the full row first; the new text may be shorter than the old
    Rectangle::new(Point::new(0, y), Size::new(GRID_X_OFFSET, ROW_HEIGHT))
        .into_styled(CLEAR_FILL)
        .draw(display)
        .ok();
    Text::with_text_style(text, Point::new(TEXT_X, y), style, LEFT_TOP)
        .draw(display)
        .ok();
}

// =============================================================================
// Unit Tests
// =============================================================================
