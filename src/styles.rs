//! Pre-computed static text styles.
//!
//! `MonoTextStyle` and `TextStyle` construction is cheap but repeated every
//! frame in the readout path; both constructors are const fn in
//! embedded-graphics 0.8, so the styles live in the binary's read-only data
//! instead. All text uses ProFont 9pt, which fits the 32px sidebar at this
//! panel size.

use embedded_graphics::{
    mono_font::MonoTextStyle,
    pixelcolor::Rgb565,
    text::{Alignment, Baseline, TextStyle, TextStyleBuilder},
};
use profont::PROFONT_9_POINT;

use crate::colors::{CYAN, RED, WHITE, YELLOW};

// =============================================================================
// Text Alignment Styles
// =============================================================================

/// Left-aligned, top-anchored text. Used for the sidebar labels and values.
pub const LEFT_TOP: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Top)
    .build();

/// Centered text anchored at its middle. Used for status flashes.
pub const CENTERED: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Middle)
    .build();

// =============================================================================
// Character Styles
// =============================================================================

/// Red sidebar text ("max" label and value).
pub const TEXT_RED: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_9_POINT, RED);

/// Yellow sidebar text ("ave" label and value).
pub const TEXT_YELLOW: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_9_POINT, YELLOW);

/// Cyan sidebar text ("min" label and value).
pub const TEXT_CYAN: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_9_POINT, CYAN);

/// White text for status flashes over the image area.
pub const TEXT_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_9_POINT, WHITE);
