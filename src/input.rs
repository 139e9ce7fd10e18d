//! Button events and the Hold/Focus mode state machine.
//!
//! The input collaborator reports at most one [`PressEvent`] per poll. The
//! state machine keeps two orthogonal flags: `hold` freezes acquisition,
//! `focus` locks the display range onto the current frame. Both can be
//! active at once, so they are not an enum.
//!
//! Handling an event is a pure state transition that returns a [`Feedback`]
//! describing the confirmation tone and status flash to perform; the frame
//! loop owns the actual speaker and display calls. The Set button is
//! recognized and accepted but has no behavior yet.

use std::time::Duration;

use crate::audio::{FOCUS_TONE, HOLD_TONE, Tone};
use crate::config::FOCUS_FLASH;
use crate::grid::FrameStats;
use crate::range::RangeMapper;

/// Front panel buttons the camera recognizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Button {
    /// Freeze/unfreeze acquisition (button A).
    Hold,
    /// Toggle auto-ranging onto the current frame (button B).
    Focus,
    /// Reserved (START button); accepted without effect.
    Set,
}

/// One event from the input collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PressEvent {
    pub button: Button,
    /// `true` on press, `false` on release. Only presses act.
    pub pressed: bool,
}

/// A status flash request for the frame loop to perform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusFlash {
    pub text: &'static str,
    pub duration: Duration,
}

/// Confirmation actions produced by a state transition.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Feedback {
    pub tone: Option<Tone>,
    pub flash: Option<StatusFlash>,
}

/// The two operator-controlled display modes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DisplayModes {
    /// Acquisition frozen; the last frame stays on screen.
    pub hold: bool,
    /// Display range locked to the extrema captured at focus entry.
    pub focus: bool,
}

impl DisplayModes {
    /// Both modes off.
    pub const fn new() -> Self {
        Self {
            hold: false,
            focus: false,
        }
    }

    /// Apply one input event.
    ///
    /// Focus transitions drive `range` directly: entry snapshots the current
    /// frame's extrema, exit restores the saved fixed range. `stats` must be
    /// the stats of the frame currently on screen.
    pub fn handle_event(
        &mut self,
        event: PressEvent,
        range: &mut RangeMapper,
        stats: &FrameStats,
    ) -> Feedback {
        if !event.pressed {
            return Feedback::default();
        }

        match event.button {
            Button::Hold => {
                self.hold = !self.hold;
                Feedback {
                    tone: Some(HOLD_TONE),
                    flash: None,
                }
            }
            Button::Focus => {
                self.focus = !self.focus;
                let text = if self.focus {
                    range.enter_focus(stats.min_c, stats.max_c);
                    "FOCUS"
                } else {
                    range.exit_focus();
                    "ORIG"
                };
                Feedback {
                    tone: Some(FOCUS_TONE),
                    flash: Some(StatusFlash {
                        text,
                        duration: FOCUS_FLASH,
                    }),
                }
            }
            Button::Set => Feedback::default(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio;

    fn press(button: Button) -> PressEvent {
        PressEvent { button, pressed: true }
    }

    fn stats(min_c: f32, max_c: f32) -> FrameStats {
        FrameStats {
            min_c,
            max_c,
            mean_c: (min_c + max_c) / 2.0,
        }
    }

    // -------------------------------------------------------------------------
    // Hold Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_hold_toggles() {
        let mut modes = DisplayModes::new();
        let mut range = RangeMapper::from_fahrenheit(60.0, 120.0);
        let frame = stats(20.0, 30.0);

        let fb = modes.handle_event(press(Button::Hold), &mut range, &frame);
        assert!(modes.hold, "first press engages hold");
        assert_eq!(fb.tone, Some(audio::HOLD_TONE));
        assert!(fb.flash.is_none(), "the -HOLD- flash is per-frame, not per-press");

        modes.handle_event(press(Button::Hold), &mut range, &frame);
        assert!(!modes.hold, "second press returns hold to its original value");
    }

    #[test]
    fn test_hold_leaves_range_alone() {
        let mut modes = DisplayModes::new();
        let mut range = RangeMapper::from_fahrenheit(60.0, 120.0);
        let before = range.bounds_f();

        modes.handle_event(press(Button::Hold), &mut range, &stats(20.0, 30.0));
        assert_eq!(range.bounds_f(), before, "hold must not touch the display range");
    }

    // -------------------------------------------------------------------------
    // Focus Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_focus_enter_exit_restores_range() {
        let mut modes = DisplayModes::new();
        let mut range = RangeMapper::from_fahrenheit(60.0, 120.0);
        let before_f = range.bounds_f();
        let before_c = range.bounds_c();
        let frame = stats(18.5, 29.5);

        let fb = modes.handle_event(press(Button::Focus), &mut range, &frame);
        assert!(modes.focus);
        assert!(range.is_auto(), "focus entry switches to the auto range");
        assert_eq!(range.bounds_c(), (18.5, 29.5));
        assert_eq!(fb.tone, Some(audio::FOCUS_TONE));
        assert_eq!(fb.flash.map(|f| f.text), Some("FOCUS"));

        let fb = modes.handle_event(press(Button::Focus), &mut range, &frame);
        assert!(!modes.focus);
        assert_eq!(range.bounds_f(), before_f, "exit restores the fixed range bit-for-bit");
        assert_eq!(range.bounds_c(), before_c);
        assert_eq!(fb.flash.map(|f| f.text), Some("ORIG"));
    }

    #[test]
    fn test_hold_and_focus_combine() {
        // The flags are orthogonal; both active at once is valid
        let mut modes = DisplayModes::new();
        let mut range = RangeMapper::from_fahrenheit(60.0, 120.0);
        let frame = stats(20.0, 30.0);

        modes.handle_event(press(Button::Hold), &mut range, &frame);
        modes.handle_event(press(Button::Focus), &mut range, &frame);
        assert!(modes.hold && modes.focus, "hold and focus can be active simultaneously");
    }

    // -------------------------------------------------------------------------
    // Set Button / Release Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_set_is_accepted_and_inert() {
        let mut modes = DisplayModes::new();
        let mut range = RangeMapper::from_fahrenheit(60.0, 120.0);

        let fb = modes.handle_event(press(Button::Set), &mut range, &stats(20.0, 30.0));
        assert_eq!(fb, Feedback::default(), "set produces no feedback");
        assert_eq!(modes, DisplayModes::new(), "set changes no mode");
    }

    #[test]
    fn test_release_events_ignored() {
        let mut modes = DisplayModes::new();
        let mut range = RangeMapper::from_fahrenheit(60.0, 120.0);
        let release = PressEvent {
            button: Button::Hold,
            pressed: false,
        };

        let fb = modes.handle_event(release, &mut range, &stats(20.0, 30.0));
        assert!(!modes.hold, "releases must not toggle");
        assert_eq!(fb, Feedback::default());
    }
}
