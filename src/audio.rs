//! Audible feedback tones.
//!
//! The hardware plays square-wave tones over the PyBadge speaker; the
//! simulator has no speaker, so [`play_tone`] keeps only the contract the
//! frame loop depends on: fire-and-forget, blocking for the tone's duration.
//! The tone itself goes to the debug log. Tone descriptors are const so
//! button handling can hand them around without allocation.

use core::fmt::Write;
use std::thread;
use std::time::Duration;

use heapless::String;

use crate::profiling::DebugLog;

/// A tone request for the speaker collaborator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tone {
    pub frequency_hz: f32,
    pub duration: Duration,
}

/// Musical note A4; first welcome tone.
pub const WELCOME_LOW: Tone = Tone {
    frequency_hz: 440.0,
    duration: Duration::from_millis(100),
};

/// Musical note A5; second welcome tone and the ready blip after splash.
pub const WELCOME_HIGH: Tone = Tone {
    frequency_hz: 880.0,
    duration: Duration::from_millis(100),
};

/// Musical note A5, short form; played once the splash completes.
pub const READY_BLIP: Tone = Tone {
    frequency_hz: 880.0,
    duration: Duration::from_millis(10),
};

/// Musical note E6; Hold toggle confirmation.
pub const HOLD_TONE: Tone = Tone {
    frequency_hz: 1319.0,
    duration: Duration::from_millis(30),
};

/// Musical note F5; Focus toggle confirmation.
pub const FOCUS_TONE: Tone = Tone {
    frequency_hz: 698.0,
    duration: Duration::from_millis(30),
};

/// Play a tone: blocks the loop for the tone's duration, exactly as the
/// hardware tone generator does.
pub fn play_tone(tone: Tone, log: &mut DebugLog) {
    let mut msg: String<32> = String::new();
    let _ = write!(msg, "tone {:.0} Hz {} ms", tone.frequency_hz, tone.duration.as_millis());
    log.push(&msg);
    thread::sleep(tone.duration);
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirmation_tones_distinct() {
        // Hold and Focus must be audibly distinguishable
        assert_ne!(
            HOLD_TONE.frequency_hz, FOCUS_TONE.frequency_hz,
            "hold and focus tones share a pitch"
        );
    }

    #[test]
    fn test_tones_bounded() {
        // Tones block the frame loop; keep them well under a frame-flash
        for tone in [WELCOME_LOW, WELCOME_HIGH, READY_BLIP, HOLD_TONE, FOCUS_TONE] {
            assert!(
                tone.duration <= Duration::from_millis(200),
                "tone at {} Hz blocks too long",
                tone.frequency_hz
            );
        }
    }
}
