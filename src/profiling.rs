//! Frame timing metrics and the debug event log.
//!
//! Each loop iteration records how long the four pipeline phases took
//! (acquire, stats, convert, display) along with min/max and an exponential
//! moving average of the whole frame time. The frame
//! loop prints a report every [`crate::config::PERF_REPORT_INTERVAL`] frames
//! and drains [`DebugLog`] alongside it.
//!
//! [`DebugLog`] is a bounded heapless ring buffer; when full, the oldest
//! entry is dropped. Mode toggles, focus range captures, and startup
//! milestones land here.

use core::fmt::Write;
use std::time::Duration;

use heapless::{Deque, String};

// =============================================================================
// Debug Log Configuration
// =============================================================================

/// Maximum number of pending log lines.
pub const LOG_BUFFER_SIZE: usize = 8;

/// Maximum characters per log line.
pub const LOG_LINE_LENGTH: usize = 48;

// =============================================================================
// Frame Metrics
// =============================================================================

/// Per-phase timing for one frame plus running statistics.
pub struct FrameMetrics {
    /// Latest per-phase durations (microseconds).
    pub acquire_us: u32,
    pub stats_us: u32,
    pub convert_us: u32,
    pub display_us: u32,
    /// Latest whole-frame duration.
    pub frame_us: u32,

    /// Extremes over the run.
    pub frame_min_us: u32,
    pub frame_max_us: u32,
    /// Exponential moving average of the frame time.
    frame_avg_us: f32,

    /// Frames rendered since startup.
    pub total_frames: u64,
    /// Image cells written last frame (diff-update effectiveness).
    pub cells_drawn: u32,
}

impl FrameMetrics {
    /// Smoothing factor for the frame-time moving average.
    const EMA_ALPHA: f32 = 0.1;

    pub const fn new() -> Self {
        Self {
            acquire_us: 0,
            stats_us: 0,
            convert_us: 0,
            display_us: 0,
            frame_us: 0,
            frame_min_us: u32::MAX,
            frame_max_us: 0,
            frame_avg_us: 0.0,
            total_frames: 0,
            cells_drawn: 0,
        }
    }

    /// Record one frame's phase timings.
    pub fn record_frame(
        &mut self,
        acquire: Duration,
        stats: Duration,
        convert: Duration,
        display: Duration,
        total: Duration,
        cells_drawn: u32,
    ) {
        self.acquire_us = acquire.as_micros() as u32;
        self.stats_us = stats.as_micros() as u32;
        self.convert_us = convert.as_micros() as u32;
        self.display_us = display.as_micros() as u32;
        self.cells_drawn = cells_drawn;

        let total_us = total.as_micros() as u32;
        self.frame_us = total_us;
        if total_us < self.frame_min_us {
            self.frame_min_us = total_us;
        }
        if total_us > self.frame_max_us {
            self.frame_max_us = total_us;
        }

        if self.total_frames == 0 {
            self.frame_avg_us = total_us as f32;
        } else {
            self.frame_avg_us =
                Self::EMA_ALPHA.mul_add(total_us as f32, (1.0 - Self::EMA_ALPHA) * self.frame_avg_us);
        }

        self.total_frames += 1;
    }

    /// Average frame time in microseconds.
    #[inline]
    pub const fn frame_avg_us(&self) -> u32 {
        self.frame_avg_us as u32
    }

    /// One-line performance report: frame counter, current frame time with
    /// per-phase breakdown, running average/min/max, achieved rate, and how
    /// many image cells the diff-update actually wrote.
    pub fn report_line(&self) -> String<160> {
        let mut line: String<160> = String::new();
        let avg_ms = self.frame_avg_us() as f32 / 1000.0;
        let rate = if self.frame_avg_us() > 0 {
            1_000_000.0 / self.frame_avg_us() as f32
        } else {
            0.0
        };
        let _ = write!(
            line,
            "frame {:>6}: {:>5.1} ms (acquire {:.1} stats {:.1} convert {:.1} display {:.1}) | avg {avg_ms:.1} min {:.1} max {:.1} ms {rate:>4.1}/s | {} cells",
            self.total_frames,
            self.frame_us as f32 / 1000.0,
            self.acquire_us as f32 / 1000.0,
            self.stats_us as f32 / 1000.0,
            self.convert_us as f32 / 1000.0,
            self.display_us as f32 / 1000.0,
            self.frame_min_us as f32 / 1000.0,
            self.frame_max_us as f32 / 1000.0,
            self.cells_drawn,
        );
        line
    }
}

impl Default for FrameMetrics {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Debug Log Ring Buffer
// =============================================================================

/// Bounded ring buffer of debug messages; oldest entries drop when full.
pub struct DebugLog {
    buffer: Deque<String<LOG_LINE_LENGTH>, LOG_BUFFER_SIZE>,
}

impl DebugLog {
    pub const fn new() -> Self {
        Self { buffer: Deque::new() }
    }

    /// Push a message, truncating to the line length; drops the oldest
    /// entry if the buffer is full.
    pub fn push(&mut self, msg: &str) {
        if self.buffer.is_full() {
            self.buffer.pop_front();
        }

        let mut line: String<LOG_LINE_LENGTH> = String::new();
        for (i, c) in msg.chars().enumerate() {
            if i >= LOG_LINE_LENGTH - 1 {
                break;
            }
            line.push(c).ok();
        }
        self.buffer.push_back(line).ok();
    }

    /// Pop the oldest pending message.
    pub fn pop(&mut self) -> Option<String<LOG_LINE_LENGTH>> {
        self.buffer.pop_front()
    }

    #[inline]
    #[allow(dead_code)]
    pub const fn len(&self) -> usize {
        self.buffer.len()
    }

    #[inline]
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

impl Default for DebugLog {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_new() {
        let metrics = FrameMetrics::new();
        assert_eq!(metrics.total_frames, 0);
        assert_eq!(metrics.frame_min_us, u32::MAX);
        assert_eq!(metrics.frame_max_us, 0);
    }

    #[test]
    fn test_record_frame() {
        let mut metrics = FrameMetrics::new();
        metrics.record_frame(
            Duration::from_micros(2000),
            Duration::from_micros(100),
            Duration::from_micros(400),
            Duration::from_micros(1500),
            Duration::from_micros(4000),
            12,
        );

        assert_eq!(metrics.total_frames, 1);
        assert_eq!(metrics.acquire_us, 2000);
        assert_eq!(metrics.display_us, 1500);
        assert_eq!(metrics.frame_us, 4000);
        assert_eq!(metrics.frame_min_us, 4000);
        assert_eq!(metrics.frame_max_us, 4000);
        assert_eq!(metrics.cells_drawn, 12);
        assert_eq!(metrics.frame_avg_us(), 4000, "first frame seeds the average");
    }

    #[test]
    fn test_frame_min_max() {
        let mut metrics = FrameMetrics::new();
        for us in [4000u64, 2500, 6000] {
            metrics.record_frame(
                Duration::ZERO,
                Duration::ZERO,
                Duration::ZERO,
                Duration::ZERO,
                Duration::from_micros(us),
                0,
            );
        }
        assert_eq!(metrics.frame_min_us, 2500);
        assert_eq!(metrics.frame_max_us, 6000);
    }

    #[test]
    fn test_report_line_fits() {
        let mut metrics = FrameMetrics::new();
        metrics.record_frame(
            Duration::from_micros(123_456),
            Duration::from_micros(99_999),
            Duration::from_micros(99_999),
            Duration::from_micros(99_999),
            Duration::from_micros(423_453),
            225,
        );
        let line = metrics.report_line();
        assert!(!line.is_empty(), "report must not be truncated to nothing");
        assert!(line.contains("acquire"));
    }

    #[test]
    fn test_debug_log_ring() {
        let mut log = DebugLog::new();
        for i in 0..LOG_BUFFER_SIZE + 2 {
            let mut msg: String<16> = String::new();
            let _ = write!(msg, "event {i}");
            log.push(&msg);
        }
        assert_eq!(log.len(), LOG_BUFFER_SIZE, "buffer is bounded");
        let oldest = log.pop().unwrap();
        assert_eq!(oldest.as_str(), "event 2", "oldest entries drop first");
    }

    #[test]
    fn test_debug_log_truncation() {
        let mut log = DebugLog::new();
        log.push("a message far longer than the configured line length limit allows for");
        let stored = log.pop().unwrap();
        assert!(stored.len() < LOG_LINE_LENGTH);
    }

    #[test]
    fn test_debug_log_drain() {
        let mut log = DebugLog::new();
        log.push("one");
        log.push("two");
        assert_eq!(log.pop().unwrap().as_str(), "one");
        assert_eq!(log.pop().unwrap().as_str(), "two");
        assert!(log.pop().is_none());
        assert!(log.is_empty());
    }
}
