// Crate-level lints: allow the usual embedded/graphics cast patterns
#![allow(clippy::cast_possible_truncation)] // f32->u32/i32 casts in pixel and timing math
#![allow(clippy::cast_precision_loss)] // u32/usize->f32 in grid calculations
#![allow(clippy::cast_sign_loss)] // i32->u32 where the sign is known positive

//! Thermal camera display for an AMG8833 8x8 infrared sensor.
//!
//! Renders the sensor's coarse temperature grid as a 15x15 false-color
//! image on a 160x128 panel (PyBadge/PyGamer geometry, hosted in the
//! embedded-graphics simulator), with a live max/ave/min readout and two
//! operator-controlled display modes.
//!
//! # Frame Pipeline
//!
//! Every iteration runs the same fixed sequence, each stage feeding the
//! next:
//!
//! ```text
//! acquire -> clamp -> stats -> normalize -> interpolate -> diff-render
//!                       |
//!                       +-> sidebar readout (degrees F)
//! ```
//!
//! - **acquire**: one 8x8 Celsius frame from the sensor, clamped to the
//!   physical interval; skipped entirely while Hold is active.
//! - **stats**: min/max/mean of the frame, shown in the sidebar.
//! - **normalize**: map each temperature into the active display range.
//! - **interpolate**: two-pass bilinear upsample to 15x15.
//! - **diff-render**: quantize to the 100-step iron palette and redraw only
//!   the display cells whose color changed.
//!
//! Input is polled once per frame (at most one button event) and mode
//! transitions apply after rendering, so a press takes effect on the next
//! frame.
//!
//! # Display Layout
//!
//! ```text
//! ┌─────────┬───────────────────────────┐
//! │ max     │                           │
//! │ 102.4   │                           │
//! │ ave     │      15 x 15 thermal      │
//! │  84.1   │      image (128x128)      │
//! │ min     │                           │
//! │  71.3   │                           │
//! └─────────┴───────────────────────────┘
//!   32px sidebar        128px image
//! ```
//!
//! # Controls (Simulator Mode)
//!
//! | Button | Key     | Action                                        |
//! |--------|---------|-----------------------------------------------|
//! | A      | `A`     | Toggle Hold (freeze acquisition)              |
//! | B      | `B`     | Toggle Focus (auto-range on current frame)    |
//! | START  | `Enter` | Set (reserved, accepted without effect)       |
//!
//! Hold and Focus are independent and can be active at the same time.
//! Key repeat is ignored to prevent toggle spam when holding keys.

mod audio;
mod colors;
mod config;
mod grid;
mod input;
mod interpolate;
mod palette;
mod profiling;
mod range;
mod render;
mod screens;
mod sensor;
mod styles;
mod units;
mod widgets;

use core::fmt::Write;
use std::thread;
use std::time::Instant;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use heapless::String;

use audio::play_tone;
use colors::BLACK;
use config::{
    FRAME_TIME, GRID_AXIS, HOLD_FLASH, MAX_RANGE_F, MIN_RANGE_F, PERF_REPORT_INTERVAL, SCREEN_HEIGHT, SCREEN_WIDTH,
    SELFIE,
};
use grid::TemperatureGrid;
use input::{Button, DisplayModes, PressEvent};
use interpolate::{RenderBuffer, load_samples, upsample};
use profiling::{DebugLog, FrameMetrics};
use range::RangeMapper;
use render::RenderGrid;
use screens::run_splash;
use sensor::{SimulatedAmg8833, ThermalSensor};
use widgets::{Sidebar, flash_status};

fn main() {
    // Display and window (simulator mode, 3x scale for desktop visibility)
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(3).build();
    let mut window = Window::new("Thermal Camera Lite", &output_settings);

    display.clear(BLACK).ok();
    window.update(&display);

    // ==========================================================================
    // Session State
    // ==========================================================================

    let mut sensor = SimulatedAmg8833::new();
    let mut grid = TemperatureGrid::new();
    let mut buffer: RenderBuffer = [[0.0; GRID_AXIS]; GRID_AXIS];
    let mut range = RangeMapper::from_fahrenheit(MIN_RANGE_F, MAX_RANGE_F);
    let mut image = RenderGrid::new();
    let mut sidebar = Sidebar::new();
    let mut modes = DisplayModes::new();

    let mut metrics = FrameMetrics::new();
    let mut debug_log = DebugLog::new();

    // Startup: sidebar labels, welcome tones, palette preview
    sidebar.draw_labels(&mut display);
    if !run_splash(&mut display, &mut window, &mut image, &mut debug_log) {
        return;
    }
    debug_log.push("System started");

    // ==========================================================================
    // Primary Process Loop
    // ==========================================================================

    loop {
        let frame_start = Instant::now();

        // 1) Acquire a fresh frame, or keep the held one on screen
        if modes.hold {
            flash_status(&mut display, &mut window, &mut image, "-HOLD-", HOLD_FLASH);
        } else {
            grid.load(sensor.read());
        }
        let t_acquire = frame_start.elapsed();

        // 2) Statistics and sidebar readout
        let stats = grid.stats();
        sidebar.update_values(&mut display, &stats);
        let t_stats = frame_start.elapsed();

        // 3+4) Normalize into the stride-2 grid, then interpolate
        load_samples(&mut buffer, &grid, &range);
        upsample(&mut buffer);
        let t_convert = frame_start.elapsed();

        // 5) Redraw only the display cells whose color changed
        let cells_drawn = image.update(&mut display, &buffer, SELFIE);
        let t_display = frame_start.elapsed();

        // 6) Poll input: at most one button event per frame
        let mut event: Option<PressEvent> = None;
        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    // Ignore OS key repeat to prevent toggle spam
                    if repeat {
                        continue;
                    }
                    let button = match keycode {
                        Keycode::A => Some(Button::Hold),
                        Keycode::B => Some(Button::Focus),
                        Keycode::Return => Some(Button::Set),
                        _ => None,
                    };
                    if event.is_none()
                        && let Some(button) = button
                    {
                        event = Some(PressEvent { button, pressed: true });
                    }
                }
                _ => {}
            }
        }

        // 7) Apply mode transitions and perform the confirmation feedback
        if let Some(event) = event {
            let feedback = modes.handle_event(event, &mut range, &stats);

            match event.button {
                Button::Hold => debug_log.push(if modes.hold { "Hold: ON" } else { "Hold: OFF" }),
                Button::Focus => {
                    let (lo_f, hi_f) = range.bounds_f();
                    let mut msg: String<48> = String::new();
                    let label = if range.is_auto() { "Focus range" } else { "Fixed range" };
                    let _ = write!(msg, "{label} {lo_f:.1}-{hi_f:.1} F");
                    debug_log.push(&msg);
                }
                Button::Set => {}
            }

            if let Some(tone) = feedback.tone {
                play_tone(tone, &mut debug_log);
            }
            if let Some(flash) = feedback.flash {
                flash_status(&mut display, &mut window, &mut image, flash.text, flash.duration);
            }
        }

        // ======================================================================
        // Frame Timing and Report
        // ======================================================================

        metrics.record_frame(
            t_acquire,
            t_stats - t_acquire,
            t_convert - t_stats,
            t_display - t_convert,
            frame_start.elapsed(),
            cells_drawn,
        );
        if metrics.total_frames.is_multiple_of(PERF_REPORT_INTERVAL) {
            println!("{}", metrics.report_line());
            while let Some(line) = debug_log.pop() {
                println!("  [log] {line}");
            }
        }

        window.update(&display);

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_TIME {
            thread::sleep(FRAME_TIME - elapsed);
        }
    }
}
