//! Thermal sensor acquisition.
//!
//! [`ThermalSensor`] is the acquisition collaborator contract: one 8x8
//! Celsius frame per call, once per frame loop iteration. There is no retry
//! policy; readings outside the physical interval are clamped downstream by
//! [`crate::grid::TemperatureGrid`].
//!
//! [`SimulatedAmg8833`] stands in for the I2C device in simulator builds: a
//! warm hot spot drifting over a cooler floor, driven entirely by sine
//! functions so every run is deterministic.

use crate::config::SENSOR_AXIS;
use crate::grid::SensorReading;

/// Acquisition collaborator: produces one raw frame per call.
pub trait ThermalSensor {
    fn read(&mut self) -> SensorReading;
}

// =============================================================================
// Simulated Sensor
// =============================================================================

/// Background temperature the scene settles around (Celsius).
const AMBIENT_C: f32 = 22.0;

/// Slow drift amplitude of the background temperature.
const AMBIENT_SWING_C: f32 = 2.0;

/// Peak temperature of the hot spot above ambient.
const SPOT_PEAK_C: f32 = 14.0;

/// Per-read advance of the signal time parameter.
const TIME_STEP: f32 = 0.05;

/// Deterministic stand-in for the AMG8833: a hot spot wandering a Lissajous
/// path across the grid over a slowly breathing ambient floor.
pub struct SimulatedAmg8833 {
    t: f32,
}

impl SimulatedAmg8833 {
    pub const fn new() -> Self {
        Self { t: 0.0 }
    }
}

impl Default for SimulatedAmg8833 {
    fn default() -> Self {
        Self::new()
    }
}

impl ThermalSensor for SimulatedAmg8833 {
    fn read(&mut self) -> SensorReading {
        let t = self.t;
        self.t += TIME_STEP;

        // Hot spot center wanders the full grid on incommensurate frequencies
        let half = (SENSOR_AXIS - 1) as f32 / 2.0;
        let cx = half + half * (t * 0.7).sin();
        let cy = half + half * (t * 0.45).cos();
        let ambient = AMBIENT_C + AMBIENT_SWING_C * (t * 0.1).sin();

        let mut frame = [[0.0f32; SENSOR_AXIS]; SENSOR_AXIS];
        for (row, row_cells) in frame.iter_mut().enumerate() {
            for (col, cell) in row_cells.iter_mut().enumerate() {
                let dx = col as f32 - cx;
                let dy = row as f32 - cy;
                // Rational falloff: 1 at the center, ~0 a few cells out
                let falloff = 1.0 / (1.0 + 0.6 * (dx * dx + dy * dy));
                *cell = ambient + SPOT_PEAK_C * falloff;
            }
        }
        frame
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SENSOR_MAX_C, SENSOR_MIN_C};

    #[test]
    fn test_readings_within_physical_interval() {
        let mut sensor = SimulatedAmg8833::new();
        for _ in 0..200 {
            let frame = sensor.read();
            for row in &frame {
                for &t in row {
                    assert!(
                        (SENSOR_MIN_C..=SENSOR_MAX_C).contains(&t),
                        "simulated reading {t} outside the physical interval"
                    );
                }
            }
        }
    }

    #[test]
    fn test_deterministic_sequence() {
        let mut a = SimulatedAmg8833::new();
        let mut b = SimulatedAmg8833::new();
        for _ in 0..10 {
            assert_eq!(a.read(), b.read(), "two sensors from t=0 must agree");
        }
    }

    #[test]
    fn test_hot_spot_present() {
        let mut sensor = SimulatedAmg8833::new();
        let frame = sensor.read();
        let mut min = f32::MAX;
        let mut max = f32::MIN;
        for row in &frame {
            for &t in row {
                min = min.min(t);
                max = max.max(t);
            }
        }
        assert!(max - min > 5.0, "the hot spot should stand out from ambient");
    }

    #[test]
    fn test_scene_moves() {
        let mut sensor = SimulatedAmg8833::new();
        let first = sensor.read();
        for _ in 0..20 {
            sensor.read();
        }
        let later = sensor.read();
        assert_ne!(first, later, "the scene must change over time");
    }
}
