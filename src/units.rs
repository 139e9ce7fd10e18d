//! Celsius/Fahrenheit conversion boundary.
//!
//! The sensor reports Celsius and all normalization math stays in Celsius;
//! the display range is configured and shown in Fahrenheit. These two
//! functions are the only crossing point, and they must be exact inverses to
//! the precision shown on screen (0.1 °F) so that leaving Focus mode restores
//! the configured range without drift.

/// Convert a Celsius temperature to Fahrenheit.
#[inline]
pub fn celsius_to_fahrenheit(deg_c: f32) -> f32 {
    deg_c * 1.8 + 32.0
}

/// Convert a Fahrenheit temperature to Celsius.
#[inline]
pub fn fahrenheit_to_celsius(deg_f: f32) -> f32 {
    (deg_f - 32.0) / 1.8
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Display precision: readout values are formatted to 0.1 degrees.
    const DISPLAY_EPSILON: f32 = 0.05;

    #[test]
    fn test_known_points() {
        assert_eq!(celsius_to_fahrenheit(0.0), 32.0, "freezing point");
        assert_eq!(celsius_to_fahrenheit(100.0), 212.0, "boiling point");
        assert_eq!(celsius_to_fahrenheit(25.0), 77.0, "room temperature");
        assert_eq!(fahrenheit_to_celsius(77.0), 25.0, "room temperature, inverse");
    }

    #[test]
    fn test_round_trip_celsius() {
        // Sweep the sensor's physical range in 0.5 degree steps
        let mut t = 0.0f32;
        while t <= 80.0 {
            let back = fahrenheit_to_celsius(celsius_to_fahrenheit(t));
            assert!(
                (back - t).abs() < DISPLAY_EPSILON,
                "C->F->C drifted at {t}: got {back}"
            );
            t += 0.5;
        }
    }

    #[test]
    fn test_round_trip_fahrenheit() {
        let mut t = 32.0f32;
        while t <= 176.0 {
            let back = celsius_to_fahrenheit(fahrenheit_to_celsius(t));
            assert!(
                (back - t).abs() < DISPLAY_EPSILON,
                "F->C->F drifted at {t}: got {back}"
            );
            t += 0.5;
        }
    }

    #[test]
    fn test_monotonic() {
        assert!(
            celsius_to_fahrenheit(20.0) < celsius_to_fahrenheit(21.0),
            "conversion must preserve ordering"
        );
        assert!(
            fahrenheit_to_celsius(60.0) < fahrenheit_to_celsius(120.0),
            "inverse conversion must preserve ordering"
        );
    }
}
