//! Conversion between servo angles in degrees and normalized command values.

/// Angle at which a flap sits centered
pub const NEUTRAL_ANGLE: f64 = 90.0;

/// Degrees covered by one unit of command value
const DEGREES_PER_UNIT: f64 = 90.0;

/// Convert an angle in degrees to a servo command value.
///
/// 90° maps to 0, 0° to -1 and 180° to 1. The mapping is linear over all
/// reals and nothing is clamped: 270° becomes 2.0.
pub fn to_command(angle_deg: f64) -> f64 {
    (angle_deg - NEUTRAL_ANGLE) / DEGREES_PER_UNIT
}

/// Convert a servo command value back to an angle in degrees.
pub fn to_angle(command: f64) -> f64 {
    command * DEGREES_PER_UNIT + NEUTRAL_ANGLE
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn test_reference_points() {
        assert_eq!(to_command(90.0), 0.0);
        assert_eq!(to_command(0.0), -1.0);
        assert_eq!(to_command(180.0), 1.0);

        assert_eq!(to_angle(0.0), 90.0);
        assert_eq!(to_angle(-1.0), 0.0);
        assert_eq!(to_angle(1.0), 180.0);
    }

    #[test]
    fn test_round_trip_angle() {
        for angle in [-720.0, -90.0, -0.5, 0.0, 12.25, 50.0, 65.0, 90.0, 120.0, 130.0, 179.9, 180.0, 1e6] {
            let back = to_angle(to_command(angle));
            assert!(close(back, angle), "angle {} came back as {}", angle, back);
        }
    }

    #[test]
    fn test_round_trip_command() {
        for command in [-5.0, -1.0, -0.3333, 0.0, 0.25, 1.0, 3.75, -1e5] {
            let back = to_command(to_angle(command));
            assert!(close(back, command), "command {} came back as {}", command, back);
        }
    }

    #[test]
    fn test_out_of_range_passthrough() {
        // Nothing clamps: 270° is two units past center
        assert_eq!(to_command(270.0), 2.0);
        assert_eq!(to_command(-90.0), -2.0);
        assert_eq!(to_angle(-3.0), -180.0);
    }
}
