/// Positional servo output interface

/// Lowest normalized command value accepted by a typical driver
pub const SERVO_MIN_VALUE: f64 = -1.0;

/// Highest normalized command value accepted by a typical driver
pub const SERVO_MAX_VALUE: f64 = 1.0;

/// Neutral (centered) command value
pub const SERVO_NEUTRAL_VALUE: f64 = 0.0;

/// Single positional servo channel
///
/// Values are normalized: -1.0 is one end of travel, 0.0 is center and
/// 1.0 is the other end. Implementations are write-only sinks; what happens
/// to values outside [-1, 1] is up to the driver.
pub trait ServoOutput {
    /// Channel identifier (GPIO number, PWM channel, ...)
    fn channel(&self) -> u8;

    /// Command the servo to a normalized position
    ///
    /// Returns true if the driver accepted the value
    fn set_value(&mut self, value: f64) -> bool;

    /// Last value accepted by the driver, if any
    fn value(&self) -> Option<f64>;

    /// Stop driving the output so the servo holds no position
    fn detach(&mut self) {}
}

/// Whether `value` lies inside the normalized command range
pub fn is_in_range(value: f64) -> bool {
    (SERVO_MIN_VALUE..=SERVO_MAX_VALUE).contains(&value)
}
