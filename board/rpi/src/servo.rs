use std::time::Duration;

use hal::ServoOutput;
use rppal::gpio::OutputPin;

/// Length of one PWM frame (50 Hz)
pub const FRAME: Duration = Duration::from_millis(20);

/// Pulse at value -1.0
pub const MIN_PULSE: Duration = Duration::from_micros(1000);

/// Pulse at value 1.0
pub const MAX_PULSE: Duration = Duration::from_micros(2000);

/// Pulse width for a normalized servo value.
///
/// Returns None for values outside [-1, 1]; the pin cannot produce a pulse
/// outside the servo's calibrated range.
pub fn pulse_width(value: f64) -> Option<Duration> {
    if !value.is_finite() || !hal::is_in_range(value) {
        return None;
    }
    let min = MIN_PULSE.as_nanos() as f64;
    let span = (MAX_PULSE - MIN_PULSE).as_nanos() as f64;
    let nanos = min + (value + 1.0) / 2.0 * span;
    Some(Duration::from_nanos(nanos.round() as u64))
}

/// Hobby servo driven by software PWM on a GPIO pin
pub struct GpioServo {
    pin: OutputPin,
    channel: u8,
    value: Option<f64>,
}

impl GpioServo {
    pub fn new(pin: OutputPin) -> Self {
        let channel = pin.pin();
        GpioServo {
            pin,
            channel,
            value: None,
        }
    }
}

impl ServoOutput for GpioServo {
    fn channel(&self) -> u8 {
        self.channel
    }

    fn set_value(&mut self, value: f64) -> bool {
        let Some(pulse) = pulse_width(value) else {
            log::error!(
                "servo on GPIO {}: value {} outside [-1, 1]",
                self.channel,
                value
            );
            return false;
        };

        match self.pin.set_pwm(FRAME, pulse) {
            Ok(()) => {
                log::debug!("GPIO {}: pulse {:?}", self.channel, pulse);
                self.value = Some(value);
                true
            }
            Err(e) => {
                log::error!("GPIO {}: failed to set PWM: {}", self.channel, e);
                false
            }
        }
    }

    fn value(&self) -> Option<f64> {
        self.value
    }

    fn detach(&mut self) {
        if let Err(e) = self.pin.clear_pwm() {
            log::warn!("GPIO {}: failed to stop PWM: {}", self.channel, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pulse_width() {
        assert_eq!(pulse_width(-1.0), Some(Duration::from_micros(1000)));
        assert_eq!(pulse_width(0.0), Some(Duration::from_micros(1500)));
        assert_eq!(pulse_width(1.0), Some(Duration::from_micros(2000)));

        assert_eq!(pulse_width(0.5), Some(Duration::from_micros(1750)));
    }

    #[test]
    fn test_pulse_width_rejects_out_of_range() {
        assert_eq!(pulse_width(1.01), None);
        assert_eq!(pulse_width(-2.0), None);
        assert_eq!(pulse_width(f64::NAN), None);
    }
}
