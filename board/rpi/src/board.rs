use anyhow::Context;
use rppal::gpio::Gpio;
use sorter::{Resources, ThreadDelay};

use crate::servo::GpioServo;

pub struct RaspberryPiBoard {
    left: GpioServo,
    right: GpioServo,
}

impl RaspberryPiBoard {
    /// Claim the two servo pins. Fails if GPIO is unavailable or a pin is
    /// already in use.
    pub fn new(left_pin: u8, right_pin: u8) -> anyhow::Result<Self> {
        let gpio = Gpio::new().context("Failed to open GPIO")?;
        let left = gpio
            .get(left_pin)
            .with_context(|| format!("Failed to claim GPIO {} for left servo", left_pin))?
            .into_output();
        let right = gpio
            .get(right_pin)
            .with_context(|| format!("Failed to claim GPIO {} for right servo", right_pin))?
            .into_output();

        Ok(RaspberryPiBoard {
            left: GpioServo::new(left),
            right: GpioServo::new(right),
        })
    }
}

impl sorter::Board for RaspberryPiBoard {
    fn name(&self) -> &str {
        "Raspberry Pi"
    }

    fn split_resources(self) -> Resources {
        Resources {
            left: Box::new(self.left),
            right: Box::new(self.right),
            delay: Box::new(ThreadDelay::new()),
        }
    }
}
