use hal::ServoOutput;
use sorter::angle;

/// Servo that only remembers and logs what it was told.
///
/// Accepts any value, including ones a real driver would refuse, so the
/// effect of unchecked angles can be seen on the bench without hardware.
#[derive(Debug)]
pub struct SimulatedServo {
    channel: u8,
    value: Option<f64>,
    attached: bool,
}

impl SimulatedServo {
    pub fn new(channel: u8) -> Self {
        SimulatedServo {
            channel,
            value: None,
            attached: false,
        }
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }
}

impl ServoOutput for SimulatedServo {
    fn channel(&self) -> u8 {
        self.channel
    }

    fn set_value(&mut self, value: f64) -> bool {
        if !hal::is_in_range(value) {
            log::warn!(
                "[sim] servo {} commanded past end of travel: {:.3}",
                self.channel,
                value
            );
        }
        log::info!(
            "[sim] servo {} -> {:.3} ({}°)",
            self.channel,
            value,
            angle::to_angle(value)
        );
        self.value = Some(value);
        self.attached = true;
        true
    }

    fn value(&self) -> Option<f64> {
        self.value
    }

    fn detach(&mut self) {
        log::debug!("[sim] servo {} detached", self.channel);
        self.attached = false;
    }
}
