use std::time::Duration;

use hal::{Delay, ServoOutput, SERVO_NEUTRAL_VALUE};

use crate::{angle, FlapPair, FlapRenderer, Resources, SorterError};

/// How long the flaps are held before and after the plot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoldTimes {
    /// Time for the servos to reach the commanded angles
    pub settle: Duration,
    /// Time for the servos to get back to center
    pub recenter: Duration,
}

impl Default for HoldTimes {
    fn default() -> Self {
        HoldTimes {
            settle: Duration::from_millis(1500),
            recenter: Duration::from_millis(1000),
        }
    }
}

/// `Delay` backed by `std::thread::sleep`
#[derive(Default, Debug)]
pub struct ThreadDelay {}

impl ThreadDelay {
    pub fn new() -> Self {
        ThreadDelay {}
    }
}

impl Delay for ThreadDelay {
    fn delay(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Drives both flaps through one sort: move, hold, plot, recenter, hold.
pub struct ActuationSequencer<R: FlapRenderer> {
    left: Box<dyn ServoOutput>,
    right: Box<dyn ServoOutput>,
    delay: Box<dyn Delay>,
    renderer: R,
    holds: HoldTimes,
}

impl<R: FlapRenderer> ActuationSequencer<R> {
    pub fn new(resources: Resources, renderer: R, holds: HoldTimes) -> Self {
        log::info!(
            "sequencer ready: left servo on channel {}, right servo on channel {}",
            resources.left.channel(),
            resources.right.channel()
        );
        ActuationSequencer {
            left: resources.left,
            right: resources.right,
            delay: resources.delay,
            renderer,
            holds,
        }
    }

    /// Last accepted command values as (left, right)
    pub fn values(&self) -> (Option<f64>, Option<f64>) {
        (self.left.value(), self.right.value())
    }

    /// Run one full actuation cycle for `pair`.
    ///
    /// Angles are converted and sent as-is; range checking is left to the
    /// servo driver. Returns only after the renderer has returned and the
    /// recenter hold has elapsed.
    pub fn apply(&mut self, pair: FlapPair) -> Result<(), SorterError> {
        let left_value = angle::to_command(pair.left);
        let right_value = angle::to_command(pair.right);
        log::info!(
            "moving flaps to left {}° ({:.3}), right {}° ({:.3})",
            pair.left,
            left_value,
            pair.right,
            right_value
        );

        self.command(left_value, right_value);
        self.delay.delay(self.holds.settle);

        self.renderer.render(pair)?;

        self.recenter();
        Ok(())
    }

    /// Send both flaps back to neutral and wait for them to get there.
    pub fn recenter(&mut self) {
        let neutral = angle::to_command(angle::NEUTRAL_ANGLE);
        debug_assert_eq!(neutral, SERVO_NEUTRAL_VALUE);
        log::info!("recentering flaps");
        self.command(neutral, neutral);
        self.delay.delay(self.holds.recenter);
    }

    /// Stop driving both servos.
    pub fn release(&mut self) {
        log::debug!("releasing servos");
        self.left.detach();
        self.right.detach();
    }

    fn command(&mut self, left_value: f64, right_value: f64) {
        if !self.left.set_value(left_value) {
            log::warn!(
                "left servo (channel {}) rejected value {}",
                self.left.channel(),
                left_value
            );
        }
        if !self.right.set_value(right_value) {
            log::warn!(
                "right servo (channel {}) rejected value {}",
                self.right.channel(),
                right_value
            );
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::{cell::RefCell, rc::Rc, time::Duration};

    use hal::{Delay, ServoOutput};

    use crate::{FlapPair, FlapRenderer, Resources, SorterError};

    #[derive(Debug, Clone, PartialEq)]
    pub enum Event {
        Servo { channel: u8, value: f64 },
        Hold(Duration),
        Render(FlapPair),
        Detach(u8),
    }

    pub type EventLog = Rc<RefCell<Vec<Event>>>;

    pub struct RecordingServo {
        pub channel: u8,
        pub value: Option<f64>,
        pub accept: fn(f64) -> bool,
        pub log: EventLog,
    }

    impl ServoOutput for RecordingServo {
        fn channel(&self) -> u8 {
            self.channel
        }

        fn set_value(&mut self, value: f64) -> bool {
            if !(self.accept)(value) {
                return false;
            }
            self.value = Some(value);
            self.log.borrow_mut().push(Event::Servo {
                channel: self.channel,
                value,
            });
            true
        }

        fn value(&self) -> Option<f64> {
            self.value
        }

        fn detach(&mut self) {
            self.log.borrow_mut().push(Event::Detach(self.channel));
        }
    }

    pub struct RecordingDelay {
        pub log: EventLog,
    }

    impl Delay for RecordingDelay {
        fn delay(&mut self, duration: Duration) {
            self.log.borrow_mut().push(Event::Hold(duration));
        }
    }

    pub struct RecordingRenderer {
        pub log: EventLog,
        pub fail: bool,
    }

    impl FlapRenderer for RecordingRenderer {
        fn render(&mut self, pair: FlapPair) -> Result<(), SorterError> {
            if self.fail {
                return Err(SorterError::Render("no display".into()));
            }
            self.log.borrow_mut().push(Event::Render(pair));
            Ok(())
        }
    }

    pub fn resources(log: &EventLog, accept: fn(f64) -> bool) -> Resources {
        Resources {
            left: Box::new(RecordingServo {
                channel: 17,
                value: None,
                accept,
                log: log.clone(),
            }),
            right: Box::new(RecordingServo {
                channel: 18,
                value: None,
                accept,
                log: log.clone(),
            }),
            delay: Box::new(RecordingDelay { log: log.clone() }),
        }
    }

    pub fn renderer(log: &EventLog) -> RecordingRenderer {
        RecordingRenderer {
            log: log.clone(),
            fail: false,
        }
    }

    /// Events of one complete actuation cycle
    pub fn cycle(pair: FlapPair) -> Vec<Event> {
        vec![
            Event::Servo {
                channel: 17,
                value: crate::angle::to_command(pair.left),
            },
            Event::Servo {
                channel: 18,
                value: crate::angle::to_command(pair.right),
            },
            Event::Hold(Duration::from_millis(1500)),
            Event::Render(pair),
            Event::Servo {
                channel: 17,
                value: 0.0,
            },
            Event::Servo {
                channel: 18,
                value: 0.0,
            },
            Event::Hold(Duration::from_millis(1000)),
        ]
    }
}
