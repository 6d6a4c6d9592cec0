use sorter::{Resources, ThreadDelay};

use crate::servo::SimulatedServo;

pub struct SimulatedBoard {
    left_channel: u8,
    right_channel: u8,
}

impl SimulatedBoard {
    pub fn new(left_channel: u8, right_channel: u8) -> Self {
        SimulatedBoard {
            left_channel,
            right_channel,
        }
    }
}

impl sorter::Board for SimulatedBoard {
    fn name(&self) -> &str {
        "SITL"
    }

    fn split_resources(self) -> Resources {
        Resources {
            left: Box::new(SimulatedServo::new(self.left_channel)),
            right: Box::new(SimulatedServo::new(self.right_channel)),
            delay: Box::new(ThreadDelay::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hal::ServoOutput;
    use sorter::Board;

    #[test]
    fn test_resources_use_configured_channels() {
        let board = SimulatedBoard::new(5, 6);
        assert_eq!(board.name(), "SITL");

        let resources = board.split_resources();
        assert_eq!(resources.left.channel(), 5);
        assert_eq!(resources.right.channel(), 6);
    }
}
