use hal::{Delay, ServoOutput};

pub trait Board
where
    Self: Sized,
{
    fn name(&self) -> &str;

    fn split_resources(self) -> Resources;
}

/// Hardware handed from a board to the sequencer
pub struct Resources {
    pub left: Box<dyn ServoOutput>,
    pub right: Box<dyn ServoOutput>,
    pub delay: Box<dyn Delay>,
}
