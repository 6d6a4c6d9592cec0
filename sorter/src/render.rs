use crate::{FlapPair, SorterError};

/// Something that can show the operator where the flaps were sent.
///
/// `render` blocks until the operator is done looking; the sequencer does
/// not recenter the flaps before it returns.
pub trait FlapRenderer {
    fn render(&mut self, pair: FlapPair) -> Result<(), SorterError>;
}

/// Renderer for headless runs
#[derive(Default, Debug)]
pub struct NoopRenderer {}

impl NoopRenderer {
    pub fn new() -> Self {
        NoopRenderer {}
    }
}

impl FlapRenderer for NoopRenderer {
    fn render(&mut self, pair: FlapPair) -> Result<(), SorterError> {
        log::debug!("plot skipped for {:?}", pair);
        Ok(())
    }
}

impl<T: FlapRenderer + ?Sized> FlapRenderer for Box<T> {
    fn render(&mut self, pair: FlapPair) -> Result<(), SorterError> {
        (**self).render(pair)
    }
}
