/// Blocking delay interface
use core::time::Duration;

/// Blocking delay provider
///
/// Boards hand one of these to the sequencer so hold times can be replaced
/// in tests without touching the wall clock.
pub trait Delay {
    /// Block the calling thread for at least `duration`
    fn delay(&mut self, duration: Duration);
}
