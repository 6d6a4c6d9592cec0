use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Moving,
    Stopping,
}

/// Coordination between the Ctrl-C handler and the prompt loop.
///
/// While the flaps are moving an interrupt is only recorded, so the cycle
/// can recenter and the servos get released. While idle the handler runs
/// its exit path with the phase locked, so no move can start under it.
#[derive(Debug, Clone)]
pub struct InterruptState {
    phase: Arc<Mutex<Phase>>,
}

impl Default for InterruptState {
    fn default() -> Self {
        InterruptState {
            phase: Arc::new(Mutex::new(Phase::Idle)),
        }
    }
}

impl InterruptState {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Phase> {
        self.phase.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Handle an interrupt.
    ///
    /// Returns true if a move is in progress and the session will stop after
    /// it. Otherwise calls `idle` (normally: say goodbye and exit) and
    /// returns false.
    pub fn interrupt(&self, idle: impl FnOnce()) -> bool {
        let mut phase = self.lock();
        match *phase {
            Phase::Moving | Phase::Stopping => {
                *phase = Phase::Stopping;
                true
            }
            Phase::Idle => {
                idle();
                false
            }
        }
    }

    pub(crate) fn begin_move(&self) {
        *self.lock() = Phase::Moving;
    }

    /// Mark the move finished. Returns true if an interrupt arrived during it.
    pub(crate) fn end_move(&self) -> bool {
        let mut phase = self.lock();
        let stop = *phase == Phase::Stopping;
        *phase = Phase::Idle;
        stop
    }
}
