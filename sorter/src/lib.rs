pub mod angle;
pub mod bench;
mod board;
mod config;
pub mod console;
mod direction;
mod error;
mod flap;
mod interrupt;
mod render;
mod sequencer;

pub use board::{Board, Resources};
pub use config::SorterConfig;
pub use console::{Command, OperatorConsole, SessionSummary};
pub use direction::{Direction, DirectionOverrides, DirectionPolicy};
pub use error::SorterError;
pub use flap::{FlapGeometry, FlapPair, Segment, Viewport, FLAP_LENGTH, VIEWPORT};
pub use interrupt::InterruptState;
pub use render::{FlapRenderer, NoopRenderer};
pub use sequencer::{ActuationSequencer, HoldTimes, ThreadDelay};
