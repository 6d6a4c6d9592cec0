//! Shared entry point for the bench binaries.

use std::{io, path::PathBuf};

use anyhow::Context;
use clap::Parser;

use crate::{
    console::write_farewell, ActuationSequencer, Board, FlapRenderer, InterruptState,
    OperatorConsole, SessionSummary, SorterConfig,
};

#[derive(Parser, Debug, Default)]
#[command(about = "Manual test bench for the two-flap sorting gate")]
pub struct BenchArgs {
    /// TOML file with bench settings
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Skip the flap plot window after each move
    #[arg(long)]
    pub headless: bool,

    /// Hold after moving the flaps, in milliseconds
    #[arg(long)]
    pub settle_ms: Option<u64>,

    /// Hold after recentering the flaps, in milliseconds
    #[arg(long)]
    pub recenter_ms: Option<u64>,

    #[arg(long)]
    pub left_channel: Option<u8>,

    #[arg(long)]
    pub right_channel: Option<u8>,
}

impl BenchArgs {
    /// Config file (or defaults) with command line flags applied on top.
    pub fn resolve_config(&self) -> anyhow::Result<SorterConfig> {
        let mut config = match &self.config {
            Some(path) => SorterConfig::load(path)?,
            None => SorterConfig::default(),
        };

        if self.headless {
            config.plot = false;
        }
        if let Some(ms) = self.settle_ms {
            config.settle_hold_ms = ms;
        }
        if let Some(ms) = self.recenter_ms {
            config.recenter_hold_ms = ms;
        }
        if let Some(channel) = self.left_channel {
            config.left_channel = channel;
        }
        if let Some(channel) = self.right_channel {
            config.right_channel = channel;
        }

        config.validate()?;
        Ok(config)
    }
}

pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

/// Route Ctrl-C through `interrupt`.
///
/// At the prompt the session ends on the spot with the farewell and exit
/// status 0. During a move the current cycle finishes first, so the flaps
/// are recentered and the servos released before the process exits.
pub fn install_interrupt_handler(interrupt: InterruptState) -> anyhow::Result<()> {
    ctrlc::set_handler(move || {
        let deferred = interrupt.interrupt(|| {
            let _ = write_farewell(&mut io::stdout(), true);
            std::process::exit(0);
        });
        if deferred {
            log::info!("interrupt received, finishing the current move");
        }
    })
    .context("Failed to install Ctrl-C handler")
}

/// Run an interactive session on stdin/stdout against `board`.
pub fn run<B: Board, R: FlapRenderer>(
    board: B,
    renderer: R,
    config: &SorterConfig,
    interrupt: InterruptState,
) -> anyhow::Result<SessionSummary> {
    log::info!("Board: {}", board.name());

    let mut sequencer =
        ActuationSequencer::new(board.split_resources(), renderer, config.hold_times());

    let stdin = io::stdin();
    let mut console = OperatorConsole::new(stdin.lock(), io::stdout(), config.policy())
        .with_interrupt(interrupt);
    let result = console.run(&mut sequencer);
    sequencer.release();

    Ok(result?)
}
