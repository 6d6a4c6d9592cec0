use clap::Parser;
use sorter::{
    bench::{self, BenchArgs},
    FlapRenderer, InterruptState, NoopRenderer,
};

use board::RaspberryPiBoard;
mod board;
mod servo;

fn main() -> anyhow::Result<()> {
    let args = BenchArgs::parse();
    bench::init_logging();
    let config = args.resolve_config()?;
    let interrupt = InterruptState::new();
    bench::install_interrupt_handler(interrupt.clone())?;

    let board = RaspberryPiBoard::new(config.left_channel, config.right_channel)?;
    bench::run(board, renderer(config.plot), &config, interrupt)?;
    Ok(())
}

#[cfg(feature = "plot")]
fn renderer(plot: bool) -> Box<dyn FlapRenderer> {
    if plot {
        Box::new(flap_plot::EguiFlapRenderer::new())
    } else {
        Box::new(NoopRenderer::new())
    }
}

#[cfg(not(feature = "plot"))]
fn renderer(plot: bool) -> Box<dyn FlapRenderer> {
    if plot {
        log::warn!("built without the plot feature, running headless");
    }
    Box::new(NoopRenderer::new())
}
