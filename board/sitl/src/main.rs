use clap::Parser;
use flap_plot::EguiFlapRenderer;
use sorter::{
    bench::{self, BenchArgs},
    FlapRenderer, InterruptState, NoopRenderer,
};

use board::SimulatedBoard;
mod board;
mod servo;

fn main() -> anyhow::Result<()> {
    let args = BenchArgs::parse();
    bench::init_logging();
    let config = args.resolve_config()?;
    let interrupt = InterruptState::new();
    bench::install_interrupt_handler(interrupt.clone())?;

    let board = SimulatedBoard::new(config.left_channel, config.right_channel);
    let renderer: Box<dyn FlapRenderer> = if config.plot {
        Box::new(EguiFlapRenderer::new())
    } else {
        Box::new(NoopRenderer::new())
    };

    bench::run(board, renderer, &config, interrupt)?;
    Ok(())
}
