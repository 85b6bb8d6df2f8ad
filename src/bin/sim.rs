use pagelife::{Board, Frame, PixelSink, Randomized, Simulation};
use std::convert::Infallible;

/// Discards frames; the run is headless.
struct NullSink;

impl PixelSink for NullSink {
    type Error = Infallible;

    fn push_frame(&mut self, _frame: Frame<'_>) -> Result<(), Infallible> {
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 || args.len() > 5 {
        eprintln!("Usage: {} <seed> <generations> [width] [height]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let generations: usize = args[2].parse()?;
    let width: usize = args.get(3).map(|s| s.parse()).transpose()?.unwrap_or(pagelife::DEFAULT_WIDTH);
    let height: usize = args.get(4).map(|s| s.parse()).transpose()?.unwrap_or(pagelife::DEFAULT_HEIGHT);

    let mut board = Board::new(width, height)?;
    board.seed(&mut Randomized::from_seed(seed));

    let mut sim = Simulation::new(board, NullSink);
    let stats = sim.run(generations)?;

    println!("{}", serde_json::to_string(&stats)?);
    Ok(())
}
