#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use pagelife::{
    init_logging, pattern_by_name, Board, Randomized, Rule, Simulation, TextSink, Zeroed,
    DEFAULT_HEIGHT, DEFAULT_WIDTH, PATTERNS,
};

#[cfg(feature = "std")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "std")]
use log::info;
#[cfg(feature = "std")]
use std::io;
#[cfg(feature = "std")]
use std::time::Duration;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
#[cfg(feature = "std")]
enum Fill {
    Random,
    Zero,
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Animate a board in the terminal.
    Run {
        #[arg(long, default_value_t = DEFAULT_WIDTH)]
        width: usize,
        #[arg(long, default_value_t = DEFAULT_HEIGHT)]
        height: usize,
        #[arg(long, default_value_t = 100)]
        generations: usize,
        #[arg(long, value_enum, default_value_t = Fill::Random)]
        fill: Fill,
        #[arg(long, help = "Fix RNG seed for reproducible boards (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Stamp a named pattern at the board centre (see `patterns`)")]
        pattern: Option<String>,
        #[arg(long, default_value = "B3/S23")]
        rule: Rule,
        #[arg(long, default_value_t = 100)]
        delay_ms: u64,
        #[arg(long)]
        stop_when_stable: bool,
        #[arg(long, help = "Print frames one after another instead of redrawing")]
        no_clear: bool,
    },
    /// List the built-in patterns.
    Patterns,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            width,
            height,
            generations,
            fill,
            seed,
            pattern,
            rule,
            delay_ms,
            stop_when_stable,
            no_clear,
        } => {
            let mut board = Board::new(width, height)?;
            match (fill, seed) {
                (Fill::Zero, _) => board.seed(&mut Zeroed),
                (Fill::Random, Some(s)) => {
                    info!("using fixed seed {} (board will be reproducible)", s);
                    board.seed(&mut Randomized::from_seed(s));
                }
                (Fill::Random, None) => board.seed(&mut Randomized::from_entropy()),
            }

            if let Some(name) = pattern {
                let pattern = pattern_by_name(&name)
                    .ok_or_else(|| anyhow::anyhow!("unknown pattern {:?}", name))?;
                let (pw, ph) = pattern.extent();
                let x = width.saturating_sub(pw) / 2;
                let y = height.saturating_sub(ph) / 2;
                board.stamp(pattern, x, y)?;
            }

            let sink = TextSink::new(io::stdout().lock()).clear_screen(!no_clear);
            let mut sim = Simulation::new(board, sink)
                .with_rule(rule)
                .with_frame_delay(Duration::from_millis(delay_ms))
                .stop_when_stable(stop_when_stable);
            let stats = sim.run(generations)?;
            info!(
                "finished after {} generations, final population {}",
                stats.generations,
                stats.populations.last().copied().unwrap_or(0)
            );
        }
        Commands::Patterns => {
            for p in PATTERNS {
                let (w, h) = p.extent();
                println!("{:<12} {}x{}", p.name, w, h);
            }
        }
    }
    Ok(())
}
