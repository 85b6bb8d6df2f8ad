#![cfg(feature = "std")]

//! Present-then-step loop that feeds a board's frames to a pixel sink.

use crate::board::Board;
use crate::rule::Rule;
use crate::sink::PixelSink;
use log::{debug, info};
use serde::Serialize;
use std::thread;
use std::time::Duration;

/// Summary of a finished run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunStats {
    pub width: usize,
    pub height: usize,
    pub rule: String,
    /// Steps actually taken.
    pub generations: usize,
    /// Population of every presented frame, starting with generation 0.
    pub populations: Vec<usize>,
    /// First generation identical to the one before it, if any.
    pub stable_at: Option<usize>,
}

/// Drives one board, presenting each generation to `sink`.
pub struct Simulation<'a, S> {
    board: Board<'a>,
    rule: Rule,
    sink: S,
    frame_delay: Option<Duration>,
    stop_when_stable: bool,
}

impl<'a, S> Simulation<'a, S>
where
    S: PixelSink,
    S::Error: std::error::Error + Send + Sync + 'static,
{
    pub fn new(board: Board<'a>, sink: S) -> Self {
        Simulation {
            board,
            rule: Rule::CONWAY,
            sink,
            frame_delay: None,
            stop_when_stable: false,
        }
    }

    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rule = rule;
        self
    }

    /// Pause after each presented frame.
    pub fn with_frame_delay(mut self, delay: Duration) -> Self {
        self.frame_delay = (!delay.is_zero()).then_some(delay);
        self
    }

    /// End the run at the first generation that equals its predecessor.
    pub fn stop_when_stable(mut self, enabled: bool) -> Self {
        self.stop_when_stable = enabled;
        self
    }

    pub fn board(&self) -> &Board<'a> {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board<'a> {
        &mut self.board
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_parts(self) -> (Board<'a>, S) {
        (self.board, self.sink)
    }

    fn present(&mut self) -> anyhow::Result<()> {
        self.sink.push_frame(self.board.frame())?;
        if let Some(delay) = self.frame_delay {
            thread::sleep(delay);
        }
        Ok(())
    }

    /// Presents the current generation, then steps and presents up to
    /// `generations` times.
    pub fn run(&mut self, generations: usize) -> anyhow::Result<RunStats> {
        info!(
            "running {}x{} board under {} for {} generations",
            self.board.width(),
            self.board.height(),
            self.rule,
            generations
        );
        let mut populations = Vec::new();
        let mut previous = self.board.state().to_vec();
        let mut stable_at = None;
        let mut steps = 0;

        populations.push(self.board.population());
        self.present()?;

        for generation in 1..=generations {
            self.board.step_with(&self.rule);
            steps = generation;
            let population = self.board.population();
            populations.push(population);
            debug!("generation {}: population {}", generation, population);
            self.present()?;

            if self.board.state() == previous.as_slice() {
                if stable_at.is_none() {
                    info!("board stable at generation {}", generation);
                    stable_at = Some(generation);
                }
                if self.stop_when_stable {
                    break;
                }
            } else {
                previous.copy_from_slice(self.board.state());
            }
        }

        Ok(RunStats {
            width: self.board.width(),
            height: self.board.height(),
            rule: self.rule.to_string(),
            generations: steps,
            populations,
            stable_at,
        })
    }
}
