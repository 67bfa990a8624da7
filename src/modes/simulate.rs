//! Headless simulation mode
//!
//! Runs the frame loop against a virtual clock with scripted, seeded bet
//! placement, then prints a summary. Two runs with the same options produce the
//! same summary, which makes this mode handy for checking the movement rules
//! without a terminal.
//!
//! # Example
//!
//! ```rust
//! use bet_snake::game::GameConfig;
//! use bet_snake::modes::{SimulateConfig, SimulateMode};
//!
//! let config = SimulateConfig {
//!     frames: 600,
//!     ..SimulateConfig::new(GameConfig::small(), 7)
//! };
//! let report = SimulateMode::new(config).unwrap().run();
//! assert_eq!(report.frames, 600);
//! ```

use anyhow::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::time::{Duration, Instant};
use tracing::info;

use super::session::{Session, sub_seeds};
use crate::game::{Cell, GameConfig, Grid};

/// Configuration for simulate mode
#[derive(Debug, Clone)]
pub struct SimulateConfig {
    /// Game configuration (grid size, timing, start cell)
    pub game_config: GameConfig,

    /// Number of frames to run
    pub frames: u64,

    /// Place one random bet every N frames (0 disables placement)
    pub bet_every: u64,

    /// Virtual time between frames
    pub frame_interval: Duration,

    /// Seed for roaming and for bet placement
    pub seed: u64,
}

impl SimulateConfig {
    pub fn new(game_config: GameConfig, seed: u64) -> Self {
        Self {
            game_config,
            frames: 3_600,
            bet_every: 90,
            frame_interval: Duration::from_millis(16),
            seed,
        }
    }
}

/// Summary of a finished simulation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationReport {
    pub frames: u64,
    pub steps: u64,
    pub blocked_steps: u64,
    pub bets_placed: u64,
    pub eaten: u32,
    pub body_length: usize,
    pub queued: usize,
    pub head: Cell,
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Frames: {}", self.frames)?;
        writeln!(f, "Steps: {} ({} blocked)", self.steps, self.blocked_steps)?;
        writeln!(f, "Bets placed: {}", self.bets_placed)?;
        writeln!(f, "Eaten bets: {}", self.eaten)?;
        writeln!(f, "Body length: {}", self.body_length)?;
        writeln!(f, "Queued bets: {}", self.queued)?;
        write!(f, "Head: ({}, {})", self.head.col, self.head.row)
    }
}

pub struct SimulateMode {
    config: SimulateConfig,
    grid: Grid,
    session: Session,
    placer: StdRng,
    bets_placed: u64,
}

impl SimulateMode {
    pub fn new(config: SimulateConfig) -> Result<Self> {
        config.game_config.validate()?;
        let grid = config.game_config.grid()?;
        let session = Session::new(&config.game_config, grid, Some(config.seed), Instant::now());
        // The first two sub-seeds drive the session's roaming and tags
        let [_, _, placer_seed] = sub_seeds::<3>(config.seed);
        let placer = StdRng::seed_from_u64(placer_seed);

        Ok(Self {
            config,
            grid,
            session,
            placer,
            bets_placed: 0,
        })
    }

    /// Run every frame and return the summary
    pub fn run(&mut self) -> SimulationReport {
        let start = self.session.metrics().start_time;
        info!(
            frames = self.config.frames,
            cols = self.grid.cols(),
            rows = self.grid.rows(),
            seed = self.config.seed,
            "simulation started"
        );

        let mut now = start;
        for frame in 1..=self.config.frames {
            if self.config.bet_every > 0 && frame % self.config.bet_every == 0 {
                self.place_random_bet();
            }
            now += self.config.frame_interval;
            self.session.on_frame(now);
        }

        let report = self.report();
        info!(eaten = report.eaten, steps = report.steps, "simulation finished");
        report
    }

    fn place_random_bet(&mut self) {
        let cell = Cell::new(
            self.placer.gen_range(0..self.grid.cols()) as i32,
            self.placer.gen_range(0..self.grid.rows()) as i32,
        );
        self.session.on_pointer_move(cell);
        if self.session.on_place(cell) {
            self.bets_placed += 1;
        }
    }

    fn report(&self) -> SimulationReport {
        let state = self.session.state();
        let metrics = self.session.metrics();
        SimulationReport {
            frames: metrics.frames,
            steps: metrics.steps,
            blocked_steps: metrics.blocked_steps,
            bets_placed: self.bets_placed,
            eaten: state.eaten(),
            body_length: state.snake().len(),
            queued: state.markers().len(),
            head: state.snake().head(),
        }
    }

    /// Print run header information
    pub fn print_header(&self) {
        println!("{}", "=".repeat(50));
        println!("Bet Snake - Simulation");
        println!("{}", "=".repeat(50));
        println!("Grid: {}x{}", self.grid.cols(), self.grid.rows());
        println!("Frames: {}", self.config.frames);
        println!("Bet every: {} frames", self.config.bet_every);
        println!(
            "Multiple Bet: {}",
            if self.config.game_config.multi_mode { "ON" } else { "OFF" }
        );
        println!("Seed: {}", self.config.seed);
        println!("{}", "=".repeat(50));
    }
}
