use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use super::cell::Cell;
use super::grid::Grid;

/// Step cadence and post-eat freeze, in milliseconds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Step interval with an empty queue
    pub base_speed_ms: u64,
    /// Fastest allowed step interval
    pub min_speed_ms: u64,
    /// Interval reduction per queued bet
    pub speed_decay_ms: u64,
    /// Freeze after eating a bet
    pub pause_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            base_speed_ms: 200,
            min_speed_ms: 60,
            speed_decay_ms: 25,
            pause_ms: 50,
        }
    }
}

impl TimingConfig {
    /// Step interval for a queue holding `queued` bets
    pub fn speed_for(&self, queued: usize) -> Duration {
        let decay = self.speed_decay_ms.saturating_mul(queued as u64);
        let ms = self
            .base_speed_ms
            .saturating_sub(decay)
            .max(self.min_speed_ms);
        Duration::from_millis(ms)
    }

    pub fn pause(&self) -> Duration {
        Duration::from_millis(self.pause_ms)
    }
}

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the grid when no terminal size is available
    pub grid_cols: u32,
    /// Height of the grid when no terminal size is available
    pub grid_rows: u32,
    /// Where the one-segment snake starts
    pub start: Cell,
    /// Whether bets queue up (true) or replace each other (false)
    pub multi_mode: bool,
    pub timing: TimingConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_cols: 20,
            grid_rows: 20,
            start: Cell::new(5, 5),
            multi_mode: true,
            timing: TimingConfig::default(),
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(cols: u32, rows: u32) -> Self {
        Self {
            grid_cols: cols,
            grid_rows: rows,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    /// Load a configuration from a JSON file; missing fields take defaults
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        let config: GameConfig = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse config {:?}", path))?;
        config.validate()?;
        Ok(config)
    }

    /// The configured grid
    pub fn grid(&self) -> Result<Grid> {
        Grid::new(self.grid_cols, self.grid_rows).context("Invalid grid size in config")
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        self.grid()?;

        if self.timing.min_speed_ms == 0 {
            bail!("min_speed_ms must be positive");
        }

        if self.timing.min_speed_ms > self.timing.base_speed_ms {
            bail!(
                "min_speed_ms ({}) cannot exceed base_speed_ms ({})",
                self.timing.min_speed_ms,
                self.timing.base_speed_ms
            );
        }

        Ok(())
    }
}
