//! Core game logic for the bet-chasing snake
//!
//! This module contains all the game logic without any I/O or rendering
//! dependencies. Time is passed in by the caller, and randomness is owned by
//! the [`SnakeActor`], so every rule can be exercised from tests.

pub mod cell;
pub mod config;
pub mod engine;
pub mod error;
pub mod grid;
pub mod markers;
pub mod scheduler;
pub mod snake;
pub mod state;

// Re-export commonly used types
pub use cell::{Cell, Direction};
pub use config::{GameConfig, TimingConfig};
pub use engine::{SnakeActor, StepOutcome};
pub use error::GameError;
pub use grid::Grid;
pub use markers::{Marker, MarkerQueue, MarkerTag};
pub use scheduler::TickScheduler;
pub use snake::SnakeBody;
pub use state::SnakeGameState;
