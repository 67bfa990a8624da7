//! Bet Snake - a snake that roams a grid and chases the bets you place
//!
//! This library provides:
//! - Core movement rules and tick scheduling (game module)
//! - Terminal input mapping (input module)
//! - TUI rendering with pluggable bet styles (render module)
//! - Session counters (metrics module)
//! - Interactive and headless front ends (modes module)

pub mod game;
pub mod input;
pub mod logging;
pub mod metrics;
pub mod modes;
pub mod render;
