use rand::Rng;
use std::time::{Duration, Instant};
use tracing::debug;

use super::config::TimingConfig;
use super::engine::{SnakeActor, StepOutcome};
use super::state::SnakeGameState;

/// Turns frame callbacks into snake steps at a queue-dependent cadence
#[derive(Debug, Clone)]
pub struct TickScheduler {
    timing: TimingConfig,
    last_step: Option<Instant>,
}

impl TickScheduler {
    pub fn new(timing: TimingConfig) -> Self {
        Self {
            timing,
            last_step: None,
        }
    }

    /// Step interval for the current queue length
    pub fn speed_for(&self, queued: usize) -> Duration {
        self.timing.speed_for(queued)
    }

    /// When the last step ran, if any
    pub fn last_step(&self) -> Option<Instant> {
        self.last_step
    }

    /// Called once per frame; runs at most one step.
    ///
    /// Steps when more than the current interval has passed since the last
    /// step. The very first call always steps.
    pub fn tick<R: Rng>(
        &mut self,
        now: Instant,
        state: &mut SnakeGameState,
        actor: &mut SnakeActor<R>,
    ) -> Option<StepOutcome> {
        let speed = self.speed_for(state.markers().len());

        if let Some(last) = self.last_step {
            if now.saturating_duration_since(last) <= speed {
                return None;
            }
        }

        let outcome = actor.step(state, now);
        self.last_step = Some(now);
        debug!(speed_ms = speed.as_millis() as u64, "tick");
        Some(outcome)
    }
}
