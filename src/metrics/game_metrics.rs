use std::time::{Duration, Instant};

use crate::game::StepOutcome;

/// Per-session counters shown in the header and the simulate summary
pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub frames: u64,
    pub steps: u64,
    pub paused_steps: u64,
    pub blocked_steps: u64,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    /// Metrics whose clock starts at `start`
    pub fn starting_at(start: Instant) -> Self {
        Self {
            start_time: start,
            elapsed_time: Duration::ZERO,
            frames: 0,
            steps: 0,
            paused_steps: 0,
            blocked_steps: 0,
        }
    }

    /// Record one frame at `now`, and the step it ran, if any
    pub fn on_frame(&mut self, now: Instant, outcome: Option<StepOutcome>) {
        self.frames += 1;
        self.elapsed_time = now.saturating_duration_since(self.start_time);

        match outcome {
            Some(StepOutcome::Paused) => self.paused_steps += 1,
            Some(StepOutcome::Roamed { direction: None }) => {
                self.steps += 1;
                self.blocked_steps += 1;
            }
            Some(_) => self.steps += 1,
            None => {}
        }
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}
