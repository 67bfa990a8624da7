//! The glue between input callbacks, the frame loop and the game core
//!
//! A [`Session`] owns one game for its whole lifetime. Front ends feed it
//! pointer, placement, mode and resize callbacks, and call [`Session::on_frame`]
//! once per frame; the scheduler decides whether the snake actually moves.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Instant;

use crate::game::{
    Cell, GameConfig, Grid, MarkerTag, SnakeActor, SnakeGameState, StepOutcome, TickScheduler,
};
use crate::metrics::GameMetrics;

pub struct Session<R = StdRng> {
    state: SnakeGameState,
    actor: SnakeActor<R>,
    scheduler: TickScheduler,
    metrics: GameMetrics,
    tag_rng: StdRng,
}

impl Session<StdRng> {
    /// Session with entropy-seeded randomness, or fully reproducible when `seed` is set
    pub fn new(config: &GameConfig, grid: Grid, seed: Option<u64>, start: Instant) -> Self {
        let pause = config.timing.pause();
        let (actor, tag_rng) = match seed {
            Some(seed) => {
                let [actor_seed, tag_seed] = sub_seeds::<2>(seed);
                (
                    SnakeActor::seeded(pause, actor_seed),
                    StdRng::seed_from_u64(tag_seed),
                )
            }
            None => (SnakeActor::new(pause), StdRng::from_entropy()),
        };
        Self::with_actor(config, grid, actor, tag_rng, start)
    }
}

/// Independent seeds for each random stream of a seeded run.
///
/// All of them come from one generator seeded with `seed`, so asking for more
/// streams never changes the earlier ones.
pub(crate) fn sub_seeds<const N: usize>(seed: u64) -> [u64; N] {
    let mut master = StdRng::seed_from_u64(seed);
    std::array::from_fn(|_| master.r#gen())
}

impl<R: Rng> Session<R> {
    pub fn with_actor(
        config: &GameConfig,
        grid: Grid,
        actor: SnakeActor<R>,
        tag_rng: StdRng,
        start: Instant,
    ) -> Self {
        Self {
            state: SnakeGameState::new(grid, config.start, config.multi_mode),
            actor,
            scheduler: TickScheduler::new(config.timing.clone()),
            metrics: GameMetrics::starting_at(start),
            tag_rng,
        }
    }

    pub fn state(&self) -> &SnakeGameState {
        &self.state
    }

    pub fn metrics(&self) -> &GameMetrics {
        &self.metrics
    }

    pub fn on_pointer_move(&mut self, cell: Cell) {
        self.state.set_cursor(cell);
    }

    /// Bet on `cell` with a fresh visual tag
    pub fn on_place(&mut self, cell: Cell) -> bool {
        let tag = MarkerTag::random(&mut self.tag_rng);
        self.state.place_bet(cell, tag)
    }

    pub fn on_toggle_mode(&mut self) -> bool {
        self.state.toggle_mode()
    }

    pub fn on_resize(&mut self, grid: Grid) {
        if grid != self.state.grid() {
            self.state.resize(grid);
        }
    }

    /// Run the scheduler for one frame at `now`
    pub fn on_frame(&mut self, now: Instant) -> Option<StepOutcome> {
        let outcome = self.scheduler.tick(now, &mut self.state, &mut self.actor);
        self.metrics.on_frame(now, outcome);
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn session(seed: u64) -> (Session, Instant) {
        let start = Instant::now();
        let session = Session::new(
            &GameConfig::default(),
            Grid::new(10, 10).unwrap(),
            Some(seed),
            start,
        );
        (session, start)
    }

    #[test]
    fn test_place_uses_current_mode() {
        let (mut session, _) = session(1);
        assert!(session.on_place(Cell::new(6, 5)));
        assert!(!session.on_place(Cell::new(6, 5)));
        assert_eq!(session.state().markers().len(), 1);

        session.on_place(Cell::new(7, 5));
        session.on_place(Cell::new(8, 5));
        assert!(!session.on_toggle_mode());
        assert_eq!(session.state().markers().len(), 1);
        assert_eq!(
            session.state().markers().peek_first().unwrap().cell,
            Cell::new(6, 5)
        );
    }

    #[test]
    fn test_pointer_is_clamped() {
        let (mut session, _) = session(1);
        session.on_pointer_move(Cell::new(40, -3));
        assert_eq!(session.state().cursor(), Cell::new(9, 0));
    }

    #[test]
    fn test_resize_filters_and_clamps() {
        let (mut session, _) = session(1);
        session.on_place(Cell::new(9, 9));
        session.on_resize(Grid::new(4, 4).unwrap());

        assert!(session.state().markers().is_empty());
        assert_eq!(session.state().snake().head(), Cell::new(3, 3));
    }

    #[test]
    fn test_frames_drive_steps() {
        let (mut session, start) = session(1);
        session.on_place(Cell::new(8, 5));

        let mut now = start;
        while session.state().eaten() == 0 {
            now += Duration::from_millis(16);
            session.on_frame(now);
            assert!(now < start + Duration::from_secs(2));
        }

        assert_eq!(session.metrics().steps, 3);
        assert!(session.metrics().frames > 3);
    }

    #[test]
    fn test_sub_seeds_are_distinct_and_stable() {
        let [a, b, c] = sub_seeds::<3>(0);
        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_ne!(b, c);
        assert_eq!(sub_seeds::<2>(0), [a, b]);
    }

    #[test]
    fn test_same_seed_same_session() {
        let run = |seed| {
            let (mut session, start) = session(seed);
            for i in 1..=300u64 {
                let now = start + Duration::from_millis(i * 16);
                if i % 50 == 0 {
                    let col = (i % 10) as i32;
                    session.on_place(Cell::new(col, 9 - col));
                }
                session.on_frame(now);
            }
            (
                session.state().snake().clone(),
                session.state().markers().clone(),
                session.state().eaten(),
            )
        };

        assert_eq!(run(5), run(5));
    }
}
