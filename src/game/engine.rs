use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use super::{
    cell::{Cell, Direction},
    state::SnakeGameState,
};

/// What a single step did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Still inside the post-eat freeze; nothing moved
    Paused,
    /// Moved one cell toward the first bet
    Seeked { ate: bool },
    /// Wandered; `direction` is `None` when every neighbour was blocked
    Roamed { direction: Option<Direction> },
}

/// Drives the snake: chases bets when there are any, roams otherwise
pub struct SnakeActor<R = StdRng> {
    rng: R,
    pause: Duration,
}

impl SnakeActor<StdRng> {
    /// Actor with an entropy-seeded random source
    pub fn new(pause: Duration) -> Self {
        Self::with_rng(pause, StdRng::from_entropy())
    }

    /// Actor whose roaming is reproducible for a given seed
    pub fn seeded(pause: Duration, seed: u64) -> Self {
        Self::with_rng(pause, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> SnakeActor<R> {
    pub fn with_rng(pause: Duration, rng: R) -> Self {
        Self { rng, pause }
    }

    /// Execute one step of the snake at time `now`.
    ///
    /// Priority: the post-eat freeze first, then seeking, then roaming.
    pub fn step(&mut self, state: &mut SnakeGameState, now: Instant) -> StepOutcome {
        if state.is_paused_at(now) {
            return StepOutcome::Paused;
        }

        let target = match state.markers.peek_first() {
            Some(marker) if state.seeking => Some(marker.cell),
            _ => None,
        };

        let (next, outcome) = match target {
            Some(target) => {
                let next = state.snake.head().step_toward(target);
                let ate = next == target && self.eat(state, now);
                (next, StepOutcome::Seeked { ate })
            }
            None => {
                let direction = self.choose_roam_direction(state);
                let head = state.snake.head();
                let next = match direction {
                    Some(direction) => state.grid.clamp(head.moved_in_direction(direction)),
                    None => head,
                };
                (next, StepOutcome::Roamed { direction })
            }
        };

        state.snake.advance_to(next);
        debug!(?outcome, col = next.col, row = next.row, "snake stepped");
        outcome
    }

    /// Consume the first bet: grow, count it, and freeze briefly.
    ///
    /// Returns false when there was no bet left to consume.
    fn eat(&mut self, state: &mut SnakeGameState, now: Instant) -> bool {
        if let Err(err) = state.markers.pop_first() {
            warn!(%err, "seek target missing from the queue");
            return false;
        }
        state.snake.grow();
        state.eaten += 1;
        state.seeking = !state.markers.is_empty();
        state.paused_until = Some(now + self.pause);
        info!(
            eaten = state.eaten,
            length = state.snake.len(),
            remaining = state.markers.len(),
            "bet eaten"
        );
        true
    }

    /// Pick a random direction that neither reverses onto the neck nor hits the body
    fn choose_roam_direction(&mut self, state: &SnakeGameState) -> Option<Direction> {
        let candidates = roam_candidates(state);
        candidates.choose(&mut self.rng).copied()
    }
}

/// Directions a roaming head may take, before bounds clamping
fn roam_candidates(state: &SnakeGameState) -> Vec<Direction> {
    let head = state.snake.head();
    let neck: Option<Cell> = state.snake.neck();

    Direction::ALL
        .into_iter()
        .filter(|&d| Some(head.moved_in_direction(d)) != neck)
        .filter(|&d| !state.snake.occupies(head.moved_in_direction(d)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Grid, MarkerTag, SnakeBody};

    const PAUSE: Duration = Duration::from_millis(50);

    fn state_with(cols: u32, rows: u32, cells: &[(i32, i32)]) -> SnakeGameState {
        let grid = Grid::new(cols, rows).unwrap();
        let body =
            SnakeBody::from_cells(cells.iter().map(|&(c, r)| Cell::new(c, r)).collect()).unwrap();
        SnakeGameState::new(grid, body.head(), true).with_snake(body)
    }

    fn in_bounds(state: &SnakeGameState) -> bool {
        state.snake().cells().iter().all(|c| state.grid().contains(*c))
            && state.markers().iter().all(|m| state.grid().contains(m.cell))
    }

    #[test]
    fn test_single_bet_is_reached_and_eaten() {
        let mut actor = SnakeActor::seeded(PAUSE, 1);
        let mut state = SnakeGameState::new(Grid::new(10, 10).unwrap(), Cell::new(5, 5), false);
        state.place_bet(Cell::new(8, 5), MarkerTag(0));
        let t0 = Instant::now();

        assert_eq!(actor.step(&mut state, t0), StepOutcome::Seeked { ate: false });
        assert_eq!(state.snake().head(), Cell::new(6, 5));
        assert_eq!(
            actor.step(&mut state, t0 + Duration::from_millis(200)),
            StepOutcome::Seeked { ate: false }
        );
        let eat_time = t0 + Duration::from_millis(400);
        assert_eq!(
            actor.step(&mut state, eat_time),
            StepOutcome::Seeked { ate: true }
        );

        assert_eq!(state.snake().head(), Cell::new(8, 5));
        assert!(state.markers().is_empty());
        assert_eq!(state.eaten(), 1);
        assert_eq!(state.snake().len(), 2);
        assert!(!state.is_seeking());

        let before = state.snake().clone();
        assert_eq!(
            actor.step(&mut state, eat_time + Duration::from_millis(10)),
            StepOutcome::Paused
        );
        assert_eq!(state.snake(), &before);
    }

    #[test]
    fn test_eat_without_bet_changes_nothing() {
        let mut actor = SnakeActor::seeded(PAUSE, 1);
        let mut state = state_with(10, 10, &[(5, 5), (4, 5)]);
        let now = Instant::now();

        assert!(!actor.eat(&mut state, now));
        assert_eq!(state.eaten(), 0);
        assert_eq!(state.snake().len(), 2);
        assert!(!state.is_paused_at(now));
    }

    #[test]
    fn test_seek_path_is_column_first() {
        let mut actor = SnakeActor::seeded(PAUSE, 1);
        let mut state = SnakeGameState::new(Grid::new(10, 10).unwrap(), Cell::new(5, 5), true);
        state.place_bet(Cell::new(3, 7), MarkerTag(0));
        let t0 = Instant::now();

        let mut heads = Vec::new();
        for i in 0..4 {
            actor.step(&mut state, t0 + Duration::from_secs(i));
            heads.push(state.snake().head());
        }

        assert_eq!(
            heads,
            vec![
                Cell::new(4, 5),
                Cell::new(3, 5),
                Cell::new(3, 6),
                Cell::new(3, 7)
            ]
        );
        assert_eq!(state.eaten(), 1);
    }

    #[test]
    fn test_bets_consumed_in_placement_order() {
        let mut actor = SnakeActor::seeded(PAUSE, 3);
        let mut state = SnakeGameState::new(Grid::new(10, 10).unwrap(), Cell::new(5, 5), true);
        state.place_bet(Cell::new(5, 7), MarkerTag(0));
        state.place_bet(Cell::new(5, 6), MarkerTag(0));
        let t0 = Instant::now();

        // Passing over the second bet does not eat it
        actor.step(&mut state, t0);
        assert_eq!(state.snake().head(), Cell::new(5, 6));
        assert_eq!(state.eaten(), 0);

        actor.step(&mut state, t0 + Duration::from_secs(1));
        assert_eq!(state.eaten(), 1);
        assert!(state.is_seeking());
        assert_eq!(state.markers().peek_first().unwrap().cell, Cell::new(5, 6));

        actor.step(&mut state, t0 + Duration::from_secs(2));
        assert_eq!(state.eaten(), 2);
        assert!(!state.is_seeking());
    }

    #[test]
    fn test_bet_on_head_is_eaten_in_place() {
        let mut actor = SnakeActor::seeded(PAUSE, 1);
        let mut state = SnakeGameState::new(Grid::new(10, 10).unwrap(), Cell::new(5, 5), true);
        state.place_bet(Cell::new(5, 5), MarkerTag(0));

        assert_eq!(
            actor.step(&mut state, Instant::now()),
            StepOutcome::Seeked { ate: true }
        );
        assert_eq!(state.snake().cells(), &[Cell::new(5, 5), Cell::new(5, 5)]);
    }

    #[test]
    fn test_roam_never_reverses_or_hits_body() {
        let t0 = Instant::now();
        for seed in 0..50 {
            let mut actor = SnakeActor::seeded(PAUSE, seed);
            let mut state = state_with(10, 10, &[(5, 5), (4, 5), (3, 5)]);

            let outcome = actor.step(&mut state, t0);

            let head = state.snake().head();
            assert_ne!(head, Cell::new(4, 5));
            assert_ne!(head, Cell::new(3, 5));
            assert!(matches!(
                outcome,
                StepOutcome::Roamed {
                    direction: Some(Direction::Right | Direction::Up | Direction::Down)
                }
            ));
        }
    }

    #[test]
    fn test_roam_blocked_by_edges_stays_in_place() {
        // Only the reversal and the off-grid moves are left
        let t0 = Instant::now();
        for seed in 0..20 {
            let mut actor = SnakeActor::seeded(PAUSE, seed);
            let mut state = state_with(6, 1, &[(5, 0), (4, 0), (3, 0)]);

            actor.step(&mut state, t0);

            assert_eq!(state.snake().head(), Cell::new(5, 0));
            assert!(in_bounds(&state));
        }
    }

    #[test]
    fn test_roam_with_no_candidates_stays_in_place() {
        // Head boxed in by its own body on all four sides
        let mut actor = SnakeActor::seeded(PAUSE, 9);
        let mut state = state_with(
            10,
            10,
            &[(5, 5), (5, 4), (6, 4), (6, 5), (6, 6), (5, 6), (4, 6), (4, 5)],
        );

        let outcome = actor.step(&mut state, Instant::now());

        assert_eq!(outcome, StepOutcome::Roamed { direction: None });
        assert_eq!(state.snake().head(), Cell::new(5, 5));
        assert_eq!(state.snake().cells()[1], Cell::new(5, 5));
        assert_eq!(state.snake().len(), 8);
    }

    #[test]
    fn test_roam_is_reproducible_with_seed() {
        let run = |seed| {
            let mut actor = SnakeActor::seeded(PAUSE, seed);
            let mut state = state_with(12, 12, &[(5, 5), (4, 5), (3, 5), (2, 5)]);
            let t0 = Instant::now();
            let mut trace = Vec::new();
            for i in 0..40 {
                actor.step(&mut state, t0 + Duration::from_millis(i * 200));
                trace.push(state.snake().head());
            }
            trace
        };

        assert_eq!(run(42), run(42));
    }

    #[test]
    fn test_bounds_and_length_invariants_over_long_run() {
        let mut actor = SnakeActor::seeded(PAUSE, 11);
        let mut placer = StdRng::seed_from_u64(99);
        let mut state = SnakeGameState::new(Grid::new(8, 6).unwrap(), Cell::new(5, 5), true);
        let t0 = Instant::now();

        for i in 0..500u64 {
            if i % 17 == 0 {
                let cell = Cell::new(placer.gen_range(0..8), placer.gen_range(0..6));
                state.place_bet(cell, MarkerTag::random(&mut placer));
            }
            let len_before = state.snake().len();
            let outcome = actor.step(&mut state, t0 + Duration::from_millis(i * 100));
            let len_after = state.snake().len();

            match outcome {
                StepOutcome::Seeked { ate: true } => assert_eq!(len_after, len_before + 1),
                _ => assert_eq!(len_after, len_before),
            }
            assert!(in_bounds(&state));
        }
        assert_eq!(state.snake().len() as u32, state.eaten() + 1);
    }

    #[test]
    fn test_seeking_flag_off_means_roam() {
        let mut actor = SnakeActor::seeded(PAUSE, 5);
        let mut state = SnakeGameState::new(Grid::new(10, 10).unwrap(), Cell::new(5, 5), true);
        state.place_bet(Cell::new(9, 9), MarkerTag(0));
        state.seeking = false;

        let outcome = actor.step(&mut state, Instant::now());
        assert!(matches!(outcome, StepOutcome::Roamed { .. }));
        assert_eq!(state.markers().len(), 1);
    }
}
