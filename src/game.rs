use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::GridSize;
use crate::food::spawn_position;
use crate::input::{Direction, direction_change_is_valid};
use crate::snake::{Position, Snake};

/// Current high-level gameplay state.
///
/// `Paused` is entered only through a collision; an accepted directional
/// input resumes play.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Playing,
    Paused,
}

/// What ended a round.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameOverCause {
    WallCollision,
    SelfCollision,
}

/// Cause and final score of a finished round, kept for presentation after
/// the board itself has already been reset.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct RoundEnd {
    pub cause: GameOverCause,
    pub score: u32,
}

/// Per-tick event signals for the shell to map to side effects.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct TickEvents {
    pub ate_food: bool,
    pub game_over: Option<RoundEnd>,
}

/// Outcome of the three independent collision checks for one tick.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Collisions {
    pub ate_food: bool,
    pub hit_wall: bool,
    pub hit_self: bool,
}

/// Classifies the post-advance state of one tick.
///
/// All three checks run every tick and are not mutually exclusive; the
/// controller consumes every raised signal.
#[must_use]
pub fn evaluate_collisions(snake: &Snake, food: Position, bounds: GridSize) -> Collisions {
    let head = snake.head();

    Collisions {
        ate_food: head == food,
        hit_wall: !head.is_within_bounds(bounds),
        hit_self: snake.head_overlaps_body(),
    }
}

/// Complete mutable game state for one session.
///
/// Owns every shared gameplay resource (snake, food, score, status); all
/// mutation happens inside [`apply_direction`](Self::apply_direction) and
/// [`tick`](Self::tick), invoked synchronously from the frame loop.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Position,
    pub score: u32,
    pub status: GameStatus,
    /// Set on game-over, cleared when the next round starts.
    pub last_round: Option<RoundEnd>,
    pending_direction: Option<Direction>,
    bounds: GridSize,
    rng: StdRng,
}

impl GameState {
    /// Creates a fresh state with entropy-seeded food placement.
    #[must_use]
    pub fn new(bounds: GridSize) -> Self {
        Self::with_rng(bounds, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(bounds: GridSize, seed: u64) -> Self {
        Self::with_rng(bounds, StdRng::seed_from_u64(seed))
    }

    fn with_rng(bounds: GridSize, mut rng: StdRng) -> Self {
        let snake = Snake::initial();
        let food = spawn_position(&mut rng, bounds, &snake);

        Self {
            snake,
            food,
            score: 0,
            status: GameStatus::Playing,
            last_round: None,
            pending_direction: None,
            bounds,
            rng,
        }
    }

    /// Returns the grid bounds this session plays on.
    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    /// Latches a directional intent for the next tick.
    ///
    /// Reversals of the current travel direction are rejected outright: they
    /// neither latch nor resume a paused game. Accepted intents overwrite any
    /// earlier latch in the same tick window (last input wins) and resume
    /// play after a game-over.
    pub fn apply_direction(&mut self, direction: Direction) {
        if !direction_change_is_valid(self.snake.direction(), direction) {
            return;
        }

        self.pending_direction = Some(direction);

        if self.status == GameStatus::Paused {
            self.status = GameStatus::Playing;
            self.last_round = None;
        }
    }

    /// Advances the simulation by one gameplay tick.
    ///
    /// Merges the latched input direction, advances the snake, evaluates all
    /// collision signals and applies their effects. Returns the events raised
    /// during this tick; a suspended game returns no events.
    pub fn tick(&mut self) -> TickEvents {
        let mut events = TickEvents::default();
        if self.status != GameStatus::Playing {
            return events;
        }

        if let Some(direction) = self.pending_direction.take() {
            self.snake.set_direction(direction);
        }
        self.snake.advance();

        let collisions = evaluate_collisions(&self.snake, self.food, self.bounds);

        if collisions.ate_food {
            self.score += 1;
            self.snake.grow_next();
            self.food = spawn_position(&mut self.rng, self.bounds, &self.snake);
            events.ate_food = true;
        }

        if collisions.hit_wall || collisions.hit_self {
            let cause = if collisions.hit_wall {
                GameOverCause::WallCollision
            } else {
                GameOverCause::SelfCollision
            };
            let round = RoundEnd {
                cause,
                score: self.score,
            };

            self.game_over();
            self.last_round = Some(round);
            events.game_over = Some(round);
        }

        events
    }

    /// Resets the board and suspends ticking until new input resumes play.
    fn game_over(&mut self) {
        self.snake.reset();
        self.food = spawn_position(&mut self.rng, self.bounds, &self.snake);
        self.score = 0;
        self.pending_direction = None;
        self.status = GameStatus::Paused;
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GridSize;
    use crate::input::Direction;
    use crate::snake::{Position, Snake};

    use super::{GameOverCause, GameState, GameStatus, evaluate_collisions};

    const BOUNDS: GridSize = GridSize {
        width: 30,
        height: 30,
    };

    fn state_with(snake: Snake, food: Position) -> GameState {
        let mut state = GameState::new_with_seed(BOUNDS, 1);
        state.snake = snake;
        state.food = food;
        state
    }

    fn straight_body() -> Vec<Position> {
        vec![
            Position { x: 6, y: 9 },
            Position { x: 5, y: 9 },
            Position { x: 4, y: 9 },
        ]
    }

    #[test]
    fn plain_advance_shifts_body_without_signals() {
        let mut state = state_with(
            Snake::from_segments(straight_body(), Direction::Right),
            Position { x: 20, y: 20 },
        );

        let events = state.tick();

        assert!(!events.ate_food);
        assert!(events.game_over.is_none());
        assert_eq!(state.status, GameStatus::Playing);
        let segments: Vec<Position> = state.snake.segments().copied().collect();
        assert_eq!(
            segments,
            vec![
                Position { x: 7, y: 9 },
                Position { x: 6, y: 9 },
                Position { x: 5, y: 9 },
            ]
        );
    }

    #[test]
    fn eating_grows_scores_and_relocates_food() {
        let mut state = state_with(
            Snake::from_segments(straight_body(), Direction::Right),
            Position { x: 7, y: 9 },
        );

        let events = state.tick();
        assert!(events.ate_food);
        assert_eq!(state.score, 1);
        assert!(!state.snake.occupies(state.food));

        // Growth lands on the next advance.
        state.tick();
        assert_eq!(state.snake.len(), 4);
        let segments: Vec<Position> = state.snake.segments().copied().collect();
        assert_eq!(
            segments,
            vec![
                Position { x: 8, y: 9 },
                Position { x: 7, y: 9 },
                Position { x: 6, y: 9 },
                Position { x: 5, y: 9 },
            ]
        );
    }

    #[test]
    fn wall_collision_resets_board_and_suspends() {
        let mut state = state_with(
            Snake::from_segments(
                vec![Position { x: 29, y: 10 }, Position { x: 28, y: 10 }],
                Direction::Right,
            ),
            Position { x: 0, y: 0 },
        );
        state.score = 7;

        let events = state.tick();

        let round = events.game_over.expect("wall hit must end the round");
        assert_eq!(round.cause, GameOverCause::WallCollision);
        assert_eq!(round.score, 7);

        assert_eq!(state.status, GameStatus::Paused);
        assert_eq!(state.score, 0);
        assert_eq!(state.snake.len(), 4);
        assert_eq!(state.snake.head(), Position { x: 6, y: 9 });
        assert!(!state.snake.occupies(state.food));
    }

    #[test]
    fn left_and_top_edges_also_end_the_round() {
        let mut leftward = state_with(
            Snake::from_segments(
                vec![Position { x: 0, y: 5 }, Position { x: 1, y: 5 }],
                Direction::Left,
            ),
            Position { x: 20, y: 20 },
        );
        assert!(leftward.tick().game_over.is_some());

        let mut upward = state_with(
            Snake::from_segments(
                vec![Position { x: 5, y: 0 }, Position { x: 5, y: 1 }],
                Direction::Up,
            ),
            Position { x: 20, y: 20 },
        );
        assert!(upward.tick().game_over.is_some());
    }

    #[test]
    fn self_collision_ends_the_round() {
        // Head at (2,2) turning left into a loop that still occupies (1,2).
        let mut state = state_with(
            Snake::from_segments(
                vec![
                    Position { x: 2, y: 2 },
                    Position { x: 1, y: 2 },
                    Position { x: 1, y: 3 },
                    Position { x: 2, y: 3 },
                    Position { x: 3, y: 3 },
                    Position { x: 3, y: 2 },
                ],
                Direction::Left,
            ),
            Position { x: 20, y: 20 },
        );

        let events = state.tick();

        let round = events.game_over.expect("self hit must end the round");
        assert_eq!(round.cause, GameOverCause::SelfCollision);
        assert_eq!(state.status, GameStatus::Paused);
    }

    #[test]
    fn no_duplicate_cells_survive_a_running_tick() {
        let mut state = state_with(
            Snake::from_segments(
                vec![
                    Position { x: 2, y: 2 },
                    Position { x: 1, y: 2 },
                    Position { x: 1, y: 3 },
                    Position { x: 2, y: 3 },
                    Position { x: 3, y: 3 },
                    Position { x: 3, y: 2 },
                ],
                Direction::Left,
            ),
            Position { x: 20, y: 20 },
        );

        state.tick();

        // The duplicating tick terminated the round; the reset body is clean.
        assert_eq!(state.status, GameStatus::Paused);
        let segments: Vec<Position> = state.snake.segments().copied().collect();
        for (index, cell) in segments.iter().enumerate() {
            assert!(!segments[index + 1..].contains(cell));
        }
    }

    #[test]
    fn reversal_input_is_rejected_and_direction_kept() {
        let mut state = state_with(
            Snake::from_segments(straight_body(), Direction::Right),
            Position { x: 20, y: 20 },
        );

        state.apply_direction(Direction::Left);
        state.tick();

        // The advance still used the current direction.
        assert_eq!(state.snake.head(), Position { x: 7, y: 9 });
        assert_eq!(state.snake.direction(), Direction::Right);
    }

    #[test]
    fn last_accepted_input_wins_within_one_tick_window() {
        let mut state = state_with(
            Snake::from_segments(straight_body(), Direction::Right),
            Position { x: 20, y: 20 },
        );

        state.apply_direction(Direction::Up);
        state.apply_direction(Direction::Down);
        state.tick();

        assert_eq!(state.snake.head(), Position { x: 6, y: 10 });
    }

    #[test]
    fn reversal_does_not_resume_a_paused_game() {
        let mut state = state_with(
            Snake::from_segments(
                vec![Position { x: 29, y: 10 }, Position { x: 28, y: 10 }],
                Direction::Right,
            ),
            Position { x: 0, y: 0 },
        );
        state.tick();
        assert_eq!(state.status, GameStatus::Paused);

        // The reset snake travels right; left is a reversal.
        state.apply_direction(Direction::Left);
        assert_eq!(state.status, GameStatus::Paused);
        assert_eq!(state.tick(), super::TickEvents::default());

        // An accepted direction resumes and steers the next advance.
        state.apply_direction(Direction::Up);
        assert_eq!(state.status, GameStatus::Playing);
        assert!(state.last_round.is_none());
        state.tick();
        assert_eq!(state.snake.head(), Position { x: 6, y: 8 });
    }

    #[test]
    fn collision_signals_are_independent() {
        let bounds = GridSize {
            width: 4,
            height: 4,
        };

        // Head off-grid and on the (hypothetical) food cell at once.
        let snake = Snake::from_segments(
            vec![Position { x: 4, y: 1 }, Position { x: 3, y: 1 }],
            Direction::Right,
        );
        let collisions = evaluate_collisions(&snake, Position { x: 4, y: 1 }, bounds);
        assert!(collisions.ate_food);
        assert!(collisions.hit_wall);
        assert!(!collisions.hit_self);

        let clean = Snake::from_segments(
            vec![Position { x: 1, y: 1 }, Position { x: 0, y: 1 }],
            Direction::Right,
        );
        let collisions = evaluate_collisions(&clean, Position { x: 3, y: 3 }, bounds);
        assert!(!collisions.ate_food);
        assert!(!collisions.hit_wall);
        assert!(!collisions.hit_self);
    }

    #[test]
    fn initial_food_is_never_on_the_snake() {
        for seed in 0..50 {
            let state = GameState::new_with_seed(BOUNDS, seed);
            assert!(!state.snake.occupies(state.food));
            assert!(state.food.is_within_bounds(BOUNDS));
        }
    }
}
