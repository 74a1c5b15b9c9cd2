use std::collections::HashSet;

use crate::games::SessionRng;
use crate::{debug_log, log};
use super::grid::PlayArea;
use super::settings::SnakeSessionSettings;
use super::snake::Snake;
use super::types::{Direction, GameError, GameStatus, Point, TickOutcome};

/// Upper bound on food placement draws before giving up.
pub const MAX_FOOD_SPAWN_ATTEMPTS: u32 = 1_000_000;

pub struct SnakeGameState {
    snake: Snake,
    food: Point,
    score: u32,
    status: GameStatus,
    play_area: PlayArea,
    initial_length: usize,
    rng: SessionRng,
}

impl SnakeGameState {
    pub fn new(settings: &SnakeSessionSettings, rng: SessionRng) -> Result<Self, GameError> {
        settings.validate().map_err(GameError::InvalidSettings)?;

        let play_area = settings.play_area();
        let initial_length = settings.initial_snake_length as usize;
        let start = Self::start_position(&play_area);

        let mut state = Self {
            snake: Snake::new(start, Direction::Right, initial_length, &play_area),
            food: start,
            score: 0,
            status: GameStatus::InProgress,
            play_area,
            initial_length,
            rng,
        };
        state.restart()?;
        Ok(state)
    }

    /// Builds a session around an existing snake and food cell.
    pub fn from_snake(play_area: PlayArea, snake: Snake, food: Point, rng: SessionRng) -> Self {
        let initial_length = snake.len();
        Self {
            snake,
            food,
            score: 0,
            status: GameStatus::InProgress,
            play_area,
            initial_length,
            rng,
        }
    }

    fn start_position(play_area: &PlayArea) -> Point {
        Point::new(play_area.x_min + 1, play_area.y_min + 1)
    }

    pub fn restart(&mut self) -> Result<(), GameError> {
        let start = Self::start_position(&self.play_area);
        let direction = self.rng.choose(&Direction::ALL).unwrap_or(Direction::Right);

        self.snake = Snake::new(start, direction, self.initial_length, &self.play_area);
        self.score = 0;
        self.status = GameStatus::InProgress;

        if let Err(e) = self.spawn_food() {
            self.status = GameStatus::GameOver;
            return Err(e);
        }

        log!(
            "New game: snake at {} heading {:?}, food at {}",
            start,
            direction,
            self.food
        );
        Ok(())
    }

    /// Queues a turn for the next tick. Reversing straight into the neck is
    /// ignored, as is any input once the game is over.
    pub fn set_pending_direction(&mut self, direction: Direction) -> bool {
        if self.is_game_over() || direction.is_opposite(&self.snake.direction) {
            return false;
        }

        self.snake.pending_direction = Some(direction);
        true
    }

    pub fn tick(&mut self) -> Result<TickOutcome, GameError> {
        if self.is_game_over() {
            return Ok(TickOutcome::Idle);
        }

        if let Some(new_direction) = self.snake.pending_direction.take() {
            self.snake.direction = new_direction;
        }

        let head = self
            .play_area
            .wrap_point(self.snake.head().offset(self.snake.direction));
        self.snake.body.push_front(head);

        let ate = head == self.food;
        if ate {
            self.score += 1;
            self.snake.target_length += 1;
            debug_log!("Ate food at {}. Score: {}", head, self.score);

            if let Err(e) = self.spawn_food() {
                self.status = GameStatus::GameOver;
                return Err(e);
            }
        } else if self.snake.len() > self.snake.target_length {
            self.snake.body.pop_back();
        }

        // Checked on the trimmed body: moving into the cell the tail just
        // left is legal.
        if self.snake.head_overlaps_body() {
            self.status = GameStatus::GameOver;
            log!(
                "Snake collided with itself at {}. Final score: {}",
                head,
                self.score
            );
            return Ok(TickOutcome::Collided { head });
        }

        if ate {
            Ok(TickOutcome::Ate {
                head,
                next_food: self.food,
            })
        } else {
            Ok(TickOutcome::Moved { head })
        }
    }

    /// Resamples uniformly over the whole play area until the cell is free.
    fn spawn_food(&mut self) -> Result<(), GameError> {
        let occupied: HashSet<Point> = self
            .snake
            .body
            .iter()
            .copied()
            .filter(|p| self.play_area.contains(*p))
            .collect();

        if occupied.len() >= self.play_area.cell_count() {
            log!("Cannot spawn food: snake fills the whole play area");
            return Err(GameError::NoFreeCell);
        }

        for _ in 0..MAX_FOOD_SPAWN_ATTEMPTS {
            let x = self.rng.random_range(self.play_area.x_min..self.play_area.x_max);
            let y = self.rng.random_range(self.play_area.y_min..self.play_area.y_max);
            let pos = Point::new(x, y);

            if !occupied.contains(&pos) {
                self.food = pos;
                debug_log!("Food spawned at {}", pos);
                return Ok(());
            }
        }

        Err(GameError::FoodSpawnExhausted {
            attempts: MAX_FOOD_SPAWN_ATTEMPTS,
        })
    }

    pub fn snake_positions(&self) -> impl ExactSizeIterator<Item = Point> + '_ {
        self.snake.body.iter().copied()
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food_position(&self) -> Point {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    pub fn direction(&self) -> Direction {
        self.snake.direction
    }

    pub fn play_area(&self) -> PlayArea {
        self.play_area
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}
