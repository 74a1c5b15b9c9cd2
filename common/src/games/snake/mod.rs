mod game_state;
mod grid;
mod settings;
mod snake;
mod types;

pub use game_state::{SnakeGameState, MAX_FOOD_SPAWN_ATTEMPTS};
pub use grid::{wrap, PlayArea};
pub use settings::SnakeSessionSettings;
pub use snake::Snake;
pub use types::{Direction, GameError, GameStatus, Point, TickOutcome};
