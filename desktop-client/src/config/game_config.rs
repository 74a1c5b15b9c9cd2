use std::time::Duration;

use serde::{Deserialize, Serialize};
use snake_common::defaults;
use snake_common::games::snake::SnakeSessionSettings;

use super::Validate;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GameConfig {
    pub grid_width: u32,
    pub grid_height: u32,
    pub padding: u32,
    pub tick_interval_ms: u32,
    pub initial_snake_length: u32,
}

impl GameConfig {
    pub fn to_session_settings(&self) -> SnakeSessionSettings {
        SnakeSessionSettings {
            grid_width: self.grid_width,
            grid_height: self.grid_height,
            padding: self.padding,
            initial_snake_length: self.initial_snake_length,
            tick_interval: Duration::from_millis(self.tick_interval_ms as u64),
        }
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        self.to_session_settings().validate()
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: defaults::GRID_WIDTH,
            grid_height: defaults::GRID_HEIGHT,
            padding: defaults::PADDING,
            tick_interval_ms: defaults::TICK_INTERVAL_MS,
            initial_snake_length: defaults::INITIAL_SNAKE_LENGTH,
        }
    }
}
