pub const GRID_WIDTH: u32 = 21;
pub const GRID_HEIGHT: u32 = 15;
pub const PADDING: u32 = 1;
pub const TICK_INTERVAL_MS: u32 = 125;
pub const INITIAL_SNAKE_LENGTH: u32 = 3;
pub const CELL_SIZE: u32 = 20;
