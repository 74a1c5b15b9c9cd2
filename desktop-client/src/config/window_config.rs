use serde::{Deserialize, Serialize};
use snake_common::defaults;

use super::Validate;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct WindowConfig {
    pub cell_size: u32,
}

impl Validate for WindowConfig {
    fn validate(&self) -> Result<(), String> {
        if !(4..=64).contains(&self.cell_size) {
            return Err(format!(
                "cell_size must be between 4 and 64, got {}",
                self.cell_size
            ));
        }
        Ok(())
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            cell_size: defaults::CELL_SIZE,
        }
    }
}
