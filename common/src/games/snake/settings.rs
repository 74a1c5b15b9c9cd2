use std::time::Duration;

use crate::defaults;
use super::grid::PlayArea;

#[derive(Clone, Debug, PartialEq)]
pub struct SnakeSessionSettings {
    pub grid_width: u32,
    pub grid_height: u32,
    pub padding: u32,
    pub initial_snake_length: u32,
    pub tick_interval: Duration,
}

impl Default for SnakeSessionSettings {
    fn default() -> Self {
        Self {
            grid_width: defaults::GRID_WIDTH,
            grid_height: defaults::GRID_HEIGHT,
            padding: defaults::PADDING,
            initial_snake_length: defaults::INITIAL_SNAKE_LENGTH,
            tick_interval: Duration::from_millis(defaults::TICK_INTERVAL_MS as u64),
        }
    }
}

impl SnakeSessionSettings {
    pub fn play_area(&self) -> PlayArea {
        PlayArea::from_grid(
            self.grid_width as i32,
            self.grid_height as i32,
            self.padding as i32,
        )
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(5..=100).contains(&self.grid_width) {
            return Err(format!(
                "Grid width must be between 5 and 100, got {}",
                self.grid_width
            ));
        }
        if !(5..=100).contains(&self.grid_height) {
            return Err(format!(
                "Grid height must be between 5 and 100, got {}",
                self.grid_height
            ));
        }

        let area = self.play_area();
        if area.width() < 3 || area.height() < 3 {
            return Err(format!(
                "Padding {} leaves a {}x{} play area, at least 3x3 is required",
                self.padding,
                area.width(),
                area.height()
            ));
        }

        let tick_ms = self.tick_interval.as_millis();
        if !(20..=2000).contains(&tick_ms) {
            return Err(format!(
                "Tick interval must be between 20ms and 2000ms, got {}ms",
                tick_ms
            ));
        }

        let max_length = area.width().min(area.height()) - 1;
        if self.initial_snake_length < 1 || self.initial_snake_length as i32 > max_length {
            return Err(format!(
                "Initial snake length must be between 1 and {}, got {}",
                max_length, self.initial_snake_length
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(SnakeSessionSettings::default().validate().is_ok());
    }

    #[test]
    fn test_default_tick_rate_is_eight_per_second() {
        let settings = SnakeSessionSettings::default();
        assert_eq!(settings.tick_interval * 8, Duration::from_secs(1));
    }

    #[test]
    fn test_padding_too_large_is_rejected() {
        let settings = SnakeSessionSettings {
            grid_width: 9,
            grid_height: 9,
            padding: 3,
            ..SnakeSessionSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_snake_longer_than_area_is_rejected() {
        let settings = SnakeSessionSettings {
            grid_width: 7,
            grid_height: 7,
            padding: 1,
            initial_snake_length: 4,
            ..SnakeSessionSettings::default()
        };
        // 7x7 grid with padding 1 leaves a 4x4 area
        assert!(settings.validate().is_err());

        let shorter = SnakeSessionSettings {
            initial_snake_length: 3,
            ..settings
        };
        assert!(shorter.validate().is_ok());
    }

    #[test]
    fn test_tick_interval_bounds() {
        let too_fast = SnakeSessionSettings {
            tick_interval: Duration::from_millis(5),
            ..SnakeSessionSettings::default()
        };
        assert!(too_fast.validate().is_err());
    }
}
