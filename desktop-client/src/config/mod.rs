mod game_config;
mod main_config;
mod window_config;

pub(crate) use snake_common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};

pub use game_config::GameConfig;
pub use main_config::{get_config_manager, Config, CONFIG_FILE};
pub use window_config::WindowConfig;
