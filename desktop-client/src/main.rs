mod app;
mod colors;
mod config;
mod input;
mod render;

use std::path::PathBuf;

use clap::Parser;
use eframe::egui;
use snake_common::games::SessionRng;
use snake_common::games::snake::SnakeGameState;
use snake_common::{log, logger};

use app::SnakeApp;
use config::{get_config_manager, Config, CONFIG_FILE};

#[derive(Parser)]
#[command(name = "nokia_snake", version, about = "Nokia 3310 style snake")]
struct Args {
    /// Path of the YAML config file
    #[arg(long, default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Fixed RNG seed, for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Write the default config to --config and exit
    #[arg(long)]
    write_default_config: bool,

    #[arg(long)]
    use_log_prefix: bool,

    /// Log every food spawn and ignored turn
    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Snake".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.verbose);

    let config_manager = get_config_manager(&args.config);

    if args.write_default_config {
        config_manager.set_config(&Config::default())?;
        log!("Default config written to {}", args.config.display());
        return Ok(());
    }

    let config = config_manager.get_config().inspect_err(|e| {
        log!("Failed to load config from {}: {}", args.config.display(), e);
    })?;

    let settings = config.game.to_session_settings();
    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!(
        "Starting {}x{} grid, {}ms per tick, seed {}",
        settings.grid_width,
        settings.grid_height,
        settings.tick_interval.as_millis(),
        rng.seed()
    );

    let game = SnakeGameState::new(&settings, rng)?;
    let app = SnakeApp::new(
        game,
        settings.tick_interval,
        settings.grid_width,
        settings.grid_height,
        &config.window,
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(app.window_size())
            .with_resizable(false)
            .with_title("Nokia Snake"),
        ..Default::default()
    };

    eframe::run_native(
        "Nokia Snake",
        options,
        Box::new(move |_cc| Ok(Box::new(app))),
    )?;

    log!("Bye");
    Ok(())
}
