use std::time::{Duration, Instant};

use eframe::egui;
use snake_common::games::TickClock;
use snake_common::games::snake::{SnakeGameState, TickOutcome};
use snake_common::{debug_log, log};

use crate::config::WindowConfig;
use crate::input::{collect_commands, InputCommand};
use crate::render::{draw_game, ScreenLayout};

pub struct SnakeApp {
    game: SnakeGameState,
    clock: TickClock,
    last_frame: Option<Instant>,
    cell_size: f32,
    grid_width: u32,
    grid_height: u32,
}

impl SnakeApp {
    pub fn new(
        game: SnakeGameState,
        tick_interval: Duration,
        grid_width: u32,
        grid_height: u32,
        window: &WindowConfig,
    ) -> Self {
        Self {
            game,
            clock: TickClock::new(tick_interval),
            last_frame: None,
            cell_size: window.cell_size as f32,
            grid_width,
            grid_height,
        }
    }

    pub fn window_size(&self) -> [f32; 2] {
        [
            self.grid_width as f32 * self.cell_size,
            self.grid_height as f32 * self.cell_size,
        ]
    }

    fn apply_command(&mut self, ctx: &egui::Context, command: InputCommand) {
        match command {
            InputCommand::Quit => {
                log!("Quit requested");
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
            InputCommand::Restart => {
                if !self.game.is_game_over() {
                    return;
                }
                match self.game.restart() {
                    Ok(()) => self.clock.reset(),
                    Err(e) => log!("Failed to restart game: {}", e),
                }
            }
            InputCommand::Turn(direction) => {
                if !self.game.set_pending_direction(direction) {
                    debug_log!("Ignored turn to {:?}", direction);
                }
            }
        }
    }

    fn advance_simulation(&mut self) {
        let now = Instant::now();
        let elapsed = self
            .last_frame
            .map(|last| now.duration_since(last))
            .unwrap_or_default();
        self.last_frame = Some(now);

        for _ in 0..self.clock.advance(elapsed) {
            match self.game.tick() {
                Ok(TickOutcome::Ate { next_food, .. }) => {
                    debug_log!("Score {}, next food at {}", self.game.score(), next_food);
                }
                Ok(TickOutcome::Collided { .. }) | Ok(TickOutcome::Idle) => break,
                Ok(TickOutcome::Moved { .. }) => {}
                Err(e) => {
                    log!("Game stopped: {}", e);
                    break;
                }
            }
        }
    }
}

impl eframe::App for SnakeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for command in collect_commands(ctx) {
            self.apply_command(ctx, command);
        }

        self.advance_simulation();

        egui::CentralPanel::default()
            .frame(egui::Frame::new())
            .show(ctx, |ui| {
                let layout = ScreenLayout::new(
                    ui.max_rect().min,
                    self.cell_size,
                    self.grid_width,
                    self.grid_height,
                );
                let (_response, painter) = ui.allocate_painter(layout.size(), egui::Sense::hover());
                draw_game(&painter, &layout, &self.game);
            });

        if self.game.is_game_over() {
            // Nothing moves until a key arrives, and key events repaint on
            // their own.
            self.last_frame = None;
        } else {
            ctx.request_repaint_after(self.clock.time_until_next_tick());
        }
    }
}
