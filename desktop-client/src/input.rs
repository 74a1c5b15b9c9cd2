use eframe::egui;
use snake_common::games::snake::Direction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputCommand {
    Turn(Direction),
    Restart,
    Quit,
}

pub fn command_for_key(key: egui::Key) -> Option<InputCommand> {
    match key {
        egui::Key::ArrowUp | egui::Key::W => Some(InputCommand::Turn(Direction::Up)),
        egui::Key::ArrowDown | egui::Key::S => Some(InputCommand::Turn(Direction::Down)),
        egui::Key::ArrowLeft | egui::Key::A => Some(InputCommand::Turn(Direction::Left)),
        egui::Key::ArrowRight | egui::Key::D => Some(InputCommand::Turn(Direction::Right)),
        egui::Key::Space => Some(InputCommand::Restart),
        egui::Key::Escape => Some(InputCommand::Quit),
        _ => None,
    }
}

/// Commands for this frame's fresh key presses, in the order they arrived.
pub fn collect_commands(ctx: &egui::Context) -> Vec<InputCommand> {
    ctx.input(|i| {
        i.events
            .iter()
            .filter_map(|event| match event {
                egui::Event::Key {
                    key,
                    pressed: true,
                    repeat: false,
                    ..
                } => command_for_key(*key),
                _ => None,
            })
            .collect()
    })
}
