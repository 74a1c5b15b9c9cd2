use eframe::egui;
use snake_common::games::snake::{PlayArea, Point, SnakeGameState};

use crate::colors::{NOKIA_BG, NOKIA_FG, PHONE_FRAME};

const FRAME_THICKNESS: f32 = 10.0;
const BORDER_THICKNESS: f32 = 1.0;
const SEGMENT_INSET: f32 = 4.0;
const FOOD_INSET: f32 = 6.0;

/// Maps grid cells and bottom-left based pixel offsets to screen space.
///
/// The game's `y` axis grows upward while egui's grows downward, so every
/// rectangle is flipped against the screen height.
#[derive(Clone, Copy, Debug)]
pub struct ScreenLayout {
    origin: egui::Pos2,
    cell_size: f32,
    width: f32,
    height: f32,
}

impl ScreenLayout {
    pub fn new(origin: egui::Pos2, cell_size: f32, grid_width: u32, grid_height: u32) -> Self {
        Self {
            origin,
            cell_size,
            width: grid_width as f32 * cell_size,
            height: grid_height as f32 * cell_size,
        }
    }

    pub fn size(&self) -> egui::Vec2 {
        egui::vec2(self.width, self.height)
    }

    /// Rectangle whose bottom-left corner is `(x, y)` pixels from the
    /// bottom-left of the screen.
    pub fn rect_from_bottom_left(&self, x: f32, y: f32, w: f32, h: f32) -> egui::Rect {
        egui::Rect::from_min_size(
            egui::pos2(self.origin.x + x, self.origin.y + self.height - y - h),
            egui::vec2(w, h),
        )
    }

    pub fn cell_rect(&self, cell: Point) -> egui::Rect {
        self.rect_from_bottom_left(
            cell.x as f32 * self.cell_size,
            cell.y as f32 * self.cell_size,
            self.cell_size,
            self.cell_size,
        )
    }

    /// Screen point `(x, y)` pixels from the bottom-left corner.
    pub fn point_from_bottom_left(&self, x: f32, y: f32) -> egui::Pos2 {
        egui::pos2(self.origin.x + x, self.origin.y + self.height - y)
    }
}

pub fn draw_game(painter: &egui::Painter, layout: &ScreenLayout, game: &SnakeGameState) {
    painter.rect_filled(
        egui::Rect::from_min_size(layout.origin, layout.size()),
        0.0,
        NOKIA_BG,
    );

    draw_phone_frame(painter, layout);
    draw_play_area_border(painter, layout, &game.play_area());
    draw_food(painter, layout, game.food_position());
    draw_snake(painter, layout, game);
    draw_score(painter, layout, game.score());

    if game.is_game_over() {
        draw_game_over(painter, layout, game.score());
    }
}

fn draw_phone_frame(painter: &egui::Painter, layout: &ScreenLayout) {
    let (w, h) = (layout.width, layout.height);
    let t = FRAME_THICKNESS;
    for rect in [
        layout.rect_from_bottom_left(0.0, h - t, w, t),
        layout.rect_from_bottom_left(0.0, 0.0, w, t),
        layout.rect_from_bottom_left(0.0, 0.0, t, h),
        layout.rect_from_bottom_left(w - t, 0.0, t, h),
    ] {
        painter.rect_filled(rect, 0.0, PHONE_FRAME);
    }
}

/// The snake never reaches `x_max`/`y_max`, so the border sits on them.
fn draw_play_area_border(painter: &egui::Painter, layout: &ScreenLayout, area: &PlayArea) {
    let x1 = area.x_min as f32 * layout.cell_size;
    let y1 = area.y_min as f32 * layout.cell_size;
    let x2 = area.x_max as f32 * layout.cell_size;
    let y2 = area.y_max as f32 * layout.cell_size;
    let t = BORDER_THICKNESS;

    for rect in [
        layout.rect_from_bottom_left(x1, y2, x2 - x1, t),
        layout.rect_from_bottom_left(x1, y1, x2 - x1, t),
        layout.rect_from_bottom_left(x1, y1, t, y2 - y1),
        layout.rect_from_bottom_left(x2 - t, y1, t, y2 - y1),
    ] {
        painter.rect_filled(rect, 0.0, NOKIA_FG);
    }
}

fn draw_snake(painter: &egui::Painter, layout: &ScreenLayout, game: &SnakeGameState) {
    let area = game.play_area();
    for (i, segment) in game.snake_positions().enumerate() {
        if !area.contains(segment) {
            continue;
        }

        let rect = layout.cell_rect(segment);
        painter.rect_filled(rect, 0.0, NOKIA_FG);
        if i > 0 {
            painter.rect_filled(rect.shrink(SEGMENT_INSET), 0.0, NOKIA_BG);
        }
    }
}

fn draw_food(painter: &egui::Painter, layout: &ScreenLayout, food: Point) {
    let rect = layout.cell_rect(food);
    painter.rect_filled(rect, 0.0, NOKIA_FG);
    painter.rect_filled(rect.shrink(FOOD_INSET), 0.0, NOKIA_BG);
}

fn draw_score(painter: &egui::Painter, layout: &ScreenLayout, score: u32) {
    painter.text(
        layout.point_from_bottom_left(30.0, layout.height - 30.0),
        egui::Align2::LEFT_CENTER,
        format!("Score: {}", score),
        egui::FontId::proportional(18.0),
        NOKIA_FG,
    );
}

fn draw_game_over(painter: &egui::Painter, layout: &ScreenLayout, score: u32) {
    let (w, h) = (layout.width, layout.height);
    let panel = layout.rect_from_bottom_left(w / 4.0, h / 4.0, w / 2.0, h / 2.0);
    painter.rect_filled(panel, 0.0, NOKIA_FG);
    painter.rect_filled(panel.shrink(3.0), 0.0, NOKIA_BG);

    let lines = [
        ("GAME OVER".to_string(), 30.0, 30.0),
        (format!("Score: {}", score), 0.0, 22.0),
        ("Press SPACE to restart".to_string(), -30.0, 16.0),
    ];
    for (text, offset, size) in lines {
        painter.text(
            layout.point_from_bottom_left(w / 2.0, h / 2.0 + offset),
            egui::Align2::CENTER_CENTER,
            text,
            egui::FontId::proportional(size),
            NOKIA_FG,
        );
    }
}
