use super::types::Point;

/// Maps a coordinate that just stepped off an axis back onto it.
///
/// `axis_max` is exclusive: the border is drawn on the `axis_max` cell, so
/// the last interior cell is `axis_max - 1`.
pub fn wrap(value: i32, axis_min: i32, axis_max: i32) -> i32 {
    if value < axis_min {
        axis_max - 1
    } else if value >= axis_max {
        axis_min
    } else {
        value
    }
}

/// Interior of the grid where the snake and food may live.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayArea {
    pub x_min: i32,
    pub x_max: i32,
    pub y_min: i32,
    pub y_max: i32,
}

impl PlayArea {
    /// Bounds for a `grid_width` x `grid_height` grid with `padding` cells
    /// of margin on every side.
    pub fn from_grid(grid_width: i32, grid_height: i32, padding: i32) -> Self {
        Self {
            x_min: padding,
            y_min: padding,
            x_max: grid_width - padding - 1,
            y_max: grid_height - padding - 1,
        }
    }

    pub fn width(&self) -> i32 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> i32 {
        self.y_max - self.y_min
    }

    pub fn cell_count(&self) -> usize {
        (self.width().max(0) as usize) * (self.height().max(0) as usize)
    }

    pub fn contains(&self, point: Point) -> bool {
        (self.x_min..self.x_max).contains(&point.x) && (self.y_min..self.y_max).contains(&point.y)
    }

    pub fn wrap_point(&self, point: Point) -> Point {
        Point::new(
            wrap(point.x, self.x_min, self.x_max),
            wrap(point.y, self.y_min, self.y_max),
        )
    }

    /// Folds a point any distance outside the area back into it.
    pub fn wrap_point_modular(&self, point: Point) -> Point {
        Point::new(
            self.x_min + (point.x - self.x_min).rem_euclid(self.width()),
            self.y_min + (point.y - self.y_min).rem_euclid(self.height()),
        )
    }
}
