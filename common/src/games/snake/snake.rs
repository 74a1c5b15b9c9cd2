use std::collections::VecDeque;

use super::grid::PlayArea;
use super::types::{Direction, Point};

#[derive(Clone, Debug)]
pub struct Snake {
    pub body: VecDeque<Point>,
    pub direction: Direction,
    pub pending_direction: Option<Direction>,
    pub target_length: usize,
}

impl Snake {
    /// Builds a snake with its head on `start_pos` and the rest of the body
    /// trailing behind it, opposite to `direction`.
    ///
    /// Trailing segments may lie several cells past an edge, so they are
    /// folded back with modular wrapping rather than the one-step tick wrap.
    pub fn new(start_pos: Point, direction: Direction, length: usize, play_area: &PlayArea) -> Self {
        let (dx, dy) = direction.delta();
        let body = (0..length as i32)
            .map(|i| {
                play_area.wrap_point_modular(Point::new(start_pos.x - dx * i, start_pos.y - dy * i))
            })
            .collect();

        Self {
            body,
            direction,
            pending_direction: None,
            target_length: length,
        }
    }

    pub fn from_segments(segments: &[Point], direction: Direction) -> Self {
        Self {
            body: segments.iter().copied().collect(),
            direction,
            pending_direction: None,
            target_length: segments.len(),
        }
    }

    pub fn head(&self) -> Point {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn tail(&self) -> Point {
        *self.body.back().expect("Snake body should never be empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn occupies(&self, point: Point) -> bool {
        self.body.contains(&point)
    }

    /// True when the head shares its cell with any later segment.
    pub fn head_overlaps_body(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|segment| *segment == head)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_new_places_body_behind_head() {
        let area = PlayArea::from_grid(21, 15, 1);
        let snake = Snake::new(Point::new(5, 5), Direction::Right, 3, &area);
        let body: Vec<Point> = snake.body.iter().copied().collect();
        assert_eq!(body, vec![Point::new(5, 5), Point::new(4, 5), Point::new(3, 5)]);
        assert_eq!(snake.target_length, 3);
        assert_eq!(snake.pending_direction, None);
    }

    #[test]
    fn test_new_wraps_segments_into_play_area() {
        let area = PlayArea::from_grid(21, 15, 1);
        let snake = Snake::new(Point::new(2, 2), Direction::Right, 3, &area);
        let body: Vec<Point> = snake.body.iter().copied().collect();
        assert_eq!(body, vec![Point::new(2, 2), Point::new(1, 2), Point::new(18, 2)]);
        assert!(snake.body.iter().all(|p| area.contains(*p)));
    }

    #[test]
    fn test_long_initial_body_has_distinct_adjacent_cells() {
        let area = PlayArea::from_grid(21, 15, 1);
        for direction in Direction::ALL {
            for length in 4..=11 {
                let snake = Snake::new(Point::new(2, 2), direction, length, &area);
                let body: Vec<Point> = snake.body.iter().copied().collect();
                assert_eq!(body.len(), length);

                let unique: HashSet<Point> = body.iter().copied().collect();
                assert_eq!(unique.len(), length, "{:?} length {}: {:?}", direction, length, body);
                assert!(body.iter().all(|p| area.contains(*p)));

                // Each segment is one step ahead of the next, modulo wrap.
                for pair in body.windows(2) {
                    assert_eq!(area.wrap_point(pair[1].offset(direction)), pair[0]);
                }
            }
        }
    }

    #[test]
    fn test_new_wraps_right_heading_body_across_left_edge() {
        let area = PlayArea::from_grid(21, 15, 1);
        let snake = Snake::new(Point::new(2, 2), Direction::Right, 5, &area);
        let body: Vec<Point> = snake.body.iter().copied().collect();
        assert_eq!(
            body,
            vec![
                Point::new(2, 2),
                Point::new(1, 2),
                Point::new(18, 2),
                Point::new(17, 2),
                Point::new(16, 2),
            ]
        );
    }

    #[test]
    fn test_head_overlaps_body() {
        let looped = Snake::from_segments(
            &[Point::new(5, 5), Point::new(6, 5), Point::new(5, 5)],
            Direction::Left,
        );
        assert!(looped.head_overlaps_body());

        let straight = Snake::from_segments(
            &[Point::new(5, 5), Point::new(4, 5), Point::new(3, 5)],
            Direction::Right,
        );
        assert!(!straight.head_overlaps_body());
        assert_eq!(straight.tail(), Point::new(3, 5));
    }
}
