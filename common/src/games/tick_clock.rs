use std::time::Duration;

/// Most ticks a single `advance` call will release. A window that was
/// stalled (dragged, minimized) resumes instead of fast-forwarding.
pub const MAX_TICKS_PER_FRAME: u32 = 3;

/// Fixed-step clock that converts frame time into simulation ticks.
pub struct TickClock {
    interval: Duration,
    accumulated: Duration,
}

impl TickClock {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            accumulated: Duration::ZERO,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Adds `elapsed` and returns how many whole ticks are now due.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        if self.interval.is_zero() {
            return 0;
        }

        self.accumulated += elapsed;
        let mut due = 0;
        while self.accumulated >= self.interval && due < MAX_TICKS_PER_FRAME {
            self.accumulated -= self.interval;
            due += 1;
        }

        if due == MAX_TICKS_PER_FRAME && self.accumulated >= self.interval {
            self.accumulated = Duration::ZERO;
        }
        due
    }

    pub fn time_until_next_tick(&self) -> Duration {
        self.interval.saturating_sub(self.accumulated)
    }

    pub fn reset(&mut self) {
        self.accumulated = Duration::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eight_per_second() -> TickClock {
        TickClock::new(Duration::from_millis(125))
    }

    #[test]
    fn test_one_second_in_frames_gives_eight_ticks() {
        let mut clock = eight_per_second();
        let frame = Duration::from_micros(16_667);
        let total: u32 = (0..60).map(|_| clock.advance(frame)).sum();
        assert_eq!(total, 8);
    }

    #[test]
    fn test_remainder_carries_over() {
        let mut clock = eight_per_second();
        assert_eq!(clock.advance(Duration::from_millis(100)), 0);
        assert_eq!(clock.time_until_next_tick(), Duration::from_millis(25));
        assert_eq!(clock.advance(Duration::from_millis(30)), 1);
        assert_eq!(clock.time_until_next_tick(), Duration::from_millis(120));
    }

    #[test]
    fn test_long_stall_is_capped() {
        let mut clock = eight_per_second();
        assert_eq!(clock.advance(Duration::from_secs(10)), MAX_TICKS_PER_FRAME);
        assert_eq!(clock.time_until_next_tick(), Duration::from_millis(125));
    }

    #[test]
    fn test_reset_clears_accumulated_time() {
        let mut clock = eight_per_second();
        clock.advance(Duration::from_millis(120));
        clock.reset();
        assert_eq!(clock.advance(Duration::from_millis(10)), 0);
    }

    #[test]
    fn test_zero_interval_never_ticks() {
        let mut clock = TickClock::new(Duration::ZERO);
        assert_eq!(clock.advance(Duration::from_secs(1)), 0);
    }
}
