mod session_rng;
mod tick_clock;

pub mod snake;

pub use session_rng::SessionRng;
pub use tick_clock::{TickClock, MAX_TICKS_PER_FRAME};
