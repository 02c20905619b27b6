mod engine;

pub use engine::{
    format_clock, CountdownTimer, TimerState, TimerView, DEFAULT_MINUTES, MAX_MINUTES, MIN_MINUTES,
};
