use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::task::Tab;
use crate::timer::TimerState;

/// Every effective state change in the dashboard produces an Event.
/// Rejected or no-op input produces nothing. The render layer prints or
/// reacts to events; tests assert on them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    TimerStarted {
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    TimerPaused {
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    /// Countdown reached zero and auto-paused.
    TimerCompleted {
        configured_minutes: u32,
        at: DateTime<Utc>,
    },
    TimerReset {
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    /// The configured duration was pushed to the displayed time.
    DurationApplied {
        minutes: u32,
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    /// The configured duration changed (buttons or raw text input).
    DurationChanged {
        minutes: u32,
        raw_input: String,
        at: DateTime<Utc>,
    },
    TaskToggled {
        id: u32,
        completed: bool,
        at: DateTime<Utc>,
    },
    FilterChanged {
        tab: Tab,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        state: TimerState,
        display_secs: u32,
        configured_minutes: u32,
        raw_input: String,
        active_tab: Tab,
        at: DateTime<Utc>,
    },
}
