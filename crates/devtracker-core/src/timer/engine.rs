//! Countdown timer state machine.
//!
//! The timer is caller-ticked: it has no internal thread or clock. The
//! render layer invokes `tick()` once per second while the timer is
//! running and drops its tick source whenever the timer leaves `Running`.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Running -> Idle
//! ```
//!
//! `Running -> Idle` happens on `pause()`, on `reset()`, or automatically
//! when the countdown reaches zero.
//!
//! ## Usage
//!
//! ```ignore
//! let mut timer = CountdownTimer::new(25);
//! timer.start();
//! // Once per second while running:
//! timer.tick(); // Returns Some(Event::TimerCompleted) at zero
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::events::Event;

/// Smallest configurable duration in minutes.
pub const MIN_MINUTES: u32 = 1;
/// Largest configurable duration in minutes.
pub const MAX_MINUTES: u32 = 120;
/// Classic pomodoro default.
pub const DEFAULT_MINUTES: u32 = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerState {
    Idle,
    Running,
}

/// Read model exposed to the render layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerView {
    /// Seconds currently shown on the clock face.
    pub display_secs: u32,
    pub running: bool,
    /// Configured duration in minutes; 0 only while the input field is
    /// empty (display-only, never an applied duration).
    pub configured_minutes: u32,
    /// Unvalidated text mirror of the duration input field.
    pub raw_input: String,
}

/// Core countdown state machine.
///
/// All commands are total: malformed input is clamped or silently ignored,
/// never surfaced as an error. Commands return `Some(Event)` when state
/// actually changed and `None` on a rejected or no-op command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountdownTimer {
    state: TimerState,
    /// Seconds left on the clock face.
    remaining_secs: u32,
    /// Applied-duration candidate in minutes, always within
    /// `[MIN_MINUTES, MAX_MINUTES]`. An empty input field displays as 0
    /// without disturbing this value.
    configured_minutes: u32,
    raw_input: String,
}

impl CountdownTimer {
    /// Create an idle timer with the given duration in minutes (clamped).
    pub fn new(minutes: u32) -> Self {
        let m = minutes.clamp(MIN_MINUTES, MAX_MINUTES);
        Self {
            state: TimerState::Idle,
            remaining_secs: m * 60,
            configured_minutes: m,
            raw_input: m.to_string(),
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn running(&self) -> bool {
        self.state == TimerState::Running
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    /// Configured minutes as shown in the input row: 0 while the field
    /// is empty, otherwise the clamped stored value.
    pub fn display_minutes(&self) -> u32 {
        if self.raw_input.is_empty() {
            0
        } else {
            self.configured_minutes
        }
    }

    pub fn raw_input(&self) -> &str {
        &self.raw_input
    }

    pub fn view(&self) -> TimerView {
        TimerView {
            display_secs: self.remaining_secs,
            running: self.running(),
            configured_minutes: self.display_minutes(),
            raw_input: self.raw_input.clone(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    pub fn start(&mut self) -> Option<Event> {
        match self.state {
            TimerState::Idle => {
                self.state = TimerState::Running;
                Some(Event::TimerStarted {
                    remaining_secs: self.remaining_secs,
                    at: Utc::now(),
                })
            }
            TimerState::Running => None, // Already running.
        }
    }

    pub fn pause(&mut self) -> Option<Event> {
        match self.state {
            TimerState::Running => {
                self.state = TimerState::Idle;
                Some(Event::TimerPaused {
                    remaining_secs: self.remaining_secs,
                    at: Utc::now(),
                })
            }
            TimerState::Idle => None,
        }
    }

    /// Advance the countdown by one second. Only effective while running.
    ///
    /// Reaching zero clamps the clock and auto-pauses, so the caller must
    /// stop ticking when `Some(Event::TimerCompleted)` comes back.
    pub fn tick(&mut self) -> Option<Event> {
        if self.state != TimerState::Running {
            return None;
        }
        if self.remaining_secs <= 1 {
            self.remaining_secs = 0;
            self.state = TimerState::Idle;
            return Some(Event::TimerCompleted {
                configured_minutes: self.configured_minutes,
                at: Utc::now(),
            });
        }
        self.remaining_secs -= 1;
        None
    }

    /// Stop the timer and put the configured duration back on the clock.
    /// Never auto-starts.
    pub fn reset(&mut self) -> Option<Event> {
        self.state = TimerState::Idle;
        self.remaining_secs = self.configured_minutes * 60;
        Some(Event::TimerReset {
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    /// Push the configured duration to the clock face. Run state is
    /// untouched. While the input field is empty there is no duration to
    /// apply and the command is a no-op.
    pub fn apply(&mut self) -> Option<Event> {
        if self.raw_input.is_empty() {
            return None;
        }
        self.remaining_secs = self.configured_minutes * 60;
        Some(Event::DurationApplied {
            minutes: self.configured_minutes,
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    pub fn increment(&mut self) -> Option<Event> {
        self.set_duration(self.configured_minutes.saturating_add(1))
    }

    pub fn decrement(&mut self) -> Option<Event> {
        self.set_duration(self.configured_minutes.saturating_sub(1))
    }

    /// Set the configured duration in minutes, clamped to
    /// `[MIN_MINUTES, MAX_MINUTES]`. The input field mirror is kept in
    /// sync. No-op (and no event) when nothing changes.
    pub fn set_duration(&mut self, minutes: u32) -> Option<Event> {
        let m = minutes.clamp(MIN_MINUTES, MAX_MINUTES);
        let mirror = m.to_string();
        if m == self.configured_minutes && self.raw_input == mirror {
            return None;
        }
        self.configured_minutes = m;
        self.raw_input = mirror;
        Some(Event::DurationChanged {
            minutes: m,
            raw_input: self.raw_input.clone(),
            at: Utc::now(),
        })
    }

    /// Feed a keystroke-level update of the duration input field.
    ///
    /// Only the empty string or an all-digit string is accepted; anything
    /// else is rejected with no state change (the field simply does not
    /// update). Digits are parsed and clamped; the raw text is kept
    /// verbatim so the user sees exactly what they typed.
    pub fn set_raw_input(&mut self, text: &str) -> Option<Event> {
        if !text.chars().all(|c| c.is_ascii_digit()) {
            return None; // Rejected keystroke.
        }
        if text.is_empty() {
            if self.raw_input.is_empty() {
                return None;
            }
            self.raw_input.clear();
            return Some(Event::DurationChanged {
                minutes: 0,
                raw_input: String::new(),
                at: Utc::now(),
            });
        }
        // All digits; saturate absurd lengths before clamping.
        let parsed = text.parse::<u64>().unwrap_or(u64::MAX);
        let m = (parsed.min(MAX_MINUTES as u64) as u32).max(MIN_MINUTES);
        if m == self.configured_minutes && self.raw_input == text {
            return None;
        }
        self.configured_minutes = m;
        self.raw_input = text.to_string();
        Some(Event::DurationChanged {
            minutes: m,
            raw_input: self.raw_input.clone(),
            at: Utc::now(),
        })
    }
}

impl Default for CountdownTimer {
    fn default() -> Self {
        Self::new(DEFAULT_MINUTES)
    }
}

/// Format a second count as `m:ss` for the clock face.
pub fn format_clock(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn format_clock_contract() {
        assert_eq!(format_clock(0), "0:00");
        assert_eq!(format_clock(59), "0:59");
        assert_eq!(format_clock(60), "1:00");
        assert_eq!(format_clock(3661), "61:01");
    }

    #[test]
    fn start_pause_roundtrip() {
        let mut timer = CountdownTimer::new(25);
        assert_eq!(timer.state(), TimerState::Idle);

        assert!(timer.start().is_some());
        assert_eq!(timer.state(), TimerState::Running);
        assert!(timer.start().is_none());

        assert!(timer.pause().is_some());
        assert_eq!(timer.state(), TimerState::Idle);
        assert!(timer.pause().is_none());
    }

    #[test]
    fn pause_preserves_remaining() {
        let mut timer = CountdownTimer::new(1);
        timer.start();
        timer.tick();
        timer.tick();
        timer.pause();
        assert_eq!(timer.remaining_secs(), 58);
    }

    #[test]
    fn tick_is_noop_while_idle() {
        let mut timer = CountdownTimer::new(25);
        assert!(timer.tick().is_none());
        assert_eq!(timer.remaining_secs(), 25 * 60);
    }

    #[test]
    fn countdown_completes_and_auto_pauses() {
        let mut timer = CountdownTimer::new(1);
        timer.set_duration(1);
        timer.apply();
        assert_eq!(timer.remaining_secs(), 60);
        timer.start();

        let mut completed = None;
        for _ in 0..60 {
            if let Some(event) = timer.tick() {
                completed = Some(event);
            }
        }
        assert!(matches!(completed, Some(Event::TimerCompleted { .. })));
        assert!(!timer.running());
        assert_eq!(timer.remaining_secs(), 0);

        // Further ticks change nothing.
        assert!(timer.tick().is_none());
        assert_eq!(timer.remaining_secs(), 0);
    }

    #[test]
    fn reset_stops_and_restores_duration() {
        let mut timer = CountdownTimer::new(25);
        timer.start();
        timer.tick();
        assert!(timer.reset().is_some());
        assert!(!timer.running());
        assert_eq!(timer.remaining_secs(), 25 * 60);

        // Simulated time after reset has no effect.
        timer.tick();
        assert_eq!(timer.remaining_secs(), 25 * 60);
    }

    #[test]
    fn apply_does_not_change_run_state() {
        let mut timer = CountdownTimer::new(25);
        timer.set_duration(5);
        assert_eq!(timer.remaining_secs(), 25 * 60);
        timer.apply();
        assert_eq!(timer.remaining_secs(), 5 * 60);
        assert!(!timer.running());

        timer.start();
        timer.apply();
        assert!(timer.running());
    }

    #[test]
    fn increment_decrement_clamp_at_bounds() {
        let mut timer = CountdownTimer::new(120);
        assert!(timer.increment().is_none());
        assert_eq!(timer.display_minutes(), 120);

        let mut timer = CountdownTimer::new(1);
        assert!(timer.decrement().is_none());
        assert_eq!(timer.display_minutes(), 1);
    }

    #[test]
    fn raw_input_rejects_non_digits() {
        let mut timer = CountdownTimer::new(25);
        assert!(timer.set_raw_input("abc").is_none());
        assert!(timer.set_raw_input("1a2").is_none());
        assert!(timer.set_raw_input("-5").is_none());
        assert_eq!(timer.display_minutes(), 25);
        assert_eq!(timer.raw_input(), "25");
    }

    #[test]
    fn raw_input_clamps_but_keeps_text() {
        let mut timer = CountdownTimer::new(25);
        assert!(timer.set_raw_input("150").is_some());
        assert_eq!(timer.display_minutes(), 120);
        assert_eq!(timer.raw_input(), "150");

        assert!(timer.set_raw_input("0").is_some());
        assert_eq!(timer.display_minutes(), 1);
    }

    #[test]
    fn empty_raw_input_displays_zero_transiently() {
        let mut timer = CountdownTimer::new(25);
        assert!(timer.set_raw_input("").is_some());
        assert_eq!(timer.display_minutes(), 0);
        assert_eq!(timer.raw_input(), "");

        // An empty field has no applied duration.
        assert!(timer.apply().is_none());
        assert_eq!(timer.remaining_secs(), 25 * 60);
    }

    #[test]
    fn apply_with_empty_input_leaves_clock_untouched() {
        let mut timer = CountdownTimer::new(25);
        timer.set_raw_input("");
        timer.start();
        timer.tick();
        timer.tick();

        let before = timer.remaining_secs();
        assert!(timer.apply().is_none());
        assert_eq!(timer.remaining_secs(), before);
        assert!(timer.running());
    }

    #[test]
    fn view_reflects_state() {
        let mut timer = CountdownTimer::new(10);
        timer.start();
        let view = timer.view();
        assert_eq!(view.display_secs, 600);
        assert!(view.running);
        assert_eq!(view.configured_minutes, 10);
        assert_eq!(view.raw_input, "10");
    }

    proptest! {
        #[test]
        fn increment_then_decrement_is_identity_inside_bounds(m in 1u32..120) {
            let mut timer = CountdownTimer::new(m);
            timer.increment();
            timer.decrement();
            prop_assert_eq!(timer.display_minutes(), m);
        }

        #[test]
        fn configured_minutes_always_within_bounds(text in "[0-9]{0,6}") {
            let mut timer = CountdownTimer::new(25);
            timer.set_raw_input(&text);
            let shown = timer.display_minutes();
            prop_assert!(shown == 0 || (MIN_MINUTES..=MAX_MINUTES).contains(&shown));
            // Applied durations stay in bounds regardless of the field.
            timer.apply();
            prop_assert!((MIN_MINUTES * 60..=MAX_MINUTES * 60).contains(&timer.remaining_secs()));
        }

        #[test]
        fn format_clock_parses_back(secs in 0u32..=200_000) {
            let s = format_clock(secs);
            let (m, ss) = s.split_once(':').unwrap();
            prop_assert_eq!(ss.len(), 2);
            prop_assert_eq!(m.parse::<u32>().unwrap() * 60 + ss.parse::<u32>().unwrap(), secs);
        }
    }
}
