//! Dashboard aggregate: the boundary the render layer talks to.
//!
//! Owns one timer, one task list and the stats snapshot. The render layer
//! sends [`Command`]s and redraws from [`DashboardView`] after every
//! transition; the one-second tick is driven separately via [`Dashboard::tick`]
//! because it is autonomous, not a user command.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::events::Event;
use crate::stats::CodingStats;
use crate::task::{Tab, TaskList, TaskListView};
use crate::timer::{CountdownTimer, TimerView};

/// User commands accepted at the dashboard boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    Start,
    Pause,
    Reset,
    Apply,
    Increment,
    Decrement,
    SetDuration { minutes: u32 },
    SetRawInput { text: String },
    ToggleTask { id: u32 },
    SetFilter { tab: Tab },
}

/// Full read model for the render layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardView {
    pub timer: TimerView,
    pub tasks: TaskListView,
    pub stats: CodingStats,
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    timer: CountdownTimer,
    tasks: TaskList,
    stats: CodingStats,
}

impl Dashboard {
    pub fn new(config: &Config) -> Self {
        Self {
            timer: CountdownTimer::new(config.timer.default_minutes),
            tasks: TaskList::seed(),
            stats: CodingStats::today(),
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn timer(&self) -> &CountdownTimer {
        &self.timer
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    pub fn stats(&self) -> &CodingStats {
        &self.stats
    }

    pub fn view(&self) -> DashboardView {
        DashboardView {
            timer: self.timer.view(),
            tasks: self.tasks.view(),
            stats: self.stats.clone(),
        }
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            state: self.timer.state(),
            display_secs: self.timer.remaining_secs(),
            configured_minutes: self.timer.display_minutes(),
            raw_input: self.timer.raw_input().to_string(),
            active_tab: self.tasks.active_tab(),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Dispatch a user command. `None` means the command was a silent
    /// no-op (rejected input, unknown id, already in the target state).
    pub fn apply(&mut self, command: Command) -> Option<Event> {
        match command {
            Command::Start => self.timer.start(),
            Command::Pause => self.timer.pause(),
            Command::Reset => self.timer.reset(),
            Command::Apply => self.timer.apply(),
            Command::Increment => self.timer.increment(),
            Command::Decrement => self.timer.decrement(),
            Command::SetDuration { minutes } => self.timer.set_duration(minutes),
            Command::SetRawInput { text } => self.timer.set_raw_input(&text),
            Command::ToggleTask { id } => self.tasks.toggle(id),
            Command::SetFilter { tab } => self.tasks.set_filter(tab),
        }
    }

    /// One-second clock tick, forwarded to the timer.
    pub fn tick(&mut self) -> Option<Event> {
        self.timer.tick()
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::TimerState;

    #[test]
    fn commands_dispatch_to_the_right_store() {
        let mut dash = Dashboard::default();
        assert!(dash.apply(Command::Start).is_some());
        assert!(dash.timer().running());

        assert!(dash.apply(Command::ToggleTask { id: 1 }).is_some());
        assert!(dash.tasks().tasks()[0].completed);

        assert!(dash.apply(Command::SetFilter { tab: Tab::Learning }).is_some());
        assert_eq!(dash.tasks().active_tab(), Tab::Learning);
    }

    #[test]
    fn snapshot_reflects_defaults() {
        let dash = Dashboard::default();
        match dash.snapshot() {
            Event::StateSnapshot {
                state,
                display_secs,
                configured_minutes,
                active_tab,
                ..
            } => {
                assert_eq!(state, TimerState::Idle);
                assert_eq!(display_secs, 25 * 60);
                assert_eq!(configured_minutes, 25);
                assert_eq!(active_tab, Tab::All);
            }
            _ => panic!("Expected StateSnapshot"),
        }
    }

    #[test]
    fn config_default_minutes_flow_into_timer() {
        let mut config = Config::default();
        config.timer.default_minutes = 50;
        let dash = Dashboard::new(&config);
        assert_eq!(dash.timer().remaining_secs(), 50 * 60);
    }
}
