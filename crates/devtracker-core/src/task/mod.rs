//! Daily task list with category filtering.
//!
//! Tasks are seeded once at dashboard creation (there is no create/delete
//! surface); `completed` is the only mutable field. The filter tab selects
//! the visible subset without reordering or caching anything.

use std::fmt;
use std::str::FromStr;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::events::Event;

/// Classification tag attached to a task, used for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Coding,
    Learning,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Coding => write!(f, "coding"),
            Category::Learning => write!(f, "learning"),
        }
    }
}

/// Active filter tab over the task list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    All,
    Coding,
    Learning,
}

impl Tab {
    /// Whether a task in `category` is visible under this tab.
    pub fn matches(self, category: Category) -> bool {
        match self {
            Tab::All => true,
            Tab::Coding => category == Category::Coding,
            Tab::Learning => category == Category::Learning,
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tab::All => write!(f, "all"),
            Tab::Coding => write!(f, "coding"),
            Tab::Learning => write!(f, "learning"),
        }
    }
}

#[derive(Debug, Error)]
#[error("unknown tab '{0}' (expected all, coding or learning)")]
pub struct ParseTabError(String);

impl FromStr for Tab {
    type Err = ParseTabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Tab::All),
            "coding" => Ok(Tab::Coding),
            "learning" => Ok(Tab::Learning),
            other => Err(ParseTabError(other.to_string())),
        }
    }
}

/// A single daily task. `id`, `title` and `category` are immutable after
/// creation; only `completed` ever changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub title: String,
    pub completed: bool,
    pub category: Category,
}

impl Task {
    pub fn new(id: u32, title: impl Into<String>, category: Category) -> Self {
        Self {
            id,
            title: title.into(),
            completed: false,
            category,
        }
    }
}

/// Read model exposed to the render layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskListView {
    pub tasks: Vec<Task>,
    pub active_tab: Tab,
}

/// Ordered task store plus the active filter tab.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskList {
    tasks: Vec<Task>,
    active_tab: Tab,
}

impl TaskList {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            active_tab: Tab::All,
        }
    }

    /// The static fixture list the dashboard ships with.
    pub fn seed() -> Self {
        Self::new(vec![
            Task::new(1, "Learn React Hooks", Category::Learning),
            Task::new(2, "Practice TypeScript", Category::Coding),
            Task::new(3, "Read Tech Articles", Category::Learning),
        ])
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    /// Tasks visible under the active tab, in insertion order. Lazily
    /// recomputed on every call; inputs only change via explicit commands.
    pub fn visible(&self) -> impl Iterator<Item = &Task> {
        let tab = self.active_tab;
        self.tasks.iter().filter(move |t| tab.matches(t.category))
    }

    pub fn view(&self) -> TaskListView {
        TaskListView {
            tasks: self.tasks.clone(),
            active_tab: self.active_tab,
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Flip `completed` on the matching task. An unknown id is a silent
    /// no-op, not an error.
    pub fn toggle(&mut self, id: u32) -> Option<Event> {
        let task = self.tasks.iter_mut().find(|t| t.id == id)?;
        task.completed = !task.completed;
        Some(Event::TaskToggled {
            id,
            completed: task.completed,
            at: Utc::now(),
        })
    }

    pub fn set_filter(&mut self, tab: Tab) -> Option<Event> {
        if tab == self.active_tab {
            return None;
        }
        self.active_tab = tab;
        Some(Event::FilterChanged {
            tab,
            at: Utc::now(),
        })
    }
}

impl Default for TaskList {
    fn default() -> Self {
        Self::seed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_has_three_tasks_in_order() {
        let list = TaskList::seed();
        let ids: Vec<u32> = list.tasks().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!(list.tasks().iter().all(|t| !t.completed));
    }

    #[test]
    fn toggle_flips_and_double_toggle_restores() {
        let mut list = TaskList::seed();
        assert!(matches!(
            list.toggle(2),
            Some(Event::TaskToggled { id: 2, completed: true, .. })
        ));
        assert!(list.tasks()[1].completed);

        list.toggle(2);
        assert!(!list.tasks()[1].completed);
    }

    #[test]
    fn toggle_unknown_id_is_noop() {
        let mut list = TaskList::seed();
        assert!(list.toggle(99).is_none());
        assert!(list.tasks().iter().all(|t| !t.completed));
    }

    #[test]
    fn coding_filter_selects_exact_subset_in_order() {
        let mut list = TaskList::seed();
        assert!(list.set_filter(Tab::Coding).is_some());
        let visible: Vec<&Task> = list.visible().collect();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, 2);
        assert!(visible.iter().all(|t| t.category == Category::Coding));
    }

    #[test]
    fn all_tab_shows_everything() {
        let list = TaskList::seed();
        assert_eq!(list.visible().count(), 3);
    }

    #[test]
    fn setting_same_filter_emits_nothing() {
        let mut list = TaskList::seed();
        assert!(list.set_filter(Tab::All).is_none());
        list.set_filter(Tab::Learning);
        assert!(list.set_filter(Tab::Learning).is_none());
        assert_eq!(list.active_tab(), Tab::Learning);
    }

    #[test]
    fn tab_parses_from_str() {
        assert_eq!("all".parse::<Tab>().unwrap(), Tab::All);
        assert_eq!("coding".parse::<Tab>().unwrap(), Tab::Coding);
        assert_eq!("learning".parse::<Tab>().unwrap(), Tab::Learning);
        assert!("done".parse::<Tab>().is_err());
    }
}
