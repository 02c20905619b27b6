//! # DevTracker Core Library
//!
//! This library provides the core logic for DevTracker, a small developer
//! productivity dashboard. It implements a CLI-first philosophy where all
//! operations are available via a standalone CLI binary, with any GUI being
//! a thin render layer over the same core library.
//!
//! ## Architecture
//!
//! - **Timer**: A countdown state machine that requires the caller to
//!   invoke `tick()` once per second while running
//! - **Tasks**: An in-memory task list with category filtering
//! - **Stats**: A read-only snapshot of today's coding activity
//! - **Dashboard**: The aggregate the render layer talks to -- it accepts
//!   commands and exposes a view snapshot after each transition
//!
//! ## Key Components
//!
//! - [`CountdownTimer`]: Core timer state machine
//! - [`TaskList`]: Filterable daily task store
//! - [`Dashboard`]: Command dispatch and read model
//! - [`Config`]: Application configuration management

pub mod config;
pub mod dashboard;
pub mod error;
pub mod events;
pub mod stats;
pub mod task;
pub mod timer;

pub use config::Config;
pub use dashboard::{Command, Dashboard, DashboardView};
pub use error::ConfigError;
pub use events::Event;
pub use stats::{CodingStats, LanguageStat};
pub use task::{Category, ParseTabError, Tab, Task, TaskList, TaskListView};
pub use timer::{format_clock, CountdownTimer, TimerState, TimerView};
