//! Interactive dashboard session: the render layer.
//!
//! Reads line commands from stdin and redraws the three cards (timer,
//! stats, tasks) after every transition. While the timer is running a
//! spawned tick task feeds one-second ticks into the session; the task is
//! aborted whenever the timer leaves the running state, on any path.

use devtracker_core::{format_clock, Command, Config, Dashboard, Event, Tab};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval, Duration, MissedTickBehavior};

use super::stats::bar;

/// Cancellable one-second tick source.
///
/// Dropping the handle aborts the spawned task, so pause, auto-pause at
/// zero, reset-while-running and session teardown all release the tick
/// the same way.
struct TickSource {
    handle: JoinHandle<()>,
}

impl TickSource {
    fn spawn(tx: mpsc::Sender<()>) -> Self {
        let handle = tokio::spawn(async move {
            let mut clock = interval(Duration::from_secs(1));
            clock.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // The first interval tick completes immediately; the countdown
            // should only move a full second after start.
            clock.tick().await;
            loop {
                clock.tick().await;
                if tx.send(()).await.is_err() {
                    break;
                }
            }
        });
        Self { handle }
    }
}

impl Drop for TickSource {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

enum LineAction {
    Apply(Command),
    Status,
    Help,
    Quit,
    Ignore,
}

fn parse_line(line: &str) -> Result<LineAction, String> {
    let mut parts = line.split_whitespace();
    let Some(head) = parts.next() else {
        return Ok(LineAction::Ignore);
    };
    let arg = parts.next();
    if parts.next().is_some() {
        return Err(format!("too many arguments for '{head}'"));
    }

    match (head, arg) {
        ("start", None) => Ok(LineAction::Apply(Command::Start)),
        ("pause", None) => Ok(LineAction::Apply(Command::Pause)),
        ("reset", None) => Ok(LineAction::Apply(Command::Reset)),
        ("apply", None) => Ok(LineAction::Apply(Command::Apply)),
        ("+", None) => Ok(LineAction::Apply(Command::Increment)),
        ("-", None) => Ok(LineAction::Apply(Command::Decrement)),
        ("set", Some(value)) => {
            let minutes = value
                .parse::<u32>()
                .map_err(|_| "usage: set <minutes>".to_string())?;
            Ok(LineAction::Apply(Command::SetDuration { minutes }))
        }
        ("set", None) => Err("usage: set <minutes>".into()),
        // "input" with nothing after it is the empty field.
        ("input", text) => Ok(LineAction::Apply(Command::SetRawInput {
            text: text.unwrap_or("").to_string(),
        })),
        ("toggle", Some(value)) => {
            let id = value
                .parse::<u32>()
                .map_err(|_| "usage: toggle <id>".to_string())?;
            Ok(LineAction::Apply(Command::ToggleTask { id }))
        }
        ("toggle", None) => Err("usage: toggle <id>".into()),
        ("tab", Some(value)) => {
            let tab: Tab = value.parse().map_err(|e| format!("{e}"))?;
            Ok(LineAction::Apply(Command::SetFilter { tab }))
        }
        ("tab", None) => Err("usage: tab <all|coding|learning>".into()),
        ("status", None) => Ok(LineAction::Status),
        ("help", None) => Ok(LineAction::Help),
        ("quit" | "exit", None) => Ok(LineAction::Quit),
        (
            "start" | "pause" | "reset" | "apply" | "+" | "-" | "status" | "help" | "quit"
            | "exit",
            Some(extra),
        ) => Err(format!("'{head}' takes no argument (got '{extra}')")),
        (other, _) => Err(format!("unknown command: {other} (try 'help')")),
    }
}

fn print_help() {
    println!("commands:");
    println!("  start | pause | reset      timer control");
    println!("  set <min> | + | - | apply  configure the duration");
    println!("  input <text>               type into the duration field");
    println!("  toggle <id>                check off a task");
    println!("  tab <all|coding|learning>  filter the task list");
    println!("  status | help | quit");
}

fn render(dash: &Dashboard, config: &Config) {
    let view = dash.view();
    let state = if view.timer.running { "running" } else { "idle" };

    println!();
    println!("=== Pomodoro Timer ===");
    println!("  {}  [{state}]", format_clock(view.timer.display_secs));
    if !view.timer.running {
        // The duration controls are hidden while running, as in the UI.
        println!(
            "  duration: {} min  (input: \"{}\")",
            view.timer.configured_minutes, view.timer.raw_input
        );
    }

    println!("=== Today's Coding Stats ===");
    println!("  Total Time: {} minutes", view.stats.total_minutes);
    for lang in &view.stats.languages {
        println!(
            "  {:<12} {:>3}% {}",
            lang.name,
            lang.percentage,
            bar(lang.percentage, 20, config.ui.unicode_bars)
        );
    }

    println!("=== Daily Tasks [{}] ===", view.tasks.active_tab);
    for task in dash.tasks().visible() {
        let mark = if task.completed { "x" } else { " " };
        println!("  [{mark}] {}. {}  ({})", task.id, task.title, task.category);
    }
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(session(config))
}

async fn session(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut dash = Dashboard::new(&config);
    // tick_tx outlives every TickSource, so recv() never closes.
    let (tick_tx, mut tick_rx) = mpsc::channel::<()>(1);
    let mut ticker: Option<TickSource> = None;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    render(&dash, &config);
    print_help();

    loop {
        tokio::select! {
            Some(()) = tick_rx.recv() => {
                let event = dash.tick();
                if !dash.timer().running() {
                    // Auto-pause at zero: release the tick source.
                    ticker = None;
                }
                if let Some(Event::TimerCompleted { .. }) = event {
                    println!("time is up");
                }
                render(&dash, &config);
            }
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match parse_line(line.trim()) {
                    Ok(LineAction::Apply(command)) => {
                        dash.apply(command);
                        match (dash.timer().running(), ticker.is_some()) {
                            (true, false) => ticker = Some(TickSource::spawn(tick_tx.clone())),
                            (false, true) => ticker = None,
                            _ => {}
                        }
                        render(&dash, &config);
                    }
                    Ok(LineAction::Status) => {
                        println!("{}", serde_json::to_string_pretty(&dash.snapshot())?);
                    }
                    Ok(LineAction::Help) => print_help(),
                    Ok(LineAction::Quit) => break,
                    Ok(LineAction::Ignore) => {}
                    Err(message) => eprintln!("{message}"),
                }
            }
        }
    }
    // Dropping `ticker` here aborts any pending tick task.
    Ok(())
}
