use clap::Subcommand;
use devtracker_core::{format_clock, Config, CountdownTimer};

#[derive(Subcommand)]
pub enum TimerAction {
    /// Format a second count as m:ss
    Fmt {
        /// Seconds to format
        secs: u32,
    },
    /// Print a fresh timer snapshot as JSON
    Status {
        /// Override the configured default duration (minutes)
        #[arg(long)]
        minutes: Option<u32>,
    },
}

pub fn run(action: TimerAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        TimerAction::Fmt { secs } => {
            println!("{}", format_clock(secs));
        }
        TimerAction::Status { minutes } => {
            let config = Config::load()?;
            let timer = CountdownTimer::new(minutes.unwrap_or(config.timer.default_minutes));
            println!("{}", serde_json::to_string_pretty(&timer.view())?);
        }
    }
    Ok(())
}
