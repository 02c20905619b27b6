use clap::Subcommand;
use devtracker_core::{CodingStats, Config};

#[derive(Subcommand)]
pub enum StatsAction {
    /// Today's coding stats
    Show {
        /// Output JSON
        #[arg(long)]
        json: bool,
    },
}

/// Render a percentage as a fixed-width progress bar.
pub fn bar(percentage: u8, width: usize, unicode: bool) -> String {
    let filled = (percentage.min(100) as usize * width) / 100;
    let (on, off) = if unicode { ('█', '░') } else { ('#', '-') };
    (0..width).map(|i| if i < filled { on } else { off }).collect()
}

pub fn run(action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        StatsAction::Show { json } => {
            let stats = CodingStats::today();
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                let config = Config::load()?;
                println!("Total Time: {} minutes", stats.total_minutes);
                for lang in &stats.languages {
                    println!(
                        "{:<12} {:>3}% {}",
                        lang.name,
                        lang.percentage,
                        bar(lang.percentage, 20, config.ui.unicode_bars)
                    );
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_width_and_fill() {
        assert_eq!(bar(0, 10, false), "----------");
        assert_eq!(bar(100, 10, false), "##########");
        assert_eq!(bar(50, 10, false), "#####-----");
        assert_eq!(bar(80, 20, false).matches('#').count(), 16);
    }
}
