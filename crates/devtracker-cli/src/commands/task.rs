use clap::Subcommand;
use devtracker_core::{Tab, TaskList};

#[derive(Subcommand)]
pub enum TaskAction {
    /// List the seeded daily tasks through the filter
    List {
        /// Filter tab: all, coding or learning
        #[arg(long, default_value = "all")]
        tab: Tab,
        /// Output JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: TaskAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        TaskAction::List { tab, json } => {
            let mut list = TaskList::seed();
            list.set_filter(tab);

            if json {
                let visible: Vec<_> = list.visible().collect();
                println!("{}", serde_json::to_string_pretty(&visible)?);
            } else {
                for task in list.visible() {
                    let mark = if task.completed { "x" } else { " " };
                    println!("[{mark}] {}. {}  ({})", task.id, task.title, task.category);
                }
            }
        }
    }
    Ok(())
}
