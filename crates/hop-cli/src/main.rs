//! hop CLI - shorthand commands for navigating git history.

use clap::Parser;

mod commands;
mod output;

use commands::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Goto { n } => commands::goto::run(n),
        Commands::Reset => commands::reset::run(),
        Commands::List { json } => commands::list::run(json),
        Commands::Diff { m, n } => commands::diff::run(m, n),
        Commands::Search { key, json } => commands::search::run(&key, json),
        Commands::Count { path, json } => commands::count::run(path.as_deref(), json),
        Commands::Completions { shell } => commands::completions::run(shell),
    };

    if let Err(e) = result {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
