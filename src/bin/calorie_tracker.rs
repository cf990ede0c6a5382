//! Calorie Tracker
//!
//! Session-only meal log over stdin/stdout.

use std::io;

use clap::Parser;
use librarian::menu::{run_tracker, CalorieLog, Prompter};
use librarian::{logging, Config};

/// Calorie Tracker
#[derive(Parser, Debug)]
#[command(name = "calorie-tracker")]
#[command(about = "Track meals and calories for the current session")]
#[command(version)]
struct Args {
    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_filter: String,
}

fn main() {
    let args = Args::parse();

    let config = Config::builder()
        .no_log_file()
        .log_filter(&args.log_filter)
        .build();

    let dispatch = match logging::build_dispatch(&config) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Failed to set up logging: {}", e);
            std::process::exit(1);
        }
    };

    let result = tracing::dispatcher::with_default(&dispatch, || {
        let mut log = CalorieLog::new();
        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut prompter = Prompter::new(stdin.lock(), stdout.lock());
        run_tracker(&mut log, &mut prompter)
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
