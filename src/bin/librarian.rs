//! Library Inventory Manager
//!
//! Interactive catalog menu over stdin/stdout.

use std::io;
use std::path::PathBuf;

use clap::Parser;
use librarian::config::{DEFAULT_CATALOG_PATH, DEFAULT_LOG_FILE, DEFAULT_LOG_FILTER};
use librarian::menu::{run_library, Prompter};
use librarian::{logging, CatalogStore, Config};

/// Library Inventory Manager
#[derive(Parser, Debug)]
#[command(name = "librarian")]
#[command(about = "Manage a JSON-backed library catalog from a text menu")]
#[command(version)]
struct Args {
    /// Catalog JSON file
    #[arg(short, long, default_value = DEFAULT_CATALOG_PATH)]
    catalog: PathBuf,

    /// Log file (appended to)
    #[arg(short, long, default_value = DEFAULT_LOG_FILE)]
    log_file: PathBuf,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = DEFAULT_LOG_FILTER)]
    log_filter: String,
}

fn main() {
    let args = Args::parse();

    let config = Config::builder()
        .catalog_path(&args.catalog)
        .log_file(&args.log_file)
        .log_filter(&args.log_filter)
        .build();

    let dispatch = match logging::build_dispatch(&config) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", args.log_file.display(), e);
            std::process::exit(1);
        }
    };

    let result = tracing::dispatcher::with_default(&dispatch, || {
        tracing::info!("librarian v{}", librarian::VERSION);

        let mut store = CatalogStore::open(&config);
        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut prompter = Prompter::new(stdin.lock(), stdout.lock());
        run_library(&mut store, &mut prompter)
    });

    if let Err(e) = result {
        eprintln!("Console error: {}", e);
        std::process::exit(1);
    }
}
