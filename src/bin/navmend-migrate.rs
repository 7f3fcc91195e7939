use std::process::ExitCode;

use clap::Parser;

use navmend::navbar::NavbarMigration;
use navmend::report;
use navmend::rewrite::{self, BatchOptions};
use navmend::scan::ScanMode;

/// Migrate legacy static navbar markup to the script-driven include,
/// recursively from the current directory.
#[derive(Parser)]
#[command(name = "navmend-migrate")]
#[command(version)]
#[command(about = "Replace old navbar HTML with the new navbar structure")]
struct Cli {
    /// Apply changes to disk (default is dry run)
    #[arg(long)]
    apply: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let root = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(err) => {
            eprintln!("Error: cannot resolve current directory: {}", err);
            return ExitCode::FAILURE;
        }
    };

    report::print_banner(&root, cli.apply);

    let migration = NavbarMigration::new();
    let opts = BatchOptions {
        root,
        mode: ScanMode::Recursive,
        apply: cli.apply,
        show_depth: false,
    };

    match rewrite::run_batch(&opts, |content, _ctx| migration.apply(content)) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
