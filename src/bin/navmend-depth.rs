use std::process::ExitCode;

use clap::Parser;

use navmend::depth::{base_path, DepthRule};
use navmend::report;
use navmend::rewrite::{self, BatchOptions};
use navmend::scan::{self, ScanMode};

/// Rewrite loadNavbar() calls to carry the base path implied by each
/// file's depth below the current directory.
#[derive(Parser)]
#[command(name = "navmend-depth")]
#[command(version)]
#[command(about = "Update loadNavbar calls with the basePath for each file's depth")]
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

    let rule = DepthRule::new();
    let opts = BatchOptions {
        root: root.clone(),
        mode: ScanMode::Recursive,
        apply: cli.apply,
        show_depth: true,
    };

    let run = match rewrite::run_batch(&opts, |content, ctx| rule.apply(content, ctx.depth)) {
        Ok(run) => run,
        Err(err) => {
            eprintln!("Error: {}", err);
            return ExitCode::FAILURE;
        }
    };

    if run.changed > 0 {
        print_directory_structure(&opts);
    }

    ExitCode::SUCCESS
}

/// List every scanned file with the base path its depth implies.
fn print_directory_structure(opts: &BatchOptions) {
    let Ok(files) = scan::find_html_files(&opts.root, opts.mode) else {
        return;
    };

    println!();
    println!("Directory structure detected:");
    for path in files {
        let depth = scan::depth_below_root(&opts.root, &path);
        let relative = path.strip_prefix(&opts.root).unwrap_or(path.as_path());
        let base = if depth == 0 {
            "(root)".to_string()
        } else {
            base_path(depth)
        };
        println!("  {} → basePath: '{}'", relative.display(), base);
    }
}
