use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use navmend::defaults;
use navmend::param::ParamRule;
use navmend::report;
use navmend::rewrite::{self, BatchOptions};
use navmend::scan::ScanMode;

/// Replace the literal first argument of loadNavbar() calls across the
/// HTML files of one directory (direct children only).
#[derive(Parser)]
#[command(name = "navmend-param")]
#[command(version)]
#[command(about = "Replace a loadNavbar parameter in HTML files within a directory")]
#[command(after_help = "Examples:
  navmend-param                                Dry run with default settings
  navmend-param --apply                        Apply with default settings
  navmend-param texts projects fiction         Custom directory and parameters
  navmend-param texts projects fiction --apply Custom + apply")]
struct Cli {
    /// Directory to search in
    #[arg(default_value = defaults::DEFAULT_PARAM_DIRECTORY)]
    directory: PathBuf,

    /// Parameter value to replace
    #[arg(default_value = defaults::DEFAULT_OLD_PARAM)]
    old: String,

    /// New parameter value
    #[arg(default_value = defaults::DEFAULT_NEW_PARAM)]
    new: String,

    /// Apply changes to disk (default is dry run)
    #[arg(long)]
    apply: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    report::print_banner(&cli.directory, cli.apply);
    println!("Replacing: '{}' → '{}'", cli.old, cli.new);

    let rule = match ParamRule::new(&cli.old, &cli.new) {
        Ok(rule) => rule,
        Err(err) => {
            eprintln!("Error: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let opts = BatchOptions {
        root: cli.directory,
        mode: ScanMode::Shallow,
        apply: cli.apply,
        show_depth: false,
    };

    match rewrite::run_batch(&opts, |content, _ctx| rule.apply(content)) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
