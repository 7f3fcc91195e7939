//! Console reporting: banners, per-file previews, confirmations, summaries.
//!
//! Everything here goes to stdout; I/O failures are logged to stderr by
//! the batch driver as they happen.

use std::path::Path;

use crate::defaults::HTML_EXTENSIONS;
use crate::depth::base_path;
use crate::rewrite::{FileTask, RunReport};

const DIVIDER_WIDTH: usize = 50;

fn divider() -> String {
    "=".repeat(DIVIDER_WIDTH)
}

/// Print the dry-run / apply banner and the resolved scan parameters.
pub fn print_banner(root: &Path, apply: bool) {
    if apply {
        println!("APPLYING CHANGES MODE - Files will be modified!");
    } else {
        println!("DRY RUN MODE - No files will be modified");
        println!("Use --apply flag to actually make changes");
    }

    println!("Target directory: {}", root.display());

    let extensions: Vec<String> = HTML_EXTENSIONS.iter().map(|e| format!(".{}", e)).collect();
    println!("File types: {}", extensions.join(", "));
}

/// Distinct report for the empty result set: a clean end, not an error.
pub fn print_no_files(root: &Path) {
    println!("No HTML files found in '{}'", root.display());
}

/// Per-file dry-run report: header plus one numbered entry per change.
pub fn print_preview(task: &FileTask, show_depth: bool) {
    println!();
    println!("{}", divider());
    println!("File: {}", task.relative.display());
    if show_depth {
        println!("Directory depth: {}", task.depth);
        println!("Base path: '{}' (empty = root level)", base_path(task.depth));
    }
    println!("{}", divider());

    for (i, change) in task.changes.iter().enumerate() {
        println!();
        println!("{}. {}:", i + 1, change.rule);
        if change.matched.contains('\n') || change.replacement.contains('\n') {
            println!("OLD:");
            println!("{}", change.matched);
            println!("NEW:");
            println!("{}", change.replacement);
        } else {
            println!("   OLD: {}", change.matched);
            println!("   NEW: {}", change.replacement);
        }
        if let Some(context) = &change.context {
            println!("   ...{}...", escape_inline(context));
        }
    }
}

/// One-line apply confirmation.
pub fn print_applied(task: &FileTask) {
    let count = task.changes.len();
    println!(
        "✓ Updated {} ({} change{})",
        task.relative.display(),
        count,
        if count == 1 { "" } else { "s" }
    );
}

/// Final summary for the whole batch.
pub fn print_summary(run: &RunReport, apply: bool) {
    println!();
    println!("{}", divider());
    if apply {
        println!("COMPLETE: {} files were modified", run.changed);
    } else {
        println!("DRY RUN COMPLETE: {} files would be modified", run.changed);
        if run.changed > 0 {
            println!("Run with --apply flag to make actual changes");
        }
    }
    if run.skipped > 0 {
        println!("{} files skipped due to errors", run.skipped);
    }
}

/// Flatten a snippet to one line for display.
fn escape_inline(text: &str) -> String {
    text.replace('\n', "\\n").replace('\t', "\\t")
}
