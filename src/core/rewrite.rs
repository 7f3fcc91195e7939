//! Rule-application plumbing shared by all three tools.
//!
//! A rewrite is a pure function from file content to new content plus a
//! list of applied-change records. Rules collect their edits as
//! non-overlapping byte ranges from a single forward scan and assemble
//! the output by segment concatenation, so no offset arithmetic ever
//! happens on a mutated buffer.

use std::ops::Range;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::report;
use crate::scan::{self, ScanMode};
use crate::utils::io;

/// One applied (or previewable) change produced by a rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    /// Rule that produced the change.
    pub rule: &'static str,
    /// Text the rule matched.
    pub matched: String,
    /// Text the match becomes.
    pub replacement: String,
    /// Surrounding text of the match, when a rule records it.
    pub context: Option<String>,
}

/// Result of applying a tool's rule set to one buffer.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub content: String,
    pub changes: Vec<Change>,
}

impl Outcome {
    /// An outcome that leaves `content` untouched.
    pub fn unchanged(content: &str) -> Self {
        Outcome {
            content: content.to_string(),
            changes: Vec::new(),
        }
    }
}

/// Per-file context passed to rewrite functions.
#[derive(Debug)]
pub struct FileContext<'a> {
    pub path: &'a Path,
    /// Path relative to the scan root, for display.
    pub relative: PathBuf,
    /// Directory levels below the scan root.
    pub depth: usize,
}

/// A file mid-rewrite: original content, rewritten content, changes.
#[derive(Debug)]
pub struct FileTask {
    pub path: PathBuf,
    pub relative: PathBuf,
    pub depth: usize,
    pub original: String,
    pub rewritten: String,
    pub changes: Vec<Change>,
}

impl FileTask {
    /// True when the rule pipeline produced different bytes. A rewrite
    /// whose every edit reproduces its matched text is a true no-op.
    pub fn changed(&self) -> bool {
        self.rewritten != self.original
    }
}

/// Aggregate outcome of one batch run. Lives only for one invocation.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub scanned: usize,
    pub changed: usize,
    /// Files skipped because of a read or write failure.
    pub skipped: usize,
}

/// Splice non-overlapping edits into `content`.
///
/// `edits` must be sorted by start offset and non-overlapping; each
/// range is replaced by its paired string in one forward pass.
pub fn splice(content: &str, edits: &[(Range<usize>, String)]) -> String {
    let mut out = String::with_capacity(content.len());
    let mut cursor = 0;

    for (range, replacement) in edits {
        out.push_str(&content[cursor..range.start]);
        out.push_str(replacement);
        cursor = range.end;
    }

    out.push_str(&content[cursor..]);
    out
}

/// Batch driver options resolved from a tool's command line.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    pub root: PathBuf,
    pub mode: ScanMode,
    /// Write changes back to disk; dry run otherwise.
    pub apply: bool,
    /// Include per-file depth lines in dry-run reports.
    pub show_depth: bool,
}

/// Scan the root and run `rewrite` over every HTML file found.
///
/// Dry runs print a per-file change report and never touch disk; apply
/// runs write changed files back atomically and print a confirmation
/// line each. Read and write failures are logged and the file skipped;
/// the batch always runs to completion.
pub fn run_batch<F>(opts: &BatchOptions, rewrite: F) -> Result<RunReport>
where
    F: Fn(&str, &FileContext<'_>) -> Outcome,
{
    let files = scan::find_html_files(&opts.root, opts.mode)?;

    let mut run = RunReport::default();

    if files.is_empty() {
        report::print_no_files(&opts.root);
        return Ok(run);
    }

    println!("Found {} HTML files to check", files.len());

    for path in &files {
        run.scanned += 1;

        let original = match io::read_file(path) {
            Ok(content) => content,
            Err(err) => {
                log_status!("io", "Error reading {}: {}", path.display(), err.message);
                run.skipped += 1;
                continue;
            }
        };

        let ctx = FileContext {
            path,
            relative: path.strip_prefix(&opts.root).unwrap_or(path).to_path_buf(),
            depth: scan::depth_below_root(&opts.root, path),
        };

        let outcome = rewrite(&original, &ctx);

        let task = FileTask {
            path: path.clone(),
            relative: ctx.relative,
            depth: ctx.depth,
            original,
            rewritten: outcome.content,
            changes: outcome.changes,
        };

        if !task.changed() {
            continue;
        }

        if opts.apply {
            if let Err(err) = io::write_file_atomic(&task.path, &task.rewritten) {
                log_status!("io", "✗ Error writing {}: {}", task.path.display(), err.message);
                run.skipped += 1;
                continue;
            }
            report::print_applied(&task);
        } else {
            report::print_preview(&task, opts.show_depth);
        }

        run.changed += 1;
    }

    report::print_summary(&run, opts.apply);
    Ok(run)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::depth::DepthRule;
    use crate::param::ParamRule;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn splice_replaces_ranges_in_order() {
        let edits = vec![(0..3, "one".to_string()), (8..11, "two".to_string())];
        assert_eq!(splice("aaa and bbb", &edits), "one and two");
    }

    #[test]
    fn splice_with_no_edits_is_identity() {
        assert_eq!(splice("unchanged", &[]), "unchanged");
    }

    #[test]
    fn splice_handles_adjacent_ranges() {
        let edits = vec![(0..2, "x".to_string()), (2..4, "y".to_string())];
        assert_eq!(splice("abcd", &edits), "xy");
    }

    #[test]
    fn splice_supports_insertion_at_empty_range() {
        let edits = vec![(4..4, "X".to_string())];
        assert_eq!(splice("head tail", &edits), "headX tail");
    }

    fn options(root: &Path, apply: bool) -> BatchOptions {
        BatchOptions {
            root: root.to_path_buf(),
            mode: ScanMode::Recursive,
            apply,
            show_depth: false,
        }
    }

    #[test]
    fn dry_run_never_mutates_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("page.html");
        fs::write(&path, "<script>loadNavbar('projects')</script>").unwrap();

        let rule = ParamRule::new("projects", "fiction").unwrap();
        let run = run_batch(&options(dir.path(), false), |content, _ctx| {
            rule.apply(content)
        })
        .unwrap();

        assert_eq!(run.scanned, 1);
        assert_eq!(run.changed, 1);
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "<script>loadNavbar('projects')</script>"
        );
    }

    #[test]
    fn apply_writes_changes_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("page.html");
        fs::write(&path, "<script>loadNavbar('projects')</script>").unwrap();

        let rule = ParamRule::new("projects", "fiction").unwrap();
        let run = run_batch(&options(dir.path(), true), |content, _ctx| {
            rule.apply(content)
        })
        .unwrap();

        assert_eq!(run.changed, 1);
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "<script>loadNavbar('fiction')</script>"
        );
    }

    #[test]
    fn second_apply_run_finds_nothing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("page.html");
        fs::write(&path, "<script>loadNavbar('projects')</script>").unwrap();

        let rule = ParamRule::new("projects", "fiction").unwrap();
        let opts = options(dir.path(), true);
        run_batch(&opts, |content, _ctx| rule.apply(content)).unwrap();
        let second = run_batch(&opts, |content, _ctx| rule.apply(content)).unwrap();

        assert_eq!(second.scanned, 1);
        assert_eq!(second.changed, 0);
    }

    #[test]
    fn depth_one_file_gains_base_path_end_to_end() {
        let dir = TempDir::new().unwrap();
        let sub = dir.path().join("texts");
        fs::create_dir(&sub).unwrap();
        let path = sub.join("story.html");
        fs::write(&path, "<script>loadNavbar('about')</script>").unwrap();

        let rule = DepthRule::new();
        let run = run_batch(&options(dir.path(), true), |content, ctx| {
            rule.apply(content, ctx.depth)
        })
        .unwrap();

        assert_eq!(run.changed, 1);
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "<script>loadNavbar('about', '../')</script>"
        );
    }

    #[test]
    fn unreadable_file_is_skipped_and_batch_continues() {
        let dir = TempDir::new().unwrap();
        // Invalid UTF-8 forces a read failure on this file only.
        fs::write(dir.path().join("bad.html"), [0xff, 0xfe, 0x00]).unwrap();
        fs::write(
            dir.path().join("real.html"),
            "<script>loadNavbar('projects')</script>",
        )
        .unwrap();

        let rule = ParamRule::new("projects", "fiction").unwrap();
        let run = run_batch(&options(dir.path(), false), |content, _ctx| {
            rule.apply(content)
        })
        .unwrap();

        assert_eq!(run.skipped, 1);
        assert_eq!(run.changed, 1);
    }

    #[test]
    fn missing_root_aborts_before_processing() {
        let rule = ParamRule::new("projects", "fiction").unwrap();
        let result = run_batch(
            &options(Path::new("/nonexistent/site"), false),
            |content, _ctx| rule.apply(content),
        );
        assert!(result.is_err());
    }
}
