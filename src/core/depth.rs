//! Depth-aware rewrite: give every `loadNavbar` call the base path that
//! matches how far its file sits below the site root.

use regex::Regex;

use crate::rewrite::{splice, Change, Outcome};

const RULE_NAME: &str = "loadNavbar call update";

/// The parent-directory prefix for a file `depth` levels below the
/// root: empty at the root, `../` repeated once per level otherwise.
pub fn base_path(depth: usize) -> String {
    "../".repeat(depth)
}

/// Rewrites `loadNavbar('page')` and `loadNavbar('page', 'base')` calls
/// to carry the computed base path, preserving the first argument.
///
/// The call name matches case-insensitively, either quote style is
/// accepted, and both call forms normalize to canonical single-quote
/// output. A call already carrying the correct base path is a no-op.
pub struct DepthRule {
    pattern: Regex,
}

impl DepthRule {
    pub fn new() -> Self {
        DepthRule {
            pattern: Regex::new(
                r#"(?i:loadNavbar)\(\s*['"]([^'"]*)['"](?:\s*,\s*['"][^'"]*['"])?\s*\)"#,
            )
            .unwrap(),
        }
    }

    pub fn apply(&self, content: &str, depth: usize) -> Outcome {
        let suffix = if depth == 0 {
            String::new()
        } else {
            format!(", '{}'", base_path(depth))
        };

        let mut edits = Vec::new();
        let mut changes = Vec::new();

        for caps in self.pattern.captures_iter(content) {
            let (Some(whole), Some(payload)) = (caps.get(0), caps.get(1)) else {
                continue;
            };

            let new_call = format!("loadNavbar('{}'{})", payload.as_str(), suffix);
            // Already correct for this depth: a true no-op, not a change.
            if whole.as_str() == new_call {
                continue;
            }

            changes.push(Change {
                rule: RULE_NAME,
                matched: whole.as_str().to_string(),
                replacement: new_call.clone(),
                context: None,
            });
            edits.push((whole.range(), new_call));
        }

        if edits.is_empty() {
            return Outcome::unchanged(content);
        }

        Outcome {
            content: splice(content, &edits),
            changes,
        }
    }
}

impl Default for DepthRule {
    fn default() -> Self {
        DepthRule::new()
    }
}
