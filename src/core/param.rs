//! Literal-parameter substitution: retarget one-argument `loadNavbar`
//! calls from one section name to another.

use regex::Regex;

use crate::error::{Error, Result};
use crate::rewrite::{splice, Change, Outcome};

const RULE_NAME: &str = "loadNavbar parameter";

/// Characters of surrounding text shown per match in dry-run reports.
const CONTEXT_RADIUS: usize = 30;

/// Rewrites `loadNavbar('old')` to `loadNavbar('new')`.
///
/// The call name matches case-insensitively; the argument must match
/// exactly. Either quote style is accepted and normalized to single
/// quotes on output. Two-argument calls are out of this rule's pattern
/// and left alone; the depth rewriter owns those.
pub struct ParamRule {
    pattern: Regex,
    replacement: String,
}

impl ParamRule {
    pub fn new(old: &str, new: &str) -> Result<Self> {
        let pattern = format!(
            r#"(?i:loadNavbar)\(\s*['"]{}['"]\s*\)"#,
            regex::escape(old)
        );
        let pattern = Regex::new(&pattern)
            .map_err(|e| Error::validation_invalid_pattern(pattern.clone(), e.to_string()))?;

        Ok(ParamRule {
            pattern,
            replacement: format!("loadNavbar('{}')", new),
        })
    }

    pub fn apply(&self, content: &str) -> Outcome {
        let mut edits = Vec::new();
        let mut changes = Vec::new();

        for m in self.pattern.find_iter(content) {
            // Already in canonical form: a true no-op, not a change.
            if m.as_str() == self.replacement {
                continue;
            }
            changes.push(Change {
                rule: RULE_NAME,
                matched: m.as_str().to_string(),
                replacement: self.replacement.clone(),
                context: Some(context_window(content, m.start(), m.end())),
            });
            edits.push((m.range(), self.replacement.clone()));
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

/// Slice roughly `CONTEXT_RADIUS` characters either side of a match,
/// snapped to char boundaries.
fn context_window(content: &str, start: usize, end: usize) -> String {
    let mut from = start.saturating_sub(CONTEXT_RADIUS);
    while !content.is_char_boundary(from) {
        from -= 1;
    }
    let mut to = (end + CONTEXT_RADIUS).min(content.len());
    while !content.is_char_boundary(to) {
        to += 1;
    }
    content[from..to].to_string()
}
