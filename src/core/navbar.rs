//! Structural navbar migration: replaces the legacy static `<ul>` navbar
//! with the script-driven include, fixes up the `navbar.js` path, and
//! makes sure jQuery is pulled in.
//!
//! Matching is whitespace-tolerant pattern matching against the expected
//! markup, not an HTML parser. If the source drifts from the expected
//! attribute order or link set, the block rule simply matches nothing.

use regex::Regex;

use crate::defaults::{JQUERY_SCRIPT_TAG, NEW_NAVBAR_BLOCK};
use crate::rewrite::{splice, Change, Outcome};

const BLOCK_RULE: &str = "Navbar HTML structure";
const PATH_RULE: &str = "navbar.js path";
const JQUERY_RULE: &str = "jQuery script";

/// The three structural rules, applied in fixed order:
/// block replace, then path normalize, then conditional jQuery insert.
pub struct NavbarMigration {
    legacy_block: Regex,
    navbar_src: Regex,
    jquery_any: Regex,
    head_close: Regex,
}

fn navbar_item(href: &str, label: &str) -> String {
    format!(
        r#"<li\s+class="navbarel">\s*<a\s+style="text-decoration:\s*none;\s*color:\s*inherit;"\s+href="{}">{}</a>\s*</li>\s*"#,
        href, label
    )
}

fn legacy_block_pattern() -> Regex {
    let pattern = format!(
        r#"(?is)<ul\s+class="navbar">\s*{}{}{}{}{}</ul>"#,
        navbar_item(r"\.\./index\.html", "home"),
        navbar_item(r"\.\./fiction\.html", "fiction"),
        navbar_item(r"\.\./nfiction\.html", "non-fiction"),
        navbar_item(r"\.\./photo\.html", "photo"),
        navbar_item(r"\.\./about\.html", "about"),
    );
    Regex::new(&pattern).unwrap()
}

impl NavbarMigration {
    pub fn new() -> Self {
        NavbarMigration {
            legacy_block: legacy_block_pattern(),
            navbar_src: Regex::new(r#"(?i)<script\s+src="navbar\.js">"#).unwrap(),
            jquery_any: Regex::new(r"(?i)jquery").unwrap(),
            head_close: Regex::new(r"(?i)(\s*)(</head>)").unwrap(),
        }
    }

    pub fn apply(&self, content: &str) -> Outcome {
        let mut changes = Vec::new();
        let content = self.replace_legacy_block(content, &mut changes);
        let content = self.normalize_navbar_path(&content, &mut changes);
        let content = self.insert_jquery(&content, &mut changes);

        Outcome { content, changes }
    }

    /// Swap each legacy `<ul class="navbar">` block for the new include,
    /// re-indented to the matched block's leading indentation.
    fn replace_legacy_block(&self, content: &str, changes: &mut Vec<Change>) -> String {
        let mut edits = Vec::new();

        for m in self.legacy_block.find_iter(content) {
            let indent = indent_of_line(content, m.start());
            let replacement = indent_block(NEW_NAVBAR_BLOCK, &indent);
            changes.push(Change {
                rule: BLOCK_RULE,
                matched: m.as_str().to_string(),
                replacement: replacement.clone(),
                context: None,
            });
            edits.push((m.range(), replacement));
        }

        if edits.is_empty() {
            return content.to_string();
        }
        splice(content, &edits)
    }

    /// Rewrite bare `navbar.js` references to `../navbar.js`.
    fn normalize_navbar_path(&self, content: &str, changes: &mut Vec<Change>) -> String {
        let mut edits = Vec::new();

        for m in self.navbar_src.find_iter(content) {
            let replacement = r#"<script src="../navbar.js">"#.to_string();
            changes.push(Change {
                rule: PATH_RULE,
                matched: m.as_str().to_string(),
                replacement: replacement.clone(),
                context: None,
            });
            edits.push((m.range(), replacement));
        }

        if edits.is_empty() {
            return content.to_string();
        }
        splice(content, &edits)
    }

    /// Insert the jQuery include before `</head>` unless any jQuery
    /// reference already exists anywhere in the buffer.
    fn insert_jquery(&self, content: &str, changes: &mut Vec<Change>) -> String {
        if self.jquery_any.is_match(content) {
            return content.to_string();
        }

        let Some(caps) = self.head_close.captures(content) else {
            return content.to_string();
        };
        let (Some(whole), Some(ws), Some(head)) = (caps.get(0), caps.get(1), caps.get(2)) else {
            return content.to_string();
        };

        // Reuse the whitespace run before </head> as the include's
        // indentation; a bare </head> gets a plain newline separator.
        let ws = ws.as_str();
        let separator = if ws.is_empty() { "\n" } else { ws };
        let replacement = format!("{}{}{}{}", ws, JQUERY_SCRIPT_TAG, separator, head.as_str());

        changes.push(Change {
            rule: JQUERY_RULE,
            matched: "before </head>".to_string(),
            replacement: JQUERY_SCRIPT_TAG.to_string(),
            context: None,
        });

        splice(content, &[(whole.range(), replacement)])
    }
}

impl Default for NavbarMigration {
    fn default() -> Self {
        NavbarMigration::new()
    }
}

/// Leading whitespace of the line containing byte offset `at`.
fn indent_of_line(content: &str, at: usize) -> String {
    let line_start = content[..at].rfind('\n').map(|i| i + 1).unwrap_or(0);
    content[line_start..at]
        .chars()
        .take_while(|c| c.is_whitespace())
        .collect()
}

/// Prefix every non-empty line after the first with `indent`. The first
/// line lands right after the original block's own indentation, which
/// stays in the buffer.
fn indent_block(block: &str, indent: &str) -> String {
    block
        .lines()
        .enumerate()
        .map(|(i, line)| {
            if i == 0 || line.trim().is_empty() {
                line.to_string()
            } else {
                format!("{}{}", indent, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
