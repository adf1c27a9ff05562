//! Wildcard expansion over file-name assignments.
//!
//! A files layer may key assignments by glob-style patterns such as
//! `"*.test.js"`. Expansion rewrites every such pattern into concrete
//! entries, one per known exact file name the pattern matches, so the merged
//! document only ever contains exact names. Known names come from the same
//! layer's `fileNames` mapping; nothing is discovered from the filesystem.

use indexmap::IndexSet;
use regex::Regex;

use crate::document::IconAssignments;

/// The wildcard character recognized in file-name patterns.
pub const WILDCARD: char = '*';

/// Returns true when `name` is a pattern rather than an exact file name.
pub fn is_pattern(name: &str) -> bool {
    name.contains(WILDCARD)
}

/// Collect the exact (non-pattern) keys of a file-name mapping, in document
/// order. These are the only candidates wildcard patterns match against.
pub fn known_exact_names(file_names: &IconAssignments) -> IndexSet<String> {
    file_names
        .keys()
        .filter(|name| !is_pattern(name))
        .cloned()
        .collect()
}

/// A compiled file-name pattern.
///
/// `*` matches any run of characters, including the empty one; every other
/// character matches literally. The match always covers the whole candidate,
/// never a substring.
#[derive(Debug, Clone)]
pub struct FileNamePattern {
    regex: Regex,
}

impl FileNamePattern {
    /// Compile `pattern`, or `None` when it contains no wildcard.
    pub fn compile(pattern: &str) -> Option<Self> {
        if !is_pattern(pattern) {
            return None;
        }
        let segments: Vec<String> = pattern.split(WILDCARD).map(regex::escape).collect();
        let anchored = format!("^{}$", segments.join(".*"));
        // Escaped segments joined by ".*" always form a valid expression.
        let regex = Regex::new(&anchored).expect("anchored file-name pattern");
        Some(Self { regex })
    }

    /// Check a candidate file name against the pattern.
    pub fn matches(&self, candidate: &str) -> bool {
        self.regex.is_match(candidate)
    }
}

/// Expand every wildcard pattern in `file_names` against `known_names`.
///
/// Emits one exact entry per matching known name, valued with the pattern's
/// icon id. Patterns are visited in document order, so when two patterns
/// match the same name the later one wins. A pattern matching nothing
/// contributes nothing.
pub fn expand(file_names: &IconAssignments, known_names: &IndexSet<String>) -> IconAssignments {
    let mut expanded = IconAssignments::new();

    for (pattern, icon_id) in file_names {
        let Some(matcher) = FileNamePattern::compile(pattern) else {
            continue;
        };
        let mut hits = 0usize;
        for name in known_names {
            if matcher.matches(name) {
                expanded.insert(name.clone(), icon_id.clone());
                hits += 1;
            }
        }
        tracing::trace!("pattern '{}' matched {} known file name(s)", pattern, hits);
    }

    expanded
}
