//! # Inline Directives
//!
//! Cells can carry scrubbing instructions inside their own text, in a leading
//! block of marker lines:
//!
//! ```text
//! #| scrub-clear                       (code)
//! #| scrub-clear: # your code here
//! <!-- scrub-omit -->                  (markdown)
//! <!-- scrub-clear: Write your answer -->
//! ```
//!
//! The block ends at the first non-blank line that is not a marker line, so a
//! directive written after ordinary content is never seen. Raw cells have no
//! inline syntax.

use crate::model::CellKind;

const CODE_MARKER: &str = "#|";
const MARKDOWN_MARKER: &str = "<!--";
const MARKDOWN_SUFFIX: &str = "-->";

/// Result of looking for a directive in a cell's leading block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// Not declared.
    Absent,
    /// Declared as a bare name, without a value.
    Default,
    /// Declared with `name: value`. The value may be empty.
    Value(String),
}

impl Directive {
    pub fn is_declared(&self) -> bool {
        !matches!(self, Directive::Absent)
    }

    pub fn value(&self) -> Option<&str> {
        match self {
            Directive::Value(v) => Some(v),
            _ => None,
        }
    }
}

fn markers(kind: CellKind) -> Option<(&'static str, &'static str)> {
    match kind {
        CellKind::Code => Some((CODE_MARKER, "")),
        CellKind::Markdown => Some((MARKDOWN_MARKER, MARKDOWN_SUFFIX)),
        CellKind::Raw => None,
    }
}

/// Look for directive `name` in the leading marker block of `source`.
pub fn scan(kind: CellKind, source: &str, name: &str) -> Directive {
    let Some((marker, suffix)) = markers(kind) else {
        return Directive::Absent;
    };

    for line in source.split('\n') {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let Some(rest) = trimmed.strip_prefix(marker) else {
            break;
        };

        let body = rest.strip_suffix(suffix).unwrap_or(rest).trim();
        match body.split_once(':') {
            Some((key, value)) => {
                if key.trim() == name {
                    return Directive::Value(value.trim_start().to_string());
                }
            }
            None => {
                if body == name {
                    return Directive::Default;
                }
            }
        }
    }

    Directive::Absent
}
