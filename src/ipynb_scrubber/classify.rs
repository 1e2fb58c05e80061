//! # Cell Classification
//!
//! Decides what happens to a cell by combining its structural tags
//! (`metadata.tags`) with inline directives found by [`crate::directives`].
//!
//! Questions are asked in precedence order by the processor:
//!
//! 1. [`should_omit`]: tag or directive, any form. Omitted cells are dropped
//!    and nothing else is asked.
//! 2. [`note_decision`]: code cells only, inline directive only, and only with
//!    an identifier (`#| scrub-note: id` or `#| scrub-note: id | replacement`).
//! 3. [`clear_decision`]: the inline directive wins because it can carry
//!    custom text; the structural tag is the fallback and never does.

use crate::directives::{scan, Directive};
use crate::model::{Cell, CellKind};

const NOTE_SEPARATOR: &str = " | ";

/// A valid note request: where the original content goes, and what replaces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteRequest {
    pub id: String,
    pub replacement: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteDecision {
    /// No note directive.
    None,
    /// A note directive without a usable identifier. The cell is treated as
    /// not noted.
    MissingId,
    Note(NoteRequest),
}

/// How a cell should be cleared. `text` is `None` when the default clear text applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClearRequest {
    pub text: Option<String>,
}

fn supports_directives(kind: CellKind) -> bool {
    matches!(kind, CellKind::Code | CellKind::Markdown)
}

pub fn should_omit(cell: &Cell, omit_tag: &str) -> bool {
    cell.has_tag(omit_tag) || scan(cell.kind, &cell.source, omit_tag).is_declared()
}

pub fn clear_decision(cell: &Cell, clear_tag: &str) -> Option<ClearRequest> {
    if supports_directives(cell.kind) {
        match scan(cell.kind, &cell.source, clear_tag) {
            Directive::Absent => {}
            Directive::Default => return Some(ClearRequest { text: None }),
            Directive::Value(text) => return Some(ClearRequest { text: Some(text) }),
        }
    }

    if cell.has_tag(clear_tag) {
        return Some(ClearRequest { text: None });
    }

    None
}

pub fn note_decision(cell: &Cell, note_tag: &str) -> NoteDecision {
    if cell.kind != CellKind::Code {
        return NoteDecision::None;
    }

    match scan(cell.kind, &cell.source, note_tag) {
        Directive::Absent => NoteDecision::None,
        Directive::Default => NoteDecision::MissingId,
        Directive::Value(value) => parse_note_value(&value),
    }
}

fn parse_note_value(value: &str) -> NoteDecision {
    let (id, replacement) = match value.split_once(NOTE_SEPARATOR) {
        Some((id, replacement)) => (id.trim(), Some(replacement.trim().to_string())),
        None => (value.trim(), None),
    };

    if id.is_empty() {
        return NoteDecision::MissingId;
    }

    NoteDecision::Note(NoteRequest {
        id: id.to_string(),
        replacement,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omit_by_tag() {
        let cell = Cell::code("x = 1").with_tags(["scrub-omit"]);
        assert!(should_omit(&cell, "scrub-omit"));
    }

    #[test]
    fn omit_by_directive_with_or_without_value() {
        assert!(should_omit(&Cell::code("#| scrub-omit\nx"), "scrub-omit"));
        assert!(should_omit(&Cell::code("#| scrub-omit: yes\nx"), "scrub-omit"));
        assert!(should_omit(
            &Cell::markdown("<!-- scrub-omit -->\nAnswer"),
            "scrub-omit"
        ));
    }

    #[test]
    fn raw_cells_omit_only_by_tag() {
        assert!(!should_omit(&Cell::raw("#| scrub-omit\n"), "scrub-omit"));
        assert!(should_omit(
            &Cell::raw("text").with_tags(["scrub-omit"]),
            "scrub-omit"
        ));
    }

    #[test]
    fn plain_cell_is_not_cleared() {
        assert_eq!(clear_decision(&Cell::code("x = 1"), "scrub-clear"), None);
    }

    #[test]
    fn clear_by_tag_has_no_custom_text() {
        let cell = Cell::code("x").with_tags(["scrub-clear"]);
        assert_eq!(
            clear_decision(&cell, "scrub-clear"),
            Some(ClearRequest { text: None })
        );
    }

    #[test]
    fn clear_directive_wins_over_tag() {
        let cell = Cell::code("#| scrub-clear: # write it\nx").with_tags(["scrub-clear"]);
        assert_eq!(
            clear_decision(&cell, "scrub-clear"),
            Some(ClearRequest {
                text: Some("# write it".to_string())
            })
        );
    }

    #[test]
    fn raw_cells_clear_only_by_tag() {
        assert_eq!(clear_decision(&Cell::raw("#| scrub-clear"), "scrub-clear"), None);
        assert_eq!(
            clear_decision(&Cell::raw("x").with_tags(["scrub-clear"]), "scrub-clear"),
            Some(ClearRequest { text: None })
        );
    }

    #[test]
    fn note_with_id_only() {
        assert_eq!(
            note_decision(&Cell::code("#| scrub-note: ex1\nbody"), "scrub-note"),
            NoteDecision::Note(NoteRequest {
                id: "ex1".to_string(),
                replacement: None
            })
        );
    }

    #[test]
    fn note_with_replacement() {
        assert_eq!(
            note_decision(
                &Cell::code("#| scrub-note: ex1 | # CODE HERE\ndef f(): return 1"),
                "scrub-note"
            ),
            NoteDecision::Note(NoteRequest {
                id: "ex1".to_string(),
                replacement: Some("# CODE HERE".to_string())
            })
        );
    }

    #[test]
    fn note_replacement_splits_on_first_separator() {
        assert_eq!(
            note_decision(&Cell::code("#| scrub-note: a | b | c\n"), "scrub-note"),
            NoteDecision::Note(NoteRequest {
                id: "a".to_string(),
                replacement: Some("b | c".to_string())
            })
        );
    }

    #[test]
    fn note_without_id_is_skipped() {
        assert_eq!(
            note_decision(&Cell::code("#| scrub-note\nbody"), "scrub-note"),
            NoteDecision::MissingId
        );
        assert_eq!(
            note_decision(&Cell::code("#| scrub-note: \nbody"), "scrub-note"),
            NoteDecision::MissingId
        );
    }

    #[test]
    fn notes_are_code_only_and_never_by_tag() {
        assert_eq!(
            note_decision(&Cell::markdown("<!-- scrub-note: m1 -->\ntext"), "scrub-note"),
            NoteDecision::None
        );
        assert_eq!(
            note_decision(&Cell::code("x").with_tags(["scrub-note"]), "scrub-note"),
            NoteDecision::None
        );
    }
}
