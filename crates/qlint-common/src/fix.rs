//! Fix suggestions: anchored, machine-applicable source edits.
//!
//! All edits are expressed against the ORIGINAL document text; offsets are
//! computed once and never recomputed against a partially edited buffer.
//! A normalized suggestion's edits are ordered ascending by anchor offset
//! and never overlap, so a downstream tool can apply them in a single
//! descending-offset pass without offset drift.

use crate::span::SourceSpan;
use serde::Serialize;

/// A single edit against the original document text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SourceEdit {
    /// Insert `text` at byte offset `at`, shifting the rest of the document.
    Insertion { at: u32, text: String },
    /// Replace the bytes covered by `span` with `text`.
    Replacement { span: SourceSpan, text: String },
}

impl SourceEdit {
    /// Anchor offset used for ordering edits left to right.
    pub fn anchor(&self) -> u32 {
        match self {
            SourceEdit::Insertion { at, .. } => *at,
            SourceEdit::Replacement { span, .. } => span.offset,
        }
    }

    /// The half-open byte range this edit occupies in the original text.
    /// Insertions occupy an empty range at their anchor.
    fn range(&self) -> SourceSpan {
        match self {
            SourceEdit::Insertion { at, .. } => SourceSpan::new(*at, 0),
            SourceEdit::Replacement { span, .. } => *span,
        }
    }
}

/// A human-readable hint plus the edit set that realizes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FixSuggestion {
    hint: String,
    edits: Vec<SourceEdit>,
}

impl FixSuggestion {
    pub fn new(hint: impl Into<String>) -> Self {
        Self {
            hint: hint.into(),
            edits: Vec::new(),
        }
    }

    pub fn hint(&self) -> &str {
        &self.hint
    }

    pub fn edits(&self) -> &[SourceEdit] {
        &self.edits
    }

    pub fn add_insertion(&mut self, at: u32, text: impl Into<String>) {
        self.edits.push(SourceEdit::Insertion {
            at,
            text: text.into(),
        });
    }

    pub fn add_replacement(&mut self, span: SourceSpan, text: impl Into<String>) {
        self.edits.push(SourceEdit::Replacement {
            span,
            text: text.into(),
        });
    }

    /// Sort edits by anchor offset and reject edit sets that overlap.
    ///
    /// Returns `None` when any two edits touch the same bytes (or when two
    /// insertions share an anchor, which would make their order ambiguous).
    /// Callers degrade to a fix-less diagnostic on `None` rather than
    /// emitting a suggestion that would corrupt the document.
    pub fn into_normalized(mut self) -> Option<FixSuggestion> {
        self.edits.sort_by_key(|e| (e.anchor(), e.range().len));
        let mut prev_end = 0u32;
        let mut prev_was_insertion_at = None;
        for edit in &self.edits {
            let range = edit.range();
            if range.is_empty() {
                // An insertion conflicts only if it lands strictly inside a
                // replaced range, or on top of another insertion.
                if range.offset < prev_end || prev_was_insertion_at == Some(range.offset) {
                    return None;
                }
                prev_was_insertion_at = Some(range.offset);
            } else {
                if range.offset < prev_end {
                    return None;
                }
                prev_end = range.end();
                prev_was_insertion_at = None;
            }
        }
        Some(self)
    }

    /// Apply all edits to `source`, producing the transformed document.
    ///
    /// Edits are applied in descending-offset order so earlier offsets stay
    /// valid. Expects a normalized suggestion. The analysis core never calls
    /// this on its own; it exists for downstream tools and for tests.
    pub fn apply_to(&self, source: &str) -> String {
        let mut out = source.to_string();
        for edit in self.edits.iter().rev() {
            match edit {
                SourceEdit::Insertion { at, text } => {
                    out.insert_str(*at as usize, text);
                }
                SourceEdit::Replacement { span, text } => {
                    out.replace_range(span.offset as usize..span.end() as usize, text);
                }
            }
        }
        out
    }
}
