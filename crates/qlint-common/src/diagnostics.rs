//! Diagnostic types produced by checks and consumed by the reporting layer.
//!
//! A diagnostic is immutable once emitted. Everything the analysis core
//! emits is advisory: a warning with an optional machine-applicable fix,
//! never a build-breaking error.

use crate::fix::FixSuggestion;
use crate::span::SourceSpan;
use serde::Serialize;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum Severity {
    Warning,
    Error,
    Suggestion,
}

/// Category tags for the built-in checks.
///
/// Tags are stable identifiers the reporting layer keys on (suppression,
/// grouping, documentation links). A new check contributes its tag here.
pub mod categories {
    /// A declarative property bound directly to a host-native object's
    /// property.
    pub const NATIVE_OBJECT_BINDING: &str = "native-object-binding";
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub category: &'static str,
    pub file: String,
    pub span: SourceSpan,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fix: Option<FixSuggestion>,
}

impl Diagnostic {
    pub fn warning(
        file: impl Into<String>,
        span: SourceSpan,
        category: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity: Severity::Warning,
            category,
            file: file.into(),
            span,
            message: message.into(),
            fix: None,
        }
    }

    pub fn with_fix(mut self, fix: FixSuggestion) -> Self {
        self.fix = Some(fix);
        self
    }

    pub fn has_fix(&self) -> bool {
        self.fix.is_some()
    }
}
