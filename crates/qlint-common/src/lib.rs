//! Common types and utilities for the qlint markup analyzer.
//!
//! This crate provides the foundational types shared by all qlint crates:
//! - Source spans (`SourceSpan`) in byte coordinates of the original document
//! - Diagnostics (`Diagnostic`, `Severity`, category tags)
//! - Fix suggestions (`FixSuggestion`, `SourceEdit`)

// Span - source location tracking (byte offsets)
pub mod span;
pub use span::SourceSpan;

// Diagnostics emitted by checks, consumed by the reporting layer
pub mod diagnostics;
pub use diagnostics::{Diagnostic, Severity, categories};

// Anchored source-edit suggestions attached to diagnostics
pub mod fix;
pub use fix::{FixSuggestion, SourceEdit};
