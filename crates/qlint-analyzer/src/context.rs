//! Shared per-run state for checks.
//!
//! One context exists per analyzed document. Checks themselves stay
//! stateless; everything mutable during a run (the alias table and the
//! diagnostic sink) lives here, which is what makes fanning documents out
//! to worker threads trivially safe.

use crate::fix_builder::FixBuilder;
use crate::type_registry::TypeRegistry;
use qlint_common::Diagnostic;
use qlint_model::Document;

pub struct AnalysisContext<'a> {
    pub document: &'a Document,
    pub registry: &'a TypeRegistry,
    /// Alias synthesis state shared by all checks in this run, so alias
    /// names stay unique across checks.
    pub fixes: FixBuilder,
    sink: Vec<SinkEntry>,
    current_pass: usize,
}

struct SinkEntry {
    pass: usize,
    seq: usize,
    diagnostic: Diagnostic,
}

impl<'a> AnalysisContext<'a> {
    pub fn new(document: &'a Document, registry: &'a TypeRegistry) -> Self {
        Self {
            document,
            registry,
            fixes: FixBuilder::new(),
            sink: Vec::new(),
            current_pass: 0,
        }
    }

    /// Append a diagnostic to the sink. The emitting pass's registration
    /// index is recorded for output ordering; the diagnostic itself is
    /// immutable from here on.
    pub fn emit(&mut self, diagnostic: Diagnostic) {
        let seq = self.sink.len();
        self.sink.push(SinkEntry {
            pass: self.current_pass,
            seq,
            diagnostic,
        });
    }

    pub(crate) fn set_current_pass(&mut self, index: usize) {
        self.current_pass = index;
    }

    /// Drain the sink into the stable output order: span offset ascending,
    /// ties broken by registration order of the emitting pass, then by
    /// emission order. Reproducible regardless of traversal order.
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        let mut entries = self.sink;
        entries.sort_by_key(|e| (e.diagnostic.span, e.pass, e.seq));
        entries.into_iter().map(|e| e.diagnostic).collect()
    }
}
