//! Pass scheduling and diagnostic collection.
//!
//! The manager owns the registered checks and the type registry, drives a
//! depth-first traversal over every element of a document, and collects
//! diagnostics into a stable output order. Subtrees are independent and
//! checks share no mutable state, so the traversal order is an
//! implementation detail: the same inputs always produce the same
//! diagnostic sequence.

use crate::context::AnalysisContext;
use crate::pass::ElementPass;
use crate::type_registry::TypeRegistry;
use qlint_common::Diagnostic;
use qlint_model::Document;
use rayon::prelude::*;
use tracing::debug;

pub struct PassManager {
    registry: TypeRegistry,
    passes: Vec<Box<dyn ElementPass>>,
}

impl PassManager {
    pub fn new(registry: TypeRegistry) -> Self {
        Self {
            registry,
            passes: Vec::new(),
        }
    }

    /// Register a check. Registration order is the tie-break order for
    /// diagnostics at the same source location.
    pub fn register(&mut self, pass: Box<dyn ElementPass>) {
        self.passes.push(pass);
    }

    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    /// Analyze one document, returning diagnostics sorted by source
    /// location ascending, ties broken by check registration order.
    pub fn analyze(&self, document: &Document) -> Vec<Diagnostic> {
        debug!(
            file = document.file_name(),
            elements = document.len(),
            passes = self.passes.len(),
            "analyze"
        );
        let mut ctx = AnalysisContext::new(document, &self.registry);
        for element in document.iter_depth_first() {
            for (index, pass) in self.passes.iter().enumerate() {
                if pass.should_run(&ctx, element) {
                    ctx.set_current_pass(index);
                    pass.run(&mut ctx, element);
                }
            }
        }
        ctx.into_diagnostics()
    }

    /// Analyze many documents in parallel, one sink per document, results
    /// in input order. Checks are stateless and the document models are
    /// immutable, so documents fan out to worker threads without
    /// coordination.
    pub fn analyze_all(&self, documents: &[Document]) -> Vec<Vec<Diagnostic>> {
        documents
            .par_iter()
            .map(|document| self.analyze(document))
            .collect()
    }
}
