//! The check contract.
//!
//! A check is a stateless rule invoked at every element of the document
//! tree. `should_run` is a cheap structural predicate; `run` performs the
//! analysis and emits diagnostics through the context. The family of
//! checks is open-ended: new rules implement this trait and register with
//! the pass manager at runtime.

use crate::context::AnalysisContext;
use qlint_model::ElementId;

pub trait ElementPass: Send + Sync {
    /// Stable name used in logs.
    fn name(&self) -> &'static str;

    /// Whether `run` is worth invoking at this element. Kept cheap: the
    /// manager evaluates it at every element of every document.
    fn should_run(&self, ctx: &AnalysisContext<'_>, element: ElementId) -> bool;

    /// Analyze one element, emitting zero or more diagnostics via
    /// [`AnalysisContext::emit`]. Must not mutate the document model.
    fn run(&self, ctx: &mut AnalysisContext<'_>, element: ElementId);
}
