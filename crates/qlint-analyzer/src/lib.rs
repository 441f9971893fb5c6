//! Analysis core for declarative markup documents.
//!
//! This crate consumes the immutable document model from `qlint-model` and
//! produces diagnostics with optional fix suggestions. It is organized into
//! several submodules:
//! - `scope_resolver` - Identifier resolution over the lexical scope chain
//! - `type_registry` - Host-native type classification
//! - `binding_classifier` - Anti-pattern shape classification
//! - `fix_builder` - Alias fix synthesis
//! - `context` - Shared per-run state for checks
//! - `pass` - The check contract
//! - `checks` - Built-in checks
//! - `pass_manager` - Traversal, scheduling, and diagnostic ordering

pub mod binding_classifier;
pub mod checks;
pub mod context;
pub mod fix_builder;
pub mod pass;
pub mod pass_manager;
pub mod scope_resolver;
pub mod type_registry;

pub use binding_classifier::{BindingClass, classify};
pub use checks::NativeObjectBindingCheck;
pub use context::AnalysisContext;
pub use fix_builder::FixBuilder;
pub use pass::ElementPass;
pub use pass_manager::PassManager;
pub use scope_resolver::{Resolution, resolve};
pub use type_registry::TypeRegistry;

pub mod diagnostics {
    pub use qlint_common::diagnostics::{Diagnostic, Severity, categories};
    pub use qlint_common::fix::{FixSuggestion, SourceEdit};
}
