//! Built-in checks.
//!
//! Each check implements [`crate::pass::ElementPass`] and is independently
//! testable against document-model fixtures. Further rules in the family
//! (script complexity, cross-language call sites, signal-handler bodies)
//! plug in through the same contract and emit through the same diagnostic
//! types.

pub mod native_binding;

pub use native_binding::NativeObjectBindingCheck;
