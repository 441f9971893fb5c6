//! Document model for the qlint markup analyzer.
//!
//! The model is an Element/Scope/Binding graph with source locations,
//! produced by the upstream front end and handed to the analyzer as an
//! immutable input. The analyzer never mutates it.

pub mod document;
pub use document::{Binding, DepthFirst, Document, Element, ElementId};

pub mod builder;
pub use builder::{DocumentBuilder, ModelError};
