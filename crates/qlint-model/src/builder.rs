//! Construction and validation of documents.
//!
//! The upstream front end (and every test fixture) assembles a document
//! through [`DocumentBuilder`]; [`DocumentBuilder::finish`] validates the
//! structural invariants the analyzer relies on and returns the immutable
//! [`Document`].

use crate::document::{Binding, Document, Element, ElementId};
use qlint_common::SourceSpan;
use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// No root element was added.
    MissingRoot,
    /// A second root element was added.
    DuplicateRoot,
    /// Two siblings in the same scope declare the same object id.
    DuplicateId { scope: ElementId, id: String },
    /// An element or binding span reaches past the end of the source text.
    SpanOutOfBounds { loc: SourceSpan },
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::MissingRoot => write!(f, "document has no root element"),
            ModelError::DuplicateRoot => write!(f, "document has more than one root element"),
            ModelError::DuplicateId { scope, id } => {
                write!(f, "duplicate object id `{id}` in scope {}", scope.0)
            }
            ModelError::SpanOutOfBounds { loc } => write!(
                f,
                "span [{}, {}) reaches past the end of the source text",
                loc.offset,
                loc.end()
            ),
        }
    }
}

impl std::error::Error for ModelError {}

pub struct DocumentBuilder {
    file_name: String,
    source: String,
    elements: Vec<Element>,
    root: Option<ElementId>,
    duplicate_root: bool,
}

impl DocumentBuilder {
    pub fn new(file_name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            source: source.into(),
            elements: Vec::new(),
            root: None,
            duplicate_root: false,
        }
    }

    fn push(&mut self, base_type_name: String, loc: SourceSpan, parent: Option<ElementId>) -> ElementId {
        let id = ElementId(self.elements.len() as u32);
        self.elements.push(Element {
            id: None,
            base_type_name,
            bindings: Vec::new(),
            loc,
            parent,
            children: SmallVec::new(),
        });
        id
    }

    pub fn add_root(&mut self, base_type_name: impl Into<String>, loc: SourceSpan) -> ElementId {
        if self.root.is_some() {
            self.duplicate_root = true;
        }
        let id = self.push(base_type_name.into(), loc, None);
        self.root.get_or_insert(id);
        id
    }

    pub fn add_child(
        &mut self,
        parent: ElementId,
        base_type_name: impl Into<String>,
        loc: SourceSpan,
    ) -> ElementId {
        let id = self.push(base_type_name.into(), loc, Some(parent));
        self.elements[parent.0 as usize].children.push(id);
        id
    }

    /// Declare the object id of an element.
    pub fn set_id(&mut self, element: ElementId, id: impl Into<String>) {
        self.elements[element.0 as usize].id = Some(id.into());
    }

    pub fn add_binding(
        &mut self,
        element: ElementId,
        property_name: impl Into<String>,
        expression: impl Into<String>,
        loc: SourceSpan,
    ) {
        self.elements[element.0 as usize].bindings.push(Binding {
            property_name: property_name.into(),
            expression: expression.into(),
            loc,
        });
    }

    pub fn finish(self) -> Result<Document, ModelError> {
        let root = self.root.ok_or(ModelError::MissingRoot)?;
        if self.duplicate_root {
            return Err(ModelError::DuplicateRoot);
        }

        let source_len = self.source.len() as u32;
        for element in &self.elements {
            if element.loc.end() > source_len {
                return Err(ModelError::SpanOutOfBounds { loc: element.loc });
            }
            for binding in &element.bindings {
                if binding.loc.end() > source_len {
                    return Err(ModelError::SpanOutOfBounds { loc: binding.loc });
                }
            }
        }

        // Object ids must be unique among the children of one scope.
        for (index, element) in self.elements.iter().enumerate() {
            let mut seen: FxHashSet<&str> = FxHashSet::default();
            for &child in &element.children {
                if let Some(id) = self.elements[child.0 as usize].id.as_deref()
                    && !seen.insert(id)
                {
                    return Err(ModelError::DuplicateId {
                        scope: ElementId(index as u32),
                        id: id.to_string(),
                    });
                }
            }
        }

        Ok(Document {
            file_name: self.file_name,
            source: self.source,
            elements: self.elements,
            root,
        })
    }
}
