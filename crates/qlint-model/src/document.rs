//! Arena-based document tree.
//!
//! Elements live in a flat arena indexed by [`ElementId`]; the tree
//! structure is expressed through parent back-references and child lists.
//! Every element is also a scope boundary for object-id lookup. The parent
//! link is non-owning (lookup only) while ownership flows strictly parent
//! to child, so the scope graph is a tree by construction and reference
//! cycles cannot form.

use qlint_common::SourceSpan;
use smallvec::SmallVec;

/// Index of an element in its document's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u32);

/// A declared association between a property and an expression.
///
/// `loc` spans the bound expression text in the source document, so a
/// replacement edit at `loc` substitutes the expression.
#[derive(Debug, Clone)]
pub struct Binding {
    pub property_name: String,
    /// Raw script text of the bound expression.
    pub expression: String,
    pub loc: SourceSpan,
}

/// A node in the document tree.
#[derive(Debug, Clone)]
pub struct Element {
    /// Object id, unique among the element's siblings; absent for
    /// anonymous elements.
    pub id: Option<String>,
    /// Declared base type name.
    pub base_type_name: String,
    /// Bindings owned by this element, in declaration order.
    pub bindings: Vec<Binding>,
    /// Span of the whole element, from the first byte of its opening
    /// delimiter through the last byte of its closing delimiter.
    pub loc: SourceSpan,
    pub(crate) parent: Option<ElementId>,
    pub(crate) children: SmallVec<[ElementId; 4]>,
}

impl Element {
    /// The enclosing scope; `None` only for the document root.
    pub fn parent_scope(&self) -> Option<ElementId> {
        self.parent
    }

    /// Elements lexically nested directly inside this one, in declaration
    /// order.
    pub fn child_scopes(&self) -> &[ElementId] {
        &self.children
    }

    pub fn has_bindings(&self) -> bool {
        !self.bindings.is_empty()
    }
}

/// An immutable document: source text plus the element tree built from it.
#[derive(Debug, Clone)]
pub struct Document {
    pub(crate) file_name: String,
    pub(crate) source: String,
    pub(crate) elements: Vec<Element>,
    pub(crate) root: ElementId,
}

impl Document {
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn root(&self) -> ElementId {
        self.root
    }

    pub fn element(&self, id: ElementId) -> &Element {
        &self.elements[id.0 as usize]
    }

    /// Number of elements in the document.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn parent_scope(&self, id: ElementId) -> Option<ElementId> {
        self.element(id).parent
    }

    pub fn child_scopes(&self, id: ElementId) -> &[ElementId] {
        &self.element(id).children
    }

    /// Depth-first preorder over every element, children in declaration
    /// order. Uses an explicit stack, so arbitrarily deep documents do not
    /// recurse.
    pub fn iter_depth_first(&self) -> DepthFirst<'_> {
        DepthFirst {
            document: self,
            stack: vec![self.root],
        }
    }
}

impl std::ops::Index<ElementId> for Document {
    type Output = Element;

    fn index(&self, id: ElementId) -> &Element {
        self.element(id)
    }
}

pub struct DepthFirst<'a> {
    document: &'a Document,
    stack: Vec<ElementId>,
}

impl Iterator for DepthFirst<'_> {
    type Item = ElementId;

    fn next(&mut self) -> Option<ElementId> {
        let current = self.stack.pop()?;
        // Reverse so the first child is visited first.
        self.stack
            .extend(self.document.child_scopes(current).iter().rev());
        Some(current)
    }
}
