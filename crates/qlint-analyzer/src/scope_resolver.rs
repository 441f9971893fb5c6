//! Lexical scope resolution.
//!
//! Resolves an object identifier to the declared sibling or
//! ancestor-sibling element that carries it, walking the parent-scope chain
//! outward from the referencing element. The nearest enclosing declaration
//! wins; declarations in unrelated branches of the tree are not visible.

use qlint_model::{Document, ElementId};
use tracing::trace;

/// A successful resolution: the declaring element and its declared base
/// type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution<'a> {
    pub element: ElementId,
    pub base_type_name: &'a str,
}

/// Resolve `identifier` starting from `start`'s enclosing scope.
///
/// At each scope on the ascent the immediate child scopes are scanned in
/// declaration order; the first child whose object id matches wins.
/// Returns `None` when the identifier is undeclared anywhere on the chain.
/// A miss is a normal outcome, not an error: local expression variables are
/// outside this resolver's model and resolve to `None`.
///
/// Resolution is side-effect-free and idempotent, O(depth x siblings).
pub fn resolve<'a>(
    document: &'a Document,
    identifier: &str,
    start: ElementId,
) -> Option<Resolution<'a>> {
    let mut scope = document.parent_scope(start);
    while let Some(current) = scope {
        trace!(identifier, scope = current.0, "scope walk");
        for &child in document.child_scopes(current) {
            let element = &document[child];
            if element.id.as_deref() == Some(identifier) {
                trace!(
                    identifier,
                    declaring = child.0,
                    base_type = element.base_type_name.as_str(),
                    "resolved"
                );
                return Some(Resolution {
                    element: child,
                    base_type_name: &element.base_type_name,
                });
            }
        }
        scope = document.parent_scope(current);
    }
    trace!(identifier, "unresolved");
    None
}
