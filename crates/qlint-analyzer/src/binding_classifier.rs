//! Binding-expression classification.
//!
//! The classifier trades full expression parsing for a narrow shape match:
//! an expression is a candidate only when it is exactly
//! `identifier . identifier`, whitespace-tolerant, with no further
//! operators, calls, or chaining. Its output drives an automatic
//! source-edit suggestion, so every step that is unsure answers `NoMatch`.

use crate::scope_resolver;
use crate::type_registry::TypeRegistry;
use qlint_model::{Binding, Document, ElementId};
use tracing::trace;

/// Classification outcome for one binding expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindingClass {
    NoMatch,
    /// `<objectId>.<propertyName>` where `objectId` resolves to a
    /// host-native element visible from the owning scope.
    DirectNativeReference {
        object: ElementId,
        object_id: String,
        property_name: String,
    },
}

/// Property-name suffixes that denote enumeration categories rather than
/// live object state.
const ENUM_CATEGORY_SUFFIXES: &[&str] = &["State", "Mode", "Type", "Policy", "Format"];

/// Classify `binding`'s expression against the anti-pattern shape.
///
/// Misses at every step (wrong shape, unresolved identifier, declarative
/// resolved type, enumeration reference) are normal `NoMatch` outcomes,
/// never errors.
pub fn classify(
    document: &Document,
    registry: &TypeRegistry,
    owner: ElementId,
    binding: &Binding,
) -> BindingClass {
    let Some((object_id, property_name)) = split_member_access(&binding.expression) else {
        trace!(expression = binding.expression.as_str(), "shape mismatch");
        return BindingClass::NoMatch;
    };

    let Some(resolution) = scope_resolver::resolve(document, object_id, owner) else {
        trace!(object_id, "object id does not resolve");
        return BindingClass::NoMatch;
    };

    if !registry.is_host_native(resolution.base_type_name) {
        trace!(
            object_id,
            base_type = resolution.base_type_name,
            "resolved type is declarative"
        );
        return BindingClass::NoMatch;
    }

    if is_enum_reference(&binding.expression, property_name) {
        trace!(
            expression = binding.expression.as_str(),
            "enumeration reference is exempt"
        );
        return BindingClass::NoMatch;
    }

    trace!(
        object_id,
        property_name,
        base_type = resolution.base_type_name,
        "direct native reference"
    );
    BindingClass::DirectNativeReference {
        object: resolution.element,
        object_id: object_id.to_string(),
        property_name: property_name.to_string(),
    }
}

/// Split an expression of exactly the form `identifier . identifier`
/// (whitespace around either identifier is tolerated). Any other shape,
/// including chains, calls, arithmetic, and qualified constants, is `None`.
fn split_member_access(expression: &str) -> Option<(&str, &str)> {
    let (head, tail) = expression.split_once('.')?;
    let object = head.trim();
    let property = tail.trim();
    (is_identifier(object) && is_identifier(property)).then_some((object, property))
}

fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Enumeration-like references do not create a live host-object dependency
/// and are exempt by design: qualified `Type::Value` access, capitalized
/// member names (host enum values are capitalized, live properties are
/// lower-camel-case), and properties named after enumeration categories.
fn is_enum_reference(expression: &str, property_name: &str) -> bool {
    expression.contains("::")
        || property_name
            .chars()
            .next()
            .is_some_and(char::is_uppercase)
        || ENUM_CATEGORY_SUFFIXES
            .iter()
            .any(|suffix| property_name.ends_with(suffix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_member_access_exact_shape_only() {
        assert_eq!(split_member_access("a.b"), Some(("a", "b")));
        assert_eq!(split_member_access(" timer . interval "), Some(("timer", "interval")));
        assert_eq!(split_member_access("a.b.c"), None);
        assert_eq!(split_member_access("a.b()"), None);
        assert_eq!(split_member_access("a + b.c"), None);
        assert_eq!(split_member_access("a"), None);
        assert_eq!(split_member_access("a."), None);
        assert_eq!(split_member_access(".b"), None);
        assert_eq!(split_member_access("Timer::Running"), None);
        assert_eq!(split_member_access("4.5"), None);
    }

    #[test]
    fn test_enum_reference_conventions() {
        assert!(is_enum_reference("label.TextFormat", "TextFormat"));
        assert!(is_enum_reference("timer.triggerPolicy", "triggerPolicy"));
        assert!(is_enum_reference("x.wrapMode", "wrapMode"));
        assert!(is_enum_reference("Timer::Running", "Running"));
        assert!(!is_enum_reference("timer.interval", "interval"));
        assert!(!is_enum_reference("model.statement", "statement"));
    }
}
