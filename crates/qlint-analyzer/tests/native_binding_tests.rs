//! End-to-end tests for the direct native-object binding check, driven
//! through the pass manager.

use qlint_analyzer::diagnostics::{Diagnostic, Severity, categories};
use qlint_analyzer::{AnalysisContext, ElementPass, NativeObjectBindingCheck, PassManager, TypeRegistry};
use qlint_common::SourceSpan;
use qlint_model::{Document, DocumentBuilder};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

fn span_of(source: &str, needle: &str) -> SourceSpan {
    let offset = source.find(needle).unwrap() as u32;
    SourceSpan::new(offset, needle.len() as u32)
}

fn root_span(source: &str) -> SourceSpan {
    SourceSpan::new(0, source.rfind('}').unwrap() as u32 + 1)
}

/// Scenario A: a host-native sibling referenced directly from a binding.
fn native_sibling_document() -> Document {
    let source = "Item {\n    QTimer {\n        id: timer\n    }\n    Text {\n        interval: timer.interval\n    }\n}\n";
    let mut builder = DocumentBuilder::new("app.ui", source);
    let root = builder.add_root("Item", root_span(source));
    let timer = builder.add_child(root, "QTimer", span_of(source, "QTimer {\n        id: timer\n    }"));
    builder.set_id(timer, "timer");
    let text = builder.add_child(root, "Text", span_of(source, "Text {\n        interval: timer.interval\n    }"));
    builder.add_binding(text, "interval", "timer.interval", span_of(source, "timer.interval"));
    builder.finish().unwrap()
}

fn analyze(document: &Document) -> Vec<Diagnostic> {
    let mut manager = PassManager::new(TypeRegistry::default());
    manager.register(Box::new(NativeObjectBindingCheck::new()));
    manager.analyze(document)
}

#[test]
fn test_scenario_a_native_sibling_binding_is_flagged_with_fix() {
    let document = native_sibling_document();
    let diagnostics = analyze(&document);

    assert_eq!(diagnostics.len(), 1);
    let diagnostic = &diagnostics[0];
    assert_eq!(diagnostic.severity, Severity::Warning);
    assert_eq!(diagnostic.category, categories::NATIVE_OBJECT_BINDING);
    assert_eq!(diagnostic.file, "app.ui");
    assert_eq!(diagnostic.span, span_of(document.source(), "timer.interval"));
    assert!(diagnostic.message.contains("property alias"));

    let fix = diagnostic.fix.as_ref().expect("fix attached");
    let transformed = fix.apply_to(document.source());
    assert!(transformed.contains("property alias als_timer_interval: timer.interval"));
    assert!(transformed.contains("interval: als_timer_interval"));
}

#[test]
fn test_scenario_b_enum_suffix_property_is_exempt() {
    let source = "Item {\n    QLabel {\n        id: label\n    }\n    Text {\n        format: label.TextFormat\n    }\n}\n";
    let mut builder = DocumentBuilder::new("app.ui", source);
    let root = builder.add_root("Item", root_span(source));
    let label = builder.add_child(root, "QLabel", span_of(source, "QLabel {\n        id: label\n    }"));
    builder.set_id(label, "label");
    let text = builder.add_child(root, "Text", span_of(source, "Text {\n        format: label.TextFormat\n    }"));
    builder.add_binding(text, "format", "label.TextFormat", span_of(source, "label.TextFormat"));
    let document = builder.finish().unwrap();

    assert!(analyze(&document).is_empty());
}

#[test]
fn test_scenario_c_declarative_sibling_binding_is_clean() {
    let source = "Item {\n    Item {\n        id: sibling\n    }\n    Text {\n        width: sibling.width\n    }\n}\n";
    let mut builder = DocumentBuilder::new("app.ui", source);
    let root = builder.add_root("Item", root_span(source));
    let sibling = builder.add_child(root, "Item", span_of(source, "Item {\n        id: sibling\n    }"));
    builder.set_id(sibling, "sibling");
    let text = builder.add_child(root, "Text", span_of(source, "Text {\n        width: sibling.width\n    }"));
    builder.add_binding(text, "width", "sibling.width", span_of(source, "sibling.width"));
    let document = builder.finish().unwrap();

    assert!(analyze(&document).is_empty());
}

#[test]
fn test_scenario_d_chained_access_is_a_shape_mismatch() {
    let source = "Item {\n    QTimer {\n        id: a\n    }\n    Text {\n        value: a.b.c\n    }\n}\n";
    let mut builder = DocumentBuilder::new("app.ui", source);
    let root = builder.add_root("Item", root_span(source));
    let timer = builder.add_child(root, "QTimer", span_of(source, "QTimer {\n        id: a\n    }"));
    builder.set_id(timer, "a");
    let text = builder.add_child(root, "Text", span_of(source, "Text {\n        value: a.b.c\n    }"));
    builder.add_binding(text, "value", "a.b.c", span_of(source, "a.b.c"));
    let document = builder.finish().unwrap();

    assert!(analyze(&document).is_empty());
}

struct CountingProbe {
    runs: Arc<AtomicUsize>,
}

impl ElementPass for CountingProbe {
    fn name(&self) -> &'static str {
        "counting-probe"
    }

    fn should_run(&self, ctx: &AnalysisContext<'_>, element: qlint_model::ElementId) -> bool {
        ctx.document[element].has_bindings()
    }

    fn run(&self, _ctx: &mut AnalysisContext<'_>, _element: qlint_model::ElementId) {
        self.runs.fetch_add(1, Ordering::Relaxed);
    }
}

#[test]
fn test_scenario_e_elements_without_bindings_never_run() {
    let document = native_sibling_document();

    // Only the Text element owns a binding; root and QTimer must be
    // filtered out by should_run.
    let runs = Arc::new(AtomicUsize::new(0));
    let mut manager = PassManager::new(TypeRegistry::default());
    manager.register(Box::new(CountingProbe { runs: runs.clone() }));
    manager.analyze(&document);
    assert_eq!(runs.load(Ordering::Relaxed), 1);

    let check = NativeObjectBindingCheck::new();
    let registry = TypeRegistry::default();
    let ctx = AnalysisContext::new(&document, &registry);
    assert!(!check.should_run(&ctx, document.root()));
}

#[test]
fn test_analysis_is_idempotent() {
    let document = native_sibling_document();
    let mut manager = PassManager::new(TypeRegistry::default());
    manager.register(Box::new(NativeObjectBindingCheck::new()));
    assert_eq!(manager.analyze(&document), manager.analyze(&document));
}

#[test]
fn test_empty_registry_reports_nothing() {
    let document = native_sibling_document();
    let mut manager = PassManager::new(TypeRegistry::empty());
    manager.register(Box::new(NativeObjectBindingCheck::new()));
    assert!(manager.analyze(&document).is_empty());
}

#[test]
fn test_colliding_alias_names_are_disambiguated() {
    let source = "Item {\n    QTimer {\n        id: a_b\n    }\n    QTimer {\n        id: a\n    }\n    Text {\n        width: a_b.c\n        height: a.b_c\n    }\n}\n";
    let mut builder = DocumentBuilder::new("app.ui", source);
    let root = builder.add_root("Item", root_span(source));
    let first = builder.add_child(root, "QTimer", span_of(source, "QTimer {\n        id: a_b\n    }"));
    builder.set_id(first, "a_b");
    let second = builder.add_child(root, "QTimer", span_of(source, "QTimer {\n        id: a\n    }"));
    builder.set_id(second, "a");
    let text = builder.add_child(root, "Text", span_of(source, "Text {\n        width: a_b.c\n        height: a.b_c\n    }"));
    builder.add_binding(text, "width", "a_b.c", span_of(source, "a_b.c"));
    builder.add_binding(text, "height", "a.b_c", span_of(source, "a.b_c"));
    let document = builder.finish().unwrap();

    let diagnostics = analyze(&document);
    assert_eq!(diagnostics.len(), 2);
    // Output order follows source location, and both synthesized names
    // flatten to als_a_b_c; the later pair gets the numeric suffix.
    let hints: Vec<&str> = diagnostics
        .iter()
        .map(|d| d.fix.as_ref().unwrap().hint())
        .collect();
    assert_eq!(
        hints,
        [
            "Add property alias: property alias als_a_b_c: a_b.c",
            "Add property alias: property alias als_a_b_c_2: a.b_c",
        ]
    );
}
