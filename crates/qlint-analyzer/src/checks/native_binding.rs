//! Direct native-object binding check.
//!
//! Flags bindings of the form `property: objectId.propertyName` where
//! `objectId` resolves to a host-native element, and suggests bridging the
//! reference through a declared alias property at the document root
//! instead of reaching across the layer boundary at every use site.

use crate::binding_classifier::{self, BindingClass};
use crate::context::AnalysisContext;
use crate::pass::ElementPass;
use qlint_common::diagnostics::{Diagnostic, categories};
use qlint_model::ElementId;
use tracing::debug;

const MESSAGE: &str =
    "Property binding to a native object detected. Consider using a property alias instead.";

#[derive(Debug, Default)]
pub struct NativeObjectBindingCheck;

impl NativeObjectBindingCheck {
    pub fn new() -> Self {
        Self
    }
}

impl ElementPass for NativeObjectBindingCheck {
    fn name(&self) -> &'static str {
        "native-object-binding"
    }

    fn should_run(&self, ctx: &AnalysisContext<'_>, element: ElementId) -> bool {
        ctx.document[element].has_bindings()
    }

    fn run(&self, ctx: &mut AnalysisContext<'_>, element: ElementId) {
        let document = ctx.document;
        for binding in &document[element].bindings {
            match binding_classifier::classify(document, ctx.registry, element, binding) {
                BindingClass::NoMatch => {}
                BindingClass::DirectNativeReference {
                    object_id,
                    property_name,
                    ..
                } => {
                    debug!(
                        file = document.file_name(),
                        expression = binding.expression.as_str(),
                        "direct native-object binding"
                    );
                    let fix = ctx
                        .fixes
                        .build_fix(document, binding, &object_id, &property_name);
                    let mut diagnostic = Diagnostic::warning(
                        document.file_name(),
                        binding.loc,
                        categories::NATIVE_OBJECT_BINDING,
                        MESSAGE,
                    );
                    // A fix that cannot be anchored downgrades to a plain
                    // warning instead of aborting the analysis.
                    if let Some(fix) = fix {
                        diagnostic = diagnostic.with_fix(fix);
                    }
                    ctx.emit(diagnostic);
                }
            }
        }
    }
}
