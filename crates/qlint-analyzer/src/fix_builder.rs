//! Alias fix synthesis.
//!
//! A matched anti-pattern gets a two-edit suggestion: declare a bridging
//! alias property just before the document root's closing delimiter, and
//! replace the offending expression with a bare reference to the alias.
//! Edits are anchored to original-document offsets computed once per
//! diagnostic; the builder only describes edits, it never applies them.

use qlint_common::FixSuggestion;
use qlint_model::{Binding, Document};
use rustc_hash::FxHashMap;
use tracing::warn;

/// Per-run alias synthesis state.
///
/// Alias names are deterministic: the same `(object, property)` pair always
/// yields the same name, and a distinct pair whose synthesized name
/// collides (the `_` separator blurs boundaries, so `a_b.c` and `a.b_c`
/// both want `als_a_b_c`) is disambiguated with numeric suffixes in
/// first-occurrence order.
#[derive(Debug, Default)]
pub struct FixBuilder {
    assigned: FxHashMap<String, (String, String)>,
}

impl FixBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Synthesize the alias name for a native reference.
    pub fn alias_name(&mut self, object_id: &str, property_name: &str) -> String {
        let base = format!("als_{object_id}_{property_name}");
        let mut candidate = base.clone();
        let mut n = 2u32;
        loop {
            match self.assigned.get(&candidate) {
                None => {
                    self.assigned.insert(
                        candidate.clone(),
                        (object_id.to_string(), property_name.to_string()),
                    );
                    return candidate;
                }
                Some((object, property)) if object == object_id && property == property_name => {
                    return candidate;
                }
                Some(_) => {
                    candidate = format!("{base}_{n}");
                    n += 1;
                }
            }
        }
    }

    /// Build the alias suggestion for one matched binding.
    ///
    /// Returns `None` when the fix cannot be anchored; the caller then
    /// downgrades to a fix-less diagnostic rather than failing the
    /// analysis.
    pub fn build_fix(
        &mut self,
        document: &Document,
        binding: &Binding,
        object_id: &str,
        property_name: &str,
    ) -> Option<FixSuggestion> {
        let root_loc = document[document.root()].loc;
        if root_loc.is_empty() {
            warn!(
                file = document.file_name(),
                "root element has no closing delimiter to anchor an alias insertion"
            );
            return None;
        }

        let alias = self.alias_name(object_id, property_name);
        let declaration = format!("property alias {alias}: {object_id}.{property_name}");

        let mut fix = FixSuggestion::new(format!("Add property alias: {declaration}"));
        // Insert immediately before the root's closing delimiter.
        fix.add_insertion(root_loc.end() - 1, format!("\n    {declaration}"));
        fix.add_replacement(binding.loc, alias);
        fix.into_normalized()
    }
}
