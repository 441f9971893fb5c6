//! Host-native type classification.
//!
//! A conservative, extensible allow-list plus a naming-convention
//! heuristic. False negatives (missed native types) are preferred over
//! false positives, since a match drives a source-edit suggestion. The
//! registry is data-driven: the embedding host extends it from JSON without
//! recompiling the core.

use anyhow::Context;
use rustc_hash::FxHashSet;
use serde::Deserialize;
use std::path::Path;

/// Native types every host installation ships. The configured set extends
/// this table.
const BUILTIN_NATIVE_TYPES: &[&str] = &[
    "QObject",
    "QQuickItem",
    "QAbstractListModel",
    "QSortFilterProxyModel",
    "QTimer",
    "QSettings",
    "QFileSystemWatcher",
    "QNetworkAccessManager",
];

/// Registry of known host-native base-type names plus reserved prefix
/// conventions. Queried, never mutated, during analysis.
///
/// Deserializes from JSON; fields missing from the configuration keep their
/// defaults, so `{}` is the default registry and
/// `{"nativeTypes": [], "nativePrefixes": []}` classifies nothing.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TypeRegistry {
    native_types: FxHashSet<String>,
    native_prefixes: Vec<String>,
}

impl Default for TypeRegistry {
    /// The built-in native-type table plus the reserved `Q` prefix.
    fn default() -> Self {
        Self {
            native_types: BUILTIN_NATIVE_TYPES.iter().map(|s| s.to_string()).collect(),
            native_prefixes: vec!["Q".to_string()],
        }
    }
}

impl TypeRegistry {
    /// A registry that classifies nothing as host-native.
    pub fn empty() -> Self {
        Self {
            native_types: FxHashSet::default(),
            native_prefixes: Vec::new(),
        }
    }

    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading type registry from {}", path.display()))?;
        Self::from_json_str(&text)
            .with_context(|| format!("parsing type registry from {}", path.display()))
    }

    pub fn insert_native_type(&mut self, name: impl Into<String>) {
        self.native_types.insert(name.into());
    }

    pub fn add_native_prefix(&mut self, prefix: impl Into<String>) {
        self.native_prefixes.push(prefix.into());
    }

    /// Whether `type_name` denotes a host-native (non-declarative) object.
    pub fn is_host_native(&self, type_name: &str) -> bool {
        self.native_types.contains(type_name)
            || self
                .native_prefixes
                .iter()
                .any(|prefix| matches_prefix_convention(type_name, prefix))
    }
}

/// The reserved-prefix convention is prefix-plus-capital: `QObject` matches
/// the `Q` prefix, `Quantity` does not.
fn matches_prefix_convention(name: &str, prefix: &str) -> bool {
    name.strip_prefix(prefix)
        .is_some_and(|rest| rest.chars().next().is_some_and(char::is_uppercase))
}
