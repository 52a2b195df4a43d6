//! Import collection.

use std::collections::BTreeSet;

use indexmap::IndexMap;

/// Deduplicating import table: module path to imported symbols.
///
/// Modules keep insertion order and symbols are sorted, so the rendered
/// import block is deterministic.
///
/// # Example
///
/// ```
/// use dtogen_codegen::ImportCollector;
///
/// let mut imports = ImportCollector::new();
/// imports.add("./user-output", "UserOutput");
/// imports.add("./role-enum", "RoleEnum");
/// imports.add("./user-output", "UserOutput");
///
/// assert_eq!(imports.len(), 2);
/// let modules: Vec<&str> = imports.iter().map(|(module, _)| module).collect();
/// assert_eq!(modules, ["./user-output", "./role-enum"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImportCollector {
    imports: IndexMap<String, BTreeSet<String>>,
    defaults: IndexMap<String, String>,
}

impl ImportCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Import a named symbol from a module.
    pub fn add(&mut self, module: &str, symbol: &str) {
        self.imports
            .entry(module.to_string())
            .or_default()
            .insert(symbol.to_string());
    }

    /// Import a module's default export under `binding`.
    pub fn add_default(&mut self, module: &str, binding: &str) {
        self.defaults.insert(module.to_string(), binding.to_string());
    }

    pub fn merge(&mut self, other: &ImportCollector) {
        for (module, symbols) in &other.imports {
            self.imports
                .entry(module.clone())
                .or_default()
                .extend(symbols.iter().cloned());
        }
        for (module, binding) in &other.defaults {
            self.defaults.insert(module.clone(), binding.clone());
        }
    }

    /// Named imports in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.imports.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Default imports in insertion order, as `(module, binding)`.
    pub fn defaults(&self) -> impl Iterator<Item = (&str, &str)> {
        self.defaults.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty() && self.defaults.is_empty()
    }

    /// Number of distinct modules imported.
    pub fn len(&self) -> usize {
        self.imports.len() + self.defaults.keys().filter(|m| !self.imports.contains_key(*m)).count()
    }
}
