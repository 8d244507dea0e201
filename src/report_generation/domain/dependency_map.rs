use std::collections::HashMap;

/// Accumulating map from a dependency name to the packages that depend on it.
///
/// Entries are created on first insertion, so a package with no recorded
/// dependers is simply absent rather than present with an empty list.
/// Depender lists preserve insertion order and may contain duplicates;
/// deduplication and sorting happen at report-build time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DependencyMap {
    entries: HashMap<String, Vec<String>>,
}

impl DependencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `depender` depends on `dependency`.
    pub fn push_depender(&mut self, dependency: &str, depender: String) {
        self.entries
            .entry(dependency.to_string())
            .or_default()
            .push(depender);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.entries.iter()
    }

    pub fn dependers_of(&self, dependency: &str) -> Option<&[String]> {
        self.entries.get(dependency).map(|v| v.as_slice())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
