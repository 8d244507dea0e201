use super::Category;
use std::collections::BTreeMap;

/// CategorizedReport aggregate: the finished, presentation-ready grouping of
/// dependencies by category.
///
/// Categories iterate in rule-priority order (`Category`'s `Ord`) and
/// dependencies iterate alphabetically within a category; both fall out of
/// the `BTreeMap` keys. Only non-empty categories exist in the map, so empty
/// sections never reach the formatter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategorizedReport {
    sections: BTreeMap<Category, BTreeMap<String, Vec<String>>>,
}

impl CategorizedReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a dependency with its already filtered, deduplicated, and
    /// sorted explicit dependers.
    pub fn insert(&mut self, category: Category, dependency: String, dependers: Vec<String>) {
        self.sections
            .entry(category)
            .or_default()
            .insert(dependency, dependers);
    }

    pub fn sections(&self) -> &BTreeMap<Category, BTreeMap<String, Vec<String>>> {
        &self.sections
    }

    /// Total number of dependencies retained across all categories.
    pub fn dependency_count(&self) -> usize {
        self.sections.values().map(|deps| deps.len()).sum()
    }

    pub fn category_count(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
