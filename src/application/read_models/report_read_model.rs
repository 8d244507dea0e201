//! Report read model for formatting
//!
//! Provides a denormalized, presentation-ordered view of the categorized
//! report so formatters never touch domain collections directly.

use crate::report_generation::domain::CategorizedReport;

/// Main read model consumed by report formatters
#[derive(Debug, Clone, PartialEq)]
pub struct ReportReadModel {
    /// Sections in fixed category-priority order; empty categories are
    /// already absent.
    pub sections: Vec<CategorySectionView>,
}

/// View of one category section
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySectionView {
    /// Section title with underscores replaced by spaces (e.g. "GUI LIBS")
    pub title: String,
    /// Dependencies in this section, alphabetical
    pub dependencies: Vec<DependencyView>,
}

/// View of one dependency line with its explicit dependers
#[derive(Debug, Clone, PartialEq)]
pub struct DependencyView {
    pub name: String,
    /// Sorted, deduplicated, explicit-only dependers
    pub dependers: Vec<String>,
}

impl ReportReadModel {
    /// Builds the read model from the domain aggregate.
    ///
    /// Ordering is inherited from the aggregate's BTreeMaps: categories in
    /// rule-priority order, dependencies alphabetical.
    pub fn from_report(report: &CategorizedReport) -> Self {
        let sections = report
            .sections()
            .iter()
            .map(|(category, dependencies)| CategorySectionView {
                title: category.display_name(),
                dependencies: dependencies
                    .iter()
                    .map(|(name, dependers)| DependencyView {
                        name: name.clone(),
                        dependers: dependers.clone(),
                    })
                    .collect(),
            })
            .collect();

        Self { sections }
    }

    pub fn total_dependency_count(&self) -> usize {
        self.sections.iter().map(|s| s.dependencies.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
