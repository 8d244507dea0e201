use crate::report_generation::domain::{categorize, CategorizedReport, DependencyMap};
use std::collections::{BTreeSet, HashMap, HashSet};

/// DependencyAggregator service for reverse-dependency aggregation
///
/// This service contains pure business logic for turning raw reverse-depender
/// listings into a categorized, filtered report. It has no I/O dependencies
/// and works only with domain objects.
pub struct DependencyAggregator;

impl DependencyAggregator {
    /// Builds the {dependency -> dependers} map from raw reverse-depender
    /// listings.
    ///
    /// For each explicitly installed package, its raw dependers are trimmed;
    /// blanks and self-references (the queried package's own name sometimes
    /// survives as a header artifact) are discarded, everything else is kept
    /// verbatim, duplicates included. A package with no entry in
    /// `raw_reverse_deps`, or whose entry empties out, is treated as having
    /// no reverse dependencies and gets no map entry.
    pub fn build_dependency_map(
        explicit_packages: &HashSet<String>,
        raw_reverse_deps: &HashMap<String, Vec<String>>,
    ) -> DependencyMap {
        let mut map = DependencyMap::new();

        for package in explicit_packages {
            let Some(raw_dependers) = raw_reverse_deps.get(package) else {
                continue;
            };
            for depender in raw_dependers {
                let depender = depender.trim();
                if depender.is_empty() || depender == package {
                    continue;
                }
                map.push_depender(package, depender.to_string());
            }
        }

        map
    }

    /// Builds the final categorized report from a dependency map.
    ///
    /// Dependers are filtered down to explicitly installed packages,
    /// deduplicated, and sorted alphabetically; dependencies whose filtered
    /// set is empty are dropped entirely. Each surviving dependency lands in
    /// its `categorize`d section.
    pub fn build_report(
        dependency_map: &DependencyMap,
        explicit_packages: &HashSet<String>,
    ) -> CategorizedReport {
        let mut report = CategorizedReport::new();

        for (dependency, dependers) in dependency_map.iter() {
            // BTreeSet dedups and sorts in one pass.
            let explicit_dependers: BTreeSet<&String> = dependers
                .iter()
                .filter(|depender| explicit_packages.contains(*depender))
                .collect();

            if explicit_dependers.is_empty() {
                continue;
            }

            let sorted: Vec<String> = explicit_dependers.into_iter().cloned().collect();
            report.insert(categorize(dependency), dependency.clone(), sorted);
        }

        report
    }
}
