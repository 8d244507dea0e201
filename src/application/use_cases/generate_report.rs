use crate::application::dto::ReportResponse;
use crate::application::read_models::ReportReadModel;
use crate::ports::outbound::{PackageQuery, ProgressReporter};
use crate::report_generation::services::DependencyAggregator;
use crate::shared::Result;
use std::collections::{HashMap, HashSet};

/// GenerateReportUseCase - Core use case for report generation
///
/// Orchestrates the workflow: list explicit packages, look up reverse
/// dependencies one package at a time, aggregate, categorize, and build the
/// read model. Infrastructure comes in through generic dependency injection.
///
/// # Type Parameters
/// * `Q` - PackageQuery implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateReportUseCase<Q, PR> {
    package_query: Q,
    progress_reporter: PR,
}

impl<Q, PR> GenerateReportUseCase<Q, PR>
where
    Q: PackageQuery,
    PR: ProgressReporter,
{
    /// Creates a new GenerateReportUseCase with injected dependencies
    pub fn new(package_query: Q, progress_reporter: PR) -> Self {
        Self {
            package_query,
            progress_reporter,
        }
    }

    /// Executes the report generation use case
    ///
    /// # Errors
    /// The only fatal condition is failure to obtain the explicit-package
    /// listing. Individual reverse-dependency lookups are absorbed by the
    /// port contract and can never abort the run.
    pub async fn execute(&self) -> Result<ReportResponse> {
        let explicit_set = self.list_explicit_packages().await?;

        let raw_reverse_deps = self.collect_reverse_dependencies(&explicit_set).await;

        let dependency_map =
            DependencyAggregator::build_dependency_map(&explicit_set, &raw_reverse_deps);
        let report = DependencyAggregator::build_report(&dependency_map, &explicit_set);

        self.progress_reporter.report_completion(&format!(
            "✅ {} package(s) retained as shared dependencies across {} categories",
            report.dependency_count(),
            report.category_count()
        ));

        let read_model = ReportReadModel::from_report(&report);
        let dependency_count = read_model.total_dependency_count();

        Ok(ReportResponse::new(
            read_model,
            explicit_set.len(),
            dependency_count,
        ))
    }

    /// Obtains the explicit-package set, the one input the run cannot
    /// proceed without.
    async fn list_explicit_packages(&self) -> Result<HashSet<String>> {
        self.progress_reporter
            .report("📖 Querying explicitly installed packages...");

        let listing = self.package_query.explicit_packages().await?;

        let explicit_set: HashSet<String> = listing
            .into_iter()
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect();

        self.progress_reporter.report(&format!(
            "✅ Found {} explicitly installed package(s)",
            explicit_set.len()
        ));

        Ok(explicit_set)
    }

    /// Runs one bounded reverse-dependency lookup per package, sequentially.
    ///
    /// Iteration is over a sorted copy so progress output is deterministic.
    /// Packages whose lookup returns nothing get no map entry.
    async fn collect_reverse_dependencies(
        &self,
        explicit_set: &HashSet<String>,
    ) -> HashMap<String, Vec<String>> {
        let mut packages: Vec<&String> = explicit_set.iter().collect();
        packages.sort();

        let total = packages.len();
        let mut raw_reverse_deps: HashMap<String, Vec<String>> = HashMap::new();

        for (index, package) in packages.into_iter().enumerate() {
            self.progress_reporter
                .report_progress(index + 1, total, Some(package.as_str()));

            let dependers = self.package_query.reverse_dependencies(package).await;
            if !dependers.is_empty() {
                raw_reverse_deps.insert(package.clone(), dependers);
            }
        }

        raw_reverse_deps
    }
}
