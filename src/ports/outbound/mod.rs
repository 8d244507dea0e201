/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (package manager, file system,
/// console, etc.).
pub mod output_presenter;
pub mod package_query;
pub mod progress_reporter;
pub mod report_formatter;

pub use output_presenter::OutputPresenter;
pub use package_query::PackageQuery;
pub use progress_reporter::ProgressReporter;
pub use report_formatter::ReportFormatter;
