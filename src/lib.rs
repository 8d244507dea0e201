//! pacrev - reverse-dependency report generator for pacman systems
//!
//! This library identifies explicitly installed packages that are also
//! dependencies of other explicitly installed packages, categorizes them by
//! keyword rules, and renders a plain-text report. It follows hexagonal
//! architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`report_generation`): Pure aggregation and
//!   categorization logic and domain models
//! - **Application Layer** (`application`): Use cases, DTOs, and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use pacrev::prelude::*;
//! use std::time::Duration;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! // Create adapters
//! let package_query = PacmanQuery::new(Duration::from_secs(5));
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = GenerateReportUseCase::new(package_query, progress_reporter);
//!
//! // Execute
//! let response = use_case.execute().await?;
//!
//! // Format output
//! let formatter = PlainTextFormatter::new();
//! let output = formatter.format(&response.read_model)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
pub mod report_generation;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{SilentProgressReporter, StderrProgressReporter};
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::PlainTextFormatter;
    pub use crate::adapters::outbound::pacman::{PacmanQuery, DEFAULT_LOOKUP_TIMEOUT_SECS};
    pub use crate::application::dto::ReportResponse;
    pub use crate::application::read_models::{
        CategorySectionView, DependencyView, ReportReadModel,
    };
    pub use crate::application::use_cases::GenerateReportUseCase;
    pub use crate::ports::outbound::{
        OutputPresenter, PackageQuery, ProgressReporter, ReportFormatter,
    };
    pub use crate::report_generation::domain::{
        categorize, CategorizedReport, Category, DependencyMap,
    };
    pub use crate::report_generation::services::DependencyAggregator;
    pub use crate::shared::error::{ExitCode, ReportError};
    pub use crate::shared::Result;
}
