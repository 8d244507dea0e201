pub mod categorized_report;
pub mod category;
pub mod dependency_map;

pub use categorized_report::CategorizedReport;
pub use category::{categorize, Category};
pub use dependency_map::DependencyMap;
