/// Read models for CQRS-lite pattern
///
/// This module contains view-optimized structs that provide
/// a denormalized representation of domain data for formatters.
pub mod report_read_model;

pub use report_read_model::{CategorySectionView, DependencyView, ReportReadModel};
