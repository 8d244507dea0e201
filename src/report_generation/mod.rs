/// Report generation domain module
///
/// Contains pure business logic for reverse-dependency aggregation and
/// keyword-based categorization, following Domain-Driven Design principles.
pub mod domain;
pub mod services;
