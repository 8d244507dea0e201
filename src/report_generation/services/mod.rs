mod dependency_aggregator;

pub use dependency_aggregator::DependencyAggregator;
