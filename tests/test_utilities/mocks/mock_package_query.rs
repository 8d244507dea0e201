use async_trait::async_trait;
use pacrev::prelude::*;
use std::collections::HashMap;

/// Mock PackageQuery for testing
///
/// Reverse-dependency entries mirror the port contract: a package with no
/// configured entry behaves like a failed or empty lookup.
pub struct MockPackageQuery {
    explicit: Vec<String>,
    reverse: HashMap<String, Vec<String>>,
    should_fail: bool,
}

impl MockPackageQuery {
    pub fn new(explicit: &[&str]) -> Self {
        Self {
            explicit: explicit.iter().map(|s| s.to_string()).collect(),
            reverse: HashMap::new(),
            should_fail: false,
        }
    }

    pub fn with_reverse_deps(mut self, package: &str, dependers: &[&str]) -> Self {
        self.reverse.insert(
            package.to_string(),
            dependers.iter().map(|s| s.to_string()).collect(),
        );
        self
    }

    pub fn with_failure() -> Self {
        Self {
            explicit: Vec::new(),
            reverse: HashMap::new(),
            should_fail: true,
        }
    }
}

#[async_trait]
impl PackageQuery for MockPackageQuery {
    async fn explicit_packages(&self) -> Result<Vec<String>> {
        if self.should_fail {
            return Err(ReportError::PackageListUnavailable {
                details: "mock package listing failure".to_string(),
            }
            .into());
        }
        Ok(self.explicit.clone())
    }

    async fn reverse_dependencies(&self, package: &str) -> Vec<String> {
        self.reverse.get(package).cloned().unwrap_or_default()
    }
}
