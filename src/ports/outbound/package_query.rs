use crate::shared::Result;
use async_trait::async_trait;

/// PackageQuery port for the external package-manager collaborator
///
/// Implementations query the system package manager for the explicit-package
/// set and per-package reverse dependencies. The two methods carry different
/// failure contracts on purpose: the explicit listing is the one input the
/// run cannot proceed without, while an individual reverse-dependency lookup
/// is always allowed to fail.
#[async_trait]
pub trait PackageQuery {
    /// Lists all explicitly installed package names.
    ///
    /// # Errors
    /// Returns an error if the listing cannot be obtained at all; this is
    /// fatal to the run.
    async fn explicit_packages(&self) -> Result<Vec<String>>;

    /// Lists the packages that directly depend on `package`.
    ///
    /// Infallible by contract: a lookup that times out, exits nonzero, or
    /// produces unreadable output degrades to an empty list. No retries.
    async fn reverse_dependencies(&self, package: &str) -> Vec<String>;
}
