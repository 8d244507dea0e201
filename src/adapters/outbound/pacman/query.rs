use crate::ports::outbound::PackageQuery;
use crate::shared::error::ReportError;
use crate::shared::Result;
use async_trait::async_trait;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;

/// Default bounded wait for a single reverse-dependency lookup.
pub const DEFAULT_LOOKUP_TIMEOUT_SECS: u64 = 5;

/// PacmanQuery adapter implementing the PackageQuery port
///
/// Shells out to `pacman -Qeq` for the explicit-package listing and to
/// `pactree -r -u -d 1` for per-package reverse dependencies. Each pactree
/// invocation is wrapped in an individual timeout; a timed-out, failing, or
/// unspawnable lookup degrades to an empty result rather than propagating.
pub struct PacmanQuery {
    pacman_bin: String,
    pactree_bin: String,
    lookup_timeout: Duration,
}

impl PacmanQuery {
    pub fn new(lookup_timeout: Duration) -> Self {
        Self {
            pacman_bin: "pacman".to_string(),
            pactree_bin: "pactree".to_string(),
            lookup_timeout,
        }
    }

    /// Overrides the binaries to invoke. Useful for wrapper scripts and for
    /// exercising the adapter against stand-in commands.
    pub fn with_binaries(
        pacman_bin: impl Into<String>,
        pactree_bin: impl Into<String>,
        lookup_timeout: Duration,
    ) -> Self {
        Self {
            pacman_bin: pacman_bin.into(),
            pactree_bin: pactree_bin.into(),
            lookup_timeout,
        }
    }

    fn parse_name_lines(stdout: &[u8]) -> Vec<String> {
        String::from_utf8_lossy(stdout)
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect()
    }
}

impl Default for PacmanQuery {
    fn default() -> Self {
        Self::new(Duration::from_secs(DEFAULT_LOOKUP_TIMEOUT_SECS))
    }
}

#[async_trait]
impl PackageQuery for PacmanQuery {
    async fn explicit_packages(&self) -> Result<Vec<String>> {
        let output = Command::new(&self.pacman_bin)
            .arg("-Qeq")
            .output()
            .await
            .map_err(|e| ReportError::PackageListUnavailable {
                details: format!("failed to run {}: {}", self.pacman_bin, e),
            })?;

        if !output.status.success() {
            return Err(ReportError::PackageListUnavailable {
                details: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }
            .into());
        }

        Ok(Self::parse_name_lines(&output.stdout))
    }

    async fn reverse_dependencies(&self, package: &str) -> Vec<String> {
        let lookup = Command::new(&self.pactree_bin)
            .args(["-r", "-u", "-d", "1", package])
            .kill_on_drop(true)
            .output();

        match timeout(self.lookup_timeout, lookup).await {
            Ok(Ok(output)) if output.status.success() => {
                // The first line is pactree's header: the queried package
                // itself. Discard it and keep the dependers.
                String::from_utf8_lossy(&output.stdout)
                    .lines()
                    .skip(1)
                    .map(str::trim)
                    .filter(|line| !line.is_empty())
                    .map(String::from)
                    .collect()
            }
            // Nonzero exit, spawn failure, or timeout: treated as "no
            // reverse dependencies found".
            _ => Vec::new(),
        }
    }
}
