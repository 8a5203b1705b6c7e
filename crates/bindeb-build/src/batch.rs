//! Batch driver over a directory of binaries

use std::io;
use std::path::{Path, PathBuf};

use bindeb_core::{BinaryInfo, PackageDefaults, PackageMetadata};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::archiver::Archiver;
use crate::error::{BuildError, Result};
use crate::orchestrator::PackageBuilder;

/// What to do when one package in a batch fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Abort the whole batch on the first failure
    #[default]
    Abort,

    /// Record the failure and keep building the remaining binaries
    Continue,
}

/// Outcome of one batch run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchReport {
    /// Archives produced, in build order
    pub built: Vec<PathBuf>,

    /// Failures recorded under [`FailurePolicy::Continue`]
    pub failed: Vec<FailedPackage>,
}

/// One recorded per-package failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailedPackage {
    /// Package name
    pub name: String,

    /// Failure description
    pub reason: String,
}

/// Runs one package build per file in a binary directory.
#[derive(Debug)]
pub struct BatchDriver<A: Archiver> {
    builder: PackageBuilder<A>,
    failure_policy: FailurePolicy,
    strict_bin_dir: bool,
}

impl<A: Archiver> BatchDriver<A> {
    /// Create a batch driver around a package builder.
    pub fn new(builder: PackageBuilder<A>) -> Self {
        Self { builder, failure_policy: FailurePolicy::default(), strict_bin_dir: false }
    }

    /// Set the per-package failure policy.
    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    /// Treat a missing or non-directory binary directory as an error instead
    /// of an empty batch.
    pub fn with_strict_bin_dir(mut self, strict: bool) -> Self {
        self.strict_bin_dir = strict;
        self
    }

    /// Package every file in `bin_dir` into `output_dir`.
    pub fn run(
        &self,
        bin_dir: &Path,
        defaults: &PackageDefaults,
        output_dir: &Path,
    ) -> Result<BatchReport> {
        self.run_with(bin_dir, defaults, output_dir, |_| {})
    }

    /// Like [`run`](Self::run), calling `on_package` with each package name
    /// before its build starts.
    pub fn run_with(
        &self,
        bin_dir: &Path,
        defaults: &PackageDefaults,
        output_dir: &Path,
        mut on_package: impl FnMut(&str),
    ) -> Result<BatchReport> {
        if !bin_dir.is_dir() {
            if self.strict_bin_dir {
                return Err(BuildError::bin_dir_missing(bin_dir));
            }
            warn!("Binary directory {} is not a directory, nothing to build", bin_dir.display());
            return Ok(BatchReport::default());
        }

        let mut report = BatchReport::default();

        for entry in WalkDir::new(bin_dir).min_depth(1).max_depth(1).sort_by_file_name() {
            let entry = entry.map_err(io::Error::from)?;
            if !entry.file_type().is_file() {
                debug!("Skipping non-file entry: {}", entry.path().display());
                continue;
            }

            let binary = match BinaryInfo::from_path(entry.path()) {
                Ok(binary) => binary,
                Err(e) => {
                    self.record_failure(
                        &mut report,
                        entry.path().display().to_string(),
                        e.into(),
                    )?;
                    continue;
                }
            };
            on_package(&binary.name);
            let name = binary.name.clone();

            let result = PackageMetadata::new(binary, defaults)
                .map_err(BuildError::from)
                .and_then(|metadata| self.builder.build_package(&metadata, output_dir));

            match result {
                Ok(archive) => report.built.push(archive),
                Err(e) => self.record_failure(&mut report, name, e)?,
            }
        }

        Ok(report)
    }

    fn record_failure(
        &self,
        report: &mut BatchReport,
        name: String,
        error: BuildError,
    ) -> Result<()> {
        match self.failure_policy {
            FailurePolicy::Abort => Err(error),
            FailurePolicy::Continue => {
                warn!("Build failed for {name}: {error}");
                report.failed.push(FailedPackage { name, reason: error.to_string() });
                Ok(())
            }
        }
    }
}
