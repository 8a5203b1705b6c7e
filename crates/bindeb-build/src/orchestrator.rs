//! Per-package build orchestration

use std::fs;
use std::path::{Path, PathBuf};

use bindeb_core::{render_control, PackageMetadata};
use tracing::{debug, info};

use crate::archiver::{Archiver, DpkgDeb};
use crate::error::Result;
use crate::staging::StagingTree;

/// Drives the end-to-end build of a single package.
///
/// Each step is an ordered precondition for the next; every operation is
/// attempted exactly once. When the archiver fails, the staging tree is left
/// in place under the output directory for diagnosis — cleanup only runs
/// after archiver success.
#[derive(Debug)]
pub struct PackageBuilder<A: Archiver> {
    archiver: A,
}

impl Default for PackageBuilder<DpkgDeb> {
    fn default() -> Self {
        Self::new()
    }
}

impl PackageBuilder<DpkgDeb> {
    /// Create a builder backed by `dpkg-deb`.
    pub fn new() -> Self {
        Self { archiver: DpkgDeb }
    }
}

impl<A: Archiver> PackageBuilder<A> {
    /// Create a builder with a custom archiver.
    pub fn with_archiver(archiver: A) -> Self {
        Self { archiver }
    }

    /// Build one package into `output_dir`, returning the archive path.
    pub fn build_package(&self, metadata: &PackageMetadata, output_dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(output_dir)?;
        let output_dir = output_dir.canonicalize()?;

        info!("Building package {}", metadata.name());
        let control = render_control(metadata);
        debug!("Rendered control file:\n{control}");

        let staging = StagingTree::build(metadata, &control, &output_dir)?;

        // On archiver failure the staging tree is intentionally not removed.
        let archive = self.archiver.archive(staging.root())?;

        info!("Removing staging directory: {}", staging.root().display());
        staging.remove()?;

        info!("Built {}", archive.display());
        Ok(archive)
    }
}
