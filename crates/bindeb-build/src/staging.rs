//! Staging-tree construction

use std::fs;
use std::path::{Path, PathBuf};

use bindeb_core::PackageMetadata;
use tracing::debug;

use crate::error::{BuildError, Result};

/// Transient on-disk directory structure consumed by the archiver.
///
/// Layout: `<root>/DEBIAN/control` plus `<root>/<install_path>/<binary>`,
/// where `<root>` is `{name}_{version}-{revision}_{architecture}` under the
/// output directory.
#[derive(Debug)]
pub struct StagingTree {
    root: PathBuf,
}

impl StagingTree {
    /// Build the staging tree for one package under `output_dir`.
    ///
    /// Creates all intermediate directories (including `output_dir` itself if
    /// absent), writes `control` verbatim to `DEBIAN/control`, and copies the
    /// binary into the install subdirectory preserving its file name.
    pub fn build(
        metadata: &PackageMetadata,
        control: &str,
        output_dir: &Path,
    ) -> Result<StagingTree> {
        let root = output_dir.join(metadata.staging_dir_name());
        let debian_dir = root.join("DEBIAN");
        let install_dir = root.join(metadata.install_path());
        debug!("Staging DEBIAN dir: {}", debian_dir.display());
        debug!("Staging install dir: {}", install_dir.display());

        fs::create_dir_all(&debian_dir)?;
        fs::create_dir_all(&install_dir)?;

        fs::write(debian_dir.join("control"), control)?;

        let file_name = metadata.binary_path().file_name().ok_or_else(|| {
            bindeb_core::Error::validation(format!(
                "binary path has no file name: {}",
                metadata.binary_path().display()
            ))
        })?;
        fs::copy(metadata.binary_path(), install_dir.join(file_name))?;

        Ok(StagingTree { root })
    }

    /// Root directory of the staging tree
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Recursively delete the staging tree.
    pub fn remove(self) -> Result<()> {
        fs::remove_dir_all(&self.root).map_err(BuildError::Io)
    }
}
