//! External archiver invocation

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use crate::error::{BuildError, Result};

/// Path of the archive the archiver produces for `staging_dir`: a sibling
/// file named from the staging directory's basename plus `.deb`.
pub fn deb_path_for(staging_dir: &Path) -> PathBuf {
    let mut name = staging_dir.file_name().unwrap_or_default().to_os_string();
    name.push(".deb");
    staging_dir.with_file_name(name)
}

/// Narrow interface to the tool that turns a staging tree into the final
/// archive.
pub trait Archiver {
    /// Build the archive for `staging_dir`, returning the path of the
    /// produced file.
    fn archive(&self, staging_dir: &Path) -> Result<PathBuf>;
}

/// `dpkg-deb`-backed archiver.
///
/// Runs `dpkg-deb --build --root-owner-group <staging_dir>`, which assigns
/// root ownership to archive entries and writes the `.deb` adjacent to the
/// staging directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct DpkgDeb;

impl Archiver for DpkgDeb {
    fn archive(&self, staging_dir: &Path) -> Result<PathBuf> {
        let package = staging_dir
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| staging_dir.display().to_string());

        let mut cmd = Command::new("dpkg-deb");
        cmd.arg("--build").arg("--root-owner-group").arg(staging_dir);
        debug!("Running archiver command: {cmd:?}");

        let output = cmd.output().map_err(|e| {
            BuildError::archiver_failed(&package, format!("Failed to execute dpkg-deb: {e}"))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(BuildError::archiver_failed(
                &package,
                format!("dpkg-deb failed: {stderr}"),
            ));
        }

        Ok(deb_path_for(staging_dir))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deb_path_is_sibling_of_staging_dir() {
        let staging = Path::new("/out/tool1_0.1-1_x86-64");
        assert_eq!(deb_path_for(staging), PathBuf::from("/out/tool1_0.1-1_x86-64.deb"));
    }

    #[test]
    fn test_deb_path_keeps_dots_in_basename() {
        // `Path::with_extension` would truncate after the last dot; the
        // archive name must append to the full basename instead.
        let staging = Path::new("/out/my_tool_1.2.3-4_amd64");
        assert_eq!(deb_path_for(staging), PathBuf::from("/out/my_tool_1.2.3-4_amd64.deb"));
    }
}
