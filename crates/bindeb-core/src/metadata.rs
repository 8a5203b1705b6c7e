//! Package metadata model

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Identity of one binary to package: package name plus on-disk location.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BinaryInfo {
    /// Package name, normally the binary's file name
    pub name: String,

    /// Path to the prebuilt executable
    pub path: PathBuf,
}

impl BinaryInfo {
    /// Build a `BinaryInfo` from a path, deriving the package name from the
    /// file name.
    pub fn from_path(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let name = path
            .file_name()
            .and_then(|name| name.to_str())
            .map(str::to_owned)
            .ok_or_else(|| {
                Error::validation(format!("binary path has no file name: {}", path.display()))
            })?;

        Ok(Self { name, path })
    }
}

/// Packaging values shared by every binary in a batch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PackageDefaults {
    /// Package version
    pub version: String,

    /// Package revision
    pub revision: String,

    /// Target architecture label
    pub architecture: String,

    /// Relative install path inside the target system
    pub install_path: String,

    /// Package maintainer
    pub maintainer: String,

    /// Package description, may be multi-line
    pub description: String,
}

impl Default for PackageDefaults {
    fn default() -> Self {
        Self {
            version: "0.1".to_string(),
            revision: "1".to_string(),
            architecture: "x86-64".to_string(),
            install_path: "usr/local/bin".to_string(),
            maintainer: "HomeMicrotech".to_string(),
            description: "My wonderful deb package".to_string(),
        }
    }
}

/// Validated description of one package to build.
///
/// Immutable once constructed; this is the single hand-off value between the
/// metadata stage, the control-file renderer, and the staging-tree builder.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PackageMetadata {
    name: String,
    binary_path: PathBuf,
    version: String,
    revision: String,
    architecture: String,
    install_path: String,
    maintainer: String,
    description: String,
}

impl PackageMetadata {
    /// Create validated metadata for one binary.
    ///
    /// Fails when the binary does not exist on disk, when a required field is
    /// empty, or when the install path is absolute.
    pub fn new(binary: BinaryInfo, defaults: &PackageDefaults) -> Result<Self> {
        if !binary.path.exists() {
            return Err(Error::binary_not_found(binary.path));
        }

        let metadata = Self {
            name: binary.name,
            binary_path: binary.path,
            version: defaults.version.clone(),
            revision: defaults.revision.clone(),
            architecture: defaults.architecture.clone(),
            install_path: defaults.install_path.clone(),
            maintainer: defaults.maintainer.clone(),
            description: defaults.description.clone(),
        };
        metadata.validate()?;

        Ok(metadata)
    }

    fn validate(&self) -> Result<()> {
        let required = [
            ("name", &self.name),
            ("version", &self.version),
            ("revision", &self.revision),
            ("architecture", &self.architecture),
            ("maintainer", &self.maintainer),
        ];
        for (field, value) in required {
            if value.is_empty() {
                return Err(Error::validation(format!("{field} cannot be empty")));
            }
        }

        // The control format requires a non-blank description.
        if self.description.trim().is_empty() {
            return Err(Error::validation("description cannot be blank"));
        }

        // An absolute install path would escape the staging tree.
        if Path::new(&self.install_path).is_absolute() {
            return Err(Error::validation(format!(
                "install path must be relative: {}",
                self.install_path
            )));
        }

        Ok(())
    }

    /// Package name as supplied by the caller
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Path to the source executable
    pub fn binary_path(&self) -> &Path {
        &self.binary_path
    }

    /// Package version
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Package revision
    pub fn revision(&self) -> &str {
        &self.revision
    }

    /// Target architecture label
    pub fn architecture(&self) -> &str {
        &self.architecture
    }

    /// Relative install path inside the target system
    pub fn install_path(&self) -> &str {
        &self.install_path
    }

    /// Package maintainer
    pub fn maintainer(&self) -> &str {
        &self.maintainer
    }

    /// Package description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Name declared in the control file's `Package` field.
    ///
    /// Underscores are disallowed there, so they are stripped.
    pub fn deb_package_name(&self) -> String {
        self.name.replace('_', "")
    }

    /// Basename of the staging directory:
    /// `{name}_{version}-{revision}_{architecture}`.
    pub fn staging_dir_name(&self) -> String {
        format!("{}_{}-{}_{}", self.name, self.version, self.revision, self.architecture)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn fake_binary(dir: &TempDir, name: &str) -> BinaryInfo {
        let path = dir.path().join(name);
        std::fs::write(&path, b"\x7fELF").unwrap();
        BinaryInfo { name: name.to_string(), path }
    }

    #[test]
    fn test_binary_info_from_path() {
        let info = BinaryInfo::from_path("/opt/bins/tool1").unwrap();
        assert_eq!(info.name, "tool1");
        assert_eq!(info.path, PathBuf::from("/opt/bins/tool1"));
    }

    #[test]
    fn test_binary_info_rejects_nameless_path() {
        let result = BinaryInfo::from_path("/");
        assert!(matches!(result, Err(Error::Validation { .. })));
    }

    #[test]
    fn test_metadata_defaults() {
        let dir = TempDir::new().unwrap();
        let metadata =
            PackageMetadata::new(fake_binary(&dir, "tool1"), &PackageDefaults::default()).unwrap();

        assert_eq!(metadata.name(), "tool1");
        assert_eq!(metadata.version(), "0.1");
        assert_eq!(metadata.revision(), "1");
        assert_eq!(metadata.architecture(), "x86-64");
        assert_eq!(metadata.install_path(), "usr/local/bin");
        assert_eq!(metadata.maintainer(), "HomeMicrotech");
    }

    #[test]
    fn test_missing_binary_fails() {
        let binary = BinaryInfo {
            name: "ghost".to_string(),
            path: PathBuf::from("/nonexistent/path/ghost"),
        };
        let result = PackageMetadata::new(binary, &PackageDefaults::default());
        assert!(matches!(result, Err(Error::BinaryNotFound { .. })));
    }

    #[test]
    fn test_empty_fields_fail_validation() {
        let dir = TempDir::new().unwrap();

        let mut binary = fake_binary(&dir, "tool1");
        binary.name = String::new();
        let result = PackageMetadata::new(binary, &PackageDefaults::default());
        assert!(matches!(result, Err(Error::Validation { .. })));

        let defaults = PackageDefaults { version: String::new(), ..Default::default() };
        let result = PackageMetadata::new(fake_binary(&dir, "tool1"), &defaults);
        assert!(matches!(result, Err(Error::Validation { .. })));

        let defaults = PackageDefaults { description: "  \n".to_string(), ..Default::default() };
        let result = PackageMetadata::new(fake_binary(&dir, "tool1"), &defaults);
        assert!(matches!(result, Err(Error::Validation { .. })));
    }

    #[test]
    fn test_absolute_install_path_fails() {
        let dir = TempDir::new().unwrap();
        let defaults =
            PackageDefaults { install_path: "/usr/local/bin".to_string(), ..Default::default() };
        let result = PackageMetadata::new(fake_binary(&dir, "tool1"), &defaults);
        assert!(matches!(result, Err(Error::Validation { .. })));
    }

    #[test]
    fn test_deb_package_name_strips_underscores() {
        let dir = TempDir::new().unwrap();
        let metadata =
            PackageMetadata::new(fake_binary(&dir, "my_tool"), &PackageDefaults::default())
                .unwrap();
        assert_eq!(metadata.deb_package_name(), "mytool");
    }

    #[test]
    fn test_staging_dir_name_keeps_raw_name() {
        let dir = TempDir::new().unwrap();
        let metadata =
            PackageMetadata::new(fake_binary(&dir, "my_tool"), &PackageDefaults::default())
                .unwrap();
        // Only the control Package field is sanitized, not the directory name.
        assert_eq!(metadata.staging_dir_name(), "my_tool_0.1-1_x86-64");
    }
}
