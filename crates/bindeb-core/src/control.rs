//! Control-file rendering

use crate::metadata::PackageMetadata;

/// Render the `DEBIAN/control` manifest for one package.
///
/// Five fields in fixed order, one per line, trailing newline. The `Package`
/// field strips underscores; no other field is transformed. Values are not
/// escaped, so a value containing a newline breaks the one-field-per-line
/// format. Callers are trusted to supply well-formed strings.
pub fn render_control(metadata: &PackageMetadata) -> String {
    format!(
        "Package: {}\nVersion: {}\nArchitecture: {}\nMaintainer: {}\nDescription: {}\n",
        metadata.deb_package_name(),
        metadata.version(),
        metadata.architecture(),
        metadata.maintainer(),
        metadata.description(),
    )
}
