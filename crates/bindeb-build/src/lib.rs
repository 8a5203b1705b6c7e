//! Build pipeline for bindeb
//!
//! Turns validated package metadata into an installable `.deb` archive:
//! staging-tree construction, the external-archiver seam, per-package
//! orchestration, and the batch driver over a directory of binaries.

pub mod archiver;
pub mod batch;
pub mod error;
pub mod orchestrator;
pub mod staging;

pub use archiver::{deb_path_for, Archiver, DpkgDeb};
pub use batch::{BatchDriver, BatchReport, FailedPackage, FailurePolicy};
pub use error::{BuildError, Result};
pub use orchestrator::PackageBuilder;
pub use staging::StagingTree;
