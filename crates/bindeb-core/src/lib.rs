//! Core types for bindeb
//!
//! This crate provides the package metadata model, control-file rendering,
//! and the error types shared across the bindeb project.

pub mod control;
pub mod error;
pub mod metadata;

pub use control::render_control;
pub use error::{Error, Result};
pub use metadata::{BinaryInfo, PackageDefaults, PackageMetadata};
