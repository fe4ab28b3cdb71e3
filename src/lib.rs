//! Quay - platform-aware native link-set resolution for game-engine
//! plugin modules.
//!
//! This crate provides the core library functionality for Quay: given a
//! target platform, a build configuration, and one or more library
//! manifests, it computes the ordered set of native archive paths,
//! system libraries, frameworks, and preprocessor definitions a module
//! should hand to its host build tool.

pub mod core;
pub mod resolve;
pub mod util;

/// Test utilities for Quay unit tests.
///
/// This module is only available when running tests. It provides a
/// canned-answer filesystem probe so pipeline tests run without disk.
#[cfg(test)]
pub mod test_support;

pub use crate::core::{
    configuration::BuildConfiguration, configuration::Variant, linkset::Resolution,
    linkset::ResolvedLibrarySet, manifest::LibraryManifest, manifest::ModuleDescriptor,
    platform::Platform, platform::PlatformProfile,
};

pub use crate::resolve::{resolve, resolve_descriptor, ResolveError, ResolveRequest};
pub use crate::util::fs::{FileProbe, RealFs};
