//! Core data structures for Quay.
//!
//! This module contains the foundational types for link-set resolution:
//! - Platform naming profiles
//! - Build configurations and variants
//! - Library manifests and module descriptors
//! - The resolved link-set output

pub mod configuration;
pub mod linkset;
pub mod manifest;
pub mod platform;

pub use configuration::{BuildConfiguration, Variant};
pub use linkset::{Resolution, ResolvedLibrarySet};
pub use manifest::{GlobSpec, LibraryManifest, ModuleDescriptor};
pub use platform::{Platform, PlatformProfile};
