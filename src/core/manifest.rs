//! Library manifests and module descriptors.
//!
//! A [`LibraryManifest`] names the archives one resolution call should
//! link: either an explicit ordered list of base names, or a glob
//! pattern discovered against the variant directory. A
//! [`ModuleDescriptor`] is the on-disk TOML form of a module's build
//! descriptor: include paths, defines, manifests, and per-platform
//! conditional additions, all declarative data consumed by the shared
//! pipeline.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::core::platform::Platform;

/// Which archives to resolve.
///
/// Explicit lists preserve order (link order may matter) and are not
/// deduplicated. A name listed explicitly *and* matched by a glob
/// manifest in the same call yields the path twice; that overlap is
/// caller error and is deliberately not defended against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LibraryManifest {
    /// Ordered library base names, composed into paths one by one.
    Explicit(Vec<String>),

    /// Discover archives by name pattern in the variant directory.
    Glob(GlobSpec),
}

impl LibraryManifest {
    /// Create an explicit manifest from base names.
    pub fn explicit(names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        LibraryManifest::Explicit(names.into_iter().map(|n| n.into()).collect())
    }

    /// Create a glob manifest from a name pattern.
    pub fn glob(pattern: impl Into<String>) -> Self {
        LibraryManifest::Glob(GlobSpec {
            pattern: pattern.into(),
        })
    }

    /// The explicit base names, if this is an explicit manifest.
    pub fn explicit_names(&self) -> Option<&[String]> {
        match self {
            LibraryManifest::Explicit(names) => Some(names),
            LibraryManifest::Glob(_) => None,
        }
    }
}

/// A glob-discovery spec: match archives whose base name portion
/// matches `pattern` (the platform prefix and extension are added
/// around it by the builder).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobSpec {
    pub pattern: String,
}

/// The parsed module descriptor (`Module.toml`).
#[derive(Debug, Clone, Deserialize)]
pub struct ModuleDescriptor {
    /// Module metadata and unconditional compile inputs
    pub module: ModuleMetadata,

    /// Library manifests, contributing paths in the order given
    #[serde(default)]
    pub libraries: Vec<ManifestEntry>,

    /// Per-platform conditional additions, keyed by platform identifier
    #[serde(default)]
    pub platform: BTreeMap<String, PlatformAdditions>,
}

/// The `[module]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ModuleMetadata {
    /// Module name
    pub name: String,

    /// Include-search paths handed through to the host build tool
    #[serde(default, rename = "include-dirs")]
    pub include_dirs: Vec<PathBuf>,

    /// Preprocessor definitions handed through to the host build tool
    #[serde(default)]
    pub defines: Vec<String>,
}

/// One `[[libraries]]` entry: either an explicit name list or a glob.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ManifestEntry {
    Explicit {
        names: Vec<String>,
    },
    Glob {
        #[serde(rename = "match")]
        pattern: String,
    },
}

impl ManifestEntry {
    /// Convert to the core manifest type.
    pub fn to_manifest(&self) -> LibraryManifest {
        match self {
            ManifestEntry::Explicit { names } => LibraryManifest::Explicit(names.clone()),
            ManifestEntry::Glob { pattern } => LibraryManifest::glob(pattern.clone()),
        }
    }
}

/// A `[platform.<id>]` section: additions applied only when resolving
/// for that platform.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlatformAdditions {
    /// Library base names appended after the common manifests
    #[serde(default)]
    pub libraries: Vec<String>,

    /// Extra system libraries
    #[serde(default, rename = "system-libs")]
    pub system_libs: Vec<String>,

    /// Extra OS frameworks
    #[serde(default)]
    pub frameworks: Vec<String>,

    /// Extra preprocessor definitions
    #[serde(default)]
    pub defines: Vec<String>,

    /// Extra include-search paths
    #[serde(default, rename = "include-dirs")]
    pub include_dirs: Vec<PathBuf>,
}

impl ModuleDescriptor {
    /// Load and validate a descriptor from a TOML file.
    pub fn load(path: &Path) -> Result<ModuleDescriptor> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read descriptor: {}", path.display()))?;
        Self::from_toml_str(&contents)
            .with_context(|| format!("invalid descriptor: {}", path.display()))
    }

    /// Parse and validate a descriptor from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<ModuleDescriptor> {
        let descriptor: ModuleDescriptor =
            toml::from_str(contents).context("failed to parse descriptor TOML")?;
        descriptor.validate()?;
        Ok(descriptor)
    }

    /// Validate descriptor contents beyond what the schema enforces.
    pub fn validate(&self) -> Result<()> {
        if self.module.name.is_empty() {
            bail!("module name must not be empty");
        }

        for entry in &self.libraries {
            match entry {
                ManifestEntry::Explicit { names } => {
                    if names.is_empty() {
                        bail!("explicit library list must not be empty");
                    }
                    if let Some(name) = names.iter().find(|n| n.is_empty()) {
                        bail!("empty library name in explicit list: {:?}", name);
                    }
                }
                ManifestEntry::Glob { pattern } => {
                    glob::Pattern::new(pattern)
                        .with_context(|| format!("invalid library pattern `{}`", pattern))?;
                }
            }
        }

        for key in self.platform.keys() {
            Platform::from_str(key).map_err(|_| {
                anyhow::anyhow!(
                    "unknown platform `{}` in descriptor (supported: {})",
                    key,
                    Platform::ALL
                        .iter()
                        .map(|p| p.name())
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            })?;
        }

        Ok(())
    }

    /// Platform additions matching the given platform, if any.
    pub fn platform_additions(&self, platform: Platform) -> Option<&PlatformAdditions> {
        self.platform
            .iter()
            .find(|(key, _)| matches!(key.parse::<Platform>(), Ok(p) if p == platform))
            .map(|(_, additions)| additions)
    }

    /// The manifests to resolve for a platform: the common entries in
    /// descriptor order, then the platform-conditional names as a
    /// trailing explicit manifest.
    pub fn manifests_for(&self, platform: Platform) -> Vec<LibraryManifest> {
        let mut manifests: Vec<LibraryManifest> =
            self.libraries.iter().map(ManifestEntry::to_manifest).collect();

        if let Some(additions) = self.platform_additions(platform) {
            if !additions.libraries.is_empty() {
                manifests.push(LibraryManifest::Explicit(additions.libraries.clone()));
            }
        }

        manifests
    }
}
