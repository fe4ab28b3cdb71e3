//! The link-set resolution pipeline.
//!
//! Four stages run in a straight line: profile lookup, variant
//! selection, debug-availability probing, and path building. Each call
//! receives its own inputs and returns an independently owned
//! [`Resolution`]; nothing is cached or shared across calls, so
//! re-invocation with identical inputs and an unchanged filesystem
//! yields an identical result.

pub mod build;
pub mod errors;
pub mod probe;

use std::path::PathBuf;

use crate::core::configuration::BuildConfiguration;
use crate::core::linkset::{Resolution, ResolvedLibrarySet};
use crate::core::manifest::{LibraryManifest, ModuleDescriptor};
use crate::core::platform::PlatformProfile;
use crate::util::diagnostic::Diagnostic;
use crate::util::fs::FileProbe;

pub use errors::ResolveError;

/// Everything one resolution call needs, passed explicitly.
///
/// The host build tool's ambient state (target platform, configuration,
/// command-line toggles) is collapsed into this struct at the call
/// boundary; the pipeline itself never reads global state.
#[derive(Debug, Clone)]
pub struct ResolveRequest {
    /// Platform identifier as supplied by the host build tool
    pub platform: String,

    /// Build configuration
    pub configuration: BuildConfiguration,

    /// Directory containing the per-variant library directories
    /// (`<base_dir>/Debug`, `<base_dir>/Release`). Paths in the result
    /// are absolute when this is absolute.
    pub base_dir: PathBuf,

    /// Library manifests, contributing paths in the order given
    pub manifests: Vec<LibraryManifest>,

    /// Preprocessor definitions to hand through
    pub defines: Vec<String>,

    /// Include-search paths to hand through
    pub include_dirs: Vec<PathBuf>,

    /// Extra system libraries beyond the platform profile's
    pub system_libs: Vec<String>,

    /// Extra OS frameworks beyond the platform profile's
    pub frameworks: Vec<String>,
}

impl ResolveRequest {
    /// Create a request with empty manifests and extras.
    pub fn new(
        platform: impl Into<String>,
        configuration: BuildConfiguration,
        base_dir: impl Into<PathBuf>,
    ) -> Self {
        ResolveRequest {
            platform: platform.into(),
            configuration,
            base_dir: base_dir.into(),
            manifests: Vec::new(),
            defines: Vec::new(),
            include_dirs: Vec::new(),
            system_libs: Vec::new(),
            frameworks: Vec::new(),
        }
    }

    /// Add a manifest.
    pub fn with_manifest(mut self, manifest: LibraryManifest) -> Self {
        self.manifests.push(manifest);
        self
    }
}

/// Run the full pipeline for one request.
///
/// Fails only for an unsupported platform; filesystem-absence
/// conditions degrade to a narrower (possibly empty) result with
/// advisory diagnostics.
pub fn resolve(request: &ResolveRequest, fs: &dyn FileProbe) -> Result<Resolution, ResolveError> {
    let profile = PlatformProfile::resolve(&request.platform)?;
    let (preferred, _) = request.configuration.select();

    let mut diagnostics = Vec::new();
    let variant = probe::probe_variant(
        &profile,
        &request.manifests,
        &request.base_dir,
        preferred,
        fs,
        &mut diagnostics,
    );
    let libraries = build::build_library_paths(
        &profile,
        variant,
        &request.base_dir,
        &request.manifests,
        fs,
        &mut diagnostics,
    );

    let mut link = ResolvedLibrarySet {
        libraries,
        system_libs: profile.system_libs.iter().map(|s| s.to_string()).collect(),
        frameworks: profile.frameworks.iter().map(|s| s.to_string()).collect(),
        defines: profile.defines.iter().map(|s| s.to_string()).collect(),
        include_dirs: request.include_dirs.clone(),
    };
    link.system_libs.extend(request.system_libs.iter().cloned());
    link.frameworks.extend(request.frameworks.iter().cloned());
    link.defines.extend(request.defines.iter().cloned());

    Ok(Resolution {
        variant,
        link,
        diagnostics,
    })
}

/// Resolve a module descriptor for a platform/configuration pair.
///
/// Applies the descriptor's matching `[platform.<id>]` additions and
/// runs [`resolve`] over the combined request.
pub fn resolve_descriptor(
    descriptor: &ModuleDescriptor,
    platform_id: &str,
    configuration: BuildConfiguration,
    base_dir: impl Into<PathBuf>,
    fs: &dyn FileProbe,
) -> Result<Resolution, ResolveError> {
    let platform = platform_id.parse()?;

    let mut request = ResolveRequest::new(platform_id, configuration, base_dir);
    request.manifests = descriptor.manifests_for(platform);
    request.defines = descriptor.module.defines.clone();
    request.include_dirs = descriptor.module.include_dirs.clone();

    if let Some(additions) = descriptor.platform_additions(platform) {
        request.system_libs.extend(additions.system_libs.iter().cloned());
        request.frameworks.extend(additions.frameworks.iter().cloned());
        request.defines.extend(additions.defines.iter().cloned());
        request.include_dirs.extend(additions.include_dirs.iter().cloned());
    }

    resolve(&request, fs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::configuration::Variant;
    use crate::test_support::MockProbe;

    fn base() -> PathBuf {
        PathBuf::from("/plugin/ThirdParty/Lib")
    }

    #[test]
    fn test_win64_development_explicit() {
        let mut fs = MockProbe::new();
        fs.add_file(base().join("Release/zstd.lib"));
        fs.add_file(base().join("Release/draco.lib"));

        let request = ResolveRequest::new("Win64", BuildConfiguration::Development, base())
            .with_manifest(LibraryManifest::explicit(["zstd", "draco"]));
        let resolution = resolve(&request, &fs).unwrap();

        assert_eq!(resolution.variant, Variant::Release);
        assert_eq!(
            resolution.link.libraries,
            vec![
                base().join("Release/zstd.lib"),
                base().join("Release/draco.lib"),
            ]
        );
        assert_eq!(resolution.link.system_libs, vec!["crypt32.lib"]);
        assert_eq!(resolution.warnings().count(), 0);
    }

    #[test]
    fn test_mac_debug_falls_back_to_release() {
        let mut fs = MockProbe::new();
        // no Debug directory at all
        fs.add_file(base().join("Release/libBeUtils.a"));

        let request = ResolveRequest::new("Mac", BuildConfiguration::Debug, base())
            .with_manifest(LibraryManifest::explicit(["BeUtils"]));
        let resolution = resolve(&request, &fs).unwrap();

        assert_eq!(resolution.variant, Variant::Release);
        assert_eq!(
            resolution.link.libraries,
            vec![base().join("Release/libBeUtils.a")]
        );
        assert_eq!(resolution.warnings().count(), 1);
        assert_eq!(resolution.link.frameworks, vec!["SystemConfiguration"]);
    }

    #[test]
    fn test_unsupported_platform_is_fatal() {
        let fs = MockProbe::new();
        let request = ResolveRequest::new("Stadia", BuildConfiguration::Shipping, base());
        let err = resolve(&request, &fs).unwrap_err();
        assert!(matches!(err, ResolveError::UnsupportedPlatform { .. }));
    }

    #[test]
    fn test_missing_everything_is_soft_and_empty() {
        let fs = MockProbe::new();
        let request = ResolveRequest::new("Linux", BuildConfiguration::Debug, base())
            .with_manifest(LibraryManifest::explicit(["cpr"]));
        let resolution = resolve(&request, &fs).unwrap();

        assert!(resolution.link.libraries.is_empty());
        // platform extras are filesystem-independent and still present
        assert_eq!(resolution.link.system_libs, vec!["anl"]);
        assert_eq!(resolution.diagnostics.len(), 1);
        assert_eq!(resolution.warnings().count(), 0);
    }

    #[test]
    fn test_idempotent_against_unchanged_filesystem() {
        let mut fs = MockProbe::new();
        let dir = base().join("Release");
        fs.add_file(dir.join("libCesiumGltf.a"));
        fs.add_file(dir.join("libCesiumAsync.a"));
        fs.add_file(dir.join("libdraco.a"));

        let request = ResolveRequest::new("Linux", BuildConfiguration::Shipping, base())
            .with_manifest(LibraryManifest::explicit(["draco"]))
            .with_manifest(LibraryManifest::glob("Cesium*"));

        let first = resolve(&request, &fs).unwrap();
        let second = resolve(&request, &fs).unwrap();
        assert_eq!(first.link, second.link);
        assert_eq!(
            first.link.libraries,
            vec![
                dir.join("libdraco.a"),
                dir.join("libCesiumAsync.a"),
                dir.join("libCesiumGltf.a"),
            ]
        );
    }

    #[test]
    fn test_descriptor_resolution_applies_platform_additions() {
        let descriptor = ModuleDescriptor::from_toml_str(
            r#"
[module]
name = "runtime"
include-dirs = ["ThirdParty/Include"]
defines = ["SPDLOG_COMPILED_LIB"]

[[libraries]]
names = ["cpr"]

[platform.Win64]
libraries = ["tidy_static"]
defines = ["TIDY_STATIC"]
"#,
        )
        .unwrap();

        let mut fs = MockProbe::new();
        fs.add_dir(base().join("Release"));

        let resolution = resolve_descriptor(
            &descriptor,
            "Win64",
            BuildConfiguration::Development,
            base(),
            &fs,
        )
        .unwrap();

        assert_eq!(
            resolution.link.libraries,
            vec![
                base().join("Release/cpr.lib"),
                base().join("Release/tidy_static.lib"),
            ]
        );
        assert_eq!(
            resolution.link.defines,
            vec!["SPDLOG_COMPILED_LIB", "TIDY_STATIC"]
        );
        assert_eq!(
            resolution.link.include_dirs,
            vec![PathBuf::from("ThirdParty/Include")]
        );

        // another platform does not see the Win64 additions
        let resolution = resolve_descriptor(
            &descriptor,
            "Linux",
            BuildConfiguration::Development,
            base(),
            &fs,
        )
        .unwrap();
        assert_eq!(
            resolution.link.libraries,
            vec![base().join("Release/libcpr.a")]
        );
        assert_eq!(resolution.link.defines, vec!["SPDLOG_COMPILED_LIB"]);
    }
}
