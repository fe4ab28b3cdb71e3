//! Library-set building: path composition and glob discovery.
//!
//! Once the variant is fixed, explicit names are composed into paths
//! unconditionally - the prober has already decided what exists, and
//! the linker is the authority on truly absent files. Glob manifests
//! list the variant directory and keep matching file names in
//! lexicographic order so link order is reproducible across runs.

use std::path::{Path, PathBuf};

use glob::Pattern;

use crate::core::configuration::Variant;
use crate::core::manifest::LibraryManifest;
use crate::core::platform::PlatformProfile;
use crate::util::diagnostic::Diagnostic;
use crate::util::fs::FileProbe;

/// Compose the ordered library path list for a fixed variant.
///
/// When the variant directory does not exist the result is empty and an
/// informational note is recorded; this is a soft condition so the
/// resolver can run before the third-party artifacts have ever been
/// built.
pub fn build_library_paths(
    profile: &PlatformProfile,
    variant: Variant,
    base_dir: &Path,
    manifests: &[LibraryManifest],
    fs: &dyn FileProbe,
    diagnostics: &mut Vec<Diagnostic>,
) -> Vec<PathBuf> {
    let lib_dir = base_dir.join(variant.dir_name());
    if !fs.dir_exists(&lib_dir) {
        tracing::info!(
            "library directory not found (expected before third-party artifacts are built): {}",
            lib_dir.display()
        );
        diagnostics.push(
            Diagnostic::note("library directory does not exist, resolving an empty set")
                .with_location(&lib_dir),
        );
        return Vec::new();
    }

    let mut paths = Vec::new();
    for manifest in manifests {
        match manifest {
            LibraryManifest::Explicit(names) => {
                for name in names {
                    paths.push(lib_dir.join(profile.archive_file_name(name, variant)));
                }
            }
            LibraryManifest::Glob(spec) => {
                paths.extend(discover(profile, variant, &lib_dir, &spec.pattern, fs, diagnostics));
            }
        }
    }
    paths
}

/// List the variant directory and keep archives matching
/// `prefix + pattern + suffix + extension`, sorted by file name.
fn discover(
    profile: &PlatformProfile,
    variant: Variant,
    lib_dir: &Path,
    pattern: &str,
    fs: &dyn FileProbe,
    diagnostics: &mut Vec<Diagnostic>,
) -> Vec<PathBuf> {
    let file_pattern = profile.archive_file_name(pattern, variant);
    let matcher = match Pattern::new(&file_pattern) {
        Ok(matcher) => matcher,
        Err(err) => {
            // Descriptor validation catches this for TOML input; direct
            // API callers get a warning and an empty match instead.
            tracing::warn!("invalid library pattern `{}`: {}", file_pattern, err);
            diagnostics.push(
                Diagnostic::warning(format!("invalid library pattern `{}`", pattern))
                    .with_context(err.to_string()),
            );
            return Vec::new();
        }
    };

    let mut names: Vec<String> = fs
        .list_dir(lib_dir)
        .into_iter()
        .filter(|name| matcher.matches(name))
        .collect();
    names.sort();
    names.into_iter().map(|name| lib_dir.join(name)).collect()
}
