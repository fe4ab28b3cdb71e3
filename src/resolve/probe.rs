//! Debug-availability probing and release fallback.
//!
//! When a configuration prefers the Debug variant, every explicitly
//! named archive must exist in its debug form before any of them is
//! linked as debug. The fallback is all-or-nothing: mixing debug and
//! release archives in one link risks incompatible runtimes, so a
//! single missing debug archive demotes the whole set. Glob-discovered
//! manifests match whatever is on disk and are never probed.

use std::path::Path;

use crate::core::configuration::Variant;
use crate::core::manifest::LibraryManifest;
use crate::core::platform::PlatformProfile;
use crate::util::diagnostic::Diagnostic;
use crate::util::fs::FileProbe;

/// Decide the variant the whole library set will actually use.
///
/// Only meaningful when `preferred` is Debug; a Release preference is
/// returned unchanged without touching the filesystem.
pub fn probe_variant(
    profile: &PlatformProfile,
    manifests: &[LibraryManifest],
    base_dir: &Path,
    preferred: Variant,
    fs: &dyn FileProbe,
    diagnostics: &mut Vec<Diagnostic>,
) -> Variant {
    if preferred != Variant::Debug {
        return preferred;
    }

    let debug_dir = base_dir.join(Variant::Debug.dir_name());
    if !fs.dir_exists(&debug_dir) {
        // Demote either way; when the release directory is also absent
        // the builder reports the soft-missing condition instead.
        if fs.dir_exists(&base_dir.join(Variant::Release.dir_name())) {
            tracing::warn!(
                "debug library directory not found, using release archives: {}",
                debug_dir.display()
            );
            diagnostics.push(
                Diagnostic::warning("using release archives because no debug build is available")
                    .with_location(&debug_dir),
            );
        }
        return Variant::Release;
    }

    for manifest in manifests {
        let Some(names) = manifest.explicit_names() else {
            continue;
        };
        for name in names {
            let expected = debug_dir.join(profile.archive_file_name(name, Variant::Debug));
            if !fs.file_exists(&expected) {
                tracing::warn!(
                    "debug archive missing, demoting the whole set to release: {}",
                    expected.display()
                );
                diagnostics.push(
                    Diagnostic::warning(format!(
                        "using release archives because the debug build of `{}` is incomplete",
                        name
                    ))
                    .with_context(format!("missing: {}", expected.display()))
                    .with_suggestion(
                        "rebuild the third-party debug artifacts, or use a Development configuration",
                    ),
                );
                return Variant::Release;
            }
        }
    }

    Variant::Debug
}
