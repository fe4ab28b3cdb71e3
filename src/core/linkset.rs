//! Resolved link-set output types.
//!
//! A [`ResolvedLibrarySet`] is the opaque descriptor handed back to the
//! host build tool: ordered library paths plus the platform- and
//! descriptor-supplied extras. It is produced fresh per resolution call
//! and never mutated afterwards.

use std::path::PathBuf;

use serde::Serialize;

use crate::core::configuration::Variant;
use crate::util::diagnostic::{Diagnostic, Severity};

/// The link inputs computed by one resolution call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolvedLibrarySet {
    /// Ordered library file paths to link
    pub libraries: Vec<PathBuf>,

    /// Extra system library names
    #[serde(rename = "system-libs")]
    pub system_libs: Vec<String>,

    /// Extra OS framework names
    pub frameworks: Vec<String>,

    /// Preprocessor definitions
    pub defines: Vec<String>,

    /// Extra include-search paths
    #[serde(rename = "include-dirs")]
    pub include_dirs: Vec<PathBuf>,
}

/// A complete resolution result: the link set, the variant that was
/// actually selected, and any advisory diagnostics recorded on the way.
#[derive(Debug, Clone, Serialize)]
pub struct Resolution {
    /// The variant the whole set resolved to
    pub variant: Variant,

    /// The computed link inputs
    #[serde(flatten)]
    pub link: ResolvedLibrarySet,

    /// Advisory diagnostics; never affect the computed set
    #[serde(skip)]
    pub diagnostics: Vec<Diagnostic>,
}

impl Resolution {
    /// The warning diagnostics recorded during resolution.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_json_shape() {
        let resolution = Resolution {
            variant: Variant::Release,
            link: ResolvedLibrarySet {
                libraries: vec![PathBuf::from("/base/Release/zstd.lib")],
                system_libs: vec!["crypt32.lib".to_string()],
                frameworks: Vec::new(),
                defines: vec!["TIDY_STATIC".to_string()],
                include_dirs: Vec::new(),
            },
            diagnostics: vec![Diagnostic::warning("dropped")],
        };

        let json = serde_json::to_value(&resolution).unwrap();
        assert_eq!(json["variant"], "Release");
        assert_eq!(json["libraries"][0], "/base/Release/zstd.lib");
        assert_eq!(json["system-libs"][0], "crypt32.lib");
        // diagnostics are advisory and stay out of the machine output
        assert!(json.get("diagnostics").is_none());
    }

    #[test]
    fn test_warnings_filter() {
        let resolution = Resolution {
            variant: Variant::Release,
            link: ResolvedLibrarySet::default(),
            diagnostics: vec![
                Diagnostic::note("directory missing"),
                Diagnostic::warning("fell back to release"),
            ],
        };
        assert_eq!(resolution.warnings().count(), 1);
    }
}
