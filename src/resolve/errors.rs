//! Resolution error types and diagnostics.

use thiserror::Error;

use crate::core::platform::Platform;
use crate::util::diagnostic::Diagnostic;

/// Error during link-set resolution.
///
/// Only one condition is fatal: a platform identifier with no naming
/// profile. Everything filesystem-shaped (missing directories, missing
/// debug archives) degrades to a narrower result with an advisory
/// diagnostic instead, so the resolver stays usable in partially-built
/// development trees.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("unsupported platform `{platform}`")]
    UnsupportedPlatform { platform: String },
}

impl ResolveError {
    /// Convert to a user-friendly diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            ResolveError::UnsupportedPlatform { platform } => {
                let supported: Vec<&str> =
                    Platform::ALL.iter().map(|p| p.name()).collect();
                Diagnostic::error(format!(
                    "no library naming profile for platform `{}`",
                    platform
                ))
                .with_context(format!("supported platforms: {}", supported.join(", ")))
                .with_suggestion(
                    "check the platform identifier passed by the host build tool",
                )
            }
        }
    }
}
