//! Per-platform archive naming conventions.
//!
//! Every supported platform maps to exactly one profile describing how
//! native archives are named on disk (prefix, extension, debug suffix)
//! and which system libraries, frameworks, and defines the platform
//! drags in. Unsupported identifiers have no profile and resolution
//! fails up front - a build cannot proceed without naming conventions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::configuration::Variant;
use crate::resolve::errors::ResolveError;

/// A supported target platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    #[serde(rename = "Win64", alias = "win64")]
    Win64,
    #[serde(rename = "Mac", alias = "mac")]
    Mac,
    #[serde(rename = "Linux", alias = "linux")]
    Linux,
    #[serde(rename = "Android", alias = "android")]
    Android,
    #[serde(rename = "IOS", alias = "ios")]
    Ios,
}

impl Platform {
    /// All supported platforms, in convention-table order.
    pub const ALL: [Platform; 5] = [
        Platform::Win64,
        Platform::Mac,
        Platform::Linux,
        Platform::Android,
        Platform::Ios,
    ];

    /// The canonical identifier used by the host build tool.
    pub fn name(&self) -> &'static str {
        match self {
            Platform::Win64 => "Win64",
            Platform::Mac => "Mac",
            Platform::Linux => "Linux",
            Platform::Android => "Android",
            Platform::Ios => "IOS",
        }
    }

    /// The naming profile for this platform.
    pub fn profile(self) -> PlatformProfile {
        match self {
            Platform::Win64 => PlatformProfile {
                platform: self,
                lib_prefix: "",
                lib_extension: ".lib",
                debug_suffix: "d",
                // curl pulls in the system certificate store
                system_libs: &["crypt32.lib"],
                frameworks: &[],
                defines: &[],
            },
            Platform::Mac => PlatformProfile {
                platform: self,
                lib_prefix: "lib",
                lib_extension: ".a",
                debug_suffix: "d",
                system_libs: &[],
                frameworks: &["SystemConfiguration"],
                defines: &[],
            },
            Platform::Linux => PlatformProfile {
                platform: self,
                lib_prefix: "lib",
                lib_extension: ".a",
                debug_suffix: "d",
                // getaddrinfo_a lives in anl
                system_libs: &["anl"],
                frameworks: &[],
                defines: &[],
            },
            Platform::Android => PlatformProfile {
                platform: self,
                lib_prefix: "lib",
                lib_extension: ".a",
                debug_suffix: "d",
                system_libs: &[],
                frameworks: &[],
                defines: &[],
            },
            Platform::Ios => PlatformProfile {
                platform: self,
                lib_prefix: "lib",
                lib_extension: ".a",
                debug_suffix: "d",
                system_libs: &[],
                frameworks: &["SystemConfiguration"],
                defines: &[],
            },
        }
    }
}

impl FromStr for Platform {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "win64" => Ok(Platform::Win64),
            "mac" => Ok(Platform::Mac),
            "linux" => Ok(Platform::Linux),
            "android" => Ok(Platform::Android),
            "ios" => Ok(Platform::Ios),
            _ => Err(ResolveError::UnsupportedPlatform {
                platform: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Archive naming conventions and platform-implied link extras.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformProfile {
    /// The platform this profile belongs to
    pub platform: Platform,

    /// Archive file name prefix ("lib" everywhere except Win64)
    pub lib_prefix: &'static str,

    /// Archive file extension, including the dot
    pub lib_extension: &'static str,

    /// Suffix appended to the base name for debug-variant archives
    pub debug_suffix: &'static str,

    /// System libraries the platform always links
    pub system_libs: &'static [&'static str],

    /// OS frameworks the platform always links
    pub frameworks: &'static [&'static str],

    /// Preprocessor definitions implied by the platform
    pub defines: &'static [&'static str],
}

impl PlatformProfile {
    /// Look up the profile for a platform identifier.
    ///
    /// Fails with [`ResolveError::UnsupportedPlatform`] for identifiers
    /// outside the supported set.
    pub fn resolve(platform_id: &str) -> Result<PlatformProfile, ResolveError> {
        platform_id.parse::<Platform>().map(Platform::profile)
    }

    /// Compose the archive file name for a library base name.
    ///
    /// `prefix + name + debugSuffix + extension` for the Debug variant,
    /// without the suffix for Release.
    pub fn archive_file_name(&self, name: &str, variant: Variant) -> String {
        let suffix = match variant {
            Variant::Debug => self.debug_suffix,
            Variant::Release => "",
        };
        format!("{}{}{}{}", self.lib_prefix, name, suffix, self.lib_extension)
    }
}
