//! Build configurations and archive variants.
//!
//! The host build tool hands us one of four configurations; each maps
//! deterministically to a preferred archive variant and the directory
//! that variant lives in. Whether the preference can actually be
//! honored is a filesystem question answered later by the prober, not
//! here.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A build configuration of the host build tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuildConfiguration {
    Debug,
    DebugGame,
    Development,
    Shipping,
}

impl BuildConfiguration {
    /// Map this configuration to its preferred variant and the
    /// directory name that variant is stored under.
    pub fn select(self) -> (Variant, &'static str) {
        let variant = self.preferred_variant();
        (variant, variant.dir_name())
    }

    /// The archive variant this configuration prefers to link.
    pub fn preferred_variant(self) -> Variant {
        match self {
            BuildConfiguration::Debug | BuildConfiguration::DebugGame => Variant::Debug,
            BuildConfiguration::Development | BuildConfiguration::Shipping => Variant::Release,
        }
    }

    /// The canonical configuration name.
    pub fn name(&self) -> &'static str {
        match self {
            BuildConfiguration::Debug => "Debug",
            BuildConfiguration::DebugGame => "DebugGame",
            BuildConfiguration::Development => "Development",
            BuildConfiguration::Shipping => "Shipping",
        }
    }
}

/// Unknown configuration identifier.
#[derive(Debug, Error)]
#[error("unknown build configuration `{0}` (expected Debug, DebugGame, Development, or Shipping)")]
pub struct UnknownConfiguration(pub String);

impl FromStr for BuildConfiguration {
    type Err = UnknownConfiguration;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Ok(BuildConfiguration::Debug),
            "debuggame" => Ok(BuildConfiguration::DebugGame),
            "development" => Ok(BuildConfiguration::Development),
            "shipping" => Ok(BuildConfiguration::Shipping),
            _ => Err(UnknownConfiguration(s.to_string())),
        }
    }
}

impl fmt::Display for BuildConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Debug or Release flavor of a compiled archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variant {
    Debug,
    Release,
}

impl Variant {
    /// Directory name the variant's archives are stored under.
    pub fn dir_name(self) -> &'static str {
        match self {
            Variant::Debug => "Debug",
            Variant::Release => "Release",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dir_name())
    }
}
