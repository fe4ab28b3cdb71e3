//! Read-only filesystem probing.
//!
//! The resolution pipeline only ever asks three questions of the
//! filesystem: does this file exist, does this directory exist, and what
//! files does this directory contain. Putting those behind a trait keeps
//! the pipeline testable with canned answers instead of a real disk.

use std::fs;
use std::path::Path;

/// Read-only filesystem queries used by the resolution pipeline.
pub trait FileProbe {
    /// Check whether a regular file exists at `path`.
    fn file_exists(&self, path: &Path) -> bool;

    /// Check whether a directory exists at `path`.
    fn dir_exists(&self, path: &Path) -> bool;

    /// File names (not full paths) of the plain files directly inside
    /// `path`. Returns an empty list when the directory cannot be read;
    /// ordering is unspecified, callers sort as needed.
    fn list_dir(&self, path: &Path) -> Vec<String>;
}

/// The real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealFs;

impl FileProbe for RealFs {
    fn file_exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn dir_exists(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_dir(&self, path: &Path) -> Vec<String> {
        let Ok(entries) = fs::read_dir(path) else {
            return Vec::new();
        };
        entries
            .filter_map(|e| e.ok())
            .filter(|e| e.path().is_file())
            .filter_map(|e| e.file_name().into_string().ok())
            .collect()
    }
}
