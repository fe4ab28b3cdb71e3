//! Test utilities for Quay unit tests.
//!
//! The resolution pipeline talks to the filesystem only through the
//! [`FileProbe`](crate::util::fs::FileProbe) trait, so tests supply
//! canned existence answers instead of staging real directories.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::util::fs::FileProbe;

/// In-memory [`FileProbe`](crate::util::fs::FileProbe) with canned
/// files and directories.
#[derive(Debug, Clone, Default)]
pub struct MockProbe {
    files: BTreeSet<PathBuf>,
    dirs: BTreeSet<PathBuf>,
}

impl MockProbe {
    /// Create an empty probe (nothing exists).
    pub fn new() -> Self {
        MockProbe::default()
    }

    /// Add a file; parent directories are created implicitly.
    pub fn add_file(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        if let Some(parent) = path.parent() {
            self.add_dir(parent);
        }
        self.files.insert(path);
    }

    /// Add a directory and all its parents.
    pub fn add_dir(&mut self, path: impl AsRef<Path>) {
        let mut current = Some(path.as_ref());
        while let Some(dir) = current {
            if dir.as_os_str().is_empty() {
                break;
            }
            self.dirs.insert(dir.to_path_buf());
            current = dir.parent();
        }
    }
}

impl FileProbe for MockProbe {
    fn file_exists(&self, path: &Path) -> bool {
        self.files.contains(path)
    }

    fn dir_exists(&self, path: &Path) -> bool {
        self.dirs.contains(path)
    }

    fn list_dir(&self, path: &Path) -> Vec<String> {
        self.files
            .iter()
            .filter(|p| p.parent() == Some(path))
            .filter_map(|p| p.file_name())
            .filter_map(|n| n.to_str().map(String::from))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_probe_basic() {
        let mut fs = MockProbe::new();
        fs.add_file("/base/Release/zstd.lib");

        assert!(fs.file_exists(Path::new("/base/Release/zstd.lib")));
        assert!(fs.dir_exists(Path::new("/base/Release")));
        assert!(fs.dir_exists(Path::new("/base")));
        assert!(!fs.file_exists(Path::new("/base/Release/draco.lib")));
        assert!(!fs.dir_exists(Path::new("/base/Debug")));
    }

    #[test]
    fn test_mock_probe_list_dir() {
        let mut fs = MockProbe::new();
        fs.add_file("/base/Release/b.lib");
        fs.add_file("/base/Release/a.lib");
        fs.add_file("/base/Debug/c.lib");

        let names = fs.list_dir(Path::new("/base/Release"));
        assert_eq!(names, vec!["a.lib".to_string(), "b.lib".to_string()]);
        assert!(fs.list_dir(Path::new("/base/Other")).is_empty());
    }
}
