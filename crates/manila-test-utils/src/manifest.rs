//! Temporary manifest files.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Write `content` to `dir/name` and return the path.
///
/// # Panics
/// Panics if the file cannot be written.
pub fn write_manifest(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content)
        .unwrap_or_else(|e| panic!("write_manifest: failed to write {}: {e}", path.display()));
    path
}

/// A temp directory holding manifests and an isolated global config dir.
///
/// The global config dir starts empty, so tests never pick up the real
/// user's `defaults.toml`.
pub struct ManifestDir {
    temp: TempDir,
}

impl ManifestDir {
    /// # Panics
    /// Panics if the temp directory cannot be created.
    pub fn new() -> Self {
        let temp = TempDir::new().expect("ManifestDir: failed to create temp dir");
        fs::create_dir_all(temp.path().join("config"))
            .expect("ManifestDir: failed to create config dir");
        Self { temp }
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    /// Directory to pass as the global config dir override.
    pub fn config_dir(&self) -> PathBuf {
        self.temp.path().join("config")
    }

    /// Write a manifest next to the config dir.
    pub fn manifest(&self, name: &str, content: &str) -> PathBuf {
        write_manifest(self.temp.path(), name, content)
    }

    /// Write the global `defaults.toml` layer.
    pub fn defaults(&self, content: &str) -> PathBuf {
        write_manifest(&self.config_dir(), "defaults.toml", content)
    }
}

impl Default for ManifestDir {
    fn default() -> Self {
        Self::new()
    }
}
