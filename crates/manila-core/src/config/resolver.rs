//! Layered manifest resolution
//!
//! The `ManifestResolver` loads the global defaults file and the caller's
//! manifests in order and merges them, later layers overriding earlier ones.

use std::path::PathBuf;

use super::manifest::Manifest;
use crate::Result;

/// File name of the global defaults layer inside the config directory
pub const DEFAULTS_FILE: &str = "defaults.toml";

/// Resolves the effective manifest from all configured layers
pub struct ManifestResolver {
    /// Manifests supplied by the caller, in precedence order
    manifests: Vec<PathBuf>,

    /// Override for the global config directory (used for testing).
    /// When `None`, the platform-appropriate directory is used via `dirs::config_dir()`.
    global_config_dir_override: Option<PathBuf>,
}

impl ManifestResolver {
    /// Create a resolver for the given manifest files
    ///
    /// Uses the platform-appropriate global config directory, e.g.
    /// `~/.config/manila-compile/` on Linux.
    pub fn new(manifests: Vec<PathBuf>) -> Self {
        Self {
            manifests,
            global_config_dir_override: None,
        }
    }

    /// Create a resolver with a custom global config directory.
    pub fn with_global_config_dir(manifests: Vec<PathBuf>, global_config_dir: PathBuf) -> Self {
        Self {
            manifests,
            global_config_dir_override: Some(global_config_dir),
        }
    }

    fn global_config_dir(&self) -> Option<PathBuf> {
        if let Some(ref override_dir) = self.global_config_dir_override {
            return Some(override_dir.clone());
        }
        dirs::config_dir().map(|d| d.join("manila-compile"))
    }

    /// Path of the global defaults file, whether or not it exists
    pub fn defaults_path(&self) -> Option<PathBuf> {
        self.global_config_dir().map(|dir| dir.join(DEFAULTS_FILE))
    }

    /// Merge the global defaults and every manifest
    ///
    /// A missing defaults file is skipped. A missing manifest is an error,
    /// as is invalid TOML in any layer.
    pub fn resolve(&self) -> Result<Manifest> {
        let mut manifest = Manifest::empty();

        // Layer 1 - global defaults
        if let Some(defaults_path) = self.defaults_path() {
            if defaults_path.is_file() {
                tracing::debug!(?defaults_path, "Loading global defaults (layer 1)");
                manifest.merge(&Manifest::load(&defaults_path)?);
            } else {
                tracing::debug!(?defaults_path, "No global defaults found (layer 1), skipping");
            }
        }

        // Layer 2 - caller manifests, in order
        for path in &self.manifests {
            tracing::debug!(?path, "Loading manifest (layer 2)");
            manifest.merge(&Manifest::load(path)?);
        }

        Ok(manifest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::area::FeatureArea;
    use crate::value::ParamValue;
    use tempfile::TempDir;

    #[test]
    fn resolve_is_empty_without_any_layers() {
        let temp_dir = TempDir::new().unwrap();
        let resolver = ManifestResolver::with_global_config_dir(Vec::new(), temp_dir.path().to_path_buf());

        let manifest = resolver.resolve().unwrap();
        assert_eq!(manifest.areas().count(), 0);
        assert_eq!(manifest.platform.os_family, None);
    }

    #[test]
    fn manifests_override_global_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let global = temp_dir.path().join("global");
        std::fs::create_dir_all(&global).unwrap();
        std::fs::write(
            global.join(DEFAULTS_FILE),
            "[platform]\nos_family = \"RedHat\"\n[nova]\nregion_name = \"RegionOne\"\ntimeout = 10\n",
        )
        .unwrap();

        let site = temp_dir.path().join("site.toml");
        std::fs::write(&site, "[nova]\ntimeout = 30\n").unwrap();

        let resolver = ManifestResolver::with_global_config_dir(vec![site], global);
        let manifest = resolver.resolve().unwrap();

        let bag = manifest.bag(FeatureArea::Nova).unwrap();
        assert_eq!(bag.get("timeout"), Some(&ParamValue::Int(30)));
        assert_eq!(bag.get("region_name"), Some(&ParamValue::Str("RegionOne".into())));
        assert_eq!(manifest.platform.os_family.as_deref(), Some("RedHat"));
    }

    #[test]
    fn missing_manifest_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let resolver = ManifestResolver::with_global_config_dir(
            vec![temp_dir.path().join("nope.toml")],
            temp_dir.path().to_path_buf(),
        );

        let err = resolver.resolve().unwrap_err();
        assert!(matches!(err, crate::Error::ManifestNotFound { .. }));
    }
}
