//! Manifest parsing for parameter files
//!
//! A manifest holds one table per feature area and an optional
//! `[platform]` table:
//!
//! ```toml
//! [platform]
//! os_family = "RedHat"
//!
//! [nova]
//! auth_type = "password"
//! timeout = 30
//!
//! [ganesha]
//! ganesha_config_dir = "/etc/ganesha"
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::area::FeatureArea;
use crate::bag::ParameterBag;
use crate::error::{Error, Result};
use crate::platform::{OsFamily, PlatformDescriptor};
use crate::value::ParamValue;

/// Platform facts declared in a manifest
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlatformSection {
    /// OS family fact, e.g. "RedHat" or "Debian"
    #[serde(default)]
    pub os_family: Option<String>,
}

/// Parameters and platform facts parsed from one or more manifest files
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Manifest {
    pub platform: PlatformSection,
    areas: BTreeMap<FeatureArea, ParameterBag>,
}

impl Manifest {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a manifest from TOML content
    ///
    /// Area tables may only hold strings, booleans and integers. Parameter
    /// names are not checked here; that happens when the area is compiled.
    ///
    /// # Example
    ///
    /// ```
    /// use manila_core::config::Manifest;
    /// use manila_core::FeatureArea;
    ///
    /// let manifest = Manifest::parse(r#"
    /// [nova]
    /// auth_type = "password"
    /// "#).unwrap();
    ///
    /// assert!(manifest.bag(FeatureArea::Nova).is_some());
    /// ```
    pub fn parse(content: &str) -> Result<Self> {
        let table: toml::Table = toml::from_str(content)?;
        let mut manifest = Manifest::empty();

        for (section, value) in table {
            if section == "platform" {
                manifest.platform = value.try_into()?;
                continue;
            }

            let area: FeatureArea = section.parse()?;
            let params = match value {
                toml::Value::Table(params) => params,
                other => {
                    return Err(Error::WrongKind {
                        area: area.to_string(),
                        name: section,
                        expected: "table".to_string(),
                        found: other.type_str().to_string(),
                    });
                }
            };

            let bag = manifest.areas.entry(area).or_default();
            for (name, raw) in &params {
                let value = ParamValue::try_from(raw).map_err(|found| Error::WrongKind {
                    area: area.to_string(),
                    name: name.clone(),
                    expected: area
                        .param(name)
                        .map(|spec| spec.kind.to_string())
                        .unwrap_or_else(|| "scalar".to_string()),
                    found: found.to_string(),
                })?;
                bag.set(name.clone(), value);
            }
        }

        Ok(manifest)
    }

    /// Read and parse a manifest file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::ManifestNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Merge another manifest into this one; `other` wins per parameter
    pub fn merge(&mut self, other: &Manifest) {
        if other.platform.os_family.is_some() {
            self.platform.os_family = other.platform.os_family.clone();
        }
        for (area, bag) in &other.areas {
            self.areas.entry(*area).or_default().merge(bag);
        }
    }

    /// Parameters declared for `area`, if the manifest has its table
    pub fn bag(&self, area: FeatureArea) -> Option<&ParameterBag> {
        self.areas.get(&area)
    }

    /// Declared areas in compilation order
    pub fn areas(&self) -> impl Iterator<Item = (FeatureArea, &ParameterBag)> {
        self.areas.iter().map(|(area, bag)| (*area, bag))
    }

    /// Ensure `area` has a table, even an empty one
    pub fn declare(&mut self, area: FeatureArea) -> &mut ParameterBag {
        self.areas.entry(area).or_default()
    }

    /// Drop every area table not listed in `keep`
    pub fn retain_areas(&mut self, keep: &[FeatureArea]) {
        self.areas.retain(|area, _| keep.contains(area));
    }

    /// Apply a `key=value` override to `area`
    pub fn apply_override(&mut self, area: FeatureArea, raw: &str) -> Result<()> {
        let (name, value) = parse_override(area, raw)?;
        tracing::debug!(%area, %name, "Applying override");
        self.declare(area).set(name, value);
        Ok(())
    }

    /// Platform descriptor from the `[platform]` table, `Other` when absent
    pub fn platform(&self) -> Result<PlatformDescriptor> {
        match &self.platform.os_family {
            Some(family) => Ok(PlatformDescriptor::new(family.parse()?)),
            None => Ok(PlatformDescriptor::new(OsFamily::Other)),
        }
    }
}

/// Parse a `key=value` override using the parameter's declared kind
pub fn parse_override(area: FeatureArea, raw: &str) -> Result<(String, ParamValue)> {
    let (name, value) = raw.split_once('=').ok_or_else(|| Error::InvalidOverride {
        input: raw.to_string(),
        reason: "expected key=value".to_string(),
    })?;
    let name = name.trim();
    let spec = area.param(name).ok_or_else(|| Error::UnknownParameter {
        area: area.to_string(),
        name: name.to_string(),
    })?;
    let value = ParamValue::parse_as(spec.kind, name, value)?;
    Ok((name.to_string(), value))
}
