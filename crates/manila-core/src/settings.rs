//! Canonical settings produced by the resolver
//!
//! A [`CanonicalSettings`] value maps each `section/key` to its resolved
//! value. A key that is absent is simply not written, which is distinct
//! from a key whose value is the service-default sentinel.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::area::FeatureArea;
use crate::directive::PackageRequirement;
use crate::error::Error;
use crate::value::ParamValue;

/// Location of a setting in the target configuration file
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalKey {
    section: Cow<'static, str>,
    name: Cow<'static, str>,
}

impl CanonicalKey {
    pub const fn new(section: &'static str, name: &'static str) -> Self {
        Self {
            section: Cow::Borrowed(section),
            name: Cow::Borrowed(name),
        }
    }

    pub fn section(&self) -> &str {
        &self.section
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.section, self.name)
    }
}

impl FromStr for CanonicalKey {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.split_once('/') {
            Some((section, name)) if !section.is_empty() && !name.is_empty() => Ok(Self {
                section: Cow::Owned(section.to_string()),
                name: Cow::Owned(name.to_string()),
            }),
            _ => Err(Error::InvalidOverride {
                input: s.to_string(),
                reason: "expected section/key".to_string(),
            }),
        }
    }
}

impl Serialize for CanonicalKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CanonicalKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A resolved value and whether it must be redacted downstream
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Setting {
    pub value: ParamValue,
    pub sensitive: bool,
}

/// Resolved configuration for one feature area
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalSettings {
    area: FeatureArea,
    entries: BTreeMap<CanonicalKey, Setting>,
    packages: Vec<PackageRequirement>,
}

impl CanonicalSettings {
    /// Build settings from resolved entries
    ///
    /// Later entries for the same key replace earlier ones; rule tables never
    /// produce duplicates, so in practice each key is inserted once.
    pub fn new(
        area: FeatureArea,
        entries: impl IntoIterator<Item = (CanonicalKey, Setting)>,
        packages: Vec<PackageRequirement>,
    ) -> Self {
        Self {
            area,
            entries: entries.into_iter().collect(),
            packages,
        }
    }

    pub fn area(&self) -> FeatureArea {
        self.area
    }

    pub fn get(&self, key: &str) -> Option<&Setting> {
        let key: CanonicalKey = key.parse().ok()?;
        self.entries.get(&key)
    }

    /// Resolved value at `section/key`, if the key is present
    pub fn value(&self, key: &str) -> Option<&ParamValue> {
        self.get(key).map(|s| &s.value)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in canonical-key order
    pub fn iter(&self) -> impl Iterator<Item = (&CanonicalKey, &Setting)> {
        self.entries.iter()
    }

    /// Packages the area needs, before platform gating
    pub fn packages(&self) -> &[PackageRequirement] {
        &self.packages
    }
}
