//! Feature areas and their rule tables
//!
//! Each area is a static table of [`SettingRule`]s. A rule states where a
//! canonical key gets its value (current parameter, then deprecated alias,
//! then builtin fallback), whether the key is gated behind a guard, and
//! whether the value is sensitive. Keeping precedence as data means the
//! resolver has a single code path for every key.

mod ganesha;
mod nova;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::bag::ParameterBag;
use crate::directive::PackageRequirement;
use crate::error::Error;
use crate::settings::CanonicalKey;
use crate::value::{ParamKind, ParamValue};

/// A builtin value usable in `const` rule tables
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    Bool(bool),
    Str(&'static str),
    ServiceDefault,
}

impl Builtin {
    pub fn to_value(self) -> ParamValue {
        match self {
            Builtin::Bool(b) => ParamValue::Bool(b),
            Builtin::Str(s) => ParamValue::Str(s.to_string()),
            Builtin::ServiceDefault => ParamValue::ServiceDefault,
        }
    }
}

/// Where a rule reads its value from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// A caller parameter, optionally aliased by a deprecated name
    Param {
        name: &'static str,
        deprecated: Option<&'static str>,
        kind: ParamKind,
    },
    /// A literal no parameter can change
    Fixed(Builtin),
}

/// Condition under which a rule's key is present at all
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    Always,
    /// The named parameter must be the exact string `value`
    ParamEquals {
        param: &'static str,
        value: &'static str,
    },
}

impl Guard {
    pub fn admits(&self, bag: &ParameterBag) -> bool {
        match self {
            Guard::Always => true,
            Guard::ParamEquals { param, value } => {
                bag.get(param).and_then(ParamValue::as_str) == Some(*value)
            }
        }
    }
}

/// One row of an area's resolution table
#[derive(Debug, Clone)]
pub struct SettingRule {
    pub key: CanonicalKey,
    pub source: Source,
    /// Used when neither the parameter nor its alias is supplied
    pub fallback: Builtin,
    pub guard: Guard,
    pub sensitive: bool,
}

/// A parameter an area accepts, derived from its rule table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub kind: ParamKind,
    /// Set for deprecated aliases: the parameter that replaces this one
    pub replaced_by: Option<&'static str>,
    pub key: CanonicalKey,
    pub fallback: Builtin,
}

impl ParamSpec {
    pub fn is_deprecated(&self) -> bool {
        self.replaced_by.is_some()
    }
}

/// Built-in feature areas, compiled independently
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureArea {
    /// `manila::compute::nova` credentials used to reach the compute API
    Nova,
    /// NFS Ganesha options for share drivers
    Ganesha,
}

impl FeatureArea {
    /// All areas in compilation order
    pub const ALL: [FeatureArea; 2] = [FeatureArea::Nova, FeatureArea::Ganesha];

    pub fn name(&self) -> &'static str {
        match self {
            FeatureArea::Nova => "nova",
            FeatureArea::Ganesha => "ganesha",
        }
    }

    pub fn rules(&self) -> &'static [SettingRule] {
        match self {
            FeatureArea::Nova => nova::RULES,
            FeatureArea::Ganesha => ganesha::RULES,
        }
    }

    pub fn packages(&self) -> &'static [PackageRequirement] {
        match self {
            FeatureArea::Nova => &[],
            FeatureArea::Ganesha => ganesha::PACKAGES,
        }
    }

    /// Every parameter the area accepts, current ones before their aliases
    pub fn params(&self) -> Vec<ParamSpec> {
        let mut specs = Vec::new();
        for rule in self.rules() {
            if let Source::Param {
                name,
                deprecated,
                kind,
            } = rule.source
            {
                specs.push(ParamSpec {
                    name,
                    kind,
                    replaced_by: None,
                    key: rule.key.clone(),
                    fallback: rule.fallback,
                });
                if let Some(alias) = deprecated {
                    specs.push(ParamSpec {
                        name: alias,
                        kind,
                        replaced_by: Some(name),
                        key: rule.key.clone(),
                        fallback: rule.fallback,
                    });
                }
            }
        }
        specs
    }

    /// Look up a parameter (current or deprecated) by name
    pub fn param(&self, name: &str) -> Option<ParamSpec> {
        self.params().into_iter().find(|spec| spec.name == name)
    }
}

impl FromStr for FeatureArea {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "nova" | "compute-nova" => Ok(FeatureArea::Nova),
            "ganesha" => Ok(FeatureArea::Ganesha),
            _ => Err(Error::UnknownArea {
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for FeatureArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
