//! Declarative directives handed to the state-application engine

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::platform::{PlatformDescriptor, PlatformPredicate};
use crate::settings::{CanonicalKey, CanonicalSettings};
use crate::value::ParamValue;

/// Desired installation state of a package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnsureState {
    Present,
    Absent,
    Latest,
}

impl fmt::Display for EnsureState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnsureState::Present => write!(f, "present"),
            EnsureState::Absent => write!(f, "absent"),
            EnsureState::Latest => write!(f, "latest"),
        }
    }
}

/// A package a feature area needs on matching platforms
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageRequirement {
    pub name: Cow<'static, str>,
    pub ensure: EnsureState,
    pub when: PlatformPredicate,
}

/// One unit of desired state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Directive {
    /// Ensure `key` holds `value` in the service configuration file
    ConfigWrite {
        key: CanonicalKey,
        value: ParamValue,
        sensitive: bool,
    },

    /// Ensure a package is in the given state
    PackageEnsure {
        name: String,
        ensure: EnsureState,
    },
}

impl Directive {
    pub fn is_config_write(&self) -> bool {
        matches!(self, Directive::ConfigWrite { .. })
    }

    pub fn is_package_ensure(&self) -> bool {
        matches!(self, Directive::PackageEnsure { .. })
    }

    /// Copy of this directive with sensitive values replaced
    pub fn redacted(&self) -> Directive {
        match self {
            Directive::ConfigWrite {
                key,
                sensitive: true,
                ..
            } => Directive::ConfigWrite {
                key: key.clone(),
                value: ParamValue::Str(REDACTED.to_string()),
                sensitive: true,
            },
            other => other.clone(),
        }
    }
}

/// Placeholder shown instead of a sensitive value
pub const REDACTED: &str = "<secret>";

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Directive::ConfigWrite {
                key,
                sensitive: true,
                ..
            } => write!(f, "{key} = {REDACTED}"),
            Directive::ConfigWrite { key, value, .. } => write!(f, "{key} = {value}"),
            Directive::PackageEnsure { name, ensure } => write!(f, "package {name} => {ensure}"),
        }
    }
}

/// Turn resolved settings into directives for `platform`
///
/// Yields one config write per setting in canonical-key order, followed by
/// the package requirements whose platform predicate holds.
pub fn emit<'a>(
    settings: &'a CanonicalSettings,
    platform: &'a PlatformDescriptor,
) -> impl Iterator<Item = Directive> + 'a {
    let writes = settings.iter().map(|(key, setting)| Directive::ConfigWrite {
        key: key.clone(),
        value: setting.value.clone(),
        sensitive: setting.sensitive,
    });

    let packages = settings
        .packages()
        .iter()
        .filter(move |req| package_applies(req.when, platform))
        .map(|req| Directive::PackageEnsure {
            name: req.name.to_string(),
            ensure: req.ensure,
        });

    writes.chain(packages)
}

fn package_applies(when: PlatformPredicate, platform: &PlatformDescriptor) -> bool {
    let applies = when.holds(platform);
    tracing::debug!(?when, family = %platform.family, applies, "Evaluating package gate");
    applies
}
