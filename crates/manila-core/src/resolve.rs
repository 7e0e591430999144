//! Parameter validation and resolution
//!
//! [`validate`] runs at the boundary and rejects the whole bag on the first
//! unknown name or mis-kinded value. [`resolve`] then walks the area's rule
//! table and is total: every key either resolves or is guarded out.

use serde::{Deserialize, Serialize};

use crate::area::{FeatureArea, SettingRule, Source};
use crate::bag::ParameterBag;
use crate::error::{Error, Result};
use crate::settings::{CanonicalKey, CanonicalSettings, Setting};
use crate::value::ParamValue;

/// A deprecated parameter that appeared in the bag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeprecationNotice {
    pub parameter: String,
    pub replacement: String,
    /// False when the replacement took precedence or the key was guarded out
    pub used: bool,
}

impl std::fmt::Display for DeprecationNotice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.used {
            write!(
                f,
                "'{}' is deprecated, use '{}' instead",
                self.parameter, self.replacement
            )
        } else {
            write!(
                f,
                "'{}' is deprecated and has no effect, use '{}' instead",
                self.parameter, self.replacement
            )
        }
    }
}

/// Output of [`resolve`]
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub settings: CanonicalSettings,
    pub deprecations: Vec<DeprecationNotice>,
}

/// Check every parameter in `bag` against the schema of `area`
pub fn validate(area: FeatureArea, bag: &ParameterBag) -> Result<()> {
    let specs = area.params();
    for (name, value) in bag.iter() {
        let spec = specs
            .iter()
            .find(|spec| spec.name == name)
            .ok_or_else(|| Error::UnknownParameter {
                area: area.to_string(),
                name: name.to_string(),
            })?;
        if !value.matches(spec.kind) {
            return Err(Error::WrongKind {
                area: area.to_string(),
                name: name.to_string(),
                expected: spec.kind.to_string(),
                found: value.kind_name().to_string(),
            });
        }
    }
    Ok(())
}

/// Resolve a validated bag into canonical settings
///
/// Precedence per key: current parameter, then deprecated alias, then the
/// rule's builtin fallback. Guarded keys whose guard fails are omitted.
pub fn resolve(area: FeatureArea, bag: &ParameterBag) -> Resolution {
    let mut entries = Vec::with_capacity(area.rules().len());
    let mut deprecations = Vec::new();

    for rule in area.rules() {
        let admitted = rule.guard.admits(bag);
        if let Some(notice) = deprecation(rule, bag, admitted) {
            tracing::warn!(area = %area, "{notice}");
            deprecations.push(notice);
        }

        if !admitted {
            tracing::debug!(key = %rule.key, guard = ?rule.guard, "Guard not satisfied, key omitted");
            continue;
        }

        let value = resolve_rule(rule, bag);
        tracing::debug!(key = %rule.key, sensitive = rule.sensitive, "Resolved setting");
        entries.push((
            rule.key.clone(),
            Setting {
                value,
                sensitive: rule.sensitive,
            },
        ));
    }

    Resolution {
        settings: CanonicalSettings::new(area, entries, area.packages().to_vec()),
        deprecations,
    }
}

fn resolve_rule(rule: &SettingRule, bag: &ParameterBag) -> ParamValue {
    match rule.source {
        Source::Fixed(builtin) => builtin.to_value(),
        Source::Param {
            name, deprecated, ..
        } => bag
            .get(name)
            .or_else(|| deprecated.and_then(|alias| bag.get(alias)))
            .cloned()
            .unwrap_or_else(|| rule.fallback.to_value()),
    }
}

fn deprecation(rule: &SettingRule, bag: &ParameterBag, admitted: bool) -> Option<DeprecationNotice> {
    let Source::Param {
        name,
        deprecated: Some(alias),
        ..
    } = rule.source
    else {
        return None;
    };
    bag.contains(alias).then(|| DeprecationNotice {
        parameter: alias.to_string(),
        replacement: name.to_string(),
        used: admitted && !bag.contains(name),
    })
}

/// Validate then resolve
pub fn validate_and_resolve(area: FeatureArea, bag: &ParameterBag) -> Result<Resolution> {
    validate(area, bag)?;
    Ok(resolve(area, bag))
}

/// Keys that exist only when the password auth plugin is selected
pub fn password_gated_keys() -> Vec<CanonicalKey> {
    FeatureArea::Nova
        .rules()
        .iter()
        .filter(|rule| rule.guard != crate::area::Guard::Always)
        .map(|rule| rule.key.clone())
        .collect()
}
