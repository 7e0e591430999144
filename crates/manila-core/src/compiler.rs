//! One-shot compilation: validate, resolve, emit

use serde::{Deserialize, Serialize};

use crate::area::FeatureArea;
use crate::bag::ParameterBag;
use crate::config::Manifest;
use crate::directive::{Directive, REDACTED, emit};
use crate::error::Result;
use crate::platform::PlatformDescriptor;
use crate::resolve::{DeprecationNotice, validate_and_resolve};
use crate::settings::CanonicalSettings;
use crate::value::ParamValue;

/// Everything produced by compiling one feature area
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Compilation {
    pub area: FeatureArea,
    pub platform: PlatformDescriptor,
    pub settings: CanonicalSettings,
    pub directives: Vec<Directive>,
    pub deprecations: Vec<DeprecationNotice>,
}

impl Compilation {
    /// Config writes only
    pub fn config_writes(&self) -> impl Iterator<Item = &Directive> {
        self.directives.iter().filter(|d| d.is_config_write())
    }

    /// Package directives only
    pub fn package_ensures(&self) -> impl Iterator<Item = &Directive> {
        self.directives.iter().filter(|d| d.is_package_ensure())
    }

    /// Copy with sensitive values masked, for display or logging
    pub fn redacted(&self) -> Compilation {
        let mut copy = self.clone();
        copy.directives = self.directives.iter().map(Directive::redacted).collect();
        copy.settings = CanonicalSettings::new(
            self.settings.area(),
            self.settings.iter().map(|(key, setting)| {
                let mut setting = setting.clone();
                if setting.sensitive {
                    setting.value = ParamValue::Str(REDACTED.to_string());
                }
                (key.clone(), setting)
            }),
            self.settings.packages().to_vec(),
        );
        copy
    }
}

/// Compiles parameter bags for a fixed platform
#[derive(Debug, Clone, Copy, Default)]
pub struct Compiler {
    platform: PlatformDescriptor,
}

impl Compiler {
    pub fn new(platform: PlatformDescriptor) -> Self {
        Self { platform }
    }

    /// Compile one area
    ///
    /// Fails before resolution if the bag names an unknown parameter or
    /// carries a value of the wrong kind; nothing is emitted in that case.
    pub fn compile(&self, area: FeatureArea, bag: &ParameterBag) -> Result<Compilation> {
        tracing::debug!(%area, family = %self.platform.family, params = bag.len(), "Compiling area");
        let resolution = validate_and_resolve(area, bag)?;
        let directives = emit(&resolution.settings, &self.platform).collect();

        Ok(Compilation {
            area,
            platform: self.platform,
            settings: resolution.settings,
            directives,
            deprecations: resolution.deprecations,
        })
    }

    /// Compile every area declared in `manifest`, in area order
    ///
    /// All areas are validated before any is resolved, so one bad table
    /// rejects the whole manifest.
    pub fn compile_manifest(&self, manifest: &Manifest) -> Result<Vec<Compilation>> {
        let areas: Vec<_> = manifest.areas().collect();
        for (area, bag) in &areas {
            crate::resolve::validate(*area, bag)?;
        }
        areas
            .into_iter()
            .map(|(area, bag)| self.compile(area, bag))
            .collect()
    }
}
