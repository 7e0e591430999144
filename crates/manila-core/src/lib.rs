//! Parameter resolution and directive emission for Manila feature areas
//!
//! This crate compiles declared parameters into desired-state directives:
//!
//! - **Validation**: unknown parameter names and mis-kinded values are
//!   rejected before anything is resolved
//! - **Resolution**: per-area rule tables merge current parameters,
//!   deprecated aliases and builtin fallbacks into [`CanonicalSettings`]
//! - **Emission**: settings plus a [`PlatformDescriptor`] become an ordered
//!   sequence of [`Directive`]s for an external state-application engine
//! - **Manifests**: layered TOML input via [`config::ManifestResolver`]
//!
//! Compilation is pure; the only I/O is reading manifest files.
//!
//! # Example
//!
//! ```
//! use manila_core::{Compiler, FeatureArea, OsFamily, ParameterBag, PlatformDescriptor};
//!
//! let bag = ParameterBag::new().with("auth_type", "password");
//! let compiler = Compiler::new(PlatformDescriptor::new(OsFamily::Debian));
//! let compilation = compiler.compile(FeatureArea::Nova, &bag).unwrap();
//!
//! assert!(compilation.settings.contains("nova/password"));
//! ```

pub mod area;
pub mod bag;
pub mod compiler;
pub mod config;
pub mod directive;
pub mod error;
pub mod platform;
pub mod resolve;
pub mod settings;
pub mod value;

pub use area::{FeatureArea, ParamSpec};
pub use bag::ParameterBag;
pub use compiler::{Compilation, Compiler};
pub use config::{Manifest, ManifestResolver};
pub use directive::{Directive, EnsureState, PackageRequirement, emit};
pub use error::{Error, Result};
pub use platform::{OsFamily, PlatformDescriptor};
pub use resolve::{DeprecationNotice, Resolution, resolve, validate};
pub use settings::{CanonicalKey, CanonicalSettings, Setting};
pub use value::{ParamKind, ParamValue, SERVICE_DEFAULT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_unknown_parameter_displays_name_and_area() {
        let error = Error::UnknownParameter {
            area: "nova".to_string(),
            name: "nova_admin_auth_url".to_string(),
        };

        let display = format!("{}", error);
        assert!(display.contains("nova_admin_auth_url"), "got: {}", display);
        assert!(display.contains("nova"), "got: {}", display);
    }
}
