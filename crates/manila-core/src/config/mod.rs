//! Manifest loading and layered merge
//!
//! Parameters can be declared in TOML manifests with one table per feature
//! area plus an optional `[platform]` table. Manifests are merged in layers,
//! later layers overriding earlier ones per parameter:
//!
//! 1. **Global defaults** - `<config_dir>/manila-compile/defaults.toml`
//! 2. **Manifests** - each file passed by the caller, in order
//! 3. **Overrides** - `key=value` pairs for a single area
//!
//! # Example
//!
//! ```ignore
//! use manila_core::config::ManifestResolver;
//!
//! let resolver = ManifestResolver::new(vec!["site.toml".into()]);
//! let manifest = resolver.resolve()?;
//! ```

mod manifest;
mod resolver;

pub use manifest::{Manifest, PlatformSection, parse_override};
pub use resolver::ManifestResolver;
