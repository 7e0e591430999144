//! Shared test fixtures for the manila-compile workspace.
//!
//! - [`bags`]: parameter bags mirroring the canonical scenarios for each area
//! - [`manifest`]: temporary manifest files and config directories

pub mod bags;
pub mod manifest;

pub use bags::{ganesha_bag, nova_deprecated_bag, nova_overridden_bag};
pub use manifest::{ManifestDir, write_manifest};
