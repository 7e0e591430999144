//! Tests for layered manifests and whole-manifest compilation

use manila_core::config::ManifestResolver;
use manila_core::{Compiler, Error, FeatureArea, Manifest, OsFamily, ParamValue};
use manila_test_utils::ManifestDir;
use pretty_assertions::assert_eq;

const SITE: &str = r#"
[platform]
os_family = "RedHat"

[nova]
insecure = true
auth_type = "password"
timeout = 30
nova_admin_tenant_name = "SeRvIce"

[ganesha]
ganesha_config_dir = "/etc/ganesha"
ganesha_db_path = "$state_path/manila-ganesha.db"
"#;

#[test]
fn compile_manifest_covers_every_declared_area() {
    let manifest = Manifest::parse(SITE).unwrap();
    let compiler = Compiler::new(manifest.platform().unwrap());
    let compilations = compiler.compile_manifest(&manifest).unwrap();

    let areas: Vec<_> = compilations.iter().map(|c| c.area).collect();
    assert_eq!(areas, vec![FeatureArea::Nova, FeatureArea::Ganesha]);

    let nova = &compilations[0];
    assert_eq!(
        nova.settings.value("nova/project_name"),
        Some(&ParamValue::Str("SeRvIce".to_string()))
    );
    assert_eq!(nova.deprecations.len(), 1);

    let ganesha = &compilations[1];
    assert_eq!(ganesha.package_ensures().count(), 1);
    assert_eq!(
        ganesha.settings.value("DEFAULT/ganesha_export_dir"),
        Some(&ParamValue::Str("/etc/ganesha/export.d".to_string()))
    );
}

#[test]
fn one_bad_area_rejects_the_whole_manifest() {
    let manifest = Manifest::parse("[nova]\ninsecure = true\n[ganesha]\nganesha_bogus = \"x\"\n").unwrap();
    let err = Compiler::default().compile_manifest(&manifest).unwrap_err();
    assert!(matches!(err, Error::UnknownParameter { ref area, .. } if area == "ganesha"));
}

#[test]
fn defaults_layer_then_manifests_then_overrides() {
    let dir = ManifestDir::new();
    dir.defaults("[platform]\nos_family = \"Debian\"\n[nova]\nregion_name = \"RegionOne\"\ntimeout = 10\n");
    let first = dir.manifest("first.toml", "[nova]\ntimeout = 20\ncafile = \"/etc/ssl/a.crt\"\n");
    let second = dir.manifest("second.toml", "[platform]\nos_family = \"RedHat\"\n[nova]\ntimeout = 30\n");

    let resolver = ManifestResolver::with_global_config_dir(vec![first, second], dir.config_dir());
    let mut manifest = resolver.resolve().unwrap();
    manifest.apply_override(FeatureArea::Nova, "cafile=/etc/ssl/b.crt").unwrap();

    assert_eq!(manifest.platform().unwrap().family, OsFamily::RedHat);
    let bag = manifest.bag(FeatureArea::Nova).unwrap();
    assert_eq!(bag.get("region_name"), Some(&ParamValue::Str("RegionOne".to_string())));
    assert_eq!(bag.get("timeout"), Some(&ParamValue::Int(30)));
    assert_eq!(bag.get("cafile"), Some(&ParamValue::Str("/etc/ssl/b.crt".to_string())));
}

#[test]
fn sentinel_literal_in_manifest_is_service_default() {
    let manifest = Manifest::parse("[nova]\ninsecure = \"<SERVICE DEFAULT>\"\n").unwrap();
    let compilations = Compiler::default().compile_manifest(&manifest).unwrap();
    assert_eq!(
        compilations[0].settings.value("nova/insecure"),
        Some(&ParamValue::ServiceDefault)
    );
}

#[test]
fn invalid_platform_is_rejected() {
    let manifest = Manifest::parse("[platform]\nos_family = \"\"\n").unwrap();
    assert!(matches!(manifest.platform(), Err(Error::InvalidPlatform { .. })));
}
