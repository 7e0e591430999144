//! End-to-end tests that invoke the compiled `manila-compile` binary.

use assert_cmd::Command;
use manila_test_utils::ManifestDir;
use predicates::prelude::*;

/// Get a Command for the binary with an isolated global config dir
fn manila_cmd(dir: &ManifestDir) -> Command {
    let mut cmd = Command::cargo_bin("manila-compile").expect("Failed to find manila-compile binary");
    cmd.env("MANILA_COMPILE_CONFIG_DIR", dir.config_dir())
        .env("NO_COLOR", "1")
        .current_dir(dir.path());
    cmd
}

const SITE: &str = r#"
[platform]
os_family = "RedHat"

[nova]
auth_type = "password"
nova_admin_username = "novav2"
nova_admin_password = "321321"

[ganesha]
ganesha_config_dir = "/etc/ganesha"
"#;

// ============================================================================
// help / version
// ============================================================================

#[test]
fn test_help_mentions_commands() {
    let dir = ManifestDir::new();
    manila_cmd(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("compile"))
        .stdout(predicate::str::contains("params"));
}

#[test]
fn test_version_flag() {
    let dir = ManifestDir::new();
    manila_cmd(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("manila-compile"));
}

// ============================================================================
// compile
// ============================================================================

#[test]
fn test_compile_defaults_for_nova() {
    let dir = ManifestDir::new();
    manila_cmd(&dir)
        .args(["compile", "--area", "nova"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nova/insecure = false"))
        .stdout(predicate::str::contains("nova/timeout = <SERVICE DEFAULT>"))
        .stdout(predicate::str::contains("nova/username").not());
}

#[test]
fn test_compile_manifest_masks_password() {
    let dir = ManifestDir::new();
    let site = dir.manifest("site.toml", SITE);

    manila_cmd(&dir)
        .args(["compile", "--manifest"])
        .arg(&site)
        .assert()
        .success()
        .stdout(predicate::str::contains("nova/username = novav2"))
        .stdout(predicate::str::contains("nova/password = <secret>"))
        .stdout(predicate::str::contains("321321").not())
        .stdout(predicate::str::contains("package nfs-ganesha => present"))
        .stderr(predicate::str::contains("nova_admin_username"));
}

#[test]
fn test_compile_show_secrets() {
    let dir = ManifestDir::new();
    let site = dir.manifest("site.toml", SITE);

    manila_cmd(&dir)
        .args(["compile", "--show-secrets", "--manifest"])
        .arg(&site)
        .assert()
        .success()
        .stdout(predicate::str::contains("nova/password = 321321"));
}

#[test]
fn test_os_family_flag_overrides_manifest() {
    let dir = ManifestDir::new();
    let site = dir.manifest("site.toml", SITE);

    manila_cmd(&dir)
        .args(["compile", "--os-family", "Debian", "--manifest"])
        .arg(&site)
        .assert()
        .success()
        .stdout(predicate::str::contains("nfs-ganesha").not());
}

#[test]
fn test_compile_json_output() {
    let dir = ManifestDir::new();
    let output = manila_cmd(&dir)
        .args([
            "compile",
            "--area",
            "ganesha",
            "--set",
            "ganesha_service_name=ganesha.nfsd",
            "--os-family",
            "RedHat",
            "--json",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let directives = json[0]["directives"].as_array().unwrap();
    assert_eq!(directives.len(), 7);
    assert!(directives.iter().any(|d| {
        d["kind"] == "config_write"
            && d["key"] == "DEFAULT/ganesha_service_name"
            && d["value"] == "ganesha.nfsd"
    }));
    assert_eq!(directives[6]["kind"], "package_ensure");
    assert_eq!(directives[6]["name"], "nfs-ganesha");
}

#[test]
fn test_global_defaults_layer_is_used() {
    let dir = ManifestDir::new();
    dir.defaults("[nova]\nregion_name = \"RegionOne\"\n");

    manila_cmd(&dir)
        .args(["compile", "--area", "nova"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nova/region_name = RegionOne"));
}

// ============================================================================
// failures
// ============================================================================

#[test]
fn test_unknown_parameter_fails() {
    let dir = ManifestDir::new();
    manila_cmd(&dir)
        .args(["compile", "--area", "nova", "--set", "nova_admin_auth_url=http://x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown parameter"));
}

#[test]
fn test_wrong_kind_in_manifest_fails_without_output() {
    let dir = ManifestDir::new();
    let site = dir.manifest("bad.toml", "[nova]\ntimeout = \"thirty\"\n");

    manila_cmd(&dir)
        .args(["compile", "--manifest"])
        .arg(&site)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("expects integer"));
}

#[test]
fn test_missing_manifest_fails() {
    let dir = ManifestDir::new();
    manila_cmd(&dir)
        .args(["compile", "--manifest", "missing.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Manifest not found"));
}

// ============================================================================
// params
// ============================================================================

#[test]
fn test_params_lists_deprecations() {
    let dir = ManifestDir::new();
    manila_cmd(&dir)
        .args(["params", "nova"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nova_admin_tenant_name"))
        .stdout(predicate::str::contains("deprecated, use project_name"));
}
