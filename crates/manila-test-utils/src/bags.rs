//! Parameter bags for the standard scenarios.

use manila_core::ParameterBag;

/// Nova area with every current parameter overridden and password auth.
///
/// `project_name` is deliberately left out so the builtin fallback shows.
pub fn nova_overridden_bag() -> ParameterBag {
    ParameterBag::new()
        .with("insecure", true)
        .with("token_auth_url", "http://127.0.0.1:5000/v3")
        .with("auth_url", "http://127.0.0.2:5000/")
        .with("auth_type", "password")
        .with("cafile", "/etc/ssl/certs/ca.crt")
        .with("certfile", "/etc/ssl/certs/cert.crt")
        .with("keyfile", "/etc/ssl/private/key.key")
        .with("region_name", "RegionOne")
        .with("timeout", 30i64)
        .with("username", "novav1")
        .with("password", "123123")
}

/// Nova area driven only by deprecated aliases (plus `auth_type`).
pub fn nova_deprecated_bag() -> ParameterBag {
    ParameterBag::new()
        .with("nova_api_insecure", true)
        .with("nova_ca_certificates_file", "/foo/ssl/certs/ca.crt")
        .with("auth_type", "password")
        .with("nova_admin_tenant_name", "SeRvIce")
        .with("nova_admin_username", "novav2")
        .with("nova_admin_password", "321321")
}

/// Ganesha area with all six options set.
pub fn ganesha_bag() -> ParameterBag {
    GANESHA_PARAMS.iter().map(|(k, v)| (*k, *v)).collect()
}

/// The six Ganesha options and the values [`ganesha_bag`] uses, which are also their defaults.
pub const GANESHA_PARAMS: [(&str, &str); 6] = [
    ("ganesha_config_dir", "/etc/ganesha"),
    ("ganesha_config_path", "/etc/ganesha/ganesha.conf"),
    ("ganesha_service_name", "ganesha.nfsd"),
    ("ganesha_db_path", "$state_path/manila-ganesha.db"),
    ("ganesha_export_dir", "/etc/ganesha/export.d"),
    ("ganesha_export_template_dir", "/etc/manila/ganesha-export-templ.d"),
];
