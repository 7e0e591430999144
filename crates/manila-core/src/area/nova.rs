//! `manila::compute::nova`: options in the `[nova]` section

use super::{Builtin, Guard, SettingRule, Source};
use crate::settings::CanonicalKey;
use crate::value::ParamKind;

const PASSWORD_AUTH: Guard = Guard::ParamEquals {
    param: "auth_type",
    value: "password",
};

const fn param(name: &'static str, kind: ParamKind) -> Source {
    Source::Param {
        name,
        deprecated: None,
        kind,
    }
}

const fn aliased(name: &'static str, deprecated: &'static str, kind: ParamKind) -> Source {
    Source::Param {
        name,
        deprecated: Some(deprecated),
        kind,
    }
}

const fn entry(
    name: &'static str,
    source: Source,
    fallback: Builtin,
    guard: Guard,
    sensitive: bool,
) -> SettingRule {
    SettingRule {
        key: CanonicalKey::new("nova", name),
        source,
        fallback,
        guard,
        sensitive,
    }
}

const fn rule(name: &'static str, source: Source, fallback: Builtin, guard: Guard) -> SettingRule {
    entry(name, source, fallback, guard, false)
}

const fn secret(name: &'static str, source: Source, fallback: Builtin, guard: Guard) -> SettingRule {
    entry(name, source, fallback, guard, true)
}

pub(super) const RULES: &[SettingRule] = &[
    rule(
        "insecure",
        aliased("insecure", "nova_api_insecure", ParamKind::Boolean),
        Builtin::Bool(false),
        Guard::Always,
    ),
    rule(
        "token_auth_url",
        param("token_auth_url", ParamKind::String),
        Builtin::ServiceDefault,
        Guard::Always,
    ),
    rule(
        "auth_type",
        param("auth_type", ParamKind::String),
        Builtin::ServiceDefault,
        Guard::Always,
    ),
    rule(
        "cafile",
        aliased("cafile", "nova_ca_certificates_file", ParamKind::String),
        Builtin::ServiceDefault,
        Guard::Always,
    ),
    rule(
        "certfile",
        param("certfile", ParamKind::String),
        Builtin::ServiceDefault,
        Guard::Always,
    ),
    rule(
        "keyfile",
        param("keyfile", ParamKind::String),
        Builtin::ServiceDefault,
        Guard::Always,
    ),
    rule(
        "timeout",
        param("timeout", ParamKind::Integer),
        Builtin::ServiceDefault,
        Guard::Always,
    ),
    rule(
        "region_name",
        param("region_name", ParamKind::String),
        Builtin::ServiceDefault,
        Guard::Always,
    ),
    // Only meaningful for the password auth plugin
    rule(
        "auth_url",
        param("auth_url", ParamKind::String),
        Builtin::ServiceDefault,
        PASSWORD_AUTH,
    ),
    rule(
        "user_domain_name",
        Source::Fixed(Builtin::Str("Default")),
        Builtin::Str("Default"),
        PASSWORD_AUTH,
    ),
    rule(
        "project_domain_name",
        Source::Fixed(Builtin::Str("Default")),
        Builtin::Str("Default"),
        PASSWORD_AUTH,
    ),
    rule(
        "project_name",
        aliased("project_name", "nova_admin_tenant_name", ParamKind::String),
        Builtin::Str("service"),
        PASSWORD_AUTH,
    ),
    rule(
        "username",
        aliased("username", "nova_admin_username", ParamKind::String),
        Builtin::Str("nova"),
        PASSWORD_AUTH,
    ),
    secret(
        "password",
        aliased("password", "nova_admin_password", ParamKind::String),
        Builtin::ServiceDefault,
        PASSWORD_AUTH,
    ),
];
