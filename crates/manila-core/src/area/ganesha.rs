//! `manila::ganesha`: NFS Ganesha options in `[DEFAULT]`

use std::borrow::Cow;

use super::{Builtin, Guard, SettingRule, Source};
use crate::directive::{EnsureState, PackageRequirement};
use crate::platform::PlatformPredicate;
use crate::settings::CanonicalKey;
use crate::value::ParamKind;

const fn option(name: &'static str, default: &'static str) -> SettingRule {
    SettingRule {
        key: CanonicalKey::new("DEFAULT", name),
        source: Source::Param {
            name,
            deprecated: None,
            kind: ParamKind::String,
        },
        fallback: Builtin::Str(default),
        guard: Guard::Always,
        sensitive: false,
    }
}

pub(super) const RULES: &[SettingRule] = &[
    option("ganesha_config_dir", "/etc/ganesha"),
    option("ganesha_config_path", "/etc/ganesha/ganesha.conf"),
    option("ganesha_service_name", "ganesha.nfsd"),
    option("ganesha_db_path", "$state_path/manila-ganesha.db"),
    option("ganesha_export_dir", "/etc/ganesha/export.d"),
    option("ganesha_export_template_dir", "/etc/manila/ganesha-export-templ.d"),
];

// Debian-like distributions ship the server with the share driver packages.
pub(super) const PACKAGES: &[PackageRequirement] = &[PackageRequirement {
    name: Cow::Borrowed("nfs-ganesha"),
    ensure: EnsureState::Present,
    when: PlatformPredicate::RedHatLike,
}];
