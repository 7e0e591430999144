//! Platform descriptor supplied by the fact-gathering collaborator

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Coarse OS classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OsFamily {
    /// RHEL, CentOS, Fedora and friends
    RedHat,
    /// Debian and Ubuntu
    Debian,
    #[default]
    Other,
}

impl OsFamily {
    pub fn is_redhat_like(&self) -> bool {
        matches!(self, OsFamily::RedHat)
    }
}

impl FromStr for OsFamily {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(Error::InvalidPlatform {
                value: s.to_string(),
            });
        }
        match trimmed.to_lowercase().as_str() {
            "redhat" | "redhat-like" => Ok(OsFamily::RedHat),
            "debian" | "debian-like" => Ok(OsFamily::Debian),
            _ => Ok(OsFamily::Other),
        }
    }
}

impl fmt::Display for OsFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OsFamily::RedHat => write!(f, "RedHat"),
            OsFamily::Debian => write!(f, "Debian"),
            OsFamily::Other => write!(f, "other"),
        }
    }
}

/// Facts about the target host that influence directive emission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlatformDescriptor {
    pub family: OsFamily,
}

impl PlatformDescriptor {
    pub fn new(family: OsFamily) -> Self {
        Self { family }
    }
}

impl From<OsFamily> for PlatformDescriptor {
    fn from(family: OsFamily) -> Self {
        Self::new(family)
    }
}

/// Predicate over the platform gating a package requirement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlatformPredicate {
    Any,
    RedHatLike,
}

impl PlatformPredicate {
    pub fn holds(&self, platform: &PlatformDescriptor) -> bool {
        match self {
            PlatformPredicate::Any => true,
            PlatformPredicate::RedHatLike => platform.family.is_redhat_like(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("RedHat".parse::<OsFamily>().unwrap(), OsFamily::RedHat);
        assert_eq!("redhat".parse::<OsFamily>().unwrap(), OsFamily::RedHat);
        assert_eq!("Debian".parse::<OsFamily>().unwrap(), OsFamily::Debian);
        assert_eq!("Suse".parse::<OsFamily>().unwrap(), OsFamily::Other);
        assert!("".parse::<OsFamily>().is_err());
        assert!("   ".parse::<OsFamily>().is_err());
    }

    #[test]
    fn test_predicate() {
        let redhat = PlatformDescriptor::new(OsFamily::RedHat);
        let debian = PlatformDescriptor::new(OsFamily::Debian);

        assert!(PlatformPredicate::RedHatLike.holds(&redhat));
        assert!(!PlatformPredicate::RedHatLike.holds(&debian));
        assert!(PlatformPredicate::Any.holds(&debian));
    }

    #[test]
    fn test_display_roundtrips() {
        for family in [OsFamily::RedHat, OsFamily::Debian, OsFamily::Other] {
            assert_eq!(family.to_string().parse::<OsFamily>().unwrap(), family);
        }
    }
}
