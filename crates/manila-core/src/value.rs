//! Parameter values and kinds
//!
//! A [`ParamValue`] is the scalar a caller declares for a parameter. The
//! [`ParamValue::ServiceDefault`] sentinel asks the target service to fall
//! back to its own compiled-in default and is accepted by every kind.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};

/// Literal rendering of the service-default sentinel
pub const SERVICE_DEFAULT: &str = "<SERVICE DEFAULT>";

/// A declared or resolved parameter value
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParamValue {
    Str(String),
    Bool(bool),
    Int(i64),
    /// Use the service's own compiled-in default
    ServiceDefault,
}

/// The kind a parameter declares in its area's schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamKind {
    String,
    Boolean,
    Integer,
}

impl ParamValue {
    /// Build a string value, reading the sentinel literal as [`ParamValue::ServiceDefault`]
    pub fn string(s: impl Into<String>) -> Self {
        let s = s.into();
        if s == SERVICE_DEFAULT {
            ParamValue::ServiceDefault
        } else {
            ParamValue::Str(s)
        }
    }

    /// Short name of the value's kind, used in error messages
    pub fn kind_name(&self) -> &'static str {
        match self {
            ParamValue::Str(_) => "string",
            ParamValue::Bool(_) => "boolean",
            ParamValue::Int(_) => "integer",
            ParamValue::ServiceDefault => "service default",
        }
    }

    /// Whether this value is acceptable for a parameter of `kind`
    pub fn matches(&self, kind: ParamKind) -> bool {
        matches!(
            (self, kind),
            (ParamValue::ServiceDefault, _)
                | (ParamValue::Str(_), ParamKind::String)
                | (ParamValue::Bool(_), ParamKind::Boolean)
                | (ParamValue::Int(_), ParamKind::Integer)
        )
    }

    /// The string payload, if this is a string value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Parse raw command-line text according to the declared kind
    ///
    /// The sentinel literal is accepted for every kind. Surrounding
    /// whitespace is ignored except for strings. `name` is only used to
    /// build the error.
    pub fn parse_as(kind: ParamKind, name: &str, raw: &str) -> Result<Self> {
        let raw = match kind {
            ParamKind::String => raw,
            ParamKind::Boolean | ParamKind::Integer => raw.trim(),
        };
        if raw == SERVICE_DEFAULT {
            return Ok(ParamValue::ServiceDefault);
        }
        let invalid = || Error::InvalidOverride {
            input: format!("{name}={raw}"),
            reason: format!("expected {}", kind),
        };
        match kind {
            ParamKind::String => Ok(ParamValue::Str(raw.to_string())),
            ParamKind::Boolean => match raw {
                "true" => Ok(ParamValue::Bool(true)),
                "false" => Ok(ParamValue::Bool(false)),
                _ => Err(invalid()),
            },
            ParamKind::Integer => raw.parse().map(ParamValue::Int).map_err(|_| invalid()),
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Str(s) => write!(f, "{s}"),
            ParamValue::Bool(b) => write!(f, "{b}"),
            ParamValue::Int(i) => write!(f, "{i}"),
            ParamValue::ServiceDefault => write!(f, "{SERVICE_DEFAULT}"),
        }
    }
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamKind::String => f.pad("string"),
            ParamKind::Boolean => f.pad("boolean"),
            ParamKind::Integer => f.pad("integer"),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::string(s)
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        ParamValue::string(s)
    }
}

impl From<bool> for ParamValue {
    fn from(b: bool) -> Self {
        ParamValue::Bool(b)
    }
}

impl From<i64> for ParamValue {
    fn from(i: i64) -> Self {
        ParamValue::Int(i)
    }
}

impl TryFrom<&toml::Value> for ParamValue {
    /// Name of the offending TOML type
    type Error = &'static str;

    fn try_from(value: &toml::Value) -> std::result::Result<Self, Self::Error> {
        match value {
            toml::Value::String(s) => Ok(ParamValue::string(s.as_str())),
            toml::Value::Boolean(b) => Ok(ParamValue::Bool(*b)),
            toml::Value::Integer(i) => Ok(ParamValue::Int(*i)),
            toml::Value::Float(_) => Err("float"),
            toml::Value::Datetime(_) => Err("datetime"),
            toml::Value::Array(_) => Err("array"),
            toml::Value::Table(_) => Err("table"),
        }
    }
}

// Serialized as the plain scalar; the sentinel becomes its literal string.
impl Serialize for ParamValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            ParamValue::Str(s) => serializer.serialize_str(s),
            ParamValue::Bool(b) => serializer.serialize_bool(*b),
            ParamValue::Int(i) => serializer.serialize_i64(*i),
            ParamValue::ServiceDefault => serializer.serialize_str(SERVICE_DEFAULT),
        }
    }
}

impl<'de> Deserialize<'de> for ParamValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Scalar {
            Bool(bool),
            Int(i64),
            Str(String),
        }

        Ok(match Scalar::deserialize(deserializer)? {
            Scalar::Bool(b) => ParamValue::Bool(b),
            Scalar::Int(i) => ParamValue::Int(i),
            Scalar::Str(s) => ParamValue::string(s),
        })
    }
}
