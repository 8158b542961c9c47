//! Generic cell values.
//!
//! `GenericValue` is the serialized unit produced per cell: typed enough
//! for a generic client to render, untyped enough to cross any transport.
//! The wire encoding is defined by the hand-written `Serialize` impl below.

use std::fmt;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::{Serialize, Serializer};

use crate::store::ObjectKey;

/// Sentinel emitted for absent values. A literal string so that a generic
/// text-oriented client can tell it apart from an empty string or zero.
pub const NULL_SENTINEL: &str = "[null]";

/// A single protocol-transmissible cell value.
///
/// Value sequences are owned by the request that produced them; nothing
/// here borrows from the storage layer.
#[derive(Debug, Clone, PartialEq)]
pub enum GenericValue {
    /// Absent value; serializes as the `"[null]"` sentinel.
    Null,

    /// Boolean value.
    Bool(bool),

    /// Signed integer (up to i64).
    Int(i64),

    /// Finite floating point number. IEEE specials are substituted with
    /// strings before this variant is built.
    Float(f64),

    /// Text value, including all formatted collection and date strings.
    Text(String),

    /// Binary cell payload; serializes as base64 text.
    Bytes(Vec<u8>),

    /// Reference to another row, by stable object key.
    Link(ObjectKey),
}

impl GenericValue {
    /// Returns true if this value is the null sentinel.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Builds a text value.
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }
}

impl Serialize for GenericValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Null => serializer.serialize_str(NULL_SENTINEL),
            Self::Bool(v) => serializer.serialize_bool(*v),
            Self::Int(v) => serializer.serialize_i64(*v),
            Self::Float(v) => serializer.serialize_f64(*v),
            Self::Text(v) => serializer.serialize_str(v),
            Self::Bytes(v) => serializer.serialize_str(&BASE64.encode(v)),
            Self::Link(key) => serializer.serialize_i64(*key),
        }
    }
}

impl fmt::Display for GenericValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str(NULL_SENTINEL),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(v) => f.write_str(v),
            Self::Bytes(v) => write!(f, "<{} bytes>", v.len()),
            Self::Link(key) => write!(f, "{key}"),
        }
    }
}

impl From<bool> for GenericValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for GenericValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for GenericValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<String> for GenericValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&str> for GenericValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<Vec<u8>> for GenericValue {
    fn from(v: Vec<u8>) -> Self {
        Self::Bytes(v)
    }
}
