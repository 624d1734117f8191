//! Tagged sum over the attribute kinds the bridge understands

use std::fmt;

use super::BoolAttr;
use super::Float64Attr;
use super::Int64Attr;
use super::Int64SetAttr;
use super::StringAttr;
use super::StringSetAttr;

/// The declared kind of a schema attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttrKind {
    /// UTF-8 string.
    String,
    /// Boolean.
    Bool,
    /// 64-bit signed integer.
    Int64,
    /// 64-bit float.
    Float64,
    /// Unordered set of strings.
    StringSet,
    /// Unordered set of 64-bit integers.
    Int64Set,
}

impl AttrKind {
    /// Returns the kind name used in log output.
    pub fn as_str(&self) -> &'static str {
        match self {
            AttrKind::String => "string",
            AttrKind::Bool => "bool",
            AttrKind::Int64 => "int64",
            AttrKind::Float64 => "float64",
            AttrKind::StringSet => "set-of-string",
            AttrKind::Int64Set => "set-of-int64",
        }
    }
}

impl fmt::Display for AttrKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A schema attribute of any supported kind.
///
/// This is what crosses the [`Resource`](super::Resource) boundary: the
/// bridge reads and writes attributes by name without knowing the concrete
/// resource type.
///
/// # Type Mapping
///
/// | Kind | Rust Variant |
/// |------|--------------|
/// | string | `String` |
/// | bool | `Bool` |
/// | int64 | `Int64` |
/// | float64 | `Float64` |
/// | set-of-string | `StringSet` |
/// | set-of-int64 | `Int64Set` |
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    /// String attribute.
    String(StringAttr),
    /// Boolean attribute.
    Bool(BoolAttr),
    /// 64-bit integer attribute.
    Int64(Int64Attr),
    /// 64-bit float attribute.
    Float64(Float64Attr),
    /// Set-of-string attribute.
    StringSet(StringSetAttr),
    /// Set-of-int64 attribute.
    Int64Set(Int64SetAttr),
}

impl AttrValue {
    /// Returns the declared kind of this attribute.
    pub fn kind(&self) -> AttrKind {
        match self {
            AttrValue::String(_) => AttrKind::String,
            AttrValue::Bool(_) => AttrKind::Bool,
            AttrValue::Int64(_) => AttrKind::Int64,
            AttrValue::Float64(_) => AttrKind::Float64,
            AttrValue::StringSet(_) => AttrKind::StringSet,
            AttrValue::Int64Set(_) => AttrKind::Int64Set,
        }
    }

    /// Returns `true` if the attribute is null.
    pub fn is_null(&self) -> bool {
        match self {
            AttrValue::String(a) => a.is_null(),
            AttrValue::Bool(a) => a.is_null(),
            AttrValue::Int64(a) => a.is_null(),
            AttrValue::Float64(a) => a.is_null(),
            AttrValue::StringSet(a) => a.is_null(),
            AttrValue::Int64Set(a) => a.is_null(),
        }
    }

    /// Returns `true` if the attribute is unknown.
    pub fn is_unknown(&self) -> bool {
        match self {
            AttrValue::String(a) => a.is_unknown(),
            AttrValue::Bool(a) => a.is_unknown(),
            AttrValue::Int64(a) => a.is_unknown(),
            AttrValue::Float64(a) => a.is_unknown(),
            AttrValue::StringSet(a) => a.is_unknown(),
            AttrValue::Int64Set(a) => a.is_unknown(),
        }
    }
}

/// A typed attribute container that can be carried by [`AttrValue`].
///
/// Implemented for the six attribute aliases; the [`resource!`](crate::resource)
/// macro relies on it to convert struct fields at the dispatch boundary.
pub trait AttrType: Sized {
    /// The kind this container declares.
    const KIND: AttrKind;

    /// Wraps the container.
    fn into_attr_value(self) -> AttrValue;

    /// Unwraps the container, or returns `None` on a kind mismatch.
    fn from_attr_value(value: AttrValue) -> Option<Self>;
}

macro_rules! attr_type {
    ($ty:ty, $variant:ident) => {
        impl AttrType for $ty {
            const KIND: AttrKind = AttrKind::$variant;

            fn into_attr_value(self) -> AttrValue {
                AttrValue::$variant(self)
            }

            fn from_attr_value(value: AttrValue) -> Option<Self> {
                match value {
                    AttrValue::$variant(v) => Some(v),
                    _ => None,
                }
            }
        }

        impl From<$ty> for AttrValue {
            fn from(v: $ty) -> Self {
                AttrValue::$variant(v)
            }
        }
    };
}

attr_type!(StringAttr, String);
attr_type!(BoolAttr, Bool);
attr_type!(Int64Attr, Int64);
attr_type!(Float64Attr, Float64);
attr_type!(StringSetAttr, StringSet);
attr_type!(Int64SetAttr, Int64Set);
