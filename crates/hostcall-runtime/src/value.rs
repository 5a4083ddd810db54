//! Value representation on both sides of the call boundary
//!
//! - `RawValue`: what the scripting runtime hands over for each argument.
//!   Owned, immutable, cheap to clone (byte strings are reference-counted).
//! - `HostValue`: the host-side view of a `RawValue`, borrowing its bytes.
//!
//! Conversions from host types into `RawValue` are used when pushing
//! callback results back to the scripting runtime.

use std::fmt;
use std::sync::Arc;

/// A single argument as captured from the scripting runtime.
///
/// Scripting strings are arbitrary byte sequences, so they are kept as
/// bytes here and only decoded when a callback asks for text.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Nil,
    Boolean(bool),
    Number(f64),
    Bytes(Arc<[u8]>),
}

/// Host-native view of an argument, as returned by `check_any` and iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostValue<'a> {
    /// Scripting `nil`
    Null,
    Boolean(bool),
    Double(f64),
    ByteArray(&'a [u8]),
}

/// Kind names used in argument diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgKind {
    Nil,
    Boolean,
    Number,
    String,
    /// A byte string that is not valid UTF-8 (strict decoding only)
    Binary,
}

impl ArgKind {
    pub fn name(self) -> &'static str {
        match self {
            ArgKind::Nil => "nil",
            ArgKind::Boolean => "boolean",
            ArgKind::Number => "number",
            ArgKind::String => "string",
            ArgKind::Binary => "binary",
        }
    }
}

impl fmt::Display for ArgKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl RawValue {
    /// Build a byte-string value
    pub fn bytes(bytes: impl AsRef<[u8]>) -> Self {
        RawValue::Bytes(Arc::from(bytes.as_ref()))
    }

    pub fn kind(&self) -> ArgKind {
        match self {
            RawValue::Nil => ArgKind::Nil,
            RawValue::Boolean(_) => ArgKind::Boolean,
            RawValue::Number(_) => ArgKind::Number,
            RawValue::Bytes(_) => ArgKind::String,
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, RawValue::Nil)
    }

    /// Borrow this value as its host-native representation
    pub fn as_host(&self) -> HostValue<'_> {
        match self {
            RawValue::Nil => HostValue::Null,
            RawValue::Boolean(b) => HostValue::Boolean(*b),
            RawValue::Number(n) => HostValue::Double(*n),
            RawValue::Bytes(bytes) => HostValue::ByteArray(bytes),
        }
    }
}

impl<'a> HostValue<'a> {
    pub fn kind(&self) -> ArgKind {
        match self {
            HostValue::Null => ArgKind::Nil,
            HostValue::Boolean(_) => ArgKind::Boolean,
            HostValue::Double(_) => ArgKind::Number,
            HostValue::ByteArray(_) => ArgKind::String,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, HostValue::Null)
    }

    /// Copy back into an owned scripting value
    pub fn to_raw(&self) -> RawValue {
        match *self {
            HostValue::Null => RawValue::Nil,
            HostValue::Boolean(b) => RawValue::Boolean(b),
            HostValue::Double(n) => RawValue::Number(n),
            HostValue::ByteArray(bytes) => RawValue::bytes(bytes),
        }
    }
}

impl<'a> From<&'a RawValue> for HostValue<'a> {
    fn from(value: &'a RawValue) -> Self {
        value.as_host()
    }
}

// Host -> scripting conversions for callback results

impl From<()> for RawValue {
    fn from(_: ()) -> Self {
        RawValue::Nil
    }
}

impl From<bool> for RawValue {
    fn from(b: bool) -> Self {
        RawValue::Boolean(b)
    }
}

impl From<f64> for RawValue {
    fn from(n: f64) -> Self {
        RawValue::Number(n)
    }
}

impl From<f32> for RawValue {
    fn from(n: f32) -> Self {
        RawValue::Number(f64::from(n))
    }
}

impl From<i32> for RawValue {
    fn from(n: i32) -> Self {
        RawValue::Number(f64::from(n))
    }
}

// Magnitudes above 2^53 lose precision; the scripting side only has doubles.
impl From<i64> for RawValue {
    fn from(n: i64) -> Self {
        RawValue::Number(n as f64)
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::bytes(s)
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue::Bytes(Arc::from(s.into_bytes()))
    }
}

impl From<&[u8]> for RawValue {
    fn from(bytes: &[u8]) -> Self {
        RawValue::bytes(bytes)
    }
}

impl From<Vec<u8>> for RawValue {
    fn from(bytes: Vec<u8>) -> Self {
        RawValue::Bytes(Arc::from(bytes))
    }
}

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(value: Option<T>) -> Self {
        match value {
            None => RawValue::Nil,
            Some(v) => v.into(),
        }
    }
}

impl<'a> From<HostValue<'a>> for RawValue {
    fn from(value: HostValue<'a>) -> Self {
        value.to_raw()
    }
}
