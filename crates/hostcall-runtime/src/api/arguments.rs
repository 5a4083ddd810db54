//! Typed access to the arguments of one host call
//!
//! `ArgumentList` owns the values captured from the scripting runtime for a
//! single invocation. `Arguments` is the read-only accessor handed to the
//! callback implementation.
//!
//! Two absence policies coexist:
//! - `check_*` treats a missing argument as an error (`IndexOutOfRange`) and a
//!   wrong kind as `TypeMismatch`.
//! - `is_*` answers `true` for a missing argument, so optional arguments can
//!   be tested without a separate length check.
//!
//! Numbers are doubles on the scripting side. `check_integer` truncates toward
//! zero, so a script passing `1.9` yields `1`.
//!
//! # Examples
//!
//! ```
//! use hostcall_runtime::api::ArgumentList;
//! use hostcall_runtime::RawValue;
//!
//! let list: ArgumentList = vec![
//!     RawValue::Boolean(true),
//!     RawValue::Number(1.9),
//!     RawValue::bytes("hi"),
//! ]
//! .into();
//! let args = list.arguments();
//!
//! assert_eq!(args.count(), 3);
//! assert_eq!(args.check_integer(1).unwrap(), 1);
//! assert_eq!(args.check_string(2).unwrap(), "hi");
//! assert!(args.is_boolean(5));
//! ```

use crate::api::conversion::FromArgument;
use crate::error::{ArgError, ArgResult};
use crate::value::{ArgKind, HostValue, RawValue};
use hostcall_config::{Config, Utf8Policy};
use std::iter::FusedIterator;
use std::slice;

/// Immutable arguments of a single invocation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ArgumentList {
    values: Box<[RawValue]>,
}

impl ArgumentList {
    pub fn new(values: Vec<RawValue>) -> Self {
        Self {
            values: values.into_boxed_slice(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&RawValue> {
        self.values.get(index)
    }

    pub fn as_slice(&self) -> &[RawValue] {
        &self.values
    }

    /// Accessor with the default (lossy) UTF-8 policy
    pub fn arguments(&self) -> Arguments<'_> {
        Arguments::new(self)
    }

    /// Accessor using the policy from loaded configuration
    pub fn arguments_with(&self, config: &Config) -> Arguments<'_> {
        Arguments::new(self).with_utf8_policy(config.utf8_policy())
    }
}

impl From<Vec<RawValue>> for ArgumentList {
    fn from(values: Vec<RawValue>) -> Self {
        Self::new(values)
    }
}

impl FromIterator<RawValue> for ArgumentList {
    fn from_iter<I: IntoIterator<Item = RawValue>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Type-checked, index-based view of an `ArgumentList`.
///
/// Cheap to copy; holds no state beyond the borrowed values and the decoding
/// policy.
#[derive(Debug, Clone, Copy)]
pub struct Arguments<'a> {
    values: &'a [RawValue],
    utf8: Utf8Policy,
}

impl<'a> Arguments<'a> {
    pub fn new(list: &'a ArgumentList) -> Self {
        Self {
            values: list.as_slice(),
            utf8: Utf8Policy::default(),
        }
    }

    /// Change how `check_string` treats invalid UTF-8
    pub fn with_utf8_policy(mut self, policy: Utf8Policy) -> Self {
        self.utf8 = policy;
        self
    }

    pub fn utf8_policy(&self) -> Utf8Policy {
        self.utf8
    }

    /// The total number of arguments passed to the function
    pub fn count(&self) -> usize {
        self.values.len()
    }

    /// Raw value at `index`, or `None` past the end
    pub fn get(&self, index: usize) -> Option<&'a RawValue> {
        self.values.get(index)
    }

    fn require(&self, index: usize) -> ArgResult<&'a RawValue> {
        self.values.get(index).ok_or_else(|| {
            tracing::debug!(index, count = self.values.len(), "missing argument");
            ArgError::IndexOutOfRange {
                index,
                count: self.values.len(),
            }
        })
    }

    /// Whatever is at `index`, converted to its host-native form
    pub fn check_any(&self, index: usize) -> ArgResult<HostValue<'a>> {
        self.require(index).map(RawValue::as_host)
    }

    /// Boolean at `index`
    pub fn check_boolean(&self, index: usize) -> ArgResult<bool> {
        match self.require(index)? {
            RawValue::Boolean(b) => Ok(*b),
            other => Err(mismatch(index, ArgKind::Boolean, other.kind())),
        }
    }

    /// Number at `index` truncated toward zero.
    ///
    /// Out-of-range values saturate at `i32::MIN`/`i32::MAX`; NaN becomes 0.
    pub fn check_integer(&self, index: usize) -> ArgResult<i32> {
        self.check_double(index).map(|n| n as i32)
    }

    /// Number at `index`, unmodified
    pub fn check_double(&self, index: usize) -> ArgResult<f64> {
        match self.require(index)? {
            RawValue::Number(n) => Ok(*n),
            other => Err(mismatch(index, ArgKind::Number, other.kind())),
        }
    }

    /// Byte string at `index` decoded as UTF-8.
    ///
    /// Under `Utf8Policy::Lossy` invalid sequences become U+FFFD. Under
    /// `Utf8Policy::Strict` they are reported as a `TypeMismatch` with
    /// `found: ArgKind::Binary`.
    pub fn check_string(&self, index: usize) -> ArgResult<String> {
        let bytes = self.check_byte_array(index)?;
        match self.utf8 {
            Utf8Policy::Lossy => Ok(String::from_utf8_lossy(bytes).into_owned()),
            Utf8Policy::Strict => std::str::from_utf8(bytes)
                .map(str::to_owned)
                .map_err(|_| mismatch(index, ArgKind::String, ArgKind::Binary)),
        }
    }

    /// Byte string at `index`, undecoded
    pub fn check_byte_array(&self, index: usize) -> ArgResult<&'a [u8]> {
        match self.require(index)? {
            RawValue::Bytes(bytes) => Ok(&bytes[..]),
            other => Err(mismatch(index, ArgKind::String, other.kind())),
        }
    }

    /// Generic form of the `check_*` family
    pub fn check<T: FromArgument<'a>>(&self, index: usize) -> ArgResult<T> {
        T::from_argument(self, index)
    }

    /// `None` when the argument is absent or nil; otherwise like `check`
    pub fn optional<T: FromArgument<'a>>(&self, index: usize) -> ArgResult<Option<T>> {
        match self.values.get(index) {
            None | Some(RawValue::Nil) => Ok(None),
            Some(_) => T::from_argument(self, index).map(Some),
        }
    }

    pub fn opt_boolean(&self, index: usize, default: bool) -> ArgResult<bool> {
        Ok(self.optional(index)?.unwrap_or(default))
    }

    pub fn opt_integer(&self, index: usize, default: i32) -> ArgResult<i32> {
        Ok(self.optional(index)?.unwrap_or(default))
    }

    pub fn opt_double(&self, index: usize, default: f64) -> ArgResult<f64> {
        Ok(self.optional(index)?.unwrap_or(default))
    }

    pub fn opt_string(&self, index: usize, default: &str) -> ArgResult<String> {
        Ok(self
            .optional(index)?
            .unwrap_or_else(|| default.to_string()))
    }

    // Predicates: a missing argument satisfies every type test.

    fn test(&self, index: usize, pred: impl FnOnce(&RawValue) -> bool) -> bool {
        self.values.get(index).map_or(true, pred)
    }

    pub fn is_boolean(&self, index: usize) -> bool {
        self.test(index, |v| matches!(v, RawValue::Boolean(_)))
    }

    /// Any number counts; there is no separate integral kind.
    pub fn is_integer(&self, index: usize) -> bool {
        self.test(index, |v| matches!(v, RawValue::Number(_)))
    }

    pub fn is_double(&self, index: usize) -> bool {
        self.test(index, |v| matches!(v, RawValue::Number(_)))
    }

    /// Tests the kind only; content is not validated as UTF-8.
    pub fn is_string(&self, index: usize) -> bool {
        self.test(index, |v| matches!(v, RawValue::Bytes(_)))
    }

    pub fn is_byte_array(&self, index: usize) -> bool {
        self.test(index, |v| matches!(v, RawValue::Bytes(_)))
    }

    /// Host-native values in index order
    pub fn iter(&self) -> Iter<'a> {
        Iter {
            inner: self.values.iter(),
        }
    }
}

impl<'a> IntoIterator for Arguments<'a> {
    type Item = HostValue<'a>;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &Arguments<'a> {
    type Item = HostValue<'a>;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn mismatch(index: usize, expected: ArgKind, found: ArgKind) -> ArgError {
    tracing::debug!(
        index,
        expected = expected.name(),
        found = found.name(),
        "argument type mismatch"
    );
    ArgError::TypeMismatch {
        index,
        expected,
        found,
    }
}

/// Iterator over an argument list's host-native values
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: slice::Iter<'a, RawValue>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = HostValue<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(RawValue::as_host)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(RawValue::as_host)
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
