//! Conversion from arguments to Rust types
//!
//! `FromArgument` backs the generic `Arguments::check` and
//! `Arguments::optional` accessors. Each implementation defers to the matching
//! `check_*` method, so missing and mistyped arguments fail the same way
//! whichever form a callback uses.
//!
//! # Examples
//!
//! ```
//! use hostcall_runtime::api::ArgumentList;
//! use hostcall_runtime::RawValue;
//!
//! let list: ArgumentList = vec![RawValue::bytes("key"), RawValue::Number(3.0)].into();
//! let args = list.arguments();
//!
//! let key: String = args.check(0).unwrap();
//! let limit: Option<i64> = args.optional(1).unwrap();
//! let extra: Option<bool> = args.optional(2).unwrap();
//!
//! assert_eq!(key, "key");
//! assert_eq!(limit, Some(3));
//! assert_eq!(extra, None);
//! ```

use crate::api::arguments::Arguments;
use crate::error::ArgResult;
use crate::value::{HostValue, RawValue};

/// Trait for reading one argument as a Rust type
pub trait FromArgument<'a>: Sized {
    /// Read the argument at `index`
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if the argument is missing, `TypeMismatch` if it has
    /// the wrong kind.
    fn from_argument(args: &Arguments<'a>, index: usize) -> ArgResult<Self>;
}

impl<'a> FromArgument<'a> for bool {
    fn from_argument(args: &Arguments<'a>, index: usize) -> ArgResult<Self> {
        args.check_boolean(index)
    }
}

impl<'a> FromArgument<'a> for i32 {
    fn from_argument(args: &Arguments<'a>, index: usize) -> ArgResult<Self> {
        args.check_integer(index)
    }
}

// Same truncation rule as i32, with the wider range.
impl<'a> FromArgument<'a> for i64 {
    fn from_argument(args: &Arguments<'a>, index: usize) -> ArgResult<Self> {
        args.check_double(index).map(|n| n as i64)
    }
}

impl<'a> FromArgument<'a> for f64 {
    fn from_argument(args: &Arguments<'a>, index: usize) -> ArgResult<Self> {
        args.check_double(index)
    }
}

impl<'a> FromArgument<'a> for String {
    fn from_argument(args: &Arguments<'a>, index: usize) -> ArgResult<Self> {
        args.check_string(index)
    }
}

impl<'a> FromArgument<'a> for &'a [u8] {
    fn from_argument(args: &Arguments<'a>, index: usize) -> ArgResult<Self> {
        args.check_byte_array(index)
    }
}

impl<'a> FromArgument<'a> for Vec<u8> {
    fn from_argument(args: &Arguments<'a>, index: usize) -> ArgResult<Self> {
        args.check_byte_array(index).map(<[u8]>::to_vec)
    }
}

impl<'a> FromArgument<'a> for HostValue<'a> {
    fn from_argument(args: &Arguments<'a>, index: usize) -> ArgResult<Self> {
        args.check_any(index)
    }
}

impl<'a> FromArgument<'a> for RawValue {
    fn from_argument(args: &Arguments<'a>, index: usize) -> ArgResult<Self> {
        args.check_any(index).map(|v| v.to_raw())
    }
}

impl<'a, T: FromArgument<'a>> FromArgument<'a> for Option<T> {
    fn from_argument(args: &Arguments<'a>, index: usize) -> ArgResult<Self> {
        args.optional(index)
    }
}
