//! Public callback-facing API
//!
//! This module provides what a host callback sees of a scripting call:
//! - `ArgumentList` / `Arguments` - captured arguments and the typed accessor
//! - `FromArgument` - generic conversion used by `Arguments::check`
//! - `CallFrame` - the dispatcher's view of the interpreter stack
//!
//! # Examples
//!
//! ```
//! use hostcall_runtime::api::{ArgumentList, FrameValue};
//!
//! let frame = vec![FrameValue::String(b"motd.txt"), FrameValue::Number(512.0)];
//! let list = ArgumentList::capture(&frame).unwrap();
//! let args = list.arguments();
//!
//! let path = args.check_string(0).unwrap();
//! let limit = args.opt_integer(1, 1024).unwrap();
//! let append = args.opt_boolean(2, false).unwrap();
//!
//! assert_eq!((path.as_str(), limit, append), ("motd.txt", 512, false));
//! ```

pub mod arguments;
pub mod conversion;
pub mod frame;

pub use arguments::{ArgumentList, Arguments, Iter};
pub use conversion::FromArgument;
pub use frame::{CallFrame, FrameValue};
