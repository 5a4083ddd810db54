//! Hostcall Runtime - argument marshalling between a scripting runtime and host callbacks
//!
//! This library provides:
//! - The scripting-side value model (`RawValue`) and its host view (`HostValue`)
//! - Typed, fail-fast argument access for callbacks (`api::Arguments`)
//! - Call-frame capture for the dispatcher (`api::CallFrame`)
//! - Conversions from host results back to scripting values

/// Hostcall runtime version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod api;
pub mod error;
pub mod value;

// Re-export commonly used types
pub use api::{ArgumentList, Arguments, CallFrame, FromArgument, FrameValue};
pub use error::{ArgError, ArgResult, CaptureError};
pub use hostcall_config::Utf8Policy;
pub use value::{ArgKind, HostValue, RawValue};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smoke() {
        assert_eq!(VERSION, "0.1.0");
    }
}
