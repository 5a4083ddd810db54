//! Capturing arguments from the scripting runtime's call frame
//!
//! The dispatcher that routes calls to callbacks exposes the interpreter's
//! per-call argument stack through `CallFrame`. `ArgumentList::capture` copies
//! it into an owned list before the callback runs.

use crate::api::arguments::ArgumentList;
use crate::error::CaptureError;
use crate::value::RawValue;

/// One argument slot as reported by the scripting runtime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameValue<'f> {
    Nil,
    Boolean(bool),
    Number(f64),
    String(&'f [u8]),
    /// Anything not marshalled here; carries the runtime's type name
    Other(&'static str),
}

/// Read access to the argument stack of a single call.
pub trait CallFrame {
    /// Number of arguments on the stack
    fn arg_count(&self) -> usize;

    /// Argument in `slot`, for `slot < arg_count()`
    fn arg(&self, slot: usize) -> FrameValue<'_>;
}

impl<'v> CallFrame for [FrameValue<'v>] {
    fn arg_count(&self) -> usize {
        self.len()
    }

    fn arg(&self, slot: usize) -> FrameValue<'_> {
        self[slot]
    }
}

impl<'v> CallFrame for Vec<FrameValue<'v>> {
    fn arg_count(&self) -> usize {
        self.len()
    }

    fn arg(&self, slot: usize) -> FrameValue<'_> {
        self[slot]
    }
}

impl ArgumentList {
    /// Copy every argument of `frame`, in order.
    ///
    /// Fails on the first slot holding an unsupported value; nothing is
    /// captured in that case.
    pub fn capture<F: CallFrame + ?Sized>(frame: &F) -> Result<Self, CaptureError> {
        let count = frame.arg_count();
        let mut values = Vec::with_capacity(count);

        for index in 0..count {
            let value = match frame.arg(index) {
                FrameValue::Nil => RawValue::Nil,
                FrameValue::Boolean(b) => RawValue::Boolean(b),
                FrameValue::Number(n) => RawValue::Number(n),
                FrameValue::String(bytes) => RawValue::bytes(bytes),
                FrameValue::Other(type_name) => {
                    tracing::warn!(index, type_name, "rejecting unsupported argument");
                    return Err(CaptureError::Unsupported { index, type_name });
                }
            };
            values.push(value);
        }

        tracing::trace!(count, "captured call arguments");
        Ok(Self::new(values))
    }
}
