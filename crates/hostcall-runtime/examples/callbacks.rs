//! Callback argument handling example
//!
//! Demonstrates a tiny dispatcher capturing a call frame, handing typed
//! arguments to host callbacks, and pushing results back as scripting values.
//!
//! Run with: cargo run --example callbacks -p hostcall-runtime

use hostcall_runtime::api::{ArgumentList, Arguments, FrameValue};
use hostcall_runtime::{ArgResult, RawValue};

type Callback = fn(&Arguments<'_>) -> ArgResult<Vec<RawValue>>;

// write(text [, times]) -> byte count
fn write(args: &Arguments<'_>) -> ArgResult<Vec<RawValue>> {
    let text = args.check_string(0)?;
    let times = args.opt_integer(1, 1)?.max(0) as usize;
    let written = text.len() * times;
    Ok(vec![RawValue::from(written as i64)])
}

// checksum(data) -> number, nil when empty
fn checksum(args: &Arguments<'_>) -> ArgResult<Vec<RawValue>> {
    let data = args.check_byte_array(0)?;
    let sum = data.iter().fold(0u32, |acc, b| acc.wrapping_add(u32::from(*b)));
    Ok(vec![if data.is_empty() {
        RawValue::Nil
    } else {
        RawValue::from(f64::from(sum))
    }])
}

fn dispatch(name: &str, callback: Callback, frame: &[FrameValue<'_>]) {
    let list = match ArgumentList::capture(frame) {
        Ok(list) => list,
        Err(e) => {
            println!("{}: {}", name, e);
            return;
        }
    };

    match callback(&list.arguments()) {
        Ok(results) => println!("{} -> {:?}", name, results),
        Err(e) => println!("{}: {}", name, e),
    }
}

fn main() {
    dispatch("write", write, &[FrameValue::String(b"hello")]);
    // Output: write -> [Number(5.0)]

    dispatch(
        "write",
        write,
        &[FrameValue::String(b"ab"), FrameValue::Number(3.7)],
    );
    // Output: write -> [Number(6.0)]

    dispatch("write", write, &[FrameValue::Number(1.0)]);
    // Output: write: bad argument #1 (string expected, got number)

    dispatch("checksum", checksum, &[FrameValue::String(&[1, 2, 250])]);
    // Output: checksum -> [Number(253.0)]

    dispatch("checksum", checksum, &[]);
    // Output: checksum: bad argument #1 (value expected)

    dispatch("checksum", checksum, &[FrameValue::Other("table")]);
    // Output: checksum: bad argument #1 (unsupported type table)
}
