//! Text representation of single numeric values.
//!
//! Every kind has exactly one fixed rendering:
//!
//! - integers of any width and signedness: plain decimal (`-42`, `18446744073709551615`)
//! - floating point of any width: fixed point with six fractional digits (`6.240000`)
//!
//! Non-finite floats are written the way C's `%f` writes them: `nan`, `-nan`,
//! `inf` and `-inf`. Values go straight to the sink without an intermediate
//! `String`.

use std::io::{self, Write};

/// Number of fractional digits in fixed-point output.
pub const FIXED_PRECISION: usize = 6;

/// A primitive that knows how to write itself as a CSV field.
pub trait FormatValue: Copy {
    /// Write this value to `sink` in its kind's fixed text format.
    fn write_to<W: Write + ?Sized>(self, sink: &mut W) -> io::Result<()>;
}

macro_rules! format_integer {
    ($($t:ty),*) => {
        $(
            impl FormatValue for $t {
                fn write_to<W: Write + ?Sized>(self, sink: &mut W) -> io::Result<()> {
                    write!(sink, "{}", self)
                }
            }
        )*
    };
}

format_integer!(i32, u32, isize, usize, i64, u64);

impl FormatValue for f32 {
    fn write_to<W: Write + ?Sized>(self, sink: &mut W) -> io::Result<()> {
        // widening is exact, so the digits match a promoted C float
        write_fixed(sink, f64::from(self))
    }
}

impl FormatValue for f64 {
    fn write_to<W: Write + ?Sized>(self, sink: &mut W) -> io::Result<()> {
        write_fixed(sink, self)
    }
}

/// Write `value` as fixed point with [`FIXED_PRECISION`] fractional digits.
pub fn write_fixed<W: Write + ?Sized>(sink: &mut W, value: f64) -> io::Result<()> {
    if value.is_nan() {
        let text: &[u8] = if value.is_sign_negative() {
            b"-nan"
        } else {
            b"nan"
        };
        return sink.write_all(text);
    }
    if value.is_infinite() {
        let text: &[u8] = if value.is_sign_negative() {
            b"-inf"
        } else {
            b"inf"
        };
        return sink.write_all(text);
    }
    write!(sink, "{:.*}", FIXED_PRECISION, value)
}
