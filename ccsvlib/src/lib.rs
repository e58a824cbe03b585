//! # ccsvlib
//!
//! Print a fixed set of equal-length numeric columns as comma-separated rows.
//!
//! ## Overview
//!
//! This is a formatting utility, not a CSV reader/writer. There is no quoting,
//! escaping or header row: every field is a plain numeral, so none is needed.
//!
//! - **Column**: a typed, borrowed view over a numeric slice
//! - **RowPrinter**: checks that columns line up, then writes one line per row
//! - **ColumnBuf**: owned storage for columns parsed from text
//!
//! ## Kinds and formats
//!
//! | Kind                          | Rust type         | Output           |
//! |-------------------------------|-------------------|------------------|
//! | `Int` / `UInt`                | `i32` / `u32`     | `-42`            |
//! | `Long` / `ULong`              | `isize` / `usize` | `-42`            |
//! | `LongLong` / `ULongLong`      | `i64` / `u64`     | `-42`            |
//! | `Float` / `Double`            | `f32` / `f64`     | `6.240000`       |
//! | `LongDouble`                  | `f64`             | `6.240000`       |
//!
//! `LongDouble` stands in for C's 80-bit `long double`; Rust has no such type,
//! so values are held and printed with `f64` precision.
//!
//! ## Example
//!
//! ```rust
//! use ccsvlib::{print_columns, Column};
//!
//! let ids = [1, 2, 3];
//! let scores = [0.5, 0.75, 1.0];
//!
//! let mut out = Vec::new();
//! print_columns(&mut out, &[Column::new(&ids), Column::new(&scores)]).unwrap();
//! assert_eq!(out, b"1, 0.500000\n2, 0.750000\n3, 1.000000\n");
//! ```

pub mod buffer;
pub mod column;
pub mod error;
pub mod format;
pub mod printer;

pub use buffer::ColumnBuf;
pub use column::{Column, ColumnData, Element, Kind};
pub use error::CcsvError;
pub use format::{FormatValue, FIXED_PRECISION};
pub use printer::{format_columns, print_columns, RowPrinter};

/// Result type for ccsvlib operations
pub type Result<T> = std::result::Result<T, CcsvError>;
