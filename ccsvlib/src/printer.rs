//! Row printer: turns a list of columns into comma-separated lines.
//!
//! Printing runs in three steps and never goes back:
//!
//! 1. **Resolve**: pick the formatter for every column from its kind
//! 2. **Validate**: every column must have as many rows as the first
//! 3. **Emit**: one line per row, values joined by `", "`, each line ending in `\n`
//!
//! Steps 1 and 2 happen in [`RowPrinter::new`], so a rejected column list
//! never writes a byte. A failing sink during step 3 aborts at once; whatever
//! was already written stays written.
//!
//! An empty column list, or columns with zero rows, print nothing and succeed.
//!
//! ## Example
//!
//! ```rust
//! use ccsvlib::{print_columns, Column};
//!
//! let a = [1, 2, 3, 4, 5];
//! let b = [6.24, 7.44, 8.92, 9.19, 10.45];
//!
//! let mut out = Vec::new();
//! print_columns(&mut out, &[Column::new(&a), Column::new(&b)]).unwrap();
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "1, 6.240000\n2, 7.440000\n3, 8.920000\n4, 9.190000\n5, 10.450000\n"
//! );
//! ```

use std::io::Write;

use crate::column::{Column, ColumnData};
use crate::error::CcsvError;
use crate::Result;

/// Separator placed between values within a row.
pub const FIELD_SEPARATOR: &[u8] = b", ";

/// Terminator written after every row.
pub const ROW_TERMINATOR: &[u8] = b"\n";

/// A validated set of columns, ready to be written.
#[derive(Debug, Clone)]
pub struct RowPrinter<'a> {
    formatters: Vec<ColumnData<'a>>,
    rows: usize,
}

impl<'a> RowPrinter<'a> {
    /// Resolve formatters and check that all columns share one length.
    pub fn new(columns: &[Column<'a>]) -> Result<Self> {
        let formatters: Vec<ColumnData<'a>> = columns.iter().map(Column::data).collect();

        let rows = formatters.first().map_or(0, ColumnData::len);
        for (index, data) in formatters.iter().enumerate().skip(1) {
            if data.len() != rows {
                return Err(CcsvError::ColumnLengthMismatch {
                    column: index,
                    expected: rows,
                    found: data.len(),
                });
            }
        }

        Ok(Self { formatters, rows })
    }

    /// Number of lines [`RowPrinter::print`] will write.
    pub fn row_count(&self) -> usize {
        self.rows
    }

    pub fn column_count(&self) -> usize {
        self.formatters.len()
    }

    /// Write every row to `sink`, then flush it.
    pub fn print<W: Write + ?Sized>(&self, sink: &mut W) -> Result<()> {
        if self.formatters.is_empty() {
            return Ok(());
        }
        for row in 0..self.rows {
            self.write_row(sink, row)?;
        }
        sink.flush()?;
        Ok(())
    }

    /// Write the single line for `row`, including its terminator.
    ///
    /// # Panics
    ///
    /// Panics if `row >= self.row_count()`.
    pub fn write_row<W: Write + ?Sized>(&self, sink: &mut W, row: usize) -> Result<()> {
        for (index, data) in self.formatters.iter().enumerate() {
            if index > 0 {
                sink.write_all(FIELD_SEPARATOR)?;
            }
            data.write_value(row, sink)?;
        }
        sink.write_all(ROW_TERMINATOR)?;
        Ok(())
    }
}

/// Validate `columns` and print them to `sink` as comma-separated rows.
pub fn print_columns<W: Write + ?Sized>(sink: &mut W, columns: &[Column<'_>]) -> Result<()> {
    RowPrinter::new(columns)?.print(sink)
}

/// Render `columns` into a `String`.
pub fn format_columns(columns: &[Column<'_>]) -> Result<String> {
    let mut out = Vec::new();
    print_columns(&mut out, columns)?;
    // every formatter emits ASCII
    Ok(String::from_utf8_lossy(&out).into_owned())
}
