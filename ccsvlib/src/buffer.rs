//! Owned column buffers parsed from text.
//!
//! [`Column`] only borrows. Callers that start from text (command-line
//! arguments, files) need somewhere to keep the parsed numbers; `ColumnBuf` is
//! that storage, and [`ColumnBuf::as_column`] hands out the borrowed view the
//! printer works with.

use std::fmt::Display;
use std::str::FromStr;

use crate::column::{Column, ColumnData, Kind};
use crate::error::CcsvError;
use crate::Result;

/// An owned numeric buffer of one kind.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnBuf {
    Int(Vec<i32>),
    UInt(Vec<u32>),
    Long(Vec<isize>),
    ULong(Vec<usize>),
    LongLong(Vec<i64>),
    ULongLong(Vec<u64>),
    Float(Vec<f32>),
    Double(Vec<f64>),
    LongDouble(Vec<f64>),
}

impl ColumnBuf {
    /// Parse `text` as values of `kind`.
    ///
    /// Values are separated by commas and/or ASCII whitespace (including
    /// newlines); empty fields are skipped.
    pub fn parse(kind: Kind, text: &str) -> Result<Self> {
        let fields = split_fields(text);
        Ok(match kind {
            Kind::Int => ColumnBuf::Int(parse_values(kind, &fields)?),
            Kind::UInt => ColumnBuf::UInt(parse_values(kind, &fields)?),
            Kind::Long => ColumnBuf::Long(parse_values(kind, &fields)?),
            Kind::ULong => ColumnBuf::ULong(parse_values(kind, &fields)?),
            Kind::LongLong => ColumnBuf::LongLong(parse_values(kind, &fields)?),
            Kind::ULongLong => ColumnBuf::ULongLong(parse_values(kind, &fields)?),
            Kind::Float => ColumnBuf::Float(parse_values(kind, &fields)?),
            Kind::Double => ColumnBuf::Double(parse_values(kind, &fields)?),
            Kind::LongDouble => ColumnBuf::LongDouble(parse_values(kind, &fields)?),
        })
    }

    pub fn kind(&self) -> Kind {
        self.as_column().kind()
    }

    pub fn len(&self) -> usize {
        self.as_column().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrow this buffer as a printable column.
    pub fn as_column(&self) -> Column<'_> {
        let data = match self {
            ColumnBuf::Int(v) => ColumnData::Int(v),
            ColumnBuf::UInt(v) => ColumnData::UInt(v),
            ColumnBuf::Long(v) => ColumnData::Long(v),
            ColumnBuf::ULong(v) => ColumnData::ULong(v),
            ColumnBuf::LongLong(v) => ColumnData::LongLong(v),
            ColumnBuf::ULongLong(v) => ColumnData::ULongLong(v),
            ColumnBuf::Float(v) => ColumnData::Float(v),
            ColumnBuf::Double(v) => ColumnData::Double(v),
            ColumnBuf::LongDouble(v) => ColumnData::LongDouble(v),
        };
        Column::from(data)
    }
}

fn split_fields(text: &str) -> Vec<&str> {
    text.split(|c: char| c == ',' || c.is_ascii_whitespace())
        .filter(|field| !field.is_empty())
        .collect()
}

fn parse_values<T>(kind: Kind, fields: &[&str]) -> Result<Vec<T>>
where
    T: FromStr,
    T::Err: Display,
{
    fields
        .iter()
        .enumerate()
        .map(|(index, field)| {
            field.parse::<T>().map_err(|e| CcsvError::InvalidValue {
                kind,
                index,
                value: field.to_string(),
                reason: e.to_string(),
            })
        })
        .collect()
}
