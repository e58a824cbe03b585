//! Typed, borrowed views over numeric buffers.
//!
//! A [`Column`] is a small `Copy` descriptor: it borrows the caller's slice and
//! remembers which numeric [`Kind`] the slice holds. It never allocates, copies
//! or frees the underlying data, so dropping a column is free.
//!
//! The kind is encoded in the [`ColumnData`] variant itself, which makes it
//! impossible to describe an `f64` buffer as `Int`. Unknown kinds can only come
//! from outside the type system (numeric tags, names typed by a user) and are
//! rejected by [`Kind::try_from`] and [`Kind::from_str`] with
//! [`CcsvError::UnknownType`].

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CcsvError;
use crate::format::FormatValue;

/// The closed set of numeric kinds a column can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// 32-bit signed integer (`i32`)
    Int,
    /// 32-bit unsigned integer (`u32`)
    UInt,
    /// Word-size signed integer (`isize`)
    Long,
    /// Word-size unsigned integer (`usize`)
    ULong,
    /// 64-bit signed integer (`i64`)
    LongLong,
    /// 64-bit unsigned integer (`u64`)
    ULongLong,
    /// 32-bit float (`f32`)
    Float,
    /// 64-bit float (`f64`)
    Double,
    /// Extended-precision float.
    ///
    /// Rust has no 80-bit float type, so these columns hold `f64` and carry 53
    /// bits of mantissa instead of 64.
    LongDouble,
}

impl Kind {
    /// Every kind, in tag order.
    pub const ALL: [Kind; 9] = [
        Kind::Int,
        Kind::UInt,
        Kind::Long,
        Kind::ULong,
        Kind::LongLong,
        Kind::ULongLong,
        Kind::Float,
        Kind::Double,
        Kind::LongDouble,
    ];

    /// Numeric tag used by the C `ccsv_type` enum.
    pub fn tag(self) -> u32 {
        match self {
            Kind::Int => 0,
            Kind::UInt => 1,
            Kind::Long => 2,
            Kind::ULong => 3,
            Kind::LongLong => 4,
            Kind::ULongLong => 5,
            Kind::Float => 6,
            Kind::Double => 7,
            Kind::LongDouble => 8,
        }
    }

    /// Lowercase name, as accepted by [`Kind::from_str`].
    pub fn name(self) -> &'static str {
        match self {
            Kind::Int => "int",
            Kind::UInt => "uint",
            Kind::Long => "long",
            Kind::ULong => "ulong",
            Kind::LongLong => "longlong",
            Kind::ULongLong => "ulonglong",
            Kind::Float => "float",
            Kind::Double => "double",
            Kind::LongDouble => "longdouble",
        }
    }

    /// Whether values of this kind are written in fixed-point notation.
    pub fn is_float(self) -> bool {
        matches!(self, Kind::Float | Kind::Double | Kind::LongDouble)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u32> for Kind {
    type Error = CcsvError;

    fn try_from(tag: u32) -> Result<Self, Self::Error> {
        Kind::ALL
            .into_iter()
            .find(|kind| kind.tag() == tag)
            .ok_or_else(|| CcsvError::UnknownType(tag.to_string()))
    }
}

impl FromStr for Kind {
    type Err = CcsvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Kind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CcsvError::UnknownType(s.to_string()))
    }
}

/// A borrowed numeric buffer, tagged by its kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnData<'a> {
    Int(&'a [i32]),
    UInt(&'a [u32]),
    Long(&'a [isize]),
    ULong(&'a [usize]),
    LongLong(&'a [i64]),
    ULongLong(&'a [u64]),
    Float(&'a [f32]),
    Double(&'a [f64]),
    /// Extended precision, stored as `f64` (see [`Kind::LongDouble`]).
    LongDouble(&'a [f64]),
}

impl<'a> ColumnData<'a> {
    /// The kind described by this variant.
    pub fn kind(&self) -> Kind {
        match self {
            ColumnData::Int(_) => Kind::Int,
            ColumnData::UInt(_) => Kind::UInt,
            ColumnData::Long(_) => Kind::Long,
            ColumnData::ULong(_) => Kind::ULong,
            ColumnData::LongLong(_) => Kind::LongLong,
            ColumnData::ULongLong(_) => Kind::ULongLong,
            ColumnData::Float(_) => Kind::Float,
            ColumnData::Double(_) => Kind::Double,
            ColumnData::LongDouble(_) => Kind::LongDouble,
        }
    }

    /// Number of elements in the buffer.
    pub fn len(&self) -> usize {
        match self {
            ColumnData::Int(d) => d.len(),
            ColumnData::UInt(d) => d.len(),
            ColumnData::Long(d) => d.len(),
            ColumnData::ULong(d) => d.len(),
            ColumnData::LongLong(d) => d.len(),
            ColumnData::ULongLong(d) => d.len(),
            ColumnData::Float(d) => d.len(),
            ColumnData::Double(d) => d.len(),
            ColumnData::LongDouble(d) => d.len(),
        }
    }

    /// True when the buffer holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Write the element at `row` using the formatter for this kind.
    ///
    /// Each arm resolves to its own element type; no kind shares another
    /// kind's formatter.
    ///
    /// # Panics
    ///
    /// Panics if `row >= self.len()`.
    pub fn write_value<W: Write + ?Sized>(&self, row: usize, sink: &mut W) -> io::Result<()> {
        match self {
            ColumnData::Int(d) => d[row].write_to(sink),
            ColumnData::UInt(d) => d[row].write_to(sink),
            ColumnData::Long(d) => d[row].write_to(sink),
            ColumnData::ULong(d) => d[row].write_to(sink),
            ColumnData::LongLong(d) => d[row].write_to(sink),
            ColumnData::ULongLong(d) => d[row].write_to(sink),
            ColumnData::Float(d) => d[row].write_to(sink),
            ColumnData::Double(d) => d[row].write_to(sink),
            ColumnData::LongDouble(d) => d[row].write_to(sink),
        }
    }

    fn prefix(self, len: usize) -> Option<ColumnData<'a>> {
        Some(match self {
            ColumnData::Int(d) => ColumnData::Int(d.get(..len)?),
            ColumnData::UInt(d) => ColumnData::UInt(d.get(..len)?),
            ColumnData::Long(d) => ColumnData::Long(d.get(..len)?),
            ColumnData::ULong(d) => ColumnData::ULong(d.get(..len)?),
            ColumnData::LongLong(d) => ColumnData::LongLong(d.get(..len)?),
            ColumnData::ULongLong(d) => ColumnData::ULongLong(d.get(..len)?),
            ColumnData::Float(d) => ColumnData::Float(d.get(..len)?),
            ColumnData::Double(d) => ColumnData::Double(d.get(..len)?),
            ColumnData::LongDouble(d) => ColumnData::LongDouble(d.get(..len)?),
        })
    }
}

mod private {
    pub trait Sealed {}
}

/// Primitive types that can back a column.
///
/// Implemented for `i32`, `u32`, `isize`, `usize`, `i64`, `u64`, `f32` and
/// `f64`. Extended-precision columns are built with [`Column::long_double`].
pub trait Element: private::Sealed + FormatValue {
    /// The kind a slice of this type is tagged with.
    const KIND: Kind;

    /// Wrap a slice into the matching [`ColumnData`] variant.
    fn wrap(data: &[Self]) -> ColumnData<'_>;
}

macro_rules! element {
    ($t:ty => $variant:ident) => {
        impl private::Sealed for $t {}

        impl Element for $t {
            const KIND: Kind = Kind::$variant;

            fn wrap(data: &[Self]) -> ColumnData<'_> {
                ColumnData::$variant(data)
            }
        }
    };
}

element!(i32 => Int);
element!(u32 => UInt);
element!(isize => Long);
element!(usize => ULong);
element!(i64 => LongLong);
element!(u64 => ULongLong);
element!(f32 => Float);
element!(f64 => Double);

/// A typed, length-tagged, non-owning view over one numeric buffer.
///
/// ```rust
/// use ccsvlib::{Column, Kind};
///
/// let values = [1, 2, 3];
/// let column = Column::new(&values);
/// assert_eq!(column.kind(), Kind::Int);
/// assert_eq!(column.len(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Column<'a> {
    data: ColumnData<'a>,
}

impl<'a> Column<'a> {
    /// Wrap `data`; the kind follows from the element type.
    pub fn new<T: Element>(data: &'a [T]) -> Self {
        Self {
            data: T::wrap(data),
        }
    }

    /// Wrap `data` as an extended-precision column.
    pub fn long_double(data: &'a [f64]) -> Self {
        Self {
            data: ColumnData::LongDouble(data),
        }
    }

    /// Narrow the column to its first `len` elements.
    ///
    /// Returns [`CcsvError::LengthOutOfBounds`] if the buffer is shorter than
    /// `len`.
    pub fn truncated(self, len: usize) -> Result<Self, CcsvError> {
        let available = self.len();
        self.data
            .prefix(len)
            .map(Self::from)
            .ok_or(CcsvError::LengthOutOfBounds {
                requested: len,
                available,
            })
    }

    pub fn kind(&self) -> Kind {
        self.data.kind()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn data(&self) -> ColumnData<'a> {
        self.data
    }
}

impl<'a> From<ColumnData<'a>> for Column<'a> {
    fn from(data: ColumnData<'a>) -> Self {
        Self { data }
    }
}
