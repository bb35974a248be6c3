//! Structured representation of A1 references.

use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::format;
use crate::parser::ParseError;

/// Highest column of a modern Excel-compatible grid (`XFD`), 1-based.
pub const EXCEL_MAX_COLS: u32 = 16_384;
/// Highest row of a modern Excel-compatible grid, 1-based.
pub const EXCEL_MAX_ROWS: u32 = 1_048_576;

/// One endpoint of an A1 reference.
///
/// Columns and rows are **1-based** (`col = 1` is column `A`, `row = 1` is row
/// `1`), matching the convention of the notation itself. Either part may be
/// absent: a column-only endpoint names a whole column (each side of `A:A`), a
/// row-only endpoint a whole row. At least one part is present in every value
/// produced by this crate; both-absent is not a meaningful reference.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellRef {
    /// 1-based column index; absent for whole-row endpoints.
    pub col: Option<u32>,
    /// 1-based row index; absent for whole-column endpoints.
    pub row: Option<u32>,
    /// `$` before the column letters.
    pub col_abs: bool,
    /// `$` before the row digits.
    pub row_abs: bool,
}

impl CellRef {
    /// A plain (relative) cell endpoint like `B2`.
    #[inline]
    pub const fn new(col: u32, row: u32) -> Self {
        Self {
            col: Some(col),
            row: Some(row),
            col_abs: false,
            row_abs: false,
        }
    }

    /// A whole-column endpoint like the `A` in `A:A`.
    #[inline]
    pub const fn col_only(col: u32) -> Self {
        Self {
            col: Some(col),
            row: None,
            col_abs: false,
            row_abs: false,
        }
    }

    /// A whole-row endpoint like the `3` in `3:3`.
    #[inline]
    pub const fn row_only(row: u32) -> Self {
        Self {
            col: None,
            row: Some(row),
            col_abs: false,
            row_abs: false,
        }
    }

    /// Marks every present part absolute (`B2` -> `$B$2`, `A` -> `$A`).
    #[inline]
    pub const fn absolute(mut self) -> Self {
        self.col_abs = self.col.is_some();
        self.row_abs = self.row.is_some();
        self
    }

    /// True when both column and row are present.
    #[inline]
    pub const fn is_cell(&self) -> bool {
        self.col.is_some() && self.row.is_some()
    }

    /// True for a whole-column endpoint.
    #[inline]
    pub const fn is_col_only(&self) -> bool {
        self.col.is_some() && self.row.is_none()
    }

    /// True for a whole-row endpoint.
    #[inline]
    pub const fn is_row_only(&self) -> bool {
        self.col.is_none() && self.row.is_some()
    }

    pub(crate) fn kind(&self) -> EndpointKind {
        match (self.col, self.row) {
            (Some(_), Some(_)) => EndpointKind::Cell,
            (Some(_), None) => EndpointKind::ColOnly,
            (None, _) => EndpointKind::RowOnly,
        }
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        format::push_cell(&mut out, self);
        f.write_str(&out)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum EndpointKind {
    Cell,
    ColOnly,
    RowOnly,
}

/// A single endpoint or a `from:to` span.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RangeRef {
    pub from: CellRef,
    /// Absent for single-cell references.
    pub to: Option<CellRef>,
}

impl RangeRef {
    /// A single-endpoint range like `B2`.
    #[inline]
    pub const fn single(cell: CellRef) -> Self {
        Self {
            from: cell,
            to: None,
        }
    }

    /// A two-endpoint range like `A1:B2` or `A:A`.
    #[inline]
    pub const fn span(from: CellRef, to: CellRef) -> Self {
        Self {
            from,
            to: Some(to),
        }
    }

    /// True when the reference names exactly one endpoint (no `:`).
    #[inline]
    pub const fn is_single_cell(&self) -> bool {
        self.to.is_none()
    }

    /// Number of columns spanned, or `None` when the column dimension is
    /// unbounded (whole-row references).
    pub fn width(&self) -> Option<u32> {
        let to = self.to.unwrap_or(self.from);
        match (self.from.col, to.col) {
            (Some(a), Some(b)) => Some(a.abs_diff(b) + 1),
            _ => None,
        }
    }

    /// Number of rows spanned, or `None` when the row dimension is unbounded
    /// (whole-column references).
    pub fn height(&self) -> Option<u32> {
        let to = self.to.unwrap_or(self.from);
        match (self.from.row, to.row) {
            (Some(a), Some(b)) => Some(a.abs_diff(b) + 1),
            _ => None,
        }
    }
}

impl fmt::Display for RangeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        format::push_range(&mut out, self);
        f.write_str(&out)
    }
}

/// A parsed A1 reference: an optional sheet name plus a range part.
///
/// The sheet name is stored unquoted, with its original casing. Quoting is a
/// concern of the textual form only and is reapplied by [`crate::format`] when
/// the name is not a bare identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Reference {
    /// Sheet name without surrounding quotes, verbatim case.
    pub sheet: Option<String>,
    pub range: RangeRef,
}

impl Reference {
    /// A reference with no sheet prefix.
    #[inline]
    pub const fn new(range: RangeRef) -> Self {
        Self { sheet: None, range }
    }

    /// A sheet-qualified reference.
    pub fn on_sheet(sheet: impl Into<String>, range: RangeRef) -> Self {
        Self {
            sheet: Some(sheet.into()),
            range,
        }
    }

    /// Parses A1 text under the default Excel limits.
    pub fn from_a1(text: &str) -> Result<Self, ParseError> {
        crate::parse(text)
    }

    /// Renders the canonical A1 text.
    pub fn to_a1(&self) -> String {
        crate::format(self)
    }

    /// The range part only, without any sheet prefix.
    pub fn to_short_string(&self) -> String {
        let mut out = String::new();
        format::push_range(&mut out, &self.range);
        out
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_a1())
    }
}

impl FromStr for Reference {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_a1(s)
    }
}
