//! Fluent construction of references without going through the parser.

use thiserror::Error;

use crate::column::{column_to_index, ColumnError};
use crate::reference::{CellRef, RangeRef, Reference, EXCEL_MAX_ROWS};

/// Errors from [`ReferenceBuilder`] methods.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error(transparent)]
    Column(#[from] ColumnError),
    #[error("row {0} is out of range (max {EXCEL_MAX_ROWS})")]
    RowOutOfRange(u32),
    #[error("range bounds are inverted")]
    InvertedBounds,
}

/// Builds [`Reference`] values, optionally scoped to a sheet.
///
/// ```
/// use a1_notation::Reference;
///
/// let r = Reference::with_sheet("My Sheet").cell("B", 2)?;
/// assert_eq!(r.to_a1(), "'My Sheet'!B2");
/// # Ok::<(), a1_notation::BuildError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReferenceBuilder {
    sheet: Option<String>,
}

impl ReferenceBuilder {
    /// Scopes the reference to a sheet. The name is taken unquoted; quoting
    /// happens at format time when needed.
    pub fn sheet(mut self, name: impl Into<String>) -> Self {
        self.sheet = Some(name.into());
        self
    }

    /// Single cell like `B2`.
    pub fn cell(self, col_letters: &str, row: u32) -> Result<Reference, BuildError> {
        let col = column_to_index(col_letters)?;
        let row = check_row(row)?;
        Ok(self.finish(RangeRef::single(CellRef::new(col, row))))
    }

    /// Rectangular range like `A1:C10`.
    pub fn range(
        self,
        from_col: &str,
        from_row: u32,
        to_col: &str,
        to_row: u32,
    ) -> Result<Reference, BuildError> {
        let from = CellRef::new(column_to_index(from_col)?, check_row(from_row)?);
        let to = CellRef::new(column_to_index(to_col)?, check_row(to_row)?);
        Ok(self.finish(RangeRef::span(from, to)))
    }

    /// Whole-column reference like `A:A`.
    pub fn column(self, letters: &str) -> Result<Reference, BuildError> {
        let col = CellRef::col_only(column_to_index(letters)?);
        Ok(self.finish(RangeRef::span(col, col)))
    }

    /// Whole-columns reference like `A:Z`.
    pub fn columns(self, from: &str, to: &str) -> Result<Reference, BuildError> {
        let from = column_to_index(from)?;
        let to = column_to_index(to)?;
        if from > to {
            return Err(BuildError::InvertedBounds);
        }
        Ok(self.finish(RangeRef::span(
            CellRef::col_only(from),
            CellRef::col_only(to),
        )))
    }

    /// Whole-row reference like `5:5`.
    pub fn row(self, row: u32) -> Result<Reference, BuildError> {
        let row = CellRef::row_only(check_row(row)?);
        Ok(self.finish(RangeRef::span(row, row)))
    }

    /// Whole-rows reference like `1:10`.
    pub fn rows(self, from: u32, to: u32) -> Result<Reference, BuildError> {
        let from = check_row(from)?;
        let to = check_row(to)?;
        if from > to {
            return Err(BuildError::InvertedBounds);
        }
        Ok(self.finish(RangeRef::span(
            CellRef::row_only(from),
            CellRef::row_only(to),
        )))
    }

    fn finish(self, range: RangeRef) -> Reference {
        Reference {
            sheet: self.sheet,
            range,
        }
    }
}

impl Reference {
    /// Starts a builder with no sheet scope.
    pub fn builder() -> ReferenceBuilder {
        ReferenceBuilder::default()
    }

    /// Starts a builder scoped to the given sheet.
    pub fn with_sheet(name: impl Into<String>) -> ReferenceBuilder {
        ReferenceBuilder::default().sheet(name)
    }

    /// Single unqualified cell like `B2`.
    pub fn cell(col_letters: &str, row: u32) -> Result<Self, BuildError> {
        Self::builder().cell(col_letters, row)
    }

    /// Unqualified rectangular range like `A1:C10`.
    pub fn range(
        from_col: &str,
        from_row: u32,
        to_col: &str,
        to_row: u32,
    ) -> Result<Self, BuildError> {
        Self::builder().range(from_col, from_row, to_col, to_row)
    }

    /// Unqualified whole-column reference like `A:A`.
    pub fn column(letters: &str) -> Result<Self, BuildError> {
        Self::builder().column(letters)
    }

    /// Unqualified whole-columns reference like `A:Z`.
    pub fn columns(from: &str, to: &str) -> Result<Self, BuildError> {
        Self::builder().columns(from, to)
    }

    /// Unqualified whole-row reference like `5:5`.
    pub fn row(row: u32) -> Result<Self, BuildError> {
        Self::builder().row(row)
    }

    /// Unqualified whole-rows reference like `1:10`.
    pub fn rows(from: u32, to: u32) -> Result<Self, BuildError> {
        Self::builder().rows(from, to)
    }
}

fn check_row(row: u32) -> Result<u32, BuildError> {
    if row == 0 || row > EXCEL_MAX_ROWS {
        return Err(BuildError::RowOutOfRange(row));
    }
    Ok(row)
}
