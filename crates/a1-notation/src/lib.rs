//! Parsing and formatting of spreadsheet cell and range references in A1
//! notation.
//!
//! A reference combines an optional sheet name with a cell (`B2`), a range
//! (`A1:C10`), or a whole-column/whole-row span (`A:A`, `1:10`). Column and
//! row parts may each carry a `$` absolute marker. Parsing yields an immutable
//! [`Reference`] value; [`format`] renders the canonical text back, and the
//! two are exact inverses for every accepted input.
//!
//! ```
//! use a1_notation::parse;
//!
//! let r = parse("'My Sheet'!$B$2:D4")?;
//! assert_eq!(r.sheet.as_deref(), Some("My Sheet"));
//! assert_eq!(r.range.width(), Some(3));
//! assert_eq!(r.to_a1(), "'My Sheet'!$B$2:D4");
//! # Ok::<(), a1_notation::ParseError>(())
//! ```
//!
//! Non-canonical but valid inputs normalize deterministically:
//!
//! ```
//! use a1_notation::parse;
//!
//! assert_eq!(parse("sheet1!aa1")?.to_a1(), "sheet1!AA1");
//! # Ok::<(), a1_notation::ParseError>(())
//! ```

mod builder;
mod column;
mod format;
mod parser;
mod reference;

pub use builder::{BuildError, ReferenceBuilder};
pub use column::{column_to_index, column_to_letters, ColumnError};
pub use format::format;
pub use parser::{parse, parse_with, ParseError, ParseErrorKind, ParseOptions};
pub use reference::{CellRef, RangeRef, Reference, EXCEL_MAX_COLS, EXCEL_MAX_ROWS};
