//! Column letter/index conversion.
//!
//! A1 column labels are bijective base-26 numerals: `A` = 1, `Z` = 26, `AA` = 27,
//! `AZ` = 52, `BA` = 53. There is no digit for zero, so converting an index back
//! to letters subtracts one before every divmod step. A plain base-26 conversion
//! silently mishandles every multi-letter column.

use thiserror::Error;

use crate::reference::EXCEL_MAX_COLS;

/// Errors from column letter/index conversion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColumnError {
    /// The input was empty or contained a character outside `A`-`Z` / `a`-`z`.
    #[error("invalid column letters {0:?}")]
    InvalidColumnLetters(String),
    /// The column index is zero or larger than the maximum column.
    #[error("column {0} is out of range (max {1})")]
    ColumnOutOfRange(u64, u32),
}

/// Converts column letters to their 1-based index (`A` -> 1, `AA` -> 27).
///
/// Input is case-insensitive. Fails when the string is empty, contains a
/// non-letter character, or names a column past [`EXCEL_MAX_COLS`].
pub fn column_to_index(letters: &str) -> Result<u32, ColumnError> {
    column_to_index_bounded(letters, EXCEL_MAX_COLS)
}

pub(crate) fn column_to_index_bounded(letters: &str, max_col: u32) -> Result<u32, ColumnError> {
    if letters.is_empty() {
        return Err(ColumnError::InvalidColumnLetters(String::new()));
    }
    let mut col: u64 = 0;
    for b in letters.bytes() {
        if !b.is_ascii_alphabetic() {
            return Err(ColumnError::InvalidColumnLetters(letters.to_string()));
        }
        let v = (b.to_ascii_uppercase() - b'A') as u64 + 1;
        // Saturation keeps absurdly long inputs from overflowing; anything that
        // saturates is far past any real column bound anyway.
        col = col.saturating_mul(26).saturating_add(v);
    }
    if col > max_col as u64 {
        return Err(ColumnError::ColumnOutOfRange(col, max_col));
    }
    Ok(col as u32)
}

/// Converts a 1-based column index to its letters (`1` -> `A`, `27` -> `AA`).
///
/// Fails when the index is zero or past [`EXCEL_MAX_COLS`].
pub fn column_to_letters(index: u32) -> Result<String, ColumnError> {
    column_to_letters_bounded(index, EXCEL_MAX_COLS)
}

pub(crate) fn column_to_letters_bounded(index: u32, max_col: u32) -> Result<String, ColumnError> {
    if index == 0 || index > max_col {
        return Err(ColumnError::ColumnOutOfRange(index as u64, max_col));
    }
    Ok(letters_unchecked(index))
}

/// Bijective base-26 rendering: subtract one before each divmod so there is no
/// zero digit.
pub(crate) fn letters_unchecked(index: u32) -> String {
    let mut n = index;
    let mut out = Vec::<u8>::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        out.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    out.reverse();
    String::from_utf8(out).expect("column letters are always valid UTF-8")
}
