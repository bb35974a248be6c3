//! A1 reference tokenizer and parser.
//!
//! The grammar is scanned left to right with a single cursor and no
//! backtracking: column letters always precede row digits, so the first
//! character that fails to match its expected token class is the error
//! position. A reference is an optional sheet prefix (`Sheet1!` or
//! `'My Sheet'!`) followed by one endpoint or two endpoints joined by `:`.

use thiserror::Error;

use crate::column::{self, ColumnError};
use crate::reference::{CellRef, RangeRef, Reference, EXCEL_MAX_COLS, EXCEL_MAX_ROWS};

/// Limits and policy knobs for [`parse_with`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ParseOptions {
    /// Highest accepted 1-based column index.
    pub max_col: u32,
    /// Highest accepted 1-based row index.
    pub max_row: u32,
    /// Reject ranges whose sides are different kinds (`A1:B`, `A:3`).
    ///
    /// Spreadsheet dialects disagree on mixed-kind ranges; the default is the
    /// lenient reading, which accepts them.
    pub strict_range_kinds: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_col: EXCEL_MAX_COLS,
            max_row: EXCEL_MAX_ROWS,
            strict_range_kinds: false,
        }
    }
}

/// Why and where parsing failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{kind} at offset {pos}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// Byte offset of the first character that failed to match.
    pub pos: usize,
}

impl ParseError {
    const fn new(kind: ParseErrorKind, pos: usize) -> Self {
        Self { kind, pos }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// The input (or the part after `!`) was empty.
    #[error("empty reference")]
    EmptyReference,
    /// A character outside the expected token class.
    #[error("unexpected character")]
    UnexpectedCharacter,
    /// A quoted sheet name with no closing quote.
    #[error("unterminated quoted sheet name")]
    UnterminatedQuote,
    /// Digits or letters past the configured row/column maximum.
    #[error("row or column out of range")]
    RowOrColumnOutOfRange,
    /// A `:` with nothing after it, or mismatched range sides under strict
    /// kind matching.
    #[error("malformed range")]
    MalformedRange,
}

/// Parses an A1 reference under the default Excel limits.
pub fn parse(text: &str) -> Result<Reference, ParseError> {
    parse_with(text, &ParseOptions::default())
}

/// Parses an A1 reference under explicit limits and policies.
pub fn parse_with(text: &str, opts: &ParseOptions) -> Result<Reference, ParseError> {
    if text.is_empty() {
        return Err(ParseError::new(ParseErrorKind::EmptyReference, 0));
    }

    let (sheet, start) = parse_sheet_prefix(text)?;
    let mut scanner = Scanner {
        src: text,
        bytes: text.as_bytes(),
        pos: start,
    };
    if scanner.pos == scanner.bytes.len() {
        // `Sheet1!` with nothing after the bang.
        return Err(ParseError::new(ParseErrorKind::EmptyReference, scanner.pos));
    }

    let from = scanner.cell_or_axis(opts)?;
    let mut to = None;
    if scanner.peek() == Some(b':') {
        let colon = scanner.pos;
        scanner.pos += 1;
        if scanner.pos == scanner.bytes.len() {
            return Err(ParseError::new(ParseErrorKind::MalformedRange, colon));
        }
        let side = scanner.cell_or_axis(opts)?;
        if opts.strict_range_kinds && side.kind() != from.kind() {
            return Err(ParseError::new(ParseErrorKind::MalformedRange, colon));
        }
        to = Some(side);
    }
    if scanner.pos != scanner.bytes.len() {
        return Err(ParseError::new(
            ParseErrorKind::UnexpectedCharacter,
            scanner.pos,
        ));
    }

    Ok(Reference {
        sheet,
        range: RangeRef { from, to },
    })
}

/// Splits off an optional sheet prefix, returning the unquoted name and the
/// byte offset where the range part starts.
fn parse_sheet_prefix(text: &str) -> Result<(Option<String>, usize), ParseError> {
    if text.as_bytes()[0] == b'\'' {
        return parse_quoted_prefix(text).map(|(name, rest)| (Some(name), rest));
    }

    match text.find('!') {
        None => Ok((None, 0)),
        Some(0) => Err(ParseError::new(ParseErrorKind::UnexpectedCharacter, 0)),
        Some(bang) => {
            let name = &text[..bang];
            if name.contains(':') || name.contains('\'') {
                // Not a valid bare sheet name; parse the text as a range part
                // so the stray `!` is reported at its own position.
                return Ok((None, 0));
            }
            Ok((Some(name.to_string()), bang + 1))
        }
    }
}

/// Scans a quoted sheet name (`'My Sheet'!`), unescaping doubled quotes.
fn parse_quoted_prefix(text: &str) -> Result<(String, usize), ParseError> {
    let mut chars = text.char_indices().peekable();
    chars.next(); // opening quote
    let mut name = String::new();
    loop {
        match chars.next() {
            None => return Err(ParseError::new(ParseErrorKind::UnterminatedQuote, 0)),
            Some((i, '\'')) => {
                if matches!(chars.peek(), Some((_, '\''))) {
                    chars.next();
                    name.push('\'');
                    continue;
                }
                // Closing quote: a `!` must follow, and the name must not be
                // empty.
                if name.is_empty() {
                    return Err(ParseError::new(ParseErrorKind::UnexpectedCharacter, 1));
                }
                return match chars.next() {
                    Some((bang, '!')) => Ok((name, bang + 1)),
                    Some((j, _)) => Err(ParseError::new(ParseErrorKind::UnexpectedCharacter, j)),
                    None => Err(ParseError::new(ParseErrorKind::UnexpectedCharacter, i + 1)),
                };
            }
            Some((_, c)) => name.push(c),
        }
    }
}

struct Scanner<'a> {
    src: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl Scanner<'_> {
    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    /// Scans one endpoint: `$A$1`, `A1`, `$A`, `A`, `$3`, or `3`.
    fn cell_or_axis(&mut self, opts: &ParseOptions) -> Result<CellRef, ParseError> {
        let mut leading_abs = false;
        if self.peek() == Some(b'$') {
            leading_abs = true;
            self.pos += 1;
        }

        let letters_start = self.pos;
        while matches!(self.peek(), Some(b) if b.is_ascii_alphabetic()) {
            self.pos += 1;
        }
        let letters = &self.src[letters_start..self.pos];

        let mut row_marker = false;
        let marker_pos = self.pos;
        if !letters.is_empty() && self.peek() == Some(b'$') {
            row_marker = true;
            self.pos += 1;
        }

        let digits_start = self.pos;
        while matches!(self.peek(), Some(b) if b.is_ascii_digit()) {
            self.pos += 1;
        }
        let digits = &self.src[digits_start..self.pos];

        match (letters.is_empty(), digits.is_empty()) {
            (true, true) => Err(ParseError::new(
                ParseErrorKind::UnexpectedCharacter,
                self.pos,
            )),
            (false, true) => {
                if row_marker {
                    // `$A$` with no row digits after the second marker.
                    return Err(ParseError::new(
                        ParseErrorKind::UnexpectedCharacter,
                        marker_pos,
                    ));
                }
                let col = convert_column(letters, letters_start, opts)?;
                Ok(CellRef {
                    col: Some(col),
                    row: None,
                    col_abs: leading_abs,
                    row_abs: false,
                })
            }
            (true, false) => {
                let row = convert_row(digits, digits_start, opts)?;
                Ok(CellRef {
                    col: None,
                    row: Some(row),
                    col_abs: false,
                    row_abs: leading_abs,
                })
            }
            (false, false) => {
                let col = convert_column(letters, letters_start, opts)?;
                let row = convert_row(digits, digits_start, opts)?;
                Ok(CellRef {
                    col: Some(col),
                    row: Some(row),
                    col_abs: leading_abs,
                    row_abs: row_marker,
                })
            }
        }
    }
}

fn convert_column(letters: &str, pos: usize, opts: &ParseOptions) -> Result<u32, ParseError> {
    column::column_to_index_bounded(letters, opts.max_col).map_err(|e| match e {
        // The scanner only hands over `A`-`Z`/`a`-`z` runs, so the sole
        // reachable failure is the bound check.
        ColumnError::InvalidColumnLetters(_) | ColumnError::ColumnOutOfRange(..) => {
            ParseError::new(ParseErrorKind::RowOrColumnOutOfRange, pos)
        }
    })
}

fn convert_row(digits: &str, pos: usize, opts: &ParseOptions) -> Result<u32, ParseError> {
    let row: u32 = digits
        .parse()
        .map_err(|_| ParseError::new(ParseErrorKind::RowOrColumnOutOfRange, pos))?;
    if row == 0 || row > opts.max_row {
        return Err(ParseError::new(ParseErrorKind::RowOrColumnOutOfRange, pos));
    }
    Ok(row)
}
