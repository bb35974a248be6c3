//! Canonical serialization of references back to A1 text.
//!
//! Formatting is total for well-formed references and is the exact left
//! inverse of parsing: `parse(format(r)) == r` for every reference this crate
//! produces, and `format(parse(t))` is a fixed point of `parse . format`.

use crate::column;
use crate::reference::{CellRef, RangeRef, Reference};

/// Renders the canonical text for a reference.
///
/// Column letters are uppercase, `$` markers precede the parts whose absolute
/// flags are set, and the sheet name is single-quoted (internal quotes
/// doubled) only when it is not a bare identifier.
pub fn format(reference: &Reference) -> String {
    let mut out = String::new();
    if let Some(sheet) = &reference.sheet {
        push_sheet_prefix(&mut out, sheet);
    }
    push_range(&mut out, &reference.range);
    out
}

pub(crate) fn push_range(out: &mut String, range: &RangeRef) {
    push_cell(out, &range.from);
    if let Some(to) = &range.to {
        out.push(':');
        push_cell(out, to);
    }
}

pub(crate) fn push_cell(out: &mut String, cell: &CellRef) {
    if let Some(col) = cell.col {
        if cell.col_abs {
            out.push('$');
        }
        out.push_str(&column::letters_unchecked(col));
    }
    if let Some(row) = cell.row {
        if cell.row_abs {
            out.push('$');
        }
        out.push_str(&row.to_string());
    }
}

fn push_sheet_prefix(out: &mut String, sheet: &str) {
    if sheet_needs_quotes(sheet) {
        out.push('\'');
        for ch in sheet.chars() {
            if ch == '\'' {
                out.push('\'');
            }
            out.push(ch);
        }
        out.push('\'');
    } else {
        out.push_str(sheet);
    }
    out.push('!');
}

/// Quoting is required unless the name is a bare identifier: an ASCII letter
/// or `_` followed by ASCII letters, digits, or `_`.
fn sheet_needs_quotes(sheet: &str) -> bool {
    let mut chars = sheet.chars();
    match chars.next() {
        None => return true,
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return true,
    }
    chars.any(|c| !c.is_ascii_alphanumeric() && c != '_')
}
