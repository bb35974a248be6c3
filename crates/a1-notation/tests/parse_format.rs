use a1_notation::{
    column_to_index, parse, parse_with, CellRef, ColumnError, ParseErrorKind, ParseOptions,
    RangeRef, Reference,
};
use pretty_assertions::assert_eq;

#[test]
fn plain_cell_reference() {
    let r = parse("A1").unwrap();
    assert_eq!(
        r,
        Reference {
            sheet: None,
            range: RangeRef::single(CellRef::new(1, 1)),
        }
    );
}

#[test]
fn absolute_cell_round_trips() {
    let r = parse("$B$2").unwrap();
    assert_eq!(r.range.from, CellRef::new(2, 2).absolute());
    assert_eq!(r.to_a1(), "$B$2");
}

#[test]
fn sheet_qualified_range() {
    let r = parse("Sheet1!C3:D4").unwrap();
    assert_eq!(r.sheet.as_deref(), Some("Sheet1"));
    assert_eq!(
        r.range,
        RangeRef::span(CellRef::new(3, 3), CellRef::new(4, 4))
    );
    assert_eq!(r.to_short_string(), "C3:D4");
    assert_eq!(r.to_a1(), "Sheet1!C3:D4");
}

#[test]
fn quoted_sheet_name_is_unquoted() {
    let r = parse("'My Sheet'!A1").unwrap();
    assert_eq!(r.sheet.as_deref(), Some("My Sheet"));
    assert_eq!(r.to_a1(), "'My Sheet'!A1");
}

#[test]
fn whole_column_range() {
    let r = parse("A:A").unwrap();
    assert_eq!(
        r.range,
        RangeRef::span(CellRef::col_only(1), CellRef::col_only(1))
    );
    assert_eq!(r.range.width(), Some(1));
    assert_eq!(r.range.height(), None);
}

#[test]
fn multi_letter_column() {
    let r = parse("AA1").unwrap();
    assert_eq!(r.range.from.col, Some(27));
}

#[test]
fn rejected_inputs() {
    for bad in ["", "$", "A1:"] {
        assert!(parse(bad).is_err(), "{bad:?} should not parse");
    }
    assert_eq!(parse("").unwrap_err().kind, ParseErrorKind::EmptyReference);
    assert!(matches!(
        column_to_index(""),
        Err(ColumnError::InvalidColumnLetters(_))
    ));
    assert!(matches!(
        column_to_index("AAAAAAAAAAAAAAAA"),
        Err(ColumnError::ColumnOutOfRange(..))
    ));
}

#[test]
fn normalization_is_idempotent() {
    // Inputs that are valid but not canonical: lowercase letters, redundant
    // quoting is not produced, leading zeros in rows collapse.
    for (input, canonical) in [
        ("a1", "A1"),
        ("$b$2", "$B$2"),
        ("sheet1!c3:d4", "sheet1!C3:D4"),
        ("A01", "A1"),
        ("'Sheet1'!A1", "Sheet1!A1"),
    ] {
        let first = parse(input).unwrap();
        let text = first.to_a1();
        assert_eq!(text, canonical);
        let second = parse(&text).unwrap();
        assert_eq!(second, first);
        assert_eq!(second.to_a1(), text);
    }
}

#[test]
fn mixed_kind_range_policy() {
    // Lenient by default; `strict_range_kinds` turns mixed sides into errors.
    assert!(parse("A1:B").is_ok());
    let strict = ParseOptions {
        strict_range_kinds: true,
        ..ParseOptions::default()
    };
    assert_eq!(
        parse_with("A1:B", &strict).unwrap_err().kind,
        ParseErrorKind::MalformedRange
    );
}

#[test]
fn display_and_fromstr_agree_with_parse_and_format() {
    let r: Reference = "Sheet1!$A$1:$D$10".parse().unwrap();
    assert_eq!(r.to_string(), "Sheet1!$A$1:$D$10");
    assert_eq!(format!("{}", r.range), "$A$1:$D$10");
    assert_eq!(format!("{}", r.range.from), "$A$1");
}

#[test]
fn reference_survives_a_json_round_trip() {
    let r = parse("'Jon''s Data'!$A1:B$2").unwrap();
    let json = serde_json::to_string(&r).unwrap();
    let back: Reference = serde_json::from_str(&json).unwrap();
    assert_eq!(back, r);
    assert_eq!(back.to_a1(), "'Jon''s Data'!$A1:B$2");
}
