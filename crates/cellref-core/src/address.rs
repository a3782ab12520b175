//! Cell address type and A1 codec

use crate::column;
use crate::error::{Axis, Error, Result};
use crate::{MAX_COLUMN, MAX_COLUMN_LETTERS, MAX_ROW, MAX_ROW_DIGITS};
use std::fmt;
use std::str::FromStr;

/// A cell address (e.g., "A1", "C7")
///
/// Both coordinates are 1-based: rows run 1..=9,999,999 and columns run
/// 1..=18,278 (A through ZZZ). An address can only be built through a checked
/// constructor, so every value of this type is inside both domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellAddress {
    row: u32,
    column: u32,
}

impl CellAddress {
    /// Create an address from numeric (row, column) coordinates
    ///
    /// # Examples
    /// ```
    /// use cellref_core::CellAddress;
    ///
    /// let addr = CellAddress::new(7, 3).unwrap();
    /// assert_eq!(addr.to_string(), "C7");
    /// assert!(CellAddress::new(0, 1).is_err());
    /// ```
    pub fn new(row: u32, column: u32) -> Result<Self> {
        if !(1..=MAX_ROW).contains(&row) {
            return Err(Error::domain(
                format!("({row}, {column})"),
                Axis::Row,
                u64::from(row),
                u64::from(MAX_ROW),
            ));
        }
        if !(1..=MAX_COLUMN).contains(&column) {
            return Err(Error::domain(
                format!("({row}, {column})"),
                Axis::Column,
                u64::from(column),
                u64::from(MAX_COLUMN),
            ));
        }
        Ok(Self { row, column })
    }

    pub(crate) fn new_unchecked(row: u32, column: u32) -> Self {
        debug_assert!((1..=MAX_ROW).contains(&row) && (1..=MAX_COLUMN).contains(&column));
        Self { row, column }
    }

    /// Row number (1-based)
    pub fn row(&self) -> u32 {
        self.row
    }

    /// Column number (1-based, A = 1)
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Numeric (row, column) form of this address
    pub fn to_rc(&self) -> (u32, u32) {
        (self.row, self.column)
    }

    /// Parse a cell address from A1-style notation
    ///
    /// The accepted grammar is 1-3 uppercase letters followed by 1-7 digits.
    /// No `$` markers, sheet prefixes or surrounding whitespace.
    ///
    /// # Examples
    /// ```
    /// use cellref_core::CellAddress;
    ///
    /// let addr = CellAddress::parse("AA10").unwrap();
    /// assert_eq!(addr.to_rc(), (10, 27));
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(Error::validation(s, "empty address"));
        }

        let bytes = s.as_bytes();
        let split = bytes
            .iter()
            .position(|b| !b.is_ascii_uppercase())
            .unwrap_or(bytes.len());

        if split == 0 {
            return Err(Error::validation(s, "no column letters"));
        }
        if split > MAX_COLUMN_LETTERS {
            return Err(Error::validation(s, "too many column letters"));
        }

        let digits = &s[split..];
        if digits.is_empty() {
            return Err(Error::validation(s, "no row number"));
        }
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::validation(s, "row number must be decimal digits"));
        }
        if digits.len() > MAX_ROW_DIGITS {
            return Err(Error::validation(s, "too many row digits"));
        }

        let column =
            column::decode(&s[..split]).map_err(|_| Error::validation(s, "invalid column letters"))?;

        // At most seven ASCII digits, so this cannot overflow
        let row = digits
            .bytes()
            .fold(0u32, |acc, b| acc * 10 + u32::from(b - b'0'));

        if row == 0 {
            return Err(Error::domain(s, Axis::Row, 0, u64::from(MAX_ROW)));
        }

        Ok(Self { row, column })
    }

    /// Check whether `s` is a valid A1 cell reference
    pub fn is_a1(s: &str) -> bool {
        Self::parse(s).is_ok()
    }

    /// Parse a parenthesized numeric reference such as `"(3, 4)"`
    ///
    /// The first number is the row and the second the column. A single space
    /// after the comma is optional.
    pub fn parse_rc_text(s: &str) -> Result<Self> {
        let inner = s
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| Error::validation(s, "expected '(row, column)'"))?;

        let (row, column) = inner
            .split_once(',')
            .ok_or_else(|| Error::validation(s, "expected '(row, column)'"))?;
        let column = column.strip_prefix(' ').unwrap_or(column);

        let row = parse_number(s, row, Axis::Row, MAX_ROW)?;
        let column = parse_number(s, column, Axis::Column, MAX_COLUMN)?;

        Ok(Self { row, column })
    }

    /// Format as A1-style string
    pub fn to_a1_string(&self) -> String {
        let mut result = column::encode_in_domain(self.column);
        result.push_str(&self.row.to_string());
        result
    }

    /// Format as a parenthesized `(row, column)` string
    pub fn to_rc_string(&self) -> String {
        format!("({}, {})", self.row, self.column)
    }

    /// Create a range from this address to another
    pub fn to(&self, other: CellAddress) -> crate::range::CellRangeRef {
        crate::range::CellRangeRef::span(*self, other)
    }
}

fn parse_number(input: &str, digits: &str, axis: Axis, max: u32) -> Result<u32> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::validation(input, "expected '(row, column)'"));
    }

    // Overlong digit strings only ever mean "too large"
    let value = digits.parse::<u64>().unwrap_or(u64::MAX);
    if value == 0 || value > u64::from(max) {
        return Err(Error::domain(input, axis, value, u64::from(max)));
    }

    Ok(value as u32)
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1_string())
    }
}

impl FromStr for CellAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<(u32, u32)> for CellAddress {
    type Error = Error;

    fn try_from((row, column): (u32, u32)) -> Result<Self> {
        Self::new(row, column)
    }
}

impl From<CellAddress> for (u32, u32) {
    fn from(addr: CellAddress) -> Self {
        addr.to_rc()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_cell_address_parse() {
        let addr = CellAddress::parse("A1").unwrap();
        assert_eq!(addr.row(), 1);
        assert_eq!(addr.column(), 1);

        let addr = CellAddress::parse("B2").unwrap();
        assert_eq!(addr.to_rc(), (2, 2));

        // Multi-letter, multi-digit coordinates
        let addr = CellAddress::parse("AB123").unwrap();
        assert_eq!(addr.to_rc(), (123, 28));

        let addr = CellAddress::parse("ZZZ9999999").unwrap();
        assert_eq!(addr.to_rc(), (9_999_999, 18_278));
    }

    #[test]
    fn test_cell_address_parse_errors() {
        for bad in [
            "", "A", "1", "a1", "$A$1", "A1B2", "A1:B2", " A1", "A1 ", "AAAA1", "A12345678",
            "A-1", "(1, 1)",
        ] {
            let err = CellAddress::parse(bad).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Validation, "input {bad:?}");
            assert_eq!(err.input(), Some(bad));
        }
    }

    #[test]
    fn test_cell_address_row_zero() {
        let err = CellAddress::parse("A0").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Domain);

        let err = CellAddress::parse("B0000000").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Domain);
    }

    #[test]
    fn test_leading_zeros_are_canonicalized() {
        let addr = CellAddress::parse("C007").unwrap();
        assert_eq!(addr.to_rc(), (7, 3));
        assert_eq!(addr.to_string(), "C7");
    }

    #[test]
    fn test_cell_address_new() {
        assert_eq!(CellAddress::new(7, 3).unwrap().to_string(), "C7");
        assert_eq!(
            CellAddress::new(0, 3).unwrap_err(),
            Error::Domain {
                input: "(0, 3)".into(),
                axis: Axis::Row,
                value: 0,
                max: 9_999_999,
            }
        );
        assert_eq!(CellAddress::new(1, 0).unwrap_err().kind(), ErrorKind::Domain);
        assert_eq!(
            CellAddress::new(1, 18_279).unwrap_err().kind(),
            ErrorKind::Domain
        );
        assert_eq!(
            CellAddress::new(10_000_000, 1).unwrap_err().kind(),
            ErrorKind::Domain
        );
    }

    #[test]
    fn test_cell_address_display() {
        assert_eq!(CellAddress::new(1, 1).unwrap().to_string(), "A1");
        assert_eq!(CellAddress::new(100, 3).unwrap().to_string(), "C100");
        assert_eq!(CellAddress::new(5, 702).unwrap().to_a1_string(), "ZZ5");
        assert_eq!(CellAddress::new(5, 702).unwrap().to_rc_string(), "(5, 702)");
    }

    #[test]
    fn test_parse_rc_text() {
        let addr = CellAddress::parse_rc_text("(3, 4)").unwrap();
        assert_eq!(addr.to_string(), "D3");
        assert_eq!(CellAddress::parse_rc_text("(3,4)").unwrap(), addr);

        for bad in ["3, 4", "(3 4)", "(3,  4)", "(, 4)", "(3, x)", "(-1, 2)", "( 3, 4)"] {
            assert_eq!(
                CellAddress::parse_rc_text(bad).unwrap_err().kind(),
                ErrorKind::Validation,
                "input {bad:?}"
            );
        }

        for bad in ["(0, 4)", "(3, 0)", "(3, 18279)", "(99999999999999999999999, 1)"] {
            assert_eq!(
                CellAddress::parse_rc_text(bad).unwrap_err().kind(),
                ErrorKind::Domain,
                "input {bad:?}"
            );
        }
    }

    #[test]
    fn test_is_a1() {
        assert!(CellAddress::is_a1("A1"));
        assert!(CellAddress::is_a1("XFD1048576"));
        assert!(!CellAddress::is_a1("A0"));
        assert!(!CellAddress::is_a1("A1:B2"));
    }

    #[test]
    fn test_tuple_conversions() {
        let addr = CellAddress::try_from((2, 28)).unwrap();
        assert_eq!(addr.to_string(), "AB2");
        let rc: (u32, u32) = addr.into();
        assert_eq!(rc, (2, 28));
        assert!(CellAddress::try_from((0, 0)).is_err());
    }
}
