//! Range references and range expansion
//!
//! A range expression is a comma-separated list of tokens, each either a
//! single cell (`B7`) or a rectangular span (`A1:C3`). Expanding an expression
//! yields a [`RangeSet`]: every address of every token, tokens left to right,
//! each span enumerated row by row.
//!
//! ```
//! use cellref_core::RangeSet;
//!
//! let set = RangeSet::parse("A1,B2:C3").unwrap();
//! let cells: Vec<String> = set.iter().map(|a| a.to_string()).collect();
//! assert_eq!(cells, ["A1", "B2", "C2", "B3", "C3"]);
//! ```

use crate::address::CellAddress;
use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// One token of a range expression
///
/// A span keeps its endpoints exactly as written; `B3:A1` and `A1:B3` cover
/// the same rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellRangeRef {
    /// A single cell (`B7`)
    Cell(CellAddress),
    /// A rectangular span between two corners (`A1:C3`)
    Span {
        start: CellAddress,
        end: CellAddress,
    },
}

impl CellRangeRef {
    /// Create a span between two corners
    pub fn span(start: CellAddress, end: CellAddress) -> Self {
        CellRangeRef::Span { start, end }
    }

    /// Parse a single token: `A1` or `A1:B2`
    pub fn parse(s: &str) -> Result<Self> {
        let mut parts = s.split(':');
        let first = parts.next().unwrap_or_default();

        match (parts.next(), parts.next()) {
            (None, _) => Ok(CellRangeRef::Cell(CellAddress::parse(first)?)),
            (Some(second), None) => {
                let start = CellAddress::parse(first)?;
                let end = CellAddress::parse(second)?;
                Ok(CellRangeRef::Span { start, end })
            }
            (Some(_), Some(_)) => Err(Error::validation(s, "more than one ':' in range token")),
        }
    }

    /// Top-left corner of the covered rectangle
    pub fn top_left(&self) -> CellAddress {
        match *self {
            CellRangeRef::Cell(addr) => addr,
            CellRangeRef::Span { start, end } => corner(
                start.row().min(end.row()),
                start.column().min(end.column()),
            ),
        }
    }

    /// Bottom-right corner of the covered rectangle
    pub fn bottom_right(&self) -> CellAddress {
        match *self {
            CellRangeRef::Cell(addr) => addr,
            CellRangeRef::Span { start, end } => corner(
                start.row().max(end.row()),
                start.column().max(end.column()),
            ),
        }
    }

    /// Get the number of rows covered
    pub fn row_count(&self) -> u32 {
        self.bottom_right().row() - self.top_left().row() + 1
    }

    /// Get the number of columns covered
    pub fn col_count(&self) -> u32 {
        self.bottom_right().column() - self.top_left().column() + 1
    }

    /// Get the total number of cells covered
    pub fn cell_count(&self) -> u64 {
        u64::from(self.row_count()) * u64::from(self.col_count())
    }

    /// Check if a cell is within this range
    pub fn contains(&self, addr: &CellAddress) -> bool {
        let (lo, hi) = (self.top_left(), self.bottom_right());
        (lo.row()..=hi.row()).contains(&addr.row())
            && (lo.column()..=hi.column()).contains(&addr.column())
    }

    /// Iterate over all cell addresses in the range (row by row)
    pub fn cells(&self) -> CellRangeIterator {
        let (lo, hi) = (self.top_left(), self.bottom_right());
        CellRangeIterator {
            col_lo: lo.column(),
            col_hi: hi.column(),
            row_hi: hi.row(),
            current_row: lo.row(),
            current_col: lo.column(),
            remaining: self.cell_count(),
        }
    }

    /// Format as A1 or A1:B10 string, keeping the corners as written
    pub fn to_a1_string(&self) -> String {
        match self {
            CellRangeRef::Cell(addr) => addr.to_a1_string(),
            CellRangeRef::Span { start, end } => {
                format!("{}:{}", start.to_a1_string(), end.to_a1_string())
            }
        }
    }
}

// Corners are mixed from in-domain coordinates, so they are in-domain too.
fn corner(row: u32, column: u32) -> CellAddress {
    CellAddress::new_unchecked(row, column)
}

impl From<CellAddress> for CellRangeRef {
    fn from(addr: CellAddress) -> Self {
        CellRangeRef::Cell(addr)
    }
}

impl fmt::Display for CellRangeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1_string())
    }
}

impl FromStr for CellRangeRef {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Iterator over cells in a range, row-major
pub struct CellRangeIterator {
    col_lo: u32,
    col_hi: u32,
    row_hi: u32,
    current_row: u32,
    current_col: u32,
    remaining: u64,
}

impl Iterator for CellRangeIterator {
    type Item = CellAddress;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 || self.current_row > self.row_hi {
            return None;
        }

        let addr = corner(self.current_row, self.current_col);
        self.remaining -= 1;

        // Move to next cell
        if self.current_col == self.col_hi {
            self.current_col = self.col_lo;
            self.current_row += 1;
        } else {
            self.current_col += 1;
        }

        Some(addr)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

/// An expanded range expression
///
/// Addresses appear in token order and, within a span, row-major. Overlapping
/// tokens are not deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RangeSet {
    cells: Vec<CellAddress>,
}

impl RangeSet {
    /// Expand a range expression such as `"A1,B2:B3"`
    ///
    /// Fails on the first malformed token; nothing is returned for the
    /// tokens before it.
    pub fn parse(s: &str) -> Result<Self> {
        let tokens = s
            .split(',')
            .map(CellRangeRef::parse)
            .collect::<Result<Vec<_>>>()?;

        let mut cells = Vec::new();
        for token in &tokens {
            cells.extend(token.cells());
        }

        tracing::debug!(
            "Expanded '{}' into {} cell(s) from {} token(s)",
            s,
            cells.len(),
            tokens.len()
        );

        Ok(Self { cells })
    }

    /// Check whether `s` is a valid range expression
    pub fn is_range(s: &str) -> bool {
        s.split(',').all(|token| CellRangeRef::parse(token).is_ok())
    }

    /// Build a set from numeric (row, column) pairs, validating each
    pub fn from_coordinates<I>(coords: I) -> Result<Self>
    where
        I: IntoIterator<Item = (u32, u32)>,
    {
        let cells = coords
            .into_iter()
            .enumerate()
            .map(|(i, rc)| CellAddress::try_from(rc).map_err(|e| e.at_index(i)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { cells })
    }

    /// Numeric (row, column) pairs, in set order
    pub fn to_coordinates(&self) -> Vec<(u32, u32)> {
        self.cells.iter().map(CellAddress::to_rc).collect()
    }

    /// Comma-joined A1 text of every address
    ///
    /// Spans are not reconstructed: `A1:B1` formats as `A1,B1`.
    pub fn format(&self) -> String {
        self.cells
            .iter()
            .map(CellAddress::to_a1_string)
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Pair each address with the value at the same position
    ///
    /// The value count must equal the cell count.
    pub fn bind<V>(&self, values: Vec<V>) -> Result<Vec<(CellAddress, V)>> {
        if values.len() != self.cells.len() {
            return Err(Error::Mismatch {
                cells: self.cells.len(),
                values: values.len(),
            });
        }
        Ok(self.cells.iter().copied().zip(values).collect())
    }

    /// Pair every address with a copy of one value
    pub fn fill<V: Clone>(&self, value: V) -> Vec<(CellAddress, V)> {
        self.cells
            .iter()
            .map(|addr| (*addr, value.clone()))
            .collect()
    }

    /// Get the number of addresses
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the set has no addresses
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over the addresses in order
    pub fn iter(&self) -> std::slice::Iter<'_, CellAddress> {
        self.cells.iter()
    }

    pub fn as_slice(&self) -> &[CellAddress] {
        &self.cells
    }

    pub fn into_vec(self) -> Vec<CellAddress> {
        self.cells
    }
}

impl From<Vec<CellAddress>> for RangeSet {
    fn from(cells: Vec<CellAddress>) -> Self {
        Self { cells }
    }
}

impl FromIterator<CellAddress> for RangeSet {
    fn from_iter<I: IntoIterator<Item = CellAddress>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for RangeSet {
    type Item = CellAddress;
    type IntoIter = std::vec::IntoIter<CellAddress>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}

impl<'a> IntoIterator for &'a RangeSet {
    type Item = &'a CellAddress;
    type IntoIter = std::slice::Iter<'a, CellAddress>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

impl fmt::Display for RangeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format())
    }
}

impl FromStr for RangeSet {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
