//! # cellref-core
//!
//! Spreadsheet cell-reference algebra.
//!
//! This crate provides the pure, stateless conversions that workbook tooling
//! is built on:
//! - [`column`] - Column index <-> letters (1 = A, 27 = AA, 18278 = ZZZ)
//! - [`CellAddress`] - A1 text <-> numeric (row, column)
//! - [`CellRangeRef`] and [`RangeSet`] - Range tokens and their expansion
//! - [`notation`] - Fail-fast batch conversion between notations
//!
//! ## Example
//!
//! ```rust
//! use cellref_core::{CellAddress, RangeSet};
//!
//! let addr = CellAddress::parse("C7").unwrap();
//! assert_eq!(addr.to_rc(), (7, 3));
//!
//! let set = RangeSet::parse("A1:B2").unwrap();
//! let cells: Vec<String> = set.iter().map(|a| a.to_string()).collect();
//! assert_eq!(cells, ["A1", "B1", "A2", "B2"]);
//!
//! // Pair the expanded cells with the values to write into them
//! let bound = set.bind(vec![1.0, 2.0, 3.0, 4.0]).unwrap();
//! assert_eq!(bound[3].0.to_string(), "B2");
//! ```

pub mod address;
pub mod column;
pub mod error;
pub mod notation;
pub mod range;

// Re-exports for convenience
pub use address::CellAddress;
pub use error::{Axis, Error, ErrorKind, Result};
pub use notation::{CellInput, CellRef, Converted, Notation};
pub use range::{CellRangeIterator, CellRangeRef, RangeSet};

/// Largest column index (ZZZ)
pub const MAX_COLUMN: u32 = 18_278;

/// Largest row number (seven digits)
pub const MAX_ROW: u32 = 9_999_999;

/// Maximum number of letters in a column spelling
pub const MAX_COLUMN_LETTERS: usize = 3;

/// Maximum number of digits in a row number
pub const MAX_ROW_DIGITS: usize = 7;
