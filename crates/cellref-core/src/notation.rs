//! Batch notation conversion
//!
//! Inputs are a closed set of shapes: one textual reference, one numeric
//! reference, or a list mixing both. Every element is normalized to a single
//! target [`Notation`]. Lists are fail-fast: the first bad element aborts the
//! whole call and the error carries its position.
//!
//! With the `parallel` feature, list elements are converted on the rayon pool.
//! The reported error is still the lowest failing position.

use crate::address::CellAddress;
use crate::error::{Error, Result};
use std::fmt;

/// Target notation for [`convert`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notation {
    /// Textual `"C7"`
    A1,
    /// Numeric `(7, 3)`
    Rc,
}

/// A single cell reference in either notation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CellRef {
    /// Textual A1 reference (not yet validated)
    A1(String),
    /// Numeric (row, column) reference (not yet validated)
    Rc(u32, u32),
}

impl CellRef {
    /// Validate this reference and return its address
    pub fn resolve(&self) -> Result<CellAddress> {
        match self {
            CellRef::A1(text) => CellAddress::parse(text),
            CellRef::Rc(row, column) => CellAddress::new(*row, *column),
        }
    }

    /// Render an address in the requested notation
    pub fn from_address(addr: CellAddress, target: Notation) -> Self {
        match target {
            Notation::A1 => CellRef::A1(addr.to_a1_string()),
            Notation::Rc => {
                let (row, column) = addr.to_rc();
                CellRef::Rc(row, column)
            }
        }
    }

    /// Validate and re-render in the requested notation
    pub fn to_notation(&self, target: Notation) -> Result<Self> {
        self.resolve().map(|addr| Self::from_address(addr, target))
    }

    pub fn notation(&self) -> Notation {
        match self {
            CellRef::A1(_) => Notation::A1,
            CellRef::Rc(..) => Notation::Rc,
        }
    }
}

impl From<&str> for CellRef {
    fn from(s: &str) -> Self {
        CellRef::A1(s.to_string())
    }
}

impl From<String> for CellRef {
    fn from(s: String) -> Self {
        CellRef::A1(s)
    }
}

impl From<(u32, u32)> for CellRef {
    fn from((row, column): (u32, u32)) -> Self {
        CellRef::Rc(row, column)
    }
}

impl From<CellAddress> for CellRef {
    fn from(addr: CellAddress) -> Self {
        CellRef::from_address(addr, Notation::A1)
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellRef::A1(text) => f.write_str(text),
            CellRef::Rc(row, column) => write!(f, "({row}, {column})"),
        }
    }
}

/// Input accepted by [`convert`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellInput {
    Single(CellRef),
    List(Vec<CellRef>),
}

impl<T: Into<CellRef>> From<Vec<T>> for CellInput {
    fn from(refs: Vec<T>) -> Self {
        CellInput::List(refs.into_iter().map(Into::into).collect())
    }
}

impl From<CellRef> for CellInput {
    fn from(r: CellRef) -> Self {
        CellInput::Single(r)
    }
}

/// Output of [`convert`], mirroring the input shape
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Converted {
    Single(CellRef),
    List(Vec<CellRef>),
}

impl Converted {
    /// Flatten into a list, wrapping a single result
    pub fn into_vec(self) -> Vec<CellRef> {
        match self {
            Converted::Single(r) => vec![r],
            Converted::List(refs) => refs,
        }
    }
}

/// Normalize every reference in `input` to `target`
///
/// A single input fails exactly as [`CellAddress::parse`] or
/// [`CellAddress::new`] would. A list input fails with the first failing
/// element's error wrapped in [`Error::AtIndex`].
///
/// # Examples
/// ```
/// use cellref_core::notation::{convert, CellInput, CellRef, Converted, Notation};
///
/// let input = CellInput::List(vec![CellRef::from("B3"), CellRef::Rc(1, 28)]);
/// let out = convert(input, Notation::A1).unwrap();
/// assert_eq!(
///     out,
///     Converted::List(vec![CellRef::from("B3"), CellRef::from("AB1")])
/// );
///
/// let err = convert(vec!["A1", "ZZZZ1"].into(), Notation::Rc).unwrap_err();
/// assert_eq!(err.index(), Some(1));
/// ```
pub fn convert(input: CellInput, target: Notation) -> Result<Converted> {
    match input {
        CellInput::Single(r) => r.to_notation(target).map(Converted::Single),
        CellInput::List(refs) => convert_list(&refs, target).map(Converted::List),
    }
}

/// Resolve every reference to an address, fail-fast
pub fn resolve_list(refs: &[CellRef]) -> Result<Vec<CellAddress>> {
    tracing::trace!("Resolving {} reference(s)", refs.len());
    let results = map_elements(refs, CellRef::resolve);
    first_error(results)
}

/// Convert every reference to `target`, fail-fast
pub fn convert_list(refs: &[CellRef], target: Notation) -> Result<Vec<CellRef>> {
    let addrs = resolve_list(refs)?;
    Ok(addrs
        .into_iter()
        .map(|addr| CellRef::from_address(addr, target))
        .collect())
}

/// Report, for each text, whether it is a valid A1 reference
///
/// A predicate, so invalid elements yield `false` rather than an error.
pub fn classify<I, S>(texts: I) -> Vec<bool>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    texts
        .into_iter()
        .map(|t| CellAddress::is_a1(t.as_ref()))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn map_elements<F>(refs: &[CellRef], f: F) -> Vec<Result<CellAddress>>
where
    F: Fn(&CellRef) -> Result<CellAddress>,
{
    refs.iter().map(f).collect()
}

#[cfg(feature = "parallel")]
fn map_elements<F>(refs: &[CellRef], f: F) -> Vec<Result<CellAddress>>
where
    F: Fn(&CellRef) -> Result<CellAddress> + Sync + Send,
{
    use rayon::prelude::*;

    refs.par_iter().map(f).collect()
}

fn first_error(results: Vec<Result<CellAddress>>) -> Result<Vec<CellAddress>> {
    let mut addrs = Vec::with_capacity(results.len());
    for (index, result) in results.into_iter().enumerate() {
        match result {
            Ok(addr) => addrs.push(addr),
            Err(e) => {
                tracing::debug!("Conversion failed at element {index}: {e}");
                return Err(e.at_index(index));
            }
        }
    }
    Ok(addrs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_single_matches_codec() {
        let out = convert(CellRef::from("C7").into(), Notation::Rc).unwrap();
        assert_eq!(out, Converted::Single(CellRef::Rc(7, 3)));

        let out = convert(CellRef::Rc(7, 3).into(), Notation::A1).unwrap();
        assert_eq!(out, Converted::Single(CellRef::from("C7")));

        let err = convert(CellRef::from("A1B2").into(), Notation::Rc).unwrap_err();
        assert_eq!(err, CellAddress::parse("A1B2").unwrap_err());
        assert_eq!(err.index(), None);
    }

    #[test]
    fn test_mixed_list() {
        let input = CellInput::List(vec![
            CellRef::from("A1"),
            CellRef::Rc(2, 27),
            CellRef::from("ZZZ9999999"),
        ]);

        let out = convert(input.clone(), Notation::Rc).unwrap();
        assert_eq!(
            out.into_vec(),
            vec![
                CellRef::Rc(1, 1),
                CellRef::Rc(2, 27),
                CellRef::Rc(9_999_999, 18_278)
            ]
        );

        let out = convert(input, Notation::A1).unwrap();
        assert_eq!(
            out.into_vec(),
            vec![
                CellRef::from("A1"),
                CellRef::from("AA2"),
                CellRef::from("ZZZ9999999")
            ]
        );
    }

    #[test]
    fn test_fail_fast_reports_first_position() {
        let err = convert(vec!["A1", "ZZZZ1"].into(), Notation::A1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.index(), Some(1));
        assert_eq!(err.input(), Some("ZZZZ1"));

        let input = CellInput::List(vec![
            CellRef::from("B2"),
            CellRef::Rc(0, 1),
            CellRef::from("bad"),
        ]);
        let err = convert(input, Notation::A1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Domain);
        assert_eq!(err.index(), Some(1));
    }

    #[test]
    fn test_empty_list() {
        let out = convert(CellInput::List(Vec::new()), Notation::A1).unwrap();
        assert_eq!(out, Converted::List(Vec::new()));
    }

    #[test]
    fn test_classify() {
        assert_eq!(
            classify(["A1", "A0", "a1", "B2:C3", "XFD1"]),
            vec![true, false, false, false, true]
        );
    }

    #[test]
    fn test_cell_ref_display() {
        assert_eq!(CellRef::Rc(3, 4).to_string(), "(3, 4)");
        assert_eq!(CellRef::from("D3").to_string(), "D3");
        assert_eq!(CellRef::from("D3").notation(), Notation::A1);
    }
}
