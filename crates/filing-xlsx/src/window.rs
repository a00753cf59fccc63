//! Column window.
//!
//! [`ColumnWindow`] is the ordered run of cells read from one worksheet column,
//! coerced to numbers. Coercion is a non-strict cast: anything that does not
//! parse as a number becomes an undefined value instead of an error.

use filing_core::{FilingError, Result};
use polars::prelude::*;
use thiserror::Error;

/// Read past the end of a [`ColumnWindow`].
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
#[error("offset {offset} is outside a window of {len} rows")]
pub struct OutOfRange {
    /// Requested offset.
    pub offset: usize,
    /// Number of rows in the window.
    pub len: usize,
}

/// Numeric values of a worksheet column, window row 0 first.
#[derive(Clone, Debug)]
pub struct ColumnWindow {
    values: Series,
}

impl ColumnWindow {
    /// Builds a window from cell text.
    ///
    /// `None` marks an empty cell. Text is trimmed, then cast to `f64`;
    /// text that does not parse becomes undefined.
    pub fn from_text<I, S>(cells: I) -> Result<Self>
    where
        I: IntoIterator<Item = Option<S>>,
        S: AsRef<str>,
    {
        let text: Vec<Option<String>> = cells
            .into_iter()
            .map(|cell| cell.map(|s| s.as_ref().trim().to_string()))
            .collect();

        let values = Series::new("value".into(), text)
            .cast(&DataType::Float64)
            .map_err(|e| FilingError::Parse(e.to_string()))?;

        Ok(Self { values })
    }

    /// Returns the number of rows in the window.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the window has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the value at `offset`.
    ///
    /// `Ok(None)` is an undefined value (empty or non-numeric cell);
    /// `Err` means the window does not reach `offset`.
    pub fn value(&self, offset: usize) -> std::result::Result<Option<f64>, OutOfRange> {
        if offset >= self.len() {
            return Err(OutOfRange {
                offset,
                len: self.len(),
            });
        }

        Ok(self
            .values
            .f64()
            .ok()
            .and_then(|column| column.get(offset))
            .filter(|v| !v.is_nan()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_numeric_text() {
        let window = ColumnWindow::from_text([Some("12345.6"), Some(" 42 "), Some("-7")]).unwrap();

        assert_eq!(window.len(), 3);
        assert_relative_eq!(window.value(0).unwrap().unwrap(), 12345.6);
        assert_relative_eq!(window.value(1).unwrap().unwrap(), 42.0);
        assert_relative_eq!(window.value(2).unwrap().unwrap(), -7.0);
    }

    #[test]
    fn test_non_numeric_is_undefined() {
        let window =
            ColumnWindow::from_text([Some("Revenue"), None, Some(""), Some("1,234")]).unwrap();

        assert_eq!(window.len(), 4);
        for offset in 0..4 {
            assert_eq!(window.value(offset), Ok(None));
        }
    }

    #[test]
    fn test_out_of_range() {
        let window = ColumnWindow::from_text([Some("1")]).unwrap();
        assert_eq!(window.value(1), Err(OutOfRange { offset: 1, len: 1 }));
    }

    #[test]
    fn test_empty_window() {
        let window = ColumnWindow::from_text(Vec::<Option<&str>>::new()).unwrap();
        assert!(window.is_empty());
        assert!(window.value(0).is_err());
    }
}
