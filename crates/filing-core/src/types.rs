//! Core data types for filing snapshots.
//!
//! This module defines the fundamental data structures:
//!
//! - [`Cik`] - Company identifier used by the filings index
//! - [`AccessionNumber`] - Identifier of a single filing submission
//! - [`TargetMonth`] - Year-month prefix a filing date is matched against
//! - [`FilingRecord`] / [`FilingIndex`] - A company's recent filings
//! - [`DocumentUrl`] - Direct URL of a filing's spreadsheet
//! - [`FinancialSnapshot`] / [`Extraction`] - Result of reading the worksheet

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{FilingError, Result};

/// Central Index Key, the company identifier used by the filings index.
///
/// Kept verbatim: no padding or trimming is applied.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cik(String);

impl Cik {
    /// Creates a CIK from a string.
    #[must_use]
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Returns the CIK as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Cik {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Cik {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Cik {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// Accession number of a filing, e.g. `0000051143-24-000050`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccessionNumber(String);

impl AccessionNumber {
    /// Creates an accession number from its hyphenated form.
    #[must_use]
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Returns the accession number as given.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the accession number with every hyphen removed.
    #[must_use]
    pub fn digits(&self) -> String {
        self.0.chars().filter(|&c| c != '-').collect()
    }
}

impl fmt::Display for AccessionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AccessionNumber {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// A calendar month that filing dates are matched against.
///
/// Matching is a textual prefix test on the `YYYY-MM-DD` filing date, so
/// `2024-10` matches `2024-10-30` but not `2024-1-05`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TargetMonth {
    year: i32,
    month: u32,
}

impl TargetMonth {
    /// Creates a target month, validating the month number.
    pub fn new(year: i32, month: u32) -> Result<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
            FilingError::InvalidParameter(format!("invalid month {year}-{month:02}"))
        })?;
        Ok(Self {
            year: first.year(),
            month: first.month(),
        })
    }

    /// Builds a month already known to be valid.
    pub(crate) const fn from_parts(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// Returns the year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month (1-12).
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// Returns the `YYYY-MM` prefix used for matching.
    #[must_use]
    pub fn prefix(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }

    /// Returns true if the filing date string begins with this month's prefix.
    #[must_use]
    pub fn matches(&self, filing_date: &str) -> bool {
        filing_date.starts_with(&self.prefix())
    }
}

impl fmt::Display for TargetMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.prefix())
    }
}

impl FromStr for TargetMonth {
    type Err = FilingError;

    fn from_str(s: &str) -> Result<Self> {
        let date = NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d")
            .map_err(|e| FilingError::InvalidParameter(format!("invalid month '{s}': {e}")))?;
        Self::new(date.year(), date.month())
    }
}

/// One entry of a company's filing history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilingRecord {
    /// Form type (e.g. "10-Q", "10-K", "8-K").
    pub form: String,
    /// Filing date as reported upstream (`YYYY-MM-DD`).
    pub filing_date: String,
    /// Accession number of the submission.
    pub accession_number: AccessionNumber,
}

impl FilingRecord {
    /// Creates a filing record.
    #[must_use]
    pub fn new(
        form: impl Into<String>,
        filing_date: impl Into<String>,
        accession_number: impl Into<String>,
    ) -> Self {
        Self {
            form: form.into(),
            filing_date: filing_date.into(),
            accession_number: AccessionNumber::new(accession_number),
        }
    }
}

/// A company's recent filings, in the order the index returned them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilingIndex {
    /// Company identifier reported by the index.
    pub cik: Cik,
    /// Filing records, index 0 first.
    pub records: Vec<FilingRecord>,
}

impl FilingIndex {
    /// Creates a filing index.
    #[must_use]
    pub const fn new(cik: Cik, records: Vec<FilingRecord>) -> Self {
        Self { cik, records }
    }

    /// Builds records from the parallel sequences returned upstream.
    ///
    /// Record `i` is assembled from element `i` of each sequence; the
    /// sequences must have equal length.
    pub fn from_parallel(
        cik: Cik,
        form: Vec<String>,
        filing_date: Vec<String>,
        accession_number: Vec<String>,
    ) -> Result<Self> {
        if form.len() != filing_date.len() || form.len() != accession_number.len() {
            return Err(FilingError::Parse(format!(
                "filing sequences differ in length: form={}, filingDate={}, accessionNumber={}",
                form.len(),
                filing_date.len(),
                accession_number.len()
            )));
        }

        let records = form
            .into_iter()
            .zip(filing_date)
            .zip(accession_number)
            .map(|((form, date), accession)| FilingRecord::new(form, date, accession))
            .collect();

        Ok(Self { cik, records })
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if there are no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Direct URL of a filing's spreadsheet document.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentUrl(String);

impl DocumentUrl {
    /// Wraps a URL string.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    /// Returns the URL as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Three figures read from the income statement worksheet.
///
/// `None` marks a cell whose content could not be read as a number.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialSnapshot {
    /// Revenue in millions.
    pub revenue_millions: Option<f64>,
    /// Net income in millions.
    pub net_income_millions: Option<f64>,
    /// Basic earnings per share, unscaled.
    pub eps_basic: Option<f64>,
}

impl fmt::Display for FinancialSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "R: ${} million", Fixed2(self.revenue_millions))?;
        writeln!(f, "NI: ${} million", Fixed2(self.net_income_millions))?;
        match self.eps_basic {
            Some(eps) => write!(f, "EPS: ${eps:?}"),
            None => write!(f, "EPS: $nan"),
        }
    }
}

struct Fixed2(Option<f64>);

impl fmt::Display for Fixed2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(v) => write!(f, "{v:.2}"),
            None => f.write_str("nan"),
        }
    }
}

/// Outcome of a positional worksheet read.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Extraction {
    /// The window was long enough and the snapshot was computed.
    Snapshot(FinancialSnapshot),
    /// The column window was too short to reach every offset.
    LayoutMismatch {
        /// Rows present in the window.
        rows: usize,
        /// Rows needed to reach the furthest offset.
        required: usize,
    },
}

impl Extraction {
    /// Returns the snapshot, if one was produced.
    #[must_use]
    pub const fn snapshot(&self) -> Option<&FinancialSnapshot> {
        match self {
            Self::Snapshot(snapshot) => Some(snapshot),
            Self::LayoutMismatch { .. } => None,
        }
    }
}
