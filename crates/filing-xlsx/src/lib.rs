#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/filing-snapshot/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Positional extractor for filing workbooks.
//!
//! - [`read_column_window`] - One column of one worksheet over a fixed row window
//! - [`ColumnWindow`] - The window's cells coerced to numbers
//! - [`extract_snapshot`] - Revenue, net income and basic EPS at fixed offsets
//! - [`PositionalExtractor`] - Bytes in, [`Extraction`](filing_core::Extraction) out
//!
//! # Example
//!
//! ```no_run
//! use filing_core::{Extraction, SheetLayout};
//! use filing_xlsx::PositionalExtractor;
//!
//! # fn example(bytes: &[u8]) -> filing_core::Result<()> {
//! let extractor = PositionalExtractor::new(SheetLayout::default());
//! match extractor.extract(bytes)? {
//!     Extraction::Snapshot(snapshot) => println!("{snapshot}"),
//!     Extraction::LayoutMismatch { rows, required } => {
//!         println!("window has {rows} rows, need {required}")
//!     }
//! }
//! # Ok(())
//! # }
//! ```

/// Snapshot extraction at fixed offsets.
pub mod extract;
/// Numeric column window.
pub mod window;
/// Workbook and worksheet access.
pub mod workbook;

pub use extract::{PositionalExtractor, extract_snapshot};
pub use window::{ColumnWindow, OutOfRange};
pub use workbook::read_column_window;
