#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/filing-snapshot/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Core traits and types for filing snapshots.
//!
//! This crate provides the foundational abstractions shared by the other crates:
//!
//! - [`FilingIndexProvider`](provider::FilingIndexProvider) - Company filing history
//! - [`DocumentProvider`](provider::DocumentProvider) - Filing document download
//! - [`SnapshotConfig`](config::SnapshotConfig) - Run configuration
//! - [`Extraction`](types::Extraction) - Result of the positional worksheet read

/// Run configuration and compiled-in defaults.
pub mod config;
/// Error types for filing operations.
pub mod error;
/// Provider traits for fetching filings.
pub mod provider;
/// Core data types (Cik, FilingIndex, FinancialSnapshot, etc.).
pub mod types;

// Re-export commonly used items at crate root
pub use config::{EdgarEndpoints, HeaderProfile, LineItemOffsets, SheetLayout, SnapshotConfig};
pub use error::{FilingError, Result};
pub use provider::{DocumentProvider, FilingIndexProvider, SourceProvider};
pub use types::{
    AccessionNumber, Cik, DocumentUrl, Extraction, FilingIndex, FilingRecord, FinancialSnapshot,
    TargetMonth,
};
