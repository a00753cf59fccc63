#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/filing-snapshot/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Quarterly filing snapshot.
//!
//! This crate ties the filing locator, the document fetcher and the positional
//! extractor into a single [`SnapshotPipeline`], and provides the [`report`]
//! writers used by the `filing-snapshot` binary.
//!
//! # Example
//!
//! ```rust,ignore
//! use filing::{SnapshotConfig, SnapshotPipeline, report};
//! use std::time::Instant;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> filing::Result<()> {
//!     let started = Instant::now();
//!     let pipeline = SnapshotPipeline::new(SnapshotConfig::default())?;
//!     report::run_and_report(&pipeline, &mut std::io::stdout(), started).await?;
//!     Ok(())
//! }
//! ```

// Core types and traits
pub use filing_core::*;

// Providers
pub use filing_edgar::{EdgarClient, locator, parse_submissions};

// Extraction
pub use filing_xlsx::{ColumnWindow, PositionalExtractor};

mod pipeline;
pub use pipeline::{RunOutcome, SnapshotPipeline};

pub mod report;
