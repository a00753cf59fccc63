//! Provider traits for fetching filings.
//!
//! This module defines the fetch seams of the pipeline:
//!
//! - [`SourceProvider`] - Base trait for all providers
//! - [`FilingIndexProvider`] - A company's recent filing history
//! - [`DocumentProvider`] - Raw bytes of a filing document

use async_trait::async_trait;
use std::fmt::Debug;

use crate::{
    error::Result,
    types::{Cik, DocumentUrl, FilingIndex},
};

/// Base trait for all providers.
pub trait SourceProvider: Send + Sync + Debug {
    /// Returns the name of this provider (e.g., "SEC EDGAR").
    fn name(&self) -> &str;

    /// Returns a description of this provider.
    fn description(&self) -> &str;
}

/// Provider for a company's filing index.
#[async_trait]
pub trait FilingIndexProvider: SourceProvider {
    /// Fetches the recent filings of a company.
    ///
    /// Records are returned in upstream order, and the index carries the
    /// company identifier as reported upstream.
    async fn fetch_filing_index(&self, cik: &Cik) -> Result<FilingIndex>;
}

/// Provider for filing documents.
#[async_trait]
pub trait DocumentProvider: SourceProvider {
    /// Downloads a document and returns its body as an in-memory buffer.
    async fn fetch_document(&self, url: &DocumentUrl) -> Result<Vec<u8>>;
}
