//! Snapshot pipeline: fetch index → locate filing → download → extract.

use std::io::{self, Write};
use std::sync::Arc;

use tracing::{debug, info};

use filing_core::{
    DocumentProvider, DocumentUrl, Extraction, FilingIndexProvider, FinancialSnapshot, Result,
    SnapshotConfig, TargetMonth,
};
use filing_edgar::{EdgarClient, locator};
use filing_xlsx::PositionalExtractor;

use crate::report;

/// Result of a complete run.
#[derive(Clone, Debug, PartialEq)]
pub enum RunOutcome {
    /// The document was found and the figures were read.
    Extracted {
        /// Document the figures were read from.
        url: DocumentUrl,
        /// The figures.
        snapshot: FinancialSnapshot,
    },
    /// The document was found but its column window was too short.
    LayoutMismatch {
        /// Document that was read.
        url: DocumentUrl,
        /// Rows present in the window.
        rows: usize,
        /// Rows needed to reach the furthest offset.
        required: usize,
    },
    /// No filing is dated in the target month.
    FilingNotFound {
        /// The month searched for.
        target: TargetMonth,
    },
}

/// Runs the steps in strict sequence against a filing index and a document source.
///
/// # Example
///
/// ```rust,ignore
/// use filing::{SnapshotConfig, SnapshotPipeline};
///
/// let pipeline = SnapshotPipeline::new(SnapshotConfig::default())?;
/// let outcome = pipeline.run().await?;
/// println!("{:?}", outcome);
/// ```
pub struct SnapshotPipeline {
    index: Arc<dyn FilingIndexProvider>,
    documents: Arc<dyn DocumentProvider>,
    extractor: PositionalExtractor,
    config: SnapshotConfig,
}

impl std::fmt::Debug for SnapshotPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnapshotPipeline")
            .field("index", &self.index.name())
            .field("documents", &self.documents.name())
            .field("config", &self.config)
            .finish()
    }
}

impl SnapshotPipeline {
    /// Creates a pipeline backed by SEC EDGAR for both the index and documents.
    pub fn new(config: SnapshotConfig) -> Result<Self> {
        let client = Arc::new(EdgarClient::new(&config)?);
        Ok(Self::with_providers(client.clone(), client, config))
    }

    /// Creates a pipeline with custom providers.
    #[must_use]
    pub fn with_providers(
        index: Arc<dyn FilingIndexProvider>,
        documents: Arc<dyn DocumentProvider>,
        config: SnapshotConfig,
    ) -> Self {
        Self {
            index,
            documents,
            extractor: PositionalExtractor::new(config.layout.clone()),
            config,
        }
    }

    /// Returns the configuration in use.
    #[must_use]
    pub const fn config(&self) -> &SnapshotConfig {
        &self.config
    }

    /// Fetches the filing index and returns the document URL of the first
    /// filing dated in the target month, if any.
    pub async fn locate(&self) -> Result<Option<DocumentUrl>> {
        debug!(
            "Fetching filing index for CIK {} from {}",
            self.config.cik,
            self.index.name()
        );
        let index = self.index.fetch_filing_index(&self.config.cik).await?;
        debug!("Filing index for CIK {} has {} records", index.cik, index.len());

        Ok(locator::locate_document(
            &index.cik,
            &index.records,
            self.config.target_month,
            &self.config.endpoints,
        ))
    }

    /// Downloads the document and reads the figures from it.
    pub async fn extract(&self, url: &DocumentUrl) -> Result<Extraction> {
        let bytes = self.documents.fetch_document(url).await?;
        let extraction = self.extractor.extract(&bytes)?;

        if let Extraction::Snapshot(snapshot) = &extraction {
            info!(
                "Extracted revenue={:?} net_income={:?} eps={:?}",
                snapshot.revenue_millions, snapshot.net_income_millions, snapshot.eps_basic
            );
        }

        Ok(extraction)
    }

    /// Runs every step and returns the combined outcome.
    pub async fn run(&self) -> Result<RunOutcome> {
        self.run_to(&mut io::sink()).await
    }

    /// Runs every step, writing each report line to `out` as soon as it is
    /// known.
    ///
    /// The URL line (or the not-found line) is flushed before the download
    /// starts. Errors are returned without writing anything further.
    pub async fn run_to<W: Write>(&self, out: &mut W) -> Result<RunOutcome> {
        let target = self.config.target_month;
        let url = self.locate().await?;

        report::write_located(out, url.as_ref(), target)?;
        out.flush()?;

        let Some(url) = url else {
            return Ok(RunOutcome::FilingNotFound { target });
        };

        let extraction = self.extract(&url).await?;
        report::write_extraction(out, &extraction)?;

        Ok(match extraction {
            Extraction::Snapshot(snapshot) => RunOutcome::Extracted { url, snapshot },
            Extraction::LayoutMismatch { rows, required } => {
                RunOutcome::LayoutMismatch {
                    url,
                    rows,
                    required,
                }
            }
        })
    }
}
