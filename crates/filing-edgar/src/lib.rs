#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/filing-snapshot/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! SEC EDGAR filing index and document fetcher.
//!
//! This crate provides:
//!
//! - Company submissions lookup from the EDGAR submissions API
//! - Filing document download from the EDGAR archive
//! - The filing locator that turns a submissions index into a document URL
//!
//! # Example
//!
//! ```no_run
//! use filing_core::{FilingIndexProvider, SnapshotConfig};
//! use filing_edgar::{EdgarClient, locator};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = SnapshotConfig::default();
//!     let client = EdgarClient::new(&config)?;
//!
//!     let index = client.fetch_filing_index(&config.cik).await?;
//!     let url = locator::locate_document(
//!         &index.cik,
//!         &index.records,
//!         config.target_month,
//!         &config.endpoints,
//!     );
//!     println!("{:?}", url);
//!
//!     Ok(())
//! }
//! ```

/// Filing locator and document URL derivation.
pub mod locator;

use async_trait::async_trait;
use filing_core::{
    Cik, DocumentProvider, DocumentUrl, EdgarEndpoints, FilingError, FilingIndex,
    FilingIndexProvider, HeaderProfile, Result, SnapshotConfig, SourceProvider,
};
use reqwest::header::{HOST, HeaderMap, HeaderValue, USER_AGENT};
use serde::Deserialize;
use tracing::debug;

/// SEC EDGAR client.
///
/// Fetches the submissions index from `data.sec.gov` and documents from
/// `www.sec.gov`, each with its own identity headers. Every call is a single
/// GET: no retry, no timeout, no rate limiting.
#[derive(Debug)]
pub struct EdgarClient {
    client: reqwest::Client,
    endpoints: EdgarEndpoints,
    index_headers: HeaderMap,
    document_headers: HeaderMap,
}

impl EdgarClient {
    /// Create a new EDGAR client from a run configuration.
    ///
    /// The SEC requires an identifying `User-Agent`. Format should be:
    /// "AppName/Version (contact@email.com)"
    ///
    /// # Example
    /// ```
    /// use filing_core::SnapshotConfig;
    /// use filing_edgar::EdgarClient;
    ///
    /// let config = SnapshotConfig::default().with_user_agent("MyApp/1.0 (contact@example.com)");
    /// let client = EdgarClient::new(&config).unwrap();
    /// ```
    pub fn new(config: &SnapshotConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| FilingError::Network(format!("Failed to build HTTP client: {}", e)))?;

        Self::with_client(client, config)
    }

    /// Create a new EDGAR client with a custom HTTP client.
    ///
    /// # Arguments
    /// * `client` - Pre-configured reqwest client
    /// * `config` - Run configuration supplying endpoints and header profiles
    pub fn with_client(client: reqwest::Client, config: &SnapshotConfig) -> Result<Self> {
        Ok(Self {
            client,
            endpoints: config.endpoints.clone(),
            index_headers: header_map(&config.index_headers)?,
            document_headers: header_map(&config.document_headers)?,
        })
    }

    /// URL of a company's submissions index.
    fn submissions_url(&self, cik: &Cik) -> String {
        format!("{}/CIK{}.json", self.endpoints.submissions_base_url, cik)
    }

    /// Issue a GET and fail on a non-success status.
    async fn get(&self, url: &str, headers: &HeaderMap) -> Result<reqwest::Response> {
        let response = self
            .client
            .get(url)
            .headers(headers.clone())
            .send()
            .await
            .map_err(|e| FilingError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FilingError::Http {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response)
    }
}

impl SourceProvider for EdgarClient {
    fn name(&self) -> &str {
        "SEC EDGAR"
    }

    fn description(&self) -> &str {
        "SEC EDGAR submissions index and filing archive"
    }
}

#[async_trait]
impl FilingIndexProvider for EdgarClient {
    async fn fetch_filing_index(&self, cik: &Cik) -> Result<FilingIndex> {
        let url = self.submissions_url(cik);

        debug!("Fetching company submissions from {}", url);
        let body = self
            .get(&url, &self.index_headers)
            .await?
            .bytes()
            .await
            .map_err(|e| FilingError::Network(e.to_string()))?;

        parse_submissions(&body)
    }
}

#[async_trait]
impl DocumentProvider for EdgarClient {
    async fn fetch_document(&self, url: &DocumentUrl) -> Result<Vec<u8>> {
        debug!("Downloading document from {}", url);
        let body = self
            .get(url.as_str(), &self.document_headers)
            .await?
            .bytes()
            .await
            .map_err(|e| FilingError::Network(e.to_string()))?;

        debug!("Downloaded {} bytes from {}", body.len(), url);
        Ok(body.to_vec())
    }
}

/// Parse a submissions API response body into a [`FilingIndex`].
///
/// The company identifier comes from the top-level `cik` field and the records
/// from the parallel arrays under `filings.recent`.
pub fn parse_submissions(body: &[u8]) -> Result<FilingIndex> {
    let submissions: SubmissionsResponse = serde_json::from_slice(body)
        .map_err(|e| FilingError::Parse(format!("Failed to parse submissions: {}", e)))?;

    let recent = submissions.filings.recent;
    FilingIndex::from_parallel(
        submissions.cik.into(),
        recent.form,
        recent.filing_date,
        recent.accession_number,
    )
}

/// Build the request headers for one host.
fn header_map(profile: &HeaderProfile) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(
        USER_AGENT,
        HeaderValue::from_str(&profile.user_agent)
            .map_err(|e| FilingError::InvalidParameter(format!("User-Agent: {}", e)))?,
    );
    headers.insert(
        HOST,
        HeaderValue::from_str(&profile.host)
            .map_err(|e| FilingError::InvalidParameter(format!("Host: {}", e)))?,
    );
    Ok(headers)
}

// =============================================================================
// SEC API Response Types
// =============================================================================

/// Response from the SEC EDGAR submissions API (fields in use only).
#[derive(Debug, Deserialize)]
struct SubmissionsResponse {
    /// CIK as reported upstream
    cik: RawCik,
    /// Filing history
    filings: Filings,
}

/// CIK field, which may arrive as a string or a bare number.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawCik {
    Text(String),
    Number(u64),
}

impl From<RawCik> for Cik {
    fn from(raw: RawCik) -> Self {
        match raw {
            RawCik::Text(s) => Self::new(s),
            RawCik::Number(n) => Self::new(n.to_string()),
        }
    }
}

/// Container for filing history.
#[derive(Debug, Deserialize)]
struct Filings {
    recent: RecentFilings,
}

/// Recent filings as parallel arrays; index `i` of each array is one filing.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecentFilings {
    accession_number: Vec<String>,
    filing_date: Vec<String>,
    form: Vec<String>,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const SUBMISSIONS: &str = r#"{
        "cik": "51143",
        "name": "EXAMPLE CORP",
        "filings": {
            "recent": {
                "accessionNumber": ["0000051143-24-000061", "0000051143-24-000050"],
                "filingDate": ["2024-11-04", "2024-10-29"],
                "reportDate": ["2024-11-01", "2024-09-30"],
                "form": ["8-K", "10-Q"],
                "primaryDocument": ["a.htm", "b.htm"]
            },
            "files": []
        }
    }"#;

    #[test]
    fn test_parse_submissions() {
        let index = parse_submissions(SUBMISSIONS.as_bytes()).unwrap();

        assert_eq!(index.cik.as_str(), "51143");
        assert_eq!(index.len(), 2);
        assert_eq!(index.records[1].form, "10-Q");
        assert_eq!(index.records[1].filing_date, "2024-10-29");
        assert_eq!(
            index.records[1].accession_number.as_str(),
            "0000051143-24-000050"
        );
    }

    #[test]
    fn test_parse_submissions_numeric_cik() {
        let body = r#"{"cik": 320193, "filings": {"recent": {
            "accessionNumber": [], "filingDate": [], "form": []
        }}}"#;
        let index = parse_submissions(body.as_bytes()).unwrap();
        assert_eq!(index.cik.as_str(), "320193");
        assert!(index.is_empty());
    }

    #[test]
    fn test_parse_submissions_missing_recent() {
        let body = r#"{"cik": "51143", "filings": {}}"#;
        let err = parse_submissions(body.as_bytes()).unwrap_err();
        assert!(matches!(err, FilingError::Parse(_)));
    }

    #[test]
    fn test_parse_submissions_missing_cik() {
        let body = r#"{"filings": {"recent": {
            "accessionNumber": [], "filingDate": [], "form": []
        }}}"#;
        assert!(parse_submissions(body.as_bytes()).is_err());
    }

    #[test]
    fn test_parse_submissions_ragged_arrays() {
        let body = r#"{"cik": "51143", "filings": {"recent": {
            "accessionNumber": ["a"], "filingDate": [], "form": ["10-Q"]
        }}}"#;
        let err = parse_submissions(body.as_bytes()).unwrap_err();
        assert!(matches!(err, FilingError::Parse(_)));
    }

    #[test]
    fn test_header_map() {
        let headers = header_map(&HeaderProfile::new(
            "Test/1.0 (test@example.com)",
            "data.sec.gov",
        ))
        .unwrap();

        assert_eq!(headers[USER_AGENT], "Test/1.0 (test@example.com)");
        assert_eq!(headers[HOST], "data.sec.gov");
    }

    #[test]
    fn test_header_map_rejects_control_characters() {
        let err = header_map(&HeaderProfile::new("bad\nagent", "data.sec.gov")).unwrap_err();
        assert!(matches!(err, FilingError::InvalidParameter(_)));
    }

    #[test]
    fn test_client_uses_configured_endpoints() {
        let client = EdgarClient::new(&SnapshotConfig::default()).unwrap();

        assert_eq!(client.name(), "SEC EDGAR");
        assert!(!client.description().is_empty());
        assert_eq!(
            client.submissions_url(&Cik::new("0000051143")),
            "https://data.sec.gov/submissions/CIK0000051143.json"
        );
        assert_eq!(client.index_headers[HOST], "data.sec.gov");
        assert_eq!(client.document_headers[HOST], "www.sec.gov");
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        let config = SnapshotConfig::default().with_endpoints(EdgarEndpoints {
            submissions_base_url: "http://127.0.0.1:9".to_string(),
            ..Default::default()
        });
        let client = EdgarClient::new(&config).unwrap();

        let err = client
            .fetch_filing_index(&Cik::new("51143"))
            .await
            .unwrap_err();
        assert!(matches!(err, FilingError::Network(_)));
    }
}
