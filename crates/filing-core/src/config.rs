//! Run configuration.
//!
//! [`SnapshotConfig`] carries everything the pipeline would otherwise read from
//! constants: the company, the target month, the upstream endpoints, the request
//! identity for each host and the worksheet layout. [`Default`] yields the
//! compiled-in values.

use serde::{Deserialize, Serialize};

use crate::types::{Cik, TargetMonth};

/// Default company identifier.
pub const DEFAULT_CIK: &str = "0000051143";

/// Default filing month (year, month).
pub const DEFAULT_TARGET_MONTH: (i32, u32) = (2024, 10);

/// Identity sent with every request. The SEC asks for an application and contact.
pub const DEFAULT_USER_AGENT: &str = "filing-snapshot/0.1.0 (contact@example.com)";

/// Submissions API base URL.
pub const SUBMISSIONS_BASE_URL: &str = "https://data.sec.gov/submissions";

/// Archive base URL for filing documents.
pub const ARCHIVES_BASE_URL: &str = "https://www.sec.gov/Archives/edgar/data";

/// File name of the rendered financial report within a filing folder.
pub const FINANCIAL_REPORT_NAME: &str = "Financial_Report.xlsx";

/// Worksheet holding the consolidated statements of operations.
pub const INCOME_STATEMENT_SHEET: &str = "CONSOLIDATED STATEMENTS OF OPER";

/// Request identity for one upstream host.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderProfile {
    /// `User-Agent` value.
    pub user_agent: String,
    /// `Host` value.
    pub host: String,
}

impl HeaderProfile {
    /// Creates a header profile.
    #[must_use]
    pub fn new(user_agent: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
            host: host.into(),
        }
    }
}

/// Upstream endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgarEndpoints {
    /// Base URL of the submissions API, without trailing slash.
    pub submissions_base_url: String,
    /// Base URL of the filing archive, without trailing slash.
    pub archives_base_url: String,
    /// Document file name within a filing folder.
    pub document_name: String,
}

impl Default for EdgarEndpoints {
    fn default() -> Self {
        Self {
            submissions_base_url: SUBMISSIONS_BASE_URL.to_string(),
            archives_base_url: ARCHIVES_BASE_URL.to_string(),
            document_name: FINANCIAL_REPORT_NAME.to_string(),
        }
    }
}

/// Row offsets of each line item within the column window.
///
/// These are positional assumptions about an unlabeled region of the sheet.
/// Nothing checks that the rows hold the named line items.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItemOffsets {
    /// Offset of total revenue.
    pub revenue: usize,
    /// Offset of net income.
    pub net_income: usize,
    /// Offset of basic earnings per share.
    pub eps_basic: usize,
}

impl LineItemOffsets {
    /// Number of window rows needed to reach every offset.
    #[must_use]
    pub fn required_rows(&self) -> usize {
        self.revenue.max(self.net_income).max(self.eps_basic) + 1
    }
}

impl Default for LineItemOffsets {
    fn default() -> Self {
        Self {
            revenue: 0,
            net_income: 16,
            eps_basic: 17,
        }
    }
}

/// Where the figures sit in the workbook.
///
/// The first `skip_rows` sheet rows are skipped, the next row is the column
/// header, and up to `window_rows` rows after it form the window.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SheetLayout {
    /// Exact worksheet name (case and whitespace sensitive).
    pub sheet_name: String,
    /// Zero-based column index (1 = column B).
    pub column: u32,
    /// Sheet rows skipped before the header row.
    pub skip_rows: u32,
    /// Maximum number of data rows read below the header.
    pub window_rows: u32,
    /// Line item offsets within the window.
    pub offsets: LineItemOffsets,
    /// Divisor applied to revenue and net income (thousands to millions).
    pub scale_divisor: f64,
}

impl SheetLayout {
    /// Zero-based sheet row of the first window entry.
    #[must_use]
    pub const fn first_data_row(&self) -> u32 {
        self.skip_rows + 1
    }
}

impl Default for SheetLayout {
    fn default() -> Self {
        Self {
            sheet_name: INCOME_STATEMENT_SHEET.to_string(),
            column: 1,
            skip_rows: 2,
            window_rows: 20,
            offsets: LineItemOffsets::default(),
            scale_divisor: 1000.0,
        }
    }
}

/// Configuration for one snapshot run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SnapshotConfig {
    /// Company whose filing index is fetched.
    pub cik: Cik,
    /// Month the filing date must fall in.
    pub target_month: TargetMonth,
    /// Upstream endpoints.
    pub endpoints: EdgarEndpoints,
    /// Identity for filing index requests.
    pub index_headers: HeaderProfile,
    /// Identity for document requests.
    pub document_headers: HeaderProfile,
    /// Worksheet layout.
    pub layout: SheetLayout,
}

impl SnapshotConfig {
    /// Sets the company identifier.
    #[must_use]
    pub fn with_cik(mut self, cik: impl Into<Cik>) -> Self {
        self.cik = cik.into();
        self
    }

    /// Sets the target month.
    #[must_use]
    pub const fn with_target_month(mut self, target_month: TargetMonth) -> Self {
        self.target_month = target_month;
        self
    }

    /// Sets the upstream endpoints.
    #[must_use]
    pub fn with_endpoints(mut self, endpoints: EdgarEndpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    /// Sets the worksheet layout.
    #[must_use]
    pub fn with_layout(mut self, layout: SheetLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Sets the same `User-Agent` on both header profiles.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.index_headers.user_agent = user_agent.to_string();
        self.document_headers.user_agent = user_agent.to_string();
        self
    }
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        let (year, month) = DEFAULT_TARGET_MONTH;
        Self {
            cik: Cik::new(DEFAULT_CIK),
            target_month: TargetMonth::from_parts(year, month),
            endpoints: EdgarEndpoints::default(),
            index_headers: HeaderProfile::new(DEFAULT_USER_AGENT, "data.sec.gov"),
            document_headers: HeaderProfile::new(DEFAULT_USER_AGENT, "www.sec.gov"),
            layout: SheetLayout::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_offsets_need_eighteen_rows() {
        assert_eq!(LineItemOffsets::default().required_rows(), 18);
    }

    #[test]
    fn test_default_layout_starts_below_header() {
        let layout = SheetLayout::default();
        assert_eq!(layout.first_data_row(), 3);
        assert_eq!(layout.column, 1);
        assert_eq!(layout.window_rows, 20);
    }

    #[test]
    fn test_default_config() {
        let config = SnapshotConfig::default();
        assert_eq!(config.cik.as_str(), DEFAULT_CIK);
        assert_eq!(config.target_month.prefix(), "2024-10");
        assert_eq!(config.index_headers.host, "data.sec.gov");
        assert_eq!(config.document_headers.host, "www.sec.gov");
        assert_eq!(config.layout.sheet_name, INCOME_STATEMENT_SHEET);
    }

    #[test]
    fn test_config_builders() {
        let config = SnapshotConfig::default()
            .with_cik("320193")
            .with_target_month(TargetMonth::new(2023, 7).unwrap())
            .with_user_agent("Test/1.0 (test@example.com)");

        assert_eq!(config.cik.as_str(), "320193");
        assert_eq!(config.target_month.to_string(), "2023-07");
        assert_eq!(config.index_headers.user_agent, "Test/1.0 (test@example.com)");
        assert_eq!(
            config.document_headers.user_agent,
            "Test/1.0 (test@example.com)"
        );
    }
}
