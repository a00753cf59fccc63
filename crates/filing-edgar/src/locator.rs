//! Filing locator.
//!
//! Finds the filing whose document should be read and derives the document URL.
//! Matching is on the filing date only: the `form` field is not consulted, so any
//! filing (10-Q, 10-K, 8-K, ...) dated in the target month is accepted.

use filing_core::{AccessionNumber, Cik, DocumentUrl, EdgarEndpoints, FilingRecord, TargetMonth};
use tracing::{debug, info};

/// Derives the archive URL of a filing's document.
///
/// The CIK is embedded unmodified; the accession number loses its hyphens.
#[must_use]
pub fn document_url(
    endpoints: &EdgarEndpoints,
    cik: &Cik,
    accession_number: &AccessionNumber,
) -> DocumentUrl {
    DocumentUrl::new(format!(
        "{}/{}/{}/{}",
        endpoints.archives_base_url,
        cik,
        accession_number.digits(),
        endpoints.document_name
    ))
}

/// Returns the document URL of the first record filed in `target`.
///
/// Records are scanned from index 0 upward and the first match wins.
/// Returns `None` when no record's filing date falls in the month.
#[must_use]
pub fn locate_document(
    cik: &Cik,
    records: &[FilingRecord],
    target: TargetMonth,
    endpoints: &EdgarEndpoints,
) -> Option<DocumentUrl> {
    let Some(record) = records.iter().find(|r| target.matches(&r.filing_date)) else {
        debug!("No filing dated {} among {} records", target, records.len());
        return None;
    };

    info!(
        "Located {} filed {} ({})",
        record.form, record.filing_date, record.accession_number
    );
    Some(document_url(endpoints, cik, &record.accession_number))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn october() -> TargetMonth {
        TargetMonth::new(2024, 10).unwrap()
    }

    fn records() -> Vec<FilingRecord> {
        vec![
            FilingRecord::new("8-K", "2024-11-04", "0000051143-24-000061"),
            FilingRecord::new("10-Q", "2024-10-29", "0000051143-24-000050"),
            FilingRecord::new("8-K", "2024-10-23", "0000051143-24-000048"),
            FilingRecord::new("10-Q", "2024-07-30", "0000051143-24-000033"),
        ]
    }

    #[test]
    fn test_document_url_strips_hyphens() {
        let url = document_url(
            &EdgarEndpoints::default(),
            &Cik::new("51143"),
            &AccessionNumber::new("0000051143-24-000050"),
        );
        assert_eq!(
            url.as_str(),
            "https://www.sec.gov/Archives/edgar/data/51143/000005114324000050/Financial_Report.xlsx"
        );
    }

    #[test]
    fn test_document_url_keeps_cik_unmodified() {
        let url = document_url(
            &EdgarEndpoints::default(),
            &Cik::new("0000051143"),
            &AccessionNumber::new("1-2-3"),
        );
        assert!(url.as_str().contains("/data/0000051143/123/"));
    }

    #[test]
    fn test_first_match_wins() {
        let url = locate_document(
            &Cik::new("51143"),
            &records(),
            october(),
            &EdgarEndpoints::default(),
        )
        .unwrap();
        assert!(url.as_str().contains("/000005114324000050/"));
    }

    #[test]
    fn test_form_type_is_not_consulted() {
        let records = vec![
            FilingRecord::new("8-K", "2024-10-23", "0000051143-24-000048"),
            FilingRecord::new("10-Q", "2024-10-29", "0000051143-24-000050"),
        ];
        let url = locate_document(
            &Cik::new("51143"),
            &records,
            october(),
            &EdgarEndpoints::default(),
        )
        .unwrap();
        assert!(url.as_str().contains("/000005114324000048/"));
    }

    #[rstest]
    #[case(vec![])]
    #[case(vec![FilingRecord::new("10-Q", "2024-07-30", "a-b")])]
    #[case(vec![
        FilingRecord::new("10-Q", "2023-10-30", "a-b"),
        FilingRecord::new("10-Q", "2024-11-01", "c-d"),
    ])]
    fn test_not_found(#[case] records: Vec<FilingRecord>) {
        let url = locate_document(
            &Cik::new("51143"),
            &records,
            october(),
            &EdgarEndpoints::default(),
        );
        assert!(url.is_none());
    }

    #[test]
    fn test_custom_endpoints() {
        let endpoints = EdgarEndpoints {
            archives_base_url: "http://localhost/archive".to_string(),
            document_name: "report.xlsx".to_string(),
            ..Default::default()
        };
        let url = locate_document(&Cik::new("7"), &records(), october(), &endpoints).unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost/archive/7/000005114324000050/report.xlsx"
        );
    }
}
