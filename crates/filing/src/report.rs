//! Console report.
//!
//! Every writer takes an [`io::Write`] so the binary can target stdout and tests
//! can target a buffer.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use filing_core::{DocumentUrl, Extraction, FilingError, Result, TargetMonth};
use tracing::error;

use crate::pipeline::{RunOutcome, SnapshotPipeline};

/// Printed when the column window is too short for the offsets.
pub const LAYOUT_MISMATCH_MESSAGE: &str =
    "Error: Check that rows match expected layout in the Excel sheet.";

/// Runs the pipeline and writes the whole console report to `out`.
///
/// On success the elapsed time since `started` follows the report. On error
/// the failure line is written instead and the error is returned.
pub async fn run_and_report<W: Write>(
    pipeline: &SnapshotPipeline,
    out: &mut W,
    started: Instant,
) -> Result<RunOutcome> {
    let result = match pipeline.run_to(out).await {
        Ok(outcome) => write_elapsed(out, started.elapsed())
            .map(|()| outcome)
            .map_err(FilingError::from),
        Err(e) => Err(e),
    };

    if let Err(e) = &result {
        report_failure(out, e);
    }

    result
}

/// Writes the failure line, logging if `out` can no longer be written.
pub fn report_failure<W: Write>(out: &mut W, error: &FilingError) {
    if let Err(io_error) = write_failure(out, error) {
        error!("Could not write failure report ({}): {}", io_error, error);
    }
}

/// Writes the resolved document URL, or the not-found line.
pub fn write_located<W: Write>(
    out: &mut W,
    url: Option<&DocumentUrl>,
    target: TargetMonth,
) -> io::Result<()> {
    match url {
        Some(url) => writeln!(out, "{url}"),
        None => writeln!(out, "No filing found for {target}."),
    }
}

/// Writes the three figures, or the layout mismatch line.
pub fn write_extraction<W: Write>(out: &mut W, extraction: &Extraction) -> io::Result<()> {
    match extraction {
        Extraction::Snapshot(snapshot) => writeln!(out, "{snapshot}"),
        Extraction::LayoutMismatch { .. } => writeln!(out, "{LAYOUT_MISMATCH_MESSAGE}"),
    }
}

/// Writes the elapsed wall-clock time.
pub fn write_elapsed<W: Write>(out: &mut W, elapsed: Duration) -> io::Result<()> {
    writeln!(out, "Running time: {:.2} seconds", elapsed.as_secs_f64())
}

/// Writes the line printed before exiting on a propagated error.
pub fn write_failure<W: Write>(out: &mut W, error: &FilingError) -> io::Result<()> {
    writeln!(out, "Error fetching data: {error}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use filing_core::FinancialSnapshot;

    /// Writer that rejects every write.
    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn written(write: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buffer = Vec::new();
        write(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_located_url_line() {
        let url = DocumentUrl::new("https://example.com/Financial_Report.xlsx");
        let target = TargetMonth::new(2024, 10).unwrap();

        assert_eq!(
            written(|out| write_located(out, Some(&url), target)),
            "https://example.com/Financial_Report.xlsx\n"
        );
    }

    #[test]
    fn test_not_found_line() {
        let target = TargetMonth::new(2024, 10).unwrap();
        assert_eq!(
            written(|out| write_located(out, None, target)),
            "No filing found for 2024-10.\n"
        );
    }

    #[test]
    fn test_snapshot_lines() {
        let extraction = Extraction::Snapshot(FinancialSnapshot {
            revenue_millions: Some(12.3456),
            net_income_millions: Some(2.0),
            eps_basic: Some(1.23),
        });

        assert_eq!(
            written(|out| write_extraction(out, &extraction)),
            "R: $12.35 million\nNI: $2.00 million\nEPS: $1.23\n"
        );
    }

    #[test]
    fn test_layout_mismatch_line() {
        let extraction = Extraction::LayoutMismatch {
            rows: 3,
            required: 18,
        };

        assert_eq!(
            written(|out| write_extraction(out, &extraction)),
            format!("{LAYOUT_MISMATCH_MESSAGE}\n")
        );
    }

    #[test]
    fn test_elapsed_and_failure_lines() {
        let mut buffer = Vec::new();
        write_elapsed(&mut buffer, Duration::from_millis(1234)).unwrap();
        write_failure(&mut buffer, &FilingError::Network("connection refused".into())).unwrap();

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "Running time: 1.23 seconds\nError fetching data: Network error: connection refused\n"
        );
    }

    #[test]
    fn test_report_failure_survives_closed_output() {
        let mut out = ClosedPipe;
        report_failure(&mut out, &FilingError::Parse("bad body".into()));
        assert!(write_failure(&mut out, &FilingError::Parse("bad body".into())).is_err());
    }
}
