//! Positional extraction of the three income statement figures.

use filing_core::{Extraction, FinancialSnapshot, Result, SheetLayout};
use tracing::warn;

use crate::window::{ColumnWindow, OutOfRange};
use crate::workbook::read_column_window;

/// Reads revenue, net income and basic EPS from a filing workbook by position.
#[derive(Clone, Debug, Default)]
pub struct PositionalExtractor {
    layout: SheetLayout,
}

impl PositionalExtractor {
    /// Creates an extractor for the given layout.
    #[must_use]
    pub const fn new(layout: SheetLayout) -> Self {
        Self { layout }
    }

    /// Returns the layout in use.
    #[must_use]
    pub const fn layout(&self) -> &SheetLayout {
        &self.layout
    }

    /// Extracts the snapshot from xlsx bytes.
    ///
    /// Workbook and worksheet failures are errors; a window too short for the
    /// offsets is [`Extraction::LayoutMismatch`].
    pub fn extract(&self, bytes: &[u8]) -> Result<Extraction> {
        let window = read_column_window(bytes, &self.layout)?;
        Ok(extract_snapshot(&window, &self.layout))
    }
}

/// Computes the snapshot from a column window.
///
/// Revenue and net income are divided by `layout.scale_divisor`; EPS is used
/// as is. An undefined cell leaves only its own field undefined.
#[must_use]
pub fn extract_snapshot(window: &ColumnWindow, layout: &SheetLayout) -> Extraction {
    match read_offsets(window, layout) {
        Ok(snapshot) => Extraction::Snapshot(snapshot),
        Err(e) => {
            warn!("Column window does not match the expected layout: {}", e);
            Extraction::LayoutMismatch {
                rows: window.len(),
                required: layout.offsets.required_rows(),
            }
        }
    }
}

fn read_offsets(
    window: &ColumnWindow,
    layout: &SheetLayout,
) -> std::result::Result<FinancialSnapshot, OutOfRange> {
    let offsets = layout.offsets;
    let revenue = window.value(offsets.revenue)?;
    let net_income = window.value(offsets.net_income)?;
    let eps_basic = window.value(offsets.eps_basic)?;

    Ok(FinancialSnapshot {
        revenue_millions: revenue.map(|v| v / layout.scale_divisor),
        net_income_millions: net_income.map(|v| v / layout.scale_divisor),
        eps_basic,
    })
}
