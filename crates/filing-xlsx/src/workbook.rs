//! Workbook access.

use std::io::Cursor;

use calamine::{Data, Reader, Xlsx, XlsxError, open_workbook_from_rs};
use filing_core::{FilingError, Result, SheetLayout};
use tracing::debug;

use crate::window::ColumnWindow;

/// Reads the column window described by `layout` from xlsx bytes.
///
/// The worksheet is selected by exact name. The window covers up to
/// `layout.window_rows` rows starting below the header row, and stops early at
/// the sheet's last populated row.
pub fn read_column_window(bytes: &[u8], layout: &SheetLayout) -> Result<ColumnWindow> {
    let mut workbook: Xlsx<_> = open_workbook_from_rs(Cursor::new(bytes))
        .map_err(|e: XlsxError| FilingError::Workbook(e.to_string()))?;

    let range = workbook
        .worksheet_range(&layout.sheet_name)
        .map_err(|e| match e {
            XlsxError::WorksheetNotFound(name) => FilingError::SheetNotFound(name),
            other => FilingError::Workbook(other.to_string()),
        })?;

    let first = layout.first_data_row();
    let last_populated = range.end().map(|(row, _)| row);

    let cells: Vec<Option<String>> = (first..first.saturating_add(layout.window_rows))
        .take_while(|&row| last_populated.is_some_and(|last| row <= last))
        .map(|row| range.get_value((row, layout.column)).and_then(cell_text))
        .collect();

    debug!(
        "Read {} rows of column {} from '{}'",
        cells.len(),
        layout.column,
        layout.sheet_name
    );

    ColumnWindow::from_text(cells)
}

/// Text of a cell for numeric coercion; `None` for cells that never coerce.
fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Float(v) => Some(v.to_string()),
        Data::Int(v) => Some(v.to_string()),
        Data::String(s) => Some(s.clone()),
        _ => None,
    }
}
