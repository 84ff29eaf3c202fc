use crate::error::ScanError;
use crate::models::{SheetSummary, TableShape};
use calamine::{open_workbook_auto, Data, Range, Reader};
use std::path::Path;
use tracing::debug;

/// Parse a CSV file and return its shape.
/// The first record is the header; rows count the records after it.
pub fn csv_shape(path: &Path) -> Result<TableShape, ScanError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)?;

    let column_names: Vec<String> = reader
        .headers()?
        .iter()
        .map(|name| name.to_string())
        .collect();

    let mut rows = 0u64;
    for record in reader.records() {
        record?;
        rows += 1;
    }

    debug!(
        "parsed csv {}: {} rows, {} columns",
        path.display(),
        rows,
        column_names.len()
    );

    Ok(TableShape {
        rows,
        columns: column_names.len(),
        column_names,
    })
}

/// Open a workbook (xlsx or legacy xls) and summarize every sheet
/// in the order the workbook metadata enumerates them.
pub fn workbook_summary(path: &Path) -> Result<Vec<SheetSummary>, ScanError> {
    let mut workbook = open_workbook_auto(path)?;
    let sheet_names = workbook.sheet_names().to_owned();

    debug!(
        "opened workbook {}: {} sheet(s)",
        path.display(),
        sheet_names.len()
    );

    let mut sheets = Vec::with_capacity(sheet_names.len());
    for name in sheet_names {
        let range = workbook.worksheet_range(&name)?;

        sheets.push(SheetSummary {
            shape: range_shape(&range),
            name,
        });
    }

    Ok(sheets)
}

/// Shape of one sheet's used range: the first row is the header,
/// everything below it is data. An empty range has no columns and no rows.
pub fn range_shape(range: &Range<Data>) -> TableShape {
    let (height, width) = range.get_size();

    if height == 0 {
        return TableShape {
            rows: 0,
            columns: 0,
            column_names: Vec::new(),
        };
    }

    let column_names: Vec<String> = match range.rows().next() {
        Some(header) => header.iter().map(|cell| cell.to_string()).collect(),
        None => Vec::new(),
    };

    TableShape {
        rows: (height - 1) as u64,
        columns: width,
        column_names,
    }
}
