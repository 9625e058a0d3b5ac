use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use polars::prelude::*;

use crate::error::ProjectionError;

/// Load a dataset in CSV or spreadsheet format.
///
/// Dispatch is on the lowercased file extension: `.csv` goes to the polars
/// CSV reader, everything else is handed to the spreadsheet reader. The
/// fallback is deliberately permissive — the data producer exports both
/// formats and unknown extensions have always been treated as spreadsheets.
pub fn load_dataset(path: &Path) -> Result<DataFrame, ProjectionError> {
    if !path.is_file() {
        return Err(ProjectionError::Loading(format!(
            "no such file: {}",
            path.display()
        )));
    }

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("csv") => {
            tracing::debug!(path = %path.display(), "loading as CSV");
            read_csv(path)
        }
        other => {
            tracing::debug!(path = %path.display(), extension = ?other, "loading as spreadsheet");
            read_spreadsheet(path)
        }
    }
}

/// Read a CSV file with a header row and inferred schema.
/// Trims whitespace from column names.
fn read_csv(path: &Path) -> Result<DataFrame, ProjectionError> {
    let mut df = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .and_then(|reader| reader.finish())
        .map_err(|e| ProjectionError::Loading(format!("{}: {}", path.display(), e)))?;

    let trimmed: Vec<String> = df
        .get_column_names_str()
        .iter()
        .map(|c| c.trim().to_string())
        .collect();
    df.set_column_names(trimmed.as_slice())?;

    Ok(df)
}

/// Read the first worksheet of an xlsx/xls/ods workbook into a DataFrame.
///
/// The first row is taken as the header; cells are carried over as their
/// native type and each column is unified to a supertype (so a column mixing
/// integer and float cells becomes Float64).
fn read_spreadsheet(path: &Path) -> Result<DataFrame, ProjectionError> {
    let mut workbook = open_workbook_auto(path)
        .map_err(|e| ProjectionError::Loading(format!("{}: {}", path.display(), e)))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| {
            ProjectionError::Loading(format!("{}: workbook has no sheets", path.display()))
        })?
        .map_err(|e| ProjectionError::Loading(format!("{}: {}", path.display(), e)))?;

    let mut rows = range.rows();
    let header: Vec<String> = rows
        .next()
        .ok_or_else(|| {
            ProjectionError::Loading(format!("{}: sheet has no header row", path.display()))
        })?
        .iter()
        .map(|cell| cell.to_string().trim().to_string())
        .collect();

    let mut values: Vec<Vec<AnyValue>> = vec![Vec::new(); header.len()];
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(header.len()) {
            values[i].push(cell_to_any_value(cell));
        }
        // Pad short rows so every column stays the same height.
        for column in values.iter_mut().skip(row.len()) {
            column.push(AnyValue::Null);
        }
    }

    let columns: Vec<Column> = header
        .iter()
        .zip(values.iter())
        .map(|(name, vals)| {
            Series::from_any_values(name.as_str().into(), vals, false).map(Column::from)
        })
        .collect::<Result<_, _>>()
        .map_err(|e| ProjectionError::Loading(format!("{}: {}", path.display(), e)))?;

    DataFrame::new(columns)
        .map_err(|e| ProjectionError::Loading(format!("{}: {}", path.display(), e)))
}

fn cell_to_any_value(cell: &Data) -> AnyValue<'static> {
    match cell {
        Data::Empty => AnyValue::Null,
        Data::Int(v) => AnyValue::Int64(*v),
        Data::Float(v) => AnyValue::Float64(*v),
        Data::Bool(v) => AnyValue::Boolean(*v),
        Data::String(s) => AnyValue::StringOwned(s.as_str().into()),
        other => AnyValue::StringOwned(other.to_string().into()),
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
