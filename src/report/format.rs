//! Row ordering and line formatting.
//!
//! Output lines carry no header and no trailing metadata, so the stream can be
//! piped straight into a spreadsheet or plotting script.

use std::io::Write;

use crate::domain::{ColumnOrder, OutputFormat, ResultRow};
use crate::error::{AppError, ErrorKind};

/// Sort rows by ascending C. Workers finish in arbitrary order.
pub fn sort_rows(mut rows: Vec<ResultRow>) -> Vec<ResultRow> {
    rows.sort_by(|a, b| a.c.total_cmp(&b.c));
    rows
}

/// One CSV line: C and P with 12 decimals, EV with 6.
pub fn format_row(row: &ResultRow, columns: ColumnOrder) -> String {
    match columns {
        ColumnOrder::CPEv => format!("{:.12},{:.12},{:.6}", row.c, row.p, row.ev),
        ColumnOrder::PCEv => format!("{:.12},{:.12},{:.6}", row.p, row.c, row.ev),
    }
}

/// One JSON object per row. Field names are fixed, so `columns` does not apply.
pub fn format_json_row(row: &ResultRow) -> Result<String, AppError> {
    serde_json::to_string(row)
        .map_err(|e| AppError::new(ErrorKind::Internal, format!("Failed to encode row as JSON: {e}")))
}

/// Sort rows by C and write them, one per line.
pub fn render<W: Write>(
    out: &mut W,
    rows: Vec<ResultRow>,
    columns: ColumnOrder,
    format: OutputFormat,
) -> Result<(), AppError> {
    write_rows(out, &sort_rows(rows), columns, format)
}

/// Write rows in the given order, one per line.
pub fn write_rows<W: Write>(
    out: &mut W,
    rows: &[ResultRow],
    columns: ColumnOrder,
    format: OutputFormat,
) -> Result<(), AppError> {
    for row in rows {
        let line = match format {
            OutputFormat::Csv => format_row(row, columns),
            OutputFormat::Json => format_json_row(row)?,
        };
        writeln!(out, "{line}")
            .map_err(|e| AppError::new(ErrorKind::Internal, format!("Failed to write output row: {e}")))?;
    }
    out.flush()
        .map_err(|e| AppError::new(ErrorKind::Internal, format!("Failed to flush output: {e}")))?;
    Ok(())
}
