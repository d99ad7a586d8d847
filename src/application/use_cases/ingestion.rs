//! Tabular ingestion: raw file bytes + filename in, `Table` out.
//!
//! Dispatch is by extension only, no content sniffing. CSV parsing is a
//! plain line/comma split with per-cell trimming and NO quoting support:
//! a comma inside a quoted field is a column separator. That limitation is
//! part of the observable contract (re-joining cells with commas must
//! reconstruct the source file byte-for-byte when no field contains one),
//! so it must not be "fixed" by swapping in a quoting-aware reader.

use crate::domain::error::{AppError, Result};
use crate::domain::table::Table;
use calamine::{open_workbook_auto_from_rs, DataType, Reader};
use std::io::Cursor;

pub fn ingest(bytes: &[u8], filename: &str) -> Result<Table> {
    let table = if filename.to_lowercase().ends_with(".csv") {
        parse_csv(&decode_text(bytes))
    } else {
        parse_workbook(bytes)?
    };

    if table.is_empty() {
        return Err(AppError::EmptyInput(format!(
            "{} contains no rows",
            filename
        )));
    }

    Ok(table)
}

/// Decode file bytes to text. UTF-8 first, then WINDOWS-1252, which accepts
/// any byte sequence, so exported legacy CSVs still load.
fn decode_text(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(content) => content.to_string(),
        Err(_) => {
            let (content, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
            content.into_owned()
        }
    }
}

/// Split on newlines, then commas, trimming each cell. Every line becomes a
/// row, including empty trailing lines; filtering them would break the
/// comma-join round-trip.
fn parse_csv(content: &str) -> Table {
    let rows = content
        .split('\n')
        .map(|line| {
            line.split(',')
                .map(|value| value.trim().to_string())
                .collect()
        })
        .collect();

    Table::new(rows)
}

/// Parse the first sheet of a workbook. Each cell is stringified the same
/// way regardless of its native type.
fn parse_workbook(bytes: &[u8]) -> Result<Table> {
    let cursor = Cursor::new(bytes.to_vec());

    let mut workbook = open_workbook_auto_from_rs(cursor)
        .map_err(|e| AppError::ParseError(format!("Failed to open workbook: {}", e)))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| AppError::ParseError("No worksheet found".to_string()))?
        .map_err(|e| AppError::ParseError(format!("Failed to read worksheet range: {}", e)))?;

    let mut rows = Vec::new();
    for row in range.rows() {
        let row_data: Vec<String> = row
            .iter()
            .map(|cell| {
                cell.as_string()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| format!("{}", cell))
            })
            .collect();
        rows.push(row_data);
    }

    Ok(Table::new(rows))
}
