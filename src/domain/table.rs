use serde::{Deserialize, Serialize};

/// A rectangular snapshot of an uploaded file: ordered rows of string cells.
/// The first row is the header row; there is no typing of columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table {
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn header(&self) -> Option<&Vec<String>> {
        self.rows.first()
    }

    /// Data rows, i.e. everything below the header.
    pub fn row_count(&self) -> usize {
        self.rows.len().saturating_sub(1)
    }

    pub fn column_count(&self) -> usize {
        self.header().map(|h| h.len()).unwrap_or(0)
    }

    /// Flatten every row (header included) into one text blob: cells joined
    /// with ", ", rows joined with newlines. This is both the prompt payload
    /// and the `raw_data` echoed back in the report.
    pub fn to_flat_text(&self) -> String {
        self.rows
            .iter()
            .map(|row| row.join(", "))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
