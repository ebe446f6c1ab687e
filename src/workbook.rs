//! Workbook parsing
//!
//! Reads the first sheet of a workbook into row records keyed by header text.

use calamine::{Data, Reader, open_workbook_auto_from_rs};
use std::collections::{HashMap, HashSet};
use std::io::Cursor;
use thiserror::Error;

/// Prefix given to header cells that carry no text.
const EMPTY_HEADER: &str = "__EMPTY";

#[derive(Debug, Error)]
pub enum ParseError {
    /// The bytes are not a workbook calamine can read.
    #[error("Invalid workbook: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("Workbook contains no sheets")]
    NoSheets,
}

/// One data row, keyed by header text exactly as written in the sheet.
///
/// Blank cells are absent, so a missing column and an empty cell look the same.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowRecord {
    fields: HashMap<String, String>,
}

impl RowRecord {
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for RowRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// The first sheet of a workbook.
#[derive(Debug, Clone, Default)]
pub struct Sheet {
    /// Name of the sheet that was read.
    pub name: String,
    /// Header row after duplicate and empty names were made unique.
    pub headers: Vec<String>,
    /// Data rows in sheet order.
    pub rows: Vec<RowRecord>,
}

/// Parse `bytes` and read the first sheet by position.
///
/// The sheet is picked by index, never by name: reordering the sheets of the
/// workbook changes which one is read.
pub fn read_first_sheet(bytes: Vec<u8>) -> Result<Sheet, ParseError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;
    let name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or(ParseError::NoSheets)?;
    let range = workbook.worksheet_range(&name)?;

    let mut rows = range.rows();
    let headers = match rows.next() {
        Some(header_row) => unique_headers(header_row.iter().map(cell_text)),
        None => Vec::new(),
    };

    let records = rows
        .map(|row| {
            headers
                .iter()
                .zip(row.iter())
                .map(|(header, cell)| (header.as_str(), cell_text(cell)))
                .filter(|(_, value)| !value.is_empty())
                .collect::<RowRecord>()
        })
        .filter(|record| !record.is_empty())
        .collect();

    Ok(Sheet {
        name,
        headers,
        rows: records,
    })
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Later duplicates get `_1`, `_2`, ... appended; blank headers become `__EMPTY`.
fn unique_headers(raw: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    raw.map(|header| {
        let base = if header.is_empty() {
            EMPTY_HEADER.to_string()
        } else {
            header
        };
        let mut candidate = base.clone();
        let mut suffix = 1;
        while seen.contains(&candidate) {
            candidate = format!("{}_{}", base, suffix);
            suffix += 1;
        }
        seen.insert(candidate.clone());
        candidate
    })
    .collect()
}
