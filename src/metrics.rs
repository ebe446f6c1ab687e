//! Aggregate metrics computed from the workbook rows.

use crate::consts::cli_consts::columns;
use crate::workbook::RowRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Header names the metrics are read from. Matching is exact: a header that
/// differs in case or whitespace is treated as absent.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ColumnNames {
    pub technique: String,
    pub state: String,
    pub municipality: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            technique: columns::TECHNIQUE.to_string(),
            state: columns::STATE.to_string(),
            municipality: columns::MUNICIPALITY.to_string(),
        }
    }
}

impl ColumnNames {
    /// Recognized columns that do not appear in `headers`.
    pub fn missing_from<'a>(&'a self, headers: &[String]) -> Vec<&'a str> {
        [&self.technique, &self.state, &self.municipality]
            .into_iter()
            .filter(|name| !headers.contains(*name))
            .map(String::as_str)
            .collect()
    }
}

/// The three counts shown on the dashboard cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AggregateMetrics {
    /// Rows with a non-empty technique name.
    pub techniques: usize,
    /// Distinct non-blank states.
    pub states: usize,
    /// Distinct non-blank municipalities.
    pub municipalities: usize,
}

impl AggregateMetrics {
    pub fn compute(rows: &[RowRecord], columns: &ColumnNames) -> Self {
        let techniques = rows
            .iter()
            .filter(|row| row.get(&columns.technique).is_some_and(|v| !v.is_empty()))
            .count();

        Self {
            techniques,
            states: distinct_trimmed(rows, &columns.state),
            municipalities: distinct_trimmed(rows, &columns.municipality),
        }
    }
}

fn distinct_trimmed(rows: &[RowRecord], field: &str) -> usize {
    rows.iter()
        .filter_map(|row| row.get(field))
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .collect::<HashSet<_>>()
        .len()
}
