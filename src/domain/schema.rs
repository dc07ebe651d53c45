// Dataset schema - the columns actually present in the active dataset
use serde_json::Value;
use std::collections::HashSet;

/// Ordered column names of the active dataset.
///
/// An empty schema means "not known yet", not "no valid columns".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnSchema {
    columns: Vec<String>,
    lowered: HashSet<String>,
}

impl ColumnSchema {
    pub fn new(columns: Vec<String>) -> Self {
        let lowered = columns.iter().map(|c| c.to_lowercase()).collect();
        Self { columns, lowered }
    }

    /// Build from an untrusted JSON value. Anything that is not an array of
    /// strings contributes nothing.
    pub fn from_value(value: &Value) -> Self {
        let columns = value
            .as_array()
            .map(|items| {
                items
                    .iter()
                    .filter_map(|v| v.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default();
        Self::new(columns)
    }

    pub fn is_known(&self) -> bool {
        !self.columns.is_empty()
    }

    pub fn contains(&self, column: &str) -> bool {
        self.lowered.contains(&column.to_lowercase())
    }

    pub fn first(&self) -> Option<&str> {
        self.columns.first().map(String::as_str)
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }
}
