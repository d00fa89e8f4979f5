use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One CSV data line keyed by normalized column name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    pub fields: HashMap<String, String>,
}

impl RawRow {
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawRow {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentRecord {
    pub source_id: String,
    pub tracking_number: String,
    pub carrier_code: String,
    pub shipment_method: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemOutcome {
    pub status: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionResult {
    pub status: String,
    pub message: String,
    pub execution_time: String,
    pub results: Vec<ItemOutcome>,
}

/// Row counts gathered while transforming one upload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransformSummary {
    pub rows_read: usize,
    pub missing_po: usize,
    pub unparseable_order: usize,
    pub duplicates: usize,
    pub emitted: usize,
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub records: Vec<ShipmentRecord>,
    pub summary: TransformSummary,
}
