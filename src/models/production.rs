use crate::models::record::LogRecord;
use serde::{Deserialize, Serialize};

/// One row of `production_logs.csv` (daily production form).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductionEntry {
    pub timestamp: String,
    pub date: String,
    pub line: String,
    pub product: String,
    /// As typed on the form; cleaned only when totals are computed.
    pub quantity: String,
    pub unit: String,
    pub worker: String,
    pub notes: String,
}

impl LogRecord for ProductionEntry {
    const HEADERS: &'static [&'static str] = &[
        "timestamp",
        "date",
        "line",
        "product",
        "quantity",
        "unit",
        "worker",
        "notes",
    ];
    const LABEL: &'static str = "Production log";

    fn to_row(&self) -> Vec<String> {
        vec![
            self.timestamp.clone(),
            self.date.clone(),
            self.line.clone(),
            self.product.clone(),
            self.quantity.clone(),
            self.unit.clone(),
            self.worker.clone(),
            self.notes.clone(),
        ]
    }
}
