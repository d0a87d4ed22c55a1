use crate::models::record::LogRecord;
use serde::{Deserialize, Serialize};

/// One row of `doc_catalog.csv`: a registered product document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocEntry {
    pub timestamp: String,
    pub product: String,
    pub doc_type: String,
    pub title: String,
    pub path: String,
}

impl LogRecord for DocEntry {
    const HEADERS: &'static [&'static str] = &["timestamp", "product", "doc_type", "title", "path"];
    const LABEL: &'static str = "Document catalog";

    fn to_row(&self) -> Vec<String> {
        vec![
            self.timestamp.clone(),
            self.product.clone(),
            self.doc_type.clone(),
            self.title.clone(),
            self.path.clone(),
        ]
    }
}
