use crate::models::record::LogRecord;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }
}

/// One row of `voc_logs.csv`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VocRecord {
    pub timestamp: String,
    pub date: String,
    pub voc_type: String,
    pub severity: String,
    pub product: String,
    pub description: String,
    pub cause: String,
    pub action: String,
    pub attachments: String,
}

impl LogRecord for VocRecord {
    const HEADERS: &'static [&'static str] = &[
        "timestamp",
        "date",
        "voc_type",
        "severity",
        "product",
        "description",
        "cause",
        "action",
        "attachments",
    ];
    const LABEL: &'static str = "VOC log";

    fn to_row(&self) -> Vec<String> {
        vec![
            self.timestamp.clone(),
            self.date.clone(),
            self.voc_type.clone(),
            self.severity.clone(),
            self.product.clone(),
            self.description.clone(),
            self.cause.clone(),
            self.action.clone(),
            self.attachments.clone(),
        ]
    }
}
