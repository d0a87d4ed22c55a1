use crate::errors::{AppError, AppResult};
use crate::models::record::LogRecord;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Workflow status of a document request.
///
/// The stored value is the Korean label; any status may follow any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestStatus {
    #[default]
    Received,
    InReview,
    Approved,
    Rejected,
}

impl RequestStatus {
    pub const ALL: [RequestStatus; 4] = [
        RequestStatus::Received,
        RequestStatus::InReview,
        RequestStatus::Approved,
        RequestStatus::Rejected,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RequestStatus::Received => "접수",
            RequestStatus::InReview => "검토중",
            RequestStatus::Approved => "승인",
            RequestStatus::Rejected => "반려",
        }
    }

    fn alias(&self) -> &'static str {
        match self {
            RequestStatus::Received => "received",
            RequestStatus::InReview => "review",
            RequestStatus::Approved => "approved",
            RequestStatus::Rejected => "rejected",
        }
    }

    /// Accept the Korean label or the English alias (case-insensitive).
    pub fn parse(s: &str) -> AppResult<Self> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|st| st.label() == needle || st.alias().eq_ignore_ascii_case(needle))
            .ok_or_else(|| AppError::InvalidStatus(s.to_string()))
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Priority {
    Low,
    Normal,
    Urgent,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "낮음",
            Priority::Normal => "보통",
            Priority::Urgent => "긴급",
        }
    }
}

/// One row of `doc_requests.csv`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocRequest {
    pub timestamp: String,
    pub requester: String,
    pub team: String,
    pub due_date: String,
    pub category: String,
    pub priority: String,
    pub product: String,
    pub details: String,
    pub attachments: String,
    /// Kept as free text so rows written by older revisions still load.
    pub status: String,
    pub memo: String,
}

impl LogRecord for DocRequest {
    const HEADERS: &'static [&'static str] = &[
        "timestamp",
        "requester",
        "team",
        "due_date",
        "category",
        "priority",
        "product",
        "details",
        "attachments",
        "status",
        "memo",
    ];
    const LABEL: &'static str = "Document requests";

    fn to_row(&self) -> Vec<String> {
        vec![
            self.timestamp.clone(),
            self.requester.clone(),
            self.team.clone(),
            self.due_date.clone(),
            self.category.clone(),
            self.priority.clone(),
            self.product.clone(),
            self.details.clone(),
            self.attachments.clone(),
            self.status.clone(),
            self.memo.clone(),
        ]
    }
}
