//! Document request workflow: submit, list, change status.

use crate::core::attachments::store_attachments;
use crate::errors::{AppError, AppResult};
use crate::models::request::{DocRequest, Priority, RequestStatus};
use crate::store::csv_log;
use crate::utils::date::{now_timestamp, parse_date};
use std::path::{Path, PathBuf};

pub struct NewRequest {
    pub requester: String,
    pub team: String,
    pub due_date: String,
    pub category: String,
    pub priority: Priority,
    pub product: String,
    pub details: String,
    pub attachments: Vec<PathBuf>,
}

pub struct StatusChange {
    pub previous: String,
    pub request: DocRequest,
}

pub struct RequestLogic;

impl RequestLogic {
    pub fn submit(log: &Path, uploads: &Path, new: NewRequest) -> AppResult<DocRequest> {
        if new.requester.trim().is_empty() {
            return Err(AppError::EmptyField("requester"));
        }
        if new.details.trim().is_empty() {
            return Err(AppError::EmptyField("details"));
        }
        let due = parse_date(&new.due_date).ok_or_else(|| AppError::InvalidDate(new.due_date.clone()))?;

        let attachments = store_attachments(&new.attachments, uploads)?;

        let record = DocRequest {
            timestamp: now_timestamp(),
            requester: new.requester.trim().to_string(),
            team: new.team.trim().to_string(),
            due_date: due.format("%Y-%m-%d").to_string(),
            category: new.category.trim().to_string(),
            priority: new.priority.label().to_string(),
            product: new.product.trim().to_string(),
            details: new.details.trim().to_string(),
            attachments,
            status: RequestStatus::default().label().to_string(),
            memo: String::new(),
        };

        csv_log::append(log, &record)?;
        Ok(record)
    }

    /// Requests with their 1-based row position, optionally filtered by status.
    pub fn list(log: &Path, status: Option<RequestStatus>) -> AppResult<Vec<(usize, DocRequest)>> {
        let rows: Vec<DocRequest> = csv_log::load(log)?;
        Ok(rows
            .into_iter()
            .enumerate()
            .map(|(i, r)| (i + 1, r))
            .filter(|(_, r)| status.is_none_or(|s| r.status.trim() == s.label()))
            .collect())
    }

    /// Set the status of the request at 1-based position `index`.
    ///
    /// `memo`, when given, replaces the previous memo. Every other row is
    /// written back unchanged.
    pub fn update_status(
        log: &Path,
        index: usize,
        status: RequestStatus,
        memo: Option<&str>,
    ) -> AppResult<StatusChange> {
        let mut rows: Vec<DocRequest> = csv_log::load(log)?;
        let len = rows.len();

        let row = index
            .checked_sub(1)
            .and_then(|i| rows.get_mut(i))
            .ok_or(AppError::InvalidRowIndex { index, len })?;

        let previous = std::mem::replace(&mut row.status, status.label().to_string());
        if let Some(m) = memo {
            row.memo = m.trim().to_string();
        }
        let request = row.clone();

        csv_log::rewrite(log, &rows)?;
        Ok(StatusChange { previous, request })
    }
}
