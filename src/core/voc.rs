use crate::core::attachments::store_attachments;
use crate::errors::{AppError, AppResult};
use crate::models::voc::{Severity, VocRecord};
use crate::store::csv_log;
use crate::utils::date::{now_timestamp, parse_date, today};
use std::path::{Path, PathBuf};

pub struct NewVoc {
    /// Occurrence date; today when absent.
    pub date: Option<String>,
    pub voc_type: String,
    pub severity: Severity,
    pub product: String,
    pub description: String,
    pub cause: String,
    pub action: String,
    pub attachments: Vec<PathBuf>,
}

pub struct VocLogic;

impl VocLogic {
    pub fn record(log: &Path, uploads: &Path, new: NewVoc) -> AppResult<VocRecord> {
        if new.description.trim().is_empty() {
            return Err(AppError::EmptyField("description"));
        }

        let date = match &new.date {
            Some(d) => parse_date(d).ok_or_else(|| AppError::InvalidDate(d.clone()))?,
            None => today(),
        };

        let record = VocRecord {
            timestamp: now_timestamp(),
            date: date.format("%Y-%m-%d").to_string(),
            voc_type: new.voc_type.trim().to_string(),
            severity: new.severity.label().to_string(),
            product: new.product.trim().to_string(),
            description: new.description.trim().to_string(),
            cause: new.cause.trim().to_string(),
            action: new.action.trim().to_string(),
            attachments: store_attachments(&new.attachments, uploads)?,
        };

        csv_log::append(log, &record)?;
        Ok(record)
    }

    /// VOC records, optionally restricted to one product (case-insensitive substring).
    pub fn list(log: &Path, product: Option<&str>) -> AppResult<Vec<VocRecord>> {
        let rows: Vec<VocRecord> = csv_log::load(log)?;
        let needle = product.map(|p| p.trim().to_lowercase());

        Ok(rows
            .into_iter()
            .filter(|r| {
                needle
                    .as_deref()
                    .is_none_or(|n| r.product.to_lowercase().contains(n))
            })
            .collect())
    }
}
