use crate::errors::{AppError, AppResult};
use crate::models::production::ProductionEntry;
use crate::store::csv_log;
use crate::utils::date::{now_timestamp, parse_date, today};
use crate::utils::numeric::clean_number;
use std::collections::BTreeMap;
use std::path::Path;

pub struct NewEntry {
    pub date: Option<String>,
    pub line: String,
    pub product: String,
    pub quantity: String,
    pub unit: String,
    pub worker: String,
    pub notes: String,
}

/// Per-product sum of the quantities that could be cleaned.
#[derive(Debug, Default, PartialEq)]
pub struct ProductionTotals {
    pub by_product: BTreeMap<String, i64>,
    /// Rows whose quantity is not a number, or would overflow the total.
    pub skipped: usize,
}

pub struct ProductionLogic;

impl ProductionLogic {
    pub fn record(log: &Path, new: NewEntry) -> AppResult<ProductionEntry> {
        if new.product.trim().is_empty() {
            return Err(AppError::EmptyField("product"));
        }

        let date = match &new.date {
            Some(d) => parse_date(d).ok_or_else(|| AppError::InvalidDate(d.clone()))?,
            None => today(),
        };

        let entry = ProductionEntry {
            timestamp: now_timestamp(),
            date: date.format("%Y-%m-%d").to_string(),
            line: new.line.trim().to_string(),
            product: new.product.trim().to_string(),
            quantity: new.quantity.trim().to_string(),
            unit: new.unit.trim().to_string(),
            worker: new.worker.trim().to_string(),
            notes: new.notes.trim().to_string(),
        };

        csv_log::append(log, &entry)?;
        Ok(entry)
    }

    /// Entries, optionally restricted to one date (`YYYY-MM-DD`).
    pub fn list(log: &Path, date: Option<&str>) -> AppResult<Vec<ProductionEntry>> {
        let wanted = match date {
            Some(d) => Some(parse_date(d).ok_or_else(|| AppError::InvalidDate(d.to_string()))?),
            None => None,
        };

        let rows: Vec<ProductionEntry> = csv_log::load(log)?;
        Ok(rows
            .into_iter()
            .filter(|e| wanted.is_none_or(|w| parse_date(&e.date) == Some(w)))
            .collect())
    }

    pub fn totals(entries: &[ProductionEntry]) -> ProductionTotals {
        let mut totals = ProductionTotals::default();
        for e in entries {
            let Some(q) = clean_number(&e.quantity) else {
                totals.skipped += 1;
                continue;
            };
            let sum = totals.by_product.entry(e.product.clone()).or_insert(0);
            match sum.checked_add(q) {
                Some(v) => *sum = v,
                // out of i64 range: the row is left out of the total
                None => totals.skipped += 1,
            }
        }
        totals
    }
}
