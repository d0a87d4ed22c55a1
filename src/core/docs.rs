use crate::core::attachments::store_attachments;
use crate::errors::{AppError, AppResult};
use crate::models::doc::DocEntry;
use crate::store::csv_log;
use crate::utils::date::now_timestamp;
use std::path::{Path, PathBuf};

pub struct DocsLogic;

impl DocsLogic {
    /// Register a document; the file is copied into the uploads directory.
    pub fn register(
        log: &Path,
        uploads: &Path,
        product: &str,
        doc_type: &str,
        title: &str,
        file: &Path,
    ) -> AppResult<DocEntry> {
        if title.trim().is_empty() {
            return Err(AppError::EmptyField("title"));
        }

        let entry = DocEntry {
            timestamp: now_timestamp(),
            product: product.trim().to_string(),
            doc_type: doc_type.trim().to_string(),
            title: title.trim().to_string(),
            path: store_attachments(&[PathBuf::from(file)], uploads)?,
        };

        csv_log::append(log, &entry)?;
        Ok(entry)
    }

    pub fn list(log: &Path, product: Option<&str>) -> AppResult<Vec<DocEntry>> {
        let rows: Vec<DocEntry> = csv_log::load(log)?;
        Ok(rows
            .into_iter()
            .filter(|d| product.is_none_or(|p| d.product.eq_ignore_ascii_case(p.trim())))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    #[test]
    fn register_and_list_per_product() {
        let log = env::temp_dir().join("fportal_docs_catalog.csv");
        fs::remove_file(&log).ok();
        let uploads = env::temp_dir().join("fportal_docs_uploads");
        let src = env::temp_dir().join("fportal_docs_coa.pdf");
        fs::write(&src, "%PDF-1.4").unwrap();

        let e = DocsLogic::register(&log, &uploads, "P001", "COA", "2024 COA", &src).unwrap();
        assert!(e.path.ends_with("fportal_docs_coa.pdf"));
        DocsLogic::register(&log, &uploads, "B300", "사양서", "원료 사양서", &src).unwrap();

        assert_eq!(DocsLogic::list(&log, None).unwrap().len(), 2);
        let p001 = DocsLogic::list(&log, Some("p001")).unwrap();
        assert_eq!(p001.len(), 1);
        assert_eq!(p001[0].title, "2024 COA");
    }

    #[test]
    fn missing_file_is_not_registered() {
        let log = env::temp_dir().join("fportal_docs_missing.csv");
        fs::remove_file(&log).ok();
        let uploads = env::temp_dir().join("fportal_docs_uploads");

        let res = DocsLogic::register(&log, &uploads, "P001", "COA", "x", Path::new("/no/file.pdf"));
        assert!(matches!(res, Err(AppError::AttachmentNotFound(_))));
        assert!(!log.exists());
    }
}
