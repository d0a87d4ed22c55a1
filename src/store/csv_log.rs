//! Append-only CSV logs.
//!
//! Every log file starts with the record's header line. Appends never touch
//! existing rows; status changes rewrite the whole file through a sibling
//! temporary file followed by a rename. A file still carrying an older column
//! layout is brought to the current one before anything is appended to it.

use crate::errors::AppResult;
use crate::models::record::LogRecord;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

fn ensure_parent(path: &Path) -> AppResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

fn is_empty_file(path: &Path) -> AppResult<bool> {
    Ok(!path.exists() || fs::metadata(path)?.len() == 0)
}

/// Create `path` with only the header line if it does not exist yet.
/// Returns `true` when the file was created.
pub fn ensure_log<T: LogRecord>(path: &Path) -> AppResult<bool> {
    if !is_empty_file(path)? {
        return Ok(false);
    }

    ensure_parent(path)?;
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(T::HEADERS)?;
    wtr.flush()?;
    Ok(true)
}

/// Whether the header line of `path` is exactly `T::HEADERS`.
fn has_current_layout<T: LogRecord>(path: &Path) -> AppResult<bool> {
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_path(path)?;
    let current: Vec<&str> = rdr
        .headers()?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').trim())
        .collect();
    Ok(current == T::HEADERS)
}

/// Append one record, writing the header first when the file is new.
///
/// Rows are written positionally, so a log with another header is first
/// rewritten under `T::HEADERS` (columns matched by name, unknown ones dropped).
pub fn append<T: LogRecord>(path: &Path, record: &T) -> AppResult<()> {
    if !ensure_log::<T>(path)? && !has_current_layout::<T>(path)? {
        let rows: Vec<T> = load(path)?;
        rewrite(path, &rows)?;
    }

    let file = OpenOptions::new().append(true).open(path)?;
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);
    wtr.serialize(record)?;
    wtr.flush()?;
    Ok(())
}

/// Load every record; a missing file is an empty log.
///
/// Rows are matched to fields by header name, so files written by an older
/// column layout still load (absent columns take their default value).
pub fn load<T: LogRecord>(path: &Path) -> AppResult<Vec<T>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_path(path)?;

    let mut out = Vec::new();
    for rec in rdr.deserialize() {
        out.push(rec?);
    }
    Ok(out)
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Replace the whole file with `records`.
pub fn rewrite<T: LogRecord>(path: &Path, records: &[T]) -> AppResult<()> {
    ensure_parent(path)?;
    let tmp = temp_sibling(path);

    {
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&tmp)?;
        wtr.write_record(T::HEADERS)?;
        for r in records {
            wtr.serialize(r)?;
        }
        wtr.flush()?;
    }

    fs::rename(&tmp, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::request::DocRequest;
    use crate::models::voc::VocRecord;
    use std::env;

    fn temp_log(name: &str) -> PathBuf {
        let path = env::temp_dir().join(format!("{}_fportal_log.csv", name));
        fs::remove_file(&path).ok();
        path
    }

    fn voc(desc: &str) -> VocRecord {
        VocRecord {
            timestamp: "2024-05-01 10:00:00".into(),
            date: "2024-05-01".into(),
            voc_type: "이물".into(),
            severity: "high".into(),
            product: "P001".into(),
            description: desc.into(),
            ..Default::default()
        }
    }

    #[test]
    fn append_adds_exactly_one_row() {
        let path = temp_log("append_one");

        append(&path, &voc("first")).unwrap();
        assert_eq!(load::<VocRecord>(&path).unwrap().len(), 1);

        append(&path, &voc("second, with comma\nand newline")).unwrap();
        let rows: Vec<VocRecord> = load(&path).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].description, "second, with comma\nand newline");

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.matches("timestamp,date,voc_type").count(), 1);
    }

    #[test]
    fn missing_file_is_empty_log() {
        let path = temp_log("missing");
        assert!(load::<VocRecord>(&path).unwrap().is_empty());
    }

    #[test]
    fn ensure_log_writes_header_once() {
        let path = temp_log("ensure");
        assert!(ensure_log::<VocRecord>(&path).unwrap());
        assert!(!ensure_log::<VocRecord>(&path).unwrap());
        assert_eq!(load::<VocRecord>(&path).unwrap().len(), 0);
    }

    #[test]
    fn older_column_layout_still_loads() {
        let path = temp_log("old_layout");
        fs::write(
            &path,
            "timestamp,requester,team,details,status\n2023-01-02 09:00:00,이영희,품질팀,성적서 요청,승인\n",
        )
        .unwrap();

        let rows: Vec<DocRequest> = load(&path).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].requester, "이영희");
        assert_eq!(rows[0].status, "승인");
        assert_eq!(rows[0].memo, "");
    }

    #[test]
    fn append_to_older_layout_keeps_columns_aligned() {
        let path = temp_log("old_layout_append");
        fs::write(
            &path,
            "timestamp,requester,team,details,status\n2023-01-02 09:00:00,이영희,품질팀,성적서 요청,승인\n",
        )
        .unwrap();

        let new = DocRequest {
            timestamp: "2024-06-01 10:00:00".into(),
            requester: "김민수".into(),
            team: "생산팀".into(),
            due_date: "2024-06-30".into(),
            category: "성적서".into(),
            priority: "보통".into(),
            product: "P001".into(),
            details: "COA".into(),
            status: "접수".into(),
            ..Default::default()
        };
        append(&path, &new).unwrap();

        let rows: Vec<DocRequest> = load(&path).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].details, "성적서 요청");
        assert_eq!(rows[0].status, "승인");
        assert_eq!(rows[1], new);

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with(&DocRequest::HEADERS.join(",")));
    }

    #[test]
    fn append_with_bom_header_is_not_rewritten() {
        let path = temp_log("bom_header");
        fs::write(&path, format!("\u{feff}{}\n", VocRecord::HEADERS.join(","))).unwrap();

        append(&path, &voc("a")).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with('\u{feff}'));
        assert_eq!(load::<VocRecord>(&path).unwrap().len(), 1);
    }

    #[test]
    fn rewrite_replaces_content() {
        let path = temp_log("rewrite");
        append(&path, &voc("a")).unwrap();
        append(&path, &voc("b")).unwrap();

        let mut rows: Vec<VocRecord> = load(&path).unwrap();
        rows[0].action = "재교육".into();
        rewrite(&path, &rows).unwrap();

        let reloaded: Vec<VocRecord> = load(&path).unwrap();
        assert_eq!(reloaded, rows);
        assert!(!temp_sibling(&path).exists());
    }
}
