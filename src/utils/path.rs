//! Path utilities: expand ~, build upload file names.

use chrono::Local;
use std::path::{Path, PathBuf};

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Name under which an attachment is stored in the uploads directory:
/// `<YYYYmmddHHMMSS>_<original file name>`.
pub fn upload_file_name(original: &Path) -> String {
    let stamp = Local::now().format("%Y%m%d%H%M%S");
    let name = original
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "attachment".to_string());
    format!("{stamp}_{name}")
}
