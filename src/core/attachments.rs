use crate::errors::{AppError, AppResult};
use crate::models::record::join_paths;
use crate::utils::path::upload_file_name;
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

/// Copy `src` to a file in `dir` that did not exist before; returns its path.
///
/// The first candidate is `<prefix>_<name>`, then `<prefix>-2_<name>`,
/// `<prefix>-3_<name>`... An existing upload is never replaced.
fn copy_to_free_name(src: &Path, dir: &Path, prefix: usize, name: &str) -> AppResult<PathBuf> {
    let mut n = 1;
    loop {
        let candidate = if n == 1 {
            format!("{prefix}_{name}")
        } else {
            format!("{prefix}-{n}_{name}")
        };
        let dest = dir.join(candidate);

        match OpenOptions::new().write(true).create_new(true).open(&dest) {
            Ok(mut out) => {
                let mut input = File::open(src)?;
                io::copy(&mut input, &mut out)?;
                return Ok(dest);
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => n += 1,
            Err(e) => return Err(e.into()),
        }
    }
}

/// Copy every attachment into `uploads_dir` and return the stored-paths cell.
///
/// All sources are checked before anything is copied, so a missing file
/// leaves the uploads directory untouched.
pub fn store_attachments(files: &[PathBuf], uploads_dir: &Path) -> AppResult<String> {
    if files.is_empty() {
        return Ok(String::new());
    }

    if let Some(missing) = files.iter().find(|f| !f.is_file()) {
        return Err(AppError::AttachmentNotFound(missing.display().to_string()));
    }

    fs::create_dir_all(uploads_dir)?;

    let mut stored = Vec::with_capacity(files.len());
    for (i, src) in files.iter().enumerate() {
        let dest = copy_to_free_name(src, uploads_dir, i + 1, &upload_file_name(src))?;
        stored.push(dest.to_string_lossy().to_string());
    }

    Ok(join_paths(&stored))
}
