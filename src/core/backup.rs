use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::export::ensure_writable;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

/// Every file below `dir`, as (absolute path, path relative to `dir`).
fn collect_files(dir: &Path) -> AppResult<Vec<(PathBuf, PathBuf)>> {
    let mut out = Vec::new();
    let mut pending = vec![dir.to_path_buf()];

    while let Some(current) = pending.pop() {
        for entry in fs::read_dir(&current)? {
            let path = entry?.path();
            if path.is_dir() {
                pending.push(path);
            } else if let Ok(rel) = path.strip_prefix(dir) {
                out.push((path.clone(), rel.to_path_buf()));
            }
        }
    }

    out.sort_by(|a, b| a.1.cmp(&b.1));
    Ok(out)
}

pub struct BackupLogic;

impl BackupLogic {
    /// Back up the whole data directory (CSV logs, uploads, audit DB).
    ///
    /// Without `compress` the files are copied into the directory `dest`;
    /// with `compress` they are written into the zip archive `dest`
    /// (`.zip` extension added). Returns the final path and the file count.
    pub fn backup(cfg: &Config, dest: &str, compress: bool, force: bool) -> AppResult<(PathBuf, usize)> {
        let src = cfg.data_path();
        let dest = PathBuf::from(dest);

        if !dest.is_absolute() {
            return Err(AppError::Other(format!(
                "Backup path must be absolute: {}",
                dest.display()
            )));
        }

        if !src.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Data directory not found: {}", src.display()),
            )
            .into());
        }

        let files = collect_files(&src)?;

        if compress {
            let zip_path = dest.with_extension("zip");
            ensure_writable(&zip_path, force)?;
            compress_files(&files, &zip_path)?;
            Ok((zip_path, files.len()))
        } else {
            if dest.starts_with(&src) {
                return Err(AppError::Other(
                    "Backup directory must be outside the data directory".to_string(),
                ));
            }
            for (abs, rel) in &files {
                let target = dest.join(rel);
                if let Some(parent) = target.parent() {
                    fs::create_dir_all(parent)?;
                }
                fs::copy(abs, &target)?;
            }
            Ok((dest, files.len()))
        }
    }
}

/// Write `files` into a deflated zip archive.
fn compress_files(files: &[(PathBuf, PathBuf)], zip_path: &Path) -> AppResult<()> {
    if let Some(parent) = zip_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    for (abs, rel) in files {
        // zip entry names always use '/'
        let name = rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        zip.start_file(name, options.clone()).map_err(io::Error::other)?;

        let mut f = fs::File::open(abs)?;
        io::copy(&mut f, &mut zip)?;
    }

    zip.finish().map_err(io::Error::other)?;
    Ok(())
}
