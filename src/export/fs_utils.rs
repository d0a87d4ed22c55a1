//! Overwrite guard shared by `export`, `backup` and `search --html`.

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::io::{self, BufRead, Write};
use std::path::Path;

/// `y`/`yes` (any case) confirms; anything else, including an empty line, declines.
fn confirmed(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Ask on stdin before replacing an earlier report, export or backup.
fn confirm_replace(path: &Path, input: &mut impl BufRead) -> AppResult<bool> {
    warning(format!("{} already exists.", path.display()));
    print!("Replace it? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(confirmed(&answer))
}

/// Make sure an output file may be written: a new path always may, an
/// existing one only with `--force` or after the user confirms.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    if confirm_replace(path, &mut io::stdin().lock())? {
        info(format!("{} will be replaced.", path.display()));
        Ok(())
    } else {
        Err(AppError::Export(format!(
            "{} kept; pass --force to replace it",
            path.display()
        )))
    }
}
