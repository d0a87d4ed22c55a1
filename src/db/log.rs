use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::warning;
use chrono::Local;
use rusqlite::Connection;
use rusqlite::params;

/// Write an internal log line into the `log` table.
pub fn ttlog(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    // local time, RFC 3339
    let now = Local::now().to_rfc3339();

    let mut stmt = conn.prepare_cached(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, ?2, ?3, ?4)",
    )?;

    stmt.execute(params![now, operation, target, message])?;

    Ok(())
}

/// Record an operation in the audit database of `cfg`.
/// Failures only produce a warning: the operation itself already succeeded.
pub fn audit(cfg: &Config, operation: &str, target: &str, message: &str) {
    let res = DbPool::new(&cfg.audit_db_path())
        .and_then(|pool| ttlog(&pool.conn, operation, target, message));

    if let Err(e) = res {
        warning(format!("Failed to write audit log: {}", e));
    }
}
