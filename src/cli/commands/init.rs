use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::chatbot::ChatbotRequest;
use crate::models::doc::DocEntry;
use crate::models::production::ProductionEntry;
use crate::models::request::DocRequest;
use crate::models::voc::VocRecord;
use crate::store::csv_log::ensure_log;
use crate::ui::messages::{info, success, warning};

/// Handle the `init` command
///
/// This initializes:
///  - the configuration file (skipped with --test)
///  - the data directory and uploads folder
///  - every CSV log, header line only
///  - the audit database
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    info("Initializing factory portal…");

    cfg.init_all(cli.test)?;

    let created = [
        ensure_log::<DocRequest>(&cfg.requests_path())?,
        ensure_log::<VocRecord>(&cfg.voc_path())?,
        ensure_log::<ProductionEntry>(&cfg.production_path())?,
        ensure_log::<DocEntry>(&cfg.docs_path())?,
        ensure_log::<ChatbotRequest>(&cfg.chatbot_path())?,
    ]
    .iter()
    .filter(|c| **c)
    .count();
    info(format!("{} log file(s) created", created));

    let pool = DbPool::new(&cfg.audit_db_path())?;
    success(format!("Audit log: {}", cfg.audit_db_path().display()));

    if !cfg.catalog_path().exists() {
        warning(format!(
            "Product catalog not found yet: {}",
            cfg.catalog_path().display()
        ));
    }

    // non blocking
    if let Err(e) = ttlog(
        &pool.conn,
        "init",
        "",
        &format!("Portal initialized at {}", cfg.data_path().display()),
    ) {
        warning(format!("Failed to write internal log: {}", e));
    }

    success("Factory portal initialization completed!");
    Ok(())
}
