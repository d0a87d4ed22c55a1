use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::auth::{self, Role};
use crate::core::log::LogLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if matches!(cli.command, Commands::Log { print: true }) {
        auth::require(cfg, Role::Admin, cli.password.as_deref())?;

        let pool = DbPool::new(&cfg.audit_db_path())?;
        LogLogic::print_log(&pool)?;
    }

    Ok(())
}
