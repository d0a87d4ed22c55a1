use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::auth::{self, Role};
use crate::core::backup::BackupLogic;
use crate::db::log::audit;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup {
        file,
        compress,
        force,
    } = &cli.command
    {
        auth::require(cfg, Role::Admin, cli.password.as_deref())?;

        let (dest, n) = BackupLogic::backup(cfg, file, *compress, *force)?;
        success(format!("Backup created: {} ({} file(s))", dest.display(), n));
        audit(
            cfg,
            "backup",
            &dest.to_string_lossy(),
            if *compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        );
    }

    Ok(())
}
