use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::auth::{self, Role};
use crate::core::export::ExportLogic;
use crate::db::log::audit;
use crate::errors::AppResult;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        kind,
        format,
        file,
        force,
    } = &cli.command
    {
        auth::require(cfg, Role::Portal, cli.password.as_deref())?;

        let n = ExportLogic::export(cfg, *kind, *format, file, *force)?;
        if n > 0 {
            audit(
                cfg,
                "export",
                kind.as_str(),
                &format!("{} row(s) as {} to {}", n, format.as_str(), file),
            );
        }
    }
    Ok(())
}
