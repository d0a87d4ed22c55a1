use crate::cli::parser::{Cli, Commands, VocAction};
use crate::config::Config;
use crate::core::auth::{self, Role};
use crate::core::voc::{NewVoc, VocLogic};
use crate::db::log::audit;
use crate::errors::AppResult;
use crate::ui::messages::{header, info, success, warning};
use crate::utils::table::{Column, Table};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let Commands::Voc { action } = &cli.command else {
        return Ok(());
    };

    auth::require(cfg, Role::Portal, cli.password.as_deref())?;

    match action {
        VocAction::Add {
            date,
            voc_type,
            severity,
            product,
            description,
            cause,
            action,
            attachments,
        } => {
            let record = VocLogic::record(
                &cfg.voc_path(),
                &cfg.uploads_path(),
                NewVoc {
                    date: date.clone(),
                    voc_type: voc_type.clone(),
                    severity: *severity,
                    product: product.clone(),
                    description: description.clone(),
                    cause: cause.clone(),
                    action: action.clone(),
                    attachments: attachments.clone(),
                },
            )?;

            success(format!(
                "VOC recorded for {} on {} ({})",
                if record.product.is_empty() { "-" } else { record.product.as_str() },
                record.date,
                record.severity
            ));
            audit(cfg, "voc_add", &record.product, &record.description);
        }

        VocAction::List { product } => {
            let rows = VocLogic::list(&cfg.voc_path(), product.as_deref())?;

            if rows.is_empty() {
                warning("No VOC records found.");
                return Ok(());
            }

            let mut table = Table::new(vec![
                Column::new("date", 10),
                Column::new("type", 12),
                Column::new("severity", 8),
                Column::new("product", 16),
                Column::new("description", 40),
                Column::new("cause", 24),
                Column::new("action", 24),
            ]);
            for r in &rows {
                table.add_row(vec![
                    r.date.clone(),
                    r.voc_type.clone(),
                    r.severity.clone(),
                    r.product.clone(),
                    r.description.clone(),
                    r.cause.clone(),
                    r.action.clone(),
                ]);
            }

            header("📣 VOC 기록");
            print!("{}", table.render());
            info(format!("{} record(s)", rows.len()));
        }
    }

    Ok(())
}
