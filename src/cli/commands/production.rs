use crate::cli::parser::{Cli, Commands, ProductionAction};
use crate::config::Config;
use crate::core::auth::{self, Role};
use crate::core::production::{NewEntry, ProductionLogic};
use crate::db::log::audit;
use crate::errors::AppResult;
use crate::ui::messages::{header, info, success, warning};
use crate::utils::numeric::group_thousands;
use crate::utils::table::{Column, Table};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let Commands::Production { action } = &cli.command else {
        return Ok(());
    };

    auth::require(cfg, Role::Portal, cli.password.as_deref())?;

    match action {
        ProductionAction::Add {
            date,
            line,
            product,
            quantity,
            unit,
            worker,
            notes,
        } => {
            let entry = ProductionLogic::record(
                &cfg.production_path(),
                NewEntry {
                    date: date.clone(),
                    line: line.clone(),
                    product: product.clone(),
                    quantity: quantity.clone(),
                    unit: unit.clone(),
                    worker: worker.clone(),
                    notes: notes.clone(),
                },
            )?;

            success(format!(
                "Production logged: {} {} {} on {}",
                entry.product, entry.quantity, entry.unit, entry.date
            ));
            audit(
                cfg,
                "production_add",
                &entry.product,
                &format!("{} {} ({})", entry.quantity, entry.unit, entry.date),
            );
        }

        ProductionAction::List { date, totals } => {
            let rows = ProductionLogic::list(&cfg.production_path(), date.as_deref())?;

            if rows.is_empty() {
                warning("No production entries found.");
                return Ok(());
            }

            let mut table = Table::new(vec![
                Column::new("date", 10),
                Column::new("line", 10),
                Column::new("product", 16),
                Column::new("quantity", 12),
                Column::new("unit", 6),
                Column::new("worker", 10),
                Column::new("notes", 30),
            ]);
            for e in &rows {
                table.add_row(vec![
                    e.date.clone(),
                    e.line.clone(),
                    e.product.clone(),
                    e.quantity.clone(),
                    e.unit.clone(),
                    e.worker.clone(),
                    e.notes.clone(),
                ]);
            }

            header("🏭 생산일지");
            print!("{}", table.render());

            if *totals {
                let sums = ProductionLogic::totals(&rows);
                let mut t = Table::new(vec![Column::new("product", 16), Column::new("total", 14)]);
                for (product, total) in &sums.by_product {
                    t.add_row(vec![product.clone(), group_thousands(*total)]);
                }
                println!();
                header("Totals");
                print!("{}", t.render());
                if sums.skipped > 0 {
                    warning(format!(
                        "{} entr(ies) skipped: quantity is not a number or too large",
                        sums.skipped
                    ));
                }
            }

            info(format!("{} entr(ies)", rows.len()));
        }
    }

    Ok(())
}
