use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::catalog::Catalog;
use crate::core::category::CategoryTable;
use crate::errors::AppResult;
use crate::ui::messages::{header, info, warning};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Products { category, prefixes } = cmd {
        let categories = CategoryTable::new(&cfg.category_prefixes);

        if *prefixes {
            let mut table = Table::new(vec![Column::new("prefix", 12), Column::new("분류", 30)]);
            for (p, c) in categories.entries() {
                table.add_row(vec![p.to_string(), c.to_string()]);
            }
            header("Product code prefixes");
            print!("{}", table.render());
            return Ok(());
        }

        let catalog = Catalog::load(&cfg.catalog_path(), &cfg.code_column, &cfg.name_column)?;

        let mut table = Table::new(vec![
            Column::new(&cfg.code_column, 16),
            Column::new(&cfg.name_column, 40),
            Column::new("분류", 20),
        ]);

        for (code, name) in catalog.listing() {
            let cat = categories.classify(code);
            if category.as_deref().is_some_and(|wanted| wanted.trim() != cat) {
                continue;
            }
            table.add_row(vec![code.to_string(), name.to_string(), cat.to_string()]);
        }

        if table.is_empty() {
            warning("No products to show.");
            return Ok(());
        }

        header("📋 전제품 목록");
        print!("{}", table.render());
        info(format!("{} product(s)", table.rows.len()));
    }

    Ok(())
}
