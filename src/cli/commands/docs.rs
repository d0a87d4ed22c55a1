use crate::cli::parser::{Cli, Commands, DocsAction};
use crate::config::Config;
use crate::core::auth::{self, Role};
use crate::core::catalog::Catalog;
use crate::core::docs::DocsLogic;
use crate::db::log::audit;
use crate::errors::AppResult;
use crate::ui::messages::{header, success, warning};
use crate::utils::table::{Column, Table};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let Commands::Docs { action } = &cli.command else {
        return Ok(());
    };

    auth::require(cfg, Role::Portal, cli.password.as_deref())?;

    match action {
        DocsAction::Add {
            product,
            doc_type,
            title,
            file,
        } => {
            // registering is allowed for codes not (yet) in the catalog
            if let Ok(catalog) =
                Catalog::load(&cfg.catalog_path(), &cfg.code_column, &cfg.name_column)
                && catalog.find_by_code(product).is_none()
            {
                warning(format!("Product code '{}' is not in the catalog.", product.trim()));
            }

            let entry = DocsLogic::register(
                &cfg.docs_path(),
                &cfg.uploads_path(),
                product,
                doc_type,
                title,
                file,
            )?;
            success(format!("Document registered: {} → {}", entry.title, entry.path));
            audit(cfg, "docs_add", &entry.product, &entry.title);
        }

        DocsAction::List { product } => {
            let rows = DocsLogic::list(&cfg.docs_path(), product.as_deref())?;
            if rows.is_empty() {
                warning("No documents registered.");
                return Ok(());
            }

            let mut table = Table::new(vec![
                Column::new("registered", 19),
                Column::new("product", 16),
                Column::new("type", 10),
                Column::new("title", 30),
                Column::new("path", 60),
            ]);
            for d in &rows {
                table.add_row(vec![
                    d.timestamp.clone(),
                    d.product.clone(),
                    d.doc_type.clone(),
                    d.title.clone(),
                    d.path.clone(),
                ]);
            }
            header("📁 문서 목록");
            print!("{}", table.render());
        }
    }

    Ok(())
}
