use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::catalog::Catalog;
use crate::core::category::CategoryTable;
use crate::errors::AppResult;
use crate::export::ensure_writable;
use crate::report::{ReportOptions, render_html, render_text};
use crate::ui::messages::{info, success, warning};
use crate::utils::path::expand_tilde;
use std::fs;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Search { query, html, force } = cmd {
        let catalog = Catalog::load(&cfg.catalog_path(), &cfg.code_column, &cfg.name_column)?;
        let categories = CategoryTable::new(&cfg.category_prefixes);

        let hits = catalog.search(query);
        if hits.is_empty() {
            warning(format!("🔍 검색 결과가 없습니다: '{}'", query.trim()));
            return Ok(());
        }

        info(format!("{} product(s) match '{}'", hits.len(), query.trim()));

        let base = ReportOptions {
            code_column: &cfg.code_column,
            name_column: &cfg.name_column,
            years: cfg.report_years,
            wrap_width: cfg.wrap_width,
            category: None,
        };

        for p in &hits {
            let category = catalog.code_of(p).map(|c| categories.classify(c));
            let opts = ReportOptions { category, ..base };
            println!("\n{}", render_text(p, &opts));
        }

        if let Some(file) = html {
            let path = expand_tilde(file);
            ensure_writable(&path, *force)?;

            let page = render_html(
                &hits,
                &format!("제품백서 - {}", query.trim()),
                |p| {
                    catalog
                        .code_of(p)
                        .map(|c| categories.classify(c).to_string())
                },
                &base,
            );

            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, page)?;
            success(format!("Printable report written: {}", path.display()));
        }
    }

    Ok(())
}
