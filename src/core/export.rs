use crate::config::Config;
use crate::core::catalog::Catalog;
use crate::core::category::CategoryTable;
use crate::errors::{AppError, AppResult};
use crate::export::{
    ExportFormat, TableData, ensure_writable, export_csv, export_json, export_xlsx,
};
use crate::models::chatbot::ChatbotRequest;
use crate::models::doc::DocEntry;
use crate::models::production::ProductionEntry;
use crate::models::record::LogRecord;
use crate::models::request::DocRequest;
use crate::models::voc::VocRecord;
use crate::store::csv_log;
use crate::ui::messages::warning;
use clap::ValueEnum;
use std::path::Path;

/// Which data set to export.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportKind {
    Requests,
    Voc,
    Production,
    Docs,
    Chatbot,
    Catalog,
}

impl ExportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportKind::Requests => "requests",
            ExportKind::Voc => "voc",
            ExportKind::Production => "production",
            ExportKind::Docs => "docs",
            ExportKind::Chatbot => "chatbot",
            ExportKind::Catalog => "catalog",
        }
    }
}

fn log_table<T: LogRecord>(path: &Path) -> AppResult<TableData> {
    let rows: Vec<T> = csv_log::load(path)?;
    let mut table = TableData::new(
        T::LABEL,
        T::HEADERS.iter().map(|h| h.to_string()).collect(),
    );
    table.rows = rows.iter().map(LogRecord::to_row).collect();
    Ok(table)
}

/// Catalog rows in file order, with the derived category appended as a last column.
fn catalog_table(cfg: &Config) -> AppResult<TableData> {
    let catalog = Catalog::load(&cfg.catalog_path(), &cfg.code_column, &cfg.name_column)?;
    let categories = CategoryTable::new(&cfg.category_prefixes);

    let mut headers = catalog.headers.clone();
    headers.push("분류".to_string());
    let mut table = TableData::new("Product catalog", headers);

    for p in &catalog.products {
        let mut row: Vec<String> = catalog
            .headers
            .iter()
            .map(|h| p.get(h).unwrap_or("").to_string())
            .collect();
        let category = catalog
            .code_of(p)
            .map(|c| categories.classify(c))
            .unwrap_or(crate::core::category::OTHER);
        row.push(category.to_string());
        table.rows.push(row);
    }

    Ok(table)
}

pub struct ExportLogic;

impl ExportLogic {
    pub fn load_table(cfg: &Config, kind: ExportKind) -> AppResult<TableData> {
        match kind {
            ExportKind::Requests => log_table::<DocRequest>(&cfg.requests_path()),
            ExportKind::Voc => log_table::<VocRecord>(&cfg.voc_path()),
            ExportKind::Production => log_table::<ProductionEntry>(&cfg.production_path()),
            ExportKind::Docs => log_table::<DocEntry>(&cfg.docs_path()),
            ExportKind::Chatbot => log_table::<ChatbotRequest>(&cfg.chatbot_path()),
            ExportKind::Catalog => catalog_table(cfg),
        }
    }

    /// Export `kind` to `file` (absolute path required).
    /// Returns the number of exported rows.
    pub fn export(
        cfg: &Config,
        kind: ExportKind,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        let table = Self::load_table(cfg, kind)?;

        if table.is_empty() {
            warning(format!("No {} records to export.", kind.as_str()));
            return Ok(0);
        }

        ensure_writable(path, force)?;

        match format {
            ExportFormat::Csv => export_csv(&table, path)?,
            ExportFormat::Json => export_json(&table, path)?,
            ExportFormat::Xlsx => export_xlsx(&table, path)?,
        }

        Ok(table.rows.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    #[test]
    fn catalog_export_appends_category_column() {
        let dir = env::temp_dir().join("fportal_export_catalog");
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("product_data.csv"),
            "제품코드,제품명\nSPC-1,고구마칩\nZ9,단종품\n",
        )
        .unwrap();

        let cfg = Config {
            data_dir: dir.to_string_lossy().to_string(),
            ..Config::default()
        };

        let t = ExportLogic::load_table(&cfg, ExportKind::Catalog).unwrap();
        assert_eq!(t.headers.last().unwrap(), "분류");
        assert_eq!(t.rows[0], vec!["SPC-1", "고구마칩", "고구마칩"]);
        assert_eq!(t.rows[1][2], "기타");
    }

    #[test]
    fn relative_output_path_is_rejected() {
        let cfg = Config::default();
        assert!(matches!(
            ExportLogic::export(&cfg, ExportKind::Voc, ExportFormat::Csv, "out.csv", true),
            Err(AppError::Export(_))
        ));
    }
}
