//! Product catalog: `product_data.csv` loaded into memory and filtered by a
//! text query.

use crate::errors::{AppError, AppResult};
use crate::models::product::Product;
use std::path::Path;

pub struct Catalog {
    pub headers: Vec<String>,
    pub products: Vec<Product>,
    code_column: String,
    name_column: String,
}

impl Catalog {
    /// Read the catalog; both key columns must be present in the header.
    pub fn load(path: &Path, code_column: &str, name_column: &str) -> AppResult<Self> {
        if !path.exists() {
            return Err(AppError::CatalogNotFound(path.display().to_string()));
        }

        let mut rdr = csv::ReaderBuilder::new().flexible(true).from_path(path)?;
        let headers: Vec<String> = rdr
            .headers()?
            .iter()
            .map(|h| h.trim_start_matches('\u{feff}').trim().to_string())
            .collect();

        let mut products = Vec::new();
        for rec in rdr.records() {
            let rec = rec?;
            let fields = headers
                .iter()
                .enumerate()
                .map(|(i, h)| (h.clone(), rec.get(i).unwrap_or("").to_string()))
                .collect();
            products.push(Product::new(fields));
        }

        Self::from_parts(headers, products, code_column, name_column)
    }

    pub fn from_parts(
        headers: Vec<String>,
        products: Vec<Product>,
        code_column: &str,
        name_column: &str,
    ) -> AppResult<Self> {
        for col in [code_column, name_column] {
            if !headers.iter().any(|h| h == col) {
                return Err(AppError::MissingColumn(col.to_string()));
            }
        }

        Ok(Self {
            headers,
            products,
            code_column: code_column.to_string(),
            name_column: name_column.to_string(),
        })
    }

    pub fn code_of<'a>(&self, p: &'a Product) -> Option<&'a str> {
        p.get(&self.code_column)
    }

    pub fn name_of<'a>(&self, p: &'a Product) -> Option<&'a str> {
        p.get(&self.name_column)
    }

    /// Case-insensitive substring match on the code OR the name column,
    /// in file order. A blank query matches nothing.
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        self.products
            .iter()
            .filter(|p| {
                [self.code_of(p), self.name_of(p)]
                    .into_iter()
                    .flatten()
                    .any(|v| v.to_lowercase().contains(&needle))
            })
            .collect()
    }

    /// Exact code match (trimmed, case-insensitive).
    pub fn find_by_code(&self, code: &str) -> Option<&Product> {
        let code = code.trim();
        self.products.iter().find(|p| {
            self.code_of(p)
                .is_some_and(|c| c.eq_ignore_ascii_case(code))
        })
    }

    /// (code, name) of every row where both are present.
    pub fn listing(&self) -> Vec<(&str, &str)> {
        self.products
            .iter()
            .filter_map(|p| Some((self.code_of(p)?, self.name_of(p)?)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    fn catalog() -> Catalog {
        let headers = vec!["제품코드".to_string(), "제품명".to_string(), "용도".to_string()];
        let rows = [
            ("P001", "고구마칩", "스낵"),
            ("SP-200", "Sweet Potato Stick", "스낵"),
            ("B300", "", "원료"),
            ("", "감자칩", "스낵"),
        ];
        let products = rows
            .iter()
            .map(|(c, n, u)| {
                Product::new(vec![
                    ("제품코드".into(), c.to_string()),
                    ("제품명".into(), n.to_string()),
                    ("용도".into(), u.to_string()),
                ])
            })
            .collect();
        Catalog::from_parts(headers, products, "제품코드", "제품명").unwrap()
    }

    #[test]
    fn search_is_case_insensitive_on_code() {
        let c = catalog();
        let hits = c.search("p001");
        assert_eq!(hits.len(), 1);
        assert_eq!(c.name_of(hits[0]), Some("고구마칩"));
    }

    #[test]
    fn search_matches_name_column_too() {
        let c = catalog();
        assert_eq!(c.search("POTATO").len(), 1);
        assert_eq!(c.search("칩").len(), 2);
    }

    #[test]
    fn search_ignores_other_columns_and_blank_query() {
        let c = catalog();
        assert!(c.search("원료").is_empty());
        assert!(c.search("   ").is_empty());
    }

    #[test]
    fn listing_drops_incomplete_rows() {
        let c = catalog();
        let list = c.listing();
        assert_eq!(list, vec![("P001", "고구마칩"), ("SP-200", "Sweet Potato Stick")]);
    }

    #[test]
    fn find_by_code_is_exact() {
        let c = catalog();
        assert!(c.find_by_code("sp-200").is_some());
        assert!(c.find_by_code("SP").is_none());
    }

    #[test]
    fn load_reports_missing_key_column() {
        let path = env::temp_dir().join("fportal_catalog_missing_col.csv");
        fs::write(&path, "code,name\nP001,Chips\n").unwrap();

        match Catalog::load(&path, "제품코드", "제품명") {
            Err(AppError::MissingColumn(c)) => assert_eq!(c, "제품코드"),
            other => panic!("unexpected: {:?}", other.map(|c| c.products.len())),
        }
    }

    #[test]
    fn load_strips_bom_and_keeps_short_rows() {
        let path = env::temp_dir().join("fportal_catalog_bom.csv");
        fs::write(&path, "\u{feff}제품코드,제품명,용도\nP001,고구마칩\n").unwrap();

        let c = Catalog::load(&path, "제품코드", "제품명").unwrap();
        assert_eq!(c.products.len(), 1);
        assert_eq!(c.products[0].get_or_dash("용도"), "-");
    }

    #[test]
    fn load_missing_file() {
        let path = env::temp_dir().join("fportal_no_such_catalog.csv");
        fs::remove_file(&path).ok();
        assert!(matches!(
            Catalog::load(&path, "제품코드", "제품명"),
            Err(AppError::CatalogNotFound(_))
        ));
    }
}
