use crate::utils::numeric::PLACEHOLDER;
use regex::Regex;
use std::sync::LazyLock;

/// Matches yearly production headers such as `생산실적(2023)` or `production(2023)`.
static PRODUCTION_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:생산실적|production)\s*\((\d{4})\)$").unwrap());

/// One row of the product catalog.
///
/// The column set is open (it changed between catalog revisions), so cells are
/// kept as `(header, value)` pairs in file order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Product {
    pub fields: Vec<(String, String)>,
}

impl Product {
    pub fn new(fields: Vec<(String, String)>) -> Self {
        Self { fields }
    }

    /// Non-blank value of `column`; `nan`/`NaN` left over from spreadsheet exports count as blank.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(h, _)| h == column)
            .map(|(_, v)| v.trim())
            .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case("nan"))
    }

    /// Value of `column`, or the `-` placeholder.
    pub fn get_or_dash(&self, column: &str) -> &str {
        self.get(column).unwrap_or(PLACEHOLDER)
    }

    /// Yearly production columns found in this row, ascending by year.
    pub fn production_years(&self) -> Vec<(i32, &str)> {
        let mut years: Vec<(i32, &str)> = self
            .fields
            .iter()
            .filter_map(|(h, v)| {
                let caps = PRODUCTION_YEAR.captures(h.trim())?;
                let year = caps[1].parse().ok()?;
                Some((year, v.as_str()))
            })
            .collect();
        years.sort_by_key(|(y, _)| *y);
        years
    }
}
