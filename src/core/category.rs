//! Product-code → category classification through a prefix table.
//!
//! The longest matching prefix wins, so `"SPC"` can override `"SP"` without
//! any ordering rules between entries.

use std::collections::BTreeMap;

/// Category of codes no prefix matches.
pub const OTHER: &str = "기타";

/// Built-in prefixes for the Incheon plant 1 code scheme.
const DEFAULT_PREFIXES: &[(&str, &str)] = &[
    ("P", "스낵"),
    ("PC", "칩류"),
    ("PS", "스틱류"),
    ("SP", "고구마 가공품"),
    ("SPC", "고구마칩"),
    ("B", "원료"),
    ("BP", "분말원료"),
    ("M", "포장재"),
    ("OEM", "OEM 제품"),
    ("X", "시제품"),
];

pub struct CategoryTable {
    prefixes: BTreeMap<String, String>,
}

impl CategoryTable {
    /// Built-in table with `overrides` merged on top (same prefix replaces).
    pub fn new(overrides: &BTreeMap<String, String>) -> Self {
        let mut prefixes: BTreeMap<String, String> = DEFAULT_PREFIXES
            .iter()
            .map(|(p, c)| (p.to_uppercase(), c.to_string()))
            .collect();

        for (p, c) in overrides {
            prefixes.insert(p.trim().to_uppercase(), c.clone());
        }
        prefixes.retain(|p, _| !p.is_empty());

        Self { prefixes }
    }

    pub fn classify(&self, code: &str) -> &str {
        let code = code.trim().to_uppercase();
        self.prefixes
            .iter()
            .filter(|(p, _)| code.starts_with(p.as_str()))
            .max_by_key(|(p, _)| p.len())
            .map(|(_, c)| c.as_str())
            .unwrap_or(OTHER)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.prefixes.iter().map(|(p, c)| (p.as_str(), c.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn longest_prefix_wins() {
        let t = CategoryTable::new(&BTreeMap::new());
        assert_eq!(t.classify("SPC-01"), "고구마칩");
        assert_eq!(t.classify("SP-01"), "고구마 가공품");
        assert_eq!(t.classify("PC100"), "칩류");
        assert_eq!(t.classify("P001"), "스낵");
    }

    #[test]
    fn classification_is_case_insensitive() {
        let t = CategoryTable::new(&BTreeMap::new());
        assert_eq!(t.classify(" spc77 "), "고구마칩");
    }

    #[test]
    fn unknown_codes_are_other() {
        let t = CategoryTable::new(&BTreeMap::new());
        assert_eq!(t.classify("Z900"), OTHER);
        assert_eq!(t.classify(""), OTHER);
    }

    #[test]
    fn overrides_replace_and_extend() {
        let mut extra = BTreeMap::new();
        extra.insert("p".to_string(), "과자".to_string());
        extra.insert("Z9".to_string(), "단종".to_string());
        extra.insert("  ".to_string(), "무시".to_string());

        let t = CategoryTable::new(&extra);
        assert_eq!(t.classify("P001"), "과자");
        assert_eq!(t.classify("Z900"), "단종");
        assert_eq!(t.classify("Q1"), OTHER);
    }
}
