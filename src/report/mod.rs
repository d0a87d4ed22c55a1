//! Product whitepaper: the per-product report card, rendered for the
//! terminal or as a printable HTML page.

mod html;
mod text;

pub use html::{escape_html, render_html};
pub use text::render_text;

/// Section layout shared by both renderers.
pub(crate) struct Section {
    pub title: &'static str,
    pub body: SectionBody,
}

pub(crate) enum SectionBody {
    /// Labelled list items: (label, column).
    Items(&'static [(&'static str, &'static str)]),
    /// One free-text column.
    Text(&'static str),
    /// Yearly production figures.
    Production,
}

pub(crate) const USAGE_COLUMN: &str = "용도";
pub(crate) const IMAGE_COLUMN: &str = "지대그림";

pub(crate) const SECTIONS: &[Section] = &[
    Section {
        title: "1. 제품 정보",
        body: SectionBody::Items(&[
            ("식품유형", "식품유형"),
            ("제품구분", "구분"),
            ("제품코드", "제품코드"),
            ("소비기한", "소비기한"),
        ]),
    },
    Section {
        title: "📊 생산량",
        body: SectionBody::Production,
    },
    Section {
        title: "2. 주요거래처",
        body: SectionBody::Text("주요거래처"),
    },
    Section {
        title: "3. 제조방법",
        body: SectionBody::Text("제조방법"),
    },
    Section {
        title: "4. 원재료명 및 함량",
        body: SectionBody::Text("원재료명 및 함량"),
    },
    Section {
        title: "5. 원산지",
        body: SectionBody::Text("원산지"),
    },
    Section {
        title: "6. 제품 특징",
        body: SectionBody::Text("제품특징"),
    },
    Section {
        title: "7. 제품 규격",
        body: SectionBody::Items(&[
            ("성상", "성상"),
            ("사내규격(COA)", "사내규격(COA)"),
            ("법적규격", "법적규격"),
        ]),
    },
    Section {
        title: "8. 기타사항",
        body: SectionBody::Text("기타사항"),
    },
];

/// Options shared by both renderers.
pub struct ReportOptions<'a> {
    pub code_column: &'a str,
    pub name_column: &'a str,
    /// Number of most recent production years to show.
    pub years: usize,
    pub wrap_width: usize,
    pub category: Option<&'a str>,
}

/// Catalog column behind a section entry; the code entry follows the configured key column.
pub(crate) fn resolve_column<'a>(column: &'static str, opts: &ReportOptions<'a>) -> &'a str {
    if column == "제품코드" {
        opts.code_column
    } else {
        column
    }
}

/// The `years` most recent production figures, oldest first, cleaned.
pub(crate) fn recent_production(
    product: &crate::models::product::Product,
    years: usize,
) -> Vec<(i32, String)> {
    let all = product.production_years();
    let skip = all.len().saturating_sub(years);
    all.into_iter()
        .skip(skip)
        .map(|(y, v)| (y, crate::utils::numeric::format_quantity(v)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::product::Product;

    #[test]
    fn recent_production_keeps_last_years() {
        let p = Product::new(vec![
            ("생산실적(2021)".into(), "1".into()),
            ("생산실적(2022)".into(), "2000".into()),
            ("생산실적(2023)".into(), "n/a".into()),
            ("생산실적(2024)".into(), "4,000".into()),
        ]);
        assert_eq!(
            recent_production(&p, 3),
            vec![
                (2022, "2,000".to_string()),
                (2023, "-".to_string()),
                (2024, "4,000".to_string())
            ]
        );
    }
}
