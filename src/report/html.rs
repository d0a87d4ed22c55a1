use crate::models::product::Product;
use crate::report::{
    IMAGE_COLUMN, ReportOptions, SECTIONS, SectionBody, USAGE_COLUMN, recent_production,
    resolve_column,
};
use std::fmt::Write;

const STYLE: &str = r#"
body { font-family: "Malgun Gothic", "Noto Sans KR", sans-serif; margin: 2em; color: #222; }
.card { border: 1px solid #ccc; border-radius: 6px; padding: 1.5em 2em; margin-bottom: 2em; }
.card h2 { margin-top: 0; border-bottom: 2px solid #2f75b5; padding-bottom: .3em; }
.card h3 { color: #2f75b5; margin-bottom: .3em; }
.card p { white-space: pre-wrap; margin-top: 0; }
.card img { max-width: 300px; margin-top: 1em; }
.meta { color: #666; }
@media print {
  body { margin: 0; }
  .card { border: none; page-break-after: always; }
  .card:last-of-type { page-break-after: auto; }
}
"#;

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn render_card(out: &mut String, product: &Product, opts: &ReportOptions<'_>) {
    let e = |column: &str| escape_html(product.get_or_dash(column));

    let _ = writeln!(out, "<section class=\"card\">");
    let _ = writeln!(out, "<h2>{}</h2>", e(opts.name_column));
    let _ = writeln!(out, "<p><b>용도:</b> {}</p>", e(USAGE_COLUMN));
    if let Some(cat) = opts.category {
        let _ = writeln!(out, "<p class=\"meta\">분류: {}</p>", escape_html(cat));
    }

    for section in SECTIONS {
        let _ = writeln!(out, "<h3>{}</h3>", escape_html(section.title));
        match &section.body {
            SectionBody::Items(items) => {
                let _ = writeln!(out, "<ul>");
                for (label, column) in *items {
                    let _ = writeln!(
                        out,
                        "  <li><b>{}:</b> {}</li>",
                        escape_html(label),
                        e(resolve_column(*column, opts))
                    );
                }
                let _ = writeln!(out, "</ul>");
            }
            SectionBody::Text(column) => {
                let _ = writeln!(out, "<p>{}</p>", e(*column));
            }
            SectionBody::Production => {
                let _ = writeln!(out, "<ul>");
                for (year, qty) in recent_production(product, opts.years) {
                    let _ = writeln!(out, "  <li>{}: {}</li>", year, escape_html(&qty));
                }
                let _ = writeln!(out, "</ul>");
            }
        }
    }

    if let Some(img) = product.get(IMAGE_COLUMN) {
        let _ = writeln!(
            out,
            "<img src=\"{}\" alt=\"{}\">",
            escape_html(img),
            e(opts.name_column)
        );
    }

    let _ = writeln!(out, "</section>");
}

/// Standalone printable HTML page with one card per product.
pub fn render_html(
    products: &[&Product],
    title: &str,
    category_of: impl Fn(&Product) -> Option<String>,
    opts: &ReportOptions<'_>,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "<!DOCTYPE html>");
    let _ = writeln!(out, "<html lang=\"ko\">\n<head>\n<meta charset=\"utf-8\">");
    let _ = writeln!(out, "<title>{}</title>", escape_html(title));
    let _ = writeln!(out, "<style>{}</style>\n</head>\n<body>", STYLE);

    for p in products.iter().copied() {
        let category = category_of(p);
        let card_opts = ReportOptions {
            category: category.as_deref(),
            ..*opts
        };
        render_card(&mut out, p, &card_opts);
    }

    let _ = writeln!(out, "</body>\n</html>");
    out
}
