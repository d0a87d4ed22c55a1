use crate::models::product::Product;
use crate::report::{
    IMAGE_COLUMN, ReportOptions, SECTIONS, SectionBody, USAGE_COLUMN, recent_production,
    resolve_column,
};
use std::fmt::Write;
use textwrap::Options;

const BOLD: &str = "\x1b[1m";
const CYAN: &str = "\x1b[36m";
const RESET: &str = "\x1b[0m";

fn wrapped(text: &str, width: usize, indent: &str) -> String {
    let opts = Options::new(width.max(20))
        .initial_indent(indent)
        .subsequent_indent(indent);
    textwrap::fill(text, opts)
}

/// Terminal report card for one product.
pub fn render_text(product: &Product, opts: &ReportOptions<'_>) -> String {
    let mut out = String::new();
    let name = product.get_or_dash(opts.name_column);
    let width = opts.wrap_width;

    let _ = writeln!(out, "{BOLD}{CYAN}══════ {name} ══════{RESET}");
    let _ = writeln!(
        out,
        "{}",
        wrapped(
            &format!("용도: {}", product.get_or_dash(USAGE_COLUMN)),
            width,
            ""
        )
    );
    if let Some(cat) = opts.category {
        let _ = writeln!(out, "분류: {cat}");
    }

    for section in SECTIONS {
        let _ = writeln!(out, "\n{BOLD}{}{RESET}", section.title);

        match &section.body {
            SectionBody::Items(items) => {
                for (label, column) in *items {
                    let value = product.get_or_dash(resolve_column(*column, opts));
                    let _ = writeln!(
                        out,
                        "{}",
                        wrapped(&format!("• {label}: {value}"), width, "  ")
                    );
                }
            }
            SectionBody::Text(column) => {
                let _ = writeln!(
                    out,
                    "{}",
                    wrapped(product.get_or_dash(column), width, "  ")
                );
            }
            SectionBody::Production => {
                let rows = recent_production(product, opts.years);
                if rows.is_empty() {
                    let _ = writeln!(out, "  -");
                }
                for (year, qty) in rows {
                    let _ = writeln!(out, "  • {year}: {qty}");
                }
            }
        }
    }

    if let Some(img) = product.get(IMAGE_COLUMN) {
        let _ = writeln!(out, "\n🖼️  지대그림: {img}");
    }

    out
}
