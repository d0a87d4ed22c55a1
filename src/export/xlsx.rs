// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::{TableData, notify_export_success};
use crate::ui::messages::info;
use chrono::{NaiveDate, NaiveDateTime};
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const MAX_COL_WIDTH: usize = 60;

/// Export XLSX with a styled header, banded rows and auto column width.
pub(crate) fn export_xlsx(table: &TableData, path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(sheet_name(&table.title))
        .map_err(to_export_error)?;

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in table.headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, header.as_str(), &header_format)
            .map_err(to_export_error)?;
    }

    worksheet.set_freeze_panes(1, 0).ok();

    let mut col_widths: Vec<usize> = table.headers.iter().map(|h| h.width()).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    for (row_index, values) in table.rows.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band_color = if row_index % 2 == 0 { band1 } else { band2 };

        for (col, value) in values.iter().enumerate().take(table.headers.len()) {
            write_xlsx_cell(worksheet, row, col as u16, value, band_color)?;
            let longest_line = value.lines().map(|l| l.width()).max().unwrap_or(0);
            col_widths[col] = col_widths[col].max(longest_line);
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, (*w).min(MAX_COL_WIDTH) as f64 + 2.0)
            .map_err(to_export_error)?;
    }

    workbook.save(path).map_err(to_export_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

/// Worksheet names are limited to 31 characters and a few forbidden symbols.
fn sheet_name(title: &str) -> String {
    let cleaned: String = title
        .chars()
        .filter(|c| !matches!(c, '[' | ']' | ':' | '*' | '?' | '/' | '\\'))
        .take(31)
        .collect();
    if cleaned.trim().is_empty() {
        "Sheet1".to_string()
    } else {
        cleaned
    }
}

/// Excel serial of a date/time cell written by the portal, with its number format.
fn parse_to_excel_date(s: &str) -> Option<(&'static str, f64)> {
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?.and_hms_opt(0, 0, 0)?;

    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        let secs = (dt - epoch).num_seconds() as f64;
        return Some(("yyyy-mm-dd hh:mm:ss", secs / 86_400.0));
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        let days = (d.and_hms_opt(0, 0, 0)? - epoch).num_days() as f64;
        return Some(("yyyy-mm-dd", days));
    }
    None
}

/// Plain decimal numbers only: optional sign, digits, at most one '.'.
/// Codes with leading zeros or an exponent (`0012`, `1E5`) stay text.
fn parse_number(s: &str) -> Option<f64> {
    let unsigned = s.strip_prefix(['-', '+']).unwrap_or(s);
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let all_digits = |p: &str| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(int_part) || frac_part.is_some_and(|f| !all_digits(f)) {
        return None;
    }
    if int_part.len() > 1 && int_part.starts_with('0') {
        return None;
    }

    s.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Write one cell, as date, number or text.
fn write_xlsx_cell(
    worksheet: &mut rust_xlsxwriter::Worksheet,
    row: u32,
    col: u16,
    s: &str,
    bg: Color,
) -> AppResult<()> {
    let base = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    if let Some((num_format, serial)) = parse_to_excel_date(s) {
        worksheet
            .write_with_format(row, col, serial, &base.set_num_format(num_format))
            .map_err(to_export_error)?;
        return Ok(());
    }

    if let Some(num) = parse_number(s) {
        worksheet
            .write_with_format(row, col, num, &base.set_align(FormatAlign::Right))
            .map_err(to_export_error)?;
        return Ok(());
    }

    worksheet
        .write_with_format(row, col, s, &base.set_text_wrap())
        .map_err(to_export_error)?;

    Ok(())
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_become_excel_serials() {
        assert_eq!(parse_to_excel_date("1900-01-01"), Some(("yyyy-mm-dd", 2.0)));
        let (fmt, serial) = parse_to_excel_date("2024-01-01 12:00:00").unwrap();
        assert_eq!(fmt, "yyyy-mm-dd hh:mm:ss");
        assert_eq!(serial, 45292.5);
        assert!(parse_to_excel_date("P001").is_none());
    }

    #[test]
    fn codes_with_leading_zero_stay_text() {
        assert_eq!(parse_number("0012"), None);
        assert_eq!(parse_number("0.5"), Some(0.5));
        assert_eq!(parse_number("1500"), Some(1500.0));
        assert_eq!(parse_number("1,500"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("-3.5"), Some(-3.5));
        assert_eq!(parse_number("-0012"), None);
    }

    #[test]
    fn exponent_codes_stay_text() {
        assert_eq!(parse_number("1E5"), None);
        assert_eq!(parse_number("12e3"), None);
        assert_eq!(parse_number("1."), None);
        assert_eq!(parse_number(".5"), None);
        assert_eq!(parse_number("inf"), None);
    }

    #[test]
    fn sheet_names_are_sanitized() {
        assert_eq!(sheet_name("VOC log"), "VOC log");
        assert_eq!(sheet_name("a/b:c"), "abc");
        assert_eq!(sheet_name("///"), "Sheet1");
        assert_eq!(sheet_name(&"x".repeat(40)).len(), 31);
    }
}
