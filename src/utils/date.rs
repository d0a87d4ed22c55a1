use chrono::{Local, NaiveDate};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Timestamp written in the first column of every log row.
pub fn now_timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_dates_only() {
        assert_eq!(parse_date(" 2024-03-05 "), NaiveDate::from_ymd_opt(2024, 3, 5));
        assert!(parse_date("2024/03/05").is_none());
        assert!(parse_date("2024-02-30").is_none());
    }

    #[test]
    fn timestamp_has_seconds_precision() {
        let ts = now_timestamp();
        assert_eq!(ts.len(), 19);
        assert_eq!(&ts[10..11], " ");
    }
}
