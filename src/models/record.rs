use serde::Serialize;
use serde::de::DeserializeOwned;

/// A row of one of the append-only CSV logs.
///
/// `HEADERS` is the column order written on the first line of a new file and
/// used by exports; `to_row` must return the cells in the same order.
pub trait LogRecord: Serialize + DeserializeOwned {
    const HEADERS: &'static [&'static str];
    /// Human label used in messages and export titles.
    const LABEL: &'static str;

    fn to_row(&self) -> Vec<String>;
}

/// Join attachment paths into the single CSV cell they are stored in.
pub fn join_paths(paths: &[String]) -> String {
    paths.join(";")
}

/// Split a stored attachment cell back into its paths.
pub fn split_paths(cell: &str) -> Vec<String> {
    cell.split(';')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attachment_cell_ignores_blanks() {
        assert_eq!(split_paths(""), Vec::<String>::new());
        assert_eq!(
            split_paths("a.pdf; ;b.jpg"),
            vec!["a.pdf".to_string(), "b.jpg".to_string()]
        );
        assert_eq!(join_paths(&["a.pdf".into(), "b.jpg".into()]), "a.pdf;b.jpg");
    }
}
