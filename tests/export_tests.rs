use predicates::str::contains;
use std::fs;

mod common;
use common::{ADMIN_PW, PORTAL_PW, data_arg, fp, setup, setup_with_catalog, submit_request};

#[test]
fn export_requests_to_csv() {
    let (home, data) = setup("export_csv");
    submit_request(&home, &data, "내보내기");
    let out = data.join("requests_export.csv");

    fp(&home)
        .args([
            "--data-dir", &data_arg(&data), "--password", PORTAL_PW, "export",
            "--kind", "requests", "--format", "csv", "--file", &out.to_string_lossy(),
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.starts_with("timestamp,requester,team"));
    assert!(content.contains("내보내기"));
    assert!(content.contains("COA 발급 요청"));
}

#[test]
fn export_catalog_to_json_keeps_column_order() {
    let (home, data) = setup_with_catalog("export_json");
    let out = data.join("catalog.json");

    fp(&home)
        .args([
            "--data-dir", &data_arg(&data), "--password", PORTAL_PW, "export",
            "--kind", "catalog", "--format", "json", "--file", &out.to_string_lossy(),
        ])
        .assert()
        .success();

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    let rows = value.as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["제품코드"], "P001");
    assert_eq!(rows[1]["분류"], "고구마칩");
    assert_eq!(rows[2]["분류"], "원료");
}

#[test]
fn export_xlsx_creates_workbook() {
    let (home, data) = setup_with_catalog("export_xlsx");
    let out = data.join("catalog.xlsx");

    fp(&home)
        .args([
            "--data-dir", &data_arg(&data), "--password", PORTAL_PW, "export",
            "--kind", "catalog", "--format", "xlsx", "--file", &out.to_string_lossy(),
        ])
        .assert()
        .success();

    let bytes = fs::read(&out).unwrap();
    // xlsx is a zip container
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn export_of_empty_log_writes_nothing() {
    let (home, data) = setup("export_empty");
    let out = data.join("voc.csv");

    fp(&home)
        .args([
            "--data-dir", &data_arg(&data), "--password", PORTAL_PW, "export",
            "--kind", "voc", "--file", &out.to_string_lossy(),
        ])
        .assert()
        .success()
        .stdout(contains("No voc records to export"));

    assert!(!out.exists());
}

#[test]
fn export_rejects_relative_path() {
    let (home, data) = setup("export_relative");
    submit_request(&home, &data, "상대경로");

    fp(&home)
        .args([
            "--data-dir", &data_arg(&data), "--password", PORTAL_PW, "export",
            "--kind", "requests", "--file", "requests.csv",
        ])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn compressed_backup_contains_logs() {
    let (home, data) = setup("backup_zip");
    submit_request(&home, &data, "백업");
    let dest = data.parent().unwrap().join("backup");

    fp(&home)
        .args([
            "--data-dir", &data_arg(&data), "--password", ADMIN_PW, "backup",
            "--file", &dest.to_string_lossy(), "--compress",
        ])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    let zip_path = dest.with_extension("zip");
    let file = fs::File::open(&zip_path).unwrap();
    let mut archive = zip::ZipArchive::new(file).unwrap();
    assert!(archive.by_name("doc_requests.csv").is_ok());
}

#[test]
fn plain_backup_copies_directory() {
    let (home, data) = setup("backup_dir");
    submit_request(&home, &data, "복사");
    let dest = data.parent().unwrap().join("copy");

    fp(&home)
        .args([
            "--data-dir", &data_arg(&data), "--password", ADMIN_PW, "backup",
            "--file", &dest.to_string_lossy(),
        ])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(dest.join("doc_requests.csv")).unwrap(),
        fs::read_to_string(data.join("doc_requests.csv")).unwrap()
    );
}
