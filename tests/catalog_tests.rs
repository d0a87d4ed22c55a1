use predicates::prelude::*;
use predicates::str::contains;
use std::fs;

mod common;
use common::{data_arg, fp, setup, setup_with_catalog};

#[test]
fn search_matches_code_case_insensitively() {
    let (home, data) = setup_with_catalog("search_code");

    fp(&home)
        .args(["--data-dir", &data_arg(&data), "search", "p001"])
        .assert()
        .success()
        .stdout(contains("고구마칩"))
        .stdout(contains("1 product(s) match"))
        .stdout(contains("원산지"));
}

#[test]
fn search_matches_name_substring() {
    let (home, data) = setup_with_catalog("search_name");

    // "crisp" only appears in the name column of SPC-10
    fp(&home)
        .args(["--data-dir", &data_arg(&data), "search", "CRISP"])
        .assert()
        .success()
        .stdout(contains("Sweet Potato Crisp"))
        .stdout(contains("분류: 고구마칩"));
}

#[test]
fn search_without_hits_only_warns() {
    let (home, data) = setup_with_catalog("search_none");

    fp(&home)
        .args(["--data-dir", &data_arg(&data), "search", "ZZZ-404"])
        .assert()
        .success()
        .stdout(contains("검색 결과가 없습니다"));
}

#[test]
fn search_writes_escaped_html_report() {
    let (home, data) = setup_with_catalog("search_html");
    let out = data.join("report").join("spc.html");

    fp(&home)
        .args([
            "--data-dir",
            &data_arg(&data),
            "search",
            "SPC",
            "--html",
            &out.to_string_lossy(),
        ])
        .assert()
        .success()
        .stdout(contains("Printable report written"));

    let html = fs::read_to_string(&out).unwrap();
    assert!(html.contains("<section class=\"card\">"));
    assert!(html.contains("&lt;b&gt;주의&lt;/b&gt;"));
    assert!(!html.contains("<b>주의</b>"));
}

#[test]
fn products_lists_catalog_with_categories() {
    let (home, data) = setup_with_catalog("products_list");

    fp(&home)
        .args(["--data-dir", &data_arg(&data), "products"])
        .assert()
        .success()
        .stdout(contains("P001"))
        .stdout(contains("스낵"))
        .stdout(contains("원료"))
        .stdout(contains("3 product(s)"));
}

#[test]
fn products_category_filter() {
    let (home, data) = setup_with_catalog("products_filter");

    fp(&home)
        .args(["--data-dir", &data_arg(&data), "products", "--category", "원료"])
        .assert()
        .success()
        .stdout(contains("B300"))
        .stdout(contains("P001").not())
        .stdout(contains("1 product(s)"));
}

#[test]
fn missing_catalog_is_an_error() {
    let (home, data) = setup("catalog_missing");

    fp(&home)
        .args(["--data-dir", &data_arg(&data), "search", "P001"])
        .assert()
        .failure()
        .stderr(contains("Product catalog not found"));
}

#[test]
fn catalog_option_overrides_location() {
    let (home, data) = setup_with_catalog("catalog_override");
    let moved = data.join("elsewhere.csv");
    fs::rename(data.join("product_data.csv"), &moved).unwrap();

    fp(&home)
        .args([
            "--data-dir",
            &data_arg(&data),
            "--catalog",
            &moved.to_string_lossy(),
            "search",
            "B300",
        ])
        .assert()
        .success()
        .stdout(contains("고구마 분말"));
}
