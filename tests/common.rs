#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const PORTAL_PW: &str = "line-pw";
pub const ADMIN_PW: &str = "admin-pw";

pub const CATALOG: &str = "\
제품코드,제품명,용도,식품유형,구분,소비기한,생산실적(2022),생산실적(2023),생산실적(2024),주요거래처,제조방법,원재료명 및 함량,원산지,제품특징,성상,사내규격(COA),법적규격,기타사항,지대그림
P001,고구마칩,간식용 스낵,과자,완제품,제조일로부터 9개월,\"9,500\",10000,12000 box,A마트,세척-슬라이스-진공튀김,고구마 85%,국산,바삭한 식감,고유의 색택,수분 3% 이하,산가 2.0 이하,,images/p001.png
SPC-10,Sweet Potato Crisp,수출용,과자,완제품,12개월,-,N/A,3500,B무역,저온 진공 튀김,고구마 90%,국산,저당,황금색,수분 2% 이하,산가 2.0 이하,<b>주의</b>,
B300,고구마 분말,원료,농산가공품,반제품,6개월,,,,사내,분쇄 건조,고구마 100%,국산,,분말,,,,
";

pub fn fp(home: &PathBuf) -> Command {
    let mut cmd = cargo_bin_cmd!("fportal");
    cmd.env("HOME", home)
        .env("NO_COLOR", "1")
        .env("FPORTAL_PASSWORD", PORTAL_PW)
        .env("FPORTAL_ADMIN_PASSWORD", ADMIN_PW);
    cmd
}

/// Fresh temp directory for one test; returns (home, data dir).
pub fn setup(name: &str) -> (PathBuf, PathBuf) {
    let root = env::temp_dir().join(format!("{}_fportal_it", name));
    fs::remove_dir_all(&root).ok();
    let home = root.join("home");
    let data = root.join("data");
    fs::create_dir_all(&home).unwrap();
    fs::create_dir_all(&data).unwrap();
    (home, data)
}

/// Same as `setup`, with the sample product catalog in the data dir.
pub fn setup_with_catalog(name: &str) -> (PathBuf, PathBuf) {
    let (home, data) = setup(name);
    fs::write(data.join("product_data.csv"), CATALOG).unwrap();
    (home, data)
}

pub fn data_arg(data: &PathBuf) -> String {
    data.to_string_lossy().to_string()
}

/// Number of data rows in a CSV log (header excluded).
pub fn csv_rows(path: &PathBuf) -> usize {
    let mut rdr = csv::Reader::from_path(path).expect("open csv");
    rdr.records().count()
}

pub fn submit_request(home: &PathBuf, data: &PathBuf, requester: &str) {
    fp(home)
        .args([
            "--data-dir",
            &data_arg(data),
            "--password",
            PORTAL_PW,
            "request",
            "add",
            "--requester",
            requester,
            "--team",
            "품질팀",
            "--due",
            "2024-07-01",
            "--category",
            "성적서",
            "--product",
            "P001",
            "--details",
            "COA 발급 요청",
        ])
        .assert()
        .success();
}
