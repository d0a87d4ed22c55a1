//! Keyword chatbot placeholder.
//!
//! Answers come from the catalog row of a product named in the question, or
//! from a short FAQ table. Every question is appended to the chatbot log so
//! unanswered ones can be followed up by hand.

use crate::core::catalog::Catalog;
use crate::errors::{AppError, AppResult};
use crate::models::chatbot::ChatbotRequest;
use crate::models::product::Product;
use crate::store::csv_log;
use crate::utils::date::now_timestamp;
use crate::utils::numeric::format_quantity;
use std::path::Path;

/// Question keywords → catalog column whose value answers them.
const FIELD_KEYWORDS: &[(&[&str], &str)] = &[
    (&["소비기한", "유통기한", "shelf"], "소비기한"),
    (&["원산지", "origin"], "원산지"),
    (&["원재료", "함량", "ingredient"], "원재료명 및 함량"),
    (&["거래처", "customer"], "주요거래처"),
    (&["제조", "공정", "process"], "제조방법"),
    (&["coa", "사내규격"], "사내규격(COA)"),
    (&["법적규격", "legal"], "법적규격"),
    (&["성상", "appearance"], "성상"),
    (&["식품유형", "type"], "식품유형"),
    (&["용도", "usage"], "용도"),
];

const PRODUCTION_KEYWORDS: &[&str] = &["생산", "production"];

const FAQ: &[(&[&str], &str)] = &[
    (
        &["비밀번호", "password"],
        "포털 비밀번호는 품질팀 관리자에게 문의하세요.",
    ),
    (
        &["문서", "요청", "document"],
        "문서 요청은 `fportal request add`로 접수하고 `fportal request list`로 진행 상태를 확인합니다.",
    ),
    (
        &["voc", "클레임", "불만", "complaint"],
        "VOC는 `fportal voc add`로 등록합니다. 사진은 --attach로 첨부하세요.",
    ),
    (
        &["백서", "whitepaper", "검색"],
        "제품백서는 `fportal search <제품코드|제품명>`으로 조회하고 --html로 인쇄용 파일을 만들 수 있습니다.",
    ),
];

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(&n.to_lowercase()))
}

/// Product named in the question: the longest code or name it contains.
fn mentioned_product<'a>(catalog: &'a Catalog, question: &str) -> Option<&'a Product> {
    catalog
        .products
        .iter()
        .filter_map(|p| {
            [catalog.code_of(p), catalog.name_of(p)]
                .into_iter()
                .flatten()
                .filter(|v| v.chars().count() >= 2 && question.contains(&v.to_lowercase()))
                .map(|v| v.chars().count())
                .max()
                .map(|len| (len, p))
        })
        .max_by_key(|(len, _)| *len)
        .map(|(_, p)| p)
}

fn product_answer(catalog: &Catalog, product: &Product, question: &str) -> String {
    let name = catalog.name_of(product).unwrap_or("-");

    if contains_any(question, PRODUCTION_KEYWORDS) {
        let years: Vec<String> = product
            .production_years()
            .into_iter()
            .map(|(y, v)| format!("{}년 {}", y, format_quantity(v)))
            .collect();
        if !years.is_empty() {
            return format!("{} 생산실적: {}", name, years.join(", "));
        }
    }

    for (keywords, column) in FIELD_KEYWORDS {
        if contains_any(question, keywords) {
            return format!("{} {}: {}", name, column, product.get_or_dash(column));
        }
    }

    format!(
        "{} ({}) 용도: {}. 자세한 내용은 `fportal search {}`로 확인하세요.",
        name,
        catalog.code_of(product).unwrap_or("-"),
        product.get_or_dash("용도"),
        catalog.code_of(product).unwrap_or(name),
    )
}

pub struct ChatbotLogic;

impl ChatbotLogic {
    /// Answer `question`, or `None` when no rule matches.
    pub fn answer(catalog: Option<&Catalog>, question: &str) -> Option<String> {
        let q = question.trim().to_lowercase();
        if q.is_empty() {
            return None;
        }

        if let Some(c) = catalog
            && let Some(p) = mentioned_product(c, &q)
        {
            return Some(product_answer(c, p, &q));
        }

        FAQ.iter()
            .find(|(keywords, _)| contains_any(&q, keywords))
            .map(|(_, a)| a.to_string())
    }

    /// Answer and append the question to the chatbot log.
    pub fn ask(
        log: &Path,
        catalog: Option<&Catalog>,
        requester: &str,
        question: &str,
    ) -> AppResult<ChatbotRequest> {
        if question.trim().is_empty() {
            return Err(AppError::EmptyField("question"));
        }

        let answer = Self::answer(catalog, question);
        let record = ChatbotRequest {
            timestamp: now_timestamp(),
            requester: requester.trim().to_string(),
            question: question.trim().to_string(),
            answered: answer.is_some(),
            answer: answer.unwrap_or_default(),
        };

        csv_log::append(log, &record)?;
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    fn catalog() -> Catalog {
        let headers: Vec<String> = ["제품코드", "제품명", "용도", "소비기한", "생산실적(2023)", "생산실적(2024)"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let row = |vals: [&str; 6]| {
            Product::new(
                headers
                    .iter()
                    .cloned()
                    .zip(vals.iter().map(|v| v.to_string()))
                    .collect(),
            )
        };
        let products = vec![
            row(["P001", "고구마칩", "스낵", "제조일로부터 9개월", "10000", "12,500"]),
            row(["P002", "고구마칩 매운맛", "스낵", "6개월", "", ""]),
        ];
        Catalog::from_parts(headers, products, "제품코드", "제품명").unwrap()
    }

    #[test]
    fn answers_field_of_mentioned_product() {
        let c = catalog();
        let a = ChatbotLogic::answer(Some(&c), "P001 소비기한 알려줘").unwrap();
        assert_eq!(a, "고구마칩 소비기한: 제조일로부터 9개월");
    }

    #[test]
    fn longest_mentioned_name_wins() {
        let c = catalog();
        let a = ChatbotLogic::answer(Some(&c), "고구마칩 매운맛 소비기한은?").unwrap();
        assert!(a.contains("6개월"));
    }

    #[test]
    fn production_question_lists_years() {
        let c = catalog();
        let a = ChatbotLogic::answer(Some(&c), "p001 생산량은?").unwrap();
        assert_eq!(a, "고구마칩 생산실적: 2023년 10,000, 2024년 12,500");
    }

    #[test]
    fn falls_back_to_faq_then_none() {
        let c = catalog();
        assert!(
            ChatbotLogic::answer(Some(&c), "VOC 등록 방법")
                .unwrap()
                .contains("voc add")
        );
        assert!(ChatbotLogic::answer(None, "점심 메뉴 뭐야").is_none());
        assert!(ChatbotLogic::answer(None, "   ").is_none());
    }

    #[test]
    fn every_question_is_logged() {
        let log = env::temp_dir().join("fportal_chatbot_log.csv");
        fs::remove_file(&log).ok();
        let c = catalog();

        let r1 = ChatbotLogic::ask(&log, Some(&c), "김민수", "P001 용도").unwrap();
        let r2 = ChatbotLogic::ask(&log, Some(&c), "김민수", "점심 메뉴").unwrap();
        assert!(r1.answered);
        assert!(!r2.answered);

        let rows: Vec<ChatbotRequest> = csv_log::load(&log).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].question, "점심 메뉴");
    }
}
