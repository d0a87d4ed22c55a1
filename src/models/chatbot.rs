use crate::models::record::LogRecord;
use serde::{Deserialize, Serialize};

/// One row of `chatbot_requests.csv`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatbotRequest {
    pub timestamp: String,
    pub requester: String,
    pub question: String,
    pub answered: bool,
    pub answer: String,
}

impl LogRecord for ChatbotRequest {
    const HEADERS: &'static [&'static str] =
        &["timestamp", "requester", "question", "answered", "answer"];
    const LABEL: &'static str = "Chatbot requests";

    fn to_row(&self) -> Vec<String> {
        vec![
            self.timestamp.clone(),
            self.requester.clone(),
            self.question.clone(),
            if self.answered { "Y" } else { "N" }.to_string(),
            self.answer.clone(),
        ]
    }
}
