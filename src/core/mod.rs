pub mod attachments;
pub mod auth;
pub mod backup;
pub mod catalog;
pub mod category;
pub mod chatbot;
pub mod docs;
pub mod export;
pub mod log;
pub mod production;
pub mod requests;
pub mod voc;
