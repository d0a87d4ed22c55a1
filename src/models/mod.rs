pub mod chatbot;
pub mod doc;
pub mod product;
pub mod production;
pub mod record;
pub mod request;
pub mod voc;
