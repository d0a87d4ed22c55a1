pub mod ask;
pub mod backup;
pub mod config;
pub mod docs;
pub mod export;
pub mod init;
pub mod log;
pub mod production;
pub mod products;
pub mod request;
pub mod search;
pub mod voc;
