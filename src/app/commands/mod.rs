pub mod ask;
pub mod chat;
pub mod pages;
pub mod prompt;
pub mod status;
