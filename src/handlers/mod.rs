pub mod chat;
pub mod data;
pub mod pages;
pub mod user;
