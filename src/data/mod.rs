pub mod models;
pub mod repositories;
pub mod store;

pub use store::{JsonStore, Loaded, StoreError};
