//! Core business logic modules.

pub mod persisted;
pub mod query;
pub mod store;

pub use store::{ImportMode, ImportSummary, MovieStore};
