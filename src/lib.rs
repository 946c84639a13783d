//! Cinelog Library
//!
//! A personal movie and TV show log: titles, ratings, genres, tags, a
//! review and memorable scenes per title, kept in a durable key-value slot.

pub mod cli;
pub mod core;
pub mod error;
pub mod models;
pub mod storage;

pub use error::{Error, Result};
