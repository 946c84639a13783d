//! Data models.

pub mod config;
pub mod movie;
pub mod vocabulary;

pub use movie::{MediaType, Movie, MovieInput, MovieUpdate, Scene, SceneInput};
