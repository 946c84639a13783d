//! CLI command implementations.

pub mod catalog;
pub mod export_import;
pub mod movie;
pub mod scene;

use crate::core::MovieStore;
use crate::models::config::Config;
use crate::storage::{FileSlot, Slot};
use crate::Error;

/// Open the collection described by the configuration.
pub fn open_store(config: &Config) -> MovieStore<FileSlot> {
    tracing::debug!("Data directory: {}", config.data_dir.display());
    MovieStore::open_with_key(FileSlot::new(&config.data_dir), config.collection_key.clone())
}

/// Resolve a full movie id from an exact id or a unique prefix.
pub fn resolve_movie_id<S: Slot>(store: &MovieStore<S>, id: &str) -> crate::Result<String> {
    if store.movies().iter().any(|m| m.id == id) {
        return Ok(id.to_string());
    }

    let mut candidates = store.movies().iter().filter(|m| m.id.starts_with(id));
    match (candidates.next(), candidates.next()) {
        (Some(movie), None) if !id.is_empty() => Ok(movie.id.clone()),
        (Some(_), Some(_)) => Err(Error::validation(format!(
            "id prefix '{}' matches more than one movie",
            id
        ))),
        _ => Err(Error::MovieNotFound(id.to_string())),
    }
}

/// Shorten a title for table output.
pub(crate) fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        format!(
            "{}...",
            text.chars().take(max_chars.saturating_sub(3)).collect::<String>()
        )
    } else {
        text.to_string()
    }
}

/// Short form of an id for tables.
pub(crate) fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}
