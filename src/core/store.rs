//! Movie collection store - CRUD over movies and their scenes.

use crate::core::persisted::Persisted;
use crate::models::config::DEFAULT_COLLECTION_KEY;
use crate::models::{Movie, MovieInput, MovieUpdate, Scene, SceneInput};
use crate::storage::Slot;
use std::collections::HashSet;

/// How imported movies are combined with the current collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportMode {
    /// Discard the current collection.
    Replace,
    /// Keep the current collection and add movies whose id is new.
    Merge,
}

/// Outcome of an import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Movies added to the collection
    pub added: usize,
    /// Movies skipped because their id already existed
    pub skipped: usize,
    /// Collection size after the import
    pub total: usize,
}

/// The movie collection, persisted to a single slot.
///
/// New movies are prepended, so the collection is most-recent-first.
/// Lookups that miss are no-ops rather than errors, and persistence
/// failures never fail an operation.
#[derive(Debug)]
pub struct MovieStore<S: Slot> {
    movies: Persisted<Vec<Movie>, S>,
}

impl<S: Slot> MovieStore<S> {
    /// Open the collection stored under the default key.
    pub fn open(slot: S) -> Self {
        Self::open_with_key(slot, DEFAULT_COLLECTION_KEY)
    }

    /// Open the collection stored under `key`.
    pub fn open_with_key<K: Into<String>>(slot: S, key: K) -> Self {
        let mut movies: Persisted<Vec<Movie>, S> = Persisted::load(slot, key, Vec::new());

        let needs_ids = movies
            .get()
            .iter()
            .any(|m| m.id.is_empty() || m.scenes.iter().any(|s| s.id.is_empty()));
        if needs_ids {
            let repaired = movies.update(|movies| {
                movies.iter_mut().map(Movie::normalize).filter(|c| *c).count()
            });
            tracing::info!("Assigned missing ids to {} stored movies", repaired);
        }

        tracing::debug!("Opened collection with {} movies", movies.get().len());
        Self { movies }
    }

    /// All movies, most recently added first.
    pub fn movies(&self) -> &[Movie] {
        self.movies.get()
    }

    /// Number of movies.
    pub fn len(&self) -> usize {
        self.movies.get().len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.movies.get().is_empty()
    }

    /// Underlying slot.
    pub fn slot(&self) -> &S {
        self.movies.slot()
    }

    /// Add a movie built from `input` at the front of the collection.
    pub fn add_movie(&mut self, input: MovieInput) -> Movie {
        let movie = Movie::new(input);
        tracing::debug!("Adding movie {} ({})", movie.id, movie.title);
        warn_non_finite_rating(&movie.id, Some(movie.rating));

        let created = movie.clone();
        self.movies.update(|movies| movies.insert(0, movie));
        created
    }

    /// Merge `updates` over the movie with `id`.
    ///
    /// Returns false if no movie matched; the collection is left unchanged.
    pub fn update_movie(&mut self, id: &str, updates: MovieUpdate) -> bool {
        warn_non_finite_rating(id, updates.rating);
        let found = self.movies.update(|movies| {
            match movies.iter_mut().find(|m| m.id == id) {
                Some(movie) => {
                    updates.apply_to(movie);
                    true
                }
                None => false,
            }
        });

        if found {
            tracing::debug!("Updated movie {}", id);
        } else {
            tracing::debug!("Update skipped, movie {} not found", id);
        }
        found
    }

    /// Remove the movie with `id` along with its scenes.
    ///
    /// Returns false if no movie matched.
    pub fn delete_movie(&mut self, id: &str) -> bool {
        let removed = self.movies.update(|movies| {
            match movies.iter().position(|m| m.id == id) {
                Some(index) => {
                    movies.remove(index);
                    true
                }
                None => false,
            }
        });

        tracing::debug!("Delete movie {}: removed={}", id, removed);
        removed
    }

    /// Look up a movie by id.
    pub fn get_movie(&self, id: &str) -> Option<Movie> {
        self.movies.get().iter().find(|m| m.id == id).cloned()
    }

    /// Append a new scene to the movie with `movie_id`.
    ///
    /// Returns `None` if no movie matched; the collection is left unchanged.
    pub fn add_scene(&mut self, movie_id: &str, input: SceneInput) -> Option<Scene> {
        let added = self.movies.update(|movies| {
            let movie = movies.iter_mut().find(|m| m.id == movie_id)?;
            let scene = Scene::new(input);
            movie.scenes.push(scene.clone());
            Some(scene)
        });

        match &added {
            Some(scene) => tracing::debug!("Added scene {} to movie {}", scene.id, movie_id),
            None => tracing::debug!("Scene not added, movie {} not found", movie_id),
        }
        added
    }

    /// Remove the scene with `scene_id` from the movie with `movie_id`.
    ///
    /// Returns false if either id is unknown.
    pub fn delete_scene(&mut self, movie_id: &str, scene_id: &str) -> bool {
        let removed = self.movies.update(|movies| {
            let Some(movie) = movies.iter_mut().find(|m| m.id == movie_id) else {
                return false;
            };
            let before = movie.scenes.len();
            movie.scenes.retain(|s| s.id != scene_id);
            movie.scenes.len() != before
        });

        tracing::debug!(
            "Delete scene {} from movie {}: removed={}",
            scene_id,
            movie_id,
            removed
        );
        removed
    }

    /// Bring in movies from a backup.
    pub fn import(&mut self, incoming: Vec<Movie>, mode: ImportMode) -> ImportSummary {
        let summary = self.movies.update(|movies| {
            let mut summary = ImportSummary::default();

            if mode == ImportMode::Replace {
                movies.clear();
            }

            let mut seen: HashSet<String> = movies.iter().map(|m| m.id.clone()).collect();
            for mut movie in incoming {
                movie.normalize();
                if seen.insert(movie.id.clone()) {
                    movies.push(movie);
                    summary.added += 1;
                } else {
                    summary.skipped += 1;
                }
            }

            summary.total = movies.len();
            summary
        });

        tracing::info!(
            "Imported {} movies ({} skipped), collection now has {}",
            summary.added,
            summary.skipped,
            summary.total
        );
        summary
    }

    /// Serialized form of the whole collection, as written to the slot.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self.movies.get())?)
    }
}

/// JSON has no NaN or infinity, so such ratings are written as `null`
/// and come back as the default rating.
fn warn_non_finite_rating(id: &str, rating: Option<f32>) {
    if let Some(rating) = rating.filter(|r| !r.is_finite()) {
        tracing::warn!(
            "Movie {} has non-finite rating {}, it will reload as the default",
            id,
            rating
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemorySlot;

    fn store() -> MovieStore<MemorySlot> {
        MovieStore::open(MemorySlot::new())
    }

    #[test]
    fn test_add_movie_prepends() {
        let mut store = store();
        let first = store.add_movie(MovieInput::titled("First"));
        let second = store.add_movie(MovieInput::titled("Second"));

        assert_eq!(store.len(), 2);
        assert_eq!(store.movies()[0].id, second.id);
        assert_eq!(store.movies()[1].id, first.id);
    }

    #[test]
    fn test_add_movie_stores_input_as_given() {
        let mut store = store();
        let movie = store.add_movie(MovieInput {
            rating: 42.0,
            ..MovieInput::default()
        });

        assert_eq!(movie.title, "");
        assert_eq!(movie.rating, 42.0);
        assert_eq!(store.get_movie(&movie.id), Some(movie));
    }

    #[test]
    fn test_every_mutation_writes_once() {
        let mut store = store();
        let movie = store.add_movie(MovieInput::titled("A"));
        assert_eq!(store.slot().write_count(), 1);

        store.update_movie(&movie.id, MovieUpdate::default());
        assert_eq!(store.slot().write_count(), 2);

        let scene = store.add_scene(&movie.id, SceneInput::comment("x")).unwrap();
        assert_eq!(store.slot().write_count(), 3);

        store.delete_scene(&movie.id, &scene.id);
        assert_eq!(store.slot().write_count(), 4);

        store.get_movie(&movie.id);
        assert_eq!(store.slot().write_count(), 4);

        store.delete_movie(&movie.id);
        assert_eq!(store.slot().write_count(), 5);
    }

    #[test]
    fn test_returned_records_are_copies() {
        let mut store = store();
        let mut movie = store.add_movie(MovieInput::titled("Before"));
        movie.title = "Changed".to_string();
        movie.scenes.push(Scene::new(SceneInput::comment("sneaky")));

        let stored = store.get_movie(&movie.id).unwrap();
        assert_eq!(stored.title, "Before");
        assert!(stored.scenes.is_empty());
    }

    #[test]
    fn test_add_scene_to_unknown_movie() {
        let mut store = store();
        store.add_movie(MovieInput::titled("A"));
        let before = store.to_json().unwrap();

        assert!(store.add_scene("missing", SceneInput::comment("x")).is_none());
        assert_eq!(store.to_json().unwrap(), before);
    }

    #[test]
    fn test_delete_scene_unknown_ids() {
        let mut store = store();
        let movie = store.add_movie(MovieInput::titled("A"));
        store.add_scene(&movie.id, SceneInput::comment("keep")).unwrap();

        assert!(!store.delete_scene(&movie.id, "missing"));
        assert!(!store.delete_scene("missing", "missing"));
        assert_eq!(store.get_movie(&movie.id).unwrap().scenes.len(), 1);
    }

    #[test]
    fn test_open_assigns_missing_ids() {
        let slot = MemorySlot::with_value(
            DEFAULT_COLLECTION_KEY,
            r#"[{"title":"Old","scenes":[{"comment":"c"}]}]"#,
        );
        let store = MovieStore::open(slot);

        let movie = &store.movies()[0];
        assert!(!movie.id.is_empty());
        assert!(!movie.scenes[0].id.is_empty());
        assert_eq!(store.slot().write_count(), 1);
    }

    #[test]
    fn test_open_well_formed_does_not_write() {
        let slot = MemorySlot::with_value(DEFAULT_COLLECTION_KEY, r#"[{"id":"m1","title":"T"}]"#);
        let store = MovieStore::open(slot);
        assert_eq!(store.len(), 1);
        assert_eq!(store.slot().write_count(), 0);
    }

    #[test]
    fn test_import_merge_skips_known_ids() {
        let mut store = store();
        let existing = store.add_movie(MovieInput::titled("Kept"));

        let mut duplicate = existing.clone();
        duplicate.title = "Duplicate".to_string();
        let fresh = Movie::new(MovieInput::titled("Fresh"));

        let summary = store.import(vec![duplicate, fresh.clone()], ImportMode::Merge);
        assert_eq!(
            summary,
            ImportSummary {
                added: 1,
                skipped: 1,
                total: 2
            }
        );
        assert_eq!(store.get_movie(&existing.id).unwrap().title, "Kept");
        assert!(store.get_movie(&fresh.id).is_some());
    }

    #[test]
    fn test_import_replace() {
        let mut store = store();
        let old = store.add_movie(MovieInput::titled("Old"));
        let new = Movie::new(MovieInput::titled("New"));

        let summary = store.import(vec![new.clone()], ImportMode::Replace);
        assert_eq!(summary.total, 1);
        assert!(store.get_movie(&old.id).is_none());
        assert_eq!(store.movies()[0], new);
    }
}
